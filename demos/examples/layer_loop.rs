// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer loop.
//!
//! Drives a dropdown through a scroll container: open, a burst of scroll events that
//! coalesce into one frame, an outside click that asks the consumer to close, and a
//! stale frame that arrives after teardown.
//!
//! Run:
//! - `cargo run -p understory_demos --example layer_loop`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Rect, Size};
use understory_anchor::{Ancestor, AncestorChain, BoundaryProvider, Options, Placement};
use understory_layer::{FrameScheduler, LayerController, Listeners, Measure, Signals, Skip};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Node {
    Body,
    Button,
    Menu,
}

struct Page {
    chain: AncestorChain,
    button: Rect,
    scroll_y: f64,
    listening: bool,
    frames: u32,
}

impl Page {
    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }
}

impl BoundaryProvider for Page {
    fn ancestors(&self) -> impl Iterator<Item = Ancestor> + '_ {
        self.chain.ancestors()
    }

    fn viewport(&self) -> Rect {
        self.chain.viewport
    }
}

impl Measure for Page {
    type Node = Node;

    fn trigger(&self) -> Node {
        Node::Button
    }

    fn layer(&self) -> Node {
        Node::Menu
    }

    fn trigger_bounds(&self) -> Option<Rect> {
        Some(self.button - kurbo::Vec2::new(0.0, self.scroll_y))
    }
}

impl Listeners for Page {
    fn attach(&mut self, signals: Signals) {
        println!("  attach {signals:?}");
        self.listening = true;
    }

    fn release(&mut self) {
        println!("  release");
        self.listening = false;
    }
}

impl FrameScheduler for Page {
    fn request_frame(&mut self) {
        self.frames += 1;
    }

    fn cancel_frame(&mut self) {
        println!("  cancel frame");
    }
}

fn main() {
    let page = Page {
        chain: AncestorChain::new(Rect::new(0.0, 0.0, 1024.0, 768.0))
            .with(Ancestor::scrolling(Rect::new(0.0, 0.0, 600.0, 400.0))),
        button: Rect::new(40.0, 200.0, 140.0, 230.0),
        scroll_y: 0.0,
        listening: false,
        frames: 0,
    };
    let options = Options::builder()
        .placement(Placement::BottomLeft)
        .possible_placements([Placement::BottomLeft, Placement::TopLeft])
        .auto(true)
        .snap(true)
        .trigger_offset(4.0)
        .layer_dimensions(Size::new(180.0, 220.0))
        .build()
        .unwrap();

    let want_open = Rc::new(Cell::new(false));
    let mut menu = LayerController::new(page, options);
    let close = want_open.clone();
    menu.on_outside_click(move || close.set(false));

    println!("== Open ==");
    want_open.set(true);
    menu.set_open(want_open.get());
    let r = menu.latest().unwrap();
    println!("  {} at {:?}", r.placement, r.layer);
    // 234 + 220 would pass the container's bottom edge at 400.
    assert_eq!(r.placement, Placement::TopLeft);

    println!("== Scroll burst ==");
    for y in [40.0, 80.0, 120.0] {
        menu.host_mut().scroll_to(y);
        menu.notify(Signals::SCROLL);
    }
    assert_eq!(menu.host().frames, 1);
    let r = menu.on_frame().unwrap();
    println!("  {} at {:?}", r.placement, r.layer);
    // The button now sits at y=80..110; below it fits.
    assert_eq!(r.placement, Placement::BottomLeft);
    assert_eq!(r.layer, Rect::new(40.0, 114.0, 220.0, 334.0));

    println!("== Outside click ==");
    menu.host_mut().scroll_to(0.0);
    menu.notify(Signals::SCROLL);
    assert!(!menu.pointer_down(&[Node::Body, Node::Menu]));
    assert!(menu.pointer_down(&[Node::Body]));
    menu.set_open(want_open.get());
    assert!(!menu.is_open());
    assert!(!menu.host().listening);

    println!("== Stale frame ==");
    assert_eq!(menu.on_frame(), Err(Skip::Inactive));
    assert!(menu.latest().is_none());
    println!("  ignored");
}

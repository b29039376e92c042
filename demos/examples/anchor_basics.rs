// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor basics.
//!
//! Resolves a layer near the corner of a small viewport three ways: pinned placement
//! with sliding, pinned placement snapped, and automatic selection from a parsed list.
//!
//! Run:
//! - `cargo run -p understory_demos --example anchor_basics`

use kurbo::{Point, Rect, Size};
use understory_anchor::{AncestorChain, Arrow, Options, Placement, PlacementSet, Side, resolve_in};

fn main() {
    let chain = AncestorChain::new(Rect::new(0.0, 0.0, 400.0, 300.0));
    let size = Size::new(120.0, 50.0);

    // Pinned below a trigger near the right edge; the layer slides left to stay visible.
    let trigger = Rect::new(350.0, 40.0, 380.0, 60.0);
    let slid = Options::builder()
        .placement(Placement::BottomCenter)
        .trigger_offset(6.0)
        .layer_dimensions(size)
        .build()
        .unwrap();
    let r = resolve_in(trigger, &chain, &slid, None);
    println!("== Slide ==\n  {:?} anchor={:?} snapped={}", r.layer, r.anchor, r.was_snapped);
    assert_eq!(r.layer, Rect::new(280.0, 66.0, 400.0, 116.0));
    assert_eq!(r.anchor, Point::new(340.0, 66.0));
    assert!(!r.was_snapped);

    // Same placement, snapped: the enumerated rectangle is used as is.
    let snapped = Options::builder()
        .placement(Placement::BottomCenter)
        .snap(true)
        .trigger_offset(6.0)
        .layer_dimensions(size)
        .build()
        .unwrap();
    let r = resolve_in(trigger, &chain, &snapped, None);
    println!("== Snap ==\n  {:?} fit={:.3}", r.layer, r.fit);
    assert_eq!(r.layer, Rect::new(305.0, 66.0, 425.0, 116.0));
    assert!(r.was_snapped);

    // Automatic selection from a parsed list, with an arrow.
    let set: PlacementSet = "bottom-center, top-center, right-center".parse().unwrap();
    println!("== Auto ==\n  candidates: {set}");
    let auto = Options::builder()
        .placement(Placement::BottomCenter)
        .possible_placements(set)
        .auto(true)
        .trigger_offset(6.0)
        .arrow_offset(10.0)
        .layer_dimensions(size)
        .build()
        .unwrap();
    let low = Rect::new(350.0, 260.0, 380.0, 280.0);
    let r = resolve_in(low, &chain, &auto, None);
    println!("  {} on {} at {:?}, arrow {:?}", r.placement, r.side, r.layer, r.arrow);
    assert_eq!(r.placement, Placement::TopCenter);
    assert_eq!(r.side, Side::Top);
    assert_eq!(r.layer, Rect::new(280.0, 204.0, 400.0, 254.0));
    assert_eq!(
        r.arrow,
        Some(Arrow {
            edge: Side::Bottom,
            offset: 85.0
        })
    );

    let style = serde_json::to_string(&r.style(false)).unwrap();
    println!("  style: {style}");
    assert_eq!(style, r#"{"left":280.0,"top":204.0}"#);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_anchor::{
    Ancestor, AncestorChain, LayerDimensions, Options, Placement, Side, resolve_boundary,
    resolve_in,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_triggers(count: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * 1000.0;
            let y = rng.next_f64() * 700.0;
            Rect::new(x, y, x + 24.0 + rng.next_f64() * 80.0, y + 24.0)
        })
        .collect()
}

fn gen_chain(depth: usize) -> AncestorChain {
    let mut chain = AncestorChain::new(Rect::new(0.0, 0.0, 1024.0, 768.0));
    for i in 0..depth {
        let inset = i as f64 * 4.0;
        let r = Rect::new(inset, inset, 1024.0 - inset, 768.0 - inset);
        chain = chain.with(if i % 2 == 0 {
            Ancestor::scrolling(r)
        } else {
            Ancestor::visible(r)
        });
    }
    chain
}

fn options(auto: bool, snap: bool, dims: LayerDimensions) -> Options {
    Options::builder()
        .placement(Placement::BottomCenter)
        .auto(auto)
        .snap(snap)
        .trigger_offset(6.0)
        .arrow_offset(8.0)
        .layer_dimensions(dims)
        .build()
        .unwrap()
}

fn bench_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary");
    for depth in [0_usize, 8, 64] {
        let chain = gen_chain(depth);
        group.bench_function(format!("resolve_depth{}", depth), |b| {
            b.iter(|| black_box(resolve_boundary(black_box(&chain), true, 4.0)));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let triggers = gen_triggers(1024, 0x5eed);
    let chain = gen_chain(8);
    group.throughput(Throughput::Elements(triggers.len() as u64));

    let fixed = || LayerDimensions::from(Size::new(200.0, 120.0));
    let cases = [
        ("pinned_slide", options(false, false, fixed())),
        ("auto_slide", options(true, false, fixed())),
        ("auto_snap", options(true, true, fixed())),
        (
            "auto_by_side",
            options(
                true,
                false,
                LayerDimensions::by_side(|side| match side {
                    Side::Left | Side::Right => Size::new(160.0, 200.0),
                    _ => Size::new(200.0, 120.0),
                }),
            ),
        ),
    ];
    for (name, opts) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let mut previous = None;
                for t in &triggers {
                    let r = resolve_in(*t, &chain, opts, previous);
                    previous = Some(r.placement);
                    black_box(r);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_boundary, bench_resolve);
criterion_main!(benches);

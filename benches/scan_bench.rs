use criterion::{criterion_group, criterion_main, Criterion};
use glam::DVec3;
use horsedebug::entity::{Attributes, EntityKind, EntitySnapshot};
use horsedebug::headless::{RecordingWorld, Scene};
use horsedebug::host::Camera;
use horsedebug::overlay::render_world;
use horsedebug::scan::GroupScan;
use std::hint::black_box;

fn setup_herd(n: u32) -> Vec<EntitySnapshot> {
    // Spiral out past the cutoff so roughly half the herd is in range.
    (0..n)
        .map(|i| {
            let angle = i as f64 * 0.37;
            let radius = (i as f64 / n as f64) * 128.0;
            let position = DVec3::new(radius * angle.cos(), 64.0, radius * angle.sin());
            let t = (i % 17) as f64 / 16.0;
            EntitySnapshot::new(
                i,
                "minecraft:horse",
                EntityKind::Horse {
                    color: i % 7,
                    marking: i % 5,
                },
                position,
            )
            .with_attributes(Attributes::new(0.4 + 0.6 * t, 0.45 + 0.9 * (1.0 - t), 15.0 + 15.0 * t))
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let player = DVec3::new(0.0, 64.0, 0.0);
    let herd = setup_herd(500);

    c.bench_function("group_scan (500 horses)", |b| {
        b.iter(|| GroupScan::scan(black_box(player), black_box(&herd)).len())
    });

    let scene = Scene::new(Some(player), herd.clone());
    let camera = Camera::at(player);
    c.bench_function("render_world (500 horses)", |b| {
        b.iter(|| {
            let mut surface = RecordingWorld::default();
            render_world(black_box(&scene), &camera, &mut surface)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

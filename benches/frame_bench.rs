//! Benchmarks for per-frame camera updates.
#![allow(missing_docs, unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use lookabout::camera::CameraController;
use lookabout::input::{FrameInput, InputEvent, InputProcessor, MoveDirection};
use lookabout::options::CameraOptions;

fn look_benchmark(c: &mut Criterion) {
    let mut controller = CameraController::new(2.0, 45.0);
    c.bench_function("process_look", |b| {
        b.iter(|| controller.process_look(black_box(3.0), black_box(-1.5)));
    });
}

fn frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_frame");

    let frame = FrameInput {
        held: [MoveDirection::Forward, MoveDirection::Right]
            .into_iter()
            .collect(),
        look: Vec2::new(2.0, 0.5),
        zoom: -0.5,
        dt: 16.0,
    };

    let mut fly = CameraController::new(2.0, 45.0);
    group.bench_function("fly", |b| {
        b.iter(|| fly.apply_frame(black_box(&frame)));
    });

    let mut walk =
        CameraController::with_options(1.5, 45.0, CameraOptions::first_person(1.5));
    group.bench_function("walk", |b| {
        b.iter(|| walk.apply_frame(black_box(&frame)));
    });

    group.finish();
}

fn input_to_view_benchmark(c: &mut Criterion) {
    let mut controller = CameraController::new(2.0, 45.0);
    let mut input = InputProcessor::default();
    input.handle_event(InputEvent::key("KeyW", true));

    c.bench_function("input_to_view", |b| {
        b.iter(|| {
            input.handle_event(InputEvent::MouseMotion { dx: 1.0, dy: 0.5 });
            let frame = input.end_frame(16.0);
            controller.apply_frame(&frame);
            black_box(controller.view_transform())
        });
    });
}

criterion_group!(
    benches,
    look_benchmark,
    frame_benchmark,
    input_to_view_benchmark
);
criterion_main!(benches);

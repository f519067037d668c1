use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Vec3};
use rand::prelude::*;
use sprite_camera::{Camera, CameraMovement, Sprite};

/// Fixed seed so every run sees the same workload
fn mouse_deltas(count: usize) -> Vec<(f32, f32)> {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    (0..count)
        .map(|_| (rng.gen_range(-20.0..20.0), rng.gen_range(-20.0..20.0)))
        .collect()
}

fn ready_camera() -> Camera {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y);
    camera.set_viewport(1280, 720);
    camera.look(0.0, 0.0);
    camera
}

fn bench_view_matrix(c: &mut Criterion) {
    let camera = ready_camera();
    c.bench_function("view_matrix", |b| {
        b.iter(|| black_box(&camera).view_matrix())
    });
}

fn bench_projection_matrix(c: &mut Criterion) {
    let camera = ready_camera();
    c.bench_function("projection_matrix", |b| {
        b.iter(|| black_box(&camera).projection_matrix())
    });
}

/// Recompute-on-access against reusing a cached uniform: the gap is what a
/// matrix cache could save per frame
fn bench_frame_uniform(c: &mut Criterion) {
    let camera = ready_camera();
    let model = Sprite::default().model_matrix();
    let cached = camera.to_uniform(model);

    let mut group = c.benchmark_group("frame_uniform");
    group.bench_function("recompute", |b| {
        b.iter(|| black_box(&camera).to_uniform(black_box(model)))
    });
    group.bench_function("cached", |b| b.iter(|| black_box(cached)));
    group.finish();
}

fn bench_mouse_look(c: &mut Criterion) {
    let mut group = c.benchmark_group("mouse_look");

    for events in [1usize, 10, 100] {
        let deltas = mouse_deltas(events);
        group.bench_with_input(BenchmarkId::from_parameter(events), &deltas, |b, deltas| {
            let mut camera = ready_camera();
            b.iter(|| {
                for &(dx, dy) in deltas {
                    camera.look(black_box(dx), black_box(dy));
                }
                camera.view_matrix()
            })
        });
    }

    group.finish();
}

fn bench_movement(c: &mut Criterion) {
    c.bench_function("process_keyboard_wasd", |b| {
        let mut camera = ready_camera();
        b.iter(|| {
            for direction in [
                CameraMovement::Forward,
                CameraMovement::Left,
                CameraMovement::Backward,
                CameraMovement::Right,
            ] {
                camera.process_keyboard(direction, black_box(1.0 / 60.0));
            }
            black_box(camera.position)
        })
    });
}

fn bench_view_projection(c: &mut Criterion) {
    let camera = ready_camera();
    c.bench_function("view_projection", |b| {
        b.iter(|| -> Mat4 { black_box(&camera).view_projection_matrix() })
    });
}

criterion_group!(
    benches,
    bench_view_matrix,
    bench_projection_matrix,
    bench_frame_uniform,
    bench_mouse_look,
    bench_movement,
    bench_view_projection,
);

criterion_main!(benches);

use std::time::Duration;

use bevy::math::Vec3;
use criterion::{black_box, criterion_group, Criterion};
use orrery::physics::orbits::animator::OrbitAnimator;
use orrery::physics::orbits::components::{CircularOrbit, OrbitalPeriod, OrbitalRadius};

/// A crowded system, far more bodies than the default scene
fn get_orbits(nb_bodies: usize) -> Vec<CircularOrbit> {
    (0..nb_bodies)
        .map(|i| {
            CircularOrbit::new(
                "bench",
                OrbitalRadius(1.0 + i as f64 * 0.1),
                OrbitalPeriod(0.1 + i as f64 * 0.05),
            )
            .unwrap()
        })
        .collect()
}

fn bench_animate(c: &mut Criterion) {
    let animator = OrbitAnimator::default();
    let orbits = get_orbits(10_000);
    let mut positions = vec![Vec3::ZERO; orbits.len()];
    c.bench_function("animate_10k_bodies", |b| {
        b.iter(|| {
            animator.animate(
                black_box(Duration::from_millis(123_456)),
                black_box(2.0),
                orbits.iter().zip(positions.iter_mut()),
            );
        })
    });
}

fn bench_epoch_time(c: &mut Criterion) {
    let animator = OrbitAnimator::default();
    let orbits = get_orbits(8);
    c.bench_function("position_epoch_time", |b| {
        b.iter(|| {
            for orbit in &orbits {
                black_box(animator.position(
                    black_box(Duration::from_millis(1_700_000_000_000)),
                    1.0,
                    orbit,
                ));
            }
        })
    });
}

criterion_group!(benches, bench_animate, bench_epoch_time);

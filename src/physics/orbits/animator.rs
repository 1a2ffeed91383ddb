//! Moves bodies around their circular orbits.
//!
//! Every frame the position of each body is derived from the absolute time,
//! never from the previous frame, so nothing drifts no matter how uneven
//! the frame rate is.

use std::{f64::consts::TAU, time::Duration};

use bevy::{
    app::{App, Plugin, Update},
    ecs::{
        event::{Event, EventReader},
        schedule::{IntoSystemConfigs, IntoSystemSetConfigs, SystemSet},
        system::{Query, Res, ResMut},
    },
    log::{info, warn},
    math::Vec3,
    time::Time,
    transform::components::Transform,
};

use super::components::CircularOrbit;
use crate::physics::util::clock::{AnimationClock, TimeOrigin};

/// Scaled time units per millisecond at a speed multiplier of 1.
/// A body with period 1.0 sweeps one radian every 100 seconds.
pub const TIME_SCALE_PER_MS: f64 = 0.00001;

/// Anything with a position the animator can write to.
pub trait OrbitalPosition {
    /// Place the body at `(x, 0, z)` in the orbital plane
    fn set_orbital_position(&mut self, x: f64, z: f64);
}

impl OrbitalPosition for Transform {
    fn set_orbital_position(&mut self, x: f64, z: f64) {
        self.translation.x = x as f32;
        self.translation.y = 0.0;
        self.translation.z = z as f32;
    }
}

impl OrbitalPosition for Vec3 {
    fn set_orbital_position(&mut self, x: f64, z: f64) {
        *self = Vec3::new(x as f32, 0.0, z as f32);
    }
}

/// The per-frame orbit computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitAnimator {
    time_scale: f64,
}

impl Default for OrbitAnimator {
    fn default() -> Self {
        Self::new(TIME_SCALE_PER_MS)
    }
}

impl OrbitAnimator {
    pub fn new(time_scale: f64) -> Self {
        Self { time_scale }
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// `t` in milliseconds, scaled by the time constant and the speed multiplier.
    /// Whole milliseconds convert exactly, and the constant is multiplied
    /// by the speed before it touches `t`.
    pub fn scaled_time(&self, t: Duration, speed: f64) -> f64 {
        let millis = t.as_secs() as f64 * 1000.0 + t.subsec_nanos() as f64 / 1_000_000.0;
        millis * (self.time_scale * speed)
    }

    /// The angle of the body in radians, always within `[0, 2π)`
    pub fn angle(&self, t: Duration, speed: f64, orbit: &CircularOrbit) -> f64 {
        let angle = (self.scaled_time(t, speed) / orbit.period().0).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if angle >= TAU {
            0.0
        } else {
            angle
        }
    }

    /// The `(x, z)` position of the body on its orbit
    pub fn position(&self, t: Duration, speed: f64, orbit: &CircularOrbit) -> (f64, f64) {
        let angle = self.angle(t, speed, orbit);
        let radius = orbit.radius().0;
        (radius * angle.cos(), radius * angle.sin())
    }

    /// Writes the position of every body for time `t`
    pub fn animate<'a, P, I>(&self, t: Duration, speed: f64, bodies: I)
    where
        P: OrbitalPosition,
        I: IntoIterator<Item = (&'a CircularOrbit, P)>,
    {
        for (orbit, mut renderable) in bodies {
            let (x, z) = self.position(t, speed, orbit);
            renderable.set_orbital_position(x, z);
        }
    }
}

/// Lets `Mut<Transform>` and `&mut Transform` go straight into [`OrbitAnimator::animate`]
impl<T: OrbitalPosition + ?Sized> OrbitalPosition for &mut T {
    fn set_orbital_position(&mut self, x: f64, z: f64) {
        (**self).set_orbital_position(x, z);
    }
}

impl<'w, T: OrbitalPosition> OrbitalPosition for bevy::ecs::world::Mut<'w, T> {
    fn set_orbital_position(&mut self, x: f64, z: f64) {
        (**self).set_orbital_position(x, z);
    }
}

/// A request from the UI to change the speed multiplier
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SetTimeSpeed(pub f64);

/// A request from the UI to change where time is measured from
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTimeOrigin(pub TimeOrigin);

/// Ordering of the per-frame work
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrbitSet {
    /// Apply control changes
    Controls,
    /// Move the bodies
    Animate,
}

/// Plugin that animates every [`CircularOrbit`] each frame
#[derive(Default)]
pub struct OrbitPlugin {
    pub animator: OrbitAnimator,
    pub clock: AnimationClock,
}

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.clock)
            .insert_resource(OrbitAnimatorRes(self.animator))
            .add_event::<SetTimeSpeed>()
            .add_event::<SetTimeOrigin>()
            .configure_sets(Update, (OrbitSet::Controls, OrbitSet::Animate).chain())
            .add_systems(
                Update,
                (
                    OrbitPlugin::apply_time_speed_system,
                    OrbitPlugin::apply_time_origin_system,
                )
                    .in_set(OrbitSet::Controls),
            )
            .add_systems(
                Update,
                OrbitPlugin::animate_orbits_system.in_set(OrbitSet::Animate),
            );
        info!(
            "Orbit animation started at speed {} from {}",
            self.clock.speed(),
            self.clock.origin()
        );
    }
}

/// The animator as a resource, so apps can run at a different time scale
#[derive(bevy::ecs::system::Resource, Debug, Clone, Copy)]
pub struct OrbitAnimatorRes(pub OrbitAnimator);

/// Bevy Systems
impl OrbitPlugin {
    /// Applies the latest speed requests, refusing invalid ones
    pub fn apply_time_speed_system(
        mut requests: EventReader<SetTimeSpeed>,
        mut clock: ResMut<AnimationClock>,
    ) {
        for SetTimeSpeed(speed) in requests.read() {
            if let Err(err) = clock.set_speed(*speed) {
                warn!("Ignoring time speed request: {}", err);
            }
        }
    }

    pub fn apply_time_origin_system(
        mut requests: EventReader<SetTimeOrigin>,
        mut clock: ResMut<AnimationClock>,
    ) {
        for SetTimeOrigin(origin) in requests.read() {
            clock.set_origin(*origin);
        }
    }

    /// Moves every orbiting body to where it should be at the current time
    pub fn animate_orbits_system(
        time: Res<Time>,
        clock: Res<AnimationClock>,
        animator: Res<OrbitAnimatorRes>,
        mut bodies: Query<(&CircularOrbit, &mut Transform)>,
    ) {
        let t = clock.read(&*time);
        animator.0.animate(t, clock.speed(), bodies.iter_mut());
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use bevy::ecs::event::Events;

    use super::*;
    use crate::physics::orbits::components::{OrbitalPeriod, OrbitalRadius, MIN_ORBITAL_PERIOD};
    use crate::physics::util::clock::{ManualClock, TickSource, MAX_TIME_SPEED};

    const EPSILON: f64 = 1e-6;

    macro_rules! assert_approx_eq {
        ($a:expr, $b:expr) => {
            assert!(
                ($a - $b).abs() < EPSILON,
                "Values not approximately equal: {:?} vs {:?}",
                $a,
                $b
            )
        };
    }

    fn orbit(radius: f64, period: f64) -> CircularOrbit {
        CircularOrbit::new("test", OrbitalRadius(radius), OrbitalPeriod(period)).unwrap()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_earth_at_one_scaled_unit() {
        let animator = OrbitAnimator::default();
        let earth = orbit(5.0, 1.0);
        let t = ms(100_000);
        assert_approx_eq!(animator.scaled_time(t, 1.0), 1.0);
        assert_approx_eq!(animator.angle(t, 1.0, &earth), 1.0);
        let (x, z) = animator.position(t, 1.0, &earth);
        assert_approx_eq!(x, 5.0 * 1f64.cos());
        assert_approx_eq!(z, 5.0 * 1f64.sin());
        assert!((x - 2.701).abs() < 1e-3);
        assert!((z - 4.207).abs() < 1e-3);
    }

    #[test]
    fn test_position_stays_on_circle() {
        let animator = OrbitAnimator::default();
        let bodies = [
            orbit(2.0, 0.24),
            orbit(5.0, 1.0),
            orbit(9.0, 11.86),
            orbit(15.0, 164.79),
        ];
        let mut clock = ManualClock::default();
        for _ in 0..500 {
            clock.update(ms(7_919));
            for body in &bodies {
                let (x, z) = animator.position(clock.now(), 3.5, body);
                let r = body.radius().0;
                assert!((x * x + z * z - r * r).abs() < 1e-6 * r * r);
            }
        }
    }

    #[test]
    fn test_angle_is_wrapped() {
        let animator = OrbitAnimator::default();
        let fast = orbit(1.0, 0.01);
        for millis in [0, 1, 999, 123_456, 1_700_000_000_000] {
            let angle = animator.angle(ms(millis), 10.0, &fast);
            assert!((0.0..TAU).contains(&angle), "angle {} out of range", angle);
        }
    }

    #[test]
    fn test_orbit_repeats_after_one_period() {
        let animator = OrbitAnimator::default();
        let mars = orbit(7.0, 2.0);
        let speed = 2.0;
        // One revolution in milliseconds: 2π * period / (scale * speed)
        let revolution_ms = TAU * 2.0 / (TIME_SCALE_PER_MS * speed);
        let start = ms(12_345);
        let (x0, z0) = animator.position(start, speed, &mars);
        for k in 1..4 {
            let later = start + Duration::from_secs_f64(k as f64 * revolution_ms / 1000.0);
            let (x, z) = animator.position(later, speed, &mars);
            assert!((x - x0).abs() < 1e-4 && (z - z0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_double_speed_sweeps_double_angle() {
        let animator = OrbitAnimator::default();
        let body = orbit(3.0, 10.0);
        // Short enough that nothing wraps
        let t = ms(50_000);
        let slow = animator.angle(t, 1.0, &body);
        let fast = animator.angle(t, 2.0, &body);
        assert!(fast < PI);
        assert_approx_eq!(fast, 2.0 * slow);
    }

    #[test]
    fn test_zero_speed_freezes() {
        let animator = OrbitAnimator::default();
        let body = orbit(4.0, 1.0);
        let mut clock = ManualClock::new(ms(1_000));
        let before = animator.position(clock.now(), 0.0, &body);
        clock.update(ms(60_000));
        let after = animator.position(clock.now(), 0.0, &body);
        assert_eq!(before, after);
        assert_eq!(before, (4.0, 0.0));
    }

    #[test]
    fn test_animate_writes_plane_positions() {
        let animator = OrbitAnimator::default();
        let bodies = [orbit(5.0, 1.0), orbit(2.0, 0.5)];
        let mut positions = [Vec3::new(0.0, 3.0, 0.0), Vec3::ZERO];
        animator.animate(
            ms(100_000),
            1.0,
            bodies.iter().zip(positions.iter_mut()),
        );
        assert_eq!(positions[0].y, 0.0);
        assert!((positions[0].x - 5.0 * 1f32.cos()).abs() < 1e-5);
        assert!((positions[1].z - 2.0 * 2f32.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_large_epoch_times_stay_on_circle() {
        let animator = OrbitAnimator::default();
        let body = orbit(15.0, 164.79);
        let (x, z) = animator.position(ms(1_700_000_000_000), 1.0, &body);
        assert!((x.hypot(z) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_epoch_phase_matches_wall_clock_formula() {
        let animator = OrbitAnimator::default();
        let now_ms: u64 = 1_700_000_000_000;
        for (period, speed) in [(0.24, 1.0), (0.62, 1.0), (11.86, 1.0), (164.79, 3.0)] {
            let body = orbit(2.0, period);
            let expected = ((now_ms as f64 * (0.00001 * speed)) / period) % TAU;
            let angle = animator.angle(ms(now_ms), speed, &body);
            assert!(
                (angle - expected).abs() < 1e-6,
                "period {}: {} vs {}",
                period,
                angle,
                expected
            );
        }
    }

    #[test]
    fn test_fastest_orbit_at_top_speed_stays_finite() {
        let animator = OrbitAnimator::default();
        let body = orbit(3.0, MIN_ORBITAL_PERIOD);
        let angle = animator.angle(ms(1_700_000_000_000), MAX_TIME_SPEED, &body);
        assert!((0.0..TAU).contains(&angle));
        let (x, z) = animator.position(ms(1_700_000_000_000), MAX_TIME_SPEED, &body);
        assert!(x.is_finite() && z.is_finite());
        assert!((x.hypot(z) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_time_scale() {
        let animator = OrbitAnimator::new(0.001);
        assert_eq!(animator.time_scale(), 0.001);
        // 1000 ms at 0.001 per ms is one scaled unit
        assert_approx_eq!(animator.scaled_time(ms(1_000), 1.0), 1.0);
        assert_approx_eq!(animator.angle(ms(1_000), 1.0, &orbit(5.0, 1.0)), 1.0);
    }

    fn test_app_with(animator: OrbitAnimator) -> App {
        let mut app = App::new();
        app.insert_resource(Time::<()>::default());
        app.add_plugins(OrbitPlugin {
            animator,
            ..Default::default()
        });
        app
    }

    fn test_app() -> App {
        test_app_with(OrbitAnimator::default())
    }

    #[test]
    fn test_system_uses_plugin_time_scale() {
        let mut app = test_app_with(OrbitAnimator::new(0.001));
        assert_eq!(app.world.resource::<OrbitAnimatorRes>().0.time_scale(), 0.001);
        let earth = app
            .world
            .spawn((orbit(5.0, 1.0), Transform::default()))
            .id();
        advance(&mut app, ms(1_000));
        let translation = app.world.get::<Transform>(earth).unwrap().translation;
        assert!((translation.x - 5.0 * 1f32.cos()).abs() < 1e-4);
        assert!((translation.z - 5.0 * 1f32.sin()).abs() < 1e-4);
    }

    fn advance(app: &mut App, delta: Duration) {
        app.world.resource_mut::<Time>().advance_by(delta);
        app.update();
    }

    #[test]
    fn test_system_moves_bodies() {
        let mut app = test_app();
        let earth = app
            .world
            .spawn((orbit(5.0, 1.0), Transform::from_xyz(5.0, 0.0, 0.0)))
            .id();
        advance(&mut app, ms(100_000));
        let translation = app.world.get::<Transform>(earth).unwrap().translation;
        assert!((translation.x - 5.0 * 1f32.cos()).abs() < 1e-4);
        assert!((translation.z - 5.0 * 1f32.sin()).abs() < 1e-4);
        assert_eq!(translation.y, 0.0);
    }

    #[test]
    fn test_speed_request_applies_before_animation() {
        let mut app = test_app();
        let earth = app
            .world
            .spawn((orbit(5.0, 1.0), Transform::default()))
            .id();
        app.world
            .resource_mut::<Events<SetTimeSpeed>>()
            .send(SetTimeSpeed(0.0));
        advance(&mut app, ms(100_000));
        assert_eq!(app.world.resource::<AnimationClock>().speed(), 0.0);
        let translation = app.world.get::<Transform>(earth).unwrap().translation;
        assert_eq!(translation, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_invalid_speed_request_is_ignored() {
        let mut app = test_app();
        app.world
            .resource_mut::<Events<SetTimeSpeed>>()
            .send(SetTimeSpeed(-3.0));
        advance(&mut app, ms(16));
        assert_eq!(app.world.resource::<AnimationClock>().speed(), 1.0);
    }

    #[test]
    fn test_runaway_speed_request_is_ignored() {
        let mut app = test_app();
        let earth = app
            .world
            .spawn((orbit(5.0, 1.0), Transform::default()))
            .id();
        app.world
            .resource_mut::<Events<SetTimeSpeed>>()
            .send(SetTimeSpeed(1e301));
        advance(&mut app, ms(16));
        assert_eq!(app.world.resource::<AnimationClock>().speed(), 1.0);
        let translation = app.world.get::<Transform>(earth).unwrap().translation;
        assert!(translation.is_finite());
    }

    #[test]
    fn test_origin_request_applies() {
        let mut app = test_app();
        app.world
            .resource_mut::<Events<SetTimeOrigin>>()
            .send(SetTimeOrigin(TimeOrigin::UnixEpoch));
        advance(&mut app, ms(16));
        assert_eq!(
            app.world.resource::<AnimationClock>().origin(),
            TimeOrigin::UnixEpoch
        );
    }
}

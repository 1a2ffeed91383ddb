use bevy::{
    core::Name,
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::{
        event::EventWriter,
        system::{Query, Res},
    },
    math::Vec3,
    transform::components::Transform,
};
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

use crate::{
    config::TimeSpeedConfig,
    entities::celestials::celestial::CelestialIdx,
    physics::{
        orbits::{
            animator::{SetTimeOrigin, SetTimeSpeed},
            components::CircularOrbit,
        },
        util::clock::{AnimationClock, TimeOrigin},
    },
};

/// Where a body is along its orbit, in degrees from the +X axis towards +Z
pub fn orbit_angle_degrees(translation: Vec3) -> f32 {
    translation
        .z
        .atan2(translation.x)
        .to_degrees()
        .rem_euclid(360.0)
}

/// The slider value clamped into the configured range
pub fn clamp_speed(speed: f64, range: &TimeSpeedConfig) -> f64 {
    speed.clamp(range.min, range.max)
}

/// Draws the time control window.
/// Changes are sent as events and applied by the orbit plugin later this frame.
#[allow(clippy::too_many_arguments)]
pub fn time_window_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    clock: Res<AnimationClock>,
    range: Res<TimeSpeedConfig>,
    bodies: Query<(&Name, &CelestialIdx, &CircularOrbit, &Transform)>,
    mut speed_requests: EventWriter<SetTimeSpeed>,
    mut origin_requests: EventWriter<SetTimeOrigin>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);

    let mut speed = clamp_speed(clock.speed(), &range);
    let mut origin = clock.origin();
    egui::Window::new("Time").show(ctx, |ui| {
        ui.label(format!("FPS: {:.0}", fps));
        ui.separator();
        let slider = egui::Slider::new(&mut speed, range.min..=range.max).text("Speed");
        if ui.add(slider).changed() {
            speed_requests.send(SetTimeSpeed(speed));
        }
        if ui.button("Real time").clicked() {
            speed_requests.send(SetTimeSpeed(clamp_speed(1.0, &range)));
        }
        ui.separator();
        ui.label("Measure time from");
        for option in TimeOrigin::iter() {
            ui.radio_value(&mut origin, option, option.to_string());
        }
        if origin != clock.origin() {
            origin_requests.send(SetTimeOrigin(origin));
        }
        ui.separator();
        egui::CollapsingHeader::new("Bodies").show(ui, |ui| {
            let mut rows = bodies.iter().collect::<Vec<_>>();
            rows.sort_by_key(|(_, idx, ..)| **idx);
            for (name, _, orbit, transform) in rows {
                ui.label(format!(
                    "{}: r = {}, T = {}, {:.1}°",
                    name,
                    orbit.radius(),
                    orbit.period(),
                    orbit_angle_degrees(transform.translation)
                ));
            }
        });
    });
}

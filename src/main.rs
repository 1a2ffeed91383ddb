use std::path::Path;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::{log::LogPlugin, prelude::*};
use bevy_egui::EguiPlugin;
use orrery::config::{SolarSystemConfig, DEFAULT_CONFIG_PATH};
use orrery::entities::celestials::celestial::SolarSystem;
use orrery::entities::EntitiesPluginGroup;
use orrery::error::OrreryError;
use orrery::gui::GuiPlugin;
use orrery::physics::PhysicsPluginGroup;

fn main() -> Result<(), OrreryError> {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(LogPlugin {
                level: if cfg!(debug_assertions) {
                    bevy::log::Level::DEBUG
                } else {
                    bevy::log::Level::INFO
                },
                ..Default::default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Orrery".into(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
    );

    // Everything that can be wrong with the config is caught here,
    // before the first frame
    let config = SolarSystemConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
        .map_err(|err| {
            error!("{}", err);
            OrreryError::from(err)
        })?;
    let solar_system = SolarSystem::new(&config).map_err(|err| {
        error!("{}", err);
        err
    })?;
    let clock = config.animation_clock()?;

    app.add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .insert_resource(solar_system)
        .insert_resource(config.time_speed)
        .add_plugins(EntitiesPluginGroup)
        .add_plugins(PhysicsPluginGroup {
            clock,
            ..Default::default()
        })
        .add_plugins(GuiPlugin)
        .run();
    Ok(())
}

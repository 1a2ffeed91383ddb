//! This module contains all the GUI related code.
//! Things that are drawn to via screen coordinates rather than world coordinates.

use bevy::{
    app::{App, AppExit, Plugin, Startup, Update},
    ecs::{
        event::EventWriter,
        query::With,
        schedule::IntoSystemConfigs,
        system::{In, IntoSystem, Query},
    },
    log::error,
    window::PrimaryWindow,
};

use crate::{error::OrreryError, physics::orbits::animator::OrbitSet};

pub mod time_window;

/// The time speed window, plus a startup check that there is somewhere to draw it
pub struct GuiPlugin;

impl Plugin for GuiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            Self::check_collaborators_system.pipe(Self::exit_on_fatal_system),
        )
        .add_systems(
            Update,
            time_window::time_window_system.before(OrbitSet::Controls),
        );
    }
}

/// Bevy Systems
impl GuiPlugin {
    /// Without a primary window there is nothing to render to and no slider to read
    pub fn check_collaborators_system(
        windows: Query<(), With<PrimaryWindow>>,
    ) -> Result<(), OrreryError> {
        if windows.is_empty() {
            return Err(OrreryError::MissingCollaborator("primary window"));
        }
        Ok(())
    }

    /// Logs a fatal startup error and asks the app to quit
    pub fn exit_on_fatal_system(
        In(result): In<Result<(), OrreryError>>,
        mut exit: EventWriter<AppExit>,
    ) {
        if let Err(err) = result {
            error!("Cannot start the orrery: {}", err);
            exit.send(AppExit);
        }
    }
}

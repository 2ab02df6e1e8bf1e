use bevy::prelude::*;
use std::path::Path;

use crate::components::{Aircraft, FlightParameters, PlayerController, RigidBody};
use crate::resources::PhysicsConfig;
use crate::systems::{
    body_pose, flight_control_system, flight_keyboard_system, rigid_body_integrator_system,
    transform_sync_system,
};
use crate::utils::SimError;

/// Flight simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    /// Device input, once per frame in `Update`
    Input,
    /// Flight controllers, in `FixedUpdate`
    Control,
    Integrate,
    Sync,
}

/// Aircraft spawned for the player at startup
#[derive(Debug, Clone)]
pub struct PlayerAircraft {
    pub name: String,
    pub params: FlightParameters,
    pub body: RigidBody,
}

#[derive(Default)]
pub struct FlightControlPlugin {
    pub physics: PhysicsConfig,
    pub player: Option<PlayerAircraft>,
}

impl FlightControlPlugin {
    pub fn with_config(physics: PhysicsConfig) -> Self {
        Self {
            physics,
            player: None,
        }
    }

    pub fn with_player(
        mut self,
        name: impl Into<String>,
        params: FlightParameters,
        body: RigidBody,
    ) -> Self {
        self.player = Some(PlayerAircraft {
            name: name.into(),
            params,
            body,
        });
        self
    }

    /// Spawn the player aircraft with parameters read from a config file
    pub fn with_player_from_file<P: AsRef<Path>>(
        self,
        name: impl Into<String>,
        path: P,
        body: RigidBody,
    ) -> Result<Self, SimError> {
        let params = FlightParameters::load(path)?;
        Ok(self.with_player(name, params, body))
    }

    fn setup_player(mut commands: Commands, player: PlayerAircraft) {
        info!("Spawning player aircraft {}", player.name);
        spawn_aircraft(
            &mut commands,
            player.name,
            player.params,
            player.body,
            PlayerController::new(),
        );
    }
}

impl Plugin for FlightControlPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.physics.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.physics.timestep))
            .init_resource::<ButtonInput<KeyCode>>();

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Control, FlightSet::Integrate, FlightSet::Sync).chain(),
        );

        app.add_systems(Update, flight_keyboard_system.in_set(FlightSet::Input))
            .add_systems(
                FixedUpdate,
                (
                    flight_control_system.in_set(FlightSet::Control),
                    rigid_body_integrator_system.in_set(FlightSet::Integrate),
                    transform_sync_system.in_set(FlightSet::Sync),
                ),
            );

        if let Some(player) = self.player.clone() {
            app.add_systems(Startup, move |commands: Commands| {
                Self::setup_player(commands, player.clone())
            });
        }
    }
}

/// Spawn an aircraft entity with a transform matching its body
pub fn spawn_aircraft(
    commands: &mut Commands,
    name: impl Into<String>,
    params: FlightParameters,
    body: RigidBody,
    player: PlayerController,
) -> Entity {
    let name = name.into();
    let (translation, rotation) = body_pose(&body);
    commands
        .spawn((
            Aircraft::new(name.clone(), params, body),
            player,
            Name::new(name),
            Transform::from_translation(translation).with_rotation(rotation),
        ))
        .id()
}

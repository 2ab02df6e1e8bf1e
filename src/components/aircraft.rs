use bevy::prelude::*;

use crate::components::{FlightController, FlightParameters, RigidBody};

/// A controlled aircraft: the flight controller together with the body it flies
#[derive(Component, Debug)]
pub struct Aircraft {
    pub name: String,
    pub controller: FlightController<RigidBody>,
}

impl Aircraft {
    pub fn new(name: impl Into<String>, params: FlightParameters, body: RigidBody) -> Self {
        Self {
            name: name.into(),
            controller: FlightController::new(params, body),
        }
    }

    pub fn body(&self) -> &RigidBody {
        self.controller.body()
    }

    pub fn body_mut(&mut self) -> &mut RigidBody {
        self.controller.body_mut()
    }
}

use bevy::prelude::*;

/// Keyboard layout for a player-flown aircraft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub pitch_up: KeyCode,
    pub pitch_down: KeyCode,
    pub roll_left: KeyCode,
    pub roll_right: KeyCode,
    pub yaw_left: KeyCode,
    pub yaw_right: KeyCode,
    pub takeoff: KeyCode,
    pub land: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pitch_up: KeyCode::ArrowUp,
            pitch_down: KeyCode::ArrowDown,
            roll_left: KeyCode::ArrowLeft,
            roll_right: KeyCode::ArrowRight,
            yaw_left: KeyCode::KeyQ,
            yaw_right: KeyCode::KeyE,
            takeoff: KeyCode::KeyT,
            land: KeyCode::KeyL,
        }
    }
}

/// Marks the aircraft that receives device input
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
    pub bindings: KeyBindings,
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            active: true,
            bindings: KeyBindings::default(),
        }
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            active: true,
            bindings,
        }
    }
}

use bevy::prelude::*;

use crate::components::{Aircraft, InputSource, KeyBindings, PlayerController, YawDirection};
use crate::resources::PhysicsConfig;

/// System for flying the player aircraft from the keyboard.
///
/// Input is edge-driven: the pitch/roll axis is re-read only when one of its keys
/// changes, yaw follows the last yaw key pressed or released, and takeoff/land fire
/// once per key press. Commands are latched on the controller until its next
/// fixed step.
pub fn flight_keyboard_system(
    mut query: Query<(&mut Aircraft, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    for (mut aircraft, player) in query.iter_mut() {
        if !player.active {
            continue;
        }
        let keys = &player.bindings;
        let controller = &mut aircraft.controller;

        if pitch_roll_changed(&keyboard, keys) {
            let (dx, dy) = pitch_roll_axes(&keyboard, keys);
            if dx == 0.0 && dy == 0.0 {
                controller.cancel_pitch_roll();
            } else {
                controller.set_pitch_roll_from(InputSource::Keyboard, dx, dy);
            }
        }

        if keyboard.just_pressed(keys.yaw_left) {
            controller.set_yaw(YawDirection::Left);
        } else if keyboard.just_pressed(keys.yaw_right) {
            controller.set_yaw(YawDirection::Right);
        }
        if keyboard.just_released(keys.yaw_left) || keyboard.just_released(keys.yaw_right) {
            controller.set_yaw(YawDirection::Neutral);
        }

        if keyboard.just_pressed(keys.takeoff) {
            controller.trigger_takeoff();
        }
        if keyboard.just_pressed(keys.land) {
            controller.trigger_land();
        }
    }
}

/// System that advances every aircraft's flight controller by one fixed step.
pub fn flight_control_system(mut query: Query<&mut Aircraft>, config: Res<PhysicsConfig>) {
    for mut aircraft in query.iter_mut() {
        aircraft.controller.advance(config.timestep);
    }
}

fn pitch_roll_changed(keyboard: &ButtonInput<KeyCode>, keys: &KeyBindings) -> bool {
    let axis_keys = [keys.pitch_up, keys.pitch_down, keys.roll_left, keys.roll_right];
    keyboard.any_just_pressed(axis_keys) || keyboard.any_just_released(axis_keys)
}

/// Arrow-style 2D delta: x is right minus left, y is up minus down
fn pitch_roll_axes(keyboard: &ButtonInput<KeyCode>, keys: &KeyBindings) -> (f64, f64) {
    let axis = |positive: KeyCode, negative: KeyCode| {
        let mut value = 0.0;
        if keyboard.pressed(positive) {
            value += 1.0;
        }
        if keyboard.pressed(negative) {
            value -= 1.0;
        }
        value
    };
    (
        axis(keys.roll_right, keys.roll_left),
        axis(keys.pitch_up, keys.pitch_down),
    )
}

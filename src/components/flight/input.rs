use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

use super::{FlightParameters, Transition};
use crate::utils::{approximately_zero, SimError};

/// Device family a continuous pitch/roll delta comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Mouse,
    Keyboard,
    /// On-screen joystick, tuned like the keyboard
    Touch,
}

impl InputSource {
    pub fn sensitivity(&self, params: &FlightParameters) -> f64 {
        match self {
            InputSource::Mouse => params.pitch_roll_sensitivity_mouse,
            InputSource::Keyboard | InputSource::Touch => params.pitch_roll_sensitivity_keyboard,
        }
    }
}

/// Discrete yaw command
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YawDirection {
    Left,
    #[default]
    Neutral,
    Right,
}

impl YawDirection {
    pub fn value(&self) -> f64 {
        match self {
            YawDirection::Left => -1.0,
            YawDirection::Neutral => 0.0,
            YawDirection::Right => 1.0,
        }
    }
}

impl TryFrom<i8> for YawDirection {
    type Error = SimError;

    fn try_from(direction: i8) -> Result<Self, Self::Error> {
        match direction {
            -1 => Ok(YawDirection::Left),
            0 => Ok(YawDirection::Neutral),
            1 => Ok(YawDirection::Right),
            other => Err(SimError::InvalidControl(format!(
                "yaw direction must be -1, 0 or 1, got {other}"
            ))),
        }
    }
}

/// One call on the input contract, as carried by an [`InputPort`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputCommand {
    PitchRoll { dx: f64, dy: f64, sensitivity: f64 },
    CancelPitchRoll,
    Yaw(YawDirection),
    Takeoff,
    Land,
}

/// Pilot commands consumed once per fixed step.
///
/// Pitch and roll are raw delta times sensitivity and are not clamped.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pending: Vec<Transition>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pitch_roll(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        self.pitch = dy * sensitivity;
        self.roll = dx * sensitivity;
    }

    pub fn cancel_pitch_roll(&mut self) {
        self.pitch = 0.0;
        self.roll = 0.0;
    }

    pub fn set_yaw(&mut self, direction: YawDirection) {
        self.yaw = direction.value();
    }

    pub fn trigger_takeoff(&mut self) {
        self.pending.push(Transition::Takeoff);
    }

    pub fn trigger_land(&mut self) {
        self.pending.push(Transition::Land);
    }

    /// Transitions requested since the last fixed step, oldest first
    pub fn take_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending_transition(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn apply(&mut self, command: InputCommand) {
        match command {
            InputCommand::PitchRoll {
                dx,
                dy,
                sensitivity,
            } => self.set_pitch_roll(dx, dy, sensitivity),
            InputCommand::CancelPitchRoll => self.cancel_pitch_roll(),
            InputCommand::Yaw(direction) => self.set_yaw(direction),
            InputCommand::Takeoff => self.trigger_takeoff(),
            InputCommand::Land => self.trigger_land(),
        }
    }

    pub fn pitch_released(&self) -> bool {
        approximately_zero(self.pitch)
    }

    pub fn roll_released(&self) -> bool {
        approximately_zero(self.roll)
    }

    pub fn yaw_released(&self) -> bool {
        approximately_zero(self.yaw)
    }

    /// No rotational command on any axis
    pub fn is_idle(&self) -> bool {
        self.pitch_released() && self.roll_released() && self.yaw_released()
    }
}

/// Cloneable, thread-safe handle onto a controller's input contract.
///
/// Calls are fire-and-forget; commands are applied in order at the start of the
/// controller's next fixed step.
#[derive(Debug, Clone)]
pub struct InputPort {
    sender: Sender<InputCommand>,
}

impl InputPort {
    pub(crate) fn channel() -> (Self, Receiver<InputCommand>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }

    pub fn send(&self, command: InputCommand) {
        // A dropped controller simply stops listening
        let _ = self.sender.send(command);
    }

    pub fn set_pitch_roll(&self, dx: f64, dy: f64, sensitivity: f64) {
        self.send(InputCommand::PitchRoll {
            dx,
            dy,
            sensitivity,
        });
    }

    pub fn cancel_pitch_roll(&self) {
        self.send(InputCommand::CancelPitchRoll);
    }

    pub fn set_yaw(&self, direction: YawDirection) {
        self.send(InputCommand::Yaw(direction));
    }

    pub fn trigger_takeoff(&self) {
        self.send(InputCommand::Takeoff);
    }

    pub fn trigger_land(&self) {
        self.send(InputCommand::Land);
    }
}

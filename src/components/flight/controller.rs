use bevy::log::{debug, info, trace};
use crossbeam_channel::Receiver;
use nalgebra::Vector3;

use super::{
    ConfigError, FlightParameters, FlightState, FlightTelemetry, InputCommand, InputPort,
    InputSource, InputState, Transition, YawDirection,
};
use crate::physics::{local_forward, local_right, world_up, RigidBodyProxy};
use crate::utils::{clamp_components, horizontal_direction, lerp, lerp_vector, move_towards};

/// Converts pilot commands into velocity changes on a rigid body and manages the
/// grounded/flying regimes.
///
/// The controller is driven by [`FlightController::advance`] once per fixed step.
/// Input can be written directly through the `&mut self` methods or, from other
/// threads, through an [`InputPort`].
#[derive(Debug)]
pub struct FlightController<B: RigidBodyProxy> {
    params: FlightParameters,
    body: B,
    state: FlightState,
    current_speed: f64,
    input: InputState,
    port: InputPort,
    commands: Receiver<InputCommand>,
}

impl<B: RigidBodyProxy> FlightController<B> {
    /// Bind a controller to a body. The body starts grounded: non-kinematic with
    /// gravity enabled. Parameters are taken as given.
    pub fn new(params: FlightParameters, mut body: B) -> Self {
        body.set_kinematic(false);
        body.set_gravity_enabled(true);

        let (port, commands) = InputPort::channel();
        Self {
            params,
            body,
            state: FlightState::Grounded,
            current_speed: 0.0,
            input: InputState::new(),
            port,
            commands,
        }
    }

    /// Same as [`FlightController::new`] but rejects malformed parameters.
    pub fn try_new(params: FlightParameters, body: B) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self::new(params, body))
    }

    pub fn params(&self) -> &FlightParameters {
        &self.params
    }

    pub fn state(&self) -> FlightState {
        self.state
    }

    pub fn current_speed(&self) -> f64 {
        self.current_speed
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn into_body(self) -> B {
        self.body
    }

    /// A handle for feeding input from outside the update thread
    pub fn input_port(&self) -> InputPort {
        self.port.clone()
    }

    pub fn set_pitch_roll(&mut self, dx: f64, dy: f64, sensitivity: f64) {
        self.input.set_pitch_roll(dx, dy, sensitivity);
    }

    /// Map a pitch/roll delta using the sensitivity configured for its device
    pub fn set_pitch_roll_from(&mut self, source: InputSource, dx: f64, dy: f64) {
        let sensitivity = source.sensitivity(&self.params);
        self.input.set_pitch_roll(dx, dy, sensitivity);
    }

    pub fn cancel_pitch_roll(&mut self) {
        self.input.cancel_pitch_roll();
    }

    pub fn set_yaw(&mut self, direction: YawDirection) {
        self.input.set_yaw(direction);
    }

    /// Request a takeoff on the next fixed step
    pub fn trigger_takeoff(&mut self) {
        self.input.trigger_takeoff();
    }

    /// Request a landing on the next fixed step
    pub fn trigger_land(&mut self) {
        self.input.trigger_land();
    }

    /// Leave the ground. Returns false (and does nothing) unless grounded.
    pub fn takeoff(&mut self) -> bool {
        if self.state != FlightState::Grounded {
            debug!("Ignoring takeoff while {}", self.state);
            return false;
        }

        self.body.set_gravity_enabled(false);
        let mut velocity = self.body.linear_velocity();
        if velocity.y < 0.0 {
            velocity.y = 0.0;
            self.body.set_linear_velocity(velocity);
        }

        self.state = FlightState::Flying;
        self.current_speed = self.params.takeoff_speed();

        let heading = horizontal_direction(&self.body.forward_axis());
        self.body.set_linear_velocity(heading * self.current_speed);

        info!("Takeoff at speed {}", self.current_speed);
        true
    }

    /// Return to the ground. Returns false (and does nothing) unless flying.
    ///
    /// Velocity is left alone; the grounded step damps it out.
    pub fn land(&mut self) -> bool {
        if self.state != FlightState::Flying {
            debug!("Ignoring land while {}", self.state);
            return false;
        }

        self.body.set_gravity_enabled(true);
        self.state = FlightState::Grounded;

        info!("Landed with residual speed {}", self.current_speed);
        true
    }

    /// Run one fixed step of duration `dt`.
    ///
    /// Queued port commands are applied first. A step that executes a latched
    /// takeoff or landing does only that.
    pub fn advance(&mut self, dt: f64) {
        for command in self.commands.try_iter() {
            self.input.apply(command);
        }

        let mut transitioned = false;
        for transition in self.input.take_transitions() {
            transitioned |= match transition {
                Transition::Takeoff => self.takeoff(),
                Transition::Land => self.land(),
            };
        }
        if transitioned {
            return;
        }

        match self.state {
            FlightState::Flying => self.flying_step(dt),
            FlightState::Grounded => self.grounded_step(dt),
        }
    }

    fn flying_step(&mut self, dt: f64) {
        let FlightParameters {
            yaw_speed,
            pitch_speed,
            roll_speed,
            yaw_cancellation_rate,
            pitch_roll_cancellation_factor,
            angular_stabilization_factor,
            ..
        } = self.params;
        let (pitch, roll, yaw) = (self.input.pitch, self.input.roll, self.input.yaw);

        // Torque inputs are applied as direct angular velocity changes
        let local_torque = local_right() * (pitch * pitch_speed * dt)
            + local_forward() * (-roll * roll_speed * dt);
        let yaw_torque = world_up() * (yaw * yaw_speed * dt);
        let angular_velocity = self.body.angular_velocity()
            + self.body.local_to_world_direction(&local_torque)
            + yaw_torque;
        self.body.set_angular_velocity(angular_velocity);

        // Yaw opposing the command is removed at a bounded rate
        let mut local = self.local_angular_velocity();
        if !self.input.yaw_released() && local.y * yaw < 0.0 {
            local.y = cancel_opposing_yaw(local.y, yaw_cancellation_rate, dt);
            self.set_local_angular_velocity(&local);
        }

        // Axes without a command settle back towards zero
        let mut local = self.local_angular_velocity();
        let cancellation = pitch_roll_cancellation_factor * dt;
        if self.input.pitch_released() {
            local.x = lerp(local.x, 0.0, cancellation);
        }
        if self.input.roll_released() {
            local.z = lerp(local.z, 0.0, cancellation);
        }
        self.set_local_angular_velocity(&local);

        if self.input.is_idle() {
            let stabilized = lerp_vector(
                &self.body.angular_velocity(),
                &Vector3::zeros(),
                angular_stabilization_factor * dt,
            );
            self.body.set_angular_velocity(stabilized);
        }

        self.clamp_angular_velocity();

        self.current_speed = ramp_speed(self.current_speed, &self.params, dt);
        let velocity = self.body.forward_axis() * self.current_speed;
        self.body.set_linear_velocity(velocity);

        trace!(
            "Flying step: speed {}, local angular velocity {:?}",
            self.current_speed,
            self.local_angular_velocity()
        );
    }

    fn grounded_step(&mut self, dt: f64) {
        let factor = self.params.decelerating * dt;
        let velocity = lerp_vector(&self.body.linear_velocity(), &Vector3::zeros(), factor);
        let angular_velocity =
            lerp_vector(&self.body.angular_velocity(), &Vector3::zeros(), factor);
        self.body.set_linear_velocity(velocity);
        self.body.set_angular_velocity(angular_velocity);
    }

    /// Limit each body-frame axis of the angular velocity to its configured maximum
    fn clamp_angular_velocity(&mut self) {
        let local = clamp_components(
            &self.local_angular_velocity(),
            &self.params.max_angular_velocity(),
        );
        self.set_local_angular_velocity(&local);
    }

    /// Angular velocity in body frame (pitch, yaw, roll rates)
    pub fn local_angular_velocity(&self) -> Vector3<f64> {
        self.body
            .world_to_local_direction(&self.body.angular_velocity())
    }

    fn set_local_angular_velocity(&mut self, local: &Vector3<f64>) {
        let world = self.body.local_to_world_direction(local);
        self.body.set_angular_velocity(world);
    }

    pub fn telemetry(&self) -> FlightTelemetry {
        FlightTelemetry {
            state: self.state,
            current_speed: self.current_speed,
            linear_velocity: self.body.linear_velocity(),
            local_angular_velocity: self.local_angular_velocity(),
            gravity_enabled: self.body.gravity_enabled(),
        }
    }
}

/// Move an opposing yaw rate towards zero by at most `rate * dt`.
fn cancel_opposing_yaw(local_yaw: f64, rate: f64, dt: f64) -> f64 {
    move_towards(local_yaw, 0.0, rate * dt)
}

/// Accelerate towards cruise speed, or decelerate once at or above it.
///
/// There is no floor: a negative `default_speed` keeps decelerating past zero.
fn ramp_speed(current_speed: f64, params: &FlightParameters, dt: f64) -> f64 {
    if current_speed < params.default_speed {
        current_speed + params.accelerating * dt
    } else {
        current_speed - params.decelerating * dt
    }
}

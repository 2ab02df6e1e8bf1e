pub const GRAVITY: f64 = 9.80665; // m/s^2

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // Fixed physics timestep [s]

// Fraction of the cruise speed the aircraft leaves the ground with
pub const TAKEOFF_SPEED_FRACTION: f64 = 0.5;

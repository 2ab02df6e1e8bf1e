mod flight;

pub use flight::{spawn_aircraft, FlightControlPlugin, FlightSet, PlayerAircraft};

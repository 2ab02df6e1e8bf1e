mod integrator;

pub use integrator::rigid_body_integrator_system;

// Domain layer: roster and scheduling models plus the ports the core depends on.

pub mod model;
pub mod ports;

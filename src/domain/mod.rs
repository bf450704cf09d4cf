// Domain layer: sentinel and extension models plus the ports the adapters implement.

pub mod model;
pub mod ports;

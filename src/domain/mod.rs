// Domain layer: devices, the registry and the ports the core depends on.

pub mod model;
pub mod ports;
pub mod registry;

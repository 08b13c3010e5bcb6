// Domain layer: review models and the ports the exporter talks through.

pub mod model;
pub mod ports;

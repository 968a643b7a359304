// Domain layer: models and ports (interfaces). No external systems touched here.

pub mod model;
pub mod ports;

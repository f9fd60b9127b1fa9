// Domain layer: data models, their invariants, and ports (interfaces).

pub mod model;
pub mod ports;

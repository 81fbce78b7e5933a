// Domain layer: CPF value types and the settings port. No I/O.

pub mod model;
pub mod ports;

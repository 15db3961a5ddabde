// Domain layer: portfolio content, counter records and the storage port.

pub mod model;
pub mod portfolio;
pub mod ports;

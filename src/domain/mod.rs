// Domain layer: fare models and the ports the coordinator talks to.
// No dependencies beyond std/serde.

pub mod model;
pub mod ports;

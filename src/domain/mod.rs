// Domain layer: entity types and the storage contracts the core is written against.

pub mod model;
pub mod ports;

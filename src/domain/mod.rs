// Domain layer: the triangle predicate, its value types and the ports the session talks to.

pub mod model;
pub mod ports;
pub mod triangle;

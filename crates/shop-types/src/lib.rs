//! shop-types: domain entities and the repository ports they are stored through.

pub mod domain;
pub mod ports;

//! shop-core: application services over the shop ports.

pub mod config;
pub mod errors;

pub mod application;

pub use shop_types::{domain, ports};

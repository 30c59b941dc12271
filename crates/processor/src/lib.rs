//! Pickup-time computation and per-repository collection

pub mod business_time;
pub mod collect;
pub mod pickup;

pub use collect::{CollectError, Collector};
pub use pickup::calculate_pickup_time;

#[cfg(test)]
mod business_time_test;

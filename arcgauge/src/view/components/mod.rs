//! Reusable UI components.

pub mod gauge;

pub use gauge::Gauge;

//! Extension hooks around the axis engine.

pub mod observers;

pub use observers::{AxisObserver, EventCollector};

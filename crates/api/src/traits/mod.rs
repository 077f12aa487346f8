//! Traits shared by every level of the field tower

pub mod tower;

pub use tower::{TowerField, WideReduce};

//! Minimal queue ADT: tail insertion, head-relative inspection and removal.

pub mod core;

pub use crate::core::queue::Queue;

//! Utility helpers shared across client UI modules.

pub mod forms;
pub mod image;
pub mod search;

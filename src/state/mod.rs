//! Shared reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data wrapped in `RwSignal` at the page level or
//! provided via context, so transitions stay pure and unit-testable without
//! a browser environment.

pub mod browser;
pub mod notify;

//! Network layer: storage collaborator contract, record wire types, errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every data operation is a direct REST call to the hosted backend. There is
//! no local persistence; pages hold whatever snapshot the last fetch returned.

pub mod api;
pub mod error;
pub mod types;

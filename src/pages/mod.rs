pub mod admin;
pub mod award_details;
pub mod event_details;
pub mod events;
pub mod team;

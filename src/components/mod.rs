//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser chrome (tabs, search, pagination, confirm dialog) is generic over
//! the record type; the preview lists compose it with per-collection cards
//! and wire network effects into `BrowserState` signals.

pub mod award_card;
pub mod award_form_modal;
pub mod award_preview_list;
pub mod confirm_dialog;
pub mod event_card;
pub mod event_form_modal;
pub mod event_preview_list;
pub mod filter_tabs;
pub mod member_card;
pub mod member_form_modal;
pub mod member_preview_list;
pub mod notification_tray;
pub mod pagination;
pub mod record_image;
pub mod search_bar;

//! Dialog rendering modules

pub mod common;
pub mod event_dialogs;
pub mod system_dialogs;

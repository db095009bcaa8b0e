//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod event_list;
pub mod featured_panel;
pub mod status_bar;
pub mod tooltip;

// Component exports
pub use dialog_component::DialogComponent;
pub use event_list::EventListComponent;
pub use featured_panel::{FeaturedData, FeaturedPanel};
pub use status_bar::StatusBar;
pub use tooltip::Tooltip;

//! Modal dialog rendering helpers

pub mod common;
pub mod project_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use project_dialogs::FormField;
pub use scroll_behavior::DialogScroll;

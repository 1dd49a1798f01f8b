//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod gallery_component;
pub mod scrollbar_helper;
pub mod sidebar_component;

pub use dialog_component::DialogComponent;
pub use gallery_component::GalleryComponent;
pub use sidebar_component::SidebarComponent;

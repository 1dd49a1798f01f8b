//! Core UI functionality for the Folio application.
//!
//! This module contains the fundamental building blocks for the user interface:
//!
//! - [`actions`] - Action definitions emitted by components and handled by the app
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background description generation
//!
//! Components translate input into [`Action`]s; the app component applies
//! them to the application state and hands fresh data back to the components
//! before the next render.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::TaskManager;

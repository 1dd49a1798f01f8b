//! Folio - an architectural portfolio gallery for the terminal
//!
//! Projects are browsed by category in a Ratatui interface. An admin mode,
//! unlocked with a demo password, adds, edits and deletes projects and asks
//! a generative language model for project descriptions.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`state`] - The application state and its operations
//! * [`generator`] - Description generation through the Gemini API
//! * [`ui`] - Terminal user interface components

/// Demo password gate for admin mode
pub mod admin;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Project and category models
pub mod entities;

/// Project description generation
pub mod generator;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log viewer buffer
pub mod logger;

/// Application state and operations
pub mod state;

/// In-memory project collection and seed data
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

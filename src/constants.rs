//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Branding
pub const APP_TITLE: &str = "PORTFOLIO";
pub const APP_SUBTITLE: &str = "ARCHITECTURAL DESIGN";

// Gallery text
pub const HEADER_ALL_PROJECTS: &str = "All Projects";
pub const EMPTY_CATEGORY: &str = "No projects found in this category.";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const ADD_PROJECT_ENTRY: &str = "+ Add New Project";
pub const GENERATING: &str = "Generating…";

// Default description for projects added without one
pub const NEW_PROJECT_DESCRIPTION: &str = "New project added. Press 'a' to AI enhance its description.";

// Admin control labels
pub const ADMIN_LOGIN: &str = "Admin Login";
pub const ADMIN_ACTIVE: &str = "Admin Active";

// Alerts
pub const ALERT_INCORRECT_PASSWORD: &str = "Incorrect password";
pub const ALERT_MISSING_FIELDS: &str = "Please fill in all fields";

// Description generator fallbacks
pub const GENERATOR_MISSING_KEY: &str = "API Key missing. Unable to generate description.";
pub const GENERATOR_FAILED: &str = "Error connecting to AI service.";
pub const GENERATOR_EMPTY: &str = "No description generated.";

// Description generator defaults
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GENERATOR_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

// Demo gate secret, not a security boundary
pub const DEFAULT_ADMIN_PASSWORD: &str = "1234";

// Dialog titles
pub const DIALOG_TITLE_ADMIN: &str = "Admin Access";
pub const DIALOG_TITLE_ADD: &str = "Add New Project";
pub const DIALOG_TITLE_EDIT: &str = "Edit Project";
pub const DIALOG_TITLE_DELETE: &str = "Delete Project?";
pub const DIALOG_TITLE_HELP: &str = "Help";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Terminal width below which the sidebar turns into an overlay menu
pub const COMPACT_DEFAULT_WIDTH: u16 = 80;

/// Entries kept by the in-memory log viewer
pub const LOG_BUFFER_CAPACITY: usize = 500;

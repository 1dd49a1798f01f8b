pub mod category;
pub mod project;

pub use category::{Category, UnknownCategory};
pub use project::{random_image_url, Project, ProjectDraft, ProjectId};

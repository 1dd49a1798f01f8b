use super::category::Category;
use serde::{Deserialize, Serialize};

pub type ProjectId = u64;

/// One portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    /// Description to show on a card; `None` when absent or blank.
    #[must_use]
    pub fn display_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Editable copy of a project's fields, used by the add and edit dialogs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub category: Category,
    pub image: String,
    pub description: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: Category::Interior,
            image: String::new(),
            description: String::new(),
        }
    }
}

impl ProjectDraft {
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            category: project.category,
            image: project.image.clone(),
            description: project.description.clone().unwrap_or_default(),
        }
    }

    /// Title and image are the only required fields.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.title.is_empty() && !self.image.is_empty()
    }
}

/// Placeholder image URL on picsum with a random seed in `0..1000`.
#[must_use]
pub fn random_image_url() -> String {
    let seed: u32 = rand::random_range(0..1000);
    format!("https://picsum.photos/800/600?random={}", seed)
}

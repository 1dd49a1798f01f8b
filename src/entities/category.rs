use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification tag for a project.
///
/// `All` is a filter meta-value: it matches every project and is never
/// assigned to one. The remaining variants are the real categories, listed
/// in the order navigation and selection inputs present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "ALL")]
    All,
    Interior,
    Exhibition,
    Pavilion,
    Furniture,
    #[serde(rename = "Concept Works")]
    ConceptWorks,
    #[serde(rename = "Designer Profile")]
    DesignerProfile,
}

impl Category {
    /// Every navigation tab, meta-value first.
    pub const TABS: [Category; 7] = [
        Category::All,
        Category::Interior,
        Category::Exhibition,
        Category::Pavilion,
        Category::Furniture,
        Category::ConceptWorks,
        Category::DesignerProfile,
    ];

    /// Categories a project may carry.
    pub const ASSIGNABLE: [Category; 6] = [
        Category::Interior,
        Category::Exhibition,
        Category::Pavilion,
        Category::Furniture,
        Category::ConceptWorks,
        Category::DesignerProfile,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "ALL",
            Category::Interior => "Interior",
            Category::Exhibition => "Exhibition",
            Category::Pavilion => "Pavilion",
            Category::Furniture => "Furniture",
            Category::ConceptWorks => "Concept Works",
            Category::DesignerProfile => "Designer Profile",
        }
    }

    #[must_use]
    pub fn is_assignable(self) -> bool {
        self != Category::All
    }

    /// Whether a project tagged `category` is visible under this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        self == Category::All || self == category
    }

    /// Position in [`Category::TABS`].
    #[must_use]
    pub fn tab_index(self) -> usize {
        Self::TABS.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next assignable category, wrapping. `All` maps to the first real category.
    #[must_use]
    pub fn next_assignable(self) -> Category {
        match Self::ASSIGNABLE.iter().position(|c| *c == self) {
            Some(index) => Self::ASSIGNABLE[(index + 1) % Self::ASSIGNABLE.len()],
            None => Self::ASSIGNABLE[0],
        }
    }

    /// Previous assignable category, wrapping. `All` maps to the last real category.
    #[must_use]
    pub fn previous_assignable(self) -> Category {
        let len = Self::ASSIGNABLE.len();
        match Self::ASSIGNABLE.iter().position(|c| *c == self) {
            Some(index) => Self::ASSIGNABLE[(index + len - 1) % len],
            None => Self::ASSIGNABLE[len - 1],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::TABS
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

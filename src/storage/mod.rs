//! In-memory project collection.
//!
//! The collection lives for the lifetime of the process and is never written
//! to disk. Insertion order is the display order; nothing re-sorts it.

pub mod seed;

use crate::entities::{Category, Project, ProjectDraft, ProjectId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Store pre-filled with [`seed::initial_projects`].
    pub fn seeded() -> Self {
        Self::new(seed::initial_projects())
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.get(id).is_some()
    }

    /// `max(existing ids, 0) + 1`
    pub fn next_id(&self) -> ProjectId {
        self.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }

    /// Append a project built from `draft` and return its id.
    pub fn insert(&mut self, draft: ProjectDraft) -> ProjectId {
        let id = self.next_id();
        self.projects.push(Project {
            id,
            title: draft.title,
            category: draft.category,
            image: draft.image,
            description: non_empty(draft.description),
        });
        id
    }

    /// Replace title, category, image and description of the project with `id`.
    /// Returns `false` when no project matches.
    pub fn update(&mut self, id: ProjectId, draft: ProjectDraft) -> bool {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.title = draft.title;
                project.category = draft.category;
                project.image = draft.image;
                project.description = non_empty(draft.description);
                true
            }
            None => false,
        }
    }

    /// Set the description of the project with `id`. A missing id matches
    /// nothing and leaves the collection untouched.
    pub fn patch_description(&mut self, id: ProjectId, description: String) -> bool {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.description = Some(description);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ProjectId) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(index))
    }

    /// Projects visible under `filter`, in insertion order.
    pub fn filter(&self, filter: Category) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p.category)).collect()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

use crate::entities::{Category, Project};

/// Projects shown on first launch.
#[must_use]
pub fn initial_projects() -> Vec<Project> {
    vec![
        seed(
            1,
            "Minimalist Loft",
            Category::Interior,
            "A serene living space focusing on open lighting and natural materials.",
        ),
        seed(
            2,
            "Future Tech Expo",
            Category::Exhibition,
            "Interactive display systems integrated into a fluid spatial design.",
        ),
        seed(
            3,
            "Bamboo Pavilion",
            Category::Pavilion,
            "Sustainable structure study utilizing organic bamboo weaving techniques.",
        ),
        seed(
            4,
            "Ergo Chair V1",
            Category::Furniture,
            "Ergonomic study focused on lumbar support and minimal aesthetic.",
        ),
        seed(
            5,
            "Floating City",
            Category::ConceptWorks,
            "Urban planning concept for rising sea levels.",
        ),
    ]
}

fn seed(id: u64, title: &str, category: Category, description: &str) -> Project {
    Project {
        id,
        title: title.to_string(),
        category,
        image: format!("https://picsum.photos/800/600?random={}", id),
        description: Some(description.to_string()),
    }
}

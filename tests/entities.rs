use folio::entities::{random_image_url, Category, Project, ProjectDraft};

#[test]
fn test_category_labels_and_order() {
    let labels: Vec<&str> = Category::TABS.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec![
            "ALL",
            "Interior",
            "Exhibition",
            "Pavilion",
            "Furniture",
            "Concept Works",
            "Designer Profile"
        ]
    );
    assert!(!Category::ASSIGNABLE.contains(&Category::All));
    assert_eq!(Category::default(), Category::All);
}

#[test]
fn test_category_parsing() {
    assert_eq!("Pavilion".parse::<Category>().unwrap(), Category::Pavilion);
    assert_eq!("all".parse::<Category>().unwrap(), Category::All);
    assert_eq!(" designer profile ".parse::<Category>().unwrap(), Category::DesignerProfile);

    let err = "Landscape".parse::<Category>().unwrap_err();
    assert_eq!(err.to_string(), "unknown category 'Landscape'");
}

#[test]
fn test_category_matches() {
    for category in Category::ASSIGNABLE {
        assert!(Category::All.matches(category));
        assert!(category.matches(category));
    }
    assert!(!Category::Interior.matches(Category::Furniture));
}

#[test]
fn test_assignable_cycling_wraps() {
    assert_eq!(Category::Interior.next_assignable(), Category::Exhibition);
    assert_eq!(Category::DesignerProfile.next_assignable(), Category::Interior);
    assert_eq!(Category::Interior.previous_assignable(), Category::DesignerProfile);
    assert_eq!(Category::All.next_assignable(), Category::Interior);
}

#[test]
fn test_category_serde_uses_labels() {
    let json = serde_json::to_string(&Category::ConceptWorks).unwrap();
    assert_eq!(json, "\"Concept Works\"");
    let parsed: Category = serde_json::from_str("\"ALL\"").unwrap();
    assert_eq!(parsed, Category::All);
}

#[test]
fn test_display_description_treats_blank_as_absent() {
    let mut project = Project {
        id: 1,
        title: "Loft".to_string(),
        category: Category::Interior,
        image: "https://x/y.jpg".to_string(),
        description: Some("   ".to_string()),
    };
    assert_eq!(project.display_description(), None);

    project.description = None;
    assert_eq!(project.display_description(), None);

    project.description = Some("Light and air.".to_string());
    assert_eq!(project.display_description(), Some("Light and air."));
}

#[test]
fn test_draft_from_project() {
    let project = Project {
        id: 9,
        title: "Kiosk".to_string(),
        category: Category::Pavilion,
        image: "https://x/k.jpg".to_string(),
        description: None,
    };
    let draft = ProjectDraft::from_project(&project);
    assert_eq!(draft.title, "Kiosk");
    assert_eq!(draft.category, Category::Pavilion);
    assert_eq!(draft.description, "");
    assert!(draft.has_required_fields());

    let empty = ProjectDraft::default();
    assert_eq!(empty.category, Category::Interior);
    assert!(!empty.has_required_fields());
}

#[test]
fn test_random_image_url() {
    for _ in 0..50 {
        let url = random_image_url();
        let seed: u32 = url
            .strip_prefix("https://picsum.photos/800/600?random=")
            .expect("picsum prefix")
            .parse()
            .expect("numeric seed");
        assert!(seed < 1000);
    }
}

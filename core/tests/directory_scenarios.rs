use freetools_core::{
    filter_resources, matches_term, Category, DirectoryState, DirectoryView, ResourceCatalog,
    TagPreview,
};

const CATALOG: &str = r#"{
    "tools_and_software": [
        {
            "Program Name": "GitHub Student Developer Pack",
            "Program Value": "$200k+ in tools",
            "Tags": ["Developer", "Cloud", "Domains", "Hosting", "IDE"],
            "Description": "The best developer tools, free for students.",
            "Program Company Icon": "https://github.com/favicon.ico",
            "Apply Link": "https://education.github.com/pack"
        },
        {
            "Program Name": "Figma for Education",
            "Program Value": "Free Professional plan",
            "Tags": ["Design"],
            "Description": "Collaborative interface design.",
            "Apply Link": "https://www.figma.com/education/"
        }
    ],
    "certifications_and_courses": [
        {
            "Program Name": "Google Career Certificates",
            "Program Value": "Financial aid",
            "Tags": ["Certificate", "IT"],
            "Description": "Job-ready skills in data analytics and UX.",
            "Apply Link": "https://grow.google/certificates/"
        }
    ],
    "scholarships_and_fellowships": [
        {
            "Program Name": "Gates Scholarship",
            "Program Value": "Full cost of attendance",
            "Tags": ["Scholarship", "Undergraduate"],
            "Description": "Highly selective, last-dollar scholarship.",
            "Apply Link": "https://www.thegatesscholarship.org/"
        }
    ],
    "internships_and_mentorship": [
        {
            "Program Name": "Google STEP",
            "Program Value": "Paid internship",
            "Tags": ["Internship", "Engineering"],
            "Description": "Internship for first and second-year students.",
            "Apply Link": "https://buildyourfuture.withgoogle.com/programs/step"
        }
    ]
}"#;

fn catalog() -> ResourceCatalog {
    ResourceCatalog::from_json_str(CATALOG).expect("fixture parses")
}

const TERMS: [&str; 8] = ["", "g", "GOOGLE", "design", "schol", "intern", "ide", "zzz"];

#[test]
fn category_scopes_the_search() {
    let mut state = DirectoryState::new();
    state.catalog_loaded(catalog());
    state.set_search_term("schol");

    assert_eq!(state.active_category(), Category::ToolsAndSoftware);
    assert_eq!(state.view(), DirectoryView::NoResults);

    state.select_category(Category::ScholarshipsAndFellowships);
    let names: Vec<_> = state.visible().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Gates Scholarship"]);
}

#[test]
fn empty_term_returns_category_unchanged() {
    let catalog = catalog();
    for category in Category::ALL {
        let filtered: Vec<_> = filter_resources(Some(&catalog), category, "")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(filtered.as_slice(), catalog.resources(category));
    }
}

#[test]
fn filtering_is_idempotent() {
    let catalog = catalog();
    for category in Category::ALL {
        for term in TERMS {
            let once = filter_resources(Some(&catalog), category, term);
            let twice: Vec<_> = once
                .iter()
                .copied()
                .filter(|resource| matches_term(resource, term))
                .collect();
            assert_eq!(once, twice, "category {} term {:?}", category, term);
        }
    }
}

#[test]
fn every_result_contains_the_term() {
    let catalog = catalog();
    for category in Category::ALL {
        for term in TERMS {
            let needle = term.to_lowercase();
            for resource in filter_resources(Some(&catalog), category, term) {
                let hit = resource.name.to_lowercase().contains(&needle)
                    || resource.description.to_lowercase().contains(&needle)
                    || resource
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle));
                assert!(hit, "{} does not contain {:?}", resource.name, term);
            }
        }
    }
}

#[test]
fn unknown_key_yields_empty_list() {
    let catalog = catalog();
    assert!(catalog.resources_for_key("featured_deals").is_empty());
}

#[test]
fn missing_category_shows_no_results() {
    let mut state = DirectoryState::new();
    state.catalog_loaded(ResourceCatalog::from_json_str(r#"{"tools_and_software": []}"#).unwrap());
    state.select_category(Category::InternshipsAndMentorship);
    assert_eq!(state.view(), DirectoryView::NoResults);
}

#[test]
fn five_tags_collapse_to_three_plus_two_more() {
    let catalog = catalog();
    let pack = &catalog.resources(Category::ToolsAndSoftware)[0];
    let preview = TagPreview::new(&pack.tags, TagPreview::DEFAULT_LIMIT);
    assert_eq!(preview.shown, &pack.tags[..3]);
    assert_eq!(preview.overflow_label().as_deref(), Some("+2 more"));
}

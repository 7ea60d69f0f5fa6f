use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Full Stack")]
    FullStack,
    Mobile,
    Automation,
    DevOps,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Data Visualization")]
    DataVisualization,
    #[serde(rename = "Web App")]
    WebApp,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::FullStack,
        Category::Mobile,
        Category::Automation,
        Category::DevOps,
        Category::AiMl,
        Category::DataVisualization,
        Category::WebApp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::FullStack => "Full Stack",
            Category::Mobile => "Mobile",
            Category::Automation => "Automation",
            Category::DevOps => "DevOps",
            Category::AiMl => "AI/ML",
            Category::DataVisualization => "Data Visualization",
            Category::WebApp => "Web App",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category button selection. `All` matches every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// The filter buttons in display order, `All` first.
pub fn category_set() -> impl Iterator<Item = CategoryFilter> {
    std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
}

/// Records matching `selection`, in catalog order.
pub fn filter_projects<'a>(
    catalog: &'a [ProjectRecord],
    selection: CategoryFilter,
) -> Vec<&'a ProjectRecord> {
    catalog
        .iter()
        .filter(|p| selection.matches(p.category))
        .collect()
}

/// Identity of a filtered sequence, used to tell whether a new selection
/// actually changed which cards are mounted.
pub fn composition(filtered: &[&ProjectRecord]) -> Vec<String> {
    filtered.iter().map(|p| p.title.clone()).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) fn project(title: &str, category: Category) -> ProjectRecord {
        ProjectRecord {
            title: title.to_string(),
            description: format!("{title} description"),
            technologies: vec!["Rust".to_string(), "Leptos".to_string()],
            category,
            status: None,
            demo_link: None,
            github_link: None,
        }
    }

    pub(crate) fn sample_catalog() -> Vec<ProjectRecord> {
        vec![
            project("E-Commerce Platform", Category::FullStack),
            project("Partner Persona Matchmaking", Category::Automation),
            project("Student Onboarding System", Category::FullStack),
            project("MeetSync", Category::Automation),
            project("Movie Recommendation System", Category::AiMl),
            project("Color Detection App", Category::WebApp),
            project("Email Automation", Category::Automation),
        ]
    }

    fn titles(filtered: &[&ProjectRecord]) -> Vec<String> {
        composition(filtered)
    }

    #[test]
    fn test_automation_selects_three_in_order() {
        let catalog = sample_catalog();
        let filtered = filter_projects(&catalog, CategoryFilter::Only(Category::Automation));
        assert_eq!(
            titles(&filtered),
            vec!["Partner Persona Matchmaking", "MeetSync", "Email Automation"]
        );
    }

    #[test]
    fn test_all_is_full_catalog() {
        let catalog = sample_catalog();
        let filtered = filter_projects(&catalog, CategoryFilter::All);
        assert_eq!(filtered.len(), catalog.len());
        assert!(filtered.iter().zip(catalog.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_unused_category_is_empty() {
        let catalog = sample_catalog();
        let filtered = filter_projects(&catalog, CategoryFilter::Only(Category::Mobile));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_category_set_order() {
        let labels = category_set().map(|c| c.label()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec![
                "All",
                "Full Stack",
                "Mobile",
                "Automation",
                "DevOps",
                "AI/ML",
                "Data Visualization",
                "Web App"
            ]
        );
    }

    #[test]
    fn test_category_labels_match_serde_names() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).expect("category should serialize");
            assert_eq!(json, format!("\"{}\"", c.label()));
        }
    }

    #[test]
    fn test_record_optional_fields_default() {
        let json = r#"{
            "title": "MeetSync",
            "description": "meeting assistant",
            "technologies": ["React", "n8n", "React"],
            "category": "Automation"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).expect("record should parse");
        assert_eq!(record.status, None);
        assert_eq!(record.demo_link, None);
        // duplicates and order are kept as written
        assert_eq!(record.technologies, vec!["React", "n8n", "React"]);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{
            "title": "x",
            "description": "y",
            "technologies": [],
            "category": "Blockchain"
        }"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_selection() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            arb_category().prop_map(CategoryFilter::Only),
        ]
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<ProjectRecord>> {
        prop::collection::vec(arb_category(), 0..24).prop_map(|cats| {
            cats.into_iter()
                .enumerate()
                .map(|(i, c)| project(&format!("project-{i}"), c))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subsequence(catalog in arb_catalog(), selection in arb_selection()) {
            let filtered = filter_projects(&catalog, selection);
            let mut rest = catalog.iter();
            for p in &filtered {
                prop_assert!(rest.any(|c| c == *p));
            }
        }

        #[test]
        fn prop_filter_only_matching(catalog in arb_catalog(), category in arb_category()) {
            let filtered = filter_projects(&catalog, CategoryFilter::Only(category));
            prop_assert!(filtered.iter().all(|p| p.category == category));
            let expected = catalog.iter().filter(|p| p.category == category).count();
            prop_assert_eq!(filtered.len(), expected);
        }

        #[test]
        fn prop_all_is_identity(catalog in arb_catalog()) {
            let filtered = filter_projects(&catalog, CategoryFilter::All);
            prop_assert_eq!(filtered.into_iter().cloned().collect::<Vec<_>>(), catalog);
        }

        #[test]
        fn prop_filter_idempotent(catalog in arb_catalog(), selection in arb_selection()) {
            let once = filter_projects(&catalog, selection)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            let twice = filter_projects(&once, selection);
            prop_assert_eq!(titles(&twice), once.iter().map(|p| p.title.clone()).collect::<Vec<_>>());
        }
    }
}

use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::error::CatalogError;

/// `null` in the document reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One offer in the directory, as it appears in `resources.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Resource {
    #[serde(rename = "Program Name")]
    pub name: String,
    #[serde(rename = "Program Value", default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(rename = "Tags", default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "Description", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "Program Company Icon", default)]
    pub icon: Option<String>,
    #[serde(rename = "Apply Link")]
    pub apply_link: String,
}

impl Resource {
    /// Icon URL, treating a blank string the same as a missing one.
    pub fn icon_url(&self) -> Option<&str> {
        self.icon
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// The four fixed groupings a resource can be filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    ToolsAndSoftware,
    CertificationsAndCourses,
    ScholarshipsAndFellowships,
    InternshipsAndMentorship,
}

impl Category {
    /// Display order of the category tabs.
    pub const ALL: [Category; 4] = [
        Category::ToolsAndSoftware,
        Category::CertificationsAndCourses,
        Category::ScholarshipsAndFellowships,
        Category::InternshipsAndMentorship,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::ToolsAndSoftware => "tools_and_software",
            Category::CertificationsAndCourses => "certifications_and_courses",
            Category::ScholarshipsAndFellowships => "scholarships_and_fellowships",
            Category::InternshipsAndMentorship => "internships_and_mentorship",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::ToolsAndSoftware => "Tools & Software",
            Category::CertificationsAndCourses => "Certifications & Courses",
            Category::ScholarshipsAndFellowships => "Scholarships & Fellowships",
            Category::InternshipsAndMentorship => "Internships & Mentorship",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::ToolsAndSoftware => "🛠️",
            Category::CertificationsAndCourses => "🎓",
            Category::ScholarshipsAndFellowships => "💰",
            Category::InternshipsAndMentorship => "🚀",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Every resource in the directory, grouped by category.
///
/// A category property that is missing or `null` deserializes to an empty
/// list, and properties that are not one of the four keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tools_and_software: Vec<Resource>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications_and_courses: Vec<Resource>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scholarships_and_fellowships: Vec<Resource>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub internships_and_mentorship: Vec<Resource>,
}

impl ResourceCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn resources(&self, category: Category) -> &[Resource] {
        match category {
            Category::ToolsAndSoftware => &self.tools_and_software,
            Category::CertificationsAndCourses => &self.certifications_and_courses,
            Category::ScholarshipsAndFellowships => &self.scholarships_and_fellowships,
            Category::InternshipsAndMentorship => &self.internships_and_mentorship,
        }
    }

    /// Lookup by raw key. Unknown keys give an empty list, never an error.
    pub fn resources_for_key(&self, key: &str) -> &[Resource] {
        Category::from_key(key)
            .map(|category| self.resources(category))
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|category| self.resources(category).len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "tools_and_software": [
            {
                "Program Name": "GitHub Student Developer Pack",
                "Program Value": "$200k+ in tools",
                "Tags": ["Developer", "Cloud"],
                "Description": "Free developer tools for students.",
                "Program Company Icon": "https://github.com/favicon.ico",
                "Apply Link": "https://education.github.com/pack"
            }
        ],
        "scholarships_and_fellowships": [
            {
                "Program Name": "Thiel Fellowship",
                "Program Value": "$200,000",
                "Tags": [],
                "Description": "Build new things instead of sitting in a classroom.",
                "Apply Link": "https://thielfellowship.org"
            }
        ],
        "featured": []
    }"#;

    #[test]
    fn parses_document_keys() {
        let catalog = ResourceCatalog::from_json_str(DOC).unwrap();
        let tools = catalog.resources(Category::ToolsAndSoftware);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "GitHub Student Developer Pack");
        assert_eq!(tools[0].value, "$200k+ in tools");
        assert_eq!(tools[0].tags, vec!["Developer", "Cloud"]);
        assert_eq!(tools[0].icon_url(), Some("https://github.com/favicon.ico"));
        assert_eq!(tools[0].apply_link, "https://education.github.com/pack");
    }

    #[test]
    fn missing_category_is_empty() {
        let catalog = ResourceCatalog::from_json_str(DOC).unwrap();
        assert!(catalog.resources(Category::CertificationsAndCourses).is_empty());
        assert!(catalog.resources(Category::InternshipsAndMentorship).is_empty());
        assert_eq!(catalog.total(), 2);
    }

    #[test]
    fn unknown_key_is_empty() {
        let catalog = ResourceCatalog::from_json_str(DOC).unwrap();
        assert!(catalog.resources_for_key("featured").is_empty());
        assert_eq!(catalog.resources_for_key("tools_and_software").len(), 1);
    }

    #[test]
    fn absent_or_blank_icon() {
        let catalog = ResourceCatalog::from_json_str(DOC).unwrap();
        let fellowship = &catalog.resources(Category::ScholarshipsAndFellowships)[0];
        assert_eq!(fellowship.icon, None);

        let mut blank = fellowship.clone();
        blank.icon = Some("   ".to_string());
        assert_eq!(blank.icon_url(), None);
    }

    #[test]
    fn missing_optional_fields_default() {
        let catalog = ResourceCatalog::from_json_str(
            r#"{"internships_and_mentorship": [{"Program Name": "Mentor", "Apply Link": "https://example.com"}]}"#,
        )
        .unwrap();
        let mentor = &catalog.resources(Category::InternshipsAndMentorship)[0];
        assert!(mentor.tags.is_empty());
        assert_eq!(mentor.description, "");
        assert_eq!(mentor.value, "");
    }

    #[test]
    fn null_category_is_empty() {
        let catalog = ResourceCatalog::from_json_str(
            r#"{"tools_and_software": [{"Program Name": "A", "Apply Link": "https://a.example"}], "internships_and_mentorship": null}"#,
        )
        .unwrap();
        assert_eq!(catalog.resources(Category::ToolsAndSoftware).len(), 1);
        assert!(catalog.resources(Category::InternshipsAndMentorship).is_empty());
        assert!(catalog.resources_for_key("internships_and_mentorship").is_empty());
    }

    #[test]
    fn null_fields_read_as_empty() {
        let catalog = ResourceCatalog::from_json_str(
            r#"{"tools_and_software": [{
                "Program Name": "A",
                "Program Value": null,
                "Tags": null,
                "Description": null,
                "Program Company Icon": null,
                "Apply Link": "https://a.example"
            }]}"#,
        )
        .unwrap();
        let resource = &catalog.resources(Category::ToolsAndSoftware)[0];
        assert!(resource.tags.is_empty());
        assert_eq!(resource.description, "");
        assert_eq!(resource.value, "");
        assert_eq!(resource.icon_url(), None);
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = ResourceCatalog::from_json_str("{\"tools_and_software\": 3}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("featured"), None);
        assert_eq!(Category::default(), Category::ToolsAndSoftware);
    }
}

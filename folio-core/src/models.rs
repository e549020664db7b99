use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A book read by the portfolio owner, grouped by publisher
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub publish_name: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_on: Option<NaiveDate>,
}

/// A course taken by the portfolio owner, grouped by institution
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub institution: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_url: Option<String>,
}

/// Owner profile shown in the about and contact sections
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Contact label (e.g. "email", "github") to address, in file order
    #[serde(default)]
    pub contacts: IndexMap<String, String>,
}

/// Root of a portfolio data file
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PortfolioData {
    pub profile: Profile,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub books: Vec<Book>,
}

/// Which list a faceted view renders
///
/// Drives the pagination id and the labels the view layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Book,
    Course,
}

impl ItemKind {
    /// Identifier of the pagination instance for this list
    pub fn pagination_id(&self) -> &'static str {
        match self {
            ItemKind::Book => "booksPag",
            ItemKind::Course => "coursesPag",
        }
    }

    /// Human label for the grouping field
    pub fn group_label(&self) -> &'static str {
        match self {
            ItemKind::Book => "Publisher",
            ItemKind::Course => "Institution",
        }
    }
}

/// Capability interface shared by every list item
///
/// A faceted list only needs a single-valued grouping field, a tag list,
/// a display title and an optional date to sort by.
pub trait Faceted {
    fn group_key(&self) -> &str;
    fn tags(&self) -> &[String];
    fn title(&self) -> &str;
    fn date(&self) -> Option<NaiveDate>;
}

impl Faceted for Book {
    fn group_key(&self) -> &str {
        &self.publish_name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> Option<NaiveDate> {
        self.read_on
    }
}

impl Faceted for Course {
    fn group_key(&self) -> &str {
        &self.institution
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn date(&self) -> Option<NaiveDate> {
        self.conclusion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_deserializes_with_optional_fields() {
        let course: Course = serde_json::from_value(json!({
            "name": "Machine Learning",
            "institution": "MIT",
            "tags": ["ai", "python"],
            "conclusion": "2021-03-15"
        }))
        .unwrap();

        assert_eq!(course.group_key(), "MIT");
        assert_eq!(course.tags(), &["ai".to_string(), "python".to_string()]);
        assert_eq!(course.date(), NaiveDate::from_ymd_opt(2021, 3, 15));
        assert!(course.workload_hours.is_none());
    }

    #[test]
    fn test_book_groups_by_publisher() {
        let book: Book = serde_json::from_value(json!({
            "title": "The Rust Programming Language",
            "publish_name": "No Starch Press",
            "tags": ["rust"]
        }))
        .unwrap();

        assert_eq!(book.group_key(), "No Starch Press");
        assert_eq!(book.title(), "The Rust Programming Language");
        assert!(book.date().is_none());
    }

    #[test]
    fn test_portfolio_lists_default_to_empty() {
        let data: PortfolioData =
            serde_json::from_value(json!({"profile": {"name": "Ana"}})).unwrap();

        assert!(data.courses.is_empty());
        assert!(data.books.is_empty());
        assert!(data.profile.contacts.is_empty());
    }

    #[test]
    fn test_contacts_keep_file_order() {
        let profile: Profile = serde_json::from_value(json!({
            "name": "Ana",
            "contacts": {"linkedin": "in/ana", "github": "ana", "email": "ana@example.com"}
        }))
        .unwrap();

        let labels: Vec<&str> = profile.contacts.keys().map(|k| k.as_str()).collect();
        assert_eq!(labels, vec!["linkedin", "github", "email"]);
    }

    #[test]
    fn test_item_kind_ids() {
        assert_eq!(ItemKind::Book.pagination_id(), "booksPag");
        assert_eq!(ItemKind::Course.pagination_id(), "coursesPag");
        assert_eq!(ItemKind::Book.group_label(), "Publisher");
    }
}

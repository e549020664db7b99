use crate::models::{Faceted, PortfolioData};
use std::collections::HashSet;

/// Validate a loaded portfolio
/// Returns Ok(()) if valid, or Err(Vec<String>) with every problem found
pub fn validate_portfolio(data: &PortfolioData) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if data.profile.name.trim().is_empty() {
        errors.push("Profile name cannot be empty".to_string());
    }

    for (label, value) in &data.profile.contacts {
        if value.trim().is_empty() {
            errors.push(format!("Contact '{}' has an empty value", label));
        }
    }

    validate_items(&data.courses, "Course", "institution", &mut errors);
    validate_items(&data.books, "Book", "publish_name", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_items<T: Faceted>(
    items: &[T],
    label: &str,
    group_field: &str,
    errors: &mut Vec<String>,
) {
    let mut titles = HashSet::new();

    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("{} #{} ('{}')", label, idx + 1, item.title());

        if item.title().trim().is_empty() {
            errors.push(format!("{}: title cannot be empty", item_ref));
        } else if !titles.insert(item.title().trim()) {
            errors.push(format!("{}: duplicate title", item_ref));
        }

        if item.group_key().trim().is_empty() {
            errors.push(format!("{}: {} cannot be empty", item_ref, group_field));
        }

        if item.tags().iter().any(|tag| tag.trim().is_empty()) {
            errors.push(format!("{}: contains an empty tag", item_ref));
        }
    }
}

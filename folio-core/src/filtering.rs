use crate::models::Faceted;

/// Apply group and tag filters to a list of items
/// Values are compared whole, so a value may itself contain commas
pub fn apply_filters<'a, T: Faceted>(
    items: &'a [T],
    groups: &[String],
    tags: &[String],
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_filters(*item, groups, tags))
        .collect()
}

/// Check if an item matches the given filters
/// AND between the group and tag dimensions, OR within each one.
/// An empty dimension matches every item.
pub fn matches_filters<T: Faceted>(item: &T, groups: &[String], tags: &[String]) -> bool {
    if !groups.is_empty() {
        let group = item.group_key().trim();
        if !groups.iter().any(|g| g == group) {
            return false;
        }
    }

    if !tags.is_empty() {
        let matches_tag = tags
            .iter()
            .any(|wanted| item.tags().iter().any(|tag| tag.trim() == wanted));

        if !matches_tag {
            return false;
        }
    }

    true
}

/// Check if any filter is active
pub fn has_filters(groups: &[String], tags: &[String]) -> bool {
    !groups.is_empty() || !tags.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    fn book(title: &str, publisher: &str, tags: &[&str]) -> Book {
        Book {
            title: title.to_string(),
            author: String::new(),
            publish_name: publisher.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            url: None,
            read_on: None,
        }
    }

    fn library() -> Vec<Book> {
        vec![
            book("Clean Code", "Prentice Hall", &["craft", "java"]),
            book("Rust in Action", "Manning ", &["rust", "systems"]),
            book("Zero To Production", "Self", &["rust", "web"]),
        ]
    }

    fn values(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_filters_match_everything() {
        let books = library();
        assert_eq!(apply_filters(&books, &[], &[]).len(), 3);
        assert!(!has_filters(&[], &[]));
    }

    #[test]
    fn test_group_filter_compares_trimmed_values() {
        let books = library();
        let result = apply_filters(&books, &values(&["Manning"]), &[]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Rust in Action");
    }

    #[test]
    fn test_group_value_containing_comma() {
        let mut books = library();
        books.push(book("Compilers", "University of California, Berkeley", &["cs"]));

        let result = apply_filters(&books, &values(&["University of California, Berkeley"]), &[]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Compilers");
    }

    #[test]
    fn test_or_within_tags() {
        let books = library();
        let result = apply_filters(&books, &[], &values(&["java", "web"]));

        let titles: Vec<_> = result.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Clean Code", "Zero To Production"]);
    }

    #[test]
    fn test_and_between_groups_and_tags() {
        let books = library();
        let result = apply_filters(&books, &values(&["Self", "Prentice Hall"]), &values(&["rust"]));

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Zero To Production");
    }
}

use crate::models::Faceted;
use std::collections::HashSet;
use tracing::debug;

/// Distinct facet values of a collection
///
/// Built once per collection. Replacing the collection means building a new
/// index; it does not follow later changes to the items.
#[derive(Debug, Default, Clone)]
pub struct FacetIndex {
    groups: HashSet<String>,
    tags: HashSet<String>,
}

impl FacetIndex {
    /// Scan the items once, collecting trimmed grouping values and trimmed tags
    pub fn build<T: Faceted>(items: &[T]) -> Self {
        let mut index = FacetIndex::default();

        for item in items {
            index.groups.insert(item.group_key().trim().to_string());
            for tag in item.tags() {
                index.tags.insert(tag.trim().to_string());
            }
        }

        debug!(
            items = items.len(),
            groups = index.groups.len(),
            tags = index.tags.len(),
            "built facet index"
        );
        index
    }

    pub fn groups(&self) -> &HashSet<String> {
        &self.groups
    }

    pub fn tags(&self) -> &HashSet<String> {
        &self.tags
    }

    /// Grouping values in ascending, case-sensitive order
    /// Re-sorts on every call
    pub fn sorted_groups(&self) -> Vec<String> {
        sorted(&self.groups)
    }

    /// Tags in ascending, case-sensitive order
    /// Re-sorts on every call
    pub fn sorted_tags(&self) -> Vec<String> {
        sorted(&self.tags)
    }
}

fn sorted(values: &HashSet<String>) -> Vec<String> {
    let mut list: Vec<String> = values.iter().cloned().collect();
    list.sort();
    list
}

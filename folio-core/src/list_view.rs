use crate::error::Result;
use crate::facet_filter::FacetFilter;
use crate::facets::FacetIndex;
use crate::filtering::{apply_filters, has_filters};
use crate::models::{Faceted, ItemKind};
use crate::pagination::Pagination;
use crate::sorting::{sort_items, SortBy};
use tracing::debug;

/// A facet value as a toggle control should render it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetToggle {
    pub value: String,
    pub checked: bool,
}

/// Values deactivated by [`FacetedListView::clear_filters`], each listed once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedFilters {
    pub groups: Vec<String>,
    pub tags: Vec<String>,
}

impl ClearedFilters {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.tags.is_empty()
    }
}

/// Paginated list with group and tag facets, generic over the item type
///
/// Owns its items, the facet index built from them, one filter per facet and
/// the pagination state. Any filter change sends the list back to page one.
#[derive(Debug, Clone)]
pub struct FacetedListView<T: Faceted> {
    kind: ItemKind,
    items: Vec<T>,
    index: FacetIndex,
    group_filter: FacetFilter,
    tag_filter: FacetFilter,
    pagination: Pagination,
}

impl<T: Faceted> FacetedListView<T> {
    pub fn new(kind: ItemKind, items: Vec<T>) -> Self {
        let index = FacetIndex::build(&items);

        Self {
            kind,
            items,
            index,
            group_filter: FacetFilter::new(),
            tag_filter: FacetFilter::new(),
            pagination: Pagination::with_defaults(kind.pagination_id()),
        }
    }

    pub fn with_items_per_page(mut self, items_per_page: usize) -> Result<Self> {
        self.pagination = Pagination::new(self.kind.pagination_id(), items_per_page)?;
        Ok(self)
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn index(&self) -> &FacetIndex {
        &self.index
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn group_filter(&self) -> &FacetFilter {
        &self.group_filter
    }

    pub fn tag_filter(&self) -> &FacetFilter {
        &self.tag_filter
    }

    pub fn sorted_groups(&self) -> Vec<String> {
        self.index.sorted_groups()
    }

    pub fn sorted_tags(&self) -> Vec<String> {
        self.index.sorted_tags()
    }

    /// Toggle a grouping value and go back to the first page
    pub fn toggle_group(&mut self, value: &str) -> bool {
        let active = self.group_filter.toggle(value);
        self.pagination.reset();
        active
    }

    /// Toggle a tag and go back to the first page
    pub fn toggle_tag(&mut self, value: &str) -> bool {
        let active = self.tag_filter.toggle(value);
        self.pagination.reset();
        active
    }

    pub fn selected_groups_text(&self) -> &str {
        self.group_filter.joined()
    }

    pub fn selected_tags_text(&self) -> &str {
        self.tag_filter.joined()
    }

    pub fn absolute_index(&self, index_on_page: usize) -> usize {
        self.pagination.absolute_index(index_on_page)
    }

    pub fn on_page_change(&mut self, page: usize) {
        self.pagination.on_page_change(page);
    }

    /// Drop every active filter and return to page one
    ///
    /// The returned values are the ones that were active, so a view holding
    /// per-control state can undo it exactly once per value.
    pub fn clear_filters(&mut self) -> ClearedFilters {
        let cleared = ClearedFilters {
            groups: self.group_filter.values().to_vec(),
            tags: self.tag_filter.values().to_vec(),
        };

        self.group_filter.clear();
        self.tag_filter.clear();
        self.pagination.reset();

        debug!(
            kind = ?self.kind,
            groups = cleared.groups.len(),
            tags = cleared.tags.len(),
            "cleared filters"
        );
        cleared
    }

    /// Group toggles in sorted order, checked state taken from the filter
    pub fn group_toggles(&self) -> Vec<FacetToggle> {
        toggles(self.sorted_groups(), &self.group_filter)
    }

    /// Tag toggles in sorted order, checked state taken from the filter
    pub fn tag_toggles(&self) -> Vec<FacetToggle> {
        toggles(self.sorted_tags(), &self.tag_filter)
    }

    pub fn has_filters(&self) -> bool {
        has_filters(self.group_filter.values(), self.tag_filter.values())
    }

    /// Items passing the active filters, in `sort` order
    pub fn filtered_items(&self, sort: SortBy) -> Vec<&T> {
        let mut items = apply_filters(
            &self.items,
            self.group_filter.values(),
            self.tag_filter.values(),
        );

        sort_items(&mut items, sort);
        items
    }

    /// Current page of the filtered list, each item with its absolute index
    pub fn visible_page(&self, sort: SortBy) -> Vec<(usize, &T)> {
        let filtered = self.filtered_items(sort);
        let range = self.pagination.page_range(filtered.len());

        filtered[range]
            .iter()
            .enumerate()
            .map(|(i, item)| (self.absolute_index(i), *item))
            .collect()
    }

    /// Pages needed to show the filtered list
    pub fn page_count(&self) -> usize {
        let total =
            apply_filters(&self.items, self.group_filter.values(), self.tag_filter.values()).len();
        self.pagination.page_count(total)
    }
}

fn toggles(values: Vec<String>, filter: &FacetFilter) -> Vec<FacetToggle> {
    values
        .into_iter()
        .map(|value| FacetToggle {
            checked: filter.is_active(&value),
            value,
        })
        .collect()
}

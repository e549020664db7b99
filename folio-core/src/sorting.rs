use crate::models::Faceted;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

static LEADING_ARTICLES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|i|gli|un|une|een|o|os|as|um|uma)\s+")
        .expect("leading article pattern is valid")
});

/// Field a list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Group,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort key and direction applied to a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortBy {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortBy {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }
}

/// Sort items in place
///
/// Titles and groups use library-science ordering. Items without a date
/// always go last, whatever the direction. Ties fall back to the title.
pub fn sort_items<T: Faceted>(items: &mut [&T], sort: SortBy) {
    items.sort_by(|a, b| compare_items(*a, *b, sort));
}

fn compare_items<T: Faceted>(a: &T, b: &T, sort: SortBy) -> Ordering {
    let primary = match sort.key {
        SortKey::Title => Some(compare_text(a.title(), b.title())),
        SortKey::Group => Some(compare_text(a.group_key(), b.group_key())),
        SortKey::Date => match (a.date(), b.date()) {
            (Some(x), Some(y)) => Some(x.cmp(&y)),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => None,
        },
    };

    let primary = match (primary, sort.order) {
        (Some(ord), SortOrder::Asc) => ord,
        (Some(ord), SortOrder::Desc) => ord.reverse(),
        (None, _) => Ordering::Equal,
    };

    primary.then_with(|| compare_text(a.title(), b.title()))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    normalize_for_sorting(a)
        .cmp(&normalize_for_sorting(b))
        .then_with(|| a.cmp(b))
}

/// Normalize string for library science sorting
/// - Strip leading articles
/// - Unicode NFD then lowercase
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);
    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a leading article (English, German, French, Spanish, Italian,
/// Dutch, Portuguese)
pub fn strip_leading_articles(s: &str) -> String {
    LEADING_ARTICLES.replace(s.trim_start(), "").to_string()
}

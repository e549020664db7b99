use chrono::NaiveDate;
use colored::Colorize;
use folio_core::*;

/// Per-type lines shown under an item's title
pub trait ItemDetails {
    fn details(&self, today: NaiveDate) -> Vec<String>;
}

impl ItemDetails for Course {
    fn details(&self, today: NaiveDate) -> Vec<String> {
        let mut lines = vec![conclusion_message(self.conclusion, today)];

        if let Some(hours) = self.workload_hours {
            lines.push(format!("Workload: {}h", hours));
        }
        if let Some(ref url) = self.certificate_url {
            lines.push(format!("Certificate: {}", url));
        }
        lines.push(format!("Logo: {}", institution_image(&self.institution)));
        lines
    }
}

impl ItemDetails for Book {
    fn details(&self, _today: NaiveDate) -> Vec<String> {
        let mut lines = Vec::new();

        if !self.author.trim().is_empty() {
            lines.push(format!("by {}", self.author.trim()));
        }
        if let Some(date) = self.read_on {
            lines.push(format!("Read on {}", date.format("%d/%m/%Y")));
        }
        if let Some(ref url) = self.url {
            lines.push(url.clone());
        }
        lines
    }
}

fn list_heading(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Course => "Courses",
        ItemKind::Book => "Books",
    }
}

/// Format the active filters of a view into a single line
pub fn format_active_filters<T: Faceted>(view: &FacetedListView<T>) -> String {
    if !view.has_filters() {
        return "No active filters".to_string();
    }

    let mut parts = Vec::new();
    if !view.selected_groups_text().is_empty() {
        parts.push(format!(
            "{}: {}",
            view.kind().group_label(),
            view.selected_groups_text()
        ));
    }
    if !view.selected_tags_text().is_empty() {
        parts.push(format!("Tags: {}", view.selected_tags_text()));
    }
    parts.join(" | ")
}

/// Render the current page of a list view
pub fn render_list<T: Faceted + ItemDetails>(
    view: &FacetedListView<T>,
    sort: SortBy,
    today: NaiveDate,
) -> String {
    let mut out = String::new();
    let total = view.filtered_items(sort).len();

    out.push_str(&format!("# {}\n\n", list_heading(view.kind()).bold()));
    out.push_str(&format!("{}\n", format_active_filters(view).dimmed()));
    out.push_str(&format!(
        "Page {} of {} ({} matching)\n\n",
        view.pagination().current_page(),
        view.page_count(),
        total
    ));

    let page = view.visible_page(sort);
    if page.is_empty() {
        out.push_str(&format!("{}\n", "No items to show.".italic()));
        return out;
    }

    for (rank, item) in page {
        out.push_str(&format!("{:>3}. {}\n", rank, item.title().bold()));

        let tags = print_tags(item.tags());
        if tags.is_empty() {
            out.push_str(&format!("     {}\n", item.group_key().trim().cyan()));
        } else {
            out.push_str(&format!(
                "     {}  {}\n",
                item.group_key().trim().cyan(),
                tags.yellow()
            ));
        }

        for line in item.details(today) {
            out.push_str(&format!("     {}\n", line));
        }
        out.push('\n');
    }

    out
}

/// Render the facet toggles of a view, checked state included
pub fn render_facets<T: Faceted>(view: &FacetedListView<T>) -> String {
    let mut out = format!("{}:\n", view.kind().group_label().bold());
    for toggle in view.group_toggles() {
        out.push_str(&format_toggle(&toggle));
    }

    out.push_str(&format!("{}:\n", "Tags".bold()));
    for toggle in view.tag_toggles() {
        out.push_str(&format_toggle(&toggle));
    }
    out
}

fn format_toggle(toggle: &FacetToggle) -> String {
    if toggle.checked {
        format!("  [x] {}\n", toggle.value.green())
    } else {
        format!("  [ ] {}\n", toggle.value)
    }
}

/// Render the about and contact sections
pub fn render_profile(profile: &Profile, today: NaiveDate) -> String {
    let mut out = format!("# {}\n", profile.name.bold());

    if let Some(ref headline) = profile.headline {
        out.push_str(&format!("{}\n", headline.italic()));
    }
    out.push('\n');

    if let Some(ref about) = profile.about {
        out.push_str(&format!("## {}\n\n{}\n\n", "About".bold(), about.trim()));
    }

    let mut facts = Vec::new();
    if let Some(birth) = profile.birth_date {
        facts.push(format!("Age: {}", age_on(birth, today)));
    }
    if let Some(ref location) = profile.location {
        facts.push(format!("Location: {}", location));
    }
    for fact in &facts {
        out.push_str(&format!("- {}\n", fact));
    }
    if !facts.is_empty() {
        out.push('\n');
    }

    if !profile.contacts.is_empty() {
        out.push_str(&format!("## {}\n\n", "Contact".bold()));
        for (label, value) in &profile.contacts {
            out.push_str(&format!("- {}: {}\n", label, value.cyan()));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn course_view() -> FacetedListView<Course> {
        colored::control::set_override(false);
        let courses = serde_json::from_value(serde_json::json!([
            {"name": "Machine Learning", "institution": "MIT", "tags": ["ai"], "conclusion": "2021-03-15", "workload_hours": 40},
            {"name": "Calculus", "institution": "UFRJ", "tags": []}
        ]))
        .unwrap();
        FacetedListView::new(ItemKind::Course, courses)
    }

    #[test]
    fn test_render_list_numbers_items() {
        let view = course_view();
        let out = render_list(&view, SortBy::default(), today());

        assert!(out.contains("# Courses"));
        assert!(out.contains("No active filters"));
        assert!(out.contains("Page 1 of 1 (2 matching)"));
        assert!(out.contains("  1. Calculus"));
        assert!(out.contains("  2. Machine Learning"));
        assert!(out.contains("#ai"));
        assert!(out.contains("Concluded in 03/2021"));
        assert!(out.contains("Workload: 40h"));
        assert!(out.contains("In progress"));
    }

    #[test]
    fn test_render_list_with_filters() {
        let mut view = course_view();
        view.toggle_group("MIT");
        view.toggle_tag("ai");

        let out = render_list(&view, SortBy::default(), today());
        assert!(out.contains("Institution: MIT | Tags: ai"));
        assert!(!out.contains("Calculus"));
    }

    #[test]
    fn test_render_empty_page() {
        let mut view = course_view();
        view.on_page_change(5);

        let out = render_list(&view, SortBy::default(), today());
        assert!(out.contains("No items to show."));
    }

    #[test]
    fn test_render_facets_marks_active_values() {
        let mut view = course_view();
        view.toggle_group("UFRJ");

        let out = render_facets(&view);
        assert!(out.contains("  [ ] MIT\n"));
        assert!(out.contains("  [x] UFRJ\n"));
        assert!(out.contains("  [ ] ai\n"));
    }

    #[test]
    fn test_render_profile() {
        colored::control::set_override(false);
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "name": "Ana Souza",
            "headline": "Software engineer",
            "birth_date": "1990-06-15",
            "contacts": {"github": "https://github.com/ana", "email": "ana@example.com"}
        }))
        .unwrap();

        let out = render_profile(&profile, today());
        assert!(out.contains("# Ana Souza"));
        assert!(out.contains("Age: 33"));
        assert!(out.contains("- github: https://github.com/ana\n- email: ana@example.com"));
    }
}

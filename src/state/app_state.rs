use chrono::NaiveDate;
use folio_core::*;
use std::path::PathBuf;

/// Application state management
/// Holds the loaded portfolio and the date used for relative messages
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded portfolio
    pub data: PortfolioData,
    /// Path to current data file
    pub current_file: Option<PathBuf>,
    /// Reference date for ages and conclusion messages
    pub today: NaiveDate,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            data: PortfolioData::default(),
            current_file: None,
            today,
        }
    }

    /// Load a portfolio data file
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<()> {
        self.data = load_portfolio(&path)?;
        self.current_file = Some(path);
        Ok(())
    }

    /// Title line with the profile name and the file it came from
    pub fn get_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        if self.data.profile.name.is_empty() {
            format!("Folio - {}", file_name)
        } else {
            format!("Folio - {} ({})", self.data.profile.name, file_name)
        }
    }

    pub fn course_view(&self, items_per_page: usize) -> Result<FacetedListView<Course>> {
        FacetedListView::new(ItemKind::Course, self.data.courses.clone())
            .with_items_per_page(items_per_page)
    }

    pub fn book_view(&self, items_per_page: usize) -> Result<FacetedListView<Book>> {
        FacetedListView::new(ItemKind::Book, self.data.books.clone())
            .with_items_per_page(items_per_page)
    }
}

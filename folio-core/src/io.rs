use crate::error::{FolioError, Result};
use crate::models::PortfolioData;
use crate::schema::portfolio_schema;
use crate::schema_validation::validate_against_schema;
use crate::validation::validate_portfolio;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a portfolio data file, checking it against the schema and the
/// content rules before handing it out
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<PortfolioData> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let data = parse_portfolio(&contents)?;

    info!(
        path = %path.display(),
        courses = data.courses.len(),
        books = data.books.len(),
        "loaded portfolio"
    );
    Ok(data)
}

/// Parse and validate portfolio JSON
pub fn parse_portfolio(contents: &str) -> Result<PortfolioData> {
    let raw: Value = serde_json::from_str(contents)?;
    validate_against_schema(&portfolio_schema(), &raw).map_err(FolioError::Schema)?;

    let data: PortfolioData = serde_json::from_value(raw)?;
    validate_portfolio(&data).map_err(FolioError::Validation)?;

    Ok(data)
}

/// Save portfolio data with pretty printing
pub fn save_portfolio<P: AsRef<Path>>(data: &PortfolioData, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

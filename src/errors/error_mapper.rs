use folio_core::FolioError;
use std::io::ErrorKind;
use std::path::Path;

/// Map portfolio loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &FolioError, path: &Path) -> (String, String, String) {
    match error {
        FolioError::Io(io) if io.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        FolioError::Io(io) if io.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        FolioError::Json(e) => (
            "Invalid JSON".to_string(),
            "The portfolio file is not valid JSON.".to_string(),
            format!("{} (line {}, column {})", e, e.line(), e.column()),
        ),
        FolioError::Schema(errors) => (
            "Schema Error".to_string(),
            "The portfolio file does not match the expected structure.".to_string(),
            errors.join("\n"),
        ),
        FolioError::Validation(errors) => (
            "Validation Error".to_string(),
            "The portfolio file has validation errors.".to_string(),
            errors.join("\n"),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load portfolio file.".to_string(),
            other.to_string(),
        ),
    }
}

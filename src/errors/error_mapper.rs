use std::path::Path;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_load_error(
    error: &dyn std::error::Error,
    path: &Path,
) -> (String, String, String) {
    let error_string = error.to_string();

    if error_string.contains("Schema validation failed")
        || error_string.contains("Catalog validation failed")
    {
        (
            "Validation Error".to_string(),
            "The catalog file has validation errors.".to_string(),
            error_string,
        )
    } else if error_string.contains("No such file") {
        (
            "File Not Found".to_string(),
            "The catalog file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        )
    } else if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!(
                "You don't have permission to read this file:\n{}",
                path.display()
            ),
        )
    } else if error_string.contains("line") && error_string.contains("column") {
        (
            "Invalid JSON".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            error_string,
        )
    } else {
        (
            "Error Loading Catalog".to_string(),
            "Failed to load catalog file.".to_string(),
            error_string,
        )
    }
}

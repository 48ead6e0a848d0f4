use crate::errors::ApiError;

/// Spreadsheet-ish formats the import endpoints accept.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["xlsx", "xls", "csv", "json"];

/// Upload ceiling, checked client-side before any request is built.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Validate a file for upload. Called before the multipart form is
/// assembled, so a rejection issues zero network calls.
pub fn validate_upload(file_name: &str, size_bytes: u64) -> Result<(), ApiError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            return Err(ApiError::Validation(format!(
                "Unsupported file type '{}': expected one of .xlsx, .xls, .csv, .json",
                file_name
            )))
        }
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(ApiError::Validation(format!(
            "File is {:.1} MB; the limit is {} MB",
            size_bytes as f64 / (1024.0 * 1024.0),
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_spreadsheet_formats() {
        for name in ["stock.xlsx", "stock.XLS", "export.csv", "dump.json"] {
            assert!(validate_upload(name, 1024).is_ok(), "{} rejected", name);
        }
    }

    #[test]
    fn rejects_unknown_extensions() {
        for name in ["notes.pdf", "archive.tar.gz", "noextension", "image.png"] {
            let err = validate_upload(name, 1024).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{} accepted", name);
        }
    }

    #[test]
    fn rejects_oversize_files() {
        assert!(validate_upload("stock.xlsx", MAX_UPLOAD_BYTES).is_ok());
        let err = validate_upload("stock.xlsx", MAX_UPLOAD_BYTES + 1).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}

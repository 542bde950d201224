//! File-type checks of the upload dialog, applied before any network call.

use thiserror::Error;

pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".xlsx", ".xls", ".csv"];

pub const ACCEPTED_MIME_TYPES: [&str; 3] = [
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "text/csv",
];

/// Value for the `accept` attribute of the file input.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Tipo de archivo no válido: sube un archivo Excel (.xlsx, .xls) o CSV")]
    UnsupportedType,

    #[error("Selecciona un template")]
    MissingTemplate,

    #[error("Selecciona un archivo")]
    MissingFile,
}

/// Accepts a file when either its MIME type or its extension is a spreadsheet or CSV.
pub fn check_file(name: &str, mime_type: &str) -> Result<(), UploadRejection> {
    let lowered = name.to_lowercase();
    let by_extension = ACCEPTED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext));
    let by_mime = ACCEPTED_MIME_TYPES.contains(&mime_type);
    if by_extension || by_mime {
        Ok(())
    } else {
        Err(UploadRejection::UnsupportedType)
    }
}

/// Checks the dialog as a whole before submitting.
pub fn check_submission(template_id: Option<&str>, file_selected: bool) -> Result<(), UploadRejection> {
    if template_id.is_none_or(|t| t.trim().is_empty()) {
        return Err(UploadRejection::MissingTemplate);
    }
    if !file_selected {
        return Err(UploadRejection::MissingFile);
    }
    Ok(())
}

/// Whether the submit control is enabled: nothing in flight, a template
/// chosen and an accepted file held.
pub fn can_submit(uploading: bool, template_id: Option<&str>, file_selected: bool) -> bool {
    !uploading && check_submission(template_id, file_selected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spreadsheets_and_csv_are_accepted() {
        assert_eq!(check_file("ventas.xlsx", ""), Ok(()));
        assert_eq!(check_file("VENTAS.XLS", ""), Ok(()));
        assert_eq!(check_file("datos.csv", "text/csv"), Ok(()));
        assert_eq!(check_file("export", "text/csv"), Ok(()));
    }

    #[test]
    fn documents_are_rejected() {
        assert_eq!(
            check_file(
                "informe.docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Err(UploadRejection::UnsupportedType)
        );
        assert_eq!(check_file("notas.txt", "text/plain"), Err(UploadRejection::UnsupportedType));
    }

    #[test]
    fn submission_needs_template_and_file() {
        assert_eq!(check_submission(None, true), Err(UploadRejection::MissingTemplate));
        assert_eq!(check_submission(Some(""), true), Err(UploadRejection::MissingTemplate));
        assert_eq!(check_submission(Some("t1"), false), Err(UploadRejection::MissingFile));
        assert_eq!(check_submission(Some("t1"), true), Ok(()));
    }

    #[test]
    fn rejected_document_keeps_submit_disabled() {
        let docx = check_file(
            "informe.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        );
        assert_eq!(docx, Err(UploadRejection::UnsupportedType));
        // A rejected file is never held by the dialog.
        assert!(!can_submit(false, Some("t1"), docx.is_ok()));
    }

    #[test]
    fn submit_enabled_only_when_ready() {
        assert!(!can_submit(false, None, false));
        assert!(!can_submit(false, None, true));
        assert!(!can_submit(false, Some("t1"), false));
        assert!(!can_submit(true, Some("t1"), true));
        assert!(can_submit(false, Some("t1"), true));
    }

    #[test]
    fn accept_attribute_lists_extensions() {
        assert_eq!(accept_attribute(), ".xlsx,.xls,.csv");
    }
}

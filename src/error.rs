//! Error types for the upload pipeline

use thiserror::Error;

/// Everything that can abort an upload request.
///
/// Missing line items are not represented here: they are ordinary data and
/// travel in [`crate::ratios::RatioReport::missing`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Cannot read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook contains no worksheets")]
    NoWorksheet,

    #[error("Worksheet has no header row")]
    EmptySheet,

    #[error("Non-numeric value {value:?} in row '{row}' for period {period}")]
    NonNumeric {
        row: String,
        period: String,
        value: String,
    },

    #[error("No file part named 'file' in the request")]
    MissingFile,

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Upload too large: {0}")]
    TooLarge(String),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// True when the request itself was at fault (bad upload or bad data).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::Workbook(_)
                | AnalysisError::NoWorksheet
                | AnalysisError::EmptySheet
                | AnalysisError::NonNumeric { .. }
                | AnalysisError::MissingFile
                | AnalysisError::Upload(_)
                | AnalysisError::TooLarge(_)
        )
    }

    /// The plain text body returned to the uploader
    pub fn user_message(&self) -> String {
        format!("An error occurred while processing the file: {}", self)
    }
}

#[cfg(feature = "web")]
impl AnalysisError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        if matches!(self, AnalysisError::TooLarge(_)) {
            axum::http::StatusCode::PAYLOAD_TOO_LARGE
        } else if self.is_client_error() {
            axum::http::StatusCode::BAD_REQUEST
        } else {
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(feature = "web")]
impl axum::response::IntoResponse for AnalysisError {
    fn into_response(self) -> axum::response::Response {
        log::error!("upload failed: {}", self);
        (self.status_code(), self.user_message()).into_response()
    }
}

//! JSON response body for a scan request.
//!
//! A hosting web layer serialises [`ScanResponse`] as-is:
//!
//! ```json
//! { "recognized_text": "...", "corrected_text": "..." }
//! { "error": "Unsupported file format. Please upload PNG or JPG." }
//! ```

use serde::Serialize;

use super::handler::{ScanResult, UploadError};

/// Success or failure body, untagged on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanResponse {
    Success {
        recognized_text: String,
        corrected_text: String,
    },
    Failure {
        error: String,
    },
}

impl ScanResponse {
    /// HTTP-style status code to pair with this body.
    pub fn from_result(result: &Result<ScanResult, UploadError>) -> (u16, Self) {
        match result {
            Ok(scan) => (
                200,
                ScanResponse::Success {
                    recognized_text: scan.recognized_text.clone(),
                    corrected_text: scan.corrected_text.clone(),
                },
            ),
            Err(e) => (e.status_code(), ScanResponse::Failure { error: e.to_string() }),
        }
    }

    /// `true` for [`ScanResponse::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ScanResponse::Success { .. })
    }
}

impl From<ScanResult> for ScanResponse {
    fn from(scan: ScanResult) -> Self {
        ScanResponse::Success {
            recognized_text: scan.recognized_text,
            corrected_text: scan.corrected_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::OcrError;
    use serde_json::json;

    #[test]
    fn success_serialises_both_texts() {
        let (status, body) = ScanResponse::from_result(&Ok(ScanResult {
            recognized_text: "Lipitorr!".into(),
            corrected_text: "Lipitor".into(),
        }));
        assert_eq!(status, 200);
        assert!(body.is_success());
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "recognized_text": "Lipitorr!", "corrected_text": "Lipitor" })
        );
    }

    #[test]
    fn client_error_serialises_message() {
        let (status, body) = ScanResponse::from_result(&Err(UploadError::UnsupportedFormat));
        assert_eq!(status, 400);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "error": "Unsupported file format. Please upload PNG or JPG." })
        );
    }

    #[test]
    fn processing_error_is_500() {
        let (status, body) =
            ScanResponse::from_result(&Err(UploadError::Processing(OcrError::EmptyDocument)));
        assert_eq!(status, 500);
        assert_eq!(
            body,
            ScanResponse::Failure {
                error: "Processing failed: no text found in document".into()
            }
        );
    }
}

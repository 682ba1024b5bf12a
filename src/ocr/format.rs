//! Accepted upload image formats.
//!
//! Only PNG and JPEG are accepted; the format is chosen from the upload's
//! file extension (case-insensitive).

use std::path::Path;

/// Image formats accepted for OCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Detect the format from a file name such as `"scan.JPG"`.
    ///
    /// Returns `None` for missing or non-whitelisted extensions.
    ///
    /// ```
    /// use prescription_ocr::ocr::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_filename("rx.png"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_filename("rx.JPEG"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_filename("rx.pdf"), None);
    /// ```
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// Inverse of [`mime_type`](Self::mime_type).
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    /// MIME type sent to the OCR service.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_whitelisted_extensions() {
        assert_eq!(ImageFormat::from_filename("a.png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_filename("a.jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_filename("a.jpeg"), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(ImageFormat::from_filename("SCAN.PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_filename("scan.Jpg"), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn rejects_other_or_missing_extensions() {
        assert_eq!(ImageFormat::from_filename("scan.gif"), None);
        assert_eq!(ImageFormat::from_filename("scan"), None);
        assert_eq!(ImageFormat::from_filename(""), None);
        assert_eq!(ImageFormat::from_filename(".png"), None);
    }

    #[test]
    fn only_last_extension_counts() {
        assert_eq!(ImageFormat::from_filename("scan.png.exe"), None);
        assert_eq!(ImageFormat::from_filename("scan.tar.jpg"), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn mime_types() {
        assert_eq!(ImageFormat::Png.mime_type(), "image/png");
        assert_eq!(ImageFormat::Jpeg.mime_type(), "image/jpeg");
    }

    #[test]
    fn mime_type_round_trips_and_rejects_others() {
        for f in [ImageFormat::Png, ImageFormat::Jpeg] {
            assert_eq!(ImageFormat::from_mime_type(f.mime_type()), Some(f));
        }
        assert_eq!(ImageFormat::from_mime_type("image/gif"), None);
        assert_eq!(ImageFormat::from_mime_type("application/pdf"), None);
    }
}

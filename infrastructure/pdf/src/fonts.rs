use std::path::Path;

const REGULAR_FONT_FILE: &str = "roboto_regular.ttf";
const BOLD_FONT_FILE: &str = "roboto_bold.ttf";

/// Preferred TrueType fonts for the shopping list.
///
/// A missing face is represented as `None`; the renderer then uses the
/// matching built-in Helvetica face.
#[derive(Debug, Clone, Default)]
pub struct FontSet {
    pub regular: Option<Vec<u8>>,
    pub bold: Option<Vec<u8>>,
}

impl FontSet {
    /// Only built-in fonts.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_bytes(regular: Vec<u8>, bold: Vec<u8>) -> Self {
        Self {
            regular: Some(regular),
            bold: Some(bold),
        }
    }

    /// Loads `roboto_regular.ttf` and `roboto_bold.ttf` from `dir`.
    /// Unreadable files are logged and left out.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            regular: read_font(&dir.join(REGULAR_FONT_FILE)),
            bold: read_font(&dir.join(BOLD_FONT_FILE)),
        }
    }
}

fn read_font(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => {
            tracing::debug!(path = %path.display(), size = bytes.len(), "loaded font");
            Some(bytes)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "font unavailable, falling back to built-in font"
            );
            None
        }
    }
}

/// Cheap check of the sfnt header so obviously broken files never reach the
/// font parser.
pub(crate) fn looks_like_font(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"true") | Some(b"ttcf")
    )
}

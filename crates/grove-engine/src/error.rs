use std::{error, fmt};

/// Errors raised while building a level.
///
/// Per-frame updates never fail; everything that could go wrong is checked
/// once, up front, when the level is constructed.
#[derive(Debug)]
pub enum LevelError {
    /// A required layout layer is absent.
    MissingLayer(String),
    /// A required image collection is absent or empty.
    MissingAsset(String),
    /// An object-layer code has no image at that index.
    IndexOutOfRange {
        code: usize,
        len: usize,
        row: usize,
        col: usize,
    },
    /// A cell code that must be a non-negative integer is not.
    InvalidCell {
        layer: String,
        row: usize,
        col: usize,
        code: String,
    },
    /// Asset manifest JSON could not be parsed.
    Manifest(serde_json::Error),
    /// Level configuration JSON could not be parsed.
    Config(serde_json::Error),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::MissingLayer(name) => write!(f, "missing layout layer '{}'", name),
            LevelError::MissingAsset(name) => write!(f, "missing image collection '{}'", name),
            LevelError::IndexOutOfRange { code, len, row, col } => write!(
                f,
                "object code {} at row {}, col {} has no image (only {} available)",
                code, row, col, len
            ),
            LevelError::InvalidCell { layer, row, col, code } => write!(
                f,
                "invalid cell code '{}' in layer '{}' at row {}, col {}",
                code, layer, row, col
            ),
            LevelError::Manifest(err) => write!(f, "failed to parse asset manifest: {}", err),
            LevelError::Config(err) => write!(f, "failed to parse level config: {}", err),
        }
    }
}

impl error::Error for LevelError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LevelError::Manifest(err) | LevelError::Config(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_culprit() {
        let err = LevelError::IndexOutOfRange { code: 5, len: 3, row: 1, col: 2 };
        let msg = err.to_string();
        assert!(msg.contains("object code 5"));
        assert!(msg.contains("only 3"));

        let err = LevelError::MissingLayer("grass".into());
        assert_eq!(err.to_string(), "missing layout layer 'grass'");
    }

    #[test]
    fn parse_errors_expose_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = LevelError::Config(json_err);
        assert!(error::Error::source(&err).is_some());
    }
}

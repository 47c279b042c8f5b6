use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("Media URI cannot be empty.")]
    EmptyMediaUri,

    #[error("Media URL is malformed: {0}")]
    InvalidUrl(String),
}

//
// ─── MEDIA LOCATOR ─────────────────────────────────────────────────────────────
//

/// Opaque locator for a playable clip or a displayable image.
///
/// The quiz never fetches media itself; the presentation layer hands this
/// locator to whatever plays or renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaUri {
    FilePath(PathBuf),
    Url(Url),
}

impl MediaUri {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        Ok(MediaUri::FilePath(p))
    }

    pub fn from_url(url: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = url.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        let u = Url::parse(s).map_err(|err| MediaValidationError::InvalidUrl(err.to_string()))?;
        Ok(MediaUri::Url(u))
    }

    /// Parse a raw locator: anything with a URL scheme is treated as a URL,
    /// everything else as a file path.
    ///
    /// # Errors
    ///
    /// Returns `MediaValidationError::EmptyMediaUri` for blank input and
    /// `MediaValidationError::InvalidUrl` for a malformed `scheme://` locator.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyMediaUri);
        }
        if s.contains("://") {
            return Self::from_url(s);
        }
        Self::from_file(s)
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            MediaUri::FilePath(p) => Some(p.as_path()),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            MediaUri::Url(u) => Some(u),
            _ => None,
        }
    }

    /// String form suitable for an HTML `src` attribute.
    #[must_use]
    pub fn to_src(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaUri::FilePath(p) => write!(f, "{}", p.display()),
            MediaUri::Url(u) => write!(f, "{u}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_detects_urls_and_paths() {
        let url = MediaUri::parse("https://example.org/clip.mp3").unwrap();
        assert!(url.as_url().is_some());
        assert_eq!(url.to_src(), "https://example.org/clip.mp3");

        let path = MediaUri::parse("music/bach.mp3").unwrap();
        assert_eq!(path.as_path(), Some(Path::new("music/bach.mp3")));
        assert_eq!(path.to_src(), "music/bach.mp3");
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert_eq!(
            MediaUri::parse("   "),
            Err(MediaValidationError::EmptyMediaUri)
        );
    }

    #[test]
    fn parse_rejects_malformed_url() {
        let err = MediaUri::parse("http://").unwrap_err();
        assert!(matches!(err, MediaValidationError::InvalidUrl(_)));
    }
}

//! Source URL validation by file extension.

/// Extensions accepted when no configuration overrides them.
pub const DEFAULT_FORMATS: &[&str] = &["mp3", "ogg", "mp4"];

/// Check a candidate source against the default whitelist.
///
/// Returns false for a missing or empty URL. Otherwise the text after the
/// last `.` must equal one of `mp3`, `ogg` or `mp4` exactly (case-sensitive).
pub fn is_valid_format(url: Option<&str>) -> bool {
    FormatWhitelist::default().is_valid(url)
}

/// Text after the last `.` of `url`, or the whole string if it has none.
pub fn extension(url: &str) -> &str {
    match url.rfind('.') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Set of playable file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWhitelist {
    extensions: Vec<String>,
}

impl Default for FormatWhitelist {
    fn default() -> Self {
        Self::new(DEFAULT_FORMATS.iter().copied())
    }
}

impl FormatWhitelist {
    /// Create a whitelist from the given extensions (without leading dots).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// The accepted extensions.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `url` names a playable source.
    pub fn is_valid(&self, url: Option<&str>) -> bool {
        match url {
            Some(url) if !url.is_empty() => {
                let ext = extension(url);
                self.extensions.iter().any(|allowed| allowed == ext)
            }
            _ => false,
        }
    }
}

//! Initialization input read from the host container.

/// Container attribute carrying the initial source URL.
pub const DATA_SOURCE: &str = "data-source";

/// Text-node attribute carrying the initial status text.
pub const DATA_DEFAULT: &str = "data-default";

/// Values a player is mounted with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mount {
    pub source: Option<String>,
    pub default_text: Option<String>,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.source = Some(url.into());
        self
    }

    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = Some(text.into());
        self
    }

    /// Build from `(name, value)` attribute pairs. Empty values count as
    /// absent and unknown attributes are ignored.
    pub fn from_attributes<'a, I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut mount = Self::default();
        for (name, value) in attributes {
            if value.is_empty() {
                continue;
            }
            match name {
                DATA_SOURCE => mount.source = Some(value.to_string()),
                DATA_DEFAULT => mount.default_text = Some(value.to_string()),
                _ => {}
            }
        }
        mount
    }
}

//! Rendering settings.

/// Base paths used to resolve relative image and attachment targets.
///
/// `None` or an empty string means no prefixing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderSettings {
    /// Prefix for relative `!image!` paths.
    pub image_path: Option<String>,
    /// Prefix for `[attach:file]` targets.
    pub attach_path: Option<String>,
}

impl RenderSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_attach_path(mut self, path: impl Into<String>) -> Self {
        self.attach_path = Some(path.into());
        self
    }

    pub(crate) fn image_base(&self) -> &str {
        self.image_path.as_deref().unwrap_or_default()
    }

    pub(crate) fn attach_base(&self) -> &str {
        self.attach_path.as_deref().unwrap_or_default()
    }
}

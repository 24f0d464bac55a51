use serde::{Deserialize, Serialize};

/// Brand palette and type for the proposal layouts.
///
/// Static, not user-supplied. Exposed to templates as `brand`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandStyles {
    /// Primary text and footer color.
    pub navy: String,

    /// Page background.
    pub gray: String,

    pub white: String,

    /// CSS `font-family` value for body text.
    pub font_family: String,
}

impl Default for BrandStyles {
    fn default() -> Self {
        Self {
            navy: "#0f1d2c".to_string(),
            gray: "#e9e9e9".to_string(),
            white: "#ffffff".to_string(),
            font_family: "'Raleway', 'Helvetica Neue', Helvetica, Arial, sans-serif".to_string(),
        }
    }
}

//! Appointment-type to color-token lookup.
//!
//! The engine hands out opaque tokens; turning a token into an actual color
//! is the rendering layer's job.

use std::collections::HashMap;

use crate::config::PaletteConfig;

/// Fixed lookup from appointment type to a color token, with a fallback for
/// unknown types.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    tokens: HashMap<String, String>,
    default_token: String,
}

impl ColorPalette {
    pub fn from_config(config: &PaletteConfig) -> Self {
        Self {
            tokens: config.tokens.clone(),
            default_token: config.default_token.clone(),
        }
    }

    /// The color token for an appointment type.
    pub fn token_for(&self, appointment_type: &str) -> &str {
        self.tokens
            .get(appointment_type)
            .map(String::as_str)
            .unwrap_or(&self.default_token)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::from_config(&PaletteConfig::default())
    }
}

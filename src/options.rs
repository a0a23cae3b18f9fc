use crate::error::{EpsError, EpsResult};

/// How a ring's two bounding boxes become `TC` operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingMapping {
    /// Outer circle: `(H - x + r, y + r)`. Inner circle: `(x + r, H - y + r)`.
    /// Byte compatible with existing EPS output for these symbols.
    #[default]
    Legacy,
    /// Both centers mirrored like every other shape: `(x + r, H - (y + r))`.
    Mirrored,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EpsOptions {
    pub creator: String,
    pub default_title: String, // used when the scene title is empty
    pub font_name: String,
    pub font_size: f64,
    pub ring_mapping: RingMapping,
}

impl Default for EpsOptions {
    fn default() -> Self {
        Self {
            creator: "OkapiBarcode".to_string(),
            default_title: "OkapiBarcode Generated Symbol".to_string(),
            font_name: "Helvetica".to_string(),
            font_size: 8.0,
            ring_mapping: RingMapping::Legacy,
        }
    }
}

impl EpsOptions {
    pub fn validate(&self) -> EpsResult<()> {
        if self.creator.trim().is_empty() {
            return Err(EpsError::validation("creator must be non-empty"));
        }
        if self.font_name.trim().is_empty() || self.font_name.contains(char::is_whitespace) {
            return Err(EpsError::validation(
                "font name must be a single non-empty PostScript name",
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(EpsError::validation("font size must be finite and > 0"));
        }
        Ok(())
    }

    pub fn with_ring_mapping(mut self, mapping: RingMapping) -> Self {
        self.ring_mapping = mapping;
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }
}

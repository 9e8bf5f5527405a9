//! Styling for the static parts of the face.
//!
//! Sector opacity and stroke are fixed by the geometry layer; the theme
//! only covers the face background, marks, hands, and center dot. The
//! defaults reproduce the built-in look, and hosts can override any
//! subset from a YAML document.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetError};

/// Colors and stroke widths for the face chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Theme {
    pub face_fill: String,
    pub face_stroke: String,
    pub face_stroke_width: f64,
    pub mark_color: String,
    pub hand_color: String,
    pub second_hand_color: String,
    pub center_dot_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            face_fill: "#f8f8f8".to_string(),
            face_stroke: "#333".to_string(),
            face_stroke_width: 2.0,
            mark_color: "#333".to_string(),
            hand_color: "#333".to_string(),
            second_hand_color: "#f44336".to_string(),
            center_dot_color: "#333".to_string(),
        }
    }
}

impl Theme {
    /// Parse a theme from a YAML document. Absent keys keep their
    /// defaults, so a theme file only needs to name what it changes.
    ///
    /// ```
    /// use dialface::Theme;
    ///
    /// let theme = Theme::from_yaml("second_hand_color: \"#00bcd4\"").unwrap();
    /// assert_eq!(theme.second_hand_color, "#00bcd4");
    /// assert_eq!(theme.face_fill, "#f8f8f8");
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(WidgetError::theme_parse)
    }
}

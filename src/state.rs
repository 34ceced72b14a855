//! User-selected view state and its flat key-value JSON form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Result, ScalarError};
use crate::theory::{Note, ScaleType};

/// Fretboard orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Frets run left to right, strings stacked top to bottom
    #[default]
    Horizontal,
    /// Frets run top to bottom, strings side by side
    Vertical,
}

impl Orientation {
    pub fn id(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Orientation {
    type Err = ScalarError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(ScalarError::UnknownOrientation(s.to_string())),
        }
    }
}

/// Everything the user has selected. This is the only persisted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub key: Note,
    pub scale: ScaleType,
    pub orientation: Orientation,
    pub show_note_names: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            key: Note::C,
            scale: ScaleType::Major,
            orientation: Orientation::Horizontal,
            show_note_names: true,
        }
    }
}

impl AppState {
    pub fn with_key(self, key: Note) -> Self {
        Self { key, ..self }
    }

    pub fn with_scale(self, scale: ScaleType) -> Self {
        Self { scale, ..self }
    }

    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self { orientation, ..self }
    }

    pub fn toggled_note_names(self) -> Self {
        Self {
            show_note_names: !self.show_note_names,
            ..self
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode saved settings, laying each recognised field over the
    /// defaults. Missing or invalid fields keep their default value and
    /// unknown fields are ignored, so settings written by older or newer
    /// versions still load.
    pub fn from_json_merged(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(map) = value else {
            return Err(ScalarError::NotAnObject);
        };
        Ok(Self::default().merged_with(&map))
    }

    fn merged_with(self, map: &Map<String, Value>) -> Self {
        let mut state = self;

        if let Some(v) = map.get("key") {
            match v.as_str().map(str::parse::<Note>) {
                Some(Ok(key)) => state.key = key,
                _ => warn!("ignoring invalid saved key: {v}"),
            }
        }
        if let Some(v) = map.get("scale") {
            match v.as_str().map(str::parse::<ScaleType>) {
                Some(Ok(scale)) => state.scale = scale,
                _ => warn!("ignoring invalid saved scale: {v}"),
            }
        }
        if let Some(v) = map.get("orientation") {
            match v.as_str().map(str::parse::<Orientation>) {
                Some(Ok(orientation)) => state.orientation = orientation,
                _ => warn!("ignoring invalid saved orientation: {v}"),
            }
        }
        if let Some(v) = map.get("showNoteNames") {
            match v.as_bool() {
                Some(show) => state.show_note_names = show,
                None => warn!("ignoring invalid saved showNoteNames: {v}"),
            }
        }

        state
    }
}

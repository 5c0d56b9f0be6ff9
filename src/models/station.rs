use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dataset properties the map does not interpret but keeps so a saved network
/// reproduces the shape it was loaded from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDetails {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub current_status: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub ticket_zone: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub valid_from: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub stroke: Value,
}

/// A stop on the network
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub code: String,
    pub name: String,
    pub description: String,
    /// (longitude, latitude) in degrees
    pub coordinates: (f64, f64),
    /// Projected screen position, before pan and zoom
    pub position: (f64, f64),
    pub details: StationDetails,
    traversed: bool,
    highlighted: bool,
}

impl Station {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, coordinates: (f64, f64)) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
            coordinates,
            position: (0.0, 0.0),
            details: StationDetails::default(),
            traversed: false,
            highlighted: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: StationDetails) -> Self {
        self.details = details;
        self
    }

    /// Whether the current path search has already visited this station
    #[must_use]
    pub fn is_traversed(&self) -> bool {
        self.traversed
    }

    pub fn set_traversed(&mut self, traversed: bool) {
        self.traversed = traversed;
    }

    /// Whether this station is part of the displayed route
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn clear_flags(&mut self) {
        self.traversed = false;
        self.highlighted = false;
    }
}

//! Lookup tables for the prediction heuristic and cost-of-living index.
//!
//! Text from records and queries is mapped onto enumerated keys; anything
//! that does not match a known key gets the documented default multiplier
//! of 1.0. Keys match exactly; callers normalize text first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier applied when a key is not in a table.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    HighSchool,
    Bachelor,
    Master,
    PhD,
}

impl Education {
    pub const ALL: [Education; 4] = [
        Education::HighSchool,
        Education::Bachelor,
        Education::Master,
        Education::PhD,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::PhD => "PhD",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Self::HighSchool => 0.8,
            Self::Bachelor => 1.0,
            Self::Master => 1.2,
            Self::PhD => 1.35,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == text)
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cities with a location multiplier and/or a cost-of-living index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Mumbai,
    Bangalore,
    Delhi,
    Gurgaon,
    Hyderabad,
    Pune,
    Chennai,
    Kolkata,
    Ahmedabad,
    Noida,
}

impl City {
    pub const ALL: [City; 10] = [
        City::Mumbai,
        City::Bangalore,
        City::Delhi,
        City::Gurgaon,
        City::Hyderabad,
        City::Pune,
        City::Chennai,
        City::Kolkata,
        City::Ahmedabad,
        City::Noida,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mumbai => "Mumbai",
            Self::Bangalore => "Bangalore",
            Self::Delhi => "Delhi",
            Self::Gurgaon => "Gurgaon",
            Self::Hyderabad => "Hyderabad",
            Self::Pune => "Pune",
            Self::Chennai => "Chennai",
            Self::Kolkata => "Kolkata",
            Self::Ahmedabad => "Ahmedabad",
            Self::Noida => "Noida",
        }
    }

    /// Salary multiplier used by the prediction heuristic.
    pub fn location_multiplier(self) -> f64 {
        match self {
            Self::Mumbai => 1.2,
            Self::Bangalore => 1.15,
            Self::Delhi => 1.1,
            Self::Gurgaon => 1.12,
            Self::Hyderabad => 1.05,
            Self::Pune => 1.08,
            Self::Chennai => 1.0,
            Self::Kolkata | Self::Ahmedabad | Self::Noida => DEFAULT_MULTIPLIER,
        }
    }

    /// Cost-of-living index relative to Bangalore = 100.
    pub fn cost_index(self) -> f64 {
        match self {
            Self::Mumbai => 110.0,
            Self::Bangalore => 100.0,
            Self::Delhi => 95.0,
            Self::Gurgaon => 98.0,
            Self::Hyderabad => 85.0,
            Self::Pune => 90.0,
            Self::Chennai => 88.0,
            Self::Kolkata => 75.0,
            Self::Ahmedabad => 70.0,
            Self::Noida => 85.0,
        }
    }

    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == text)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Education multiplier for free text; unknown or empty → 1.0.
pub fn education_multiplier(education: &str) -> f64 {
    Education::parse(education).map_or(DEFAULT_MULTIPLIER, Education::multiplier)
}

/// Location multiplier for free text; unknown city → 1.0.
pub fn location_multiplier(location: &str) -> f64 {
    City::parse(location).map_or(DEFAULT_MULTIPLIER, City::location_multiplier)
}

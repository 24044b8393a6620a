//! Domain records for drivers and IoT-tagged dustbins.
//!
//! Field shapes mirror the hosted document store, which keeps camelCase
//! documents keyed by a store-assigned id.

use serde::{Deserialize, Serialize};

use crate::traits::Locatable;

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether this is a usable map position: finite and within range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// The store writes (0, 0) for entities placed without a position.
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

/// Dustbin health bucket shown on cards and markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinStatus {
    Critical,
    Warning,
    Good,
}

impl BinStatus {
    /// Dashboard thresholds: 90% and above is critical, 75% warns.
    pub fn from_fill_level(fill_level: u8) -> Self {
        if fill_level >= 90 {
            BinStatus::Critical
        } else if fill_level >= 75 {
            BinStatus::Warning
        } else {
            BinStatus::Good
        }
    }
}

/// An IoT-tagged waste container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dustbin {
    pub id: String,
    /// Area name shown on cards, also the grouping key for area stats.
    pub location: String,
    /// Fill percentage, 0-100.
    pub fill_level: u8,
    /// Battery percentage, 0-100.
    pub battery_level: u8,
    /// Signal percentage, 0-100.
    pub signal_strength: u8,
    pub last_emptied: String,
    pub status: BinStatus,
    /// Degrees Celsius.
    pub temperature: f64,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    pub install_date: String,
    pub model: String,
    /// Litres.
    pub capacity: u32,
}

impl Locatable for Dustbin {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
            .filter(|coords| coords.is_valid() && !coords.is_unset())
    }
}

/// Driver duty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    Break,
    Offline,
}

/// A collection driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: DriverStatus,
    pub current_route: String,
    pub location: String,
    pub completed_today: u32,
    /// Percentage, 0-100.
    pub efficiency: u8,
    pub vehicle_id: String,
    pub address: String,
    pub emergency_contact: String,
    pub license_number: String,
    pub experience: String,
}

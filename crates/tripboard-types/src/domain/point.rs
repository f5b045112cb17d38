use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Stable opaque identifier of a trip point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(Uuid);

impl PointId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Reference to a destination record (resolved by the view layer)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationId(String);

impl DestinationId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reference to an offer record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Category of a trip point (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointKind {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl PointKind {
    pub const ALL: [PointKind; 9] = [
        PointKind::Taxi,
        PointKind::Bus,
        PointKind::Train,
        PointKind::Ship,
        PointKind::Drive,
        PointKind::Flight,
        PointKind::CheckIn,
        PointKind::Sightseeing,
        PointKind::Restaurant,
    ];

    /// Human-facing label as shown on the board
    pub fn label(&self) -> &'static str {
        match self {
            PointKind::Taxi => "Taxi",
            PointKind::Bus => "Bus",
            PointKind::Train => "Train",
            PointKind::Ship => "Ship",
            PointKind::Drive => "Drive",
            PointKind::Flight => "Flight",
            PointKind::CheckIn => "Check-in",
            PointKind::Sightseeing => "Sightseeing",
            PointKind::Restaurant => "Restaurant",
        }
    }
}

impl std::fmt::Display for PointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Offer picked for a specific point, with the price it was picked at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferSelection {
    pub id: OfferId,
    pub price: u32,
}

/// Single itinerary entry.
///
/// The PointsModel owns the authoritative collection; everything else works
/// on cloned snapshots. `date_to` must not precede `date_from` — enforced by
/// [`Point::validate`] at every mutation entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub kind: PointKind,
    pub destination: DestinationId,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub base_price: u32,
    /// Selected offers in presentation order
    #[serde(default)]
    pub offers: Vec<OfferSelection>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Point {
    pub fn validate(&self) -> Result<()> {
        if self.date_to < self.date_from {
            return Err(Error::InvalidInterval {
                date_from: self.date_from,
                date_to: self.date_to,
            });
        }
        Ok(())
    }

    pub fn duration(&self) -> TimeDelta {
        self.date_to - self.date_from
    }

    pub fn offer_total(&self) -> u32 {
        self.offers.iter().map(|offer| offer.price).sum()
    }

    pub fn total_price(&self) -> u32 {
        self.base_price + self.offer_total()
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.date_to < now
    }

    pub fn is_present(&self, now: DateTime<Utc>) -> bool {
        self.date_from <= now && now <= self.date_to
    }

    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        self.date_from > now
    }
}

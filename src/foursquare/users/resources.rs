use std::fmt::Display;

use chrono::{DateTime, Utc};

/// See [users/checkins](https://developer.foursquare.com/docs/api/users/checkins)
#[derive(Debug, PartialEq, Eq, serde::Serialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CheckinSort {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Sort order of tips and todos.
#[derive(Debug, PartialEq, Eq, serde::Serialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TipSort {
    #[default]
    Recent,
    Nearby,
    Popular,
}

/// Coordinates sent as `ll=<lat>,<lng>`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl serde::Serialize for LatLng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// limit and offset of friends and photos
#[derive(Debug, PartialEq, Eq, serde::Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CheckinsRequest {
    /// max 250
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: CheckinSort,
    #[serde(serialize_with = "chrono::serde::ts_seconds_option::serialize")]
    pub after_timestamp: Option<DateTime<Utc>>,
    #[serde(serialize_with = "chrono::serde::ts_seconds_option::serialize")]
    pub before_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRequest {
    pub neighbors: Option<u32>,
}

#[derive(Debug, PartialEq, serde::Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TipsRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: TipSort,
    pub ll: Option<LatLng>,
}

#[derive(Debug, PartialEq, serde::Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TodosRequest {
    pub sort: TipSort,
    pub ll: Option<LatLng>,
}

#[derive(Debug, PartialEq, Eq, serde::Serialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VenueHistoryRequest {
    #[serde(serialize_with = "chrono::serde::ts_seconds_option::serialize")]
    pub after_timestamp: Option<DateTime<Utc>>,
    #[serde(serialize_with = "chrono::serde::ts_seconds_option::serialize")]
    pub before_timestamp: Option<DateTime<Utc>>,
}

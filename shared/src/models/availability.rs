//! Availability Feed Model
//!
//! Read-only seat occupancy published by the reservation service. Entries carry
//! no reference to editor items; they are matched to the grid by coordinates.

use serde::{Deserialize, Serialize};

/// Table as published by the availability feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicTable {
    pub id: i64,
    pub name: String,
    /// Floor label: a level number ("2") or a floor name ("Terrace")
    #[serde(default)]
    pub floor: Option<String>,
    pub x: i32,
    pub y: i32,
    pub total_seats: u32,
    pub available_seats: u32,
    pub occupied_seats: u32,
    pub is_available: bool,
    #[serde(default)]
    pub reservations: Vec<TableReservation>,
}

/// Reservation touching a published table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReservation {
    pub id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub party_size: u32,
    #[serde(default)]
    pub reservation_date: Option<String>,
    #[serde(default)]
    pub reservation_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Query parameters for the availability feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// `HH:MM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

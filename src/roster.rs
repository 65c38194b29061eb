//! Driver and team metadata tables
//!
//! Abbreviations and team colors come from fixed tables; anything not listed
//! gets a deterministic fallback so the output never depends on lookup order.

use serde::{Deserialize, Serialize};

use crate::schema::DriverEntry;

/// Color used for unknown teams and placeholder records
pub const FALLBACK_TEAM_COLOR: &str = "#cccccc";

/// Team name used for placeholder records
pub const UNKNOWN_TEAM: &str = "Unknown";

/// Driver metadata emitted next to the coordinate series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(specta::Type))]
pub struct DriverRecord {
    pub driver_number: String,
    pub driver_name: String,
    pub driver_abbreviation: String,
    pub team_name: String,
    pub team_color: String,
}

impl DriverRecord {
    /// Record for a driver found in the session's driver list
    pub fn from_entry(entry: &DriverEntry) -> Self {
        let team_name = entry.team_name.clone().unwrap_or_else(|| UNKNOWN_TEAM.to_string());
        Self {
            driver_number: entry.driver_number.clone(),
            driver_abbreviation: driver_abbreviation(&entry.full_name),
            team_color: team_color(&team_name).to_string(),
            driver_name: entry.full_name.clone(),
            team_name,
        }
    }

    /// Stand-in record for a driver without metadata or data
    pub fn placeholder(driver_number: &str) -> Self {
        Self {
            driver_number: driver_number.to_string(),
            driver_name: format!("Driver {driver_number}"),
            driver_abbreviation: format!("DRV{driver_number}"),
            team_name: UNKNOWN_TEAM.to_string(),
            team_color: FALLBACK_TEAM_COLOR.to_string(),
        }
    }
}

/// Three-letter code for a driver's full name
pub fn driver_abbreviation(full_name: &str) -> String {
    known_abbreviation(full_name)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_abbreviation(full_name))
}

/// First three characters of the name, uppercased
pub fn fallback_abbreviation(full_name: &str) -> String {
    full_name.trim().chars().take(3).flat_map(char::to_uppercase).collect()
}

fn known_abbreviation(full_name: &str) -> Option<&'static str> {
    let code = match full_name.trim() {
        "Max Verstappen" => "VER",
        "Sergio Perez" | "Sergio Pérez" => "PER",
        "Yuki Tsunoda" => "TSU",
        "Liam Lawson" => "LAW",
        "Isack Hadjar" => "HAD",
        "Daniel Ricciardo" => "RIC",
        "Lewis Hamilton" => "HAM",
        "George Russell" => "RUS",
        "Andrea Kimi Antonelli" | "Kimi Antonelli" => "ANT",
        "Charles Leclerc" => "LEC",
        "Carlos Sainz" => "SAI",
        "Oliver Bearman" => "BEA",
        "Lando Norris" => "NOR",
        "Oscar Piastri" => "PIA",
        "Fernando Alonso" => "ALO",
        "Lance Stroll" => "STR",
        "Pierre Gasly" => "GAS",
        "Esteban Ocon" => "OCO",
        "Jack Doohan" => "DOO",
        "Franco Colapinto" => "COL",
        "Alexander Albon" | "Alex Albon" => "ALB",
        "Logan Sargeant" => "SAR",
        "Valtteri Bottas" => "BOT",
        "Zhou Guanyu" | "Guanyu Zhou" => "ZHO",
        "Nico Hulkenberg" | "Nico Hülkenberg" => "HUL",
        "Gabriel Bortoleto" => "BOR",
        "Kevin Magnussen" => "MAG",
        _ => return None,
    };
    Some(code)
}

/// Hex color for a team name
pub fn team_color(team_name: &str) -> &'static str {
    match team_name.trim() {
        "Red Bull Racing" | "Red Bull" => "#3671C6",
        "Mercedes" => "#27F4D2",
        "Ferrari" => "#E8002D",
        "McLaren" => "#FF8000",
        "Aston Martin" => "#229971",
        "Alpine" => "#0093CC",
        "Williams" => "#64C4FF",
        "RB" | "Racing Bulls" | "AlphaTauri" => "#6692FF",
        "Kick Sauber" | "Sauber" | "Alfa Romeo" => "#52E252",
        "Haas F1 Team" | "Haas" => "#B6BABD",
        _ => FALLBACK_TEAM_COLOR,
    }
}

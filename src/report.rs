// Room status and guest list reports, read straight from the registry

use crate::billing::format_amount;
use crate::catalog::{PackageType, RoomType};
use crate::registry::Registry;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const ROOM_STATUS_FOOTER: &str = "You Can Book Any Room From The Available Rooms";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomStatusLine {
    pub room_number: u32,
    // Present exactly when the room is occupied
    pub guest_name: Option<String>,
}

impl RoomStatusLine {
    pub fn is_occupied(&self) -> bool {
        self.guest_name.is_some()
    }
}

impl fmt::Display for RoomStatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.guest_name {
            Some(name) => write!(f, "Room {}: Booked by {}", self.room_number, name),
            None => write!(f, "Room {}: Available", self.room_number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestDetail {
    pub room_number: u32,
    pub name: String,
    pub phone: String,
    pub room_type: RoomType,
    pub package: PackageType,
    pub total_bill: f64,
    pub checked_in_on: NaiveDate,
    pub due_out: NaiveDate,
}

impl fmt::Display for GuestDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Room {}:", self.room_number)?;
        writeln!(f, "  Name: {}", self.name)?;
        writeln!(f, "  Phone: {}", self.phone)?;
        writeln!(f, "  Room Type: {}", self.room_type)?;
        writeln!(f, "  Package: {}", self.package)?;
        writeln!(f, "  Total Bill: {}", format_amount(self.total_bill))?;
        write!(f, "  Stay: {} to {}", self.checked_in_on, self.due_out)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomStatusReport {
    pub rooms: Vec<RoomStatusLine>,
}

impl RoomStatusReport {
    pub fn booked(&self) -> impl Iterator<Item = &RoomStatusLine> {
        self.rooms.iter().filter(|line| line.is_occupied())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RoomStatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Room Status ===")?;
        for line in &self.rooms {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", ROOM_STATUS_FOOTER)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestListReport {
    pub guests: Vec<GuestDetail>,
}

impl GuestListReport {
    pub fn total_billed(&self) -> f64 {
        self.guests.iter().map(|g| g.total_bill).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GuestListReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Guest List ===")?;
        for guest in &self.guests {
            writeln!(f, "{}", guest)?;
        }
        Ok(())
    }
}

pub fn room_status_report(registry: &Registry) -> RoomStatusReport {
    let rooms = registry
        .slots()
        .map(|(room_number, record)| RoomStatusLine {
            room_number,
            guest_name: record.guest().map(|g| g.name.clone()),
        })
        .collect();
    RoomStatusReport { rooms }
}

pub fn guest_list_report(registry: &Registry) -> GuestListReport {
    let guests = registry
        .slots()
        .filter_map(|(room_number, record)| {
            record.guest().map(|guest| GuestDetail {
                room_number,
                name: guest.name.clone(),
                phone: guest.phone.clone(),
                room_type: guest.room_type,
                package: guest.package,
                total_bill: guest.total_bill,
                checked_in_on: guest.checked_in_at.date_naive(),
                due_out: guest.due_out(),
            })
        })
        .collect();
    GuestListReport { guests }
}

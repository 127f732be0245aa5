// Static price and duration tables for room types and stay packages

use crate::error::{DeskError, DeskResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Executive,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Executive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
            RoomType::Suite => "Suite",
            RoomType::Executive => "Executive",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            RoomType::Standard => 1.0,
            RoomType::Deluxe => 1.5,
            RoomType::Suite => 2.0,
            RoomType::Executive => 2.5,
        }
    }

    // 1-based menu position
    pub fn from_selection(selection: i64) -> DeskResult<Self> {
        usize::try_from(selection)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| {
                DeskError::InvalidSelection(format!(
                    "room type must be between 1 and {}, got {}",
                    Self::ALL.len(),
                    selection
                ))
            })
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PackageType {
    OneDay,
    TwoDay,
    ThreeDay,
    OneWeek,
    TwoWeek,
    OneMonth,
}

impl PackageType {
    pub const ALL: [PackageType; 6] = [
        PackageType::OneDay,
        PackageType::TwoDay,
        PackageType::ThreeDay,
        PackageType::OneWeek,
        PackageType::TwoWeek,
        PackageType::OneMonth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PackageType::OneDay => "1 Day",
            PackageType::TwoDay => "2 Days",
            PackageType::ThreeDay => "3 Days",
            PackageType::OneWeek => "1 Week",
            PackageType::TwoWeek => "2 Weeks",
            PackageType::OneMonth => "1 Month",
        }
    }

    pub fn duration_days(self) -> u32 {
        match self {
            PackageType::OneDay => 1,
            PackageType::TwoDay => 2,
            PackageType::ThreeDay => 3,
            PackageType::OneWeek => 7,
            PackageType::TwoWeek => 14,
            PackageType::OneMonth => 30,
        }
    }

    pub fn base_price(self) -> f64 {
        match self {
            PackageType::OneDay => 100.0,
            PackageType::TwoDay => 190.0,
            PackageType::ThreeDay => 270.0,
            PackageType::OneWeek => 600.0,
            PackageType::TwoWeek => 1100.0,
            PackageType::OneMonth => 2200.0,
        }
    }

    pub fn from_selection(selection: i64) -> DeskResult<Self> {
        usize::try_from(selection)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| {
                DeskError::InvalidSelection(format!(
                    "package must be between 1 and {}, got {}",
                    Self::ALL.len(),
                    selection
                ))
            })
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

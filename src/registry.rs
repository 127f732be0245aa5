// Guest registry: one slot per room number, owned by the front desk session

use crate::billing::total_bill;
use crate::catalog::{PackageType, RoomType};
use crate::error::{DeskError, DeskResult};
use chrono::{DateTime, Days, Local, NaiveDate};
use serde::Serialize;
use tracing::info;

// Details entered at the check-in desk
#[derive(Debug, Clone)]
pub struct CheckInRequest {
    pub room_number: u32,
    pub name: String,
    pub phone: String,
    pub room_type: RoomType,
    pub package: PackageType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guest {
    pub name: String,
    pub phone: String,
    pub room_type: RoomType,
    pub package: PackageType,
    pub total_bill: f64,
    pub checked_in_at: DateTime<Local>,
}

impl Guest {
    pub fn stay_days(&self) -> u32 {
        self.package.duration_days()
    }

    pub fn due_out(&self) -> NaiveDate {
        self.checked_in_at
            .date_naive()
            .checked_add_days(Days::new(u64::from(self.stay_days())))
            .unwrap_or(NaiveDate::MAX)
    }
}

// A vacant slot holds no guest, so stale details never outlive a checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoomRecord {
    guest: Option<Guest>,
}

impl RoomRecord {
    pub fn is_occupied(&self) -> bool {
        self.guest.is_some()
    }

    pub fn guest(&self) -> Option<&Guest> {
        self.guest.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    rooms: Vec<RoomRecord>,
}

impl Registry {
    // Rooms are numbered 1..=capacity, all vacant
    pub fn new(capacity: u32) -> Self {
        Self {
            rooms: vec![RoomRecord::default(); capacity as usize],
        }
    }

    pub fn capacity(&self) -> usize {
        self.rooms.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_occupied()).count()
    }

    pub fn vacant_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    pub fn validate_room(&self, raw: i64) -> DeskResult<u32> {
        let out_of_range = || DeskError::OutOfRange {
            room: raw,
            capacity: self.capacity(),
        };
        let room = u32::try_from(raw).map_err(|_| out_of_range())?;
        self.slot_index(room)?;
        Ok(room)
    }

    fn slot_index(&self, room: u32) -> DeskResult<usize> {
        let idx = (room as usize).checked_sub(1);
        match idx {
            Some(idx) if idx < self.rooms.len() => Ok(idx),
            _ => Err(DeskError::OutOfRange {
                room: i64::from(room),
                capacity: self.capacity(),
            }),
        }
    }

    pub fn room(&self, room: u32) -> DeskResult<&RoomRecord> {
        let idx = self.slot_index(room)?;
        Ok(&self.rooms[idx])
    }

    pub fn guest(&self, room: u32) -> DeskResult<Option<&Guest>> {
        Ok(self.room(room)?.guest())
    }

    pub fn ensure_vacant(&self, room: u32) -> DeskResult<()> {
        if self.room(room)?.is_occupied() {
            return Err(DeskError::RoomOccupied { room });
        }
        Ok(())
    }

    pub fn check_in(&mut self, request: CheckInRequest) -> DeskResult<f64> {
        self.check_in_at(request, Local::now())
    }

    pub fn check_in_at(
        &mut self,
        request: CheckInRequest,
        checked_in_at: DateTime<Local>,
    ) -> DeskResult<f64> {
        let idx = self.slot_index(request.room_number)?;
        let slot = &mut self.rooms[idx];
        if slot.is_occupied() {
            return Err(DeskError::RoomOccupied {
                room: request.room_number,
            });
        }

        let bill = total_bill(request.room_type, request.package);
        info!(
            room = request.room_number,
            room_type = %request.room_type,
            package = %request.package,
            bill,
            "guest checked in"
        );

        slot.guest = Some(Guest {
            name: request.name,
            phone: request.phone,
            room_type: request.room_type,
            package: request.package,
            total_bill: bill,
            checked_in_at,
        });
        Ok(bill)
    }

    pub fn check_out(&mut self, room: u32) -> DeskResult<Guest> {
        let idx = self.slot_index(room)?;
        let guest = self.rooms[idx]
            .guest
            .take()
            .ok_or(DeskError::RoomNotOccupied { room })?;
        info!(room, "guest checked out");
        Ok(guest)
    }

    // Slots in ascending room-number order
    pub fn slots(&self) -> impl Iterator<Item = (u32, &RoomRecord)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(idx, record)| (idx as u32 + 1, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(room_number: u32, name: &str) -> CheckInRequest {
        CheckInRequest {
            room_number,
            name: name.to_string(),
            phone: "555-0100".to_string(),
            room_type: RoomType::Suite,
            package: PackageType::TwoDay,
        }
    }

    #[test]
    fn test_new_registry_is_vacant() {
        let registry = Registry::new(100);
        assert_eq!(registry.capacity(), 100);
        assert_eq!(registry.vacant_count(), 100);
        assert!(registry.slots().all(|(_, r)| !r.is_occupied()));
    }

    #[test]
    fn test_check_in_then_out_for_every_room() {
        let mut registry = Registry::new(100);
        for room in 1..=100 {
            registry.check_in(request(room, "Guest")).unwrap();
            assert!(registry.room(room).unwrap().is_occupied());

            registry.check_out(room).unwrap();
            assert!(!registry.room(room).unwrap().is_occupied());

            assert!(matches!(
                registry.check_out(room),
                Err(DeskError::RoomNotOccupied { room: r }) if r == room
            ));
        }
        assert_eq!(registry.occupied_count(), 0);
    }

    #[test]
    fn test_double_check_in_is_rejected() {
        let mut registry = Registry::new(10);
        registry.check_in(request(4, "Alice")).unwrap();

        let second = registry.check_in(request(4, "Bob"));
        assert!(matches!(second, Err(DeskError::RoomOccupied { room: 4 })));

        // First guest untouched
        let guest = registry.guest(4).unwrap().unwrap();
        assert_eq!(guest.name, "Alice");
    }

    #[test]
    fn test_out_of_range_rooms() {
        let mut registry = Registry::new(100);

        for room in [0, 101] {
            assert!(matches!(
                registry.check_in(request(room, "Ghost")),
                Err(DeskError::OutOfRange { capacity: 100, .. })
            ));
            assert!(matches!(
                registry.check_out(room),
                Err(DeskError::OutOfRange { .. })
            ));
        }
        assert_eq!(registry.occupied_count(), 0);
    }

    #[test]
    fn test_validate_room_raw_input() {
        let registry = Registry::new(100);
        assert_eq!(registry.validate_room(1).unwrap(), 1);
        assert_eq!(registry.validate_room(100).unwrap(), 100);

        for raw in [0, -5, 101, i64::MAX] {
            assert!(matches!(
                registry.validate_room(raw),
                Err(DeskError::OutOfRange { room, .. }) if room == raw
            ));
        }
    }

    #[test]
    fn test_check_in_stores_guest_and_bill() {
        let mut registry = Registry::new(10);
        let at = Local.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap();

        let bill = registry.check_in_at(request(5, "Alice"), at).unwrap();
        assert_eq!(bill, 380.0);

        let guest = registry.guest(5).unwrap().unwrap();
        assert_eq!(guest.name, "Alice");
        assert_eq!(guest.phone, "555-0100");
        assert_eq!(guest.room_type, RoomType::Suite);
        assert_eq!(guest.package, PackageType::TwoDay);
        assert_eq!(guest.total_bill, 380.0);
        assert_eq!(guest.stay_days(), 2);
        assert_eq!(guest.due_out(), NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
    }

    #[test]
    fn test_check_out_clears_guest_details() {
        let mut registry = Registry::new(10);
        registry.check_in(request(7, "Carol")).unwrap();

        let departed = registry.check_out(7).unwrap();
        assert_eq!(departed.name, "Carol");

        let record = registry.room(7).unwrap();
        assert!(!record.is_occupied());
        assert!(record.guest().is_none());
    }

    #[test]
    fn test_ensure_vacant() {
        let mut registry = Registry::new(3);
        assert!(registry.ensure_vacant(2).is_ok());

        registry.check_in(request(2, "Dan")).unwrap();
        assert!(matches!(
            registry.ensure_vacant(2),
            Err(DeskError::RoomOccupied { room: 2 })
        ));
        assert!(matches!(
            registry.ensure_vacant(4),
            Err(DeskError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_counts_track_occupancy() {
        let mut registry = Registry::new(5);
        registry.check_in(request(1, "A")).unwrap();
        registry.check_in(request(3, "B")).unwrap();
        assert_eq!(registry.occupied_count(), 2);
        assert_eq!(registry.vacant_count(), 3);

        registry.check_out(1).unwrap();
        assert_eq!(registry.vacant_count(), 4);
    }

    #[test]
    fn test_slot_reused_after_checkout() {
        let mut registry = Registry::new(2);
        registry.check_in(request(1, "First")).unwrap();
        registry.check_out(1).unwrap();
        registry.check_in(request(1, "Second")).unwrap();

        assert_eq!(registry.guest(1).unwrap().unwrap().name, "Second");
    }

    #[test]
    fn test_slots_ascending() {
        let registry = Registry::new(4);
        let numbers: Vec<u32> = registry.slots().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_last_slot_numbered_by_capacity() {
        let capacity = u32::from(u16::MAX);
        let registry = Registry::new(capacity);
        assert_eq!(registry.capacity(), capacity as usize);

        let last = registry.slots().last().map(|(n, _)| n);
        assert_eq!(last, Some(capacity));
        assert_eq!(registry.validate_room(i64::from(capacity)).unwrap(), capacity);
    }
}

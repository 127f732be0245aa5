// Bill calculation for a stay

use crate::catalog::{PackageType, RoomType};

pub fn total_bill(room_type: RoomType, package: PackageType) -> f64 {
    package.base_price() * room_type.multiplier()
}

// Currency display used by every screen that shows a price
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

// Front desk occupancy tracking for a single hotel

pub mod billing;
pub mod catalog;
pub mod config;
pub mod error;
pub mod registry;
pub mod report;
pub mod session;

// Re-export key types for convenience
pub use billing::{format_amount, total_bill};
pub use catalog::{PackageType, RoomType};
pub use config::{Credentials, DeskConfig};
pub use error::{DeskError, DeskResult};
pub use registry::{CheckInRequest, Guest, Registry, RoomRecord};
pub use report::{
    guest_list_report, room_status_report, GuestDetail, GuestListReport, RoomStatusLine,
    RoomStatusReport,
};
pub use session::{Screen, Session, SessionState};

use thiserror::Error;

// Every failure the front desk can report to the operator
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Room {room} is already occupied. Please choose another room.")]
    RoomOccupied { room: u32 },

    #[error("Room {room} is already vacant.")]
    RoomNotOccupied { room: u32 },

    #[error("Room number {room} does not exist (valid rooms: 1-{capacity}).")]
    OutOfRange { room: i64, capacity: usize },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid choice: {0}")]
    InvalidMenuChoice(String),

    #[error("Invalid username or password")]
    AuthenticationFailed,

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    // Errors the menu loop prints and recovers from; anything else ends the session
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DeskError::Io(_) | DeskError::InvalidConfig(_))
    }
}

pub type DeskResult<T> = Result<T, DeskError>;

// Front desk session: login gate and the operator menu loop

use crate::billing::format_amount;
use crate::catalog::{PackageType, RoomType};
use crate::config::{Credentials, DeskConfig};
use crate::error::{DeskError, DeskResult};
use crate::registry::{CheckInRequest, Registry};
use crate::report::{guest_list_report, room_status_report};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    // Reached by leaving the main menu; offers logout or exit
    AccountMenu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Screen),
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StartChoice {
    Login,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    CheckIn,
    CheckOut,
    RoomStatus,
    GuestList,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountChoice {
    Logout,
    Exit,
}

fn parse_number(line: &str) -> Option<i64> {
    line.split_whitespace().next()?.parse().ok()
}

fn invalid_choice(line: &str) -> DeskError {
    DeskError::InvalidMenuChoice(format!("{:?}", line.trim()))
}

impl StartChoice {
    fn parse(line: &str) -> DeskResult<Self> {
        match parse_number(line) {
            Some(1) => Ok(StartChoice::Login),
            Some(2) => Ok(StartChoice::Exit),
            _ => Err(invalid_choice(line)),
        }
    }
}

impl MainChoice {
    fn parse(line: &str) -> DeskResult<Self> {
        match parse_number(line) {
            Some(1) => Ok(MainChoice::CheckIn),
            Some(2) => Ok(MainChoice::CheckOut),
            Some(3) => Ok(MainChoice::RoomStatus),
            Some(4) => Ok(MainChoice::GuestList),
            Some(5) => Ok(MainChoice::Exit),
            _ => Err(invalid_choice(line)),
        }
    }
}

impl AccountChoice {
    fn parse(line: &str) -> DeskResult<Self> {
        match parse_number(line) {
            Some(1) => Ok(AccountChoice::Logout),
            Some(2) => Ok(AccountChoice::Exit),
            _ => Err(invalid_choice(line)),
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    registry: Registry,
    credentials: Credentials,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: DeskConfig, input: R, output: W) -> DeskResult<Self> {
        config.validate()?;
        Ok(Self {
            input,
            output,
            registry: Registry::new(config.capacity),
            credentials: config.credentials,
            state: SessionState::LoggedOut,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Operator mistakes are printed and the current menu is shown again;
    // only terminal I/O failures are returned
    pub fn run(&mut self) -> DeskResult<()> {
        while self.state != SessionState::Terminated {
            match self.step() {
                Ok(()) => {}
                Err(err) if err.is_recoverable() => {
                    debug!(error = %err, state = ?self.state, "recovered operator error");
                    writeln!(self.output, "{}", err)?;
                }
                Err(err) => return Err(err),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    pub fn step(&mut self) -> DeskResult<()> {
        match self.state {
            SessionState::LoggedOut => self.start_menu(),
            SessionState::LoggedIn(Screen::MainMenu) => self.main_menu(),
            SessionState::LoggedIn(Screen::AccountMenu) => self.account_menu(),
            SessionState::Terminated => Ok(()),
        }
    }

    // None once the input stream is exhausted. Undecodable bytes become
    // U+FFFD and fail parsing like any other bad input.
    fn read_line(&mut self) -> DeskResult<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> DeskResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn end_of_input(&mut self) -> DeskResult<()> {
        info!("input closed, ending session");
        writeln!(self.output)?;
        self.state = SessionState::Terminated;
        Ok(())
    }

    fn start_menu(&mut self) -> DeskResult<()> {
        writeln!(self.output, "1. Login")?;
        writeln!(self.output, "2. Exit")?;
        let Some(line) = self.prompt("Enter your choice: ")? else {
            return self.end_of_input();
        };

        match StartChoice::parse(&line)? {
            StartChoice::Login => self.login(),
            StartChoice::Exit => {
                self.state = SessionState::Terminated;
                Ok(())
            }
        }
    }

    fn login(&mut self) -> DeskResult<()> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return self.end_of_input();
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return self.end_of_input();
        };
        let username = username.split_whitespace().next().unwrap_or_default();
        let password = password.split_whitespace().next().unwrap_or_default();

        if let Err(err) = self.credentials.verify(username, password) {
            warn!(username, "failed login attempt");
            return Err(err);
        }

        info!(username, "operator logged in");
        writeln!(self.output, "Login successful!")?;
        writeln!(self.output, "=== Welcome to Hotel Management System ===")?;
        writeln!(
            self.output,
            "{} of {} rooms available",
            self.registry.vacant_count(),
            self.registry.capacity()
        )?;
        writeln!(self.output, "System ready!")?;
        self.state = SessionState::LoggedIn(Screen::MainMenu);
        Ok(())
    }

    fn main_menu(&mut self) -> DeskResult<()> {
        writeln!(self.output, "=== Main Menu ===")?;
        writeln!(self.output, "1. Check-in Guest")?;
        writeln!(self.output, "2. Check-out Guest")?;
        writeln!(self.output, "3. View Room Status")?;
        writeln!(self.output, "4. View Guest List")?;
        writeln!(self.output, "5. Exit")?;
        let Some(line) = self.prompt("Enter your choice: ")? else {
            return self.end_of_input();
        };

        let choice = MainChoice::parse(&line)?;
        debug!(?choice, "main menu selection");
        match choice {
            MainChoice::CheckIn => self.check_in(),
            MainChoice::CheckOut => self.check_out(),
            MainChoice::RoomStatus => {
                write!(self.output, "{}", room_status_report(&self.registry))?;
                Ok(())
            }
            MainChoice::GuestList => {
                write!(self.output, "{}", guest_list_report(&self.registry))?;
                Ok(())
            }
            MainChoice::Exit => {
                self.state = SessionState::LoggedIn(Screen::AccountMenu);
                Ok(())
            }
        }
    }

    fn account_menu(&mut self) -> DeskResult<()> {
        writeln!(self.output, "1. Logout")?;
        writeln!(self.output, "2. Exit")?;
        let Some(line) = self.prompt("Enter your choice: ")? else {
            return self.end_of_input();
        };

        match AccountChoice::parse(&line)? {
            AccountChoice::Logout => {
                info!("operator logged out");
                writeln!(self.output, "You have been logged out")?;
                self.state = SessionState::LoggedOut;
            }
            AccountChoice::Exit => self.state = SessionState::Terminated,
        }
        Ok(())
    }

    fn read_number(&mut self, text: &str, what: &str) -> DeskResult<Option<i64>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        parse_number(&line).map(Some).ok_or_else(|| {
            DeskError::InvalidSelection(format!(
                "{} must be a whole number, got {:?}",
                what,
                line.trim()
            ))
        })
    }

    fn check_in(&mut self) -> DeskResult<()> {
        writeln!(self.output, "=== Guest Check-In ===")?;
        let Some(name) = self.prompt("Enter guest name: ")? else {
            return self.end_of_input();
        };
        let Some(phone) = self.prompt("Enter phone number: ")? else {
            return self.end_of_input();
        };

        let room_prompt = format!("Enter room number (1-{}): ", self.registry.capacity());
        let Some(raw_room) = self.read_number(&room_prompt, "room number")? else {
            return self.end_of_input();
        };
        let room_number = self.registry.validate_room(raw_room)?;
        self.registry.ensure_vacant(room_number)?;

        writeln!(self.output, "\nRoom Types:")?;
        for (idx, room_type) in RoomType::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} (Multiplier: x{:.1})",
                idx + 1,
                room_type,
                room_type.multiplier()
            )?;
        }
        let Some(selection) = self.read_number("Select room type: ", "room type")? else {
            return self.end_of_input();
        };
        let room_type = RoomType::from_selection(selection)?;

        writeln!(self.output, "\nPackages:")?;
        for (idx, package) in PackageType::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} ({} days, {})",
                idx + 1,
                package,
                package.duration_days(),
                format_amount(package.base_price())
            )?;
        }
        let Some(selection) = self.read_number("Select package: ", "package")? else {
            return self.end_of_input();
        };
        let package = PackageType::from_selection(selection)?;

        let bill = self.registry.check_in(CheckInRequest {
            room_number,
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            room_type,
            package,
        })?;

        writeln!(self.output, "Total Bill: {}", format_amount(bill))?;
        writeln!(self.output, "Available rooms: {}", self.registry.vacant_count())?;
        writeln!(self.output, "Guest checked in successfully!")?;
        Ok(())
    }

    fn check_out(&mut self) -> DeskResult<()> {
        writeln!(self.output, "=== Guest Check-Out ===")?;
        let Some(raw_room) = self.read_number("Enter room number to check out: ", "room number")?
        else {
            return self.end_of_input();
        };
        let room_number = self.registry.validate_room(raw_room)?;
        self.registry.check_out(room_number)?;

        writeln!(
            self.output,
            "Guest checked out successfully! Room is now vacant."
        )?;
        Ok(())
    }
}

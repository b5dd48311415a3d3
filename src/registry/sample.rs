//! Seeded registry data.
//!
//! There is no persistence layer: each view receives its full record
//! collection at startup and keeps it for the view's lifetime. The seed
//! mirrors the registry's demonstration data set (seven devices, five
//! users, eight incidents, eight email log entries, one pending transfer).

use chrono::{NaiveDate, NaiveDateTime};

use super::models::{
    AccountStatus, DeliveryStatus, Device, DeviceStatus, EmailLogEntry, IncidentStatus,
    TheftIncident, TransferRequest, TransferStatus, UserAccount, UserRole,
};

/// The full in-memory registry handed to the dashboard.
///
/// The engine never mutates these collections. The only mutation anywhere
/// is [`Registry::record_sent_email`], which prepends the entry produced
/// by the simulated compose flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// Registered devices.
    pub devices: Vec<Device>,
    /// Registry user accounts.
    pub users: Vec<UserAccount>,
    /// Reported theft incidents.
    pub incidents: Vec<TheftIncident>,
    /// Outbound email notification log, newest first.
    pub emails: Vec<EmailLogEntry>,
    /// Open and resolved ownership transfer requests.
    pub transfers: Vec<TransferRequest>,
}

/// Headline counts for the overview section, computed from the registry
/// rather than hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total user accounts.
    pub total_users: usize,
    /// Total registered devices.
    pub registered_devices: usize,
    /// Theft incidents still open (active or investigating).
    pub open_theft_reports: usize,
    /// Transfer requests awaiting a decision.
    pub pending_transfers: usize,
}

impl Registry {
    /// Builds the seeded sample registry.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            devices: sample_devices(),
            users: sample_users(),
            incidents: sample_incidents(),
            emails: sample_emails(),
            transfers: sample_transfers(),
        }
    }

    /// Returns the transfer request attached to a device, if any.
    #[must_use]
    pub fn transfer_for(&self, device_id: &str) -> Option<&TransferRequest> {
        self.transfers
            .iter()
            .find(|transfer| transfer.device_id == device_id)
    }

    /// Returns the next free email log identifier (`EM009`, `EM010`, ...).
    #[must_use]
    pub fn next_email_id(&self) -> String {
        let highest = self
            .emails
            .iter()
            .filter_map(|entry| entry.id.strip_prefix("EM"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("EM{:03}", highest + 1)
    }

    /// Prepends a newly sent email to the log, newest first.
    pub fn record_sent_email(&mut self, entry: EmailLogEntry) {
        self.emails.insert(0, entry);
    }

    /// Computes the overview counts.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        let open_theft_reports = self
            .incidents
            .iter()
            .filter(|incident| {
                matches!(
                    incident.status,
                    IncidentStatus::Active | IncidentStatus::Investigating
                )
            })
            .count();
        let pending_transfers = self
            .transfers
            .iter()
            .filter(|transfer| transfer.status == TransferStatus::Pending)
            .count();
        RegistryStats {
            total_users: self.users.len(),
            registered_devices: self.devices.len(),
            open_theft_reports,
            pending_transfers,
        }
    }
}

/// Builds a date, falling back to the epoch for out-of-range input.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Builds a timestamp with minute precision.
fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn device(
    device_id: &str,
    device_name: &str,
    owner: &str,
    kind: &str,
    status: DeviceStatus,
    registration_date: NaiveDate,
    last_seen: Option<NaiveDate>,
) -> Device {
    Device {
        device_id: device_id.to_owned(),
        device_name: device_name.to_owned(),
        owner: owner.to_owned(),
        kind: kind.to_owned(),
        status,
        registration_date,
        last_seen,
        serial_number: None,
        model: None,
        operating_system: None,
        location: None,
    }
}

fn sample_devices() -> Vec<Device> {
    let mut devices = vec![
        device(
            "DEV001",
            "MacBook Pro 16\"",
            "John Doe",
            "Laptop",
            DeviceStatus::Active,
            date(2023, 5, 15),
            Some(date(2023, 10, 25)),
        ),
        device(
            "DEV002",
            "iPhone 14 Pro",
            "Jane Smith",
            "Mobile",
            DeviceStatus::Active,
            date(2023, 6, 22),
            Some(date(2023, 10, 26)),
        ),
        device(
            "DEV003",
            "Dell XPS 15",
            "Robert Johnson",
            "Laptop",
            DeviceStatus::Stolen,
            date(2023, 3, 10),
            Some(date(2023, 9, 15)),
        ),
        device(
            "DEV004",
            "iPad Air",
            "Emily Davis",
            "Tablet",
            DeviceStatus::Available,
            date(2023, 7, 5),
            Some(date(2023, 10, 24)),
        ),
        device(
            "DEV005",
            "Samsung Galaxy S23",
            "Michael Wilson",
            "Mobile",
            DeviceStatus::Recovered,
            date(2023, 4, 18),
            Some(date(2023, 10, 10)),
        ),
        device(
            "DEV006",
            "Lenovo ThinkPad",
            "David Miller",
            "Laptop",
            DeviceStatus::Sold,
            date(2023, 2, 14),
            None,
        ),
        device(
            "DEV007",
            "Google Pixel 7",
            "Lisa Taylor",
            "Mobile",
            DeviceStatus::Transferred,
            date(2023, 8, 1),
            None,
        ),
    ];

    // Technical detail fields shown in the device detail view.
    if let Some(first) = devices.first_mut() {
        first.serial_number = Some("C02XL0GTJGH5".to_owned());
        first.model = Some("MacBook Pro 16\" (2023)".to_owned());
        first.operating_system = Some("macOS Sonoma".to_owned());
        first.location = Some("New York, NY".to_owned());
    }

    devices
}

fn user(
    id: &str,
    name: &str,
    role: UserRole,
    status: AccountStatus,
    device_count: i64,
    registration_date: NaiveDate,
    phone: &str,
    city: &str,
) -> UserAccount {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    UserAccount {
        id: id.to_owned(),
        name: name.to_owned(),
        role,
        status,
        device_count,
        registration_date,
        email,
        phone: Some(phone.to_owned()),
        city: Some(city.to_owned()),
    }
}

fn sample_users() -> Vec<UserAccount> {
    vec![
        user(
            "USR001",
            "John Doe",
            UserRole::User,
            AccountStatus::Active,
            3,
            date(2023, 1, 15),
            "+1 (555) 010-4821",
            "New York, NY",
        ),
        user(
            "USR002",
            "Jane Smith",
            UserRole::Institution,
            AccountStatus::Active,
            2,
            date(2023, 2, 22),
            "+1 (555) 010-7734",
            "Boston, MA",
        ),
        user(
            "USR003",
            "Robert Johnson",
            UserRole::User,
            AccountStatus::Inactive,
            1,
            date(2023, 3, 10),
            "+1 (555) 010-2219",
            "Chicago, IL",
        ),
        user(
            "USR004",
            "Emily Davis",
            UserRole::Institution,
            AccountStatus::Active,
            4,
            date(2023, 4, 5),
            "+1 (555) 010-9058",
            "Austin, TX",
        ),
        user(
            "USR005",
            "Michael Wilson",
            UserRole::User,
            AccountStatus::Active,
            2,
            date(2023, 5, 12),
            "+1 (555) 010-3307",
            "Chicago, IL",
        ),
    ]
}

fn incident(
    id: &str,
    device_id: &str,
    device_name: &str,
    owner: &str,
    report_date: NaiveDate,
    status: IncidentStatus,
    location: &str,
    police_report: bool,
) -> TheftIncident {
    TheftIncident {
        id: id.to_owned(),
        device_id: device_id.to_owned(),
        device_name: device_name.to_owned(),
        owner: owner.to_owned(),
        report_date,
        status,
        location: location.to_owned(),
        police_report,
    }
}

fn sample_incidents() -> Vec<TheftIncident> {
    vec![
        incident(
            "INC001",
            "DEV001",
            "MacBook Pro 16\"",
            "John Doe",
            date(2023, 10, 15),
            IncidentStatus::Active,
            "New York, NY",
            true,
        ),
        incident(
            "INC002",
            "DEV005",
            "Samsung Galaxy S23",
            "Michael Wilson",
            date(2023, 10, 18),
            IncidentStatus::Investigating,
            "Chicago, IL",
            true,
        ),
        incident(
            "INC003",
            "DEV007",
            "Lenovo ThinkPad",
            "David Miller",
            date(2023, 9, 30),
            IncidentStatus::Recovered,
            "Los Angeles, CA",
            true,
        ),
        incident(
            "INC004",
            "DEV010",
            "Samsung Tab S9",
            "Patricia Thomas",
            date(2023, 10, 5),
            IncidentStatus::Closed,
            "Houston, TX",
            false,
        ),
        incident(
            "INC005",
            "DEV002",
            "iPhone 14 Pro",
            "Jane Smith",
            date(2023, 10, 22),
            IncidentStatus::Active,
            "Philadelphia, PA",
            true,
        ),
        incident(
            "INC006",
            "DEV004",
            "iPad Air",
            "Emily Davis",
            date(2023, 10, 12),
            IncidentStatus::Investigating,
            "Phoenix, AZ",
            true,
        ),
        incident(
            "INC007",
            "DEV008",
            "Google Pixel 7",
            "Lisa Taylor",
            date(2023, 9, 25),
            IncidentStatus::Recovered,
            "San Antonio, TX",
            true,
        ),
        incident(
            "INC008",
            "DEV009",
            "HP Spectre x360",
            "James Anderson",
            date(2023, 9, 20),
            IncidentStatus::Closed,
            "San Diego, CA",
            false,
        ),
    ]
}

fn email(
    id: &str,
    recipient: &str,
    subject: &str,
    sent: NaiveDateTime,
    status: DeliveryStatus,
) -> EmailLogEntry {
    EmailLogEntry {
        id: id.to_owned(),
        recipient: recipient.to_owned(),
        subject: subject.to_owned(),
        date: sent,
        status,
    }
}

fn sample_emails() -> Vec<EmailLogEntry> {
    vec![
        email(
            "EM001",
            "john.doe@example.com",
            "Your Device Has Been Registered",
            datetime(2023, 10, 25, 14, 32),
            DeliveryStatus::Delivered,
        ),
        email(
            "EM002",
            "jane.smith@example.com",
            "Security Alert: New Login",
            datetime(2023, 10, 25, 12, 15),
            DeliveryStatus::Delivered,
        ),
        email(
            "EM003",
            "robert.johnson@example.com",
            "Password Reset Request",
            datetime(2023, 10, 24, 18, 45),
            DeliveryStatus::Opened,
        ),
        email(
            "EM004",
            "emily.davis@example.com",
            "Theft Report Confirmation",
            datetime(2023, 10, 24, 10, 22),
            DeliveryStatus::Opened,
        ),
        email(
            "EM005",
            "michael.wilson@example.com",
            "Account Verification Required",
            datetime(2023, 10, 23, 16, 18),
            DeliveryStatus::Bounced,
        ),
        email(
            "EM006",
            "sarah.brown@example.com",
            "Your Monthly Security Report",
            datetime(2023, 10, 22, 9, 5),
            DeliveryStatus::Delivered,
        ),
        email(
            "EM007",
            "david.miller@example.com",
            "Device Status Change",
            datetime(2023, 10, 21, 14, 30),
            DeliveryStatus::Opened,
        ),
        email(
            "EM008",
            "lisa.taylor@example.com",
            "Important: Action Required",
            datetime(2023, 10, 20, 11, 47),
            DeliveryStatus::Failed,
        ),
    ]
}

fn sample_transfers() -> Vec<TransferRequest> {
    vec![TransferRequest {
        id: "TR001".to_owned(),
        device_id: "DEV001".to_owned(),
        status: TransferStatus::Pending,
        requested_by: "Jane Smith".to_owned(),
        request_date: date(2023, 10, 20),
        reason: "Employee department transfer".to_owned(),
        new_owner: "Jane Smith".to_owned(),
    }]
}

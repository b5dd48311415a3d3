//! The management sections and their list view configurations.
//!
//! The source shipped a separate component per section, each with its own
//! copy of the tab, search, and pagination code. Here each section is a
//! static [`ViewConfig`] and the engine is shared.

use std::fmt;

use super::error::RegistryError;
use crate::listview::{ColumnSpec, TabSpec, ViewConfig};

/// A list-bearing section of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Registered devices.
    Devices,
    /// Registry user accounts.
    Users,
    /// Theft incident reports.
    Thefts,
    /// Outbound email notification log.
    Communications,
}

/// List view configuration for the devices section.
pub const DEVICES_VIEW: ViewConfig = ViewConfig {
    title: "Device Management",
    searchable_fields: &["device_id", "device_name", "owner"],
    category_field: "status",
    tabs: &[
        TabSpec {
            label: "All Devices",
            value: None,
        },
        TabSpec {
            label: "Active",
            value: Some("Active"),
        },
        TabSpec {
            label: "Stolen",
            value: Some("Stolen"),
        },
        TabSpec {
            label: "Available",
            value: Some("Available"),
        },
        TabSpec {
            label: "Recovered",
            value: Some("Recovered"),
        },
        TabSpec {
            label: "Sold",
            value: Some("Sold"),
        },
        TabSpec {
            label: "Transferred",
            value: Some("Transferred"),
        },
    ],
    columns: &[
        ColumnSpec {
            field: "device_id",
            label: "Device ID",
            width: 10,
        },
        ColumnSpec {
            field: "device_name",
            label: "Device Name",
            width: 22,
        },
        ColumnSpec {
            field: "owner",
            label: "Owner",
            width: 16,
        },
        ColumnSpec {
            field: "kind",
            label: "Type",
            width: 8,
        },
        ColumnSpec {
            field: "status",
            label: "Status",
            width: 12,
        },
        ColumnSpec {
            field: "registration_date",
            label: "Registered",
            width: 12,
        },
    ],
    page_size: 10,
};

/// List view configuration for the users section.
pub const USERS_VIEW: ViewConfig = ViewConfig {
    title: "User Management",
    searchable_fields: &["name"],
    category_field: "status",
    tabs: &[
        TabSpec {
            label: "All Status",
            value: None,
        },
        TabSpec {
            label: "Active",
            value: Some("Active"),
        },
        TabSpec {
            label: "Inactive",
            value: Some("Inactive"),
        },
    ],
    columns: &[
        ColumnSpec {
            field: "id",
            label: "User ID",
            width: 8,
        },
        ColumnSpec {
            field: "name",
            label: "Name",
            width: 18,
        },
        ColumnSpec {
            field: "role",
            label: "Role",
            width: 12,
        },
        ColumnSpec {
            field: "status",
            label: "Status",
            width: 10,
        },
        ColumnSpec {
            field: "devices",
            label: "Devices",
            width: 8,
        },
        ColumnSpec {
            field: "registration_date",
            label: "Registered",
            width: 12,
        },
    ],
    page_size: 10,
};

/// List view configuration for the theft incidents section.
pub const THEFTS_VIEW: ViewConfig = ViewConfig {
    title: "Theft Management",
    searchable_fields: &["id", "device_id", "device_name", "owner", "location"],
    category_field: "status",
    tabs: &[
        TabSpec {
            label: "All Cases",
            value: None,
        },
        TabSpec {
            label: "Active",
            value: Some("Active"),
        },
        TabSpec {
            label: "Investigating",
            value: Some("Investigating"),
        },
        TabSpec {
            label: "Recovered",
            value: Some("Recovered"),
        },
        TabSpec {
            label: "Closed",
            value: Some("Closed"),
        },
    ],
    columns: &[
        ColumnSpec {
            field: "id",
            label: "Case ID",
            width: 8,
        },
        ColumnSpec {
            field: "device_id",
            label: "Device ID",
            width: 10,
        },
        ColumnSpec {
            field: "device_name",
            label: "Device",
            width: 20,
        },
        ColumnSpec {
            field: "owner",
            label: "Owner",
            width: 16,
        },
        ColumnSpec {
            field: "status",
            label: "Status",
            width: 14,
        },
        ColumnSpec {
            field: "report_date",
            label: "Reported",
            width: 12,
        },
        ColumnSpec {
            field: "police_report",
            label: "Police",
            width: 6,
        },
    ],
    page_size: 10,
};

/// List view configuration for the communications section.
///
/// The email log pages five at a time, matching the source.
pub const COMMUNICATIONS_VIEW: ViewConfig = ViewConfig {
    title: "Communication Management",
    searchable_fields: &["id", "recipient", "subject"],
    category_field: "status",
    tabs: &[
        TabSpec {
            label: "All Emails",
            value: None,
        },
        TabSpec {
            label: "Delivered",
            value: Some("Delivered"),
        },
        TabSpec {
            label: "Opened",
            value: Some("Opened"),
        },
        TabSpec {
            label: "Bounced",
            value: Some("Bounced"),
        },
        TabSpec {
            label: "Failed",
            value: Some("Failed"),
        },
    ],
    columns: &[
        ColumnSpec {
            field: "id",
            label: "Email ID",
            width: 8,
        },
        ColumnSpec {
            field: "recipient",
            label: "Recipient",
            width: 28,
        },
        ColumnSpec {
            field: "subject",
            label: "Subject",
            width: 34,
        },
        ColumnSpec {
            field: "date",
            label: "Date",
            width: 17,
        },
        ColumnSpec {
            field: "status",
            label: "Status",
            width: 10,
        },
    ],
    page_size: 5,
};

impl Section {
    /// All list-bearing sections in dashboard order.
    pub const ALL: [Self; 4] = [Self::Devices, Self::Users, Self::Thefts, Self::Communications];

    /// Returns the section's list view configuration.
    #[must_use]
    pub const fn view_config(self) -> &'static ViewConfig {
        match self {
            Self::Devices => &DEVICES_VIEW,
            Self::Users => &USERS_VIEW,
            Self::Thefts => &THEFTS_VIEW,
            Self::Communications => &COMMUNICATIONS_VIEW,
        }
    }

    /// Parses a section name as supplied on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownSection`] for unrecognised names.
    pub fn parse(name: &str) -> Result<Self, RegistryError> {
        match name.to_lowercase().as_str() {
            "devices" | "device" => Ok(Self::Devices),
            "users" | "user" => Ok(Self::Users),
            "thefts" | "theft" | "incidents" => Ok(Self::Thefts),
            "communications" | "emails" | "email" => Ok(Self::Communications),
            _ => Err(RegistryError::UnknownSection {
                name: name.to_owned(),
            }),
        }
    }

    /// Returns true when the section's view exposes the given field.
    #[must_use]
    pub fn has_field(self, field: &str) -> bool {
        let config = self.view_config();
        config.columns.iter().any(|column| column.field == field)
            || config.searchable_fields.contains(&field)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Devices => "devices",
            Self::Users => "users",
            Self::Thefts => "thefts",
            Self::Communications => "communications",
        };
        write!(f, "{name}")
    }
}

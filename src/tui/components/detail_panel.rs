//! Detail panel components for the selected record.
//!
//! Each section has its own detail layout, but they share the same
//! label/value row and separator primitives so the panes read alike.

use crate::registry::{Device, EmailLogEntry, TheftIncident, TransferRequest, UserAccount};

/// Width used for detail separators when the terminal width is unknown.
const DEFAULT_PANEL_WIDTH: usize = 72;

/// Renders the detail pane for a device.
///
/// Technical rows (serial, model, OS, location) only appear when the
/// registry recorded them. A pending ownership transfer, if attached,
/// gets its own block with the approve/reject hint.
#[must_use]
pub fn device_view(device: &Device, transfer: Option<&TransferRequest>, width: usize) -> String {
    let mut output = separator(width);
    output.push_str(&format!(
        "{} \u{2014} {}\n\n",
        device.device_id, device.device_name
    ));

    output.push_str("Basic Information\n");
    output.push_str(&info_row("Owner", &device.owner));
    output.push_str(&info_row("Type", &device.kind));
    output.push_str(&info_row("Status", device.status.label()));
    output.push_str(&info_row(
        "Registered",
        &device.registration_date.format("%Y-%m-%d").to_string(),
    ));
    if let Some(last_seen) = device.last_seen {
        output.push_str(&info_row(
            "Last seen",
            &last_seen.format("%Y-%m-%d").to_string(),
        ));
    }

    let technical = [
        ("Serial number", device.serial_number.as_deref()),
        ("Model", device.model.as_deref()),
        ("Operating system", device.operating_system.as_deref()),
        ("Location", device.location.as_deref()),
    ];
    if technical.iter().any(|(_, value)| value.is_some()) {
        output.push_str("\nTechnical Details\n");
        for (label, value) in technical {
            if let Some(value) = value {
                output.push_str(&info_row(label, value));
            }
        }
    }

    if let Some(transfer) = transfer {
        output.push_str("\nOwnership Transfer\n");
        output.push_str(&info_row("Request", &transfer.id));
        output.push_str(&info_row("Status", transfer.status.label()));
        output.push_str(&info_row("Requested by", &transfer.requested_by));
        output.push_str(&info_row("New owner", &transfer.new_owner));
        output.push_str(&info_row(
            "Requested",
            &transfer.request_date.format("%Y-%m-%d").to_string(),
        ));
        output.push_str(&info_row("Reason", &transfer.reason));
        output.push_str("\n  a:approve  x:reject\n");
    }

    output.push_str(&separator(width));
    output
}

/// Renders the detail pane for a user account.
///
/// Contact rows (phone, location) only appear when the account has them.
#[must_use]
pub fn user_view(user: &UserAccount, width: usize) -> String {
    let mut output = separator(width);
    output.push_str(&format!("{} \u{2014} {}\n\n", user.id, user.name));
    output.push_str(&info_row("Email", &user.email));
    if let Some(phone) = user.phone.as_deref() {
        output.push_str(&info_row("Phone", phone));
    }
    if let Some(city) = user.city.as_deref() {
        output.push_str(&info_row("Location", city));
    }
    output.push_str(&info_row("Role", user.role.label()));
    output.push_str(&info_row("Status", user.status.label()));
    output.push_str(&info_row("Devices", &user.device_count.to_string()));
    output.push_str(&info_row(
        "Registered",
        &user.registration_date.format("%Y-%m-%d").to_string(),
    ));
    output.push_str(&separator(width));
    output
}

/// Renders the detail pane for a theft incident.
#[must_use]
pub fn incident_view(incident: &TheftIncident, width: usize) -> String {
    let mut output = separator(width);
    output.push_str(&format!(
        "{} \u{2014} {}\n\n",
        incident.id, incident.device_name
    ));
    output.push_str(&info_row("Device", &incident.device_id));
    output.push_str(&info_row("Owner", &incident.owner));
    output.push_str(&info_row("Status", incident.status.label()));
    output.push_str(&info_row(
        "Reported",
        &incident.report_date.format("%Y-%m-%d").to_string(),
    ));
    output.push_str(&info_row("Location", &incident.location));
    output.push_str(&info_row(
        "Police report",
        if incident.police_report { "Yes" } else { "No" },
    ));
    output.push_str(&separator(width));
    output
}

/// Renders the detail pane for an email log entry.
#[must_use]
pub fn email_view(entry: &EmailLogEntry, width: usize) -> String {
    let mut output = separator(width);
    output.push_str(&format!("{} \u{2014} {}\n\n", entry.id, entry.subject));
    output.push_str(&info_row("Recipient", &entry.recipient));
    output.push_str(&info_row(
        "Sent",
        &entry.date.format("%Y-%m-%d %H:%M").to_string(),
    ));
    output.push_str(&info_row("Status", entry.status.label()));
    output.push_str("\n  r:reply\n");
    output.push_str(&separator(width));
    output
}

/// Renders one "  Label: value" row with aligned labels.
fn info_row(label: &str, value: &str) -> String {
    format!("  {label:<18} {value}\n")
}

/// Renders a horizontal separator sized to the panel width.
fn separator(width: usize) -> String {
    let width = if width == 0 { DEFAULT_PANEL_WIDTH } else { width };
    let mut line = "\u{2500}".repeat(width);
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{device_view, email_view, incident_view, user_view};
    use crate::registry::{
        AccountStatus, DeliveryStatus, Device, DeviceStatus, EmailLogEntry, TransferRequest,
        TransferStatus, UserAccount, UserRole,
    };

    fn device() -> Device {
        Device {
            device_id: "DEV001".to_owned(),
            device_name: "MacBook Pro 16\"".to_owned(),
            owner: "John Doe".to_owned(),
            kind: "Laptop".to_owned(),
            status: DeviceStatus::Active,
            registration_date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap_or_default(),
            last_seen: None,
            serial_number: Some("C02XL0GYJGH5".to_owned()),
            model: None,
            operating_system: None,
            location: None,
        }
    }

    #[test]
    fn device_view_includes_technical_rows_only_when_present() {
        let output = device_view(&device(), None, 40);
        assert!(output.contains("Technical Details"));
        assert!(output.contains("Serial number"));
        assert!(!output.contains("Operating system"));

        let mut bare = device();
        bare.serial_number = None;
        let output = device_view(&bare, None, 40);
        assert!(!output.contains("Technical Details"));
    }

    #[test]
    fn device_view_shows_the_pending_transfer_block() {
        let transfer = TransferRequest {
            id: "TR001".to_owned(),
            device_id: "DEV001".to_owned(),
            status: TransferStatus::Pending,
            requested_by: "John Doe".to_owned(),
            request_date: NaiveDate::from_ymd_opt(2023, 10, 20).unwrap_or_default(),
            reason: "Employee department transfer".to_owned(),
            new_owner: "Jane Smith".to_owned(),
        };
        let output = device_view(&device(), Some(&transfer), 40);
        assert!(output.contains("Ownership Transfer"));
        assert!(output.contains("Jane Smith"));
        assert!(output.contains("a:approve"));
    }

    fn user() -> UserAccount {
        UserAccount {
            id: "USR001".to_owned(),
            name: "John Doe".to_owned(),
            role: UserRole::User,
            status: AccountStatus::Active,
            device_count: 3,
            registration_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
            email: "john.doe@example.com".to_owned(),
            phone: Some("+1 (555) 010-4821".to_owned()),
            city: Some("New York, NY".to_owned()),
        }
    }

    #[test]
    fn user_view_includes_contact_rows_only_when_present() {
        let output = user_view(&user(), 40);
        assert!(output.contains("Phone              +1 (555) 010-4821"));
        assert!(output.contains("Location           New York, NY"));

        let mut bare = user();
        bare.phone = None;
        bare.city = None;
        let output = user_view(&bare, 40);
        assert!(!output.contains("Phone"));
        assert!(!output.contains("Location"));
        assert!(output.contains("john.doe@example.com"));
    }

    #[test]
    fn incident_view_spells_out_the_police_report_flag() {
        let incident = crate::registry::TheftIncident {
            id: "INC001".to_owned(),
            device_id: "DEV003".to_owned(),
            device_name: "Dell XPS 15".to_owned(),
            owner: "Robert Johnson".to_owned(),
            report_date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap_or_default(),
            status: crate::registry::IncidentStatus::Active,
            location: "New York, NY".to_owned(),
            police_report: true,
        };
        let output = incident_view(&incident, 40);
        assert!(output.contains("Police report      Yes"));
    }

    #[test]
    fn email_view_offers_the_reply_hint() {
        let entry = EmailLogEntry {
            id: "EM001".to_owned(),
            recipient: "john.doe@example.com".to_owned(),
            subject: "Device Registration Confirmation".to_owned(),
            date: NaiveDate::from_ymd_opt(2023, 10, 25)
                .and_then(|d| d.and_hms_opt(14, 30, 0))
                .unwrap_or_default(),
            status: DeliveryStatus::Delivered,
        };
        let output = email_view(&entry, 40);
        assert!(output.contains("r:reply"));
        assert!(output.contains("john.doe@example.com"));
    }
}

//! Typed records for the device registry.
//!
//! These are the entities the dashboard lists: devices, user accounts,
//! theft incidents, and email log entries, plus the ownership transfer
//! request shown in the device detail view. Statuses are closed enums
//! rather than bare strings; each carries the display label the tab bar
//! and badges use.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::listview::{FieldValue, ListRecord};

/// Lifecycle status of a registered device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    /// Registered and in normal use.
    Active,
    /// Registered but not seen recently.
    Inactive,
    /// Remotely locked by its owner.
    Locked,
    /// Reported stolen.
    Stolen,
    /// Listed as available for transfer.
    Available,
    /// Recovered after a theft report.
    Recovered,
    /// Sold to a new owner.
    Sold,
    /// Ownership transferred within the registry.
    Transferred,
}

impl DeviceStatus {
    /// Returns the display label used by badges and tab filters.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Locked => "Locked",
            Self::Stolen => "Stolen",
            Self::Available => "Available",
            Self::Recovered => "Recovered",
            Self::Sold => "Sold",
            Self::Transferred => "Transferred",
        }
    }
}

/// A registered device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Unique device identifier (e.g. `DEV001`).
    pub device_id: String,
    /// Human-readable device name.
    pub device_name: String,
    /// Name of the registered owner.
    pub owner: String,
    /// Device category (Laptop, Mobile, Tablet).
    pub kind: String,
    /// Current lifecycle status.
    pub status: DeviceStatus,
    /// Date the device was registered.
    pub registration_date: NaiveDate,
    /// Date the device last checked in, if it ever has.
    pub last_seen: Option<NaiveDate>,
    /// Manufacturer serial number, if recorded.
    pub serial_number: Option<String>,
    /// Model designation, if it differs from the name.
    pub model: Option<String>,
    /// Operating system, if recorded.
    pub operating_system: Option<String>,
    /// Last known location, if recorded.
    pub location: Option<String>,
}

impl ListRecord for Device {
    fn key(&self) -> &str {
        &self.device_id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "device_id" => Some(FieldValue::Text(self.device_id.clone())),
            "device_name" => Some(FieldValue::Text(self.device_name.clone())),
            "owner" => Some(FieldValue::Text(self.owner.clone())),
            "kind" => Some(FieldValue::Text(self.kind.clone())),
            "status" => Some(FieldValue::Badge(self.status.label().to_owned())),
            "registration_date" => Some(FieldValue::Text(
                self.registration_date.format("%Y-%m-%d").to_string(),
            )),
            "last_seen" => self
                .last_seen
                .map(|date| FieldValue::Text(date.format("%Y-%m-%d").to_string())),
            "serial_number" => self.serial_number.clone().map(FieldValue::Text),
            "model" => self.model.clone().map(FieldValue::Text),
            "operating_system" => self.operating_system.clone().map(FieldValue::Text),
            "location" => self.location.clone().map(FieldValue::Text),
            _ => None,
        }
    }
}

/// Account role of a registry user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// An individual account.
    User,
    /// An institutional account.
    Institution,
}

impl UserRole {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Institution => "Institution",
        }
    }
}

/// Status of a registry user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Account in good standing.
    Active,
    /// Account disabled or dormant.
    Inactive,
}

impl AccountStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

/// A registry user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique account identifier (e.g. `USR001`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Personal or institutional account.
    pub role: UserRole,
    /// Account status.
    pub status: AccountStatus,
    /// Number of devices registered to this account.
    pub device_count: i64,
    /// Date the account was created.
    pub registration_date: NaiveDate,
    /// Contact email address.
    pub email: String,
    /// Contact phone number, if provided.
    pub phone: Option<String>,
    /// City of residence, if provided.
    pub city: Option<String>,
}

impl ListRecord for UserAccount {
    fn key(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "role" => Some(FieldValue::Badge(self.role.label().to_owned())),
            "status" => Some(FieldValue::Badge(self.status.label().to_owned())),
            "devices" => Some(FieldValue::Number(self.device_count)),
            "registration_date" => Some(FieldValue::Text(
                self.registration_date.format("%Y-%m-%d").to_string(),
            )),
            "email" => Some(FieldValue::Text(self.email.clone())),
            "phone" => self.phone.clone().map(FieldValue::Text),
            "city" => self.city.clone().map(FieldValue::Text),
            _ => None,
        }
    }
}

/// Investigation status of a theft incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    /// Reported and not yet assigned.
    Active,
    /// Under investigation.
    Investigating,
    /// Device recovered.
    Recovered,
    /// Case closed.
    Closed,
}

impl IncidentStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Investigating => "Investigating",
            Self::Recovered => "Recovered",
            Self::Closed => "Closed",
        }
    }
}

/// A reported theft incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheftIncident {
    /// Unique incident identifier (e.g. `INC001`).
    pub id: String,
    /// Identifier of the stolen device.
    pub device_id: String,
    /// Name of the stolen device.
    pub device_name: String,
    /// Name of the reporting owner.
    pub owner: String,
    /// Date the theft was reported.
    pub report_date: NaiveDate,
    /// Investigation status.
    pub status: IncidentStatus,
    /// Location where the theft occurred.
    pub location: String,
    /// Whether a police report was filed.
    pub police_report: bool,
}

impl ListRecord for TheftIncident {
    fn key(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "device_id" => Some(FieldValue::Text(self.device_id.clone())),
            "device_name" => Some(FieldValue::Text(self.device_name.clone())),
            "owner" => Some(FieldValue::Text(self.owner.clone())),
            "report_date" => Some(FieldValue::Text(
                self.report_date.format("%Y-%m-%d").to_string(),
            )),
            "status" => Some(FieldValue::Badge(self.status.label().to_owned())),
            "location" => Some(FieldValue::Text(self.location.clone())),
            "police_report" => Some(FieldValue::Flag(self.police_report)),
            _ => None,
        }
    }
}

/// Delivery status of a logged notification email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Accepted by the recipient's server.
    Delivered,
    /// Opened by the recipient.
    Opened,
    /// Rejected by the recipient's server.
    Bounced,
    /// Failed before leaving the system.
    Failed,
}

impl DeliveryStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Opened => "Opened",
            Self::Bounced => "Bounced",
            Self::Failed => "Failed",
        }
    }
}

/// One entry in the outbound email notification log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailLogEntry {
    /// Unique entry identifier (e.g. `EM001`).
    pub id: String,
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// When the email was sent.
    pub date: NaiveDateTime,
    /// Delivery status.
    pub status: DeliveryStatus,
}

impl ListRecord for EmailLogEntry {
    fn key(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.clone())),
            "recipient" => Some(FieldValue::Text(self.recipient.clone())),
            "subject" => Some(FieldValue::Text(self.subject.clone())),
            "date" => Some(FieldValue::Text(
                self.date.format("%Y-%m-%d %H:%M").to_string(),
            )),
            "status" => Some(FieldValue::Badge(self.status.label().to_owned())),
            _ => None,
        }
    }
}

/// Status of an ownership transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    /// Awaiting an administrator decision.
    Pending,
    /// Approved by an administrator.
    Approved,
    /// Rejected by an administrator.
    Rejected,
}

impl TransferStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// An ownership transfer request attached to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Unique request identifier (e.g. `TR001`).
    pub id: String,
    /// Identifier of the device being transferred.
    pub device_id: String,
    /// Current request status.
    pub status: TransferStatus,
    /// Name of the requesting party.
    pub requested_by: String,
    /// Date the request was filed.
    pub request_date: NaiveDate,
    /// Stated reason for the transfer.
    pub reason: String,
    /// Name of the proposed new owner.
    pub new_owner: String,
}

/// A pre-defined compose template for notification emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Stable template identifier.
    pub id: &'static str,
    /// Template name shown in the picker.
    pub name: &'static str,
    /// Pre-filled subject line; empty for the custom template.
    pub subject: &'static str,
    /// Pre-filled message body; empty for the custom template.
    pub body: &'static str,
}

impl EmailTemplate {
    /// Returns the built-in templates in picker order.
    ///
    /// The last entry is the blank "custom" template, which clears the
    /// pre-filled subject and body when selected.
    #[must_use]
    pub const fn builtin() -> &'static [Self] {
        &[
            Self {
                id: "device_registration",
                name: "Device Registration Confirmation",
                subject: "Your Device Has Been Successfully Registered",
                body: "Your device has been registered with SecureTrack. You can review its status from your account at any time.",
            },
            Self {
                id: "security_alert",
                name: "Security Alert",
                subject: "Security Alert: Important Account Activity",
                body: "We noticed activity on your account that may require your attention. Please review your recent sign-ins.",
            },
            Self {
                id: "verification",
                name: "Account Verification",
                subject: "Account Verification Required",
                body: "Please verify your account to keep your registered devices protected.",
            },
            Self {
                id: "follow_up",
                name: "Follow-up Message",
                subject: "Follow-up: Action Required",
                body: "This is a follow-up on our previous message. Action is still required on your account.",
            },
            Self {
                id: "custom",
                name: "Custom Message",
                subject: "",
                body: "",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        AccountStatus, Device, DeviceStatus, EmailTemplate, IncidentStatus, TheftIncident,
        UserAccount, UserRole,
    };
    use crate::listview::{FieldValue, ListRecord};

    fn sample_device() -> Device {
        Device {
            device_id: "DEV001".to_owned(),
            device_name: "MacBook Pro 16\"".to_owned(),
            owner: "John Doe".to_owned(),
            kind: "Laptop".to_owned(),
            status: DeviceStatus::Active,
            registration_date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap_or_default(),
            last_seen: NaiveDate::from_ymd_opt(2023, 10, 25),
            serial_number: None,
            model: None,
            operating_system: None,
            location: None,
        }
    }

    #[test]
    fn device_key_is_the_device_id() {
        assert_eq!(sample_device().key(), "DEV001");
    }

    #[test]
    fn device_status_surfaces_as_a_badge() {
        assert_eq!(
            sample_device().field("status"),
            Some(FieldValue::Badge("Active".to_owned()))
        );
    }

    #[test]
    fn absent_optional_fields_return_none() {
        assert_eq!(sample_device().field("serial_number"), None);
        assert_eq!(sample_device().field("no_such_field"), None);
    }

    #[test]
    fn user_contact_fields_are_optional() {
        let mut user = UserAccount {
            id: "USR001".to_owned(),
            name: "John Doe".to_owned(),
            role: UserRole::User,
            status: AccountStatus::Active,
            device_count: 3,
            registration_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
            email: "john.doe@example.com".to_owned(),
            phone: Some("+1 (555) 010-4821".to_owned()),
            city: None,
        };
        assert_eq!(
            user.field("phone"),
            Some(FieldValue::Text("+1 (555) 010-4821".to_owned()))
        );
        assert_eq!(user.field("city"), None);

        user.city = Some("New York, NY".to_owned());
        assert_eq!(
            user.field("city"),
            Some(FieldValue::Text("New York, NY".to_owned()))
        );
    }

    #[test]
    fn incident_police_report_is_a_flag() {
        let incident = TheftIncident {
            id: "INC001".to_owned(),
            device_id: "DEV001".to_owned(),
            device_name: "MacBook Pro 16\"".to_owned(),
            owner: "John Doe".to_owned(),
            report_date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap_or_default(),
            status: IncidentStatus::Active,
            location: "New York, NY".to_owned(),
            police_report: true,
        };
        assert_eq!(incident.field("police_report"), Some(FieldValue::Flag(true)));
    }

    #[test]
    fn incident_status_serialises_lowercase() {
        let json = serde_json::to_string(&IncidentStatus::Investigating).unwrap_or_default();
        assert_eq!(json, "\"investigating\"");
    }

    #[test]
    fn builtin_templates_end_with_the_blank_custom_one() {
        let templates = EmailTemplate::builtin();
        assert_eq!(templates.len(), 5);
        let last = templates.last();
        assert!(last.is_some_and(|t| t.id == "custom" && t.subject.is_empty()));
    }
}

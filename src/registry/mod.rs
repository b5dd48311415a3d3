//! The device registry domain: typed records, sections, and seed data.

pub mod error;
pub mod models;
pub mod sample;
pub mod sections;

pub use error::RegistryError;
pub use models::{
    AccountStatus, DeliveryStatus, Device, DeviceStatus, EmailLogEntry, EmailTemplate,
    IncidentStatus, TheftIncident, TransferRequest, TransferStatus, UserAccount, UserRole,
};
pub use sample::{Registry, RegistryStats};
pub use sections::Section;

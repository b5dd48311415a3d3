//! Overview stat cards showing headline registry counts.

use crate::registry::RegistryStats;

/// Renders the four overview counters as label/value rows.
///
/// The counts are computed from the registry collections, so they stay
/// in step with the section lists rather than being seeded separately.
#[must_use]
pub fn view(stats: &RegistryStats) -> String {
    let rows = [
        ("Total Users", stats.total_users),
        ("Registered Devices", stats.registered_devices),
        ("Active Theft Reports", stats.open_theft_reports),
        ("Pending Transfers", stats.pending_transfers),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("  {label:<22} {value}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::view;
    use crate::registry::RegistryStats;

    #[test]
    fn view_lists_all_four_counters() {
        let output = view(&RegistryStats {
            total_users: 5,
            registered_devices: 7,
            open_theft_reports: 2,
            pending_transfers: 1,
        });
        assert!(output.contains("Total Users"));
        assert!(output.contains("Registered Devices     7"));
        assert!(output.contains("Active Theft Reports   2"));
        assert!(output.contains("Pending Transfers      1"));
    }
}

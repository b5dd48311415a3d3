//! Non-interactive section listing for the CLI.
//!
//! Runs the same list view engine the dashboard uses and writes one page
//! of the section to stdout. Writers are parameterised so tests can
//! capture the output in a buffer.

use std::io::{self, Write};

use crate::config::SecuretrackConfig;
use crate::listview::{FilterSelection, ListRecord, ListViewOutput, ListViewState, run_query};
use crate::registry::{Registry, RegistryError, Section};

/// Runs the section listing mode against the seeded registry.
///
/// # Errors
///
/// Returns an error when the section or sort field is unknown, or when
/// writing to stdout fails.
pub fn run(config: &SecuretrackConfig) -> Result<(), RegistryError> {
    let registry = Registry::sample();
    let mut stdout = io::stdout().lock();
    write_section_listing(&mut stdout, &registry, config)
}

/// Writes one page of a section's records to the given writer.
///
/// # Errors
///
/// Returns an error when the section or sort field is unknown, or when
/// the writer fails.
pub fn write_section_listing<W: Write>(
    writer: &mut W,
    registry: &Registry,
    config: &SecuretrackConfig,
) -> Result<(), RegistryError> {
    let section = config.require_section()?;
    let state = build_state(config, section)?;
    match section {
        Section::Devices => write_listing(writer, &registry.devices, section, &state),
        Section::Users => write_listing(writer, &registry.users, section, &state),
        Section::Thefts => write_listing(writer, &registry.incidents, section, &state),
        Section::Communications => write_listing(writer, &registry.emails, section, &state),
    }
}

/// Builds the engine state from the CLI options.
fn build_state(
    config: &SecuretrackConfig,
    section: Section,
) -> Result<ListViewState, RegistryError> {
    let view = section.view_config();
    let page_size = config.page_size.unwrap_or(view.page_size);
    let mut state = ListViewState::new(page_size);
    if let Some(search) = config.search.as_deref() {
        state.set_search_term(search);
    }
    if let Some(status) = config.status.as_deref() {
        state.set_filter(
            view.category_field,
            FilterSelection::Equals(status.to_owned()),
        );
    }
    state.set_sort(config.sort_key(section)?);
    // Page last: every setter above resets to page 1.
    state.set_page(config.page_number());
    Ok(state)
}

fn write_listing<W: Write, R: ListRecord>(
    writer: &mut W,
    records: &[R],
    section: Section,
    state: &ListViewState,
) -> Result<(), RegistryError> {
    let config = section.view_config();
    let output = run_query(records, config, state);

    writeln!(writer, "{}", config.title).map_err(|e| RegistryError::io(&e))?;
    writeln!(writer).map_err(|e| RegistryError::io(&e))?;

    write_header(writer, config)?;
    write_rows(writer, records, config, &output)?;

    writeln!(writer).map_err(|e| RegistryError::io(&e))?;
    writeln!(
        writer,
        "Page {} of {} ({} of {} records)",
        output.page.current_page(),
        output.page.total_pages(),
        output.visible.len(),
        output.filtered_count,
    )
    .map_err(|e| RegistryError::io(&e))?;

    Ok(())
}

fn write_header<W: Write>(
    writer: &mut W,
    config: &crate::listview::ViewConfig,
) -> Result<(), RegistryError> {
    let header = config
        .columns
        .iter()
        .map(|column| format!("{:width$}", column.label, width = column.width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "  {header}").map_err(|e| RegistryError::io(&e))
}

fn write_rows<W: Write, R: ListRecord>(
    writer: &mut W,
    records: &[R],
    config: &crate::listview::ViewConfig,
    output: &ListViewOutput,
) -> Result<(), RegistryError> {
    if output.visible.is_empty() {
        return writeln!(writer, "  (no records match)").map_err(|e| RegistryError::io(&e));
    }
    for &index in &output.visible {
        let Some(record) = records.get(index) else {
            continue;
        };
        let row = config
            .columns
            .iter()
            .map(|column| {
                let value = record
                    .field(column.field)
                    .map(|field| field.as_text())
                    .unwrap_or_default();
                format!("{value:width$}", width = column.width)
            })
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(writer, "  {row}").map_err(|e| RegistryError::io(&e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_section_listing;
    use crate::config::SecuretrackConfig;
    use crate::registry::{Registry, RegistryError};

    fn listing(config: &SecuretrackConfig) -> Result<String, RegistryError> {
        let registry = Registry::sample();
        let mut buffer = Vec::new();
        write_section_listing(&mut buffer, &registry, config)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }

    fn devices_config() -> SecuretrackConfig {
        SecuretrackConfig {
            section: Some("devices".to_owned()),
            ..SecuretrackConfig::default()
        }
    }

    #[test]
    fn listing_includes_title_rows_and_pagination() {
        let output = listing(&devices_config()).unwrap_or_default();
        assert!(output.contains("Device Management"));
        assert!(output.contains("DEV001"));
        assert!(output.contains("Page 1 of 1 (7 of 7 records)"));
    }

    #[test]
    fn status_filter_narrows_the_listing() {
        let config = SecuretrackConfig {
            status: Some("Stolen".to_owned()),
            ..devices_config()
        };
        let output = listing(&config).unwrap_or_default();
        assert!(output.contains("DEV003"));
        assert!(!output.contains("DEV001"));
        assert!(output.contains("(1 of 1 records)"));
    }

    #[test]
    fn search_applies_to_the_searchable_fields() {
        let config = SecuretrackConfig {
            search: Some("jane".to_owned()),
            ..devices_config()
        };
        let output = listing(&config).unwrap_or_default();
        assert!(output.contains("DEV002"));
        assert!(!output.contains("DEV003"));
    }

    #[test]
    fn sort_by_orders_the_rows() {
        let config = SecuretrackConfig {
            sort_by: Some("owner".to_owned()),
            ..devices_config()
        };
        let output = listing(&config).unwrap_or_default();
        let david = output.find("David Miller").unwrap_or(usize::MAX);
        let robert = output.find("Robert Johnson").unwrap_or(0);
        assert!(david < robert);
    }

    #[test]
    fn out_of_range_page_is_empty_but_reported() {
        let config = SecuretrackConfig {
            page: Some(9),
            ..devices_config()
        };
        let output = listing(&config).unwrap_or_default();
        assert!(output.contains("(no records match)"));
        assert!(output.contains("Page 9 of 1"));
    }

    #[test]
    fn enormous_page_number_is_empty_not_a_panic() {
        let config = SecuretrackConfig {
            page: Some(usize::MAX),
            ..devices_config()
        };
        let output = listing(&config).unwrap_or_default();
        assert!(output.contains("(no records match)"));
        assert!(output.contains("of 1 (0 of 7 records)"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let config = SecuretrackConfig {
            section: Some("inventory".to_owned()),
            ..SecuretrackConfig::default()
        };
        assert!(matches!(
            listing(&config),
            Err(RegistryError::UnknownSection { .. })
        ));
    }

    #[test]
    fn emails_page_size_defaults_to_five() {
        let config = SecuretrackConfig {
            section: Some("emails".to_owned()),
            ..SecuretrackConfig::default()
        };
        let output = listing(&config).unwrap_or_default();
        assert!(output.contains("Page 1 of 2 (5 of 8 records)"));
    }
}

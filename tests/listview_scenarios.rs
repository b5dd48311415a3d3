//! End-to-end scenarios driving the list view engine through the public
//! API, using the seeded registry the dashboard ships with.

use securetrack::listview::{FilterSelection, ListRecord, ListViewState, SortKey, run_query};
use securetrack::registry::{Registry, Section};

fn visible_keys<R: ListRecord>(records: &[R], visible: &[usize]) -> Vec<String> {
    visible
        .iter()
        .filter_map(|&index| records.get(index).map(|record| record.key().to_owned()))
        .collect()
}

#[test]
fn email_log_shows_the_five_newest_entries_first() {
    let registry = Registry::sample();
    let config = Section::Communications.view_config();
    let state = ListViewState::new(config.page_size);

    let output = run_query(&registry.emails, config, &state);

    assert_eq!(
        visible_keys(&registry.emails, &output.visible),
        vec!["EM001", "EM002", "EM003", "EM004", "EM005"]
    );
    assert_eq!(output.page.total_pages(), 2);
    assert_eq!(output.filtered_count, 8);
}

#[test]
fn searching_the_email_log_matches_subjects_case_insensitively() {
    let registry = Registry::sample();
    let config = Section::Communications.view_config();
    let mut state = ListViewState::new(config.page_size);
    state.set_search_term("theft");

    let output = run_query(&registry.emails, config, &state);

    assert_eq!(
        visible_keys(&registry.emails, &output.visible),
        vec!["EM004"]
    );
}

#[test]
fn device_status_census_is_independent_of_the_active_filter() {
    let registry = Registry::sample();
    let config = Section::Devices.view_config();

    let mut filtered = ListViewState::new(config.page_size);
    filtered.set_filter(
        config.category_field,
        FilterSelection::Equals("Stolen".to_owned()),
    );
    let unfiltered = ListViewState::new(config.page_size);

    let filtered_output = run_query(&registry.devices, config, &filtered);
    let unfiltered_output = run_query(&registry.devices, config, &unfiltered);

    // Tab badges count the whole collection either way.
    assert_eq!(filtered_output.base_counts, unfiltered_output.base_counts);
    assert_eq!(filtered_output.base_counts.get("Active"), Some(&2));
    assert_eq!(filtered_output.base_counts.get("Stolen"), Some(&1));
    assert_eq!(filtered_output.base_counts.get("Available"), Some(&1));
    assert_eq!(filtered_output.base_counts.get("Recovered"), Some(&1));
    assert_eq!(filtered_output.base_counts.get("Sold"), Some(&1));
    assert_eq!(filtered_output.base_counts.get("Transferred"), Some(&1));
}

#[test]
fn changing_the_search_returns_to_page_one() {
    let config = Section::Communications.view_config();
    let mut state = ListViewState::new(config.page_size);
    state.next_page(2);
    assert_eq!(state.current_page(), 2);

    state.set_search_term("report");
    assert_eq!(state.current_page(), 1);
}

#[test]
fn the_stolen_tab_shows_exactly_the_stolen_device() {
    let registry = Registry::sample();
    let config = Section::Devices.view_config();
    let mut state = ListViewState::new(config.page_size);
    state.set_filter(
        config.category_field,
        FilterSelection::Equals("Stolen".to_owned()),
    );

    let output = run_query(&registry.devices, config, &state);

    assert_eq!(
        visible_keys(&registry.devices, &output.visible),
        vec!["DEV003"]
    );
    assert_eq!(output.filtered_count, 1);
    assert_eq!(output.page.total_pages(), 1);
}

#[test]
fn filter_and_search_combine_as_a_logical_and() {
    let registry = Registry::sample();
    let config = Section::Thefts.view_config();
    let mut state = ListViewState::new(config.page_size);
    state.set_filter(
        config.category_field,
        FilterSelection::Equals("Active".to_owned()),
    );
    state.set_search_term("no such device");

    let output = run_query(&registry.incidents, config, &state);
    assert!(output.visible.is_empty());
    assert_eq!(output.filtered_count, 0);
    // An empty result still reports one (empty) page.
    assert_eq!(output.page.total_pages(), 1);
}

#[test]
fn pages_partition_the_filtered_result_in_order() {
    let registry = Registry::sample();
    let config = Section::Communications.view_config();

    let mut seen = Vec::new();
    let mut state = ListViewState::new(config.page_size);
    let total_pages = run_query(&registry.emails, config, &state)
        .page
        .total_pages();
    for _ in 0..total_pages {
        let output = run_query(&registry.emails, config, &state);
        seen.extend(output.visible);
        state.next_page(total_pages);
    }

    let expected: Vec<usize> = (0..registry.emails.len()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn querying_twice_with_identical_state_yields_identical_output() {
    let registry = Registry::sample();
    let config = Section::Users.view_config();
    let mut state = ListViewState::new(config.page_size);
    state.set_search_term("o");
    state.set_sort(Some(SortKey::descending("name")));

    let first = run_query(&registry.users, config, &state);
    let second = run_query(&registry.users, config, &state);
    assert_eq!(first, second);
}

#[test]
fn sorting_does_not_change_the_filtered_count() {
    let registry = Registry::sample();
    let config = Section::Devices.view_config();
    let mut state = ListViewState::new(config.page_size);

    let unsorted = run_query(&registry.devices, config, &state);
    state.set_sort(Some(SortKey::ascending("owner")));
    let sorted = run_query(&registry.devices, config, &state);

    assert_eq!(unsorted.filtered_count, sorted.filtered_count);
    let mut unsorted_indices = unsorted.visible.clone();
    let mut sorted_indices = sorted.visible.clone();
    unsorted_indices.sort_unstable();
    sorted_indices.sort_unstable();
    assert_eq!(unsorted_indices, sorted_indices);
}

#[test]
fn an_out_of_range_page_is_empty_without_clamping() {
    let registry = Registry::sample();
    let config = Section::Communications.view_config();
    let mut state = ListViewState::new(config.page_size);
    let total_pages = run_query(&registry.emails, config, &state)
        .page
        .total_pages();
    state.next_page(total_pages + 5);
    state.next_page(total_pages + 5);
    state.next_page(total_pages + 5);

    let output = run_query(&registry.emails, config, &state);
    assert!(output.visible.is_empty());
    assert_eq!(output.page.current_page(), 4);
    assert_eq!(output.page.total_pages(), 2);
}

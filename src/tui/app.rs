//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for
//! the dashboard. It routes messages to per-section view state, runs the
//! list view engine on every render, and drives the simulated email send
//! flow as an async command.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::{Cmd, Model};

use crate::listview::{ListRecord, ListViewOutput, run_query};
use crate::registry::{DeliveryStatus, EmailLogEntry, Registry, Section};
use crate::telemetry::{TelemetryEvent, TelemetrySink};

use super::components::{
    ComposeFormViewContext, RecordTableViewContext, TabBarViewContext, compose_form, detail_panel,
    record_table, stat_cards, tab_bar,
};
use super::input::{InputMode, map_key_to_message};
use super::messages::{AppMsg, RecordAction};
use super::state::{ComposeForm, SectionViewState, ViewMode};

/// Simulated latency of the compose send, matching the source's fake
/// delivery delay.
const SEND_LATENCY: Duration = Duration::from_millis(1500);

/// Maximum panel width used for separators and detail panes.
const MAX_PANEL_WIDTH: usize = 80;

/// Which top-level pane is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The overview with headline counters.
    Overview,
    /// One of the list-bearing sections.
    Section(Section),
}

/// Main application model for the dashboard TUI.
#[derive(Clone)]
pub struct DashboardApp {
    /// The full in-memory registry.
    registry: Registry,
    /// Active top-level pane.
    pane: Pane,
    /// Devices section state.
    devices: SectionViewState,
    /// Users section state.
    users: SectionViewState,
    /// Theft incidents section state.
    thefts: SectionViewState,
    /// Communications section state.
    communications: SectionViewState,
    /// Compose form, meaningful while communications is in compose mode.
    compose: ComposeForm,
    /// Whether a simulated send is in flight.
    sending: bool,
    /// One-line status shown under the list, if any.
    status: Option<String>,
    /// Whether the help overlay is visible.
    show_help: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Sink receiving simulated-action telemetry.
    telemetry: Arc<dyn TelemetrySink>,
}

impl DashboardApp {
    /// Creates an application over the given registry and telemetry sink.
    #[must_use]
    pub fn new(registry: Registry, telemetry: Arc<dyn TelemetrySink>) -> Self {
        Self {
            registry,
            pane: Pane::Overview,
            devices: SectionViewState::new(Section::Devices.view_config()),
            users: SectionViewState::new(Section::Users.view_config()),
            thefts: SectionViewState::new(Section::Thefts.view_config()),
            communications: SectionViewState::new(Section::Communications.view_config()),
            compose: ComposeForm::new(),
            sending: false,
            status: None,
            show_help: false,
            width: 80,
            height: 24,
            telemetry,
        }
    }

    /// Returns the active section, or `None` on the overview pane.
    #[must_use]
    pub const fn current_section(&self) -> Option<Section> {
        match self.pane {
            Pane::Overview => None,
            Pane::Section(section) => Some(section),
        }
    }

    /// Returns the view state for a section.
    #[must_use]
    pub const fn section_state(&self, section: Section) -> &SectionViewState {
        match section {
            Section::Devices => &self.devices,
            Section::Users => &self.users,
            Section::Thefts => &self.thefts,
            Section::Communications => &self.communications,
        }
    }

    const fn section_state_mut(&mut self, section: Section) -> &mut SectionViewState {
        match section {
            Section::Devices => &mut self.devices,
            Section::Users => &mut self.users,
            Section::Thefts => &mut self.thefts,
            Section::Communications => &mut self.communications,
        }
    }

    /// Runs the list view engine for a section's current state.
    #[must_use]
    pub fn query_output(&self, section: Section) -> ListViewOutput {
        let config = section.view_config();
        let state = &self.section_state(section).list;
        match section {
            Section::Devices => run_query(&self.registry.devices, config, state),
            Section::Users => run_query(&self.registry.users, config, state),
            Section::Thefts => run_query(&self.registry.incidents, config, state),
            Section::Communications => run_query(&self.registry.emails, config, state),
        }
    }

    /// Returns the key of the selected record, if any.
    ///
    /// In detail mode this is the record being shown; in list mode it is
    /// the record under the row cursor.
    #[must_use]
    pub fn selected_key(&self, section: Section) -> Option<String> {
        let state = self.section_state(section);
        if let ViewMode::Detail(key) = &state.mode {
            return Some(key.clone());
        }
        let output = self.query_output(section);
        let index = *output.visible.get(state.cursor)?;
        match section {
            Section::Devices => self.registry.devices.get(index).map(|r| r.key().to_owned()),
            Section::Users => self.registry.users.get(index).map(|r| r.key().to_owned()),
            Section::Thefts => self.registry.incidents.get(index).map(|r| r.key().to_owned()),
            Section::Communications => {
                self.registry.emails.get(index).map(|r| r.key().to_owned())
            }
        }
    }

    /// Returns the last reported terminal dimensions as (width, height).
    #[must_use]
    pub const fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Returns the input mode the next key event will be mapped under.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.pane {
            Pane::Overview => InputMode::Browse,
            Pane::Section(section) => {
                let state = self.section_state(section);
                if state.mode == ViewMode::Compose {
                    InputMode::Compose
                } else if state.searching {
                    InputMode::Search
                } else {
                    InputMode::Browse
                }
            }
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting commands.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            // Navigation
            AppMsg::CursorUp => self.handle_cursor_up(),
            AppMsg::CursorDown => self.handle_cursor_down(),
            AppMsg::NextPage => self.handle_next_page(),
            AppMsg::PreviousPage => self.handle_previous_page(),
            AppMsg::ShowOverview => self.handle_show_overview(),
            AppMsg::ShowSection(section) => self.handle_show_section(*section),
            AppMsg::CycleTab => self.handle_cycle_tab(),
            AppMsg::BackToList => self.handle_back_to_list(),

            // Search
            AppMsg::StartSearch => self.handle_start_search(),
            AppMsg::SearchChar(ch) => self.handle_search_char(*ch),
            AppMsg::SearchBackspace => self.handle_search_backspace(),
            AppMsg::ConfirmSearch => self.handle_confirm_search(),
            AppMsg::CancelSearch => self.handle_cancel_search(),

            // Record actions
            AppMsg::Dispatch(action) => self.handle_dispatch(*action),

            // Compose
            AppMsg::StartCompose => self.handle_start_compose(),
            AppMsg::ComposeChar(ch) => self.handle_compose_char(*ch),
            AppMsg::ComposeBackspace => self.handle_compose_backspace(),
            AppMsg::ComposeNextField => self.handle_compose_next_field(),
            AppMsg::CycleTemplate => self.handle_cycle_template(),
            AppMsg::SubmitCompose => self.handle_submit_compose(),
            AppMsg::CancelCompose => self.handle_cancel_compose(),
            AppMsg::EmailSendCompleted(entry) => self.handle_email_sent(entry),

            // Application lifecycle
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }

            // Window events
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
        }
    }

    // Navigation handlers

    fn handle_cursor_up(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            self.section_state_mut(section).cursor_up();
        }
        None
    }

    fn handle_cursor_down(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let visible_len = self.query_output(section).visible.len();
            self.section_state_mut(section).cursor_down(visible_len);
        }
        None
    }

    fn handle_next_page(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let total_pages = self.query_output(section).page.total_pages();
            let state = self.section_state_mut(section);
            state.list.next_page(total_pages);
            state.cursor = 0;
        }
        None
    }

    fn handle_previous_page(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let state = self.section_state_mut(section);
            state.list.previous_page();
            state.cursor = 0;
        }
        None
    }

    fn handle_show_overview(&mut self) -> Option<Cmd> {
        self.pane = Pane::Overview;
        self.status = None;
        None
    }

    fn handle_show_section(&mut self, section: Section) -> Option<Cmd> {
        self.pane = Pane::Section(section);
        self.status = None;
        None
    }

    fn handle_cycle_tab(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let config = section.view_config();
            let state = self.section_state_mut(section);
            if state.mode == ViewMode::List {
                state.cycle_tab(config);
            }
        }
        None
    }

    fn handle_back_to_list(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let state = self.section_state_mut(section);
            if matches!(state.mode, ViewMode::Detail(_)) {
                state.mode = ViewMode::List;
            }
        }
        None
    }

    // Search handlers

    fn handle_start_search(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let state = self.section_state_mut(section);
            if state.mode == ViewMode::List {
                state.searching = true;
            }
        }
        None
    }

    fn handle_search_char(&mut self, ch: char) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let state = self.section_state_mut(section);
            state.list.push_search_char(ch);
            state.cursor = 0;
        }
        None
    }

    fn handle_search_backspace(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let state = self.section_state_mut(section);
            state.list.pop_search_char();
            state.cursor = 0;
        }
        None
    }

    fn handle_confirm_search(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            self.section_state_mut(section).searching = false;
        }
        None
    }

    fn handle_cancel_search(&mut self) -> Option<Cmd> {
        if let Some(section) = self.current_section() {
            let state = self.section_state_mut(section);
            state.searching = false;
            state.list.clear_search();
            state.cursor = 0;
        }
        None
    }

    // Record action handlers

    fn handle_dispatch(&mut self, action: RecordAction) -> Option<Cmd> {
        let section = self.current_section()?;
        let Some(key) = self.selected_key(section) else {
            self.status = Some("No record selected".to_owned());
            return None;
        };
        match action {
            RecordAction::View => {
                self.section_state_mut(section).mode = ViewMode::Detail(key);
            }
            RecordAction::Reply => self.handle_reply(section, &key),
            RecordAction::Approve | RecordAction::Reject => {
                self.handle_transfer_decision(section, action, &key);
            }
            RecordAction::Edit | RecordAction::Delete | RecordAction::Flag => {
                self.record_action(action, &key);
                tracing::info!(action = action.label(), record = %key, "action simulated");
                self.status = Some(format!("Simulated {} for {key}", action.label()));
            }
        }
        None
    }

    fn handle_reply(&mut self, section: Section, key: &str) {
        if section != Section::Communications {
            self.status = Some("Reply is only available for emails".to_owned());
            return;
        }
        let Some(entry) = self.registry.emails.iter().find(|entry| entry.id == key) else {
            self.status = Some(format!("No email found for {key}"));
            return;
        };
        self.compose = ComposeForm::reply_to(entry);
        self.communications.mode = ViewMode::Compose;
        self.record_action(RecordAction::Reply, key);
        self.status = None;
    }

    fn handle_transfer_decision(&mut self, section: Section, action: RecordAction, key: &str) {
        if section != Section::Devices {
            self.status = Some("Transfer decisions apply to devices".to_owned());
            return;
        }
        let Some(transfer) = self
            .registry
            .transfer_for(key)
            .filter(|transfer| transfer.status == crate::registry::TransferStatus::Pending)
        else {
            self.status = Some(format!("No pending transfer for {key}"));
            return;
        };
        let transfer_id = transfer.id.clone();
        self.record_action(action, key);
        tracing::info!(
            action = action.label(),
            transfer = %transfer_id,
            device = %key,
            "transfer decision simulated"
        );
        self.status = Some(format!(
            "Simulated {} of {transfer_id} for {key}",
            action.label()
        ));
    }

    fn record_action(&self, action: RecordAction, key: &str) {
        self.telemetry.record(TelemetryEvent::ActionDispatched {
            action: action.label().to_owned(),
            record_key: key.to_owned(),
        });
    }

    // Compose handlers

    fn handle_start_compose(&mut self) -> Option<Cmd> {
        if self.current_section() == Some(Section::Communications)
            && self.communications.mode == ViewMode::List
        {
            self.compose = ComposeForm::new();
            self.communications.mode = ViewMode::Compose;
            self.status = None;
        }
        None
    }

    fn handle_compose_char(&mut self, ch: char) -> Option<Cmd> {
        self.compose.push_char(ch);
        None
    }

    fn handle_compose_backspace(&mut self) -> Option<Cmd> {
        self.compose.backspace();
        None
    }

    fn handle_compose_next_field(&mut self) -> Option<Cmd> {
        self.compose.next_field();
        None
    }

    fn handle_cycle_template(&mut self) -> Option<Cmd> {
        self.compose.cycle_template();
        None
    }

    fn handle_submit_compose(&mut self) -> Option<Cmd> {
        if self.sending {
            return None;
        }
        if let Err(error) = self.compose.validate() {
            self.status = Some(error.to_string());
            return None;
        }
        let entry = EmailLogEntry {
            id: self.registry.next_email_id(),
            recipient: self.compose.to.trim().to_owned(),
            subject: self.compose.subject.trim().to_owned(),
            date: chrono::Local::now().naive_local(),
            status: DeliveryStatus::Delivered,
        };
        self.sending = true;
        self.status = None;
        tracing::info!(recipient = %entry.recipient, "simulated send started");
        Some(Self::simulate_send(entry))
    }

    fn handle_cancel_compose(&mut self) -> Option<Cmd> {
        if self.communications.mode == ViewMode::Compose {
            self.communications.mode = ViewMode::List;
            self.status = None;
        }
        None
    }

    fn handle_email_sent(&mut self, entry: &EmailLogEntry) -> Option<Cmd> {
        self.sending = false;
        self.telemetry.record(TelemetryEvent::EmailSimulated {
            recipient: entry.recipient.clone(),
            subject: entry.subject.clone(),
        });
        tracing::info!(recipient = %entry.recipient, id = %entry.id, "simulated send completed");
        self.status = Some(format!("Email sent to {}", entry.recipient));
        self.registry.record_sent_email(entry.clone());
        // The log is newest-first, so jump back to page 1 where the new
        // entry landed.
        self.communications.list.clamp_page(1);
        self.communications.cursor = 0;
        self.communications.mode = ViewMode::List;
        None
    }

    /// Creates a command that delivers the entry after the fake latency.
    fn simulate_send(entry: EmailLogEntry) -> Cmd {
        Box::pin(async move {
            tokio::time::sleep(SEND_LATENCY).await;
            Some(Box::new(AppMsg::EmailSendCompleted(entry)) as Box<dyn Any + Send>)
        })
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        None
    }

    // Rendering

    fn panel_width(&self) -> usize {
        usize::from(self.width).clamp(20, MAX_PANEL_WIDTH)
    }

    fn render_header(&self) -> String {
        let mut output = String::from("SecureTrack Admin Dashboard\n");
        let entries = [
            ("1:Overview", self.pane == Pane::Overview),
            (
                "2:Devices",
                self.pane == Pane::Section(Section::Devices),
            ),
            ("3:Users", self.pane == Pane::Section(Section::Users)),
            ("4:Thefts", self.pane == Pane::Section(Section::Thefts)),
            (
                "5:Communications",
                self.pane == Pane::Section(Section::Communications),
            ),
        ];
        for (index, (label, active)) in entries.iter().enumerate() {
            if index > 0 {
                output.push_str("  ");
            }
            if *active {
                output.push_str(&format!("[{label}]"));
            } else {
                output.push_str(label);
            }
        }
        output.push('\n');
        output
    }

    fn render_overview(&self) -> String {
        let mut output = String::from("\nOverview\n\n");
        output.push_str(&stat_cards::view(&self.registry.stats()));
        output
    }

    fn render_section(&self, section: Section) -> String {
        let state = self.section_state(section);
        match &state.mode {
            ViewMode::Compose => compose_form::view(&ComposeFormViewContext {
                form: &self.compose,
                sending: self.sending,
            }),
            ViewMode::Detail(key) => self.render_detail(section, key),
            ViewMode::List => match section {
                Section::Devices => self.render_list(section, &self.registry.devices),
                Section::Users => self.render_list(section, &self.registry.users),
                Section::Thefts => self.render_list(section, &self.registry.incidents),
                Section::Communications => self.render_list(section, &self.registry.emails),
            },
        }
    }

    fn render_detail(&self, section: Section, key: &str) -> String {
        let width = self.panel_width();
        let body = match section {
            Section::Devices => self
                .registry
                .devices
                .iter()
                .find(|device| device.device_id == key)
                .map(|device| {
                    detail_panel::device_view(device, self.registry.transfer_for(key), width)
                }),
            Section::Users => self
                .registry
                .users
                .iter()
                .find(|user| user.id == key)
                .map(|user| detail_panel::user_view(user, width)),
            Section::Thefts => self
                .registry
                .incidents
                .iter()
                .find(|incident| incident.id == key)
                .map(|incident| detail_panel::incident_view(incident, width)),
            Section::Communications => self
                .registry
                .emails
                .iter()
                .find(|entry| entry.id == key)
                .map(|entry| detail_panel::email_view(entry, width)),
        };
        let mut output = body.unwrap_or_else(|| "(record not found)\n".to_owned());
        output.push_str("\nEsc:back  e:edit  d:delete\n");
        output
    }

    fn render_list<R: ListRecord>(&self, section: Section, records: &[R]) -> String {
        let config = section.view_config();
        let state = self.section_state(section);
        let output = self.query_output(section);

        let mut view = format!("\n{}\n\n", config.title);
        view.push_str(&tab_bar::view(&TabBarViewContext {
            tabs: config.tabs,
            active: state.active_tab,
            total: records.len(),
            base_counts: &output.base_counts,
        }));
        view.push_str(&self.render_search_line(state));
        view.push_str(&record_table::view(&RecordTableViewContext {
            records,
            visible: &output.visible,
            columns: config.columns,
            cursor: state.cursor,
        }));
        view.push_str(&format!(
            "Page {} of {}  ({} records)\n",
            output.page.current_page(),
            output.page.total_pages(),
            output.filtered_count,
        ));
        view
    }

    fn render_search_line(&self, state: &SectionViewState) -> String {
        let term = state.list.search_term();
        if state.searching {
            format!("Search: {term}\u{2588}\n")
        } else if term.is_empty() {
            "Search: (press / to search)\n".to_owned()
        } else {
            format!("Search: {term}\n")
        }
    }

    fn render_status_bar(&self) -> String {
        if let Some(status) = &self.status {
            return format!("{status}\n");
        }
        let hints = match self.input_mode() {
            InputMode::Browse => match self.pane {
                Pane::Overview => "2-5:sections  ?:help  q:quit",
                Pane::Section(Section::Communications) => {
                    "j/k:rows  n/p:page  Tab:filter  /:search  Enter:view  c:compose  r:reply  q:quit"
                }
                Pane::Section(_) => {
                    "j/k:rows  n/p:page  Tab:filter  /:search  Enter:view  ?:help  q:quit"
                }
            },
            InputMode::Search => "Enter:apply  Esc:clear",
            InputMode::Compose => "Tab:next field  F2:template  Enter:send  Esc:cancel",
        };
        format!("{hints}\n")
    }

    fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Sections:
  1          Overview
  2          Devices
  3          Users
  4          Thefts
  5          Communications

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  n, PgDn    Next page
  p, PgUp    Previous page
  Tab        Cycle filter tab
  /          Search
  Enter      View selected record
  Esc        Back to list

Actions (all simulated):
  e          Edit
  d          Delete
  f          Flag
  a          Approve transfer (devices)
  x          Reject transfer (devices)
  r          Reply (communications)
  c          Compose email (communications)

Other:
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let registry = super::initial_registry();
        let telemetry = super::telemetry_sink();
        (Self::new(registry, telemetry), None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        // Try to downcast to our message type
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Handle key events from bubbletea-rs
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            // Any key closes the help overlay without further effect
            if self.show_help {
                self.show_help = false;
                return None;
            }
            let app_msg = map_key_to_message(key_msg, self.input_mode());
            if let Some(mapped) = app_msg {
                return self.handle_message(&mapped);
            }
        }

        // Handle window size messages
        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return Self::render_help_overlay();
        }

        let mut output = self.render_header();
        match self.pane {
            Pane::Overview => output.push_str(&self.render_overview()),
            Pane::Section(section) => output.push_str(&self.render_section(section)),
        }
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

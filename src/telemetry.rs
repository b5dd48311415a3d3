//! Application telemetry events and sinks.
//!
//! SecureTrack simulates every mutating action (edit, delete, flag,
//! approve, reject, send email); telemetry is where those simulations
//! leave a record. Sinks are pluggable so the TUI can stay silent while
//! the CLI and tests capture events.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by SecureTrack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A record action was dispatched from a list or detail view.
    ActionDispatched {
        /// Action label (view, edit, delete, flag, approve, reject, reply).
        action: String,
        /// Key of the record the action targeted.
        record_key: String,
    },
    /// A compose-and-send flow completed its simulated delivery.
    EmailSimulated {
        /// Recipient address.
        recipient: String,
        /// Subject line.
        subject: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// Intended for local debugging; nothing is transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

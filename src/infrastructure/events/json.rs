//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// One JSON object per event, tagged with `"event"`.
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            environment,
            host,
            release_id,
            release_path,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "environment": environment.segment(),
            "host": host,
            "release_id": release_id.to_string(),
            "release_path": release_path.display().to_string(),
        }),

        DeployEvent::PreviousRelease { path } => serde_json::json!({
            "event": "previous_release",
            "path": path.as_ref().map(|p| p.display().to_string()),
        }),

        DeployEvent::InspectionFailed { message } => serde_json::json!({
            "event": "inspection_failed",
            "message": message,
        }),

        DeployEvent::GateAnswered { gate, accepted } => serde_json::json!({
            "event": "gate",
            "gate": gate.as_str(),
            "accepted": accepted,
        }),

        DeployEvent::Cloned { revision } => serde_json::json!({
            "event": "cloned",
            "revision": revision.as_str(),
        }),

        DeployEvent::QaChecked {
            matched,
            qa_revision,
        } => serde_json::json!({
            "event": "qa_checked",
            "matched": matched,
            "qa_revision": qa_revision.as_ref().map(|r| r.as_str()),
        }),

        DeployEvent::ResourceCopied { resource } => serde_json::json!({
            "event": "item_copied",
            "resource": resource.as_str(),
        }),

        DeployEvent::ResourceSkipped { resource, output } => serde_json::json!({
            "event": "item_skipped",
            "resource": resource.as_str(),
            "output": output.trim(),
        }),

        DeployEvent::BuildStepCompleted { step } => serde_json::json!({
            "event": "build_step",
            "step": step.to_string(),
        }),

        DeployEvent::PromotionStepTolerated { step, output } => serde_json::json!({
            "event": "promotion_warning",
            "step": step,
            "output": output.trim(),
        }),

        DeployEvent::Promoted { release_path } => serde_json::json!({
            "event": "promoted",
            "release_path": release_path.display().to_string(),
        }),

        DeployEvent::Completed {
            release_path,
            revision,
        } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "success",
            "release_path": release_path.display().to_string(),
            "revision": revision.as_str(),
        }),

        DeployEvent::Aborted { phase, reason } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "aborted",
            "phase": phase.as_str(),
            "reason": reason,
        }),

        DeployEvent::Failed { phase, message } => serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": "failed",
            "phase": phase.as_str(),
            "error": message,
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}

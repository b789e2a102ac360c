//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink (binary): Human-readable progress

mod json;

pub use json::{event_to_json, JsonEventSink};

//! Structured adjustment-decision events emitted by the rule sets.
//!
//! Events are a diagnostic side channel: sinks must never influence the
//! settings being derived, and the file-backed sink swallows IO errors so a
//! full disk cannot break game start.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use uuid::Uuid;

use super::GameKind;

/// Single settings field touched by a fired rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub before: Value,
    pub after: Value,
}

/// Record of one adaptation rule firing, stored as JSONL when logged to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustmentEvent {
    pub event_id: Uuid,
    pub game: GameKind,
    pub rule: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub changes: Vec<FieldChange>,
}

impl AdjustmentEvent {
    pub fn new(game: GameKind, rule: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            game,
            rule: rule.into(),
            timestamp: Utc::now(),
            changes: Vec::new(),
        }
    }

    /// Appends a before/after pair for one field the rule adjusted.
    pub fn with_change(
        mut self,
        field: impl Into<String>,
        before: impl Serialize,
        after: impl Serialize,
    ) -> Self {
        self.changes.push(FieldChange {
            field: field.into(),
            before: serde_json::to_value(before).unwrap_or(Value::Null),
            after: serde_json::to_value(after).unwrap_or(Value::Null),
        });
        self
    }
}

/// Consumer of adjustment events.
pub trait AdjustmentSink {
    fn record(&self, event: AdjustmentEvent);
}

/// Sink that drops every event.
pub struct NullSink;

impl AdjustmentSink for NullSink {
    fn record(&self, _event: AdjustmentEvent) {}
}

/// Sink retaining events in memory for later inspection.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<AdjustmentEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<AdjustmentEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl AdjustmentSink for MemorySink {
    fn record(&self, event: AdjustmentEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// Appends adjustment events to a JSONL file, one event per line.
pub struct AdjustmentLog {
    events_path: PathBuf,
}

impl AdjustmentLog {
    pub fn new(events_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
        }
    }

    fn append_event(&self, event: &AdjustmentEvent) -> Result<()> {
        if let Some(parent) = self.events_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.events_path)?;
        file.write_all(serde_json::to_string(event)?.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    pub fn load_events(&self) -> Result<Vec<AdjustmentEvent>> {
        if !self.events_path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.events_path)?;
        let mut events = Vec::new();
        for line in data.lines().filter(|l| !l.trim().is_empty()) {
            let event: AdjustmentEvent = serde_json::from_str(line)?;
            events.push(event);
        }
        Ok(events)
    }
}

impl AdjustmentSink for AdjustmentLog {
    fn record(&self, event: AdjustmentEvent) {
        let _ = self.append_event(&event);
    }
}

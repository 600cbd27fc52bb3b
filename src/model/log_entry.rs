use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

entity_id!(LogEntryId, "log");

/// Severity of an activity-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Information,
    Warning,
    Error,
    Fatal,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Fatal => "Fatal",
        };
        f.write_str(name)
    }
}

/// A persisted record in the store's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogEntryId,
    pub level: LogLevel,
    pub short_message: String,
    pub full_message: String,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn from_params(id: LogEntryId, params: LogEntryCreate) -> Self {
        Self {
            id,
            level: params.level,
            short_message: params.short_message,
            full_message: params.full_message,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntryCreate {
    pub level: LogLevel,
    pub short_message: String,
    pub full_message: String,
}

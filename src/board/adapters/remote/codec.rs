//! Translation between domain records and record-store rows.
//!
//! Outbound rows always use the storage spelling (`due_date`,
//! `project_id`, ...). Inbound rows are read leniently: storage and
//! UI spellings are both accepted, lookup fields may arrive as nested
//! objects, and ids may arrive as strings. Everything is normalized into the
//! canonical domain types here so nothing past this module sees both
//! spellings.

use crate::board::{
    domain::{
        Entity, PersistedProjectData, PersistedTaskData, Priority, Project, ProjectDraft,
        ProjectId, RecurringPattern, Task, TaskDraft, TaskId, TaskStatus,
    },
    ports::Record,
};
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while decoding a row returned by the record store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The row is not a JSON object.
    #[error("expected a record object, found {0}")]
    NotAnObject(String),

    /// A required field is absent or null under every accepted spelling.
    #[error("record is missing required field '{0}'")]
    MissingField(&'static str),

    /// A field is present but cannot be interpreted.
    #[error("record field '{field}' is invalid: {reason}")]
    InvalidField {
        /// Canonical storage name of the field.
        field: &'static str,
        /// Description of the problem.
        reason: String,
    },
}

/// Mapping between an entity and its record-store row.
pub trait RecordCodec: Entity {
    /// Storage fields requested when fetching rows.
    const FIELDS: &'static [&'static str];

    /// Encodes a draft as a row for `create`.
    fn draft_to_record(draft: &Self::Draft, created_at: DateTime<Utc>) -> Record;

    /// Encodes an existing entity, including its `Id`, for `update`.
    fn to_record(&self) -> Record;

    /// Decodes a row returned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] when the row lacks a required field or holds a
    /// value of the wrong shape.
    fn from_record(record: &Value) -> Result<Self, CodecError>;
}

/// Formats a timestamp the way browsers serialize dates.
fn encode_timestamp(value: DateTime<Utc>) -> Value {
    Value::String(value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn encode_optional<T>(value: Option<T>, encode: impl FnOnce(T) -> Value) -> Value {
    value.map_or(Value::Null, encode)
}

fn encode_str(value: &str) -> Value {
    Value::String(value.to_owned())
}

/// Read access to a row under any of several field spellings.
struct RecordReader<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RecordReader<'a> {
    fn new(record: &'a Value) -> Result<Self, CodecError> {
        record
            .as_object()
            .map(|fields| Self { fields })
            .ok_or_else(|| CodecError::NotAnObject(record.to_string()))
    }

    /// Returns the first non-null value among `aliases`.
    fn lookup(&self, aliases: &[&str]) -> Option<&'a Value> {
        aliases
            .iter()
            .filter_map(|alias| self.fields.get(*alias))
            .find(|value| !value.is_null())
    }

    fn id(&self, field: &'static str, aliases: &[&str]) -> Result<Option<u64>, CodecError> {
        self.lookup(aliases)
            .map(|value| decode_id(field, value))
            .transpose()
    }

    fn required_id(&self, field: &'static str, aliases: &[&str]) -> Result<u64, CodecError> {
        self.id(field, aliases)?
            .ok_or(CodecError::MissingField(field))
    }

    fn text(&self, field: &'static str, aliases: &[&str]) -> Result<Option<String>, CodecError> {
        match self.lookup(aliases) {
            None => Ok(None),
            Some(Value::String(text)) => {
                let trimmed = text.trim();
                Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
            }
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(other) => Err(invalid(field, format!("expected text, found {other}"))),
        }
    }

    fn required_text(&self, field: &'static str, aliases: &[&str]) -> Result<String, CodecError> {
        self.text(field, aliases)?
            .ok_or(CodecError::MissingField(field))
    }

    fn timestamp(
        &self,
        field: &'static str,
        aliases: &[&str],
    ) -> Result<Option<DateTime<Utc>>, CodecError> {
        self.text(field, aliases)?
            .map(|text| decode_timestamp(field, &text))
            .transpose()
    }

    fn flag(&self, field: &'static str, aliases: &[&str]) -> Result<Option<bool>, CodecError> {
        match self.lookup(aliases) {
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(*flag)),
            Some(Value::String(text)) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Some(true)),
                "false" | "" => Ok(Some(false)),
                _ => Err(invalid(field, format!("expected a boolean, found '{text}'"))),
            },
            Some(other) => Err(invalid(field, format!("expected a boolean, found {other}"))),
        }
    }

    fn parsed<T, E: std::fmt::Display>(
        &self,
        field: &'static str,
        aliases: &[&str],
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> Result<Option<T>, CodecError> {
        self.text(field, aliases)?
            .map(|text| parse(&text).map_err(|err| invalid(field, err.to_string())))
            .transpose()
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> CodecError {
    CodecError::InvalidField {
        field,
        reason: reason.into(),
    }
}

/// Accepts numeric ids, numeric strings, and lookup objects carrying `Id`.
fn decode_id(field: &'static str, value: &Value) -> Result<u64, CodecError> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| invalid(field, format!("expected a positive integer, found {number}"))),
        Value::String(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|err| invalid(field, err.to_string())),
        Value::Object(lookup) => lookup
            .get("Id")
            .or_else(|| lookup.get("id"))
            .ok_or_else(|| invalid(field, "lookup object without Id"))
            .and_then(|inner| decode_id(field, inner)),
        other => Err(invalid(field, format!("expected an identifier, found {other}"))),
    }
}

/// Accepts RFC 3339 timestamps and bare dates (read as UTC midnight).
fn decode_timestamp(field: &'static str, text: &str) -> Result<DateTime<Utc>, CodecError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|err| invalid(field, err.to_string()))
}

const TASK_FIELDS: &[&str] = &[
    "Name",
    "Tags",
    "Owner",
    "title",
    "description",
    "due_date",
    "priority",
    "status",
    "project_id",
    "is_recurring",
    "recurring_pattern",
    "created_at",
    "completed_at",
];

const PROJECT_FIELDS: &[&str] = &["Name", "Tags", "Owner", "color", "description", "created_at"];

impl RecordCodec for Task {
    const FIELDS: &'static [&'static str] = TASK_FIELDS;

    fn draft_to_record(draft: &TaskDraft, created_at: DateTime<Utc>) -> Record {
        let mut record = Record::new();
        record.insert("Name".to_owned(), encode_str(draft.title()));
        record.insert("title".to_owned(), encode_str(draft.title()));
        record.insert(
            "description".to_owned(),
            encode_optional(draft.description(), encode_str),
        );
        record.insert(
            "due_date".to_owned(),
            encode_optional(draft.due_date(), encode_timestamp),
        );
        record.insert("priority".to_owned(), encode_str(draft.priority().as_str()));
        record.insert("status".to_owned(), encode_str(draft.status().as_str()));
        record.insert(
            "project_id".to_owned(),
            encode_optional(draft.project_id(), |id| Value::from(id.get())),
        );
        record.insert(
            "is_recurring".to_owned(),
            Value::Bool(draft.recurrence().is_some()),
        );
        record.insert(
            "recurring_pattern".to_owned(),
            encode_optional(draft.recurrence(), |pattern| encode_str(pattern.as_str())),
        );
        record.insert("created_at".to_owned(), encode_timestamp(created_at));
        record.insert(
            "completed_at".to_owned(),
            encode_optional(
                draft.status().is_completed().then_some(created_at),
                encode_timestamp,
            ),
        );
        record
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("Id".to_owned(), Value::from(self.id().get()));
        record.insert("Name".to_owned(), encode_str(self.title()));
        record.insert("title".to_owned(), encode_str(self.title()));
        record.insert(
            "description".to_owned(),
            encode_optional(self.description(), encode_str),
        );
        record.insert(
            "due_date".to_owned(),
            encode_optional(self.due_date(), encode_timestamp),
        );
        record.insert("priority".to_owned(), encode_str(self.priority().as_str()));
        record.insert("status".to_owned(), encode_str(self.status().as_str()));
        record.insert(
            "project_id".to_owned(),
            encode_optional(self.project_id(), |id| Value::from(id.get())),
        );
        record.insert("is_recurring".to_owned(), Value::Bool(self.is_recurring()));
        record.insert(
            "recurring_pattern".to_owned(),
            encode_optional(self.recurrence(), |pattern| encode_str(pattern.as_str())),
        );
        record.insert("created_at".to_owned(), encode_timestamp(self.created_at()));
        record.insert(
            "completed_at".to_owned(),
            encode_optional(self.completed_at(), encode_timestamp),
        );
        record
    }

    fn from_record(record: &Value) -> Result<Self, CodecError> {
        let reader = RecordReader::new(record)?;

        let is_recurring = reader.flag("is_recurring", &["is_recurring", "isRecurring"])?;
        let pattern = reader.parsed(
            "recurring_pattern",
            &["recurring_pattern", "recurringPattern"],
            |text| RecurringPattern::try_from(text),
        )?;
        let recurrence = if is_recurring == Some(false) {
            None
        } else {
            pattern
        };

        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::new(reader.required_id("Id", &["Id", "id"])?),
            title: reader.required_text("title", &["title", "Name"])?,
            description: reader.text("description", &["description"])?,
            due_date: reader.timestamp("due_date", &["due_date", "dueDate"])?,
            priority: reader
                .parsed("priority", &["priority"], |text| Priority::try_from(text))?
                .unwrap_or_default(),
            status: reader
                .parsed("status", &["status"], |text| TaskStatus::try_from(text))?
                .unwrap_or_default(),
            project_id: reader
                .id("project_id", &["project_id", "projectId"])?
                .map(ProjectId::new),
            recurrence,
            created_at: reader
                .timestamp("created_at", &["created_at", "createdAt", "CreatedOn"])?
                .ok_or(CodecError::MissingField("created_at"))?,
            completed_at: reader.timestamp("completed_at", &["completed_at", "completedAt"])?,
        }))
    }
}

impl RecordCodec for Project {
    const FIELDS: &'static [&'static str] = PROJECT_FIELDS;

    fn draft_to_record(draft: &ProjectDraft, created_at: DateTime<Utc>) -> Record {
        let mut record = Record::new();
        record.insert("Name".to_owned(), encode_str(draft.name()));
        record.insert("color".to_owned(), encode_str(draft.color()));
        record.insert(
            "description".to_owned(),
            encode_optional(draft.description(), encode_str),
        );
        record.insert("created_at".to_owned(), encode_timestamp(created_at));
        record
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("Id".to_owned(), Value::from(self.id().get()));
        record.insert("Name".to_owned(), encode_str(self.name()));
        record.insert("color".to_owned(), encode_str(self.color()));
        record.insert(
            "description".to_owned(),
            encode_optional(self.description(), encode_str),
        );
        record.insert("created_at".to_owned(), encode_timestamp(self.created_at()));
        record
    }

    fn from_record(record: &Value) -> Result<Self, CodecError> {
        let reader = RecordReader::new(record)?;
        Ok(Self::from_persisted(PersistedProjectData {
            id: ProjectId::new(reader.required_id("Id", &["Id", "id"])?),
            name: reader.required_text("Name", &["Name", "name"])?,
            color: reader.text("color", &["color"])?.unwrap_or_default(),
            description: reader.text("description", &["description"])?,
            created_at: reader
                .timestamp("created_at", &["created_at", "createdAt", "CreatedOn"])?
                .ok_or(CodecError::MissingField("created_at"))?,
        }))
    }
}

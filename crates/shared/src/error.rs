use thiserror::Error;

/// Reasons a single payload record cannot become a [`crate::Notification`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("notification {id}: unknown content type {tag:?}")]
    UnknownVariant { id: String, tag: String },
    #[error("notification {id}: content type {tag:?} is missing field `{field}`")]
    MissingField {
        id: String,
        tag: &'static str,
        field: &'static str,
    },
    #[error("notification {id}: missing `{field}`")]
    MissingRecordField { id: String, field: &'static str },
    #[error("notification {id}: unknown status {status:?}")]
    UnknownStatus { id: String, status: String },
    #[error("notification {id}: malformed record: {reason}")]
    Malformed { id: String, reason: String },
    #[error("notification {id}: duplicate id")]
    DuplicateId { id: String },
}

impl RecordError {
    pub fn id(&self) -> &str {
        match self {
            RecordError::UnknownVariant { id, .. }
            | RecordError::MissingField { id, .. }
            | RecordError::MissingRecordField { id, .. }
            | RecordError::UnknownStatus { id, .. }
            | RecordError::Malformed { id, .. }
            | RecordError::DuplicateId { id } => id,
        }
    }
}

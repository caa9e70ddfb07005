//! JSON payload served by the notifications endpoint.
//!
//! Only the outer array is decoded eagerly. Each element stays a raw JSON
//! value until it is converted on its own, and the typed record keeps the
//! `type` tag and `status` as strings, so one bad record is rejected without
//! failing the rest.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Actor, Content, Notification, NotificationId, Status},
    error::RecordError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(serde_json::Number),
    Text(String),
}

impl From<WireId> for NotificationId {
    fn from(value: WireId) -> Self {
        match value {
            WireId::Number(n) => NotificationId(n.to_string()),
            WireId::Text(s) => NotificationId(s),
        }
    }
}

/// One undecoded element of the payload array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub serde_json::Value);

impl RawRecord {
    /// Best-effort id for error reports on records that do not decode.
    pub fn id_hint(&self) -> String {
        match self.0.get("id") {
            Some(serde_json::Value::String(id)) => id.clone(),
            Some(serde_json::Value::Number(id)) => id.to_string(),
            _ => "?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: WireId,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub content: ContentRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Actor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Decodes the endpoint body. Fails only when the body is not a JSON array.
pub fn decode_payload(body: &[u8]) -> serde_json::Result<Vec<RawRecord>> {
    serde_json::from_slice(body)
}

fn parse_status(status: &str, id: &NotificationId) -> Result<Status, RecordError> {
    match status {
        "unread" => Ok(Status::Unread),
        "read" => Ok(Status::Read),
        other => Err(RecordError::UnknownStatus {
            id: id.to_string(),
            status: other.to_string(),
        }),
    }
}

fn required(
    value: Option<String>,
    id: &NotificationId,
    tag: &'static str,
    field: &'static str,
) -> Result<String, RecordError> {
    value.ok_or_else(|| RecordError::MissingField {
        id: id.to_string(),
        tag,
        field,
    })
}

impl TryFrom<RawRecord> for NotificationRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let id = raw.id_hint();
        serde_json::from_value(raw.0).map_err(|err| RecordError::Malformed {
            id,
            reason: err.to_string(),
        })
    }
}

impl TryFrom<RawRecord> for Notification {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        NotificationRecord::try_from(raw)?.try_into()
    }
}

impl TryFrom<NotificationRecord> for Notification {
    type Error = RecordError;

    fn try_from(record: NotificationRecord) -> Result<Self, Self::Error> {
        let id = NotificationId::from(record.id);
        let status = parse_status(&record.status, &id)?;
        let time = record.time.ok_or_else(|| RecordError::MissingRecordField {
            id: id.to_string(),
            field: "time",
        })?;
        let ContentRecord {
            kind,
            user,
            title,
            group,
            url,
            message,
            picture,
        } = record.content;
        let actor = user.ok_or_else(|| RecordError::MissingRecordField {
            id: id.to_string(),
            field: "content.user",
        })?;

        let content = match kind.as_str() {
            "reaction" => Content::Reaction {
                title: required(title, &id, "reaction", "title")?,
            },
            "follow" => Content::Follow,
            "join" => Content::Join {
                group: required(group, &id, "join", "group")?,
                url: required(url, &id, "join", "url")?,
            },
            "leave" => Content::Leave {
                group: required(group, &id, "leave", "group")?,
                url: required(url, &id, "leave", "url")?,
            },
            "pm" => Content::PrivateMessage {
                message: required(message, &id, "pm", "message")?,
            },
            "comment" => Content::Comment {
                picture: required(picture, &id, "comment", "picture")?,
            },
            _ => {
                return Err(RecordError::UnknownVariant {
                    id: id.to_string(),
                    tag: kind,
                })
            }
        };

        Ok(Notification {
            id,
            status,
            time,
            actor,
            content,
        })
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;

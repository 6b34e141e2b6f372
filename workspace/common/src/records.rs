use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a session rents a whole private room or a single public unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Private,
    Public,
}

/// The unit a public session occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndividualType {
    Console,
    Table,
}

/// Session and cafe-order lifecycle. `Available` is a reservation waiting to
/// start; it still occupies the resource, so "open" covers both it and
/// `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Available,
    Running,
    Finished,
}

impl SessionState {
    pub fn is_open(&self) -> bool {
        matches!(self, SessionState::Available | SessionState::Running)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Available => "Reserved",
            SessionState::Running => "Running",
            SessionState::Finished => "Finished",
        }
    }
}

/// Session record as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDto {
    pub id: i64,
    #[serde(default, rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub customer: String,
    pub session_type: SessionType,
    #[serde(default)]
    pub individual_type: Option<IndividualType>,
    pub state: SessionState,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub console_id: Option<i64>,
    #[serde(default)]
    pub table_id: Option<i64>,
    #[serde(default)]
    pub starting_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total: Decimal,
}

/// Create payload for a session. The three constructors bake in the default
/// field values that encode which kind of session the form is creating; the
/// form only fills in the customer and the chosen resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub customer: String,
    pub session_type: SessionType,
    pub individual_type: Option<IndividualType>,
    pub room_id: Option<i64>,
    pub console_id: Option<i64>,
    pub table_id: Option<i64>,
}

impl CreateSessionRequest {
    fn blank(session_type: SessionType, individual_type: Option<IndividualType>) -> Self {
        Self {
            customer: String::new(),
            session_type,
            individual_type,
            room_id: None,
            console_id: None,
            table_id: None,
        }
    }

    pub fn private_room() -> Self {
        Self::blank(SessionType::Private, None)
    }

    pub fn public_console() -> Self {
        Self::blank(SessionType::Public, Some(IndividualType::Console))
    }

    pub fn public_table() -> Self {
        Self::blank(SessionType::Public, Some(IndividualType::Table))
    }

    /// Form heading matching the kind being created.
    pub fn title(&self) -> &'static str {
        match (self.session_type, self.individual_type) {
            (SessionType::Private, _) => "New Room Session",
            (SessionType::Public, Some(IndividualType::Console)) => "New Console Session",
            (SessionType::Public, _) => "New Table Session",
        }
    }
}

/// Update payload; only the fields present change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    pub customer: Option<String>,
    pub state: Option<SessionState>,
}

/// Cafe order record as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeOrderDto {
    pub id: i64,
    #[serde(default, rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub customer: String,
    pub state: SessionState,
    #[serde(default)]
    pub table_id: Option<i64>,
    #[serde(default)]
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCafeOrderRequest {
    pub customer: String,
    pub table_id: Option<i64>,
}

/// Update payload for a cafe order; only the fields present change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCafeOrderRequest {
    pub customer: Option<String>,
    pub state: Option<SessionState>,
}

/// One group of the session report (grouped by customer by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub customer: String,
    #[serde(default)]
    pub sessions: u32,
    #[serde(default)]
    pub revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_encode_the_sub_type() {
        let room = CreateSessionRequest::private_room();
        assert_eq!(room.session_type, SessionType::Private);
        assert_eq!(room.individual_type, None);
        assert_eq!(room.title(), "New Room Session");

        let console = CreateSessionRequest::public_console();
        assert_eq!(console.session_type, SessionType::Public);
        assert_eq!(console.individual_type, Some(IndividualType::Console));
        assert_eq!(console.title(), "New Console Session");

        let table = CreateSessionRequest::public_table();
        assert_eq!(table.individual_type, Some(IndividualType::Table));
        assert_eq!(table.title(), "New Table Session");
    }

    #[test]
    fn create_request_serializes_lowercase_tokens() {
        let encoded = serde_json::to_value(CreateSessionRequest::public_console()).unwrap();
        assert_eq!(encoded["session_type"], "public");
        assert_eq!(encoded["individual_type"], "console");
        assert_eq!(encoded["room_id"], serde_json::Value::Null);
    }

    #[test]
    fn open_states_cover_reserved_and_running() {
        assert!(SessionState::Available.is_open());
        assert!(SessionState::Running.is_open());
        assert!(!SessionState::Finished.is_open());
    }

    #[test]
    fn session_dto_tolerates_sparse_payloads() {
        let session: SessionDto = serde_json::from_str(
            r#"{"id": 9, "session_type": "private", "state": "running"}"#,
        )
        .unwrap();
        assert_eq!(session.id, 9);
        assert_eq!(session.reference, "");
        assert_eq!(session.total, Decimal::ZERO);
        assert!(session.state.is_open());
    }
}

use crate::api_client;
use common::{CreateSessionRequest, SessionDto, UpdateSessionRequest};

/// Resource a session can be tied to, used when resolving "the open session
/// for this card".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResource {
    Room(i64),
    Console(i64),
    Table(i64),
}

impl SessionResource {
    fn query_param(&self) -> (&'static str, i64) {
        match self {
            SessionResource::Room(id) => ("room_id", *id),
            SessionResource::Console(id) => ("console_id", *id),
            SessionResource::Table(id) => ("table_id", *id),
        }
    }

    /// How the resource is named in user-facing messages.
    pub fn describe(&self) -> String {
        match self {
            SessionResource::Room(id) => format!("room #{}", id),
            SessionResource::Console(id) => format!("console #{}", id),
            SessionResource::Table(id) => format!("table #{}", id),
        }
    }
}

/// Resolve the reserved-or-running session occupying a resource. The backend
/// applies `limit=1`; an empty vec means the resource has no open session.
pub async fn find_open_session(resource: SessionResource) -> Result<Vec<i64>, String> {
    let (field, id) = resource.query_param();
    log::trace!("Searching open session with {}={}", field, id);
    api_client::get::<Vec<i64>>(&format!("/sessions/open?{}={}&limit=1", field, id)).await
}

pub async fn get_session(session_id: i64) -> Result<SessionDto, String> {
    log::trace!("Fetching session ID: {}", session_id);
    let result = api_client::get::<SessionDto>(&format!("/sessions/{}", session_id)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch session {}: {}", session_id, e);
    }

    result
}

pub async fn create_session(request: CreateSessionRequest) -> Result<SessionDto, String> {
    log::trace!("Creating {:?} session", request.session_type);
    api_client::post::<SessionDto, _>("/sessions", &request).await
}

pub async fn update_session(
    session_id: i64,
    request: UpdateSessionRequest,
) -> Result<SessionDto, String> {
    log::trace!("Updating session ID: {}", session_id);
    api_client::put::<SessionDto, _>(&format!("/sessions/{}", session_id), &request).await
}

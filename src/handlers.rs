use axum::Json;
use axum::http::{Method, Uri};
use crate::models::{StatusPayload, STATUS};

// answers every method and path; the request body is never read
pub async fn status(method: Method, uri: Uri) -> Json<StatusPayload> {

    tracing::debug!(%method, path = %uri.path(), "status request");

    Json(STATUS)

}

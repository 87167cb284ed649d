use axum::{
    extract::{Path, State},
    Json,
};
use flipdns_domain::wire::encode_name;
use flipdns_domain::DomainError;
use tracing::debug;

use crate::{dto::RecordResponse, errors::ApiError, state::AppState};

pub async fn get_record(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();
    encode_name(&domain)
        .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", domain, e)))?;

    debug!(domain = %domain, "Record lookup via API");

    let record = state
        .store
        .lookup(&domain)
        .await?
        .ok_or_else(|| DomainError::RecordNotFound(domain.clone()))?;

    Ok(Json(RecordResponse::from_stored(domain, record)))
}

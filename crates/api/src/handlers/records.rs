use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use bramble_dns_domain::{RecordRequest, RecordView};
use serde_json::{json, Value};
use tracing::debug;

use crate::{
    dto::{CreateRecordRequest, DeleteRecordRequest, RecordResponse, UpdateRecordRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/dns",
        get(list_records)
            .post(create_record)
            .put(update_record)
            .delete(delete_record),
    )
}

async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<RecordView>>, ApiError> {
    let records = state.records.list.execute().await?;
    debug!(count = records.len(), "Records listed");
    Ok(Json(records))
}

async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let request = RecordRequest::from(req);
    state.records.create.execute(request.clone()).await?;
    Ok((StatusCode::CREATED, Json(RecordResponse::from(request))))
}

async fn update_record(
    State(state): State<AppState>,
    Json(req): Json<UpdateRecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let (request, old_data) = req.into_parts();
    state
        .records
        .update
        .execute(request.clone(), old_data)
        .await?;
    Ok(Json(RecordResponse::from(request)))
}

async fn delete_record(
    State(state): State<AppState>,
    Json(req): Json<DeleteRecordRequest>,
) -> Result<Json<Value>, ApiError> {
    state
        .records
        .delete
        .execute(&req.host, &req.record_type, req.data)
        .await?;
    Ok(Json(json!({ "deleted": true })))
}

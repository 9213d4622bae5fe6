//! Record CRUD endpoints.
//!
//! Every handler opens its own connection on a blocking worker and drops it
//! before returning; nothing is cached between requests.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{delete, get, put},
};
use serde::Serialize;

use crate::api::payload::UpdatePayload;
use crate::config::Config;
use crate::core::del::{DeleteLogic, DeleteOutcome};
use crate::core::list::ListLogic;
use crate::core::update::UpdateLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record::EmployeeYearRecord;

/// State shared across handlers: where the store lives.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub database: String,
}

impl ApiState {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.database.clone())
    }

    /// Run `op` against a fresh connection on the blocking pool.
    async fn with_store<T, F>(&self, op: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
    {
        let path = self.database.clone();
        tokio::task::spawn_blocking(move || {
            let mut pool = DbPool::open(&path)?;
            op(&mut pool)
        })
        .await
        .map_err(|e| AppError::Internal(format!("store worker failed: {e}")))?
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub time: String,
}

/// Create the record routes
pub fn record_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/employee_ids", get(list_employee_ids))
        .route(
            "/employee/:employee_id",
            get(list_employee_records).delete(delete_employee),
        )
        .route("/employee_delete/:employee_id", delete(delete_employee))
        .route("/employee/:employee_id/year/:year", put(update_year_record))
        .with_state(state)
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        time: chrono::Utc::now().to_rfc3339(),
    })
}

async fn list_employee_ids(State(state): State<Arc<ApiState>>) -> AppResult<Json<Vec<i64>>> {
    let ids = state.with_store(|pool| ListLogic::employee_ids(pool)).await?;
    Ok(Json(ids))
}

async fn list_employee_records(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<EmployeeYearRecord>>> {
    let Path(employee_id) = path.map_err(bad_path)?;
    let records = state
        .with_store(move |pool| ListLogic::records(pool, employee_id))
        .await?;
    Ok(Json(records))
}

async fn delete_employee(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<DeleteOutcome>> {
    let Path(employee_id) = path.map_err(bad_path)?;
    let outcome = state
        .with_store(move |pool| DeleteLogic::apply(pool, employee_id))
        .await?;
    Ok(Json(outcome))
}

async fn update_year_record(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<(i64, i32)>, PathRejection>,
    payload: Result<Json<UpdatePayload>, JsonRejection>,
) -> AppResult<Json<EmployeeYearRecord>> {
    let Path((employee_id, year)) = path.map_err(bad_path)?;
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    // Reject structurally invalid bodies before any store access.
    let update = payload.into_update()?;
    UpdateLogic::validate(&update)?;

    let record = state
        .with_store(move |pool| UpdateLogic::apply(pool, employee_id, year, &update))
        .await?;
    Ok(Json(record))
}

fn bad_path(rejection: PathRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

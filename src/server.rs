use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::manager::BirthdayManager;
use crate::models::BirthdayPerson;
use crate::update::Update;

/// Shared state behind the HTTP handlers
pub struct AppState {
    pub manager: BirthdayManager,
    /// Webhook updates arrive on a path containing the bot token, so
    /// only Telegram (which knows the token) can reach the handler.
    pub webhook_token: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/:token", post(handle_update))
        .route("/birthdays", get(get_birthdays))
        .with_state(state)
}

async fn handle_update(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(update): Json<Update>,
) -> StatusCode {
    if token != state.webhook_token {
        return StatusCode::NOT_FOUND;
    }
    match state.manager.handle_update(&update).await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            error!("error handling update: {err}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[derive(Deserialize)]
struct BirthdaysQuery {
    date: NaiveDate,
}

#[derive(Serialize)]
struct BirthdaysResponse {
    birthdays: Vec<BirthdayPerson>,
}

/// Batch boundary for the external notifier: birthday people for one
/// calendar date, across all chats
async fn get_birthdays(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BirthdaysQuery>,
) -> Result<Json<BirthdaysResponse>, StatusCode> {
    match state.manager.birthdays_for_date(query.date).await {
        Ok(birthdays) => Ok(Json(BirthdaysResponse { birthdays })),
        Err(err) => {
            error!("error getting birthdays for {}: {err}", query.date);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

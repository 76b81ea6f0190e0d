use super::types::{ChatRequest, ChatResponse, HealthResponse};
use crate::tutor::{Doubt, DoubtRelay};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<DoubtRelay>,
}

type ChatResult = Result<Json<ChatResponse>, (StatusCode, Json<ChatResponse>)>;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ChatResult {
    let request_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(%request_id, "Rejected chat body: {}", rejection.body_text());
        (
            rejection.status(),
            Json(ChatResponse::failure(rejection.body_text())),
        )
    })?;

    let subject = state.relay.resolve_subject(request.subject.as_deref());
    let doubt = Doubt::new(request.doubt, subject);

    async move {
        info!("Received {} doubt ({} chars)", subject, doubt.text.chars().count());

        match state.relay.ask(&doubt).await {
            Ok(answer) => {
                info!("Answered doubt with {} chars", answer.chars().count());
                Ok(Json(ChatResponse::answer(answer)))
            }
            Err(e) => {
                error!("Failed to answer doubt: {}", e);
                Err((e.status_code(), Json(ChatResponse::failure(e.user_message()))))
            }
        }
    }
    .instrument(info_span!("chat", %request_id))
    .await
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        provider_configured: state.relay.is_configured(),
    })
}

//! Contact form endpoint
//!
//! Validates the submission, then relays it through the configured mailer.
//! Missing required fields are a client error naming the fields; a missing
//! mail configuration is a server error distinct from validation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::mail::ContactSubmission;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn required(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Response {
    let name = required(&request.name);
    let email = required(&request.email);
    let message = required(&request.message);

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push("name");
    }
    if email.is_none() {
        missing.push("email");
    }
    if message.is_none() {
        missing.push("message");
    }
    if !missing.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": format!("Missing required fields: {}", missing.join(", ")),
            })),
        )
            .into_response();
    }

    let Some(mailer) = state.mailer.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Contact form is not configured"})),
        )
            .into_response();
    };

    let submission = ContactSubmission {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        company: request.company,
        phone: request.phone,
        message: message.unwrap_or_default(),
    };

    match mailer.send_contact_notification(&submission).await {
        Ok(()) => Json(json!({"success": true})).into_response(),
        Err(e) => {
            error!(error = %e, "Contact notification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to send message"})),
            )
                .into_response()
        }
    }
}

//! Clerk webhook receiver.
//!
//! Verifies the HMAC signature over the raw body, then syncs profile data
//! on `user.updated` events. The body is never parsed before verification.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
};
use tracing::{debug, info, warn};

use crate::error::{ApiError, Result};
use crate::models::{WebhookEvent, USER_UPDATED};
use crate::utils::signature;
use crate::AppState;

/// Header carrying the hex-encoded HMAC-SHA256 of the raw body.
pub const SIGNATURE_HEADER: &str = "clerk-signature";

/// POST /api/webhooks/clerk
///
/// Non-POST methods never reach this handler; the method router answers
/// them with 405.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str> {
    // A missing or non-ASCII header degrades to an empty signature, which
    // can never match a real digest.
    let provided_signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !signature::verify(
        state.config.clerk_webhook_secret.as_bytes(),
        &body,
        provided_signature,
    ) {
        return Err(ApiError::SignatureInvalid);
    }

    // Only a verified body may be parsed.
    let event: WebhookEvent = serde_json::from_slice(&body)?;

    match event.event_type.as_str() {
        USER_UPDATED => sync_user_profile(&state, &event).await?,
        other => debug!(event_type = other, "ignoring webhook event"),
    }

    Ok("Webhook received")
}

/// Fetch the user's current profile from Clerk and write it through to the
/// local record. The two calls are sequential; a lookup failure means no
/// write is attempted.
async fn sync_user_profile(state: &AppState, event: &WebhookEvent) -> Result<()> {
    let clerk_id = event.user_id().ok_or_else(|| {
        warn!("user.updated event without data.id");
        ApiError::MalformedPayload("user.updated event missing data.id".to_string())
    })?;

    let identity = state.identity.fetch_user(clerk_id).await?;

    let profile = state
        .users
        .update_profile(
            clerk_id,
            identity.username.as_deref(),
            identity.profile_image_url.as_deref(),
        )
        .await?;

    info!(
        clerk_id,
        username = profile.username.as_deref().unwrap_or(""),
        "user profile synchronized"
    );

    Ok(())
}

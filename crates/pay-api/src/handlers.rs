//! # Request Handlers
//!
//! Axum request handlers for the checkout API.
//! Checkout parameters are bound from the query string and, when present, a
//! JSON or urlencoded form body. Body values take precedence over the query.

use crate::state::AppState;
use axum::{
    extract::{FromRequest, Query, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use pay_core::{CheckoutError, PaymentRequest, PaymentResult, ProviderInfo};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Checkout parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutParams {
    /// Merchant order id
    pub order_id: String,
    /// Amount, integer or decimal
    pub amount: Decimal,
    /// Currency code
    pub currency: String,
    /// Payment provider (optional, falls back to the configured default)
    #[serde(default)]
    pub provider_id: Option<String>,
}

impl CheckoutParams {
    /// Split into the core request and the provider selection
    pub fn into_parts(self) -> (PaymentRequest, Option<String>) {
        (
            PaymentRequest::new(self.order_id, self.amount, self.currency),
            self.provider_id,
        )
    }
}

/// One source of checkout parameters (query string or body), every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartialParams {
    order_id: Option<String>,
    amount: Option<Decimal>,
    currency: Option<String>,
    provider_id: Option<String>,
}

impl PartialParams {
    /// Fill keys missing here from `fallback`
    fn or(self, fallback: PartialParams) -> Self {
        Self {
            order_id: self.order_id.or(fallback.order_id),
            amount: self.amount.or(fallback.amount),
            currency: self.currency.or(fallback.currency),
            provider_id: self.provider_id.or(fallback.provider_id),
        }
    }

    fn require(self) -> Result<CheckoutParams, String> {
        let missing = |name: &str| format!("missing parameter `{}`", name);

        Ok(CheckoutParams {
            order_id: self.order_id.ok_or_else(|| missing("orderId"))?,
            amount: self.amount.ok_or_else(|| missing("amount"))?,
            currency: self.currency.ok_or_else(|| missing("currency"))?,
            provider_id: self.provider_id,
        })
    }
}

/// Error response: status code plus the error message as a plain-text body
type ApiError = (StatusCode, String);

fn checkout_error_to_response(err: CheckoutError) -> ApiError {
    (
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        err.to_string(),
    )
}

// =============================================================================
// Extractors
// =============================================================================

/// Binds [`CheckoutParams`] from the query string and the request body
#[derive(Debug)]
pub struct CheckoutForm(pub CheckoutParams);

impl<S> FromRequest<S> for CheckoutForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let reject = |message: String| {
            warn!("Rejected checkout parameters: {}", message);
            checkout_error_to_response(CheckoutError::InvalidRequest(message))
        };

        let Query(query) = Query::<PartialParams>::try_from_uri(req.uri())
            .map_err(|e| reject(e.body_text()))?;

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let body = if content_type.starts_with("application/json") {
            Json::<PartialParams>::from_request(req, state)
                .await
                .map(|Json(params)| params)
                .map_err(|e| reject(e.body_text()))?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            Form::<PartialParams>::from_request(req, state)
                .await
                .map(|Form(params)| params)
                .map_err(|e| reject(e.body_text()))?
        } else {
            PartialParams::default()
        };

        body.or(query).require().map(CheckoutForm).map_err(reject)
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "checkout-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List registered payment providers
pub async fn list_providers(State(state): State<AppState>) -> Json<Vec<ProviderInfo>> {
    Json(state.registry.describe_all())
}

/// Run a checkout against the selected (or default) provider
#[instrument(skip(state, params), fields(order_id = %params.order_id))]
pub async fn checkout(
    State(state): State<AppState>,
    CheckoutForm(params): CheckoutForm,
) -> Result<Json<PaymentResult>, ApiError> {
    let (request, provider_id) = params.into_parts();

    let result = state
        .checkout
        .checkout(&request, provider_id.as_deref())
        .await
        .map_err(|e| {
            if e.is_client_error() {
                warn!("Checkout rejected: {}", e);
            } else {
                error!("Checkout failed: {}", e);
            }
            checkout_error_to_response(e)
        })?;

    info!(
        "Checkout processed: success={}, tx={}",
        result.success, result.transaction_id
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_not_found_is_bad_request() {
        let (status, body) = checkout_error_to_response(CheckoutError::provider_not_found("amex"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "No payment processor found for id: amex");
    }

    #[test]
    fn test_configuration_error_is_server_error() {
        let (status, _) = checkout_error_to_response(CheckoutError::Configuration("x".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_params_into_parts() {
        let params: CheckoutParams = serde_json::from_str(
            r#"{"orderId":"o2","amount":500,"currency":"EUR","providerId":"paypal"}"#,
        )
        .unwrap();

        let (request, provider_id) = params.into_parts();
        assert_eq!(request.order_id, "o2");
        assert_eq!(request.amount, Decimal::from(500));
        assert_eq!(provider_id.as_deref(), Some("paypal"));
    }

    #[test]
    fn test_body_values_win_over_query() {
        let body = PartialParams {
            order_id: Some("body".into()),
            amount: Some(Decimal::from(1)),
            currency: Some("USD".into()),
            provider_id: None,
        };
        let query = PartialParams {
            order_id: Some("query".into()),
            provider_id: Some("paypal".into()),
            ..PartialParams::default()
        };

        let params = body.or(query).require().unwrap();
        assert_eq!(params.order_id, "body");
        assert_eq!(params.provider_id.as_deref(), Some("paypal"));
    }

    #[test]
    fn test_missing_parameter_is_named() {
        let err = PartialParams::default().require().unwrap_err();
        assert_eq!(err, "missing parameter `orderId`");
    }
}

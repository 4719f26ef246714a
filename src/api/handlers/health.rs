//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::infrastructure::cache::CacheStatus;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// Always **200 OK**. The site keeps serving when the cache is down, so an
/// unreachable cache only marks the status `degraded`.
///
/// # Components Checked
///
/// 1. **Cache**: Redis PING (or `disabled`)
/// 2. **Redirects**: Number of loaded legacy mappings
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "Cache connected" },
///     "redirects": { "status": "ok", "message": "42 mappings loaded" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache_check = check_cache(&state).await;
    let redirects_check = check_redirects(&state);

    let all_healthy = cache_check.is_ok() && redirects_check.is_ok();

    Json(HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache: cache_check,
            redirects: redirects_check,
        },
    })
}

/// Checks cache connectivity via PING command.
async fn check_cache(state: &AppState) -> CheckStatus {
    match state.cache.status().await {
        CacheStatus::Disabled => CheckStatus::ok("Cache disabled"),
        CacheStatus::Healthy => CheckStatus::ok("Cache connected"),
        CacheStatus::Unavailable(reason) => {
            CheckStatus::error(format!("Cache unavailable: {}", reason))
        }
    }
}

/// Reports the size of the legacy redirect table.
fn check_redirects(state: &AppState) -> CheckStatus {
    CheckStatus::ok(format!("{} mappings loaded", state.resolver.len()))
}

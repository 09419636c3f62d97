// Copyright (C) 2026 Campstay Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP boundary for the Campstay booking core.
//!
//! A thin axum adapter over the `campstay-api` handlers: extract the
//! principal, parse the wire payload, take the persistence lock, delegate,
//! and map the error taxonomy onto status codes. All booking decisions
//! live below this layer.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State as AxumState},
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::info;

use campstay_api::{
    ApiError, AuthenticatedPrincipal, AvailabilityResponse, BlockedRangeResponse,
    BookingStatusResponse, CreateBlockedRangeRequest, CreateBookingRequest, CreateBookingResponse,
    MockPaymentProcessor, QuoteRequest, QuoteResponse, TransitionBookingRequest, authenticate,
    add_blocked_range, check_availability, create_booking, quote_price, remove_blocked_range,
    transition_booking,
};
use campstay_persistence::Persistence;

/// Environment fallback for the CORS allow-list.
const ALLOWED_ORIGINS_ENV: &str = "CAMPSTAY_ALLOWED_ORIGINS";

/// Campstay Server - HTTP server for the booking core
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory
    /// database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Origin allowed to call the API cross-site. Repeatable. Falls back
    /// to the comma-separated `CAMPSTAY_ALLOWED_ORIGINS` variable.
    #[arg(long = "allowed-origin")]
    allowed_origins: Vec<String>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The booking store wrapped in a Mutex for safe concurrent access.
    persistence: Arc<Mutex<Persistence>>,
    /// Origins allowed by the CORS middleware.
    allowed_origins: Arc<Vec<String>>,
}

/// Query parameters for the availability endpoint.
#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    /// Check-in date, ISO 8601.
    from: String,
    /// Checkout date, ISO 8601.
    to: String,
}

/// Error response body. The message is already sanitized by the api
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status = match err {
            ApiError::AuthenticationRequired { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Extracts the authenticated principal from the bearer-style
/// `Authorization` header.
fn principal_from_headers(headers: &HeaderMap) -> Result<AuthenticatedPrincipal, HttpError> {
    let raw = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);
    authenticate(token).map_err(Into::into)
}

fn today() -> time::Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for POST `/bookings`.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, HttpError> {
    let principal = principal_from_headers(&headers)?;

    info!(
        principal = %principal.id,
        camp_id = request.booking.camp_id,
        "Handling create_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = create_booking(
        &mut persistence,
        &MockPaymentProcessor,
        &principal,
        &request,
        today(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/camps/{camp_id}/availability`.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    Path(camp_id): Path<i64>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response = check_availability(&mut persistence, camp_id, &query.from, &query.to)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/quote`.
async fn handle_quote(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, HttpError> {
    // Quotes are advisory and work for anonymous callers; a known
    // principal only sharpens the first-booking discount.
    let guest_id = principal_from_headers(&headers).ok().map(|p| p.id);

    let mut persistence = app_state.persistence.lock().await;
    let response = quote_price(&mut persistence, &request, today(), guest_id.as_deref())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings/{reservation_id}/status`.
async fn handle_transition_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<TransitionBookingRequest>,
) -> Result<Json<BookingStatusResponse>, HttpError> {
    let principal = principal_from_headers(&headers)?;

    info!(
        principal = %principal.id,
        reservation_id,
        status = %request.status,
        "Handling transition_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = transition_booking(&mut persistence, reservation_id, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/blocked-ranges`.
async fn handle_add_blocked_range(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateBlockedRangeRequest>,
) -> Result<Json<BlockedRangeResponse>, HttpError> {
    let principal = principal_from_headers(&headers)?;

    info!(
        principal = %principal.id,
        camp_id = request.camp_id,
        "Handling add_blocked_range request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response = add_blocked_range(&mut persistence, &principal, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/blocked-ranges/{blocked_range_id}`.
async fn handle_remove_blocked_range(
    AxumState(app_state): AxumState<AppState>,
    Path(blocked_range_id): Path<i64>,
    headers: HeaderMap,
) -> Result<StatusCode, HttpError> {
    let principal = principal_from_headers(&headers)?;

    info!(
        principal = %principal.id,
        blocked_range_id,
        "Handling remove_blocked_range request"
    );

    let mut persistence = app_state.persistence.lock().await;
    remove_blocked_range(&mut persistence, blocked_range_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// CORS allow-list middleware.
///
/// Echoes the request origin back only when it is on the configured
/// allow-list; preflight requests are answered without reaching the
/// handlers.
async fn apply_cors(
    AxumState(app_state): AxumState<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);

    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    if let Some(origin) = origin
        && app_state.allowed_origins.iter().any(|o| o == &origin)
        && let Ok(value) = HeaderValue::from_str(&origin)
    {
        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, DELETE, OPTIONS"),
        );
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("authorization, content-type"),
        );
    }

    response
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/bookings", post(handle_create_booking))
        .route(
            "/camps/{camp_id}/availability",
            get(handle_check_availability),
        )
        .route("/quote", post(handle_quote))
        .route(
            "/bookings/{reservation_id}/status",
            post(handle_transition_booking),
        )
        .route("/blocked-ranges", post(handle_add_blocked_range))
        .route(
            "/blocked-ranges/{blocked_range_id}",
            delete(handle_remove_blocked_range),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            apply_cors,
        ))
        .with_state(app_state)
}

/// Resolves the CORS allow-list from CLI arguments or the environment.
fn resolve_allowed_origins(args: &Args) -> Vec<String> {
    if !args.allowed_origins.is_empty() {
        return args.allowed_origins.clone();
    }
    std::env::var(ALLOWED_ORIGINS_ENV)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Campstay Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let allowed_origins = resolve_allowed_origins(&args);
    info!(origins = ?allowed_origins, "CORS allow-list configured");

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        allowed_origins: Arc::new(allowed_origins),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

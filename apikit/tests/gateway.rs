// Integration tests for the gateway, session and cache layers, driven
// against a scripted stand-in backend (axum, ephemeral port). The
// backend counts every request per route so the tests can prove which
// calls did and did not reach the network.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;

use apikit::gateway::upload::MAX_UPLOAD_BYTES;
use apikit::types::{AlertFilter, MedicineFilter, NewUser};
use apikit::{ApiError, AuthSession, GatewayConfig, MemoryTokenStore, PharmClient, SessionState};

const GOOD_PASSWORD: &str = "admin123";
/// Accepted by login, but `/auth/me` rejects the token it mints.
const ORPHAN_PASSWORD: &str = "orphan";
const VALID_TOKEN: &str = "tok-valid";
const ORPHAN_TOKEN: &str = "tok-orphan";

#[derive(Default)]
struct Backend {
    hits: Mutex<HashMap<String, usize>>,
    // (id, message, acknowledged)
    alerts: Mutex<Vec<(i64, String, bool)>>,
}

impl Backend {
    fn with_alerts() -> Self {
        let backend = Self::default();
        *backend.alerts.lock().unwrap() = vec![
            (1, "Low Stock: Paracetamol 500mg has only 12 units.".into(), false),
            (2, "Batch B-204 for Amoxicillin expires on 2026-09-01".into(), false),
        ];
        backend
    }

    fn count(&self, route: &str) {
        *self.hits.lock().unwrap().entry(route.to_string()).or_insert(0) += 1;
    }

    fn hits(&self, route: &str) -> usize {
        self.hits.lock().unwrap().get(route).copied().unwrap_or(0)
    }
}

fn profile_json() -> serde_json::Value {
    json!({
        "id": 1,
        "email": "admin@pharmacy.com",
        "full_name": "Admin User",
        "role": "pharmacist",
        "phone": null
    })
}

async fn login(
    State(backend): State<Arc<Backend>>,
    Form(fields): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    backend.count("login");
    // OAuth2 form contract: credentials arrive as `username`/`password`.
    let username = fields.get("username").cloned().unwrap_or_default();
    let password = fields.get("password").cloned().unwrap_or_default();

    if username.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": "Field required: username"})),
        );
    }
    match password.as_str() {
        GOOD_PASSWORD => (
            StatusCode::OK,
            Json(json!({"access_token": VALID_TOKEN, "token_type": "bearer"})),
        ),
        ORPHAN_PASSWORD => (
            StatusCode::OK,
            Json(json!({"access_token": ORPHAN_TOKEN, "token_type": "bearer"})),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Invalid credentials"})),
        ),
    }
}

async fn me(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> impl IntoResponse {
    backend.count("me");
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", VALID_TOKEN))
        .unwrap_or(false);

    if authorized {
        (StatusCode::OK, Json(profile_json()))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Could not validate credentials"})),
        )
    }
}

async fn register(State(backend): State<Arc<Backend>>) -> impl IntoResponse {
    backend.count("register");
    (StatusCode::CREATED, Json(profile_json()))
}

async fn medicines(State(backend): State<Arc<Backend>>) -> impl IntoResponse {
    backend.count("medicines");
    Json(json!([
        {"id": 1, "sku": "MED001", "name": "Paracetamol 500mg", "category": "Pain Relief"},
        {"id": 2, "sku": "MED002", "name": "Azithromycin 500mg", "category": "Antibiotics"}
    ]))
}

async fn stock_levels(State(backend): State<Arc<Backend>>) -> impl IntoResponse {
    backend.count("stock-levels");
    Json(json!([
        {"medicine_id": 1, "sku": "MED001", "name": "Paracetamol 500mg",
         "category": "Pain Relief", "total_quantity": 120, "nearest_expiry": null}
    ]))
}

async fn dashboard_stats(State(backend): State<Arc<Backend>>) -> impl IntoResponse {
    backend.count("dashboard-stats");
    Json(json!({
        "total_stock_value": 45210.5, "total_skus": 128, "low_stock_count": 7,
        "expiring_soon_count": 4, "total_alerts": 11, "wastage_value": 890.0
    }))
}

async fn upload_excel(
    State(backend): State<Arc<Backend>>,
    _body: axum::body::Bytes,
) -> impl IntoResponse {
    backend.count("upload");
    Json(json!({
        "message": "Upload completed",
        "total_rows": 6,
        "success_count": 5,
        "error_count": 1,
        "errors": ["Row 4: invalid quantity"]
    }))
}

async fn unacknowledged(State(backend): State<Arc<Backend>>) -> impl IntoResponse {
    backend.count("unacknowledged");
    let alerts: Vec<serde_json::Value> = backend
        .alerts
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, _, acked)| !acked)
        .map(|(id, message, _)| {
            json!({
                "id": id, "alert_type": "low_stock", "message": message,
                "severity": "high", "is_acknowledged": false,
                "created_at": "2026-08-01T09:00:00Z"
            })
        })
        .collect();
    Json(alerts)
}

async fn acknowledge(
    State(backend): State<Arc<Backend>>,
    Path(alert_id): Path<i64>,
) -> impl IntoResponse {
    backend.count("acknowledge");
    let mut alerts = backend.alerts.lock().unwrap();
    match alerts.iter_mut().find(|(id, _, _)| *id == alert_id) {
        // Repeat acknowledge is a no-op success.
        Some((_, _, acked)) => {
            *acked = true;
            (StatusCode::OK, Json(json!({"message": "Alert acknowledged"})))
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Alert not found"})),
        ),
    }
}

async fn spawn_backend(backend: Arc<Backend>) -> SocketAddr {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/auth/register", post(register))
        .route("/api/inventory/medicines", get(medicines))
        .route("/api/inventory/stock-levels", get(stock_levels))
        .route("/api/inventory/upload-excel", post(upload_excel))
        .route("/api/dashboard/stats", get(dashboard_stats))
        .route("/api/alerts/unacknowledged", get(unacknowledged))
        .route("/api/alerts/:alert_id/acknowledge", post(acknowledge))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> PharmClient {
    let config = GatewayConfig {
        base_url: format!("http://{}", addr),
        ..Default::default()
    };
    PharmClient::new(config, Arc::new(MemoryTokenStore::new()))
}

// ---------------------------------------------------------------------------
// Session lifecycle

#[tokio::test]
async fn bad_login_stays_unauthenticated_and_persists_nothing() {
    let addr = spawn_backend(Arc::new(Backend::default())).await;
    let client = client_for(addr);
    let mut session = AuthSession::new(client.gateway());

    let err = session
        .login("admin@pharmacy.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(*session.state(), SessionState::Unauthenticated);
    assert_eq!(client.gateway().tokens().get(), None);
}

#[tokio::test]
async fn good_login_authenticates_after_profile_fetch() {
    let addr = spawn_backend(Arc::new(Backend::default())).await;
    let client = client_for(addr);
    let mut session = AuthSession::new(client.gateway());

    let profile = session
        .login("admin@pharmacy.com", GOOD_PASSWORD)
        .await
        .unwrap();

    assert_eq!(profile.email, "admin@pharmacy.com");
    assert!(session.is_authenticated());
    assert_eq!(
        client.gateway().tokens().get(),
        Some(VALID_TOKEN.to_string())
    );
}

#[tokio::test]
async fn failed_profile_fetch_after_login_discards_token() {
    let addr = spawn_backend(Arc::new(Backend::default())).await;
    let client = client_for(addr);
    let mut session = AuthSession::new(client.gateway());

    let err = session
        .login("admin@pharmacy.com", ORPHAN_PASSWORD)
        .await
        .unwrap_err();

    // No half-authenticated state: the orphan token is gone.
    assert_eq!(err.status(), Some(401));
    assert_eq!(*session.state(), SessionState::Unauthenticated);
    assert_eq!(client.gateway().tokens().get(), None);
}

#[tokio::test]
async fn initialize_restores_session_from_valid_token() {
    let addr = spawn_backend(Arc::new(Backend::default())).await;
    let client = client_for(addr);
    client.gateway().tokens().set(VALID_TOKEN);

    let mut session = AuthSession::new(client.gateway());
    assert_eq!(*session.state(), SessionState::Loading);

    session.initialize().await;
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn initialize_clears_rejected_token() {
    let addr = spawn_backend(Arc::new(Backend::default())).await;
    let client = client_for(addr);
    client.gateway().tokens().set("tok-stale");

    let mut session = AuthSession::new(client.gateway());
    session.initialize().await;

    assert_eq!(*session.state(), SessionState::Unauthenticated);
    assert_eq!(client.gateway().tokens().get(), None);
}

#[tokio::test]
async fn register_auto_logs_in() {
    let backend = Arc::new(Backend::default());
    let addr = spawn_backend(backend.clone()).await;
    let client = client_for(addr);
    let mut session = AuthSession::new(client.gateway());

    let user = NewUser {
        email: "admin@pharmacy.com".into(),
        password: GOOD_PASSWORD.into(),
        full_name: "Admin User".into(),
        role: None,
        phone: None,
    };
    session.register(&user).await.unwrap();

    assert!(session.is_authenticated());
    assert_eq!(backend.hits("register"), 1);
    assert_eq!(backend.hits("login"), 1);
}

#[tokio::test]
async fn logout_clears_token_and_state() {
    let addr = spawn_backend(Arc::new(Backend::default())).await;
    let client = client_for(addr);
    let mut session = AuthSession::new(client.gateway());
    session
        .login("admin@pharmacy.com", GOOD_PASSWORD)
        .await
        .unwrap();

    session.logout();

    assert_eq!(*session.state(), SessionState::Unauthenticated);
    assert_eq!(client.gateway().tokens().get(), None);
}

// ---------------------------------------------------------------------------
// Error propagation

#[tokio::test]
async fn mutation_failure_carries_server_detail() {
    let addr = spawn_backend(Arc::new(Backend::with_alerts())).await;
    let client = client_for(addr);

    let err = client.acknowledge_alert(999).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Alert not found");
}

#[tokio::test]
async fn unreachable_backend_surfaces_network_error() {
    // Nothing listens here.
    let config = GatewayConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    };
    let client = PharmClient::new(config, Arc::new(MemoryTokenStore::new()));

    let err = client.dashboard_stats().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

// ---------------------------------------------------------------------------
// Upload validation

#[tokio::test]
async fn bad_extension_upload_issues_zero_network_calls() {
    let backend = Arc::new(Backend::default());
    let addr = spawn_backend(backend.clone()).await;
    let client = client_for(addr);

    let err = client
        .upload_inventory("notes.pdf", b"%PDF-1.4".to_vec())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(backend.hits("upload"), 0);
}

#[tokio::test]
async fn oversize_upload_issues_zero_network_calls() {
    let backend = Arc::new(Backend::default());
    let addr = spawn_backend(backend.clone()).await;
    let client = client_for(addr);

    let contents = vec![0_u8; (MAX_UPLOAD_BYTES + 1) as usize];
    let err = client.upload_inventory("stock.xlsx", contents).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(backend.hits("upload"), 0);
}

// ---------------------------------------------------------------------------
// Cache behaviour

#[tokio::test]
async fn repeated_reads_reuse_cached_results() {
    let backend = Arc::new(Backend::default());
    let addr = spawn_backend(backend.clone()).await;
    let client = client_for(addr);

    let first = client.medicines(&MedicineFilter::default()).await.unwrap();
    let second = client.medicines(&MedicineFilter::default()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(backend.hits("medicines"), 1);

    // Different parameters are a different key and do hit the network.
    let filter = MedicineFilter {
        search: Some("para".into()),
        ..Default::default()
    };
    client.medicines(&filter).await.unwrap();
    assert_eq!(backend.hits("medicines"), 2);
}

#[tokio::test]
async fn successful_upload_invalidates_each_dependent_key_once() {
    let backend = Arc::new(Backend::default());
    let addr = spawn_backend(backend.clone()).await;
    let client = client_for(addr);

    // Prime all three dependent read queries.
    client.medicines(&MedicineFilter::default()).await.unwrap();
    client.stock_levels(false).await.unwrap();
    client.dashboard_stats().await.unwrap();
    assert_eq!(backend.hits("medicines"), 1);
    assert_eq!(backend.hits("stock-levels"), 1);
    assert_eq!(backend.hits("dashboard-stats"), 1);

    let report = client
        .upload_inventory("stock.xlsx", b"PK\x03\x04fake-xlsx".to_vec())
        .await
        .unwrap();
    assert_eq!(report.success_count, 5);

    use apikit::client::ops;
    for op in [ops::MEDICINES, ops::STOCK_LEVELS, ops::DASHBOARD_STATS] {
        assert_eq!(client.cache().invalidation_count(op), 1, "{} invalidations", op);
    }
    // Untouched keys stay untouched.
    assert_eq!(client.cache().invalidation_count(ops::ALERTS), 0);

    // Each invalidated query refetches exactly once.
    client.medicines(&MedicineFilter::default()).await.unwrap();
    client.stock_levels(false).await.unwrap();
    client.dashboard_stats().await.unwrap();
    assert_eq!(backend.hits("medicines"), 2);
    assert_eq!(backend.hits("stock-levels"), 2);
    assert_eq!(backend.hits("dashboard-stats"), 2);
}

// ---------------------------------------------------------------------------
// Alert acknowledgement

#[tokio::test]
async fn acknowledged_alert_leaves_unacknowledged_list() {
    let addr = spawn_backend(Arc::new(Backend::with_alerts())).await;
    let client = client_for(addr);

    let before = client.unacknowledged_alerts().await.unwrap();
    assert_eq!(before.len(), 2);

    client.acknowledge_alert(1).await.unwrap();

    let after = client.unacknowledged_alerts().await.unwrap();
    assert_eq!(after.len(), 1);
    assert!(after.iter().all(|alert| alert.id != 1));

    // Idempotent: a repeat acknowledge is a quiet no-op, nothing
    // reappears and nothing duplicates.
    client.acknowledge_alert(1).await.unwrap();
    let again = client.unacknowledged_alerts().await.unwrap();
    assert_eq!(again.len(), 1);
}

#[tokio::test]
async fn alert_filter_serializes_only_set_fields() {
    // Pure serialization check: None fields stay out of the query string.
    let filter = AlertFilter {
        severity: Some("high".into()),
        ..Default::default()
    };
    let query = serde_json::to_value(&filter).unwrap();
    assert_eq!(query, serde_json::json!({"severity": "high"}));
}

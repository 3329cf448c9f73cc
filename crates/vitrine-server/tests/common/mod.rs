use tokio::task::JoinHandle;

use vitrine_auth::password;
use vitrine_core::TeamAccount;
use vitrine_server::{AppConfig, build_app};
use vitrine_storage::DynStorage;

pub const ADMIN_EMAIL: &str = "admin@vitrine.store";
pub const ADMIN_PASSWORD: &str = "senha-admin";

pub fn test_config() -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.session.secret = "integration-test-secret-0123456789".into();
    cfg
}

/// Starts a server on an ephemeral port with a seeded admin account.
/// Returns the base URL, a shutdown sender and the join handle.
pub async fn start_server(
    cfg: AppConfig,
) -> (
    String,
    DynStorage,
    tokio::sync::oneshot::Sender<()>,
    JoinHandle<()>,
) {
    let storage = vitrine_db_memory::create_storage();
    let hash = password::hash(ADMIN_PASSWORD).expect("hash admin password");
    storage
        .create_team_account(TeamAccount::new(
            "Admin".into(),
            ADMIN_EMAIL.into(),
            hash,
            true,
        ))
        .await
        .expect("seed admin account");

    let app = build_app(&cfg, storage.clone());

    // Bind to an ephemeral port
    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
    });

    (format!("http://{addr}"), storage, tx, server)
}

/// A client that never follows redirects, so gate decisions stay visible.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Logs in as the seeded admin and returns the session cookie pair
/// (`vitrine_session=...`) for use in a `Cookie` header.
pub async fn login(base: &str, client: &reqwest::Client) -> String {
    let resp = client
        .post(format!("{base}/api/auth/login"))
        .json(&serde_json::json!({
            "email": ADMIN_EMAIL,
            "password": ADMIN_PASSWORD,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200, "login should succeed");
    let cookie = resp
        .headers()
        .get("set-cookie")
        .expect("login sets the session cookie")
        .to_str()
        .unwrap();
    cookie.split(';').next().unwrap().to_string()
}

mod common;

use common::{client, start_server, test_config};
use serde_json::Value;

#[tokio::test]
async fn server_endpoints_work() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();

    // GET /
    let resp = client.get(format!("{base}/")).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["service"], "Vitrine");
    assert_eq!(body["status"], "ok");

    // GET /healthz
    let resp = client.get(format!("{base}/healthz")).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    // GET /readyz
    let resp = client.get(format!("{base}/readyz")).send().await.unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ready");

    // Responses carry a request id.
    let resp = client.get(format!("{base}/healthz")).send().await.unwrap();
    assert!(resp.headers().get("x-request-id").is_some());

    // A supplied request id is mirrored back.
    let resp = client
        .get(format!("{base}/healthz"))
        .header("x-request-id", "test-req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers()["x-request-id"], "test-req-42");

    // GET /api/public/products (empty catalog)
    let resp = client
        .get(format!("{base}/api/public/products"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let body: Value = resp.json().await.unwrap();
    assert!(body.as_array().unwrap().is_empty());

    // Unknown public product → 404 with an error body.
    let resp = client
        .get(format!(
            "{base}/api/public/products/00000000-0000-0000-0000-000000000000"
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body.get("error").is_some());

    // shutdown
    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn team_crud_via_private_api() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();
    let cookie = common::login(&base, &client).await;

    // Create a second account.
    let resp = client
        .post(format!("{base}/api/private/team"))
        .header("cookie", &cookie)
        .json(&serde_json::json!({
            "name": "Bia",
            "email": "bia@vitrine.store",
            "password": "senha-da-bia",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["email"], "bia@vitrine.store");
    // The hash never leaves the server.
    assert!(created.get("passwordHash").is_none());

    // Duplicate email → 400.
    let resp = client
        .post(format!("{base}/api/private/team"))
        .header("cookie", &cookie)
        .json(&serde_json::json!({
            "name": "Bia 2",
            "email": "bia@vitrine.store",
            "password": "outra-senha",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Short password → 400.
    let resp = client
        .post(format!("{base}/api/private/team"))
        .header("cookie", &cookie)
        .json(&serde_json::json!({
            "name": "Carla",
            "email": "carla@vitrine.store",
            "password": "curta",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // The new account can log in.
    let resp = client
        .post(format!("{base}/api/auth/login"))
        .json(&serde_json::json!({
            "email": "bia@vitrine.store",
            "password": "senha-da-bia",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Wrong password does not.
    let resp = client
        .post(format!("{base}/api/auth/login"))
        .json(&serde_json::json!({
            "email": "bia@vitrine.store",
            "password": "senha-errada",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    // Delete it.
    let id = created["id"].as_str().unwrap();
    let resp = client
        .delete(format!("{base}/api/private/team/{id}"))
        .header("cookie", &cookie)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

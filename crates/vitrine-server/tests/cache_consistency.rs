//! Read-after-write consistency across the tag cache: a write followed by
//! a read of any endpoint cached under the touched tags must see the new
//! data within the same request cycle.

mod common;

use common::{client, login, start_server, test_config};
use serde_json::{Value, json};

#[tokio::test]
async fn social_media_write_refreshes_store_config() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();
    let cookie = login(&base, &client).await;

    // Warm both entries cached under the store-config tag.
    let resp = client
        .get(format!("{base}/api/public/store-config"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let before: Value = resp.json().await.unwrap();
    assert!(before["socialMedia"].as_array().unwrap().is_empty());
    let resp = client
        .get(format!("{base}/api/public/social-media"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Create an instagram link through the back office.
    let resp = client
        .post(format!("{base}/api/private/social-media"))
        .header("cookie", &cookie)
        .json(&json!({
            "platform": "instagram",
            "url": "https://instagram.com/vitrine",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    // Both cached reads must reflect the write immediately.
    let config: Value = client
        .get(format!("{base}/api/public/store-config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        config["socialMedia"][0]["url"],
        "https://instagram.com/vitrine"
    );
    let listing: Value = client
        .get(format!("{base}/api/public/social-media"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing[0]["platform"], "instagram");

    // Update the url and read again: the store-config tag was invalidated.
    let resp = client
        .patch(format!("{base}/api/private/social-media/{id}"))
        .header("cookie", &cookie)
        .json(&json!({ "url": "https://instagram.com/vitrine.oficial" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let config: Value = client
        .get(format!("{base}/api/public/store-config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        config["socialMedia"][0]["url"],
        "https://instagram.com/vitrine.oficial"
    );

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn duplicate_platform_answers_400_not_500() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();
    let cookie = login(&base, &client).await;

    let resp = client
        .post(format!("{base}/api/private/social-media"))
        .header("cookie", &cookie)
        .json(&json!({ "platform": "instagram", "url": "https://instagram.com/a" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // A second active record for the same platform.
    let resp = client
        .post(format!("{base}/api/private/social-media"))
        .header("cookie", &cookie)
        .json(&json!({ "platform": "instagram", "url": "https://instagram.com/b" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Esta plataforma já está cadastrada");

    // A PATCH steering another record onto the taken platform hits the
    // same guard.
    let resp = client
        .post(format!("{base}/api/private/social-media"))
        .header("cookie", &cookie)
        .json(&json!({ "platform": "facebook", "url": "https://facebook.com/a" }))
        .send()
        .await
        .unwrap();
    let facebook: Value = resp.json().await.unwrap();
    let resp = client
        .patch(format!(
            "{base}/api/private/social-media/{}",
            facebook["id"].as_str().unwrap()
        ))
        .header("cookie", &cookie)
        .json(&json!({ "platform": "instagram" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Esta plataforma já está cadastrada");

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn product_update_refreshes_cached_reads() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();
    let cookie = login(&base, &client).await;

    let resp = client
        .post(format!("{base}/api/private/products"))
        .header("cookie", &cookie)
        .json(&json!({
            "name": "Tênis Azul",
            "priceCents": 19990,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let product: Value = resp.json().await.unwrap();
    let id = product["id"].as_str().unwrap().to_string();
    assert_eq!(product["slug"], "tenis-azul");

    // Warm the listing, the id read and the slug read.
    let listing: Value = client
        .get(format!("{base}/api/public/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing[0]["priceCents"], 19990);
    let by_id: Value = client
        .get(format!("{base}/api/public/products/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_id["name"], "Tênis Azul");
    let by_slug = client
        .get(format!("{base}/api/public/products/slug/tenis-azul"))
        .send()
        .await
        .unwrap();
    assert_eq!(by_slug.status(), 200);

    // Write: price drop.
    let resp = client
        .patch(format!("{base}/api/private/products/{id}"))
        .header("cookie", &cookie)
        .json(&json!({ "priceCents": 14990 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // Every read cached under the product's tags sees the new price.
    let listing: Value = client
        .get(format!("{base}/api/public/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing[0]["priceCents"], 14990);
    let by_id: Value = client
        .get(format!("{base}/api/public/products/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_id["priceCents"], 14990);
    let by_slug: Value = client
        .get(format!("{base}/api/public/products/slug/tenis-azul"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_slug["priceCents"], 14990);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn slug_rename_sweeps_the_old_slug_entry() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();
    let cookie = login(&base, &client).await;

    let product: Value = client
        .post(format!("{base}/api/private/products"))
        .header("cookie", &cookie)
        .json(&json!({ "name": "Camisa Polo", "priceCents": 9990 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = product["id"].as_str().unwrap().to_string();

    // Warm the old slug entry.
    let resp = client
        .get(format!("{base}/api/public/products/slug/camisa-polo"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .patch(format!("{base}/api/private/products/{id}"))
        .header("cookie", &cookie)
        .json(&json!({ "slug": "camisa-polo-classica" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // The old slug no longer serves the product from cache.
    let resp = client
        .get(format!("{base}/api/public/products/slug/camisa-polo"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let resp = client
        .get(format!("{base}/api/public/products/slug/camisa-polo-classica"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn banner_create_refreshes_the_listing() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();
    let cookie = login(&base, &client).await;

    // Warm the empty listing.
    let listing: Value = client
        .get(format!("{base}/api/public/banners"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listing.as_array().unwrap().is_empty());

    let resp = client
        .post(format!("{base}/api/private/banners"))
        .header("cookie", &cookie)
        .json(&json!({
            "title": "Liquidação de Verão",
            "imageUrl": "/uploads/banners/verao.webp",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let listing: Value = client
        .get(format!("{base}/api/public/banners"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listing[0]["title"], "Liquidação de Verão");

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

#[tokio::test]
async fn store_config_update_is_immediately_visible() {
    let (base, _storage, shutdown_tx, handle) = start_server(test_config()).await;
    let client = client();
    let cookie = login(&base, &client).await;

    let config: Value = client
        .get(format!("{base}/api/public/store-config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(config["storeName"], "Vitrine");

    let resp = client
        .patch(format!("{base}/api/private/store-config"))
        .header("cookie", &cookie)
        .json(&json!({ "storeName": "Vitrine Outlet" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let config: Value = client
        .get(format!("{base}/api/public/store-config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(config["storeName"], "Vitrine Outlet");

    let _ = shutdown_tx.send(());
    let _ = handle.await;
}

use segpic::presentation::web::views::ImageView;

use crate::helpers::{
    catalog_record, spawn_app, spawn_app_with_catalog, spawn_app_with_corrupt_image,
};

async fn list(app: &crate::helpers::TestApp) -> Vec<ImageView> {
    let response = reqwest::Client::new()
        .get(app.api_url("/images"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    response.json().await.expect("Failed to parse response")
}

async fn toggle(app: &crate::helpers::TestApp, id: &str) -> reqwest::Response {
    reqwest::Client::new()
        .patch(app.api_url(&format!("/images/{id}")))
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn listing_images_returns_every_seeded_image_unflagged() {
    let app = spawn_app().await;

    let images = list(&app).await;

    assert_eq!(images.len(), 5);
    assert!(images.iter().all(|image| !image.flag));
}

#[tokio::test]
async fn listing_images_returns_display_sized_urls() {
    let app = spawn_app().await;

    let images = list(&app).await;
    let five = images.iter().find(|image| image.id == "5").unwrap();

    assert_eq!(five.author, "Author 5");
    assert_eq!(five.download_url, "https://picsum.photos/id/5/500/375");
}

#[tokio::test]
async fn listing_images_sets_json_content_type() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .get(app.api_url("/images"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
}

#[tokio::test]
async fn listing_images_with_trailing_slash_is_the_same_list() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .get(app.api_url("/images/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let images: Vec<ImageView> = response.json().await.expect("Failed to parse response");
    assert_eq!(images.len(), 5);
}

#[tokio::test]
async fn listing_an_empty_store_returns_an_empty_array() {
    let app = spawn_app_with_catalog(Vec::new()).await;

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn flagging_an_image_returns_the_flagged_view() {
    let app = spawn_app().await;

    let response = toggle(&app, "5").await;

    assert_eq!(response.status(), 200);
    let image: ImageView = response.json().await.expect("Failed to parse response");
    assert_eq!(image.id, "5");
    assert!(image.flag);
    assert_eq!(image.download_url, "https://picsum.photos/id/5/500/375");
}

#[tokio::test]
async fn flagging_an_image_only_changes_that_image() {
    let app = spawn_app().await;
    let before = list(&app).await;

    toggle(&app, "5").await;
    let after = list(&app).await;

    assert_eq!(after.len(), before.len());
    for image in &after {
        let original = before.iter().find(|b| b.id == image.id).unwrap();
        if image.id == "5" {
            assert!(image.flag);
        } else {
            assert_eq!(image, original);
        }
    }
}

#[tokio::test]
async fn flagging_twice_unflags_the_image() {
    let app = spawn_app().await;

    toggle(&app, "3").await;
    let response = toggle(&app, "3").await;

    let image: ImageView = response.json().await.expect("Failed to parse response");
    assert!(!image.flag);
    assert!(list(&app).await.iter().all(|image| !image.flag));
}

#[tokio::test]
async fn flagging_an_unknown_image_returns_a_422() {
    let app = spawn_app().await;

    let response = toggle(&app, "does-not-exist").await;

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Unprocessable Entity");
    assert_eq!(list(&app).await.len(), 5);
}

#[tokio::test]
async fn flagging_without_an_id_returns_a_422() {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .patch(app.api_url("/images/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn flagging_a_blank_id_returns_a_422() {
    let app = spawn_app().await;

    let response = toggle(&app, "%20%20").await;

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn ids_with_reserved_characters_round_trip() {
    let app = spawn_app_with_catalog(vec![catalog_record("a b", 100, 50)]).await;

    let response = toggle(&app, "a%20b").await;

    assert_eq!(response.status(), 200);
    let image: ImageView = response.json().await.expect("Failed to parse response");
    assert_eq!(image.id, "a b");
    assert!(image.flag);
}

#[tokio::test]
async fn ids_are_toggled_exactly_as_given() {
    let app = spawn_app_with_catalog(vec![
        catalog_record(" x", 100, 50),
        catalog_record("x", 100, 50),
    ])
    .await;

    let response = toggle(&app, "%20x").await;

    assert_eq!(response.status(), 200);
    let image: ImageView = response.json().await.expect("Failed to parse response");
    assert_eq!(image.id, " x");
    assert!(image.flag);

    let images = list(&app).await;
    let padded = images.iter().find(|image| image.id == " x").unwrap();
    let plain = images.iter().find(|image| image.id == "x").unwrap();
    assert!(padded.flag);
    assert!(!plain.flag);
}

#[tokio::test]
async fn listing_a_corrupt_store_returns_a_404() {
    let app = spawn_app_with_corrupt_image("bad").await;

    let response = reqwest::Client::new()
        .get(app.api_url("/images"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
    assert_eq!(
        response.headers()["content-type"],
        "application/json; charset=utf-8"
    );
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn flagging_a_corrupt_image_returns_a_422() {
    let app = spawn_app_with_corrupt_image("bad").await;

    let response = toggle(&app, "bad").await;

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Unprocessable Entity");

    let response = toggle(&app, "5").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn concurrent_toggles_of_one_image_do_not_lose_updates() {
    let app = spawn_app().await;

    let requests = (0..10).map(|_| toggle(&app, "1"));
    let responses = futures::future::join_all(requests).await;

    assert!(responses.iter().all(|response| response.status() == 200));
    let images = list(&app).await;
    let one = images.iter().find(|image| image.id == "1").unwrap();
    assert!(!one.flag, "an even number of toggles must leave the flag unset");
}

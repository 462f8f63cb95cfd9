use crate::helpers::{APP_JS, INDEX_HTML, spawn_app};

#[tokio::test]
async fn root_serves_the_frontend_index() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn existing_assets_are_served_as_is() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/app.js"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), APP_JS);
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_index() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/gallery/5"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let app = spawn_app().await;

    let response = reqwest::get(app.page_url("/"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}

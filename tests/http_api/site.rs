use serde_json::Value;

use crate::support::start_server;

#[tokio::test]
async fn health_reports_counts() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["projects"], 6);
    assert_eq!(body["skills"], 12);
    assert_eq!(body["contactMessages"], 0);
}

#[tokio::test]
async fn profile_uses_defaults() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/api/profile")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "John Anderson");
    assert_eq!(body["title"], "Full Stack Developer");
    assert_eq!(body["contact"]["location"], "San Francisco, CA");
    assert_eq!(body["stats"]["projects"], "50+");
    assert_eq!(body["social"]["github"], "#");
}

#[tokio::test]
async fn placeholder_image_matches_seed_urls() {
    let server = start_server().await;

    let resp = server
        .client
        .get(server.url("/api/placeholder/600/400"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["content-type"], "image/svg+xml");

    let svg = resp.text().await.unwrap();
    assert!(svg.contains(r#"width="600""#));
    assert!(svg.contains(r#"height="400""#));
}

#[tokio::test]
async fn placeholder_rejects_bad_dimensions() {
    let server = start_server().await;

    for path in ["/api/placeholder/0/400", "/api/placeholder/600/99999", "/api/placeholder/wide/400"] {
        let resp = server.client.get(server.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), 400, "{path}");
        let body: Value = resp.json().await.unwrap();
        assert!(body["message"].as_str().unwrap().starts_with("Placeholder dimensions"));
    }
}

#[tokio::test]
async fn unknown_route_is_404() {
    let server = start_server().await;
    let resp = server.client.get(server.url("/api/nope")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

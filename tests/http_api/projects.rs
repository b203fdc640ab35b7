use portfolio::Storage;
use serde_json::Value;

use crate::support::start_server;

#[tokio::test]
async fn list_projects_returns_seed() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/api/projects")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 6);
    assert_eq!(body[0]["id"], 1);
    assert_eq!(body[0]["title"], "E-Commerce Platform");
    assert_eq!(body[0]["category"], "laravel");
    assert_eq!(body[0]["imageUrl"], "/api/placeholder/600/400");
    assert_eq!(body[0]["featured"], true);
    assert_eq!(body[5]["id"], 6);
    assert_eq!(body[5]["title"], "Analytics Dashboard");
}

#[tokio::test]
async fn get_single_project() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/api/projects/5")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Real Estate Platform");
    assert_eq!(body["technologies"], serde_json::json!(["Laravel", "React", "Maps API"]));
}

#[tokio::test]
async fn unknown_project_is_404() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/api/projects/9999")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Project not found" }));
}

#[tokio::test]
async fn non_numeric_project_id_is_400() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/api/projects/abc")).send().await.unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid project id");
}

#[tokio::test]
async fn list_skills_returns_seed() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/api/skills")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(body.len(), 12);
    assert_eq!(
        body[0],
        serde_json::json!({ "id": 1, "name": "Laravel", "category": "backend", "level": 95 })
    );
    assert_eq!(
        body[11],
        serde_json::json!({ "id": 12, "name": "AWS", "category": "tools", "level": 75 })
    );
}

#[tokio::test]
async fn projects_created_in_store_show_up_over_http() {
    let server = start_server().await;
    server
        .store
        .create_project(portfolio::NewProject::new(
            "Late Addition",
            "Added after startup.",
            portfolio::ProjectCategory::React,
            ["React"],
        ))
        .unwrap();

    let body: Vec<Value> = server
        .client
        .get(server.url("/api/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.len(), 7);
    assert_eq!(body[6]["id"], 7);
    assert_eq!(body[6]["demoUrl"], Value::Null);
}

//! Full route table over the in-memory gateway loaded from the demo seed.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;

use crate::config::SiteProfile;
use crate::gateway::adapter::outgoing::RowGatewayMemory;
use crate::init_routes;
use crate::shared::assets::AssetResolver;
use crate::tests::support::seed_fixture;
use crate::AppState;

fn seeded_state() -> AppState {
    let gateway = RowGatewayMemory::from_seed(seed_fixture()).unwrap();
    AppState::from_gateway(
        Arc::new(gateway),
        SiteProfile::default(),
        AssetResolver::new(Some("https://cdn.example.com/".to_string())),
    )
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(init_routes),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn test_home_page_from_seed() {
    let (status, body) = get_json(seeded_state(), "/").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["hero"]["title"], "Jane Doe");
    assert_eq!(
        data["hero"]["background_url"],
        "https://cdn.example.com/images/hero.jpg"
    );
    assert_eq!(data["about"]["avatar_url"], Value::Null);

    let skills = data["skills"]["items"].as_array().unwrap();
    assert_eq!(skills[0]["name"], "Rust");

    // featured, not archived, newest first
    let projects = data["projects"]["items"].as_array().unwrap();
    let ids: Vec<&str> = projects.iter().map(|p| p["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["p2", "p1"]);
    assert_eq!(projects[0]["summary"], "No summary available.");
    assert_eq!(projects[0]["cover_url"], "https://placehold.co/400x300");

    let posts = data["blog"]["items"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["id"], "b2");
}

#[actix_web::test]
async fn test_project_page_from_seed() {
    let (status, body) = get_json(seeded_state(), "/projects/p1").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["title"], "Link Shortener");
    assert_eq!(data["cover_url"], "https://img.example.com/shortener.png");
    assert_eq!(data["links"].as_array().unwrap().len(), 2);
    assert_eq!(
        data["screenshots"][0],
        "https://cdn.example.com/images/shortener-1.png"
    );
}

#[actix_web::test]
async fn test_project_without_details_is_not_found() {
    let (status, body) = get_json(seeded_state(), "/projects/p3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");

    let (status, _) = get_json(seeded_state(), "/projects/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_past_projects_from_seed() {
    let (status, body) = get_json(seeded_state(), "/past-projects?active=pp1").await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["nav"][0]["id"], "pp2");
    assert_eq!(data["nav"][1]["active"], true);

    let project = &data["content"]["project"];
    assert_eq!(project["title"], "Weather Widget");
    assert!(project["screenshots"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_empty_gateway_serves_placeholders() {
    let gateway = crate::content::domain::sections::Collection::table_names()
        .fold(RowGatewayMemory::new(), |g, name| g.with_collection(name, vec![]));
    let state = AppState::from_gateway(
        Arc::new(gateway),
        SiteProfile::default(),
        AssetResolver::default(),
    );

    let (status, body) = get_json(state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["hero"]["title"], "Your Title");
    assert_eq!(
        body["data"]["projects"]["empty_text"],
        "No projects yet. Add some to your database!"
    );
}

#[actix_web::test]
async fn test_health_routes_are_registered() {
    let (status, body) = get_json(seeded_state(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "not_configured");
}

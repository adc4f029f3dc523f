//! REST API tests driving the full router in-process

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn app() -> Router {
    common::sqlite_module().await.router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn hop_body() -> Value {
    json!({
        "name": "The Musical Hop",
        "city": "San Francisco",
        "state": "CA",
        "address": "1015 Folsom Street",
        "phone": "123-123-1234",
        "genres": ["Jazz", "Reggae", "Swing", "Classical", "Folk"],
        "website_link": "https://www.themusicalhop.com"
    })
}

#[tokio::test]
async fn test_index_lists_sections() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["links"], json!(["/venues", "/artists", "/shows"]));
}

#[tokio::test]
async fn test_create_venue_returns_created_with_message() {
    let app = app().await;
    let (status, body) = send(&app, Method::POST, "/venues/create", Some(hop_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Venue The Musical Hop was successfully listed!");
    let id = body["id"].as_i64().unwrap();

    let (status, venue) = send(&app, Method::GET, &format!("/venues/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(venue["name"], "The Musical Hop");
    assert_eq!(venue["genres"][1], "Reggae");
    assert_eq!(venue["past_shows_count"], 0);
    assert_eq!(venue["upcoming_shows"], json!([]));
}

#[tokio::test]
async fn test_create_venue_without_name_is_bad_request() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/venues/create",
        Some(json!({ "city": "San Francisco", "state": "CA" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (_, areas) = send(&app, Method::GET, "/venues", None).await;
    assert_eq!(areas["areas"], json!([]));
}

#[tokio::test]
async fn test_unknown_venue_is_not_found_problem() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/venues/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Venue Not Found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_venue_listing_and_search() {
    let app = app().await;
    send(&app, Method::POST, "/venues/create", Some(hop_body())).await;
    send(
        &app,
        Method::POST,
        "/venues/create",
        Some(json!({
            "name": "The Dueling Pianos Bar",
            "city": "New York",
            "state": "NY"
        })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/venues", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["areas"][0]["city"], "San Francisco");
    assert_eq!(body["areas"][1]["venues"][0]["name"], "The Dueling Pianos Bar");

    let (status, found) = send(
        &app,
        Method::POST,
        "/venues/search",
        Some(json!({ "search_term": "hop" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["count"], 1);
    assert_eq!(found["search_term"], "hop");
    assert_eq!(found["results"][0]["name"], "The Musical Hop");
}

#[tokio::test]
async fn test_edit_venue_redirects_to_detail() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/venues/create", Some(hop_body())).await;
    let id = created["id"].as_i64().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/venues/{id}/edit"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "phone": "555-111-2222" }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/venues/{id}").as_str()
    );

    let (_, editor) = send(&app, Method::GET, &format!("/venues/{id}/edit"), None).await;
    assert_eq!(editor["phone"], "555-111-2222");
    assert_eq!(editor["website_link"], "https://www.themusicalhop.com");
}

#[tokio::test]
async fn test_edit_with_null_clears_and_absent_keeps() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/venues/create", Some(hop_body())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/venues/{id}/edit"),
        Some(json!({ "phone": null })),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, editor) = send(&app, Method::GET, &format!("/venues/{id}/edit"), None).await;
    assert_eq!(editor["phone"], Value::Null);
    assert_eq!(editor["address"], "1015 Folsom Street");

    let (_, artist) = send(
        &app,
        Method::POST,
        "/artists/create",
        Some(json!({
            "name": "Matt Quevedo",
            "city": "New York",
            "state": "NY",
            "phone": "300-400-5000",
            "facebook_link": "https://www.facebook.com/mattquevedo"
        })),
    )
    .await;
    let artist_id = artist["id"].as_i64().unwrap();

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/artists/{artist_id}/edit"),
        Some(json!({ "facebook_link": null, "city": "Brooklyn" })),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, editor) = send(&app, Method::GET, &format!("/artists/{artist_id}/edit"), None).await;
    assert_eq!(editor["facebook_link"], Value::Null);
    assert_eq!(editor["phone"], "300-400-5000");
    assert_eq!(editor["city"], "Brooklyn");
}

#[tokio::test]
async fn test_delete_venue_returns_no_content() {
    let app = app().await;
    let (_, created) = send(&app, Method::POST, "/venues/create", Some(hop_body())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/venues/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &format!("/venues/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_show_booking_flow() {
    let app = app().await;
    let (_, venue) = send(&app, Method::POST, "/venues/create", Some(hop_body())).await;
    let (status, artist) = send(
        &app,
        Method::POST,
        "/artists/create",
        Some(json!({
            "name": "Guns N Petals",
            "city": "San Francisco",
            "state": "CA",
            "genres": ["Rock n Roll"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(artist["message"], "Artist Guns N Petals was successfully listed!");

    let (status, show) = send(
        &app,
        Method::POST,
        "/shows/create",
        Some(json!({
            "artist_id": artist["id"],
            "venue_id": venue["id"],
            "start_time": "2019-05-21T21:30:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(show["message"], "Show was successfully listed!");

    let (status, shows) = send(&app, Method::GET, "/shows", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shows["total"], 1);
    assert_eq!(shows["shows"][0]["artist_name"], "Guns N Petals");
    assert_eq!(shows["shows"][0]["venue_name"], "The Musical Hop");

    let artist_id = artist["id"].as_i64().unwrap();
    let (_, detail) = send(&app, Method::GET, &format!("/artists/{artist_id}"), None).await;
    assert_eq!(detail["past_shows_count"], 1);
    assert_eq!(detail["past_shows"][0]["venue_name"], "The Musical Hop");
}

#[tokio::test]
async fn test_show_with_unknown_artist_is_listing_failure() {
    let app = app().await;
    let (_, venue) = send(&app, Method::POST, "/venues/create", Some(hop_body())).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/shows/create",
        Some(json!({
            "artist_id": 4242,
            "venue_id": venue["id"],
            "start_time": "2030-01-01 20:00"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "An error occurred. Show could not be listed.");
}

#[tokio::test]
async fn test_show_with_bad_start_time_is_bad_request() {
    let app = app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/shows/create",
        Some(json!({ "artist_id": 1, "venue_id": 1, "start_time": "next tuesday" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/festivals", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["title"], "Not Found");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;
    let (status, doc) = send(&app, Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["components"]["schemas"]["VenueDetailDto"].is_object());
}

#[tokio::test]
async fn test_non_integer_ids_are_not_found() {
    let app = app().await;

    for uri in ["/venues/abc", "/artists/abc", "/venues/1.5/edit", "/artists/abc/edit"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["status"], 404, "{uri}");
        assert_eq!(body["title"], "Not Found", "{uri}");
    }

    let (status, _) = send(&app, Method::DELETE, "/venues/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_bodies_are_problem_details() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/venues/create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": \"The Musical Hop\","))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 400);
    assert_eq!(body["title"], "Invalid Request Body");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/artists/search")
        .body(Body::from("{\"search_term\": \"sax\"}"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], 415);

    let (status, body) = send(
        &app,
        Method::POST,
        "/shows/create",
        Some(json!({ "artist_id": "one", "venue_id": 1, "start_time": "2030-01-01 20:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
}

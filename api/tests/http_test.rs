use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use api::{app_routes, AppState};
use db::DbRepo;

fn app() -> Router {
    app_routes(AppState::new(Arc::new(DbRepo::in_memory())))
}

/// fire one request against a clone of the router; the state is shared,
/// so earlier requests stay visible
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn arrival() -> Value {
    json!({
        "name": "Arrival",
        "description": "Aliens arrive",
        "releaseDate": "2016-11-10",
        "duration": 116,
        "mpa": {"id": 3},
        "genres": [{"id": 2}]
    })
}

fn amy() -> Value {
    json!({
        "email": "a@b.com",
        "login": "amy",
        "birthday": "1990-04-02"
    })
}

#[tokio::test]
async fn genre_reference_data_is_served() {
    let app = app();

    let (status, body) = send(&app, "GET", "/genres", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[0], json!({"id": 1, "name": "Комедия"}));

    let (status, body) = send(&app, "GET", "/genres/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Драма");

    let (status, body) = send(&app, "GET", "/genres/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn mpa_reference_data_is_served() {
    let app = app();

    let (status, body) = send(&app, "GET", "/mpa", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);

    let (status, body) = send(&app, "GET", "/mpa/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 3, "name": "PG-13"}));
}

#[tokio::test]
async fn film_create_returns_the_enriched_aggregate() {
    let app = app();

    let (status, body) = send(&app, "POST", "/films", Some(arrival())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["mpa"], json!({"id": 3, "name": "PG-13"}));
    assert_eq!(body["genres"][0], json!({"id": 2, "name": "Драма"}));

    let (status, body) = send(&app, "GET", "/films/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Arrival");

    let (status, body) = send(&app, "GET", "/films", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_film_fails_with_the_validation_category() {
    let app = app();

    let mut blank_name = arrival();
    blank_name["name"] = json!("   ");
    let (status, body) = send(&app, "POST", "/films", Some(blank_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");

    let mut early = arrival();
    early["releaseDate"] = json!("1895-12-27");
    let (status, _) = send(&app, "POST", "/films", Some(early)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_mpa = arrival();
    bad_mpa["mpa"] = json!({"id": 42});
    let (status, body) = send(&app, "POST", "/films", Some(bad_mpa)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn malformed_body_maps_to_the_fixed_message() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/films")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Validation error");
    assert_eq!(body["message"], "request body is missing or malformed");

    // an empty body gets the same treatment
    let (status, body) = send(&app, "POST", "/films", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "request body is missing or malformed");
}

#[tokio::test]
async fn non_numeric_path_id_is_a_client_error() {
    let app = app();
    let (status, body) = send(&app, "GET", "/films/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn missing_film_is_a_404_with_the_error_body() {
    let app = app();
    let (status, body) = send(&app, "GET", "/films/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
    assert!(body["message"].as_str().unwrap().contains("77"));
}

#[tokio::test]
async fn like_flow_drives_the_popular_ranking() {
    let app = app();

    send(&app, "POST", "/films", Some(arrival())).await;
    let mut second = arrival();
    second["name"] = json!("Sicario");
    send(&app, "POST", "/films", Some(second)).await;
    send(&app, "POST", "/users", Some(amy())).await;

    let (status, _) = send(&app, "PUT", "/films/2/like/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/films/popular?count=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let top = body.as_array().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["name"], "Sicario");

    // unliking restores the id-ordered tie-break
    let (status, _) = send(&app, "DELETE", "/films/2/like/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/films/popular", None).await;
    assert_eq!(body[0]["name"], "Arrival");

    // liking through a missing user is a 404
    let (status, _) = send(&app, "PUT", "/films/1/like/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn popular_count_must_be_positive() {
    let app = app();
    let (status, body) = send(&app, "GET", "/films/popular?count=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn duplicate_email_is_reported_as_duplicated_data() {
    let app = app();

    let (status, _) = send(&app, "POST", "/users", Some(amy())).await;
    assert_eq!(status, StatusCode::OK);

    let mut copycat = amy();
    copycat["login"] = json!("copycat");
    let (status, body) = send(&app, "POST", "/users", Some(copycat)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Duplicated data");
}

#[tokio::test]
async fn user_crud_round_trip() {
    let app = app();

    let (status, body) = send(&app, "POST", "/users", Some(amy())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    // blank name defaulted to the login
    assert_eq!(body["name"], "amy");

    let patch = json!({"id": 1, "name": "Amy Adams"});
    let (status, body) = send(&app, "PUT", "/users", Some(patch)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Amy Adams");
    assert_eq!(body["email"], "a@b.com");

    let (status, _) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn friendship_endpoints_cover_the_whole_workflow() {
    let app = app();

    send(&app, "POST", "/users", Some(amy())).await;
    let bob = json!({"email": "b@b.com", "login": "bob", "birthday": "1988-01-15"});
    send(&app, "POST", "/users", Some(bob)).await;
    let eve = json!({"email": "e@b.com", "login": "eve", "birthday": "1992-07-21"});
    send(&app, "POST", "/users", Some(eve)).await;

    // amy -> eve, bob -> eve
    let (status, _) = send(&app, "PUT", "/users/1/friends/3", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "PUT", "/users/2/friends/3", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/users/1/friends", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["login"], "eve");

    let (status, body) = send(&app, "GET", "/users/1/friends/common/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["login"], "eve");

    // re-adding the edge is a validation error
    let (status, body) = send(&app, "PUT", "/users/1/friends/3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");

    // confirm, then drop the edge
    let (status, _) = send(&app, "PUT", "/users/1/friends/3/confirm", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", "/users/1/friends/3", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/users/1/friends", None).await;
    assert!(body.as_array().unwrap().is_empty());

    // friend endpoints 404 on a missing user
    let (status, _) = send(&app, "PUT", "/users/1/friends/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

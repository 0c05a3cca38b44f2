use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use car_http::{CarHandlers, CarServices};
use car_models::Car;
use serde_json::{Value, json};
use test_utils::*;
use tower::ServiceExt;

fn setup_test_app() -> (Router, CarServices) {
    let services = CarServices::new(fresh_store());
    let app = CarHandlers::routes().with_state(services.clone());
    (app, services)
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn corolla_json() -> Value { serde_json::to_value(sample_payload()).unwrap() }

#[tokio::test]
async fn test_add_car_endpoint() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(json_request(Method::POST, "/cars", &corolla_json()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let car: Car = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(car.id, 1);
    assert_eq!(car.owner, "Alice");
    assert_eq!(car.updated_at, None);
}

#[tokio::test]
async fn test_add_car_invalid_payload() {
    let (app, services) = setup_test_app();
    let mut body = corolla_json();
    body["color"] = json!("");

    let response = app
        .oneshot(json_request(Method::POST, "/cars", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "INVALID_CAR_PAYLOAD");
    assert!(services.store().is_empty().await);
}

#[tokio::test]
async fn test_get_car_endpoint() {
    let (app, services) = setup_test_app();
    let created = services.add_car(sample_payload()).await.unwrap();

    let response = app
        .oneshot(empty_request(Method::GET, &format!("/cars/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let car: Car = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(car, created);
}

#[tokio::test]
async fn test_get_car_not_found() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(empty_request(Method::GET, "/cars/12"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "CAR_NOT_FOUND");
    assert!(
        error["error"]["message"]
            .as_str()
            .unwrap()
            .contains("12")
    );
}

#[tokio::test]
async fn test_update_car_endpoint() {
    let (app, services) = setup_test_app();
    let created = services.add_car(sample_payload()).await.unwrap();
    let mut body = corolla_json();
    body["is_booked"] = json!(true);

    let response = app
        .oneshot(json_request(
            Method::PUT,
            &format!("/cars/{}", created.id),
            &body,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let car: Car = serde_json::from_value(body_json(response).await).unwrap();
    assert!(car.is_booked);
    assert!(car.updated_at.unwrap() >= car.created_at);
}

#[tokio::test]
async fn test_update_missing_car() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(json_request(Method::PUT, "/cars/3", &corolla_json()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_car_endpoint() {
    let (app, services) = setup_test_app();
    let created = services.add_car(sample_payload()).await.unwrap();
    let uri = format!("/cars/{}", created.id);

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Car =
        serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(deleted, created);

    let response = app
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_is_booked_endpoint() {
    let (app, services) = setup_test_app();
    let created = services.add_car(other_payload()).await.unwrap();

    let response = app
        .oneshot(empty_request(
            Method::GET,
            &format!("/cars/{}/booked", created.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": created.id, "is_booked": true})
    );
}

#[tokio::test]
async fn test_list_cars_endpoint() {
    let (app, services) = setup_test_app();
    services.add_car(sample_payload()).await.unwrap();
    services.add_car(other_payload()).await.unwrap();

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/cars"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = app
        .oneshot(empty_request(Method::GET, "/cars?booked=true"))
        .await
        .unwrap();
    let booked = body_json(response).await;
    assert_eq!(booked.as_array().unwrap().len(), 1);
    assert_eq!(booked[0]["make"], "Honda");
}

#[tokio::test]
async fn test_invalid_id_path() {
    let (app, _) = setup_test_app();

    for (method, uri) in [
        (Method::GET, "/cars/not-a-number"),
        (Method::DELETE, "/cars/-4"),
        (Method::GET, "/cars/abc/booked"),
    ] {
        let response = app
            .clone()
            .oneshot(empty_request(method, uri))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let error = body_json(response).await;
        assert_eq!(error["error"]["code"], "INVALID_CAR_ID", "{uri}");
        assert!(error["error"]["details"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn test_update_with_invalid_id_checks_id_first() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(json_request(Method::PUT, "/cars/abc", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "INVALID_CAR_ID");
}

#[tokio::test]
async fn test_payload_missing_is_booked() {
    let (app, services) = setup_test_app();
    let mut body = corolla_json();
    body.as_object_mut().unwrap().remove("is_booked");

    let response = app
        .oneshot(json_request(Method::POST, "/cars", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "INVALID_CAR_PAYLOAD");
    assert!(
        error["error"]["details"]
            .as_str()
            .unwrap()
            .contains("is_booked")
    );
    assert!(services.store().is_empty().await);
}

#[tokio::test]
async fn test_update_with_malformed_body() {
    let (app, services) = setup_test_app();
    let created = services.add_car(sample_payload()).await.unwrap();

    let request = Request::builder()
        .method(Method::PUT)
        .uri(format!("/cars/{}", created.id))
        .header("content-type", "application/json")
        .body(Body::from("{\"make\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["error"]["code"],
        "INVALID_CAR_PAYLOAD"
    );
    assert_eq!(services.get_car(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_list_cars_invalid_filter() {
    let (app, _) = setup_test_app();

    let response = app
        .oneshot(empty_request(Method::GET, "/cars?booked=maybe"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"]["code"],
        "INVALID_QUERY_PARAMS"
    );
}

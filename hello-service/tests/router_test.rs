use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use hello_service::handlers::GREETING;
use hello_service::startup::build_router;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

async fn send(method: Method, uri: &str) -> Response {
    build_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn get_root_serves_greeting_as_html() {
    let response = send(Method::GET, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert_eq!(body_bytes(response).await, GREETING.as_bytes());
}

#[tokio::test]
async fn get_root_with_query_string_still_matches() {
    let response = send(Method::GET, "/?utm_source=probe").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, GREETING.as_bytes());
}

#[tokio::test]
async fn head_root_is_served() {
    let response = send(Method::HEAD, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn other_methods_on_root_are_not_found() {
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = send(method.clone(), "/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} /");
    }
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    for path in ["/nonexistent", "/index.html", "/health", "/a/b/c"] {
        let response = send(Method::GET, path).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {path}");

        let body: serde_json::Value =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"], format!("no route for GET {path}"));
    }
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    for uri in ["/", "/nonexistent"] {
        let response = send(Method::GET, uri).await;
        let headers = response.headers();
        assert!(headers.contains_key("x-request-id"));
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    }
}

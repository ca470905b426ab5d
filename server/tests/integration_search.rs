use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use search_core::{IndexBuilder, NoiseWords};
use serde_json::Value;
use tower::ServiceExt;

fn tiny_app() -> Router {
    let noise: NoiseWords = ["hello".to_string()].into_iter().collect();
    let mut builder = IndexBuilder::new(noise);
    builder
        .add_text("D1", "Deep deep world.")
        .add_text("D2", "Hello world world world!");
    server::build_app(builder.finish())
}

async fn call(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn search_returns_ranked_results() {
    let (status, body) = call(tiny_app(), "/search?kw1=Deep&kw2=world").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["kw1"], "deep");
    assert_eq!(json["total_hits"], 2);
    let arr = json["results"].as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["document"], "D1");
    assert_eq!(arr[0]["frequency"], 3);
    assert_eq!(arr[1]["document"], "D2");
}

#[tokio::test]
async fn search_with_noise_words_only_is_empty() {
    let (status, body) = call(tiny_app(), "/search?kw1=hello&kw2=w0rld").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["kw1"], Value::Null);
    assert_eq!(json["total_hits"], 0);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn keyword_lists_occurrences_or_404() {
    let (status, body) = call(tiny_app(), "/keyword/world").await;
    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["occurrences"][0]["document"], "D2");
    assert_eq!(json["occurrences"][1]["document"], "D1");

    let (status, _) = call(tiny_app(), "/keyword/absent").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(tiny_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
}

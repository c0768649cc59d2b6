use std::fs;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use reqwest::Url;
use roster::fetch::{DirFetcher, FetchError, HttpFetcher, JsonFetcher};
use tokio::net::TcpListener;

#[tokio::test]
async fn dir_fetcher_reads_parses_and_maps_missing_to_404() {
    let site = tempfile::tempdir().expect("tempdir");
    let students = site.path().join("data/students");
    fs::create_dir_all(&students).expect("mkdir");
    fs::write(students.join("index.json"), r#"["a.json"]"#).expect("write");
    fs::write(students.join("broken.json"), "{oops").expect("write");

    let fetcher = DirFetcher::new(site.path());

    let manifest = fetcher
        .fetch_json("data/students/index.json")
        .await
        .expect("manifest");
    assert_eq!(manifest, serde_json::json!(["a.json"]));

    let err = fetcher
        .fetch_json("data/students/a.json")
        .await
        .expect_err("missing");
    assert_eq!(err.status(), Some(404));

    let err = fetcher
        .fetch_json("data/students/broken.json")
        .await
        .expect_err("malformed");
    assert!(matches!(err, FetchError::Parse { .. }));

    let err = fetcher
        .fetch_json("data/students/../../../etc/passwd")
        .await
        .expect_err("traversal");
    assert_eq!(err.status(), Some(403));
}

async fn spawn_site() -> Url {
    let app = Router::new()
        .route(
            "/site/data/students/index.json",
            get(|| async { r#"["alice.json"]"# }),
        )
        .route(
            "/site/data/students/down.json",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        )
        .route(
            "/site/data/students/html.json",
            get(|| async { "<html>not json</html>" }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Url::parse(&format!("http://{addr}/site")).expect("url")
}

#[tokio::test]
async fn http_fetcher_enforces_success_status_and_json_body() {
    let fetcher = HttpFetcher::new(spawn_site().await);

    let manifest = fetcher
        .fetch_json("data/students/index.json")
        .await
        .expect("manifest");
    assert_eq!(manifest, serde_json::json!(["alice.json"]));

    let err = fetcher
        .fetch_json("data/students/down.json")
        .await
        .expect_err("503");
    assert_eq!(err.status(), Some(503));

    let err = fetcher
        .fetch_json("data/students/html.json")
        .await
        .expect_err("not json");
    assert!(matches!(err, FetchError::Parse { .. }));

    let err = fetcher
        .fetch_json("data/students/missing.json")
        .await
        .expect_err("404");
    assert_eq!(err.status(), Some(404));
}

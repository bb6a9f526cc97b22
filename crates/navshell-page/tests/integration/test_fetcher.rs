//! HTTP fetcher integration tests

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use navshell_core::domain::PageUrl;
use navshell_core::ports::{FetchError, IPageFetcher};
use navshell_page::HttpPageFetcher;

use crate::common::{setup_page_mock, DASHBOARD_PAGE};

fn url(s: &str) -> PageUrl {
    PageUrl::new(s).expect("test url")
}

#[tokio::test]
async fn fetch_returns_document_text() {
    let (_server, fetcher) = setup_page_mock("/dashboard.html", DASHBOARD_PAGE).await;

    let body = fetcher.fetch(&url("dashboard.html")).await.expect("fetch");
    assert!(body.contains("main-content"));
    assert!(body.contains("42 widgets"));
}

#[tokio::test]
async fn fetch_sends_no_store_cache_header() {
    let server = MockServer::start().await;

    // The mock only matches when the request disables caching.
    Mock::given(method("GET"))
        .and(path("/code.html"))
        .and(header("cache-control", "no-store"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<main>ok</main>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpPageFetcher::with_base_url(server.uri()).expect("fetcher");
    fetcher.fetch(&url("code.html")).await.expect("fetch");
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.html"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpPageFetcher::with_base_url(server.uri()).expect("fetcher");
    let err = fetcher.fetch(&url("missing.html")).await.unwrap_err();

    match err {
        FetchError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken.html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetcher = HttpPageFetcher::with_base_url(server.uri()).expect("fetcher");
    let err = fetcher.fetch(&url("broken.html")).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Bind then drop a server to get a port with nothing listening.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let fetcher = HttpPageFetcher::with_base_url(uri).expect("fetcher");
    let err = fetcher.fetch(&url("code.html")).await.unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }));
}

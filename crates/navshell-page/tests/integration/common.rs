//! Shared test helpers for navshell-page integration tests
//!
//! Provides wiremock-based mock server setup serving HTML pages, and a
//! canned standalone page document used across tests.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use navshell_page::HttpPageFetcher;

/// A complete standalone page: own chrome, padded content region, and a
/// mix of head/body scripts.
pub const DASHBOARD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Dashboard</title>
    <script src="assets/js/chart.js"></script>
</head>
<body>
    <header><h1>Acme Admin</h1></header>
    <aside>
        <a class="sidebar-item" href="dashboard.html">Dashboard</a>
        <a class="sidebar-item" href="reports.html">Reports</a>
        <script src="assets/js/sidebar.js"></script>
    </aside>
    <main id="main-content" class="pl-[280px] p-8">
        <section class="pl-[280px] stats"><p>42 widgets</p></section>
    </main>
    <footer>ACME</footer>
    <script>window.dashboardReady = true;</script>
</body>
</html>
"#;

/// Starts a mock server serving `body` at `page_path` and returns it with
/// a fetcher pointed at the server.
pub async fn setup_page_mock(page_path: &str, body: &str) -> (MockServer, HttpPageFetcher) {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let fetcher = HttpPageFetcher::with_base_url(server.uri()).expect("fetcher");
    (server, fetcher)
}

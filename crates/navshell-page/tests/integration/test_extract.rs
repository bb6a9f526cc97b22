//! Fetch-then-extract pipeline tests over realistic page documents

use navshell_core::domain::PageUrl;
use navshell_core::ports::{ExtractError, IFragmentExtractor, IPageFetcher};
use navshell_page::HtmlFragmentExtractor;

use crate::common::{setup_page_mock, DASHBOARD_PAGE};

#[tokio::test]
async fn fetched_page_reduces_to_clean_fragment() {
    let (_server, fetcher) = setup_page_mock("/dashboard.html", DASHBOARD_PAGE).await;
    let extractor = HtmlFragmentExtractor::new("main-content");

    let body = fetcher
        .fetch(&PageUrl::new("dashboard.html").expect("url"))
        .await
        .expect("fetch");
    let page = extractor.extract(&body).expect("extract");

    // Content survives; chrome and standalone padding do not.
    assert!(page.fragment.contains("42 widgets"));
    assert!(!page.fragment.contains("pl-[280px]"));
    assert!(!page.fragment.contains("Acme Admin"));
    assert!(!page.fragment.contains("sidebar-item"));
}

#[tokio::test]
async fn scripts_collected_in_order_and_chrome_scripts_dropped() {
    let (_server, fetcher) = setup_page_mock("/dashboard.html", DASHBOARD_PAGE).await;
    let extractor = HtmlFragmentExtractor::new("main-content");

    let body = fetcher
        .fetch(&PageUrl::new("dashboard.html").expect("url"))
        .await
        .expect("fetch");
    let page = extractor.extract(&body).expect("extract");

    // Head script first, then the body's inline script. The sidebar's
    // script sits in chrome and is dropped.
    assert_eq!(page.scripts.len(), 2);
    assert_eq!(page.scripts[0].src(), Some("assets/js/chart.js"));
    assert!(page.scripts[1].text().contains("dashboardReady"));
}

#[tokio::test]
async fn page_without_region_is_not_extractable() {
    let bare = "<html><body><header>H</header><p>no region here</p></body></html>";
    let (_server, fetcher) = setup_page_mock("/bare.html", bare).await;
    let extractor = HtmlFragmentExtractor::new("main-content");

    let body = fetcher
        .fetch(&PageUrl::new("bare.html").expect("url"))
        .await
        .expect("fetch");

    assert_eq!(
        extractor.extract(&body).unwrap_err(),
        ExtractError::NoContentRegion
    );
}

use biz_directory::core::renderer::{NoticeKind, LOAD_FAILED_MESSAGE, NO_RESULTS_MESSAGE};
use biz_directory::domain::model::DisplayState;
use biz_directory::{
    BrowserError, BrowserSettings, DirectoryBrowser, HttpDirectoryApi, LoadOutcome, OutputFormat,
    ResultRenderer, UiEvent,
};
use httpmock::prelude::*;

fn browser_for(server: &MockServer) -> DirectoryBrowser<HttpDirectoryApi> {
    let mut settings = BrowserSettings::default();
    settings.api.base_url = server.base_url();
    let api = HttpDirectoryApi::new(&settings).unwrap();
    DirectoryBrowser::new(api, ResultRenderer::new(settings.render))
}

#[tokio::test]
async fn test_enter_with_category_and_search_renders_cards() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/businesses")
            .query_param("category_id", "3")
            .query_param("search", "cafe");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 11, "name": "Dal Lake Cafe", "category_id": 3, "category_name": "Services",
                 "description": "Tea by the water", "image_url": "lake.jpg"},
                {"id": 4, "name": "Cafe Kashmir", "category_id": 3, "category_name": "Services",
                 "description": "Kahwa and bakery", "image_url": null}
            ]));
    });

    let browser = browser_for(&server);
    browser.set_controls("3", "");
    browser
        .handle_event(UiEvent::SearchInput("cafe".to_string()))
        .await;
    let outcome = browser
        .handle_event(UiEvent::SearchKey("Enter".to_string()))
        .await;

    api_mock.assert();
    assert_eq!(outcome, Some(LoadOutcome::Displayed { count: 2 }));

    let region = browser.renderer().render_state(&browser.state());
    let cards = region.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "Dal Lake Cafe");
    assert_eq!(cards[0].detail_href, "/business/11");
    assert_eq!(cards[0].image_src, "/static/images/lake.jpg");
    assert_eq!(cards[1].name, "Cafe Kashmir");
    assert_eq!(cards[1].detail_href, "/business/4");
    assert_eq!(cards[1].image_src, "/static/images/placeholder.jpg");

    let html = browser.render(OutputFormat::Html);
    let first = html.find("Dal Lake Cafe").unwrap();
    let second = html.find("Cafe Kashmir").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_activation_populates_selector_and_results() {
    let server = MockServer::start();
    let categories_mock = server.mock(|when, then| {
        when.method(GET).path("/api/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 1, "name": "Fashion"},
                {"id": 2, "name": "Food"},
                {"id": 5, "name": "Technology"}
            ]));
    });
    let businesses_mock = server.mock(|when, then| {
        when.method(GET).path("/api/businesses");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 5, "name": "Digital Valley", "category_id": 5,
                 "category_name": "Technology",
                 "description": "IT services and software development",
                 "address": "Rajbagh, Srinagar", "phone": "+91 9876543214",
                 "email": "info@digitalvalley.com", "website": "www.digitalvalley.com",
                 "image_url": "digital.jpg"}
            ]));
    });

    let browser = browser_for(&server);
    let activation = browser.activate().await;

    categories_mock.assert();
    businesses_mock.assert();
    assert_eq!(activation.categories_added, 3);
    assert_eq!(activation.businesses, LoadOutcome::Displayed { count: 1 });

    let page = browser.page();
    let options: Vec<(&str, &str)> = page
        .category_options()
        .iter()
        .map(|o| (o.value.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(
        options,
        vec![("", "All Categories"), ("1", "Fashion"), ("2", "Food"), ("5", "Technology")]
    );

    let text = browser.render(OutputFormat::Text);
    assert!(text.contains("Digital Valley [Technology]"));
    assert!(text.contains("details: /business/5"));
}

#[tokio::test]
async fn test_malformed_categories_leave_selector_untouched() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/categories");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("[{\"id\": \"oops\"");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/businesses");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let browser = browser_for(&server);
    let activation = browser.activate().await;

    assert_eq!(activation.categories_added, 0);
    assert_eq!(browser.page().category_options().len(), 1);

    let region = browser.renderer().render_state(&browser.state());
    assert_eq!(region.notice(), Some((NoticeKind::Info, NO_RESULTS_MESSAGE)));
    assert!(region.cards().is_empty());
}

#[tokio::test]
async fn test_server_error_shows_failure_notice() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/businesses");
        then.status(503);
    });

    let browser = browser_for(&server);
    let outcome = browser.handle_event(UiEvent::SearchClicked).await;

    api_mock.assert();
    assert_eq!(outcome, Some(LoadOutcome::Failed));
    assert_eq!(
        browser.state(),
        DisplayState::Error(LOAD_FAILED_MESSAGE.to_string())
    );
    let expected = format!(
        "<div class=\"alert alert-danger\">{}</div>",
        LOAD_FAILED_MESSAGE
    );
    assert!(browser.render(OutputFormat::Html).contains(&expected));
}

#[tokio::test]
async fn test_unreachable_backend_shows_failure_notice() {
    let mut settings = BrowserSettings::default();
    // port 9 (discard) is not expected to be listening
    settings.api.base_url = "http://127.0.0.1:9".to_string();
    settings.api.timeout_seconds = 2;
    let api = HttpDirectoryApi::new(&settings).unwrap();
    let browser = DirectoryBrowser::new(api, ResultRenderer::default());

    assert_eq!(browser.filter().await, LoadOutcome::Failed);
}

#[tokio::test]
async fn test_show_business_detail_and_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/businesses/2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": 2, "name": "Wazwan Delights", "category_id": 2, "category_name": "Food",
                "description": "Traditional Kashmiri Wazwan cuisine",
                "address": "Residency Road, Srinagar", "phone": "+91 9876543211",
                "email": "info@wazwandelights.com", "website": "www.wazwandelights.com",
                "image_url": "wazwan.jpg"
            }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/businesses/404");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": "Business not found"}));
    });

    let browser = browser_for(&server);

    let detail = browser.show_business(2).await.unwrap();
    assert_eq!(detail.name, "Wazwan Delights");
    assert_eq!(detail.address.as_deref(), Some("Residency Road, Srinagar"));
    assert_eq!(detail.image_src, "/static/images/wazwan.jpg");
    tokio_test::assert_ok!(browser.show_business(2).await);

    let missing = browser.show_business(404).await;
    assert!(matches!(missing, Err(BrowserError::NotFound { id: 404 })));
}

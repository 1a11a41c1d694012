use std::time::Duration;

use page_scrape::title::get_title;
use page_scrape::FetchConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE1: &str = r#"<html>
<head>
<title>A Useful Page</title>
</head>
<body>
<h1>An Interesting Title</h1>
<div>
Lorem ipsum dolor sit amet, consectetur adipisicing elit.
</div>
</body>
</html>"#;

fn quick_config() -> FetchConfig {
    FetchConfig {
        connect_timeout: Duration::from_secs(1),
        timeout: Duration::from_secs(2),
        ..FetchConfig::default()
    }
}

async fn serve(route: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_string(), "text/html"))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn returns_the_h1_text() {
    let server = serve("/pages/page1.html", 200, PAGE1).await;
    let url = format!("{}/pages/page1.html", server.uri());

    let title = get_title(&url, &quick_config()).await;
    assert_eq!(title.as_deref(), Some("An Interesting Title"));
}

#[tokio::test]
async fn page_without_h1_is_not_found() {
    let server = serve("/plain", 200, "<html><body><p>nothing here</p></body></html>").await;
    let url = format!("{}/plain", server.uri());

    assert_eq!(get_title(&url, &quick_config()).await, None);
}

#[tokio::test]
async fn error_status_is_not_found_even_with_h1_body() {
    let server = serve("/gone", 404, "<h1>Not Found</h1>").await;
    let url = format!("{}/gone", server.uri());

    assert_eq!(get_title(&url, &quick_config()).await, None);
}

#[tokio::test]
async fn unreachable_host_is_not_found() {
    // Port 1 on loopback refuses connections.
    let title = get_title("http://127.0.0.1:1/pages/page1.html", &quick_config()).await;
    assert_eq!(title, None);
}

#[tokio::test]
async fn malformed_url_is_not_found() {
    assert_eq!(get_title("pythonscraping.com/pages", &quick_config()).await, None);
}

#[tokio::test]
async fn slow_server_is_cut_off_by_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(PAGE1, "text/html")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = FetchConfig {
        timeout: Duration::from_millis(200),
        ..quick_config()
    };
    assert_eq!(get_title(&server.uri(), &config).await, None);
}

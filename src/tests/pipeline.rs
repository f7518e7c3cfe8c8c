use crate::config::Config;
use crate::resolver::parsers::FallbackParser;
use crate::resolver::{ItemType, MetaValue, Registry, ResolveError, Resolver};
use crate::tests::{MissingFetcher, StaticFetcher};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::sync::Arc;

fn resolver_for(server: &ServerGuard) -> Resolver {
    let config = Config {
        github_api_url: server.url(),
        youtube_api_url: server.url(),
        github_token: Some("gh-token".into()),
        youtube_api_key: Some("yt-key".into()),
        ..Default::default()
    };
    Resolver::new(&config).unwrap()
}

#[tokio::test]
async fn test_youtube_short_link() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/videos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("id".into(), "abc123".into()),
            Matcher::UrlEncoded("key".into(), "yt-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [{
                    "snippet": {"title": "Demo"},
                    "statistics": {"viewCount": "42"}
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let item = resolver_for(&server)
        .resolve_item("https://youtu.be/abc123")
        .await
        .unwrap();

    assert_eq!(item.title.as_deref(), Some("Demo"));
    assert_eq!(item.provider.as_deref(), Some("youtube"));
    assert_eq!(item.item_type, ItemType::Video);
    assert_eq!(item.product_url, "https://youtu.be/abc123");
    assert_eq!(
        item.meta.unwrap().get("viewCount"),
        Some(&MetaValue::Text("42".into()))
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_youtube_short_link_with_timestamp() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/youtube/v3/videos")
        .match_query(Matcher::UrlEncoded("id".into(), "abc123".into()))
        .with_status(200)
        .with_body(
            json!({
                "items": [{
                    "snippet": {"title": "Demo"},
                    "statistics": {"viewCount": "42"}
                }]
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    for url in ["https://youtu.be/abc123#t=10", "https://youtu.be/abc123:42"] {
        let item = resolver.resolve_item(url).await.unwrap();
        assert_eq!(item.item_type, ItemType::Video);
        assert_eq!(item.product_url, url);
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_github_repository() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/rust-lang/regex")
        .match_header("authorization", "token gh-token")
        .with_status(200)
        .with_body(
            json!({
                "name": "regex",
                "full_name": "rust-lang/regex",
                "description": "  An implementation of regular expressions for Rust.\n",
                "owner": {"avatar_url": "https://avatars.githubusercontent.com/u/5430905"},
                "stargazers_count": 3500,
                "forks_count": 440,
                "watchers_count": 3500,
                "open_issues": 60
            })
            .to_string(),
        )
        .create_async()
        .await;

    let url = "https://github.com/rust-lang/regex";
    let item = resolver_for(&server).resolve_item(url).await.unwrap();

    assert_eq!(item.title.as_deref(), Some("regex"));
    assert_eq!(
        item.description.as_deref(),
        Some("An implementation of regular expressions for Rust.")
    );
    assert_eq!(item.item_type, ItemType::Repository);
    assert_eq!(item.product_url, url);
    assert_eq!(
        item.meta.unwrap().get("starsCount"),
        Some(&MetaValue::Count(3500))
    );
}

#[tokio::test]
async fn test_fallback_website() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/page")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(
            r#"<html><head>
                <title>
                    Some Page
                </title>
                <meta name="description" content=" described ">
                <meta property="og:site_name" content="Some Site">
            </head><body></body></html>"#,
        )
        .create_async()
        .await;

    let url = format!("{}/page", server.url());
    let item = resolver_for(&server).resolve_item(&url).await.unwrap();

    assert_eq!(item.item_type, ItemType::Website);
    assert!(item.provider.is_none());
    assert_eq!(item.title.as_deref(), Some("Some Page"));
    assert_eq!(item.description.as_deref(), Some("described"));
    assert_eq!(item.author.as_deref(), Some("Some Site"));
    assert!(item.image_url.is_none());
    assert_eq!(item.product_url, url);
}

#[tokio::test]
async fn test_product_url_is_input_verbatim() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("<html><head><title>x</title></head></html>")
        .create_async()
        .await;

    let url = format!("{}/Some/Path/?utm_source=feed&b=2#frag", server.url());
    let item = resolver_for(&server).resolve_item(&url).await.unwrap();

    assert_eq!(item.product_url.as_bytes(), url.as_bytes());
}

#[tokio::test]
async fn test_generic_404_is_processing_failed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/page")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/page", server.url());
    let err = resolver_for(&server).resolve_item(&url).await.unwrap_err();

    assert_eq!(err, ResolveError::ProcessingFailed(url));
}

#[tokio::test]
async fn test_not_found_scenario() {
    let registry = Registry::with_fallback(Arc::new(MissingFetcher), Arc::new(FallbackParser));
    // no specific providers: everything goes to the fallback
    assert!(registry.providers().is_empty());

    let resolver = Resolver::with_registry(registry);
    let err = resolver
        .resolve_item("https://example.org/page")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ResolveError::ProcessingFailed("https://example.org/page".into())
    );
    assert_eq!(err.url(), "https://example.org/page");
}

#[tokio::test]
async fn test_missing_identifier_is_processing_failed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let url = "https://www.youtube.com/feed/trending";
    let err = resolver_for(&server).resolve_item(url).await.unwrap_err();

    assert_eq!(err, ResolveError::ProcessingFailed(url.into()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_payload_is_processing_failed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/youtube/v3/videos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"items": []}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/repos/rust-lang/regex")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    for url in [
        "https://www.youtube.com/watch?v=abc123",
        "https://github.com/rust-lang/regex",
    ] {
        let err = resolver.resolve_item(url).await.unwrap_err();
        assert_eq!(err, ResolveError::ProcessingFailed(url.into()));
    }
}

#[tokio::test]
async fn test_transport_failure_is_processing_failed() {
    let config = Config {
        github_api_url: "http://127.0.0.1:1".into(),
        ..Default::default()
    };
    let resolver = Resolver::new(&config).unwrap();

    let url = "https://github.com/rust-lang/regex";
    let err = resolver.resolve_item(url).await.unwrap_err();
    assert_eq!(err, ResolveError::ProcessingFailed(url.into()));
}

#[tokio::test]
async fn test_every_failure_has_the_same_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gone")
        .with_status(404)
        .create_async()
        .await;
    server
        .mock("GET", "/repos/rust-lang/regex")
        .with_status(200)
        .with_body(json!({"message": "Not Found"}).to_string())
        .create_async()
        .await;

    let resolver = resolver_for(&server);
    let urls = [
        format!("{}/gone", server.url()),
        "https://www.youtube.com/channel/UC123".to_string(),
        "https://github.com/rust-lang/regex".to_string(),
    ];

    for url in urls {
        let err = resolver.resolve_item(&url).await.unwrap_err();
        assert_eq!(err.to_string(), format!("something went wrong when parsing {url}"));
        assert!(matches!(err, ResolveError::ProcessingFailed(ref u) if *u == url));
    }
}

#[tokio::test]
async fn test_lenient_and_strict_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/maintenance")
        .with_status(503)
        .with_body("<html><head><title>Down for maintenance</title></head></html>")
        .expect_at_least(1)
        .create_async()
        .await;
    let url = format!("{}/maintenance", server.url());

    let item = resolver_for(&server).resolve_item(&url).await.unwrap();
    assert_eq!(item.title.as_deref(), Some("Down for maintenance"));

    let strict = Resolver::new(&Config {
        strict_http_status: true,
        ..Default::default()
    })
    .unwrap();
    let err = strict.resolve_item(&url).await.unwrap_err();
    assert_eq!(err, ResolveError::ProcessingFailed(url));
}

#[tokio::test]
async fn test_normalizes_parser_output() {
    let registry = Registry::with_fallback(
        Arc::new(StaticFetcher(
            "<html><head><title>\n\t  </title><meta name=\"twitter:creator\" content=\"  @someone \"></head></html>",
        )),
        Arc::new(FallbackParser),
    );
    let resolver = Resolver::with_registry(registry);

    let item = resolver.resolve_item("https://example.org/").await.unwrap();
    assert!(item.title.is_none());
    assert_eq!(item.author.as_deref(), Some("@someone"));
    assert!(item.description.is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_invocations() {
    let mut server = Server::new_async().await;
    for n in 0..8 {
        server
            .mock("GET", format!("/page/{n}").as_str())
            .with_status(200)
            .with_body(format!("<html><head><title>Page {n}</title></head></html>"))
            .create_async()
            .await;
    }

    let resolver = Arc::new(resolver_for(&server));
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let resolver = resolver.clone();
            let url = format!("{}/page/{n}", server.url());
            tokio::spawn(async move { (n, url.clone(), resolver.resolve_item(&url).await) })
        })
        .collect();

    for handle in handles {
        let (n, url, result) = handle.await.unwrap();
        let item = result.unwrap();
        assert_eq!(item.title, Some(format!("Page {n}")));
        assert_eq!(item.product_url, url);
    }
}

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tvmaze_core::{ClientConfig, TvmazeCatalog, TvmazeError};

fn catalog_for(server: &MockServer) -> TvmazeCatalog {
    TvmazeCatalog::with_config(ClientConfig {
        base_url: server.uri(),
        requests_per_second: 100.0,
        ..ClientConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn search_maps_nested_show_fields_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "score": 0.91,
                "show": {
                    "id": 975,
                    "name": "Batman",
                    "summary": "<p>Caped crusader.</p>",
                    "image": { "medium": "m.jpg", "original": "o.jpg" },
                    "premiered": "1966-01-12",
                    "language": "English"
                }
            },
            {
                "score": 0.5,
                "show": {
                    "id": 123,
                    "name": "Batman Beyond",
                    "summary": null,
                    "image": null,
                    "premiered": null
                }
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let shows = catalog_for(&server).search_shows("batman").await.unwrap();

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].id, 975);
    assert_eq!(shows[0].name, "Batman");
    assert_eq!(shows[0].summary.as_deref(), Some("<p>Caped crusader.</p>"));
    assert_eq!(shows[0].image.as_ref().unwrap().original, "o.jpg");
    assert_eq!(shows[0].premiered.as_deref(), Some("1966-01-12"));

    assert_eq!(shows[1].id, 123);
    assert!(shows[1].summary.is_none());
    assert!(shows[1].image.is_none());
    assert!(shows[1].premiered.is_none());
}

#[tokio::test]
async fn search_percent_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .and(query_param("q", "tom & jerry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let shows = catalog_for(&server).search_shows("tom & jerry").await.unwrap();
    assert!(shows.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("q=tom%20%26%20jerry"));
}

#[tokio::test]
async fn empty_search_issues_no_request() {
    let server = MockServer::start().await;

    let result = catalog_for(&server).search_shows("").await;
    assert!(matches!(result, Err(TvmazeError::EmptyQuery)));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn search_sends_query_as_typed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let catalog = catalog_for(&server);
    catalog.search_shows("  batman ").await.unwrap();
    catalog.search_shows(" ").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let queries: Vec<_> = requests.iter().map(|r| r.url.query().map(str::to_string)).collect();
    assert_eq!(
        queries,
        vec![
            Some("q=%20%20batman%20".to_string()),
            Some("q=%20".to_string()),
        ]
    );
}

#[tokio::test]
async fn search_server_error_propagates_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = catalog_for(&server).search_shows("lost").await;
    assert!(matches!(result, Err(TvmazeError::HttpError(_))));
}

#[tokio::test]
async fn search_rate_limited_maps_to_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    let result = catalog_for(&server).search_shows("lost").await;
    assert!(matches!(result, Err(TvmazeError::RateLimited)));
}

#[tokio::test]
async fn search_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/shows"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}"))
        .mount(&server)
        .await;

    let result = catalog_for(&server).search_shows("lost").await;
    assert!(matches!(result, Err(TvmazeError::DecodeError(_))));
}

#[tokio::test]
async fn episodes_preserve_upstream_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shows/123/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 3, "name": "Finale", "season": 2, "number": 1, "airdate": "2001-01-01" },
            { "id": 1, "name": "Pilot", "season": 1, "number": 1 },
            { "id": 2, "name": "Crisis", "season": 1, "number": 2 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let episodes = catalog_for(&server).get_episodes(123).await.unwrap();

    let coords: Vec<_> = episodes
        .iter()
        .map(|e| (e.id, e.name.as_str(), e.season, e.number))
        .collect();
    assert_eq!(
        coords,
        vec![(3, "Finale", 2, 1), (1, "Pilot", 1, 1), (2, "Crisis", 1, 2)]
    );
}

#[tokio::test]
async fn episodes_unknown_show_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shows/999999/episodes"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    match catalog_for(&server).get_episodes(999_999).await {
        Err(TvmazeError::NotFound(url)) => assert!(url.ends_with("/shows/999999/episodes")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn retries_transient_errors_when_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shows/1/episodes"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shows/1/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 10, "name": "Pilot", "season": 1, "number": 1 }
        ])))
        .mount(&server)
        .await;

    let catalog = TvmazeCatalog::with_config(ClientConfig {
        base_url: server.uri(),
        requests_per_second: 100.0,
        max_retries: 1,
        ..ClientConfig::default()
    })
    .unwrap();

    let episodes = catalog.get_episodes(1).await.unwrap();
    assert_eq!(episodes.len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[test]
fn zero_request_rate_is_a_config_error() {
    let result = TvmazeCatalog::with_config(ClientConfig {
        requests_per_second: 0.0,
        ..ClientConfig::default()
    });
    assert!(matches!(result, Err(TvmazeError::InvalidConfig(_))));
}

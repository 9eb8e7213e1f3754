// SPDX-License-Identifier: MPL-2.0
//! Drives the catalog client against a local HTTP stub serving canned JSON.

use std::sync::{Arc, Mutex};
use tcg_market::api::{Client, Filters};
use tcg_market::app::config::ApiConfig;
use tcg_market::error::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// A recorded request: its target (path plus query) and raw header block.
#[derive(Debug, Clone)]
struct Recorded {
    target: String,
    headers: String,
}

impl Recorded {
    fn url(&self) -> Url {
        Url::parse(&format!("http://stub{}", self.target)).expect("valid target")
    }

    fn path(&self) -> String {
        self.url().path().to_string()
    }

    fn param(&self, name: &str) -> Option<String> {
        self.url()
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

type Responder = fn(&str) -> (u16, String);

/// Starts the stub and returns its base URL plus the request log.
async fn serve(respond: Responder) -> (String, Arc<Mutex<Vec<Recorded>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    let log = Arc::new(Mutex::new(Vec::new()));
    let requests = Arc::clone(&log);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let requests = Arc::clone(&requests);
            tokio::spawn(async move {
                let mut raw = Vec::new();
                let mut buf = [0u8; 1024];
                while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => raw.extend_from_slice(&buf[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&raw).to_string();
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();

                let (status, body) = respond(&target);
                requests.lock().unwrap().push(Recorded {
                    target,
                    headers: head.to_lowercase(),
                });

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{addr}/v2"), log)
}

fn client(base_url: &str, api_key: Option<&str>) -> Client {
    Client::new(&ApiConfig {
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        ..ApiConfig::default()
    })
    .expect("client builds")
}

fn card_json(id: &str, name: &str) -> String {
    format!(
        r#"{{"id":"{id}","name":"{name}","set":{{"id":"base1","name":"Base","series":"Base"}},"images":{{"small":"https://img.test/{id}.png","large":"https://img.test/{id}_hires.png"}}}}"#
    )
}

fn catalog(target: &str) -> (u16, String) {
    let path = target.split('?').next().unwrap_or(target);
    match path {
        "/v2/cards" => (
            200,
            format!(
                r#"{{"data":[{},{}],"page":1,"pageSize":2,"count":2,"totalCount":41}}"#,
                card_json("base1-4", "Charizard"),
                card_json("base1-58", "Pikachu")
            ),
        ),
        "/v2/cards/base1-4" => (200, format!(r#"{{"data":{}}}"#, card_json("base1-4", "Charizard"))),
        "/v2/cards/base1-58" => (200, format!(r#"{{"data":{}}}"#, card_json("base1-58", "Pikachu"))),
        "/v2/cards/broken" => (200, r#"{"data":"#.to_string()),
        "/v2/cards/void-1" => (200, r#"{"data":null}"#.to_string()),
        "/v2/cards/hollow-1" => (200, r#"{"data":{}}"#.to_string()),
        "/v2/sets" => (
            200,
            r#"{"data":[{"id":"sv1","name":"Scarlet & Violet","series":"Scarlet & Violet","total":258,"releaseDate":"2023/03/31","images":{"symbol":"s","logo":"l"}}],"totalCount":1}"#
                .to_string(),
        ),
        "/v2/types" => (200, r#"{"data":["Fire","Water"]}"#.to_string()),
        "/v2/rarities" => (200, r#"{"data":["Common","Rare Holo"]}"#.to_string()),
        _ => (404, r#"{"error":{"message":"Not Found","code":404}}"#.to_string()),
    }
}

#[tokio::test]
async fn card_page_sends_paging_order_and_filters() {
    let (base, log) = serve(catalog).await;
    let filters = Filters {
        set: Some("base1".to_string()),
        types: None,
        rarity: Some("Rare Holo".to_string()),
    };

    let page = client(&base, None).cards(3, 2, &filters).await.expect("page");

    assert_eq!(page.total_count, 41);
    let names: Vec<_> = page.items.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(names, ["Charizard", "Pikachu"]);

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path(), "/v2/cards");
    assert_eq!(request.param("orderBy").as_deref(), Some("-set.releaseDate"));
    assert_eq!(request.param("page").as_deref(), Some("3"));
    assert_eq!(request.param("pageSize").as_deref(), Some("2"));
    assert_eq!(
        request.param("q").as_deref(),
        Some("set.id:base1 rarity:\"Rare Holo\"")
    );
}

#[tokio::test]
async fn search_matches_name_substring() {
    let (base, log) = serve(catalog).await;

    client(&base, None)
        .search("chari", 1, 20)
        .await
        .expect("search page");

    let request = log.lock().unwrap()[0].clone();
    assert_eq!(request.param("q").as_deref(), Some("name:*chari*"));
    assert_eq!(request.param("orderBy"), None);
}

#[tokio::test]
async fn single_card_is_unwrapped_from_envelope() {
    let (base, _log) = serve(catalog).await;

    let card = client(&base, None)
        .card("base1-4")
        .await
        .expect("card")
        .expect("card present");

    assert_eq!(card.id, "base1-4");
    assert_eq!(
        card.images.large.as_deref(),
        Some("https://img.test/base1-4_hires.png")
    );
}

#[tokio::test]
async fn favorites_batch_keeps_requested_order() {
    let (base, log) = serve(catalog).await;
    let ids = vec!["base1-58".to_string(), "base1-4".to_string()];

    let cards = client(&base, None).cards_by_ids(&ids).await.expect("cards");

    let got: Vec<_> = cards.iter().map(|card| card.id.as_str()).collect();
    assert_eq!(got, ["base1-58", "base1-4"]);
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn one_missing_favorite_fails_the_batch() {
    let (base, _log) = serve(catalog).await;
    let ids = vec!["base1-4".to_string(), "gone-1".to_string()];

    let result = client(&base, None).cards_by_ids(&ids).await;

    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn null_or_empty_card_payload_is_no_card() {
    let (base, _log) = serve(catalog).await;
    let client = client(&base, None);

    assert_eq!(client.card("void-1").await, Ok(None));
    assert_eq!(client.card("hollow-1").await, Ok(None));
}

#[tokio::test]
async fn favorite_answered_without_a_card_fails_the_batch() {
    let (base, _log) = serve(catalog).await;
    let ids = vec!["base1-4".to_string(), "void-1".to_string()];

    match client(&base, None).cards_by_ids(&ids).await {
        Err(Error::Http(message)) => assert!(message.contains("void-1")),
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_is_an_http_error_naming_the_operation() {
    let (base, _log) = serve(catalog).await;

    let result = client(&base, None).card("nope").await;

    match result {
        Err(Error::Http(message)) => {
            assert!(message.starts_with("card: "), "{message}");
            assert!(message.contains("404"), "{message}");
        }
        other => panic!("expected an HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn truncated_body_is_a_decode_error() {
    let (base, _log) = serve(catalog).await;

    let result = client(&base, None).card("broken").await;

    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn filter_options_fetch_all_three_lists() {
    let (base, log) = serve(catalog).await;

    let options = client(&base, None).filter_options().await.expect("options");

    assert_eq!(options.sets.len(), 1);
    assert_eq!(options.sets[0].name, "Scarlet & Violet");
    assert_eq!(options.types, ["Fire", "Water"]);
    assert_eq!(options.rarities, ["Common", "Rare Holo"]);

    let mut paths: Vec<_> = log.lock().unwrap().iter().map(Recorded::path).collect();
    paths.sort();
    assert_eq!(paths, ["/v2/rarities", "/v2/sets", "/v2/types"]);
}

#[tokio::test]
async fn api_key_is_sent_when_configured() {
    let (base, log) = serve(catalog).await;

    client(&base, Some("secret-key")).types().await.expect("types");
    client(&base, None).rarities().await.expect("rarities");

    let requests = log.lock().unwrap().clone();
    assert!(requests[0].headers.contains("x-api-key: secret-key"));
    assert!(!requests[1].headers.contains("x-api-key"));
}

#[tokio::test]
async fn unreachable_host_is_an_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);

    let result = client(&format!("http://{addr}/v2"), None).sets().await;

    assert!(matches!(result, Err(Error::Http(_))));
}

//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every client
//! operation over real HTTP through the default reqwest transport. Covers
//! decoding, key casing, query and header propagation, status validation in
//! both modes, and the item create/delete lifecycle.

use std::collections::BTreeMap;

use http_client::{
    CachePolicy, HttpClient, HttpError, KeyDecodingStrategy, KeyEncodingStrategy, RequestOptions,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct User {
    name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Payload {
    value: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Profile {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize)]
struct Item {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct CreateItem<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    status: u16,
}

/// Bind the mock server to a random local port and return its base URL.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

/// Client that never routes through an ambient `HTTP_PROXY`.
fn client() -> HttpClient {
    let transport = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpClient::with_transport(transport)
}

#[tokio::test]
async fn get_decodes_user() {
    let base = start_server().await;
    let client = client();

    let user: User = client
        .get(&format!("{base}/user"), &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn free_function_uses_default_client() {
    let base = start_server().await;

    let user: User = http_client::get(&format!("{base}/user"), &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(user.name, "Ada");
}

#[tokio::test]
async fn query_params_reach_the_server() {
    let base = start_server().await;
    let options = RequestOptions::new()
        .query("q", "rust & serde")
        .query("page", "2");

    let echoed: BTreeMap<String, String> = client()
        .get(&format!("{base}/query"), &options)
        .await
        .unwrap();
    assert_eq!(echoed.len(), 2);
    assert_eq!(echoed["q"], "rust & serde");
    assert_eq!(echoed["page"], "2");
}

#[tokio::test]
async fn headers_and_cache_policy_reach_the_server() {
    let base = start_server().await;
    let options = RequestOptions::new()
        .header("x-api-key", "secret")
        .cache_policy(CachePolicy::ReloadIgnoringLocalCacheData);

    let echoed: BTreeMap<String, String> = client()
        .get(&format!("{base}/headers"), &options)
        .await
        .unwrap();
    assert_eq!(echoed["x-api-key"], "secret");
    assert_eq!(echoed["cache-control"], "no-cache");
}

#[tokio::test]
async fn explicit_cache_control_header_wins() {
    let base = start_server().await;
    let options = RequestOptions::new()
        .header("Cache-Control", "no-store")
        .cache_policy(CachePolicy::ReturnCacheDataElseLoad);

    let echoed: BTreeMap<String, String> = client()
        .get(&format!("{base}/headers"), &options)
        .await
        .unwrap();
    assert_eq!(echoed["cache-control"], "no-store");
}

#[tokio::test]
async fn post_round_trips_payload() {
    let base = start_server().await;
    let input = Payload { value: 42 };

    let output: Payload = http_client::post(&format!("{base}/echo"), &input, &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(output, input);
}

#[tokio::test]
async fn post_with_snake_case_wire_keys() {
    let base = start_server().await;
    let client = client();
    let input = Profile {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    };

    let raw: BTreeMap<String, String> = client
        .post(
            &format!("{base}/echo"),
            &input,
            &RequestOptions::new().key_encoding(KeyEncodingStrategy::ConvertToSnakeCase),
        )
        .await
        .unwrap();
    assert_eq!(raw["first_name"], "Ada");
    assert_eq!(raw["last_name"], "Lovelace");

    let decoded: Profile = client
        .post(
            &format!("{base}/echo"),
            &input,
            &RequestOptions::new()
                .key_encoding(KeyEncodingStrategy::ConvertToSnakeCase)
                .key_decoding(KeyDecodingStrategy::ConvertFromSnakeCase),
        )
        .await
        .unwrap();
    assert_eq!(decoded, input);
}

#[tokio::test]
async fn post_discarding_completes() {
    let base = start_server().await;

    http_client::post_discarding(
        &format!("{base}/echo"),
        &Payload { value: 1 },
        &RequestOptions::default(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn validating_call_fails_on_500() {
    let base = start_server().await;

    let err = client()
        .get::<StatusBody>(&format!("{base}/status/500"), &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Status { code: 500 }));
}

#[tokio::test]
async fn non_validating_call_decodes_500_body() {
    let base = start_server().await;
    let options = RequestOptions::new().validate_status(false);

    let body: StatusBody = client()
        .get(&format!("{base}/status/500"), &options)
        .await
        .unwrap();
    assert_eq!(body.status, 500);
}

#[tokio::test]
async fn item_lifecycle() {
    let base = start_server().await;
    let client = client();
    let options = RequestOptions::default();

    // Create.
    let created: Item = client
        .post(&format!("{base}/items"), &CreateItem { name: "Widget" }, &options)
        .await
        .unwrap();
    assert_eq!(created.name, "Widget");
    let item_url = format!("{base}/items/{}", created.id);

    // Read back.
    let fetched: Item = client.get(&item_url, &options).await.unwrap();
    assert_eq!(fetched.id, created.id);

    // Delete: 204 with an empty body.
    client.delete(&item_url, &options).await.unwrap();

    // Gone.
    let err = client.get::<Item>(&item_url, &options).await.unwrap_err();
    assert!(matches!(err, HttpError::Status { code: 404 }));
    let err = client.delete(&item_url, &options).await.unwrap_err();
    assert!(matches!(err, HttpError::Status { code: 404 }));

    // List is empty again.
    let items: Vec<Item> = client.get(&format!("{base}/items"), &options).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Bind then drop a listener so the port is very likely closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client()
        .get::<User>(&format!("http://{addr}/user"), &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Transport(_)));
}

#[tokio::test]
async fn invalid_url_is_rejected() {
    let err = http_client::delete("localhost/items/1", &RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::InvalidUrl { .. }));
}

//! Behavior-driven tests for remote feed loading
//!
//! These tests verify HOW the loader sequences a request, maps the response,
//! and guards delivery, using a spy transport that completes on demand.

use feedkit_core::{
    FeedItem, HttpClient, HttpClientCompletion, HttpClientResult, HttpError, HttpResponse,
    LoadError, LoadFeedResult, RemoteFeedLoader,
};
use serde_json::{json, Map, Value};
use std::sync::{Arc, Mutex};
use url::Url;

#[derive(Default)]
struct HttpClientSpy {
    messages: Mutex<Vec<(Url, Option<HttpClientCompletion>)>>,
}

impl HttpClientSpy {
    fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .expect("message store should not be poisoned")
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    fn complete_with_error(&self, index: usize) {
        self.complete(index, Err(HttpError::new("network unreachable")));
    }

    fn complete_with_status(&self, index: usize, status: u16, body: Vec<u8>) {
        self.complete(index, Ok(HttpResponse::new(status, body)));
    }

    fn complete(&self, index: usize, outcome: HttpClientResult) {
        let completion = {
            let mut messages = self
                .messages
                .lock()
                .expect("message store should not be poisoned");
            messages[index].1.take()
        };
        let completion = completion.expect("message should only be completed once");
        completion(outcome);
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        self.messages
            .lock()
            .expect("message store should not be poisoned")
            .push((url.clone(), Some(completion)));
    }
}

type Captured = Arc<Mutex<Vec<LoadFeedResult>>>;

fn any_url() -> Url {
    Url::parse("https://a-given-url.com").expect("valid url")
}

fn make_sut(url: Url) -> (RemoteFeedLoader, Arc<HttpClientSpy>) {
    let client = Arc::new(HttpClientSpy::default());
    let sut = RemoteFeedLoader::new(url, client.clone());
    (sut, client)
}

fn load_capturing(sut: &RemoteFeedLoader) -> Captured {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    sut.load(move |result| {
        sink.lock()
            .expect("capture store should not be poisoned")
            .push(result);
    });
    captured
}

fn results(captured: &Captured) -> Vec<LoadFeedResult> {
    captured
        .lock()
        .expect("capture store should not be poisoned")
        .clone()
}

fn make_item(
    title: &str,
    description: Option<&str>,
    location: Option<&str>,
    image: &str,
) -> (FeedItem, Value) {
    let image_url = Url::parse(image).expect("valid image url");
    let model = FeedItem::new(
        title,
        description.map(String::from),
        location.map(String::from),
        image_url.clone(),
    )
    .expect("valid feed item");

    let mut object = Map::new();
    object.insert(String::from("title"), json!(title));
    if let Some(description) = description {
        object.insert(String::from("description"), json!(description));
    }
    if let Some(location) = location {
        object.insert(String::from("location"), json!(location));
    }
    object.insert(String::from("image"), json!(image_url.as_str()));

    (model, Value::Object(object))
}

fn make_items_json(items: Vec<Value>) -> Vec<u8> {
    serde_json::to_vec(&json!({ "items": items })).expect("json should serialize")
}

// =============================================================================
// Requests
// =============================================================================

#[test]
fn when_loader_is_created_no_request_is_issued() {
    // Given/When: A freshly constructed loader
    let (_sut, client) = make_sut(any_url());

    // Then: The transport saw nothing
    assert!(client.requested_urls().is_empty());
}

#[test]
fn when_loading_once_the_configured_url_is_requested() {
    // Given: A loader for a specific URL
    let url = Url::parse("https://feed.example.test/items").expect("valid url");
    let (sut, client) = make_sut(url.clone());

    // When: A single load is issued
    sut.load_and_forget();

    // Then: Exactly that URL is requested
    assert_eq!(client.requested_urls(), vec![url]);
}

#[test]
fn when_loading_repeatedly_each_call_issues_its_own_request_in_order() {
    // Given: A loader
    let url = any_url();
    let (sut, client) = make_sut(url.clone());

    // When: Load is issued three times
    let first = load_capturing(&sut);
    let second = load_capturing(&sut);
    let third = load_capturing(&sut);

    // Then: Three requests for the same URL are in flight
    assert_eq!(client.requested_urls(), vec![url.clone(), url.clone(), url]);

    // And: Each completes through its own completion, regardless of order
    client.complete_with_status(2, 200, make_items_json(Vec::new()));
    client.complete_with_error(0);
    client.complete_with_status(1, 500, Vec::new());

    assert_eq!(results(&first), vec![Err(LoadError::Connectivity)]);
    assert_eq!(results(&second), vec![Err(LoadError::InvalidData)]);
    assert_eq!(results(&third), vec![Ok(Vec::new())]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn when_transport_fails_user_receives_connectivity_error() {
    // Given: A pending load
    let (sut, client) = make_sut(any_url());
    let captured = load_capturing(&sut);

    // When: The transport reports a failure
    client.complete_with_error(0);

    // Then: A connectivity error is delivered once
    assert_eq!(results(&captured), vec![Err(LoadError::Connectivity)]);
}

#[test]
fn when_status_is_not_200_user_receives_invalid_data_regardless_of_body() {
    // Given: A loader and a perfectly valid body
    let (sut, client) = make_sut(any_url());
    let (_, item) = make_item("title", None, None, "https://a.test/1.png");
    let body = make_items_json(vec![item]);
    let codes = [199, 201, 299, 400, 401, 499, 500, 501];

    for (index, code) in codes.into_iter().enumerate() {
        // When: The response carries a non-200 status
        let captured = load_capturing(&sut);
        client.complete_with_status(index, code, body.clone());

        // Then: Invalid data is delivered
        assert_eq!(
            results(&captured),
            vec![Err(LoadError::InvalidData)],
            "status {code} must be rejected"
        );
    }
}

#[test]
fn when_200_body_is_not_json_user_receives_invalid_data() {
    // Given: A pending load
    let (sut, client) = make_sut(any_url());
    let captured = load_capturing(&sut);

    // When: The body is garbage
    client.complete_with_status(0, 200, b"invalidJSON".to_vec());

    // Then: Invalid data is delivered
    assert_eq!(results(&captured), vec![Err(LoadError::InvalidData)]);
}

#[test]
fn when_200_body_has_a_malformed_item_no_partial_feed_is_delivered() {
    // Given: One valid item and one with a relative image reference
    let (sut, client) = make_sut(any_url());
    let captured = load_capturing(&sut);
    let (_, valid) = make_item("valid", None, None, "https://a.test/1.png");
    let broken = json!({ "title": "broken", "image": "images/2.png" });

    // When: The feed is delivered
    client.complete_with_status(0, 200, make_items_json(vec![valid, broken]));

    // Then: The whole load fails
    assert_eq!(results(&captured), vec![Err(LoadError::InvalidData)]);
}

// =============================================================================
// Success
// =============================================================================

#[test]
fn when_200_body_has_empty_items_user_receives_empty_feed() {
    // Given: A pending load
    let (sut, client) = make_sut(any_url());
    let captured = load_capturing(&sut);

    // When: The feed is empty
    client.complete_with_status(0, 200, make_items_json(Vec::new()));

    // Then: An empty success is delivered
    assert_eq!(results(&captured), vec![Ok(Vec::new())]);
}

#[test]
fn when_200_body_has_items_user_receives_them_in_order() {
    // Given: Two well-formed items
    let (sut, client) = make_sut(any_url());
    let captured = load_capturing(&sut);
    let (first_model, first_json) = make_item(
        "out with friends",
        None,
        None,
        "https://test-image-1.example.test/a.png",
    );
    let (second_model, second_json) = make_item(
        "hanging with the guys",
        Some("a description"),
        Some("a location"),
        "https://test-image-2.example.test/b.png",
    );

    // When: The feed is delivered
    client.complete_with_status(0, 200, make_items_json(vec![first_json, second_json]));

    // Then: Both items arrive with matching fields, in input order
    assert_eq!(
        results(&captured),
        vec![Ok(vec![first_model, second_model])]
    );
}

// =============================================================================
// Delivery suppression
// =============================================================================

#[test]
fn when_loader_is_dropped_before_completion_no_result_is_delivered() {
    // Given: A load in flight
    let (sut, client) = make_sut(any_url());
    let captured = load_capturing(&sut);

    // When: The loader is discarded and the transport then completes
    drop(sut);
    client.complete_with_status(0, 200, make_items_json(Vec::new()));

    // Then: The request was issued, but the completion never ran
    assert_eq!(client.requested_urls().len(), 1);
    assert!(results(&captured).is_empty());
}

#[test]
fn when_loader_is_dropped_transport_failures_are_suppressed_too() {
    // Given: A load in flight
    let (sut, client) = make_sut(any_url());
    let captured = load_capturing(&sut);

    // When: The loader is discarded and the transport then fails
    drop(sut);
    client.complete_with_error(0);

    // Then: Nothing is delivered
    assert!(results(&captured).is_empty());
}

#[tokio::test]
async fn when_transport_completes_on_another_thread_result_is_delivered() {
    // Given: A load awaiting its result
    let (sut, client) = make_sut(any_url());
    let pending = sut.load_async();

    // When: The transport completes from a different thread
    let (_, item) = make_item("title", None, None, "https://a.test/1.png");
    let body = make_items_json(vec![item]);
    let worker = std::thread::spawn(move || client.complete_with_status(0, 200, body));
    worker.join().expect("completion thread should not panic");

    // Then: The feed is delivered
    let result = pending.await.expect("result should be delivered");
    assert_eq!(result.map(|items| items.len()), Ok(1));
}

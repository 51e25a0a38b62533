use ocm_client::{Connection, ConnectionOptions, GetRequest, ListRequest, OcmError, ResourcePath};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use test_log::test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Thing {
    id: String,
    #[serde(default)]
    state: Option<String>,
}

async fn setup() -> (MockServer, Connection) {
    let server = MockServer::start().await;
    let options = ConnectionOptions::default()
        .anonymous()
        .with_url(server.uri())
        .with_retry_limit(0);
    let connection = Connection::new(options).unwrap();
    (server, connection)
}

fn things() -> ResourcePath {
    ResourcePath::new(["api", "things", "v1", "things"])
}

fn page(page: u32, ids: &[&str], total: u32) -> serde_json::Value {
    json!({
        "kind": "ThingList",
        "page": page,
        "size": ids.len(),
        "total": total,
        "items": ids.iter().map(|id| json!({"kind": "Thing", "id": id})).collect::<Vec<_>>()
    })
}

#[test(tokio::test)]
async fn test_list_sends_paging_and_search() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .and(query_param("search", "name like 'a%'"))
        .and(query_param("order", "name asc"))
        .and(query_param("page", "2"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, &["a1", "a2"], 7)))
        .expect(1)
        .mount(&server)
        .await;

    let response = ListRequest::<Thing>::new(connection, things())
        .search("name like 'a%'")
        .order("name asc")
        .page(2)
        .size(5)
        .send()
        .await
        .unwrap();

    assert_eq!(response.page, 2);
    assert_eq!(response.size, 2);
    assert_eq!(response.total, 7);
    assert_eq!(
        response.items.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["a1", "a2"]
    );
}

#[test(tokio::test)]
async fn test_list_without_size_uses_item_count() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "ThingList",
            "page": 1,
            "total": 1,
            "items": [{"id": "x"}]
        })))
        .mount(&server)
        .await;

    let response = ListRequest::<Thing>::new(connection, things())
        .send()
        .await
        .unwrap();
    assert_eq!(response.size, 1);
}

#[test(tokio::test)]
async fn test_send_all_walks_pages() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .and(query_param("page", "1"))
        .and(query_param("size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, &["a", "b"], 5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, &["c", "d"], 5)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(3, &["e"], 5)))
        .expect(1)
        .mount(&server)
        .await;

    let items = ListRequest::<Thing>::new(connection, things())
        .send_all(2)
        .await
        .unwrap();
    assert_eq!(
        items.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c", "d", "e"]
    );
}

#[test(tokio::test)]
async fn test_send_all_stops_on_empty_page() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, &["a"], 1)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, &[], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let items = ListRequest::<Thing>::new(connection, things())
        .send_all(1)
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
}

#[test(tokio::test)]
async fn test_send_all_rejects_zero_page_size() {
    let (_server, connection) = setup().await;
    let err = ListRequest::<Thing>::new(connection, things())
        .send_all(0)
        .await
        .unwrap_err();
    assert!(matches!(err, OcmError::Config(_)));
}

#[test(tokio::test)]
async fn test_poll_until_predicate_holds() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "1", "state": "installing"})),
        )
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "1", "state": "ready"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = GetRequest::<Thing>::new(connection, things().child("1"))
        .poll()
        .interval(Duration::from_millis(10))
        .predicate(|r| r.body().and_then(|t| t.state.as_deref()) == Some("ready"))
        .start(Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(
        response.body().and_then(|t| t.state.as_deref()),
        Some("ready")
    );
}

#[test(tokio::test)]
async fn test_poll_for_not_found() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "kind": "Error",
            "id": "404",
            "reason": "gone"
        })))
        .mount(&server)
        .await;

    let response = GetRequest::<Thing>::new(connection, things().child("1"))
        .poll()
        .interval(Duration::from_millis(10))
        .status(404)
        .start(Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 404);
    assert!(response.body.is_none());
}

#[test(tokio::test)]
async fn test_poll_times_out() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "1", "state": "installing"})),
        )
        .mount(&server)
        .await;

    let err = GetRequest::<Thing>::new(connection, things().child("1"))
        .poll()
        .interval(Duration::from_millis(50))
        .predicate(|r| r.body().and_then(|t| t.state.as_deref()) == Some("ready"))
        .start(Duration::from_millis(120))
        .await
        .unwrap_err();
    assert!(matches!(err, OcmError::PollTimeout(_)));
}

#[test(tokio::test)]
async fn test_poll_rejects_zero_interval() {
    let (server, connection) = setup().await;
    let err = GetRequest::<Thing>::new(connection, things().child("1"))
        .poll()
        .interval(Duration::ZERO)
        .start(Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(matches!(err, OcmError::Config(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn test_poll_aborts_on_decode_error() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let err = GetRequest::<Thing>::new(connection, things().child("1"))
        .poll()
        .interval(Duration::from_millis(10))
        .start(Duration::from_secs(5))
        .await
        .unwrap_err();
    assert!(matches!(err, OcmError::Decode(_)));
}

// Deliberately not `Clone`: request builders must be cloneable regardless of the item type.
#[derive(Debug, Deserialize)]
struct Opaque {
    id: String,
}

#[test(tokio::test)]
async fn test_send_all_with_item_type_that_is_not_clone() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, &["a"], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let request = ListRequest::<Opaque>::new(connection, things());
    let items = request.clone().send_all(10).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "a");
}

#[test(tokio::test)]
async fn test_poll_without_deadline() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = GetRequest::<Opaque>::new(connection, things().child("1"))
        .poll()
        .interval(Duration::from_millis(10))
        .start(Duration::MAX)
        .await
        .unwrap();
    assert_eq!(response.status.as_u16(), 200);
}

#[test(tokio::test)]
async fn test_poll_with_huge_interval_times_out() {
    let (server, connection) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/things/v1/things/1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = GetRequest::<Thing>::new(connection, things().child("1"))
        .poll()
        .interval(Duration::MAX)
        .start(Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(matches!(err, OcmError::PollTimeout(_)), "unexpected error: {err:?}");
}

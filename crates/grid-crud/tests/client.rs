use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use grid_crud::{
    CrudClient, CrudError, CrudRequest, CrudResponse, Endpoints, Method, Transport,
};
use grid_model::{ActionDef, RowId};
use serde_json::{Value, json};

/// Records every request and replays canned responses in order.
struct FakeTransport {
    requests: Mutex<Vec<CrudRequest>>,
    responses: Mutex<Vec<CrudResponse>>,
}

impl FakeTransport {
    fn new(responses: Vec<CrudResponse>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        }
    }

    fn ok() -> CrudResponse {
        CrudResponse {
            status: 200,
            body: Value::Null,
        }
    }

    fn sent(&self) -> Vec<CrudRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for &FakeTransport {
    async fn send(&self, request: CrudRequest) -> Result<CrudResponse, CrudError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.responses.lock().unwrap().remove(0))
    }
}

fn endpoints() -> Endpoints {
    Endpoints::default()
        .edit_route("/items/{id}")
        .update_route("/items/{id}")
        .delete_route("/items/{id}")
        .delete_multiple_route("/items/delete-multiple")
}

#[tokio::test]
async fn update_puts_the_draft_to_the_substituted_route() {
    let transport = FakeTransport::new(vec![FakeTransport::ok()]);
    let client = CrudClient::new(endpoints(), &transport);
    let mut fields = BTreeMap::new();
    fields.insert("name".to_string(), "Renamed".to_string());
    client.update(RowId(7), &fields).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].url, "/items/7");
    assert_eq!(sent[0].body, Some(json!({"name": "Renamed"})));
}

#[tokio::test]
async fn validation_failure_carries_field_messages() {
    let transport = FakeTransport::new(vec![CrudResponse {
        status: 422,
        body: json!({"errors": {"name": ["is required"]}}),
    }]);
    let client = CrudClient::new(endpoints(), &transport);
    let error = client
        .update(RowId(7), &BTreeMap::new())
        .await
        .unwrap_err();
    match error {
        CrudError::Validation(errors) => {
            assert_eq!(errors.messages_for("name"), ["is required"]);
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[tokio::test]
async fn bulk_delete_posts_the_id_list() {
    let transport = FakeTransport::new(vec![FakeTransport::ok()]);
    let client = CrudClient::new(endpoints(), &transport);
    client
        .delete_many(&[RowId(2), RowId(3)])
        .await
        .unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "/items/delete-multiple");
    assert_eq!(sent[0].body, Some(json!({"ids": [2, 3]})));
}

#[tokio::test]
async fn fetch_record_decodes_a_single_row() {
    let transport = FakeTransport::new(vec![CrudResponse {
        status: 200,
        body: json!({"id": 5, "name": "fetched"}),
    }]);
    let client = CrudClient::new(endpoints(), &transport);
    let row = client.fetch_record(RowId(5)).await.unwrap();
    assert_eq!(row.id, RowId(5));
    assert_eq!(row.text("name"), "fetched");
}

#[tokio::test]
async fn custom_action_uses_its_own_method_and_route() {
    let transport = FakeTransport::new(vec![FakeTransport::ok()]);
    let client = CrudClient::new(endpoints(), &transport);
    let action = ActionDef::new("Archive")
        .method("POST")
        .route("/items/{id}/archive");
    client.run_action(&action, RowId(9)).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].url, "/items/9/archive");
}

#[tokio::test]
async fn missing_route_fails_without_sending() {
    let transport = FakeTransport::new(vec![]);
    let client = CrudClient::new(Endpoints::default(), &transport);
    let error = client.delete(RowId(1)).await.unwrap_err();
    assert!(matches!(error, CrudError::MissingRoute("delete")));
    assert!(transport.sent().is_empty());

    let action = ActionDef::new("NoRoute");
    let error = client.run_action(&action, RowId(1)).await.unwrap_err();
    assert!(matches!(error, CrudError::MissingRoute("action")));
}

#[tokio::test]
async fn non_success_status_maps_to_a_status_error() {
    let transport = FakeTransport::new(vec![CrudResponse {
        status: 500,
        body: json!({"message": "boom"}),
    }]);
    let client = CrudClient::new(endpoints(), &transport);
    let error = client.delete(RowId(1)).await.unwrap_err();
    match error {
        CrudError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected status error, got {other}"),
    }
}

//! Stateless HTTP request builder and response parser for the to-do API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! the transport executes the round trip in between, keeping this layer
//! deterministic and free of I/O dependencies. Parsing never touches the
//! store, so a rejected response leaves local state exactly as it was.

use crate::error::SyncError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemId, ItemPatch, NewItem};

/// Stateless client for the to-do API: three operations, each a build/parse
/// pair around a [`Transport`](crate::http::Transport) round trip.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/to-dos", self.base_url),
            headers: vec![accept_json()],
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, SyncError> {
        let body = serde_json::to_string(input).map_err(|e| SyncError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/to-dos", self.base_url),
            headers: vec![accept_json(), content_json()],
            body: Some(body),
        })
    }

    pub fn build_update_item(&self, id: ItemId, patch: &ItemPatch) -> Result<HttpRequest, SyncError> {
        let body = serde_json::to_string(patch).map_err(|e| SyncError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/to-dos/{id}", self.base_url),
            headers: vec![accept_json(), content_json()],
            body: Some(body),
        })
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, SyncError> {
        expect_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Decode(e.to_string()))
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, SyncError> {
        expect_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Decode(e.to_string()))
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, SyncError> {
        expect_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| SyncError::Decode(e.to_string()))
    }
}

fn accept_json() -> (String, String) {
    ("accept".to_string(), "application/json".to_string())
}

fn content_json() -> (String, String) {
    ("content-type".to_string(), "application/json".to_string())
}

/// Reject any status other than the one the operation expects.
fn expect_status(response: &HttpResponse, expected: u16) -> Result<(), SyncError> {
    if response.status == expected {
        return Ok(());
    }
    Err(SyncError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/to-dos");
        assert!(req.body.is_none());
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let input = NewItem {
            title: "Buy milk".to_string(),
        };
        let req = client().build_create_item(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/to-dos");
        assert_eq!(
            req.headers,
            vec![
                ("accept".to_string(), "application/json".to_string()),
                ("content-type".to_string(), "application/json".to_string()),
            ]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Buy milk" }));
    }

    #[test]
    fn build_update_item_serializes_only_present_fields() {
        let patch = ItemPatch::title("Updated");
        let req = client().build_update_item(7, &patch).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/to-dos/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Updated");
        assert!(body.get("completed").is_none());
    }

    #[test]
    fn build_update_item_with_completed_patch() {
        let patch = ItemPatch::completed(true);
        let req = client().build_update_item(2, &patch).unwrap();
        assert_eq!(req.path, "http://localhost:3000/api/to-dos/2");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn parse_list_items_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"title":"Go to the Gym","completed":false}]"#.to_string(),
        };
        let items = client().parse_list_items(response).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].title, "Go to the Gym");
    }

    #[test]
    fn parse_create_item_success() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":3,"title":"Milk","completed":false}"#.to_string(),
        };
        let item = client().parse_create_item(response).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.title, "Milk");
        assert!(!item.completed);
    }

    #[test]
    fn parse_create_item_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create_item(response).unwrap_err();
        assert!(matches!(err, SyncError::Status { status: 500, .. }));
    }

    #[test]
    fn parse_update_item_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":2,"title":"Go to the Store","completed":false}"#.to_string(),
        };
        let item = client().parse_update_item(response).unwrap();
        assert_eq!(item.id, 2);
        assert!(!item.completed);
    }

    #[test]
    fn parse_update_item_not_found_maps_to_status() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_update_item(response).unwrap_err();
        assert!(matches!(err, SyncError::Status { status: 404, .. }));
    }

    #[test]
    fn parse_list_items_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_items(response).unwrap_err();
        assert!(matches!(err, SyncError::Decode(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:3000/");
        let req = client.build_list_items();
        assert_eq!(req.path, "http://localhost:3000/api/to-dos");
    }
}

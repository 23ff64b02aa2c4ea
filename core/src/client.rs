//! Stateless HTTP request builder and response parser for one resource.
//!
//! # Design
//! `ResourceClient<E>` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; the transport in between is the caller's business.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::entity::Entity;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Request builder and response parser for the `E::RESOURCE` collection.
#[derive(Debug, Clone)]
pub struct ResourceClient<E> {
    base_url: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> ResourceClient<E> {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            _entity: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_path(&self) -> String {
        format!("{}/{}", self.base_url, E::RESOURCE)
    }

    fn item_path(&self, id: u64) -> String {
        format!("{}/{}/{id}", self.base_url, E::RESOURCE)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_path(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, item: &E) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_path(),
            headers: json_headers(),
            body: Some(to_json(item)?),
        })
    }

    pub fn build_update(&self, id: u64, item: &E) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_path(id),
            headers: json_headers(),
            body: Some(to_json(item)?),
        })
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<E>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<E, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<E, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<E, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    /// The body of a successful delete is ignored; the public API answers
    /// `{}` and others answer 204 with nothing.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<E: Entity>(item: &E) -> Result<String, ApiError> {
    serde_json::to_string(item).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Post, User};

    fn users() -> ResourceClient<User> {
        ResourceClient::new("http://localhost:3000")
    }

    fn posts() -> ResourceClient<Post> {
        ResourceClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = users().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/users");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());

        assert_eq!(posts().build_list().path, "http://localhost:3000/posts");
    }

    #[test]
    fn build_get_produces_correct_request() {
        let req = posts().build_get(12);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/posts/12");
    }

    #[test]
    fn build_create_produces_correct_request() {
        let req = users()
            .build_create(&User::new("Ada", "ada@example.com"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/users");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Ada");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_targets_item_path() {
        let post = Post::new(1, "New", "Text").with_id(3);
        let req = posts().build_update(3, &post).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/posts/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["title"], "New");
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = users().build_delete(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/users/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_preserves_order() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":3,"name":"C","email":"c@x"},{"id":1,"name":"A","email":"a@x"}]"#,
        );
        let list = users().parse_list(response).unwrap();
        let ids: Vec<_> = list.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1)]);
    }

    #[test]
    fn parse_create_accepts_201() {
        let response = HttpResponse::new(201, r#"{"id":11,"name":"New","email":"n@x"}"#);
        let user = users().parse_create(response).unwrap();
        assert_eq!(user.id, Some(11));
        assert_eq!(user.name, "New");
    }

    #[test]
    fn parse_create_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = users().parse_create(response).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                body: "internal error".to_string()
            }
        );
    }

    #[test]
    fn parse_get_not_found() {
        let err = posts().parse_get(HttpResponse::new(404, "{}")).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn parse_update_success() {
        let response = HttpResponse::new(200, r#"{"id":2,"postId":1,"title":"T","body":"B"}"#);
        let post = posts().parse_update(response).unwrap();
        assert_eq!(post.id, Some(2));
        assert_eq!(post.title, "T");
    }

    #[test]
    fn parse_delete_ignores_body() {
        assert!(users().parse_delete(HttpResponse::new(200, "{}")).is_ok());
        assert!(users().parse_delete(HttpResponse::new(204, "")).is_ok());
        assert_eq!(
            users().parse_delete(HttpResponse::new(404, "")).unwrap_err(),
            ApiError::NotFound
        );
    }

    #[test]
    fn parse_list_bad_json() {
        let err = users()
            .parse_list(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client: ResourceClient<User> = ResourceClient::new("http://localhost:3000//");
        assert_eq!(client.build_list().path, "http://localhost:3000/users");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}

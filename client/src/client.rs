//! Directory API client implementation

use futures::future::join_all;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::{Comment, NewTodo, Post, Todo, User, sort_by_id_desc};
use crate::api::DirectoryApi;

/// Base origin all relative paths resolve against.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Preconfigured REST client bound to one base origin.
///
/// No retries, no timeout configuration, no auth; a failed request surfaces
/// as a single [`ApiError`] to the caller.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryClient {
    /// Create a client against the default base origin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base origin.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// GET a relative path and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Self::decode(response).await
    }

    /// POST a JSON body to a relative path and decode the JSON response.
    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl DirectoryApi for DirectoryClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    async fn posts_with_comments(&self, user_id: u64) -> Result<Vec<Post>, ApiError> {
        let posts: Vec<Post> = self.get_json(&format!("/users/{user_id}/posts")).await?;

        // Enrich every post concurrently; the aggregate keeps the post order
        let enriched = join_all(posts.into_iter().map(|mut post| async move {
            match self
                .get_json::<Vec<Comment>>(&format!("/posts/{}/comments", post.id))
                .await
            {
                Ok(comments) => post.comments = comments,
                Err(error) => {
                    // Partial-failure isolation: the post survives with no comments
                    tracing::debug!(
                        post_id = post.id,
                        error = %error,
                        "comment fetch failed, keeping post without comments"
                    );
                    post.comments = Vec::new();
                },
            }
            post
        }))
        .await;

        Ok(enriched)
    }

    async fn todos_by_user(&self, user_id: u64) -> Result<Vec<Todo>, ApiError> {
        let mut todos: Vec<Todo> = self.get_json(&format!("/users/{user_id}/todos")).await?;
        sort_by_id_desc(&mut todos);
        Ok(todos)
    }

    async fn create_todo(&self, new_todo: NewTodo) -> Result<Todo, ApiError> {
        self.post_json("/todos", &new_todo).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DirectoryClient {
        DirectoryClient::with_base_url(server.uri())
    }

    #[test]
    fn base_url_is_normalized() {
        let client = DirectoryClient::with_base_url("http://localhost:3000///");
        assert_eq!(client.base_url, "http://localhost:3000");

        let client = DirectoryClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn list_users_decodes_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "name": "Ann",
                "username": "ann",
                "email": "ann@example.com",
                "phone": "1-770-736-8031",
                "website": "ann.example.com"
            }])))
            .mount(&server)
            .await;

        let users = client_for(&server).list_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Ann");
    }

    #[tokio::test]
    async fn list_users_maps_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let error = client_for(&server).list_users().await.unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 500, .. }));
        assert_eq!(error.to_string(), "Unexpected status 500: boom");
    }

    #[tokio::test]
    async fn transport_failures_reject_with_request_error() {
        // Nothing listens here; the connection is refused
        let client = DirectoryClient::with_base_url("http://127.0.0.1:9");
        let error = client.list_users().await.unwrap_err();
        assert!(matches!(error, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn posts_are_enriched_in_post_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/1/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 10, "title": "first", "body": "a"},
                {"id": 11, "title": "second", "body": "b"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/10/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 100, "name": "c1", "body": "hi"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/11/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 101, "name": "c2", "body": "yo"},
                {"id": 102, "name": "c3", "body": "sup"}
            ])))
            .mount(&server)
            .await;

        let posts = client_for(&server)
            .posts_with_comments(1)
            .await
            .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 10);
        assert_eq!(posts[0].comments.len(), 1);
        assert_eq!(posts[1].id, 11);
        assert_eq!(posts[1].comments.len(), 2);
    }

    #[tokio::test]
    async fn failed_comment_fetch_keeps_the_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/1/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 7, "title": "doomed comments", "body": "a"},
                {"id": 8, "title": "fine", "body": "b"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/7/comments"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/posts/8/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 80, "name": "c", "body": "ok"}
            ])))
            .mount(&server)
            .await;

        let posts = client_for(&server)
            .posts_with_comments(1)
            .await
            .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 7);
        assert!(posts[0].comments.is_empty());
        assert_eq!(posts[1].comments.len(), 1);
    }

    #[tokio::test]
    async fn failed_posts_fetch_rejects_the_operation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/1/posts"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .posts_with_comments(1)
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn todos_come_back_sorted_descending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/1/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 3, "userId": 1, "title": "c", "completed": false},
                {"id": 1, "userId": 1, "title": "a", "completed": true},
                {"id": 2, "userId": 1, "title": "b", "completed": false}
            ])))
            .mount(&server)
            .await;

        let todos = client_for(&server).todos_by_user(1).await.unwrap();
        let ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn create_todo_posts_payload_and_returns_record() {
        let server = MockServer::start().await;
        let payload = NewTodo {
            user_id: 1,
            title: "X".to_string(),
            completed: false,
        };
        Mock::given(method("POST"))
            .and(path("/todos"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 201,
                "userId": 1,
                "title": "X",
                "completed": false
            })))
            .mount(&server)
            .await;

        let todo = client_for(&server)
            .create_todo(payload)
            .await
            .unwrap();
        assert_eq!(todo.id, 201);
        assert_eq!(todo.user_id, 1);
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let error = client_for(&server).list_users().await.unwrap_err();
        assert!(matches!(error, ApiError::Decode(_)));
    }
}

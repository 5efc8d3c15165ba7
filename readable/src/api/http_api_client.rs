// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_trait::async_trait;
use miette::{IntoDiagnostic, WrapErr};
use reqwest::{Client, Method, RequestBuilder,
              header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE}};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{ApiErrorCouldNot,
            Category,
            Comment,
            CommentEdit,
            CommonResult,
            DEBUG_API_MOD,
            NewComment,
            NewPost,
            Post,
            PostEdit,
            ReadableApi,
            Vote};

use super::paths;

mod constants {
    pub const USER_AGENT: &str = "readable.rs/1.0";
    pub const APPLICATION_JSON: &str = "application/json";
}

/// [ReadableApi] over HTTP, talking JSON to a Readable server. Every request carries
/// the client token in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    token: String,
}

pub fn create_client_with_user_agent(user_agent: Option<&str>) -> CommonResult<Client> {
    let it = Client::builder()
        .user_agent(user_agent.map_or_else(
            || constants::USER_AGENT.to_owned(),
            |user_agent| user_agent.to_owned(),
        ))
        .build();
    it.into_diagnostic().wrap_err(ApiErrorCouldNot::BuildHttpClient)
}

impl HttpApiClient {
    pub fn try_new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> CommonResult<Self> {
        Ok(Self {
            client: create_client_with_user_agent(None)?,
            base_url: base_url.into(),
            token: token.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str { &self.base_url }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Request with all the headers the server expects already set.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header(AUTHORIZATION, &self.token)
            .header(ACCEPT, constants::APPLICATION_JSON)
            .header(CONTENT_TYPE, constants::APPLICATION_JSON)
    }

    async fn send(
        &self,
        request: RequestBuilder,
        could_not: ApiErrorCouldNot,
    ) -> CommonResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .into_diagnostic()
            .wrap_err(could_not.clone())?;

        // % is Display, ? is Debug.
        DEBUG_API_MOD.then(|| {
            tracing::debug!(
                message = "Response received",
                url = %response.url(),
                status = %response.status()
            );
        });

        response
            .error_for_status()
            .into_diagnostic()
            .wrap_err(could_not)
    }

    async fn send_and_parse<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        could_not: ApiErrorCouldNot,
    ) -> CommonResult<T> {
        self.send(request, could_not.clone())
            .await?
            .json::<T>()
            .await
            .into_diagnostic()
            .wrap_err(could_not)
    }
}

/// Wire shapes of the request and response bodies that don't map onto a model type.
pub mod wire {
    use super::{Category, Deserialize, NewComment, NewPost, Serialize, Vote};

    #[derive(Debug, Deserialize)]
    pub struct CategoriesResponse {
        pub categories: Vec<Category>,
    }

    #[derive(Debug, PartialEq, Serialize)]
    pub struct CreatePostBody<'a> {
        pub id: String,
        pub timestamp: i64,
        pub title: &'a str,
        pub body: &'a str,
        pub author: &'a str,
        pub category: &'a str,
    }

    #[derive(Debug, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreateCommentBody<'a> {
        pub id: String,
        pub timestamp: i64,
        pub body: &'a str,
        pub author: &'a str,
        pub parent_id: &'a str,
    }

    #[derive(Debug, PartialEq, Serialize)]
    pub struct VoteBody {
        pub option: Vote,
    }

    #[derive(Debug, PartialEq, Serialize)]
    pub struct UpdateCommentBody<'a> {
        pub timestamp: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub body: Option<&'a str>,
    }

    /// Ids are assigned by the client, before the create request is sent.
    #[must_use]
    pub fn generate_id() -> String { uuid::Uuid::new_v4().simple().to_string() }

    #[must_use]
    pub fn now_millis() -> i64 { chrono::Utc::now().timestamp_millis() }

    impl<'a> CreatePostBody<'a> {
        #[must_use]
        pub fn new(data: &'a NewPost, id: String, timestamp: i64) -> Self {
            Self {
                id,
                timestamp,
                title: &data.title,
                body: &data.body,
                author: &data.author,
                category: &data.category,
            }
        }
    }

    impl<'a> CreateCommentBody<'a> {
        #[must_use]
        pub fn new(
            post_id: &'a str,
            data: &'a NewComment,
            id: String,
            timestamp: i64,
        ) -> Self {
            Self {
                id,
                timestamp,
                body: &data.body,
                author: &data.author,
                parent_id: post_id,
            }
        }
    }
}

#[async_trait]
impl ReadableApi for HttpApiClient {
    async fn get_categories(&self) -> CommonResult<Vec<Category>> {
        let request = self.request(Method::GET, &paths::categories());
        let response: wire::CategoriesResponse = self
            .send_and_parse(request, ApiErrorCouldNot::FetchCategories)
            .await?;
        Ok(response.categories)
    }

    async fn get_posts(&self, maybe_category: Option<&str>) -> CommonResult<Vec<Post>> {
        let request = self.request(Method::GET, &paths::posts(maybe_category));
        self.send_and_parse(request, ApiErrorCouldNot::FetchPosts)
            .await
    }

    async fn get_post(&self, id: &str) -> CommonResult<Post> {
        let request = self.request(Method::GET, &paths::post(id));
        self.send_and_parse(request, ApiErrorCouldNot::FetchPost(id.into()))
            .await
    }

    async fn get_post_comments(&self, post_id: &str) -> CommonResult<Vec<Comment>> {
        let request = self.request(Method::GET, &paths::post_comments(post_id));
        self.send_and_parse(request, ApiErrorCouldNot::FetchComments(post_id.into()))
            .await
    }

    async fn get_comment(&self, id: &str) -> CommonResult<Comment> {
        let request = self.request(Method::GET, &paths::comment(id));
        self.send_and_parse(request, ApiErrorCouldNot::FetchComment(id.into()))
            .await
    }

    async fn create_post(&self, data: &NewPost) -> CommonResult<Post> {
        let body = wire::CreatePostBody::new(data, wire::generate_id(), wire::now_millis());
        let request = self.request(Method::POST, &paths::posts(None)).json(&body);
        self.send_and_parse(request, ApiErrorCouldNot::CreatePost)
            .await
    }

    async fn create_comment(
        &self,
        post_id: &str,
        data: &NewComment,
    ) -> CommonResult<Comment> {
        let body = wire::CreateCommentBody::new(
            post_id,
            data,
            wire::generate_id(),
            wire::now_millis(),
        );
        let request = self.request(Method::POST, &paths::comments()).json(&body);
        self.send_and_parse(request, ApiErrorCouldNot::CreateComment(post_id.into()))
            .await
    }

    async fn vote_on_post(&self, id: &str, vote: Vote) -> CommonResult<Post> {
        let request = self
            .request(Method::POST, &paths::post(id))
            .json(&wire::VoteBody { option: vote });
        self.send_and_parse(request, ApiErrorCouldNot::VoteOnPost(id.into()))
            .await
    }

    async fn vote_on_comment(&self, id: &str, vote: Vote) -> CommonResult<Comment> {
        let request = self
            .request(Method::POST, &paths::comment(id))
            .json(&wire::VoteBody { option: vote });
        self.send_and_parse(request, ApiErrorCouldNot::VoteOnComment(id.into()))
            .await
    }

    async fn update_post(&self, id: &str, data: &PostEdit) -> CommonResult<Post> {
        let request = self.request(Method::PUT, &paths::post(id)).json(data);
        self.send_and_parse(request, ApiErrorCouldNot::UpdatePost(id.into()))
            .await
    }

    async fn update_comment(&self, id: &str, data: &CommentEdit) -> CommonResult<Comment> {
        let body = wire::UpdateCommentBody {
            timestamp: wire::now_millis(),
            body: data.body.as_deref(),
        };
        let request = self.request(Method::PUT, &paths::comment(id)).json(&body);
        self.send_and_parse(request, ApiErrorCouldNot::UpdateComment(id.into()))
            .await
    }

    async fn delete_post(&self, id: &str) -> CommonResult<()> {
        let request = self.request(Method::DELETE, &paths::post(id));
        self.send(request, ApiErrorCouldNot::DeletePost(id.into()))
            .await
            .map(|_| ())
    }

    async fn delete_comment(&self, id: &str) -> CommonResult<()> {
        let request = self.request(Method::DELETE, &paths::comment(id));
        self.send(request, ApiErrorCouldNot::DeleteComment(id.into()))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> HttpApiClient {
        HttpApiClient::try_new("http://localhost:3001/", "abcd1234").unwrap()
    }

    #[test]
    fn test_every_request_carries_token_and_json_headers() {
        let request = client()
            .request(Method::GET, &paths::posts(Some("redux")))
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "http://localhost:3001/redux/posts");
        assert_eq!(request.headers()[AUTHORIZATION], "abcd1234");
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_vote_body() {
        let request = client()
            .request(Method::POST, &paths::post("p1"))
            .json(&wire::VoteBody { option: Vote::Down })
            .build()
            .unwrap();
        let body = request.body().and_then(|it| it.as_bytes()).unwrap();
        assert_eq!(body, br#"{"option":"downVote"}"#);
    }

    #[test]
    fn test_create_comment_body_has_client_assigned_fields() {
        let data = NewComment {
            body: "hi".into(),
            author: "thingone".into(),
        };
        let body = wire::CreateCommentBody::new("p1", &data, "c9".into(), 1_467_166_872_634);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "id": "c9",
                "timestamp": 1_467_166_872_634_i64,
                "body": "hi",
                "author": "thingone",
                "parentId": "p1",
            })
        );
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(wire::generate_id(), wire::generate_id());
    }

    #[test]
    fn test_categories_response_shape() {
        let json = r#"{"categories":[{"name":"react","path":"react"},{"name":"udacity","path":"udacity"}]}"#;
        let response: wire::CategoriesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.categories.len(), 2);
        assert_eq!(response.categories[1].path, "udacity");
    }
}

//! HTTP API Client
//!
//! `gloo-net` implementation of [`FitnessApi`] talking to the backend the
//! page was served from.

use async_trait::async_trait;
use fitlog::api::{
    bearer, endpoint, rejection, workout_path, FitnessApi, DEFAULT_API_BASE, LOGIN_PATH,
    REGISTER_PATH, WORKOUTS_PATH,
};
use fitlog::models::{LoginRequest, NewWorkout, RegisterRequest, Session, Workout};
use fitlog::{FitlogError, FitlogResult};
use gloo_net::http::{Request, RequestBuilder, Response};

/// localStorage key overriding the API base
const API_BASE_KEY: &str = "fitlog_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fitness API client over the browser fetch API
#[derive(Debug, Clone)]
pub struct GlooApiClient {
    base_url: String,
}

impl Default for GlooApiClient {
    fn default() -> Self {
        Self::new(get_api_base())
    }
}

impl GlooApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }
}

fn network_error(e: gloo_net::Error) -> FitlogError {
    FitlogError::Network(e.to_string())
}

fn parse_error(e: gloo_net::Error) -> FitlogError {
    FitlogError::Parse(e.to_string())
}

/// Send and turn non-success statuses into [`FitlogError::Rejected`]
async fn execute(request: Request) -> FitlogResult<Response> {
    let response = request.send().await.map_err(network_error)?;

    if response.ok() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(rejection(response.status(), &body))
    }
}

async fn post_json<T: serde::Serialize>(
    builder: RequestBuilder,
    body: &T,
) -> FitlogResult<Response> {
    let request = builder
        .json(body)
        .map_err(|e| FitlogError::Config(format!("Request build error: {}", e)))?;
    execute(request).await
}

fn build(builder: RequestBuilder) -> FitlogResult<Request> {
    builder
        .build()
        .map_err(|e| FitlogError::Config(format!("Request build error: {}", e)))
}

#[async_trait(?Send)]
impl FitnessApi for GlooApiClient {
    async fn register(&self, request: &RegisterRequest) -> FitlogResult<Session> {
        let response = post_json(Request::post(&self.url(REGISTER_PATH)), request).await?;
        response.json().await.map_err(parse_error)
    }

    async fn login(&self, request: &LoginRequest) -> FitlogResult<Session> {
        let response = post_json(Request::post(&self.url(LOGIN_PATH)), request).await?;
        response.json().await.map_err(parse_error)
    }

    async fn list_workouts(&self, token: &str) -> FitlogResult<Vec<Workout>> {
        let request = build(
            Request::get(&self.url(WORKOUTS_PATH)).header("Authorization", &bearer(token)),
        )?;
        let response = execute(request).await?;
        response.json().await.map_err(parse_error)
    }

    async fn create_workout(
        &self,
        token: &str,
        workout: &NewWorkout,
    ) -> FitlogResult<Option<Workout>> {
        let response = post_json(
            Request::post(&self.url(WORKOUTS_PATH)).header("Authorization", &bearer(token)),
            workout,
        )
        .await?;

        let body: serde_json::Value = response.json().await.map_err(parse_error)?;
        Ok(serde_json::from_value(body).ok())
    }

    async fn delete_workout(&self, token: &str, id: &str) -> FitlogResult<()> {
        let request = build(
            Request::delete(&self.url(&workout_path(id))).header("Authorization", &bearer(token)),
        )?;
        execute(request).await?;
        Ok(())
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::{CourseDto, CourseRecord};

#[derive(Clone, Debug)]
pub struct CourseApiConfig {
    pub base_url: String,
    pub api_token: Option<String>,
}

#[async_trait]
pub trait CourseApi: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<CourseRecord>, AppError>;
    async fn fetch_instructor_courses(&self) -> Result<Vec<CourseDto>, AppError>;
}

pub struct HttpCourseApi {
    client: Client,
    config: CourseApiConfig,
}

impl HttpCourseApi {
    pub fn new(config: CourseApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.config.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Upstream(format!("GET {} returned {}: {}", url, status, body)));
        }

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse {}: {}", url, e);
            AppError::Upstream(format!("Failed to parse response from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn fetch_courses(&self) -> Result<Vec<CourseRecord>, AppError> {
        self.get_json("courses").await
    }

    async fn fetch_instructor_courses(&self) -> Result<Vec<CourseDto>, AppError> {
        self.get_json("instructor/courses").await
    }
}

/// Stand-in used when no backend is configured.
pub struct NoopCourseApi;

#[async_trait]
impl CourseApi for NoopCourseApi {
    async fn fetch_courses(&self) -> Result<Vec<CourseRecord>, AppError> {
        Ok(Vec::new())
    }

    async fn fetch_instructor_courses(&self) -> Result<Vec<CourseDto>, AppError> {
        Ok(Vec::new())
    }
}

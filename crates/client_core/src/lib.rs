use std::collections::BTreeMap;

use anyhow::{anyhow, ensure, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{CategoryId, Question, QuestionId},
    error::{ApiError, ApiException},
    protocol::{
        CategoriesResponse, CreateQuestionResponse, DeleteQuestionResponse, NewQuestion,
        QuestionPage, QuizCategory, QuizRequest, QuizResponse, SearchRequest,
    },
};
use tracing::debug;
use url::Url;

pub mod controller;
pub mod error;
pub mod view;

pub use controller::{
    reducer::PageRequest,
    state::{FilterMode, ViewState},
    Outcome, QuestionListController, DELETE_PROMPT,
};
pub use error::{QueryError, QUERY_FAILED_MESSAGE};
pub use view::{pagination, Confirm, NullRenderer, PageLink, Renderer};

/// Backend boundary consumed by [`QuestionListController`].
#[async_trait]
pub trait QuestionService: Send + Sync {
    async fn list_questions(&self, page: u32) -> Result<QuestionPage>;
    async fn questions_by_category(&self, category: &CategoryId, page: u32)
        -> Result<QuestionPage>;
    async fn search_questions(&self, term: &str, page: u32) -> Result<QuestionPage>;
    async fn delete_question(&self, id: QuestionId) -> Result<()>;
}

/// reqwest-backed client for the trivia REST API.
#[derive(Clone)]
pub struct HttpQuestionService {
    http: Client,
    base_url: Url,
    server_url: String,
}

impl HttpQuestionService {
    pub fn new(server_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self> {
        let parsed =
            Url::parse(server_url).with_context(|| format!("invalid server url '{server_url}'"))?;
        ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "server url '{server_url}' must use http or https"
        );
        Ok(Self {
            http,
            server_url: parsed.as_str().trim_end_matches('/').to_string(),
            base_url: parsed,
        })
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Appends `segments` to the base url, percent-encoding each one so ids
    /// cannot introduce extra path segments or a query string.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("server url '{}' cannot carry a path", self.server_url))?
            .pop_if_empty()
            .extend(segments.iter().copied());
        Ok(url)
    }

    pub async fn list_categories(&self) -> Result<BTreeMap<CategoryId, String>> {
        let response = self
            .http
            .get(self.endpoint(&["categories"])?)
            .send()
            .await?;
        let body: CategoriesResponse = decode(response).await?;
        ensure!(body.success, "backend rejected category listing");
        Ok(body.categories)
    }

    pub async fn create_question(&self, question: &NewQuestion) -> Result<QuestionId> {
        let response = self
            .http
            .post(self.endpoint(&["questions"])?)
            .json(question)
            .send()
            .await?;
        let body: CreateQuestionResponse = decode(response).await?;
        ensure!(body.success, "backend rejected new question");
        Ok(body.created)
    }

    /// Random question from `category` (all categories when `None`) that is
    /// not in `previous`. `Ok(None)` once the pool is exhausted.
    pub async fn next_quiz_question(
        &self,
        previous: &[QuestionId],
        category: Option<&CategoryId>,
    ) -> Result<Option<Question>> {
        let quiz_category = match category {
            Some(id) => QuizCategory {
                id: id
                    .as_number()
                    .with_context(|| format!("quiz category '{id}' is not numeric"))?,
                kind: String::new(),
            },
            None => QuizCategory::all(),
        };
        let response = self
            .http
            .post(self.endpoint(&["quizzes"])?)
            .json(&QuizRequest {
                previous_questions: previous.to_vec(),
                quiz_category,
            })
            .send()
            .await?;
        // The backend answers 404 when no unseen question remains.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body: QuizResponse = decode(response).await?;
        ensure!(body.success, "backend rejected quiz request");
        Ok(body.question)
    }
}

#[async_trait]
impl QuestionService for HttpQuestionService {
    async fn list_questions(&self, page: u32) -> Result<QuestionPage> {
        debug!(page, "requesting question listing");
        let response = self
            .http
            .get(self.endpoint(&["questions"])?)
            .query(&[("page", page)])
            .send()
            .await?;
        checked_page(decode(response).await?)
    }

    async fn questions_by_category(
        &self,
        category: &CategoryId,
        page: u32,
    ) -> Result<QuestionPage> {
        debug!(%category, page, "requesting category listing");
        let response = self
            .http
            .get(self.endpoint(&["categories", category.as_str(), "questions"])?)
            .query(&[("page", page)])
            .send()
            .await?;
        checked_page(decode(response).await?)
    }

    async fn search_questions(&self, term: &str, page: u32) -> Result<QuestionPage> {
        debug!(term, page, "requesting search results");
        let response = self
            .http
            .post(self.endpoint(&["search"])?)
            .json(&SearchRequest {
                search_term: term.to_string(),
                page,
            })
            .send()
            .await?;
        checked_page(decode(response).await?)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<()> {
        debug!(question_id = %id, "requesting question deletion");
        let response = self
            .http
            .delete(self.endpoint(&["questions", id.to_string().as_str()])?)
            .send()
            .await?;
        let body: DeleteQuestionResponse = decode(response).await?;
        ensure!(body.success, "backend rejected deletion of question {id}");
        Ok(())
    }
}

fn checked_page(page: QuestionPage) -> Result<QuestionPage> {
    ensure!(page.success, "backend reported an unsuccessful listing");
    Ok(page)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let exception = serde_json::from_str::<ApiError>(&body)
            .map(ApiException::from)
            .unwrap_or_else(|_| {
                ApiException::new(
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("request failed"),
                )
            });
        return Err(exception.into());
    }
    response
        .json()
        .await
        .context("failed to decode backend response")
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

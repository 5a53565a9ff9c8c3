//! Question list controller: owns the view state, issues queries through the
//! injected service and fences out stale responses.

pub mod reducer;
pub mod state;

use std::sync::Arc;

use shared::{
    domain::{CategoryId, QuestionId},
    protocol::QuestionPage,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    error::{QueryError, QUERY_FAILED_MESSAGE},
    view::{pagination, Confirm, NullRenderer, PageLink, Renderer},
    QuestionService,
};
use reducer::PageRequest;
use state::{FilterMode, ViewState};

pub const DELETE_PROMPT: &str = "are you sure you want to delete the question?";

/// What happened to an operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was folded into the view state.
    Applied,
    /// A newer query was issued before this one resolved; its response was dropped.
    Superseded,
    /// The confirmation gate said no; nothing was sent.
    Declined,
}

struct ControllerState {
    view: ViewState,
    generation: u64,
}

impl ControllerState {
    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

pub struct QuestionListController {
    service: Arc<dyn QuestionService>,
    renderer: Arc<dyn Renderer>,
    inner: Mutex<ControllerState>,
}

impl QuestionListController {
    pub fn new(service: Arc<dyn QuestionService>) -> Self {
        Self::new_with_renderer(service, Arc::new(NullRenderer))
    }

    pub fn new_with_renderer(
        service: Arc<dyn QuestionService>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            service,
            renderer,
            inner: Mutex::new(ControllerState {
                view: ViewState::default(),
                generation: 0,
            }),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.inner.lock().await.view.clone()
    }

    pub async fn filter(&self) -> FilterMode {
        self.inner.lock().await.view.filter
    }

    pub async fn page_count(&self) -> u64 {
        self.inner.lock().await.view.page_count()
    }

    pub async fn pagination(&self) -> Vec<PageLink> {
        pagination(&self.inner.lock().await.view)
    }

    /// Records the search box contents without querying.
    pub async fn set_query(&self, term: &str) {
        let mut guard = self.inner.lock().await;
        guard.view = reducer::set_query(&guard.view, term);
    }

    pub async fn load_all(&self, page: u32) -> Result<Outcome, QueryError> {
        self.run(PageRequest::all(page)).await
    }

    pub async fn load_by_category(
        &self,
        category: CategoryId,
        page: u32,
    ) -> Result<Outcome, QueryError> {
        self.run(PageRequest::category(category, page)).await
    }

    pub async fn search(&self, term: &str, page: u32) -> Result<Outcome, QueryError> {
        self.run(PageRequest::search(term, page)).await
    }

    /// Moves to `page` and re-issues whichever query the active filter names.
    pub async fn select_page(&self, page: u32) -> Result<Outcome, QueryError> {
        let request = {
            let mut guard = self.inner.lock().await;
            let (view, request) = reducer::select_page(&guard.view, page);
            guard.view = view;
            request
        };
        self.run(request).await
    }

    /// Deletes `id` once `confirm` agrees, then reloads the first page of all
    /// questions whatever filter was active.
    pub async fn delete_question(
        &self,
        id: QuestionId,
        confirm: &dyn Confirm,
    ) -> Result<Outcome, QueryError> {
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(question_id = %id, "deletion declined");
            return Ok(Outcome::Declined);
        }

        if let Err(source) = self.service.delete_question(id).await {
            warn!(question_id = %id, error = %source, "question deletion failed");
            self.renderer.alert(QUERY_FAILED_MESSAGE);
            return Err(QueryError::QueryFailed { source });
        }
        info!(question_id = %id, "question deleted");

        self.load_all(1).await
    }

    async fn run(&self, request: PageRequest) -> Result<Outcome, QueryError> {
        let generation = self.inner.lock().await.next_generation();
        debug!(generation, ?request, "issuing question query");

        let result = self.fetch(&request).await;

        let mut guard = self.inner.lock().await;
        if guard.generation != generation {
            debug!(
                generation,
                latest = guard.generation,
                "dropping response of superseded query"
            );
            return Ok(Outcome::Superseded);
        }

        match result {
            Ok(response) => {
                guard.view = reducer::apply_response(&guard.view, &request, response);
                self.renderer.render(&guard.view);
                Ok(Outcome::Applied)
            }
            Err(source) => {
                warn!(generation, ?request, error = %source, "question query failed");
                self.renderer.alert(QUERY_FAILED_MESSAGE);
                Err(QueryError::QueryFailed { source })
            }
        }
    }

    async fn fetch(&self, request: &PageRequest) -> anyhow::Result<QuestionPage> {
        match request {
            PageRequest::All { page } => self.service.list_questions(*page).await,
            PageRequest::Category { category, page } => {
                self.service.questions_by_category(category, *page).await
            }
            PageRequest::Search { term, page } => {
                self.service.search_questions(term, *page).await
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;

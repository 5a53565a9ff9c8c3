//! Pure state transitions. Each function takes the current snapshot and
//! returns the next one; nothing here touches the network.

use shared::{domain::CategoryId, protocol::QuestionPage};

use super::state::{FilterMode, ViewState};

/// A query as issued to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    All { page: u32 },
    Category { category: CategoryId, page: u32 },
    Search { term: String, page: u32 },
}

impl PageRequest {
    pub fn all(page: u32) -> Self {
        Self::All { page: page.max(1) }
    }

    pub fn category(category: CategoryId, page: u32) -> Self {
        Self::Category {
            category,
            page: page.max(1),
        }
    }

    pub fn search(term: impl Into<String>, page: u32) -> Self {
        Self::Search {
            term: term.into(),
            page: page.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            Self::All { page } | Self::Category { page, .. } | Self::Search { page, .. } => *page,
        }
    }

    pub fn filter(&self) -> FilterMode {
        match self {
            Self::All { .. } => FilterMode::All,
            Self::Category { .. } => FilterMode::Category,
            Self::Search { .. } => FilterMode::Search,
        }
    }
}

/// Moves to `page` and derives the request the active filter calls for.
pub fn select_page(state: &ViewState, page: u32) -> (ViewState, PageRequest) {
    let page = page.max(1);
    let request = match (state.filter, &state.current_category) {
        (FilterMode::All, _) | (FilterMode::Category, None) => PageRequest::all(page),
        (FilterMode::Category, Some(category)) => PageRequest::category(category.clone(), page),
        (FilterMode::Search, _) => PageRequest::search(state.query.clone(), page),
    };
    let next = ViewState {
        page,
        ..state.clone()
    };
    (next, request)
}

pub fn set_query(state: &ViewState, term: &str) -> ViewState {
    ViewState {
        query: term.to_string(),
        ..state.clone()
    }
}

/// Folds a successful response for `request` into `state`.
pub fn apply_response(
    state: &ViewState,
    request: &PageRequest,
    response: QuestionPage,
) -> ViewState {
    let total_questions = response.total_or_len();
    let QuestionPage {
        questions,
        categories,
        current_category,
        ..
    } = response;
    let mut next = ViewState {
        questions,
        total_questions,
        ..state.clone()
    };

    match request {
        PageRequest::All { page } => {
            if let Some(categories) = categories {
                next.categories = categories;
            }
            next.current_category = current_category;
            next.filter = FilterMode::All;
            next.page = *page;
        }
        PageRequest::Category { category, page } => {
            // The category endpoint does not echo its id back.
            next.current_category = current_category.or_else(|| Some(category.clone()));
            next.filter = FilterMode::Category;
            next.page = *page;
        }
        PageRequest::Search { term, page } => {
            next.current_category = current_category;
            next.query = term.clone();
            if state.filter == FilterMode::Search {
                next.page = *page;
            } else {
                next.filter = FilterMode::Search;
                next.page = 1;
            }
        }
    }

    next
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;

use std::collections::BTreeMap;

use shared::{
    domain::{CategoryId, Question},
    PAGE_SIZE,
};

/// Which query kind governs page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Search,
    Category,
}

/// Everything the question list displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub questions: Vec<Question>,
    /// 1-based.
    pub page: u32,
    pub total_questions: u64,
    pub categories: BTreeMap<CategoryId, String>,
    pub current_category: Option<CategoryId>,
    pub filter: FilterMode,
    pub query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            page: 1,
            total_questions: 0,
            categories: BTreeMap::new(),
            current_category: None,
            filter: FilterMode::All,
            query: String::new(),
        }
    }
}

impl ViewState {
    pub fn page_count(&self) -> u64 {
        self.total_questions.div_ceil(PAGE_SIZE)
    }

    pub fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.categories.get(id).map(String::as_str)
    }
}

//! Presentation-side capabilities injected into the controller.

use crate::controller::state::ViewState;

/// Rendering boundary. `render` receives the new snapshot after every applied
/// transition; `alert` receives the user-facing failure text.
pub trait Renderer: Send + Sync {
    fn render(&self, state: &ViewState);
    fn alert(&self, message: &str);
}

pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _state: &ViewState) {}

    fn alert(&self, _message: &str) {}
}

/// Yes/no gate consulted before destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub active: bool,
}

/// Most page links [`pagination`] ever produces.
pub const MAX_PAGE_LINKS: u32 = 100;

/// One link per page in `1..=page_count`, the current page marked active.
/// Past [`MAX_PAGE_LINKS`] pages only a window around the current page is
/// listed.
pub fn pagination(state: &ViewState) -> Vec<PageLink> {
    let last = u32::try_from(state.page_count()).unwrap_or(u32::MAX);
    let span = last.min(MAX_PAGE_LINKS);
    if span == 0 {
        return Vec::new();
    }
    let first = state
        .page
        .saturating_sub(span / 2)
        .clamp(1, last - span + 1);
    (first..=first + (span - 1))
        .map(|number| PageLink {
            number,
            active: number == state.page,
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;

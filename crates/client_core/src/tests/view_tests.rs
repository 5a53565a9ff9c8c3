use super::*;

fn state_with(total_questions: u64, page: u32) -> ViewState {
    ViewState {
        total_questions,
        page,
        ..ViewState::default()
    }
}

fn numbers(links: &[PageLink]) -> Vec<u32> {
    links.iter().map(|link| link.number).collect()
}

#[test]
fn lists_every_page_for_small_totals() {
    let links = pagination(&state_with(23, 2));
    assert_eq!(numbers(&links), vec![1, 2, 3]);
    assert_eq!(links.iter().filter(|link| link.active).count(), 1);
    assert!(links[1].active);
}

#[test]
fn no_links_without_questions() {
    assert!(pagination(&state_with(0, 1)).is_empty());
}

#[test]
fn huge_totals_are_windowed() {
    let links = pagination(&state_with(u64::MAX, 1));
    assert_eq!(links.len(), MAX_PAGE_LINKS as usize);
    assert_eq!(links.first().map(|link| link.number), Some(1));
    assert!(links[0].active);

    let links = pagination(&state_with(u64::MAX, 5_000));
    assert_eq!(links.len(), MAX_PAGE_LINKS as usize);
    assert_eq!(links.first().map(|link| link.number), Some(4_950));
    assert!(links.iter().any(|link| link.active && link.number == 5_000));
}

#[test]
fn window_stops_at_last_page() {
    // 250 pages.
    let links = pagination(&state_with(2_500, 249));
    assert_eq!(links.len(), MAX_PAGE_LINKS as usize);
    assert_eq!(links.last().map(|link| link.number), Some(250));
    assert_eq!(links.first().map(|link| link.number), Some(151));
}

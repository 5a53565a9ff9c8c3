pub mod domain;
pub mod error;
pub mod protocol;

/// Fixed number of questions the backend returns per page.
pub const PAGE_SIZE: u64 = 10;

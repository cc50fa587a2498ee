mod error;
mod operations;
mod requests;
mod types;

pub use error::BookmarkError;
pub use operations::{plan_update, Enrichment, UpdatePlan};
pub use requests::{BookmarkDraft, CreateBookmarkRequest, UpdateBookmarkRequest};
pub use types::{Bookmark, NewBookmark};

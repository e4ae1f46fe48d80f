//! Collaborators the table of contents renderer talks to: where page text
//! comes from, how outlines are extracted, which pages exist and which ones
//! may be shown.

mod access;
mod catalog;
mod extractor;
mod store;

pub use access::{AccessControl, AllowAll, DenyList};
pub use catalog::PageCatalog;
pub use extractor::{HeadingExtractor, WikiHeadingExtractor};
pub use store::{ContentStore, FsContentStore, MemoryStore, PageText};

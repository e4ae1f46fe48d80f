//! Table-of-contents rendering for wiki-style pages.
//!
//! The heart of the crate is [`toc::outline_tree`], which folds a flat,
//! depth-annotated heading outline into a nested list tree. The [`render`]
//! module drives it over a set of pages through the collaborators in [`wiki`].

pub mod cli;
pub mod config;
pub mod layout;
pub mod render;
pub mod toc;
pub mod utils;
pub mod wiki;

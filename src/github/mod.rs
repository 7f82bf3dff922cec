//! Repository metadata fetching.

pub mod client;
pub mod metadata;
pub mod reference;

pub use client::GitHubClient;
pub use metadata::{ApiResult, ProjectMetadata, commit_author_date};
pub use reference::RepoReference;

//! Release version collection and ordering
//!
//! This module fetches a project's releases listing page by page, extracts the
//! version of every release and orders them from highest to lowest.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│  Extractor  │────▶│  Releases   │
//! │   (pages)   │     │ (HTML scan) │     │ (paginate)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Compare   │
//!                                         │ (sort, cmp) │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`compare`]: Version ordering and descending sort
//! - [`decompose`]: Splits a version into numeric segments and pre-release marker
//! - [`error`]: Error types for fetching, scraping and version parsing
//! - [`extractor`]: Version extraction from a releases page
//! - [`fetcher`]: Page fetcher trait
//! - [`fetchers`]: Concrete fetcher implementations (HTTP)
//! - [`releases`]: Pagination loop and latest-version queries

pub mod compare;
pub mod decompose;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod fetchers;
pub mod releases;

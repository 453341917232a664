//! Cafetin client core.
//!
//! Client-side state layer for a campus café ordering app: the cart store,
//! the pre-submission validation pipeline and the order submission workflow,
//! backed by the remote café API and device-local persistence.

pub mod api;
pub mod config;
pub mod context;
pub mod domain;
pub mod storage;

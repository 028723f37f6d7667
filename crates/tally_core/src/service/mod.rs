//! Core use-case services.
//!
//! # Responsibility
//! - Track form drafts, validate them and commit records.
//! - Derive filtered views and hold the active notification.
//! - Expose event-driven flows so presentation layers stay thin.

pub mod flow;
pub mod form;
pub mod notification;
pub mod submission;
pub mod validator;
pub mod view_filter;

//! `bistro-ai`
//!
//! **Responsibility:** AI-assist capability boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the inventory domain crate.
//! - It must not mutate domain state.
//! - It supplies suggested content; callers decide what to do with it.
//!
//! The dashboard treats providers as opaque suppliers of content with no
//! contract beyond "eventually returns or errors". Consumers receive an
//! implementation of [`ContentAssist`] by injection and never construct a
//! concrete provider themselves.

pub mod assist;
pub mod canned;

pub use assist::{AssistError, ContentAssist};
pub use canned::CannedAssist;

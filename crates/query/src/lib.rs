//! Textvault query layer.
//!
//! Two ways to ask for stored strings:
//!
//! - **Structured filters** ([`StringFilters`]): a typed set of optional
//!   predicates (palindrome flag, length bounds, word count, character
//!   containment) evaluated conjunctively over a store snapshot.
//! - **Natural language** ([`translate`], [`QueryEngine::search`]): a small
//!   closed set of recognized phrasings translated into structured filters by
//!   an ordered rule table, first match wins. Anything unrecognized or
//!   self-contradictory is rejected, never guessed at.
//!
//! The [`QueryEngine`] binds both to a shared [`TextStore`](store::TextStore)
//! handle and returns matching records together with an auditable
//! interpretation of what was asked.

mod engine;
mod filters;
mod translate;

pub use crate::engine::{Interpretation, QueryEngine, SearchMatches};
pub use crate::filters::{FilterError, RawFilterParams, StringFilters};
pub use crate::translate::{translate, QueryError};

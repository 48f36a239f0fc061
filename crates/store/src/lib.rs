//! Textvault content store.
//!
//! This crate holds the canonical record type, [`AnalyzedString`], and the
//! [`TextStore`] that keeps records keyed by their SHA-256 content hash. The
//! hash is the record's identity, so equal values always collide to the same
//! key and the store enforces at most one record per distinct content.
//!
//! ## Storage contract
//!
//! - [`TextStore::insert`] is atomic: the existence check and the insert run
//!   under one write lock, so two concurrent insertions of identical content
//!   cannot both succeed.
//! - [`TextStore::delete_by_value`] re-derives the hash from the supplied
//!   value; callers never address records by id for deletion.
//! - [`TextStore::all`] returns a snapshot taken under the read lock;
//!   enumeration order is unspecified.
//! - Records are read-only once stored. There is no update operation.

mod record;
mod store;

pub use crate::record::AnalyzedString;
pub use crate::store::{StoreError, TextStore};

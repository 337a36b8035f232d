//! Sub-document path resolution and connection string normalization for
//! document database clients.
//!
//! Two independent, purely computational pipelines live here. Neither does
//! any I/O; both are plain functions of their string and tree inputs.
//!
//! ## Sub-document paths
//!
//! A path like `addresses[0].city` addresses one nested location inside a
//! JSON document. [`lexer::tokenize`] compiles the path into typed segments,
//! and [`resolve::get`] / [`resolve::insert`] walk a [`serde_json::Value`]
//! tree with them, creating missing intermediate containers on insert.
//!
//! ```
//! use docaddr::errors::PathError;
//! use docaddr::lexer::tokenize;
//! use docaddr::resolve;
//! use serde_json::json;
//!
//! fn main() -> Result<(), PathError> {
//!     let path = tokenize("addresses[0].city");
//!
//!     let doc = resolve::insert(json!({}), &path, json!("Valletta"))?;
//!     assert_eq!(doc, json!({"addresses": [{"city": "Valletta"}]}));
//!
//!     assert_eq!(resolve::get(&doc, &path)?, Some(&json!("Valletta")));
//!     Ok(())
//! }
//! ```
//!
//! Structural disagreement between a segment and the value it addresses is
//! the only failure mode. Missing keys and out-of-range indexes are not
//! errors; they resolve to `Ok(None)`.
//!
//! ```
//! use docaddr::resolve;
//! use serde_json::json;
//!
//! let doc = json!({"tags": ["a", "b"]});
//!
//! // An index segment against an object is a type mismatch.
//! assert!(resolve::get_path(&doc, "tags.first").is_err());
//!
//! // An out-of-range index is merely absent.
//! assert_eq!(resolve::get_path(&doc, "tags[9]"), Ok(None));
//! ```
//!
//! ## Connection strings
//!
//! [`connstr::ConnSpec`] parses a cluster connection string of the shape
//! `(<scheme>://)?<hostlist>(/<bucket>)?(?<options>)?`, fills in defaults,
//! and serializes back to canonical form. [`connstr::normalize_str`] composes
//! the three steps and is idempotent.
//!
//! ```
//! use docaddr::connstr;
//!
//! let canonical = connstr::normalize_str("db1.example.com,db2.example.com:8091/travel");
//! assert_eq!(canonical, "couchbase://db1.example.com,db2.example.com:8091/travel");
//! assert_eq!(connstr::normalize_str(&canonical), canonical);
//! ```
pub mod connstr;
pub mod errors;
pub mod lexer;
pub mod resolve;
mod token;

pub use connstr::ConnSpec;
pub use errors::PathError;
pub use errors::PathErrorType;
pub use token::PathSegment;

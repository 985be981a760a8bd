//! URL classification, resolution, and in-place rewriting for OpenAPI
//! documents.
//!
//! This layer works on the plain (untyped) document representation, a
//! [`serde_json::Value`] tree, which is the shape documents have before or
//! instead of typed building, and the only shape the rewriter mutates. The
//! typed AST stays immutable.
//!
//! # Example
//!
//! ```
//! use oas_rewrite::{find_relative_urls, rewrite_urls_inplace, RewriteOptions};
//!
//! let mut doc = oas_rewrite::from_yaml(
//!     "openapi: 3.1.0\nexternalDocs:\n  url: docs/api.html\n",
//! )
//! .unwrap();
//!
//! assert_eq!(find_relative_urls(&doc, false).len(), 1);
//!
//! let changed = rewrite_urls_inplace(&mut doc, &RewriteOptions::new("https://example.com/"));
//! assert_eq!(changed, 1);
//! assert_eq!(doc["externalDocs"]["url"], "https://example.com/docs/api.html");
//! ```

#![warn(missing_docs)]

mod find;
mod rewrite;
mod uri;

pub use self::{
    find::{find_absolute_http_urls, find_relative_urls, FoundUrl, Segment, URL_KEYS},
    rewrite::{rewrite_urls_inplace, set_or_replace_top_level_json_id, RewriteOptions},
    uri::{
        classify, is_absolute_uri, is_fragment_only_uri, is_path, is_scheme_relative_uri,
        resolve_to_absolute, UriKind, UriResolutionError,
    },
};

/// Load a YAML (or JSON) document into the plain representation this crate
/// operates on.
pub fn from_yaml(text: &str) -> Result<serde_json::Value, serde_yml::Error> {
    serde_yml::from_str(text)
}

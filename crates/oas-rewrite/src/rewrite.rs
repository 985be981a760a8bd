//! In-place rewriting of URL references in a plain document.

use log::debug;
use serde_json::Value;
use url::Url;

use crate::{
    find::is_url_key,
    uri::{classify, UriKind},
};

/// How [`rewrite_urls_inplace`] should rebase references.
#[derive(Debug, Clone)]
pub struct RewriteOptions {
    /// Base every relative, root-relative, and scheme-relative reference is
    /// resolved against (RFC 3986 reference resolution).
    pub base_url: String,
    /// Prefix of absolute URLs to retarget onto `base_url`.
    pub original_base_url: Option<String>,
    /// Whether absolute URLs starting with `original_base_url` are
    /// retargeted at all.
    pub include_absolute_urls: bool,
}

impl RewriteOptions {
    /// Options that rebase relative references only.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            original_base_url: None,
            include_absolute_urls: false,
        }
    }
}

/// Rewrite every recognized URL reference in place and return how many
/// values changed.
///
/// Fragment-only references never change, malformed values are left
/// untouched, and a value is only counted when the replacement differs; a
/// second pass with the same options reports zero changes.
pub fn rewrite_urls_inplace(document: &mut Value, options: &RewriteOptions) -> usize {
    let base = Url::parse(&options.base_url).ok();

    let mut changed = 0;
    rewrite_value(document, options, base.as_ref(), &mut changed);

    debug!("rewrote {changed} URL reference(s)");
    changed
}

fn rewrite_value(
    value: &mut Value,
    options: &RewriteOptions,
    base: Option<&Url>,
    changed: &mut usize,
) {
    match value {
        Value::Object(entries) => {
            for (key, child) in entries.iter_mut() {
                if let Value::String(text) = child {
                    if is_url_key(key, false) {
                        if let Some(replacement) = rewritten(text, options, base) {
                            if replacement != *text {
                                *text = replacement;
                                *changed += 1;
                            }
                        }
                    }
                    continue;
                }

                rewrite_value(child, options, base, changed);
            }
        }

        Value::Array(items) => {
            for item in items {
                rewrite_value(item, options, base, changed);
            }
        }

        _ => {}
    }
}

fn rewritten(text: &str, options: &RewriteOptions, base: Option<&Url>) -> Option<String> {
    match classify(text)? {
        UriKind::RelativePath | UriKind::AbsolutePosixPath | UriKind::SchemeRelative => {
            let base = base?;
            base.join(text).ok().map(|url| url.to_string())
        }

        UriKind::AbsoluteHttp if options.include_absolute_urls => {
            let original = options.original_base_url.as_deref()?;
            let suffix = text.strip_prefix(original)?;
            Some(format!("{}{suffix}", options.base_url))
        }

        _ => None,
    }
}

/// Stamp the document's top-level `$id`.
///
/// OpenAPI 3.1 documents always get (or replace) the `$id`; 3.0 documents
/// only when `force_on_30` is set; anything else is left alone.
pub fn set_or_replace_top_level_json_id(document: &mut Value, id: &str, force_on_30: bool) {
    let Some(entries) = document.as_object_mut() else {
        return;
    };

    let version = entries
        .get("openapi")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let applies = version.starts_with("3.1") || (version.starts_with("3.0") && force_on_30);
    if applies {
        entries.insert("$id".to_owned(), Value::String(id.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn rewrites_relative_urls_to_absolute() {
        let mut doc = json!({
            "openapi": "3.1.0",
            "info": {"title": "Test", "version": "1.0.0", "contact": {"url": "contact.html"}},
            "paths": {
                "/test": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "./schemas.json#/User"}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        });

        let options = RewriteOptions::new("https://api.example.com/v1/");
        let changed = rewrite_urls_inplace(&mut doc, &options);

        assert_eq!(changed, 2);
        assert_eq!(
            doc["info"]["contact"]["url"],
            "https://api.example.com/v1/contact.html",
        );
        assert_eq!(
            doc["paths"]["/test"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"]["$ref"],
            "https://api.example.com/v1/schemas.json#/User",
        );

        // A second pass has nothing left to do.
        let changed = rewrite_urls_inplace(&mut doc, &options);
        assert_eq!(changed, 0);
    }

    #[test]
    fn rewrites_root_relative_urls() {
        let mut doc = json!({
            "openapi": "3.0.3",
            "info": {"title": "Test", "version": "1.0.0", "contact": {"url": "/api/contact"}},
            "servers": [{"url": "/api/v1"}]
        });

        let options = RewriteOptions::new("https://api.example.com/");
        let changed = rewrite_urls_inplace(&mut doc, &options);

        assert_eq!(changed, 2);
        assert_eq!(doc["info"]["contact"]["url"], "https://api.example.com/api/contact");
        assert_eq!(doc["servers"][0]["url"], "https://api.example.com/api/v1");
    }

    #[test]
    fn rewrites_scheme_relative_urls_with_url_base() {
        let mut doc = json!({
            "info": {"termsOfService": "//cdn.example.com/terms.html"}
        });

        let options = RewriteOptions::new("https://api.example.com/");
        let changed = rewrite_urls_inplace(&mut doc, &options);

        assert_eq!(changed, 1);
        assert_eq!(doc["info"]["termsOfService"], "https://cdn.example.com/terms.html");
    }

    #[test]
    fn retargets_absolute_urls_by_prefix() {
        let mut doc = json!({
            "openapi": "3.1.0",
            "info": {
                "title": "Test",
                "version": "1.0.0",
                "contact": {"url": "https://old.example.com/contact"}
            },
            "components": {
                "examples": {
                    "example1": {"externalValue": "https://old.example.com/examples/test.json"}
                }
            }
        });

        let options = RewriteOptions {
            base_url: "https://new.example.com/".to_owned(),
            original_base_url: Some("https://old.example.com/".to_owned()),
            include_absolute_urls: true,
        };
        let changed = rewrite_urls_inplace(&mut doc, &options);

        assert_eq!(changed, 2);
        assert_eq!(doc["info"]["contact"]["url"], "https://new.example.com/contact");
        assert_eq!(
            doc["components"]["examples"]["example1"]["externalValue"],
            "https://new.example.com/examples/test.json",
        );
    }

    #[test]
    fn absolute_urls_left_alone_without_opt_in() {
        let mut doc = json!({
            "info": {"contact": {"url": "https://example.com/contact"}}
        });

        let options = RewriteOptions::new("https://api.example.com/");
        let changed = rewrite_urls_inplace(&mut doc, &options);

        assert_eq!(changed, 0);
        assert_eq!(doc["info"]["contact"]["url"], "https://example.com/contact");
    }

    #[test]
    fn fragment_only_refs_are_preserved() {
        let mut doc = json!({
            "paths": {
                "/test": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "#/components/schemas/User"}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        });

        let options = RewriteOptions::new("https://api.example.com/");
        let changed = rewrite_urls_inplace(&mut doc, &options);

        assert_eq!(changed, 0);
        assert_eq!(
            doc["paths"]["/test"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"]["$ref"],
            "#/components/schemas/User",
        );
    }

    #[test]
    fn non_string_values_do_not_crash_or_count() {
        let mut doc = json!({
            "externalDocs": {"url": 123},
            "components": {"examples": {"e": {"externalValue": null}}}
        });

        let options = RewriteOptions::new("https://example.com/");
        assert_eq!(rewrite_urls_inplace(&mut doc, &options), 0);
    }

    #[test]
    fn unparseable_base_url_leaves_relatives_untouched() {
        let mut doc = json!({
            "externalDocs": {"url": "./docs/api.html"}
        });

        let options = RewriteOptions::new("not a url");
        assert_eq!(rewrite_urls_inplace(&mut doc, &options), 0);
        assert_eq!(doc["externalDocs"]["url"], "./docs/api.html");
    }

    #[test]
    fn file_url_bases_work_for_relative_refs() {
        let mut doc = json!({
            "paths": {
                "/users": {
                    "get": {
                        "responses": {
                            "200": {
                                "content": {
                                    "application/json": {
                                        "schema": {"$ref": "schemas.json#/User"}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        });

        let options = RewriteOptions::new("file:///srv/specs/simple.json");
        let changed = rewrite_urls_inplace(&mut doc, &options);

        assert_eq!(changed, 1);
        assert_eq!(
            doc["paths"]["/users"]["get"]["responses"]["200"]["content"]["application/json"]
                ["schema"]["$ref"],
            "file:///srv/specs/schemas.json#/User",
        );
    }

    #[test]
    fn sets_id_on_31_documents() {
        let mut doc = json!({"openapi": "3.1.0", "info": {"title": "Test", "version": "1.0.0"}});

        set_or_replace_top_level_json_id(&mut doc, "https://example.com/api.json", false);
        assert_eq!(doc["$id"], "https://example.com/api.json");

        set_or_replace_top_level_json_id(&mut doc, "https://new.example.com/api.json", false);
        assert_eq!(doc["$id"], "https://new.example.com/api.json");
    }

    #[test]
    fn skips_30_documents_unless_forced() {
        let mut doc = json!({"openapi": "3.0.3", "info": {"title": "Test", "version": "1.0.0"}});

        set_or_replace_top_level_json_id(&mut doc, "https://example.com/api.json", false);
        assert!(doc.get("$id").is_none());

        set_or_replace_top_level_json_id(&mut doc, "https://example.com/api.json", true);
        assert_eq!(doc["$id"], "https://example.com/api.json");
    }

    #[test]
    fn ignores_non_mapping_documents() {
        let mut doc = json!(["not", "a", "dict"]);
        set_or_replace_top_level_json_id(&mut doc, "https://example.com/api.json", false);
        assert_eq!(doc, json!(["not", "a", "dict"]));
    }
}

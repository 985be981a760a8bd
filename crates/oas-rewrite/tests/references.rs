//! Finder + rewriter working together on whole documents.

use indoc::indoc;
use oas_rewrite::{
    find_absolute_http_urls, find_relative_urls, from_yaml, rewrite_urls_inplace,
    set_or_replace_top_level_json_id, RewriteOptions,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn find_then_rewrite_then_stamp_id() {
    let mut doc = from_yaml(indoc! {"
        openapi: 3.1.0
        info:
          title: Simple
          version: '1.0'
          contact:
            url: /c
        externalDocs:
          url: docs/api.html
        components:
          schemas:
            S:
              $ref: './s.json#/S'
    "})
    .unwrap();

    let relative = find_relative_urls(&doc, false);
    assert_eq!(relative.len(), 3);

    let refs_only = find_relative_urls(&doc, true);
    assert_eq!(refs_only.len(), 1);
    assert_eq!(refs_only[0].value, "./s.json#/S");

    let base = "https://specs.example.com/apis/simple.json";
    let changed = rewrite_urls_inplace(&mut doc, &RewriteOptions::new(base));
    assert_eq!(changed, 3);

    assert_eq!(doc["info"]["contact"]["url"], "https://specs.example.com/c");
    assert_eq!(
        doc["externalDocs"]["url"],
        "https://specs.example.com/apis/docs/api.html",
    );
    assert_eq!(
        doc["components"]["schemas"]["S"]["$ref"],
        "https://specs.example.com/apis/s.json#/S",
    );

    set_or_replace_top_level_json_id(&mut doc, base, false);
    assert_eq!(doc["$id"], base);

    // Everything is absolute now; the pass is exhausted.
    assert_eq!(
        rewrite_urls_inplace(&mut doc, &RewriteOptions::new(base)),
        0,
    );
    assert!(find_relative_urls(&doc, false).is_empty());
}

#[test]
fn retarget_between_hosts_end_to_end() {
    let mut doc = json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Test",
            "version": "1.0.0",
            "termsOfService": "http://localhost:8080/terms.html"
        },
        "servers": [{"url": "/api/v2"}],
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

    let options = RewriteOptions {
        base_url: "https://api.production.com/v1/".to_owned(),
        original_base_url: Some("http://localhost:8080/".to_owned()),
        include_absolute_urls: true,
    };
    let changed = rewrite_urls_inplace(&mut doc, &options);

    assert_eq!(changed, 3);
    assert_eq!(
        doc["info"]["termsOfService"],
        "https://api.production.com/v1/terms.html",
    );
    assert_eq!(doc["servers"][0]["url"], "https://api.production.com/api/v2");
    assert_eq!(
        doc["paths"]["/users"]["get"]["responses"]["200"]["content"]["application/json"]
            ["schema"]["$ref"],
        "https://api.production.com/v1/schemas.json#/User",
    );

    // A second identical pass changes nothing.
    assert_eq!(rewrite_urls_inplace(&mut doc, &options), 0);
}

#[test]
fn absolute_finder_and_rewriter_agree_on_scheme_filtering() {
    let doc = from_yaml(indoc! {"
        info:
          contact:
            url: https://example.com/contact
          license:
            url: file:///usr/share/licenses/MIT
        externalDocs:
          url: //docs.example.com/api
    "})
    .unwrap();

    let absolute = find_absolute_http_urls(&doc, false);
    assert_eq!(absolute.len(), 1);
    assert_eq!(absolute[0].value, "https://example.com/contact");
}

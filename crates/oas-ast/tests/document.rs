//! End-to-end document building scenarios.

use assert_matches::assert_matches;
use indoc::indoc;
use oas_ast::{build_document, sources::ObjectOrInvalid, Error, SpecVersion};
use pretty_assertions::assert_eq;

#[test]
fn v30_minimal_document_end_to_end() {
    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info:
          title: T
          version: 1
        paths: {}
    "})
    .unwrap();

    let document = parsed.document.as_v30().unwrap();
    assert_eq!(document.openapi.as_ref().unwrap().value, "3.0.4");

    let info = document.info.as_ref().unwrap().value.as_object().unwrap();
    assert_eq!(info.title.as_ref().unwrap().value, "T");
    assert_eq!(info.version.as_ref().unwrap().value, 1);

    let paths = document.paths.as_ref().unwrap().value.as_object().unwrap();
    assert!(paths.paths.is_empty());
}

#[test]
fn v31_webhooks_document_end_to_end() {
    let parsed = build_document(indoc! {"
        openapi: 3.1.2
        webhooks:
          newPet:
            post:
              responses:
                '200': { description: ok }
        info: { title: t, version: '1' }
    "})
    .unwrap();

    assert_eq!(parsed.document.version(), SpecVersion::V31);
    let document = parsed.document.as_v31().unwrap();
    assert!(document.paths.is_none());

    let webhooks = document.webhooks.as_ref().unwrap().value.as_object().unwrap();
    let new_pet = webhooks.get("newPet").unwrap().as_object().unwrap();
    let post = new_pet.post.as_ref().unwrap().value.as_object().unwrap();
    let responses = post.responses.as_ref().unwrap().value.as_object().unwrap();
    let ok = responses.responses.get("200").unwrap().as_object().unwrap();
    assert_eq!(ok.description.as_ref().unwrap().value, "ok");
}

#[test]
fn invalid_status_code_keys_are_absent_from_typed_map() {
    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info: { title: t, version: '1' }
        paths:
          /things:
            get:
              responses:
                '99':
                  description: x
                '200':
                  description: ok
    "})
    .unwrap();

    let document = parsed.document.as_v30().unwrap();
    let paths = document.paths.as_ref().unwrap().value.as_object().unwrap();
    let item = paths.paths.get("/things").unwrap().as_object().unwrap();
    let get = item.get.as_ref().unwrap().value.as_object().unwrap();
    let responses = get.responses.as_ref().unwrap().value.as_object().unwrap();

    assert!(responses.responses.get("99").is_none());
    assert!(responses.responses.get("200").is_some());
}

#[test]
fn ordered_maps_preserve_source_order_throughout() {
    let parsed = build_document(indoc! {"
        openapi: 3.1.0
        info: { title: t, version: '1' }
        paths:
          /zebra: {}
          /alpha: {}
          /mango: {}
        components:
          schemas:
            Zed: { type: string }
            Abe: { type: integer }
        x-last: true
        x-first: false
    "})
    .unwrap();

    let document = parsed.document.as_v31().unwrap();

    let paths = document.paths.as_ref().unwrap().value.as_object().unwrap();
    let path_keys: Vec<_> = paths.paths.keys().map(|k| k.value.as_str()).collect();
    assert_eq!(path_keys, ["/zebra", "/alpha", "/mango"]);

    let components = document.components.as_ref().unwrap().value.as_object().unwrap();
    let schemas = components.schemas.as_ref().unwrap().value.as_object().unwrap();
    let schema_keys: Vec<_> = schemas.keys().map(|k| k.value.as_str()).collect();
    assert_eq!(schema_keys, ["Zed", "Abe"]);

    let extension_keys: Vec<_> = document.extensions.keys().map(|k| k.value.as_str()).collect();
    assert_eq!(extension_keys, ["x-last", "x-first"]);
}

#[test]
fn invalid_shapes_survive_with_their_raw_values() {
    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info: { title: t, version: '1' }
        paths: {}
        servers: not-a-list
        tags:
          - name: ok
          - 17
    "})
    .unwrap();

    let document = parsed.document.as_v30().unwrap();

    let servers = &document.servers.as_ref().unwrap().value;
    assert_eq!(servers.as_invalid().unwrap().value, "not-a-list");

    let tags = document.tags.as_ref().unwrap().value.as_object().unwrap();
    assert_eq!(tags.len(), 2);
    assert!(tags[0].is_object());
    assert_eq!(tags[1].as_invalid().unwrap().value, 17);
}

#[test]
fn null_values_are_preserved_as_null() {
    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info:
          title: ~
          version: '1'
        paths: {}
    "})
    .unwrap();

    let document = parsed.document.as_v30().unwrap();
    let info = document.info.as_ref().unwrap().value.as_object().unwrap();

    let title = info.title.as_ref().unwrap();
    assert!(title.value.is_null());
}

#[test]
fn field_spans_point_into_the_source_text() {
    let text = "openapi: 3.0.4\ninfo:\n  title: Sample\n  version: '1'\npaths: {}\n";
    let parsed = build_document(text).unwrap();

    let document = parsed.document.as_v30().unwrap();
    let info = document.info.as_ref().unwrap().value.as_object().unwrap();
    let title = info.title.as_ref().unwrap();

    let key_span = parsed.arena.span(title.key_node);
    assert_eq!(
        &text[key_span.start.offset as usize..key_span.end.offset as usize],
        "title",
    );

    let value_span = parsed.arena.span(title.value_node);
    assert_eq!(
        &text[value_span.start.offset as usize..value_span.end.offset as usize],
        "Sample",
    );
    assert_eq!(value_span.start.line, 3);
}

#[test]
fn json_input_is_accepted() {
    let parsed = build_document(
        r#"{"openapi": "3.1.0", "info": {"title": "t", "version": "1"}, "paths": {}}"#,
    )
    .unwrap();

    assert_eq!(parsed.document.version(), SpecVersion::V31);
}

#[test]
fn unsupported_versions_name_the_token() {
    let err = build_document("openapi: 3.2.0\ninfo: {}\n").unwrap_err();
    assert_matches!(err, Error::UnsupportedVersion { found: Some(token) } if token == "3.2.0");

    let err = build_document("openapi: 4.0.0\n").unwrap_err();
    assert_matches!(err, Error::UnsupportedVersion { found: Some(token) } if token == "4.0.0");
}

#[test]
fn anchored_nodes_are_shared_into_the_typed_tree() {
    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info: { title: t, version: '1' }
        paths:
          /a:
            get: &shared
              responses:
                '200': { description: ok }
          /b:
            get: *shared
    "})
    .unwrap();

    let document = parsed.document.as_v30().unwrap();
    let paths = document.paths.as_ref().unwrap().value.as_object().unwrap();

    let a = paths.paths.get("/a").unwrap().as_object().unwrap();
    let b = paths.paths.get("/b").unwrap().as_object().unwrap();

    let a_get = a.get.as_ref().unwrap().value.as_object().unwrap();
    let b_get = b.get.as_ref().unwrap().value.as_object().unwrap();

    // Both operations were built from the same anchored node.
    assert_eq!(a_get.root_node, b_get.root_node);

    let a_span = parsed.arena.span(a_get.root_node);
    assert_eq!(a_span.start.line, 6);
}

#[test]
fn responses_wildcards_match_v31_too() {
    let parsed = build_document(indoc! {"
        openapi: 3.1.0
        info: { title: t, version: '1' }
        paths:
          /x:
            get:
              responses:
                2XX: { description: success family }
                default: { description: fallback }
    "})
    .unwrap();

    let document = parsed.document.as_v31().unwrap();
    let paths = document.paths.as_ref().unwrap().value.as_object().unwrap();
    let get = paths.paths.get("/x").unwrap().as_object().unwrap();
    let get = get.get.as_ref().unwrap().value.as_object().unwrap();
    let responses = get.responses.as_ref().unwrap().value.as_object().unwrap();

    assert!(responses.responses.get("2XX").is_some());
    assert!(responses.default.is_some());
}

#[test]
fn root_that_is_not_a_mapping_is_rejected() {
    let err = build_document("- just\n- a list\n").unwrap_err();
    assert_matches!(err, Error::UnsupportedVersion { found: None });
}

#[test]
fn invalid_preserving_is_not_an_error() {
    // A document full of wrong shapes still builds.
    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info: 12
        paths:
          /x: [not, a, path, item]
        components: null
    "})
    .unwrap();

    let document = parsed.document.as_v30().unwrap();

    assert_eq!(
        document.info.as_ref().unwrap().value.as_invalid().unwrap().value,
        12,
    );

    let paths = document.paths.as_ref().unwrap().value.as_object().unwrap();
    assert_matches!(
        paths.paths.get("/x").unwrap(),
        ObjectOrInvalid::Invalid(_)
    );

    let components = &document.components.as_ref().unwrap().value;
    assert!(components.as_invalid().unwrap().value.is_null());
}

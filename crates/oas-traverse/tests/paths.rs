//! Path formatting through real traversals.

use indoc::indoc;
use oas_ast::{build_document, ParsedDocument};
use oas_traverse::{
    format_segments, traverse, Flow, NodePath, NodeRef, PathFormat, PathSegment, Visitor,
};
use pretty_assertions::assert_eq;

fn sample_doc() -> ParsedDocument {
    build_document(indoc! {"
        openapi: 3.0.4
        info:
          title: Test API
          version: 1.0.0
        paths:
          /users:
            get:
              operationId: getUsers
              parameters:
                - name: limit
                  in: query
              responses:
                '200':
                  description: Success
          /pets/{id}:
            get:
              operationId: getPet
              responses:
                '200':
                  description: Success
        components:
          schemas:
            User:
              type: object
              properties:
                name:
                  type: string
    "})
    .unwrap()
}

#[derive(Default)]
struct PathsByKind {
    kind: Option<oas_traverse::NodeKind>,
    pointer: Vec<String>,
    jsonpath: Vec<String>,
}

impl PathsByKind {
    fn of(kind: oas_traverse::NodeKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }
}

impl Visitor for PathsByKind {
    fn enter(&mut self, path: &NodePath<'_>) -> Flow {
        if Some(path.node.kind()) == self.kind {
            self.pointer.push(path.format_path(PathFormat::JsonPointer));
            self.jsonpath.push(path.format_path(PathFormat::JsonPath));
        }
        Flow::Continue
    }
}

use oas_traverse::NodeKind;

#[test]
fn single_field_path() {
    let parsed = sample_doc();

    let mut visitor = PathsByKind::of(NodeKind::Info);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.pointer, ["/info"]);
    assert_eq!(visitor.jsonpath, ["$['info']"]);
}

#[test]
fn operations_escape_path_template_slashes() {
    let parsed = sample_doc();

    let mut visitor = PathsByKind::of(NodeKind::Operation);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(
        visitor.pointer,
        ["/paths/~1users/get", "/paths/~1pets~1{id}/get"],
    );
    assert_eq!(
        visitor.jsonpath,
        ["$['paths']['/users']['get']", "$['paths']['/pets/{id}']['get']"],
    );
}

#[test]
fn responses_flatten_their_status_map() {
    let parsed = sample_doc();

    let mut visitor = PathsByKind::of(NodeKind::Response);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(
        visitor.pointer,
        [
            "/paths/~1users/get/responses/200",
            "/paths/~1pets~1{id}/get/responses/200",
        ],
    );
}

#[test]
fn list_elements_use_indices() {
    let parsed = sample_doc();

    let mut visitor = PathsByKind::of(NodeKind::Parameter);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.pointer, ["/paths/~1users/get/parameters/0"]);
    assert_eq!(visitor.jsonpath, ["$['paths']['/users']['get']['parameters'][0]"]);
}

#[test]
fn schema_properties_have_full_paths() {
    let parsed = sample_doc();

    let mut visitor = PathsByKind::of(NodeKind::Schema);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(
        visitor.pointer,
        [
            "/components/schemas/User",
            "/components/schemas/User/properties/name",
        ],
    );
    assert_eq!(
        visitor.jsonpath[1],
        "$['components']['schemas']['User']['properties']['name']",
    );
}

#[test]
fn webhook_operations() {
    let parsed = build_document(indoc! {"
        openapi: 3.1.0
        info:
          title: Test API
          version: 1.0.0
        webhooks:
          userCreated:
            post:
              operationId: userCreatedWebhook
              responses:
                '200':
                  description: Success
          userDeleted:
            post:
              operationId: userDeletedWebhook
              responses:
                '200':
                  description: Success
    "})
    .unwrap();

    let mut visitor = PathsByKind::of(NodeKind::Operation);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(
        visitor.pointer,
        ["/webhooks/userCreated/post", "/webhooks/userDeleted/post"],
    );
    assert_eq!(
        visitor.jsonpath,
        [
            "$['webhooks']['userCreated']['post']",
            "$['webhooks']['userDeleted']['post']",
        ],
    );
}

#[test]
fn callback_operations_pin_runtime_expression_escaping() {
    let parsed = build_document(indoc! {"
        openapi: 3.1.0
        info:
          title: Test API
          version: 1.0.0
        paths:
          /users:
            post:
              operationId: createUser
              responses:
                '201':
                  description: Created
              callbacks:
                statusUpdate:
                  '{$request.body#/callbackUrl}':
                    post:
                      operationId: statusCallback
                      responses:
                        '200':
                          description: Success
    "})
    .unwrap();

    let mut visitor = PathsByKind::of(NodeKind::Operation);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(
        visitor.pointer,
        [
            "/paths/~1users/post",
            "/paths/~1users/post/callbacks/statusUpdate/{$request.body#~1callbackUrl}/post",
        ],
    );
    assert_eq!(
        visitor.jsonpath,
        [
            "$['paths']['/users']['post']",
            "$['paths']['/users']['post']['callbacks']['statusUpdate']['{$request.body#/callbackUrl}']['post']",
        ],
    );
}

#[test]
fn callbacks_with_multiple_operations() {
    let parsed = build_document(indoc! {"
        openapi: 3.1.0
        info:
          title: Test API
          version: 1.0.0
        paths:
          /subscribe:
            post:
              operationId: subscribe
              responses:
                '201':
                  description: Subscribed
              callbacks:
                notification:
                  '{$request.body#/notifyUrl}':
                    post:
                      operationId: notifyPost
                      responses:
                        '200':
                          description: OK
                    put:
                      operationId: notifyPut
                      responses:
                        '200':
                          description: OK
    "})
    .unwrap();

    let mut visitor = PathsByKind::of(NodeKind::Operation);
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    // Path-item field order puts `put` before `post`.
    assert_eq!(
        visitor.pointer,
        [
            "/paths/~1subscribe/post",
            "/paths/~1subscribe/post/callbacks/notification/{$request.body#~1notifyUrl}/put",
            "/paths/~1subscribe/post/callbacks/notification/{$request.body#~1notifyUrl}/post",
        ],
    );
}

#[test]
fn to_parts_round_trips_through_the_formatter() {
    #[derive(Default)]
    struct RoundTrip;

    impl Visitor for RoundTrip {
        fn enter(&mut self, path: &NodePath<'_>) -> Flow {
            let parts = path.to_parts().to_vec();
            assert_eq!(
                format_segments(&parts, PathFormat::JsonPointer),
                path.format_path(PathFormat::JsonPointer),
            );
            assert_eq!(
                format_segments(&parts, PathFormat::JsonPath),
                path.format_path(PathFormat::JsonPath),
            );
            Flow::Continue
        }
    }

    let parsed = sample_doc();
    traverse(NodeRef::document(&parsed.document), &mut RoundTrip);
}

#[test]
fn to_parts_mixes_keys_and_indices() {
    #[derive(Default)]
    struct Capture(Vec<PathSegment>);

    impl Visitor for Capture {
        fn visit_parameter(&mut self, path: &NodePath<'_>) -> Flow {
            self.0 = path.to_parts().to_vec();
            Flow::Continue
        }
    }

    let parsed = sample_doc();

    let mut visitor = Capture::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(
        visitor.0,
        [
            PathSegment::Key("paths".to_owned()),
            PathSegment::Key("/users".to_owned()),
            PathSegment::Key("get".to_owned()),
            PathSegment::Key("parameters".to_owned()),
            PathSegment::Index(0),
        ],
    );
}

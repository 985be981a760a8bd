//! Dispatch order and control-flow semantics of the engine.

use indoc::indoc;
use oas_ast::{build_document, ParsedDocument};
use oas_traverse::{
    traverse, traverse_children, Flow, NodeKind, NodePath, NodeRef, PathFormat, Visitor,
};
use pretty_assertions::assert_eq;

fn simple_doc() -> ParsedDocument {
    build_document(indoc! {"
        openapi: 3.0.4
        info:
          title: Test API
          version: 1.0.0
        paths:
          /users:
            get:
              operationId: getUsers
              responses:
                '200':
                  description: Success
    "})
    .unwrap()
}

fn multi_operation_doc() -> ParsedDocument {
    build_document(indoc! {"
        openapi: 3.0.4
        info:
          title: Test API
          version: 1.0.0
        paths:
          /users:
            get:
              operationId: getUsers
              responses:
                '200':
                  description: Success
            post:
              operationId: createUser
              responses:
                '201':
                  description: Created
          /posts:
            get:
              operationId: getPosts
              responses:
                '200':
                  description: Success
    "})
    .unwrap()
}

fn operation_id(path: &NodePath<'_>) -> Option<String> {
    let operation = path.node.as_operation30()?;
    Some(
        operation
            .operation_id
            .as_ref()?
            .value
            .as_str()?
            .to_owned(),
    )
}

#[derive(Default)]
struct KindCollector(Vec<NodeKind>);

impl Visitor for KindCollector {
    fn enter(&mut self, path: &NodePath<'_>) -> Flow {
        self.0.push(path.node.kind());
        Flow::Continue
    }
}

#[test]
fn visits_root_and_nested_nodes() {
    let parsed = simple_doc();

    let mut collector = KindCollector::default();
    traverse(NodeRef::document(&parsed.document), &mut collector);

    assert_eq!(
        collector.0,
        [
            NodeKind::OpenApi,
            NodeKind::Info,
            NodeKind::Paths,
            NodeKind::PathItem,
            NodeKind::Operation,
            NodeKind::Responses,
            NodeKind::Response,
        ],
    );
}

#[test]
fn hook_order_within_a_node() {
    #[derive(Default)]
    struct OrderCollector(Vec<String>);

    impl Visitor for OrderCollector {
        fn enter(&mut self, path: &NodePath<'_>) -> Flow {
            self.0.push(format!("enter {:?}", path.node.kind()));
            Flow::Continue
        }

        fn enter_info(&mut self, _path: &NodePath<'_>) -> Flow {
            self.0.push("enter_info".to_owned());
            Flow::Continue
        }

        fn visit_info(&mut self, _path: &NodePath<'_>) -> Flow {
            self.0.push("visit_info".to_owned());
            Flow::Continue
        }

        fn leave_info(&mut self, _path: &NodePath<'_>) -> Flow {
            self.0.push("leave_info".to_owned());
            Flow::Continue
        }

        fn leave(&mut self, path: &NodePath<'_>) -> Flow {
            self.0.push(format!("leave {:?}", path.node.kind()));
            Flow::Continue
        }
    }

    let parsed = build_document("openapi: 3.0.4\ninfo: {title: t, version: '1'}\n").unwrap();

    let mut collector = OrderCollector::default();
    traverse(NodeRef::document(&parsed.document), &mut collector);

    assert_eq!(
        collector.0,
        [
            "enter OpenApi",
            "enter Info",
            "enter_info",
            "visit_info",
            "leave_info",
            "leave Info",
            "leave OpenApi",
        ],
    );
}

#[test]
fn skip_on_first_path_item_suppresses_only_its_subtree() {
    #[derive(Default)]
    struct SkipFirst {
        path_items: usize,
        operations: usize,
    }

    impl Visitor for SkipFirst {
        fn visit_path_item(&mut self, _path: &NodePath<'_>) -> Flow {
            self.path_items += 1;
            if self.path_items == 1 {
                Flow::SkipChildren
            } else {
                Flow::Continue
            }
        }

        fn visit_operation(&mut self, _path: &NodePath<'_>) -> Flow {
            self.operations += 1;
            Flow::Continue
        }
    }

    // Two paths: /users carries two operations, /posts carries one. Skipping
    // the first path item hides exactly its two operations.
    let parsed = multi_operation_doc();

    let mut visitor = SkipFirst::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.path_items, 2);
    assert_eq!(visitor.operations, 1);
}

#[test]
fn skip_from_enter_fires_generic_leave_but_not_specific() {
    #[derive(Default)]
    struct SkipInfo {
        specific_leaves: usize,
        generic_leaves: usize,
    }

    impl Visitor for SkipInfo {
        fn enter(&mut self, path: &NodePath<'_>) -> Flow {
            if path.node.kind() == NodeKind::Info {
                Flow::SkipChildren
            } else {
                Flow::Continue
            }
        }

        fn leave_info(&mut self, _path: &NodePath<'_>) -> Flow {
            self.specific_leaves += 1;
            Flow::Continue
        }

        fn leave(&mut self, path: &NodePath<'_>) -> Flow {
            if path.node.kind() == NodeKind::Info {
                self.generic_leaves += 1;
            }
            Flow::Continue
        }
    }

    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info:
          title: t
          version: '1'
          contact:
            name: someone
    "})
    .unwrap();

    let mut visitor = SkipInfo::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.specific_leaves, 0);
    assert_eq!(visitor.generic_leaves, 1);
}

#[test]
fn skip_does_not_hide_siblings() {
    #[derive(Default)]
    struct SkipAllPathItems {
        contacts: usize,
    }

    impl Visitor for SkipAllPathItems {
        fn visit_path_item(&mut self, _path: &NodePath<'_>) -> Flow {
            Flow::SkipChildren
        }

        fn visit_contact(&mut self, _path: &NodePath<'_>) -> Flow {
            self.contacts += 1;
            Flow::Continue
        }
    }

    let parsed = build_document(indoc! {"
        openapi: 3.0.4
        info:
          title: t
          version: '1'
          contact:
            name: someone
        paths:
          /users:
            get:
              responses:
                '200': {description: ok}
    "})
    .unwrap();

    let mut visitor = SkipAllPathItems::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    // Field order puts info before paths; the point is the contact node is
    // reached even though every path item prunes its own subtree.
    assert_eq!(visitor.contacts, 1);
}

#[test]
fn break_stops_the_entire_traversal() {
    #[derive(Default)]
    struct BreakOnFirstOperation {
        operations: Vec<String>,
        leaves_after_break: usize,
        broke: bool,
    }

    impl Visitor for BreakOnFirstOperation {
        fn visit_operation(&mut self, path: &NodePath<'_>) -> Flow {
            self.operations.push(operation_id(path).unwrap());
            self.broke = true;
            Flow::Break
        }

        fn leave(&mut self, _path: &NodePath<'_>) -> Flow {
            if self.broke {
                self.leaves_after_break += 1;
            }
            Flow::Continue
        }
    }

    let parsed = multi_operation_doc();

    let mut visitor = BreakOnFirstOperation::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.operations, ["getUsers"]);
    // No hook of any sort fires after the break, including pending leaves.
    assert_eq!(visitor.leaves_after_break, 0);
}

#[test]
fn break_from_leave_hook_stops_siblings() {
    #[derive(Default)]
    struct BreakOnLeave {
        path_items: usize,
    }

    impl Visitor for BreakOnLeave {
        fn visit_path_item(&mut self, _path: &NodePath<'_>) -> Flow {
            self.path_items += 1;
            Flow::Continue
        }

        fn leave_path_item(&mut self, _path: &NodePath<'_>) -> Flow {
            Flow::Break
        }
    }

    let parsed = multi_operation_doc();

    let mut visitor = BreakOnLeave::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.path_items, 1);
}

#[test]
fn path_context_reports_parents_and_keys() {
    #[derive(Default)]
    struct ContextCheck {
        checked: bool,
    }

    impl Visitor for ContextCheck {
        fn visit_path_item(&mut self, path: &NodePath<'_>) -> Flow {
            assert_eq!(path.parent_field, Some("paths"));
            assert_eq!(
                path.parent_key,
                Some(oas_traverse::PathSegment::Key("/users".to_owned())),
            );
            assert!(matches!(path.parent, Some(NodeRef::Paths30(_))));
            assert_eq!(path.ancestors.len(), 2);
            assert!(matches!(path.get_root(), NodeRef::OpenApi30(_)));
            self.checked = true;
            Flow::Continue
        }
    }

    let parsed = simple_doc();

    let mut visitor = ContextCheck::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert!(visitor.checked);
}

#[test]
fn root_has_no_parent() {
    struct RootCheck;

    impl Visitor for RootCheck {
        fn visit_openapi(&mut self, path: &NodePath<'_>) -> Flow {
            assert!(path.parent.is_none());
            assert!(path.parent_field.is_none());
            assert!(path.ancestors.is_empty());
            assert_eq!(path.format_path(PathFormat::JsonPointer), "");
            Flow::SkipChildren
        }
    }

    let parsed = simple_doc();
    traverse(NodeRef::document(&parsed.document), &mut RootCheck);
}

#[test]
fn custom_generic_visit_replaces_child_traversal() {
    #[derive(Default)]
    struct OnlyGetOperations {
        operations: Vec<String>,
    }

    impl Visitor for OnlyGetOperations {
        fn visit_operation(&mut self, path: &NodePath<'_>) -> Flow {
            self.operations.push(operation_id(path).unwrap());
            Flow::Continue
        }

        fn generic_visit(&mut self, path: &NodePath<'_>) -> Option<Flow> {
            if path.node.kind() != NodeKind::PathItem {
                return None;
            }

            // Hand-traverse only the `get` operation of each path item.
            let NodeRef::PathItem30(item) = path.node else {
                return Some(Flow::Continue);
            };

            if let Some(get) = &item.get {
                if let Some(operation) = get.value.as_object() {
                    let child = path.create_child(NodeRef::Operation30(operation), "get", None);
                    child.traverse(self);
                }
            }

            Some(Flow::Continue)
        }
    }

    let parsed = multi_operation_doc();

    let mut visitor = OnlyGetOperations::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.operations, ["getUsers", "getPosts"]);
}

#[test]
fn traverse_children_is_reusable_from_generic_visit() {
    #[derive(Default)]
    struct CountViaDefault {
        responses: usize,
    }

    impl Visitor for CountViaDefault {
        fn visit_response(&mut self, _path: &NodePath<'_>) -> Flow {
            self.responses += 1;
            Flow::Continue
        }

        fn generic_visit(&mut self, path: &NodePath<'_>) -> Option<Flow> {
            // Delegate to the standard traversal explicitly.
            Some(traverse_children(self, path))
        }
    }

    let parsed = multi_operation_doc();

    let mut visitor = CountViaDefault::default();
    traverse(NodeRef::document(&parsed.document), &mut visitor);

    assert_eq!(visitor.responses, 3);
}

#[test]
fn read_only_traversal_is_idempotent() {
    let parsed = multi_operation_doc();
    let root = NodeRef::document(&parsed.document);

    let mut first = KindCollector::default();
    traverse(root, &mut first);

    let mut second = KindCollector::default();
    traverse(root, &mut second);

    assert_eq!(first.0, second.0);
}

#[test]
fn v31_documents_dispatch_to_the_same_hooks() {
    let parsed = build_document(indoc! {"
        openapi: 3.1.0
        info: {title: t, version: '1'}
        webhooks:
          ping:
            post:
              responses:
                '200': {description: ok}
    "})
    .unwrap();

    let mut collector = KindCollector::default();
    traverse(NodeRef::document(&parsed.document), &mut collector);

    assert_eq!(
        collector.0,
        [
            NodeKind::OpenApi,
            NodeKind::Info,
            NodeKind::PathItem,
            NodeKind::Operation,
            NodeKind::Responses,
            NodeKind::Response,
        ],
    );
}

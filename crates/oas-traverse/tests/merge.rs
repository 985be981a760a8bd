//! Composite-visitor state isolation.

use indoc::indoc;
use oas_ast::{build_document, ParsedDocument};
use oas_traverse::{
    merge_visitors, traverse, Flow, NodeKind, NodePath, NodeRef, Visitor,
};
use pretty_assertions::assert_eq;

fn multi_path_doc() -> ParsedDocument {
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
          /posts:
            get:
              operationId: getPosts
              responses:
                '200':
                  description: Success
    "})
    .unwrap()
}

fn operation_id(path: &NodePath<'_>) -> String {
    path.node
        .as_operation30()
        .and_then(|op| op.operation_id.as_ref())
        .and_then(|id| id.value.as_str())
        .unwrap_or("?")
        .to_owned()
}

/// Records every kind it sees; optionally skips or breaks at a kind.
#[derive(Default)]
struct Recorder {
    seen: Vec<NodeKind>,
    skip_at: Option<NodeKind>,
    break_at: Option<NodeKind>,
}

impl Visitor for Recorder {
    fn enter(&mut self, path: &NodePath<'_>) -> Flow {
        let kind = path.node.kind();
        self.seen.push(kind);

        if self.break_at == Some(kind) {
            Flow::Break
        } else if self.skip_at == Some(kind) {
            Flow::SkipChildren
        } else {
            Flow::Continue
        }
    }
}

#[test]
fn empty_merge_is_a_no_op() {
    let parsed = multi_path_doc();

    let mut merged = merge_visitors(Vec::new());
    traverse(NodeRef::document(&parsed.document), &mut merged);
}

#[test]
fn merged_visitors_run_in_declaration_order() {
    #[derive(Default)]
    struct Tagged(&'static str, std::rc::Rc<std::cell::RefCell<Vec<&'static str>>>);

    impl Visitor for Tagged {
        fn visit_info(&mut self, _path: &NodePath<'_>) -> Flow {
            self.1.borrow_mut().push(self.0);
            Flow::Continue
        }
    }

    let order = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut first = Tagged("first", order.clone());
    let mut second = Tagged("second", order.clone());

    let parsed = multi_path_doc();
    let mut merged = merge_visitors(vec![&mut first, &mut second]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    assert_eq!(*order.borrow(), ["first", "second"]);
}

#[test]
fn both_visitors_observe_everything_without_control_flow() {
    let parsed = multi_path_doc();

    let mut a = Recorder::default();
    let mut b = Recorder::default();

    let mut merged = merge_visitors(vec![&mut a, &mut b]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    assert!(!a.seen.is_empty());
    assert_eq!(a.seen, b.seen);
}

#[test]
fn skip_affects_only_the_skipping_visitor() {
    let parsed = multi_path_doc();

    let mut skipper = Recorder {
        skip_at: Some(NodeKind::PathItem),
        ..Recorder::default()
    };
    let mut walker = Recorder::default();

    let mut merged = merge_visitors(vec![&mut skipper, &mut walker]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    // The skipper still sees both path items (siblings are not affected),
    // but none of their operations.
    assert_eq!(
        skipper.seen.iter().filter(|&&k| k == NodeKind::PathItem).count(),
        2,
    );
    assert_eq!(
        skipper.seen.iter().filter(|&&k| k == NodeKind::Operation).count(),
        0,
    );

    // The other visitor observes the full tree.
    assert_eq!(
        walker.seen.iter().filter(|&&k| k == NodeKind::Operation).count(),
        2,
    );
    assert_eq!(
        walker.seen.iter().filter(|&&k| k == NodeKind::Response).count(),
        2,
    );
}

#[test]
fn visitor_resumes_after_the_skipped_subtree() {
    let parsed = multi_path_doc();

    let mut skipper = Recorder {
        skip_at: Some(NodeKind::Responses),
        ..Recorder::default()
    };
    let mut walker = Recorder::default();

    let mut merged = merge_visitors(vec![&mut skipper, &mut walker]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    // Skipping each Responses subtree hides Response nodes only; the second
    // path item's operation is still observed.
    assert_eq!(
        skipper.seen.iter().filter(|&&k| k == NodeKind::Response).count(),
        0,
    );
    assert_eq!(
        skipper.seen.iter().filter(|&&k| k == NodeKind::Operation).count(),
        2,
    );
}

#[test]
fn break_removes_only_the_breaking_visitor() {
    #[derive(Default)]
    struct BreakOnFirstOperation {
        operations: Vec<String>,
    }

    impl Visitor for BreakOnFirstOperation {
        fn visit_operation(&mut self, path: &NodePath<'_>) -> Flow {
            self.operations.push(operation_id(path));
            Flow::Break
        }
    }

    #[derive(Default)]
    struct CollectOperations {
        operations: Vec<String>,
    }

    impl Visitor for CollectOperations {
        fn visit_operation(&mut self, path: &NodePath<'_>) -> Flow {
            self.operations.push(operation_id(path));
            Flow::Continue
        }
    }

    let parsed = multi_path_doc();

    let mut breaker = BreakOnFirstOperation::default();
    let mut collector = CollectOperations::default();

    let mut merged = merge_visitors(vec![&mut breaker, &mut collector]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    // Both observe the first operation; only the collector continues.
    assert_eq!(breaker.operations, ["getUsers"]);
    assert_eq!(collector.operations, ["getUsers", "getPosts"]);
}

#[test]
fn all_visitors_breaking_stops_the_traversal() {
    let parsed = multi_path_doc();

    let mut a = Recorder {
        break_at: Some(NodeKind::Paths),
        ..Recorder::default()
    };
    let mut b = Recorder {
        break_at: Some(NodeKind::Paths),
        ..Recorder::default()
    };

    let mut merged = merge_visitors(vec![&mut a, &mut b]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    assert!(a.seen.contains(&NodeKind::Paths));
    assert!(!a.seen.contains(&NodeKind::PathItem));
    assert_eq!(a.seen, b.seen);
}

#[test]
fn all_visitors_skipping_prunes_the_subtree_once() {
    let parsed = multi_path_doc();

    let mut a = Recorder {
        skip_at: Some(NodeKind::PathItem),
        ..Recorder::default()
    };
    let mut b = Recorder {
        skip_at: Some(NodeKind::PathItem),
        ..Recorder::default()
    };

    let mut merged = merge_visitors(vec![&mut a, &mut b]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    assert_eq!(
        a.seen.iter().filter(|&&k| k == NodeKind::PathItem).count(),
        2,
    );
    assert_eq!(
        a.seen.iter().filter(|&&k| k == NodeKind::Operation).count(),
        0,
    );
    assert_eq!(a.seen, b.seen);
}

#[test]
fn skip_and_break_and_plain_visitors_together() {
    let parsed = multi_path_doc();

    let mut skipper = Recorder {
        skip_at: Some(NodeKind::PathItem),
        ..Recorder::default()
    };
    let mut breaker = Recorder {
        break_at: Some(NodeKind::Operation),
        ..Recorder::default()
    };
    let mut walker = Recorder::default();

    let mut merged = merge_visitors(vec![&mut skipper, &mut breaker, &mut walker]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    // The breaker leaves at the first operation, which the skipper never
    // sees; the plain walker observes the whole tree.
    assert_eq!(
        skipper.seen.iter().filter(|&&k| k == NodeKind::Operation).count(),
        0,
    );
    assert_eq!(
        breaker.seen.iter().filter(|&&k| k == NodeKind::Operation).count(),
        1,
    );
    assert_eq!(
        walker.seen.iter().filter(|&&k| k == NodeKind::Response).count(),
        2,
    );
}

#[test]
fn generic_leave_reaches_a_skipping_visitor_at_the_skipped_node() {
    #[derive(Default)]
    struct SkipAndCountLeaves {
        left_path_items: usize,
    }

    impl Visitor for SkipAndCountLeaves {
        fn enter(&mut self, path: &NodePath<'_>) -> Flow {
            if path.node.kind() == NodeKind::PathItem {
                Flow::SkipChildren
            } else {
                Flow::Continue
            }
        }

        fn leave(&mut self, path: &NodePath<'_>) -> Flow {
            if path.node.kind() == NodeKind::PathItem {
                self.left_path_items += 1;
            }
            Flow::Continue
        }
    }

    let parsed = multi_path_doc();

    let mut skipper = SkipAndCountLeaves::default();
    let mut walker = Recorder::default();

    let mut merged = merge_visitors(vec![&mut skipper, &mut walker]);
    traverse(NodeRef::document(&parsed.document), &mut merged);
    drop(merged);

    assert_eq!(skipper.left_path_items, 2);
}

//! The traversal engine.

use log::trace;

use crate::{
    children::children,
    node::NodeRef,
    path::NodePath,
    visitor::{call_hook, Flow, HookStage, Visitor},
};

/// Walk a typed tree from `root`, dispatching to the visitor's hooks.
///
/// Per node the order is: generic enter, kind-specific enter, kind-specific
/// visit, children (field order, list order, source map order), kind-specific
/// leave, generic leave. [`Flow::SkipChildren`] from any of the first three
/// stages jumps to the generic leave of the current node;
/// [`Flow::Break`] ends the traversal with no further hooks anywhere.
pub fn traverse(root: NodeRef<'_>, visitor: &mut dyn Visitor) {
    let path = NodePath::root(root);
    visit_node(visitor, &path);
}

/// Standard child traversal for the node at `path`.
///
/// Custom [`Visitor::generic_visit`] implementations can call this to keep
/// the default behavior for the children they do not handle themselves.
pub fn traverse_children(visitor: &mut dyn Visitor, path: &NodePath<'_>) -> Flow {
    for edge in children(path.node) {
        let child = path.child_for_edge(edge);
        if visit_node(visitor, &child) == Flow::Break {
            return Flow::Break;
        }
    }

    Flow::Continue
}

pub(crate) fn visit_node(visitor: &mut dyn Visitor, path: &NodePath<'_>) -> Flow {
    let kind = path.node.kind();
    trace!("visiting {kind:?} at depth {}", path.depth());

    let enter_stages = [
        HookStage::Enter,
        HookStage::EnterSpecific(kind),
        HookStage::Visit(kind),
    ];

    for stage in enter_stages {
        match call_hook(visitor, stage, path) {
            Flow::Break => return Flow::Break,
            Flow::SkipChildren => return generic_leave(visitor, path),
            Flow::Continue => {}
        }
    }

    let child_flow = match visitor.generic_visit(path) {
        Some(flow) => flow,
        None => traverse_children(visitor, path),
    };
    if child_flow == Flow::Break {
        return Flow::Break;
    }

    if call_hook(visitor, HookStage::LeaveSpecific(kind), path) == Flow::Break {
        return Flow::Break;
    }

    generic_leave(visitor, path)
}

fn generic_leave(visitor: &mut dyn Visitor, path: &NodePath<'_>) -> Flow {
    match call_hook(visitor, HookStage::Leave, path) {
        Flow::Break => Flow::Break,
        _ => Flow::Continue,
    }
}

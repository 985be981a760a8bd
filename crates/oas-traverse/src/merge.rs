//! Composing several visitors into one traversal pass.

use crate::{
    node::NodeKind,
    path::NodePath,
    visitor::{call_hook, for_each_node_kind, Flow, HookStage, Visitor},
};

/// Per-child dispatch state inside a [`MergedVisitor`].
#[derive(Debug, Clone, Copy)]
struct ChildState {
    /// A child that returned [`Flow::Break`] is removed for the rest of the
    /// traversal.
    active: bool,
    /// Depth at which the child asked to skip children; hooks below that
    /// depth are withheld from it until the traversal returns there.
    skip_depth: Option<usize>,
}

/// A composite visitor running several visitors in declaration order.
///
/// Skip and break are tracked per child: one child skipping a subtree does
/// not silence the others, and one child breaking removes only itself. The
/// composite asks the engine to skip only when every still-active child is
/// skipping, and to break only when no child remains active.
pub struct MergedVisitor<'a> {
    visitors: Vec<&'a mut dyn Visitor>,
    states: Vec<ChildState>,
}

impl std::fmt::Debug for MergedVisitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergedVisitor")
            .field("visitors", &self.visitors.len())
            .field("states", &self.states)
            .finish()
    }
}

/// Merge visitors into one composite visitor.
pub fn merge_visitors<'a>(visitors: Vec<&'a mut dyn Visitor>) -> MergedVisitor<'a> {
    let states = vec![
        ChildState {
            active: true,
            skip_depth: None,
        };
        visitors.len()
    ];

    MergedVisitor { visitors, states }
}

impl MergedVisitor<'_> {
    fn dispatch(&mut self, stage: HookStage, path: &NodePath<'_>) -> Flow {
        if self.visitors.is_empty() {
            return Flow::Continue;
        }

        let depth = path.depth();
        let enter_stage = stage.is_enter_stage();

        for (visitor, state) in self.visitors.iter_mut().zip(self.states.iter_mut()) {
            if !state.active {
                continue;
            }

            if let Some(skip_depth) = state.skip_depth {
                if depth > skip_depth {
                    continue;
                }
                if depth == skip_depth {
                    // Only the generic leave of the skipped node reaches the
                    // child; it also re-arms the child for its siblings.
                    if stage != HookStage::Leave {
                        continue;
                    }
                    state.skip_depth = None;
                } else {
                    state.skip_depth = None;
                }
            }

            match call_hook(*visitor, stage, path) {
                Flow::Break => state.active = false,
                Flow::SkipChildren if enter_stage => state.skip_depth = Some(depth),
                _ => {}
            }
        }

        if !self.states.iter().any(|state| state.active) {
            return Flow::Break;
        }

        let all_skipping = enter_stage
            && self
                .states
                .iter()
                .filter(|state| state.active)
                .all(|state| state.skip_depth.is_some_and(|d| d <= depth));

        if all_skipping {
            Flow::SkipChildren
        } else {
            Flow::Continue
        }
    }
}

macro_rules! impl_merged_visitor {
    ($($kind:ident => $enter:ident, $visit:ident, $leave:ident;)*) => {
        impl Visitor for MergedVisitor<'_> {
            fn enter(&mut self, path: &NodePath<'_>) -> Flow {
                self.dispatch(HookStage::Enter, path)
            }

            fn leave(&mut self, path: &NodePath<'_>) -> Flow {
                self.dispatch(HookStage::Leave, path)
            }

            $(
                fn $enter(&mut self, path: &NodePath<'_>) -> Flow {
                    self.dispatch(HookStage::EnterSpecific(NodeKind::$kind), path)
                }

                fn $visit(&mut self, path: &NodePath<'_>) -> Flow {
                    self.dispatch(HookStage::Visit(NodeKind::$kind), path)
                }

                fn $leave(&mut self, path: &NodePath<'_>) -> Flow {
                    self.dispatch(HookStage::LeaveSpecific(NodeKind::$kind), path)
                }
            )*
        }
    };
}

for_each_node_kind!(impl_merged_visitor);

//! The visitor contract.

use crate::{node::NodeKind, path::NodePath};

/// Control flow returned by every hook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flow {
    /// Proceed normally.
    #[default]
    Continue,
    /// Do not visit the current node's children; the generic leave hook
    /// still fires.
    SkipChildren,
    /// Terminate the whole traversal immediately.
    Break,
}

/// Applies a consumer macro to the full list of node kinds and their hook
/// method names.
macro_rules! for_each_node_kind {
    ($consumer:ident) => {
        $consumer! {
            OpenApi => enter_openapi, visit_openapi, leave_openapi;
            Info => enter_info, visit_info, leave_info;
            Contact => enter_contact, visit_contact, leave_contact;
            License => enter_license, visit_license, leave_license;
            Server => enter_server, visit_server, leave_server;
            ServerVariable => enter_server_variable, visit_server_variable, leave_server_variable;
            Paths => enter_paths, visit_paths, leave_paths;
            PathItem => enter_path_item, visit_path_item, leave_path_item;
            Operation => enter_operation, visit_operation, leave_operation;
            Parameter => enter_parameter, visit_parameter, leave_parameter;
            RequestBody => enter_request_body, visit_request_body, leave_request_body;
            Responses => enter_responses, visit_responses, leave_responses;
            Response => enter_response, visit_response, leave_response;
            Header => enter_header, visit_header, leave_header;
            MediaType => enter_media_type, visit_media_type, leave_media_type;
            Encoding => enter_encoding, visit_encoding, leave_encoding;
            Example => enter_example, visit_example, leave_example;
            Link => enter_link, visit_link, leave_link;
            Callback => enter_callback, visit_callback, leave_callback;
            Components => enter_components, visit_components, leave_components;
            SecurityScheme => enter_security_scheme, visit_security_scheme, leave_security_scheme;
            OAuthFlows => enter_oauth_flows, visit_oauth_flows, leave_oauth_flows;
            OAuthFlow => enter_oauth_flow, visit_oauth_flow, leave_oauth_flow;
            SecurityRequirement => enter_security_requirement, visit_security_requirement, leave_security_requirement;
            Tag => enter_tag, visit_tag, leave_tag;
            ExternalDoc => enter_external_doc, visit_external_doc, leave_external_doc;
            Schema => enter_schema, visit_schema, leave_schema;
            Discriminator => enter_discriminator, visit_discriminator, leave_discriminator;
            Xml => enter_xml, visit_xml, leave_xml;
            Reference => enter_reference, visit_reference, leave_reference;
        }
    };
}

pub(crate) use for_each_node_kind;

macro_rules! define_visitor_trait {
    ($($kind:ident => $enter:ident, $visit:ident, $leave:ident;)*) => {
        /// A set of hooks invoked while walking a typed document.
        ///
        /// Every hook has a no-op default, so a visitor implements only what
        /// it cares about. Hooks fire in this order on each node: [`enter`],
        /// the kind-specific `enter_*`, the kind-specific `visit_*`, the
        /// children (or [`generic_visit`] when overridden), the
        /// kind-specific `leave_*`, then [`leave`].
        ///
        /// [`enter`]: Visitor::enter
        /// [`generic_visit`]: Visitor::generic_visit
        pub trait Visitor {
            /// Fires for every node before the kind-specific hooks.
            fn enter(&mut self, _path: &NodePath<'_>) -> Flow {
                Flow::Continue
            }

            /// Fires for every node after the kind-specific leave hook.
            fn leave(&mut self, _path: &NodePath<'_>) -> Flow {
                Flow::Continue
            }

            /// Replaces automatic child traversal when it returns `Some`.
            ///
            /// Implementations that take over can still call
            /// [`traverse_children`](crate::traverse_children) for the
            /// standard behavior. Only [`Flow::Break`] in the returned value
            /// affects the traversal.
            fn generic_visit(&mut self, _path: &NodePath<'_>) -> Option<Flow> {
                None
            }

            $(
                #[allow(missing_docs)]
                fn $enter(&mut self, _path: &NodePath<'_>) -> Flow {
                    Flow::Continue
                }

                #[allow(missing_docs)]
                fn $visit(&mut self, _path: &NodePath<'_>) -> Flow {
                    Flow::Continue
                }

                #[allow(missing_docs)]
                fn $leave(&mut self, _path: &NodePath<'_>) -> Flow {
                    Flow::Continue
                }
            )*
        }
    };
}

for_each_node_kind!(define_visitor_trait);

/// Which hook of the per-node sequence is being dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HookStage {
    Enter,
    EnterSpecific(NodeKind),
    Visit(NodeKind),
    LeaveSpecific(NodeKind),
    Leave,
}

impl HookStage {
    /// Whether a [`Flow::SkipChildren`] from this stage is meaningful.
    pub(crate) fn is_enter_stage(self) -> bool {
        matches!(
            self,
            HookStage::Enter | HookStage::EnterSpecific(_) | HookStage::Visit(_)
        )
    }
}

macro_rules! define_hook_dispatch {
    ($($kind:ident => $enter:ident, $visit:ident, $leave:ident;)*) => {
        /// Invoke one hook on a visitor.
        pub(crate) fn call_hook(
            visitor: &mut dyn Visitor,
            stage: HookStage,
            path: &NodePath<'_>,
        ) -> Flow {
            match stage {
                HookStage::Enter => visitor.enter(path),
                HookStage::Leave => visitor.leave(path),
                $(
                    HookStage::EnterSpecific(NodeKind::$kind) => visitor.$enter(path),
                    HookStage::Visit(NodeKind::$kind) => visitor.$visit(path),
                    HookStage::LeaveSpecific(NodeKind::$kind) => visitor.$leave(path),
                )*
            }
        }
    };
}

for_each_node_kind!(define_hook_dispatch);

//! Object graph walker
//!
//! Visits a root object and, depth first, every object reachable from it.
//! At each node the registry's procedures for that node's kind run in
//! registration order, then the walker descends into the node's children.
//!
//! Procedures never depend on traversal order: a rule that needs nested
//! state reads the nested fields directly. Absent optional children are
//! skipped; the walker never creates objects.

use tracing::{debug, trace};

use crate::domain::object::{ApiObject, Walkable};
use crate::domain::registry::DefaulterRegistry;

pub struct Walker<'r> {
    registry: &'r DefaulterRegistry,
}

impl<'r> Walker<'r> {
    pub fn new(registry: &'r DefaulterRegistry) -> Self {
        Self { registry }
    }

    /// Default `root` and everything reachable from it, in place.
    pub fn apply_defaults<T: ApiObject>(&self, root: &mut T) {
        debug!(kind = %T::KIND, "applying defaults");
        self.visit(root);
    }

    /// Run the node's own procedures, then descend into its children.
    pub fn visit<T: ApiObject>(&self, node: &mut T) {
        for procedure in self.registry.procedures_for(T::KIND) {
            trace!(kind = %T::KIND, procedure = procedure.name(), "running procedure");
            procedure.apply(node.as_object_mut());
        }
        node.walk_children(self);
    }

    /// Visit a child field of any walkable shape.
    pub fn descend<W: Walkable + ?Sized>(&self, child: &mut W) {
        child.walk(self);
    }
}

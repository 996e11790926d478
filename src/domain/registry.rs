//! Defaulting function registry
//!
//! Maps each `ObjectKind` to an ordered list of procedures. Registration
//! happens once while the registry is being built; afterwards the registry
//! is only read, so it can be shared across threads.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::domain::object::{ApiObject, ObjectKind, ObjectMut};

type ApplyFn = Box<dyn Fn(ObjectMut<'_>) + Send + Sync>;

/// One named default-application procedure, erased to its kind's variant.
pub struct Procedure {
    name: &'static str,
    kind: ObjectKind,
    apply: ApplyFn,
}

impl Procedure {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Run against an object. Objects of another kind are left alone.
    pub fn apply(&self, object: ObjectMut<'_>) {
        (self.apply)(object);
    }
}

impl fmt::Debug for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Procedure")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct DefaulterRegistry {
    procedures: HashMap<ObjectKind, Vec<Procedure>>,
}

impl DefaulterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a procedure to `T`'s list. Procedures of one kind run in the
    /// order they were registered.
    pub fn register<T, F>(&mut self, name: &'static str, procedure: F) -> &mut Self
    where
        T: ApiObject + 'static,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        let apply = move |object: ObjectMut<'_>| {
            if let Some(target) = T::from_object_mut(object) {
                procedure(target);
            }
        };

        trace!(kind = %T::KIND, procedure = name, "registered procedure");
        self.procedures.entry(T::KIND).or_default().push(Procedure {
            name,
            kind: T::KIND,
            apply: Box::new(apply),
        });
        self
    }

    /// Procedures for `kind` in registration order; empty when none exist.
    pub fn procedures_for(&self, kind: ObjectKind) -> &[Procedure] {
        self.procedures
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Kinds with at least one procedure, sorted by declaration order.
    pub fn registered_kinds(&self) -> Vec<ObjectKind> {
        let mut kinds: Vec<ObjectKind> = self.procedures.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Total number of registered procedures.
    pub fn len(&self) -> usize {
        self.procedures.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Object kinds and the schema table the walker follows
//!
//! Every defaultable type has one `ObjectKind` variant and one `ObjectMut`
//! variant. The table at the bottom of this file is the single place that
//! says which fields of a type hold nested objects; the walker descends
//! through exactly those fields and nothing else.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::*;
use crate::domain::walker::Walker;

/// A type the defaulting engine can visit.
///
/// Implemented by the `api_objects!` table below; not meant to be
/// implemented by hand.
pub trait ApiObject {
    /// Stable type identity used as the registry key.
    const KIND: ObjectKind;

    /// Wrap `self` in its tagged variant.
    fn as_object_mut(&mut self) -> ObjectMut<'_>;

    /// Unwrap a tagged variant. `None` when the variant belongs to another kind.
    fn from_object_mut(object: ObjectMut<'_>) -> Option<&mut Self>;

    /// Hand every nested object field to the walker.
    fn walk_children(&mut self, walker: &Walker<'_>);
}

/// A field shape the walker can descend through: a nested object,
/// an optional one, a sequence, or a map of them.
pub trait Walkable {
    fn walk(&mut self, walker: &Walker<'_>);
}

macro_rules! api_objects {
    ($( $kind:ident { $( $($field:ident).+ ),* $(,)? } ),+ $(,)?) => {
        /// Identity of every object type known to the engine.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ObjectKind {
            $( $kind, )+
        }

        impl ObjectKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [ObjectKind] = &[ $( ObjectKind::$kind, )+ ];

            pub fn name(self) -> &'static str {
                match self {
                    $( ObjectKind::$kind => stringify!($kind), )+
                }
            }
        }

        /// Mutable reference to one object, tagged with its kind.
        pub enum ObjectMut<'a> {
            $( $kind(&'a mut $kind), )+
        }

        impl ObjectMut<'_> {
            pub fn kind(&self) -> ObjectKind {
                match self {
                    $( ObjectMut::$kind(_) => ObjectKind::$kind, )+
                }
            }
        }

        $(
            impl ApiObject for $kind {
                const KIND: ObjectKind = ObjectKind::$kind;

                fn as_object_mut(&mut self) -> ObjectMut<'_> {
                    ObjectMut::$kind(self)
                }

                #[allow(unreachable_patterns)]
                fn from_object_mut(object: ObjectMut<'_>) -> Option<&mut Self> {
                    match object {
                        ObjectMut::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[allow(unused_variables)]
                fn walk_children(&mut self, walker: &Walker<'_>) {
                    $( walker.descend(&mut self.$($field).+); )*
                }
            }

            impl Walkable for $kind {
                fn walk(&mut self, walker: &Walker<'_>) {
                    walker.visit(self);
                }
            }

            impl Walkable for Option<$kind> {
                fn walk(&mut self, walker: &Walker<'_>) {
                    if let Some(inner) = self {
                        walker.visit(inner);
                    }
                }
            }

            impl Walkable for Vec<$kind> {
                fn walk(&mut self, walker: &Walker<'_>) {
                    for item in self.iter_mut() {
                        walker.visit(item);
                    }
                }
            }

            impl<K: Ord> Walkable for BTreeMap<K, $kind> {
                fn walk(&mut self, walker: &Walker<'_>) {
                    for value in self.values_mut() {
                        walker.visit(value);
                    }
                }
            }
        )+
    };
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for ObjectMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectMut").field(&self.kind()).finish()
    }
}

// kind { fields holding nested objects }
api_objects! {
    Pod { spec },
    PodSpec { volumes, containers, security_context },
    PodSecurityContext {},
    PodTemplateSpec { spec },
    PodExecOptions {},
    PodAttachOptions {},
    Container { ports, env, liveness_probe, readiness_probe, lifecycle },
    ContainerPort {},
    EnvVar { value_from },
    EnvVarSource { field_ref },
    ObjectFieldSelector {},
    Probe { handler },
    Handler { http_get },
    Lifecycle { post_start, pre_stop },
    HttpGetAction {},
    Volume { source.iscsi },
    IscsiVolumeSource {},
    PersistentVolume { spec.source.iscsi },
    PersistentVolumeClaim {},
    ReplicationController { spec.template },
    Service { spec },
    ServiceSpec {},
    Endpoints {},
    Node { status },
    NodeStatus {},
    Namespace { status },
    NamespaceStatus {},
    Secret {},
    ConfigMap {},
    LimitRange { spec.limits },
    LimitRangeItem {},
}

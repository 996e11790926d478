//! Domain Value Objects
//!
//! Small immutable value types shared by the API object model.

mod int_or_string;
mod quantity;

use std::collections::BTreeMap;

pub use int_or_string::IntOrString;
pub use quantity::{Quantity, QuantityFormat};

/// Resource name (`cpu`, `memory`, ...) to amount.
pub type ResourceList = BTreeMap<String, Quantity>;

/// Label key to label value.
pub type Labels = BTreeMap<String, String>;

/// Deep copy of a resource list; every quantity is copied, never shared.
pub fn copy_resource_list(list: &ResourceList) -> ResourceList {
    list.iter()
        .map(|(name, quantity)| (name.clone(), quantity.copy()))
        .collect()
}

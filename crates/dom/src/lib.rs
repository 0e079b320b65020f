pub mod dom_utils;
#[cfg(any(test, feature = "dom-snapshot"))]
pub mod snapshot;
pub mod traverse;

mod types;

pub use crate::traverse::{
    ancestor_tags, assign_node_ids, find_node_by_id, find_node_by_id_mut, for_each_element,
};
pub use crate::types::{Id, Node, NodeId};

#[cfg(test)]
mod tests;

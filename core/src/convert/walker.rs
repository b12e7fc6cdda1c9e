//! # Tree Walker
//!
//! Depth-first, document-order traversal of collection nodes.

use crate::collection::Node;
use crate::convert::operation::insert_operation;
use crate::oas::Paths;
use tracing::debug;

/// Visits `items` in order, recording every request in `paths`.
///
/// Folders are flattened: their requests land in the same `paths` map as
/// top-level ones. Nodes that are neither requests nor folders are skipped.
pub fn walk_items(items: &[Node], paths: &mut Paths) {
    for node in items {
        match node {
            Node::Request(item) => insert_operation(item, paths),
            Node::Folder(folder) => {
                debug!(folder = %folder.name, children = folder.item.len(), "entering folder");
                walk_items(&folder.item, paths);
            }
            Node::Unknown => debug!("skipping node without `request` or `item`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use serde_json::json;

    #[test]
    fn test_document_order_across_folders() {
        let collection = Collection::from_value(&json!({"item": [
            {"request": {"url": "/one"}},
            {"item": [
                {"request": {"url": "/two"}},
                {"item": [{"request": {"url": "/three"}}]},
                {"request": {"url": "/four"}}
            ]},
            {"description": "neither request nor folder"},
            {"request": {"url": "/five"}}
        ]}));

        let mut paths = Paths::new();
        walk_items(&collection.item, &mut paths);

        let keys: Vec<&str> = paths.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/one", "/two", "/three", "/four", "/five"]);
    }

    #[test]
    fn test_empty_folders_add_nothing() {
        let collection = Collection::from_value(&json!({"item": [
            {"name": "empty", "item": []},
            {"name": "bad children", "item": {"not": "a list"}}
        ]}));

        let mut paths = Paths::new();
        walk_items(&collection.item, &mut paths);
        assert!(paths.is_empty());
    }
}

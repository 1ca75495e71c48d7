use crate::prelude::*;

/// Shown in listings for nodes without an owner.
pub const UNKNOWN_OWNER: &str = "unknown";

/// Returns a copy of `tree` where every node is owned by `owner`.
///
/// Only the `owner` meta key changes, other keys and the shape of the
/// tree are kept as they are.
#[builder]
pub fn change_owner(tree: &Node, owner: impl Into<Value>) -> Node {
    let owner = owner.into();
    debug!("Changing owner of '{}' and its descendants to {owner}", tree.name());
    tree.map(|node| node.clone().with_meta_entry(OWNER, owner.clone()))
}

/// One `path (owner: owner)` line per node, in pre-order.
///
/// The path joins the names from the root down to the node with `/`.
pub fn names_with_owners(tree: &Node) -> Vec<String> {
    let mut lines = Vec::new();
    collect_names_with_owners(tree, "", &mut lines);
    lines
}

fn collect_names_with_owners(node: &Node, ancestry: &str, lines: &mut Vec<String>) {
    let path = format!("{ancestry}{}", node.name());
    let owner = node
        .owner()
        .unwrap_or_else(|| UNKNOWN_OWNER.to_owned());
    lines.push(format!("{path} (owner: {owner})"));
    if let Node::Directory(dir) = node {
        let ancestry = format!("{path}/");
        for child in dir.children() {
            collect_names_with_owners(child, &ancestry, lines);
        }
    }
}

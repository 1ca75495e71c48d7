use crate::prelude::*;

/// Directory receiving the new empty directories by default.
pub const DEFAULT_TARGET: &str = "nodejs-package";

/// Names of the empty directories injected by default.
pub const DEFAULT_EMPTY_DIRECTORIES: [&str; 2] = ["empty1", "empty2"];

/// Returns a copy of `tree` where every node named `target` has one new
/// empty directory appended per entry of `names`.
///
/// Fails with [`Error::NotADirectory`] if a file is named `target`, and
/// with [`Error::InvalidArgument`] if one of `names` is `target` itself,
/// since the injected directory would match again on the way down.
#[builder]
pub fn add_empty_directories(
    tree: &Node,
    #[builder(into)] target: String,
    names: Vec<String>,
) -> Result<Node> {
    if names.contains(&target) {
        return Err(Error::invalid_argument(format!(
            "cannot inject a directory named like the target '{target}'"
        )));
    }
    tree.try_map(|node| {
        if node.name() != target {
            return Ok(node.clone());
        }
        debug!("Appending {} empty directories to '{target}'", names.len());
        let extra = names
            .iter()
            .map(|name| mkdir().name(name.as_str()).call())
            .collect::<Result<Vec<_>>>()?;
        node.clone().with_appended_children(extra)
    })
}

/// Names of every directory without children, in pre-order.
pub fn empty_directories(tree: &Node) -> Vec<String> {
    let mut names = Vec::new();
    collect_empty_directories(tree, &mut names);
    names
}

fn collect_empty_directories(node: &Node, names: &mut Vec<String>) {
    let Node::Directory(dir) = node else {
        return;
    };
    if dir.children().is_empty() {
        names.push(dir.name().clone());
    } else {
        dir.children()
            .iter()
            .for_each(|child| collect_empty_directories(child, names));
    }
}

use crate::prelude::*;

/// Creates a file node, `meta` defaults to empty.
#[builder]
pub fn mkfile(#[builder(into)] name: String, #[builder(default)] meta: Meta) -> Result<Node> {
    FileNode::new(name, meta).map(Node::from)
}

/// Creates a directory node, `children` and `meta` default to empty.
#[builder]
pub fn mkdir(
    #[builder(into)] name: String,
    #[builder(default)] children: Vec<Node>,
    #[builder(default)] meta: Meta,
) -> Result<Node> {
    DirectoryNode::new(name, children, meta).map(Node::from)
}

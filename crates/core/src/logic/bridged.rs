use crate::prelude::*;
use std::fs;
use std::path::Path;

#[builder]
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    fs::read_to_string(path).map_err(Error::from)
}

/// Reads a JSON tree description from `path`.
#[builder]
pub fn load_tree(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    info!("Loading tree description from {}", path.display());
    let json = read_to_string().path(path).call()?;
    Node::from_json_str(json)
}

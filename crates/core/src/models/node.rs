use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A single entry of the tree, either a file or a directory.
///
/// Nodes are immutable values: fields are private, accessors hand out
/// shared borrows and every `with_*` helper returns a new node.
#[derive(Clone, Debug, PartialEq, Eq, IsVariant, Serialize, Deserialize)]
#[serde(try_from = "NodeDescription", into = "NodeDescription")]
pub enum Node {
    /// A leaf entry carrying only a name and meta
    File(FileNode),
    /// An entry holding an ordered list of child nodes
    Directory(DirectoryNode),
}

#[derive(Clone, Debug, PartialEq, Eq, Getters)]
pub struct FileNode {
    /// Name of the file, never empty
    #[getset(get = "pub")]
    name: String,

    #[getset(get = "pub")]
    meta: Meta,
}

#[derive(Clone, Debug, Eq, Getters)]
pub struct DirectoryNode {
    /// Name of the directory, never empty
    #[getset(get = "pub")]
    name: String,

    /// Children in insertion order
    #[getset(get = "pub")]
    children: Vec<Node>,

    #[getset(get = "pub")]
    meta: Meta,
}

fn validated_name(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(Error::invalid_argument(
            "node name must be a non-empty string",
        ));
    }
    Ok(name)
}

impl FileNode {
    pub fn new(name: impl Into<String>, meta: Meta) -> Result<Self> {
        Ok(Self {
            name: validated_name(name.into())?,
            meta,
        })
    }
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>, children: Vec<Node>, meta: Meta) -> Result<Self> {
        Ok(Self {
            name: validated_name(name.into())?,
            children,
            meta,
        })
    }

    /// Keeps name and meta, the name having been validated already.
    pub(crate) fn replacing_children(self, children: Vec<Node>) -> Self {
        Self { children, ..self }
    }
}

impl PartialEq for DirectoryNode {
    /// Children are compared as a multiset, their order does not matter.
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name
            || self.meta != other.meta
            || self.children.len() != other.children.len()
        {
            return false;
        }
        let mut unmatched: Vec<&Node> = other.children.iter().collect();
        self.children.iter().all(|child| {
            match unmatched.iter().position(|candidate| *candidate == child) {
                Some(index) => {
                    unmatched.swap_remove(index);
                    true
                }
                None => false,
            }
        })
    }
}

impl From<FileNode> for Node {
    fn from(value: FileNode) -> Self {
        Self::File(value)
    }
}

impl From<DirectoryNode> for Node {
    fn from(value: DirectoryNode) -> Self {
        Self::Directory(value)
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Self::File(file) => file.name(),
            Self::Directory(dir) => dir.name(),
        }
    }

    pub fn meta(&self) -> &Meta {
        match self {
            Self::File(file) => file.meta(),
            Self::Directory(dir) => dir.meta(),
        }
    }

    /// Children of a directory, fails with [`Error::NotADirectory`] for files.
    pub fn children(&self) -> Result<&[Node]> {
        match self {
            Self::Directory(dir) => Ok(dir.children().as_slice()),
            Self::File(file) => Err(Error::not_a_directory(file.name())),
        }
    }

    /// Owner of this node for display, `None` when unset.
    pub fn owner(&self) -> Option<String> {
        self.meta().get(OWNER).and_then(display_value)
    }

    /// Returns a copy of this node with `meta` replacing its metadata.
    pub fn with_meta(self, meta: Meta) -> Self {
        match self {
            Self::File(file) => Self::File(FileNode { meta, ..file }),
            Self::Directory(dir) => Self::Directory(DirectoryNode { meta, ..dir }),
        }
    }

    /// Returns a copy of this node with a single meta key set.
    pub fn with_meta_entry(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut meta = self.meta().clone();
        meta.insert(key.into(), value.into());
        self.with_meta(meta)
    }

    pub fn with_name(self, name: impl Into<String>) -> Result<Self> {
        let name = validated_name(name.into())?;
        Ok(match self {
            Self::File(file) => Self::File(FileNode { name, ..file }),
            Self::Directory(dir) => Self::Directory(DirectoryNode { name, ..dir }),
        })
    }

    /// Returns a copy of this directory with `children` replacing its children.
    pub fn with_children(self, children: Vec<Node>) -> Result<Self> {
        match self {
            Self::Directory(dir) => Ok(Self::Directory(DirectoryNode { children, ..dir })),
            Self::File(file) => Err(Error::not_a_directory(file.name)),
        }
    }

    /// Returns a copy of this directory with `extra` appended to its children.
    pub fn with_appended_children(self, extra: impl IntoIterator<Item = Node>) -> Result<Self> {
        match self {
            Self::Directory(mut dir) => {
                dir.children.extend(extra);
                Ok(Self::Directory(dir))
            }
            Self::File(file) => Err(Error::not_a_directory(file.name)),
        }
    }

    /// Parses a JSON tree description, validating every node.
    pub fn from_json_str(json: impl AsRef<str>) -> Result<Self> {
        serde_json::from_str(json.as_ref()).map_err(Error::from)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

/// Wire form of a [`Node`], validated on the way in.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
enum NodeDescription {
    File {
        name: String,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        meta: Meta,
    },
    Directory {
        name: String,
        #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
        meta: Meta,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Node>,
    },
}

impl TryFrom<NodeDescription> for Node {
    type Error = Error;

    fn try_from(value: NodeDescription) -> Result<Self> {
        match value {
            NodeDescription::File { name, meta } => FileNode::new(name, meta).map(Self::from),
            NodeDescription::Directory {
                name,
                meta,
                children,
            } => DirectoryNode::new(name, children, meta).map(Self::from),
        }
    }
}

impl From<Node> for NodeDescription {
    fn from(value: Node) -> Self {
        match value {
            Node::File(FileNode { name, meta }) => Self::File { name, meta },
            Node::Directory(DirectoryNode {
                name,
                children,
                meta,
            }) => Self::Directory {
                name,
                meta,
                children,
            },
        }
    }
}

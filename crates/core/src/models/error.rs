use derive_more::Debug;

pub const BINARY_NAME: &str = "fstree";

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("'{name}' is a file, not a directory")]
    NotADirectory { name: String },

    #[error("Invalid tree description: {underlying}")]
    InvalidTree { underlying: String },

    #[error("I/O error: {underlying}")]
    Io { underlying: String },
}

impl Error {
    pub fn invalid_argument(reason: impl AsRef<str>) -> Self {
        Self::InvalidArgument {
            reason: reason.as_ref().to_owned(),
        }
    }

    pub fn not_a_directory(name: impl AsRef<str>) -> Self {
        Self::NotADirectory {
            name: name.as_ref().to_owned(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidTree {
            underlying: error.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            underlying: error.to_string(),
        }
    }
}

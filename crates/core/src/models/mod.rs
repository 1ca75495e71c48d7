mod error;
mod meta;
mod node;

pub use error::*;
pub use meta::*;
pub use node::*;

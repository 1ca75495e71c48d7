mod logic;
mod models;

pub mod prelude {

    pub use crate::logic::*;
    pub use crate::models::*;

    pub use bon::{Builder, builder};
    pub use derive_more::{Display, IsVariant};
    pub use getset::{CopyGetters, Getters};
    pub use indexmap::IndexMap;
    pub use log::*;
    pub use serde_json::{Value, json};
}

mod bridged;
mod construct;
mod count;
mod empty_directories;
mod ownership;
mod sample;
mod transform;

pub use bridged::*;
pub use construct::*;
pub use count::*;
pub use empty_directories::*;
pub use ownership::*;
pub use sample::*;

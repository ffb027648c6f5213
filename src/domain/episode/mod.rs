pub mod error;
pub mod resolver;

pub use error::EpisodeError;
pub use resolver::{Episode, EpisodeResolver};

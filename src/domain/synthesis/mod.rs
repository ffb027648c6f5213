pub mod dto;
pub mod error;
pub mod service;

pub use dto::{parse_speed, ApiKey, AudioFormat, SpeechModel, SpeechRequest, SpeechSettings, Voice};
pub use error::SynthesisError;
pub use service::{estimate_cost, SynthesisClient};

pub mod service;

pub use service::{prepare_narration, Narration, VoiceoverOutcome, VoiceoverService};

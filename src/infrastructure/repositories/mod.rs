pub mod openai_speech_repository;
pub mod speech_repository;

pub use openai_speech_repository::{OpenAiSpeechRepository, DEFAULT_BASE_URL};
pub use speech_repository::SpeechRepository;

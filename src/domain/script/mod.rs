pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod pacing;

pub use error::ScriptError;
pub use extractor::{extract_section, VOICEOVER_SECTION_LABEL};
pub use normalizer::normalize;
pub use pacing::{add_pacing, PACING_MARKER};

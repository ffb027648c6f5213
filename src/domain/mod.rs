pub mod episode;
pub mod highlight;
pub mod script;
pub mod synthesis;
pub mod voiceover;

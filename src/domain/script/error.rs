#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("could not find a '{label}' section in the script")]
    SectionNotFound { label: String },
}

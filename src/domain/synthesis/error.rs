#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingCredential,

    #[error("narration text is empty, nothing to synthesize")]
    EmptyInput,

    #[error("speech API rejected the request ({status}): {body}")]
    UpstreamRejected { status: u16, body: String },

    #[error("speech API request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SynthesisError {
    fn from(err: reqwest::Error) -> Self {
        SynthesisError::Transport(err.to_string())
    }
}

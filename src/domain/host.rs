use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("failed to launch opener `{program}`: {source}")]
    Opener {
        program: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("opening links is not supported on this platform")]
    UnsupportedPlatform,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Hover,
    Click,
}

/// Outside-world side effects the app can ask for. Every call is best effort;
/// the runtime logs failures and moves on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Host: Send + Sync {
    /// Opens a URL in a new browsing context.
    async fn open_url(&self, url: &str) -> Result<(), HostError>;

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError>;

    fn play_sound(&self, sound: Sound) -> Result<(), HostError>;
}

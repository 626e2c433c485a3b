use crate::domain::host::{Host, HostError, Sound};
use async_trait::async_trait;
use std::io::Write;
use std::process::{Command, Stdio};

/// Talks to the real desktop: system clipboard, default browser and the
/// terminal bell.
#[derive(Debug, Default)]
pub struct SystemHost;

impl SystemHost {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "linux")]
const OPENER: Option<(&str, &[&str])> = Some(("xdg-open", &[]));
#[cfg(target_os = "macos")]
const OPENER: Option<(&str, &[&str])> = Some(("open", &[]));
#[cfg(target_os = "windows")]
const OPENER: Option<(&str, &[&str])> = Some(("cmd", &["/C", "start", ""]));
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const OPENER: Option<(&str, &[&str])> = None;

#[async_trait]
impl Host for SystemHost {
    async fn open_url(&self, url: &str) -> Result<(), HostError> {
        let (program, prefix) = OPENER.ok_or(HostError::UnsupportedPlatform)?;
        tracing::debug!(%url, program, "opening url");

        // The opener would otherwise scribble over the alternate screen.
        let mut child = Command::new(program)
            .args(prefix)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| HostError::Opener { program, source })?;

        // Reap the opener without blocking the runtime.
        tokio::task::spawn_blocking(move || {
            let _ = child.wait();
        });
        Ok(())
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), HostError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| HostError::Clipboard(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| HostError::Clipboard(e.to_string()))
        })
        .await
        .map_err(|e| HostError::Clipboard(e.to_string()))?
    }

    fn play_sound(&self, sound: Sound) -> Result<(), HostError> {
        // The terminal only has one voice.
        if sound == Sound::Click {
            let mut stdout = std::io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Ok(())
    }
}

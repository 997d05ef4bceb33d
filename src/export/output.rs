//! Report destinations.

use anyhow::{Context, Result};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Writer wrapper that treats a closed downstream pipe as success.
///
/// Lets `seo_audit analyze ... | head` exit cleanly.
pub(crate) struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes a rendered report to `output`, or to stdout when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub async fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    let mut writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = tokio::fs::File::create(output_path)
            .await
            .context(format!(
                "Failed to create output file: {}",
                output_path.display()
            ))?
            .into_std()
            .await;
        Box::new(file)
    } else {
        Box::new(IgnoreBrokenPipe::new(io::stdout()))
    };

    writer
        .write_all(contents.as_bytes())
        .context("Failed to write report")?;
    if !contents.ends_with('\n') {
        writer.write_all(b"\n").context("Failed to write report")?;
    }
    writer.flush().context("Failed to flush report")?;
    Ok(())
}

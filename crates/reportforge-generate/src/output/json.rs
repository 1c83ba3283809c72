use std::io::Write;

use crate::errors::OutputError;
use crate::model::BatchResult;

/// Serialization layout for a generated batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A single `{"Report_Entry": [...]}` document.
    #[default]
    Json,
    /// One record per line, without the `Report_Entry` wrapper.
    Ndjson,
}

/// Write a batch and return the number of bytes written.
pub fn write_batch<W: Write>(
    writer: W,
    batch: &BatchResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<u64, OutputError> {
    let mut writer = ByteCounter { inner: writer, count: 0 };

    match format {
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut writer, batch)?;
            } else {
                serde_json::to_writer(&mut writer, batch)?;
            }
            writer.write_all(b"\n")?;
        }
        OutputFormat::Ndjson => {
            for record in batch.records() {
                serde_json::to_writer(&mut writer, record)?;
                writer.write_all(b"\n")?;
            }
        }
    }

    writer.flush()?;
    Ok(writer.count)
}

/// Tallies accepted bytes on their way to `inner`.
struct ByteCounter<W> {
    inner: W,
    count: u64,
}

impl<W: Write> Write for ByteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let accepted = self.inner.write(buf)?;
        self.count += accepted as u64;
        Ok(accepted)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

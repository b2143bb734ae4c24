use super::ReadAt;
use anyhow::{Result, bail};
use async_trait::async_trait;

/// In-memory reader over a response body.
///
/// The analysis service returns the whole result archive as a single POST
/// response body, so random access is just slicing; the [`ReadAt`] seam is
/// kept so the ZIP parser stays source-agnostic.
pub struct MemoryReader {
    data: Vec<u8>,
}

impl MemoryReader {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

#[async_trait]
impl ReadAt for MemoryReader {
    async fn read_at(&self, offset: u64, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        // Offsets come from archive metadata, so treat anything out of
        // range (including offsets that overflow) as a malformed archive.
        let end = usize::try_from(offset)
            .ok()
            .and_then(|start| start.checked_add(buf.len()));
        let Some(end) = end.filter(|e| *e <= self.data.len()) else {
            bail!(
                "read past end of archive ({} bytes at offset {}, archive is {} bytes)",
                buf.len(),
                offset,
                self.data.len()
            );
        };
        let start = end - buf.len();

        buf.copy_from_slice(&self.data[start..end]);
        Ok(buf.len())
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

use std::io::Read;
use std::sync::Arc;

use crate::io::ReadAt;
use anyhow::{Context, Result, bail};
use flate2::read::DeflateDecoder;

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// In-memory ZIP entry extractor.
///
/// Result archives are small enough that every entry the decoder cares
/// about is pulled fully into memory; nothing is ever written to disk here.
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
}

impl<R: ReadAt> ZipExtractor<R> {
    pub fn new(reader: Arc<R>) -> Self {
        Self {
            parser: ZipParser::new(reader),
        }
    }

    /// List all entries in the archive
    pub async fn list_files(&self) -> Result<Vec<ZipFileEntry>> {
        self.parser.list_files().await
    }

    /// Extract one entry's uncompressed bytes.
    pub async fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        let data_offset = self.parser.get_data_offset(entry).await?;

        match entry.compression_method {
            CompressionMethod::Stored => {
                let mut buf = vec![0u8; entry.uncompressed_size as usize];
                self.parser.reader().read_at(data_offset, &mut buf).await?;
                Ok(buf)
            }
            CompressionMethod::Deflate => {
                let mut compressed = vec![0u8; entry.compressed_size as usize];
                self.parser
                    .reader()
                    .read_at(data_offset, &mut compressed)
                    .await?;

                let mut buf = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(compressed.as_slice())
                    .read_to_end(&mut buf)
                    .with_context(|| format!("inflating {}", entry.file_name))?;

                if buf.len() as u64 != entry.uncompressed_size {
                    bail!(
                        "{}: inflated to {} bytes, central directory says {}",
                        entry.file_name,
                        buf.len(),
                        entry.uncompressed_size
                    );
                }
                Ok(buf)
            }
            CompressionMethod::Unknown(v) => {
                bail!("unsupported compression method {} for {}", v, entry.file_name)
            }
        }
    }

    /// Extract one entry as text.
    ///
    /// Lossy UTF-8 conversion: manifest and side-data entries are expected
    /// to be UTF-8, and stray bytes should not fail the whole decode.
    pub async fn extract_to_string(&self, entry: &ZipFileEntry) -> Result<String> {
        let data = self.extract_to_memory(entry).await?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}

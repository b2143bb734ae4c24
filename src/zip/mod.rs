//! ZIP container parsing and extraction.
//!
//! The analysis service hands back its results as a single ZIP archive, so
//! this module is the first thing every decode goes through. It is split the
//! usual way:
//!
//! - [`structures`]: the PKZIP wire-format records (EOCD, ZIP64 records,
//!   central directory headers)
//! - [`parser`]: locating and parsing those records from a [`ReadAt`] source
//! - [`extractor`]: pulling individual entry bytes into memory
//!
//! ZIP files are read back-to-front: the End of Central Directory record
//! sits at the tail, points at the Central Directory, and the Central
//! Directory carries the metadata for every entry. Entry data itself lives
//! behind per-entry Local File Headers earlier in the file.
//!
//! Supported: standard ZIP and ZIP64, STORED and DEFLATE entries. Not
//! supported (the service never produces them): encryption, multi-disk
//! archives, other compression methods.
//!
//! [`ReadAt`]: crate::io::ReadAt

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;

//! Byte-level ZIP builder for tests.
//!
//! Builds the minimal structures the parser reads: one Local File Header
//! plus data per entry, the Central Directory, and the EOCD record
//! (optionally with a trailing archive comment).

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

pub struct ZipBuilder {
    data: Vec<u8>,
    central: Vec<u8>,
    entries: u16,
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            central: Vec::new(),
            entries: 0,
        }
    }

    /// Add a directory marker; `name` must end with `/`.
    pub fn dir(self, name: &str) -> Self {
        assert!(name.ends_with('/'), "directory entries end with '/'");
        self.entry(name, &[], false)
    }

    /// Add a STORED entry.
    pub fn file(self, name: &str, content: &[u8]) -> Self {
        self.entry(name, content, false)
    }

    /// Add a DEFLATE entry.
    pub fn deflated(self, name: &str, content: &[u8]) -> Self {
        self.entry(name, content, true)
    }

    fn entry(mut self, name: &str, content: &[u8], deflate: bool) -> Self {
        let mut crc = Crc::new();
        crc.update(content);
        let crc = crc.sum();

        let deflated;
        let (method, data): (u16, &[u8]) = if deflate {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(content).unwrap();
            deflated = encoder.finish().unwrap();
            (8, &deflated)
        } else {
            (0, content)
        };

        let lfh_offset = self.data.len() as u32;

        // Local File Header
        self.data.extend_from_slice(b"PK\x03\x04");
        self.data.write_u16::<LittleEndian>(20).unwrap(); // version needed
        self.data.write_u16::<LittleEndian>(0).unwrap(); // flags
        self.data.write_u16::<LittleEndian>(method).unwrap();
        self.data.write_u16::<LittleEndian>(0).unwrap(); // mod time
        self.data.write_u16::<LittleEndian>(0).unwrap(); // mod date
        self.data.write_u32::<LittleEndian>(crc).unwrap();
        self.data
            .write_u32::<LittleEndian>(data.len() as u32)
            .unwrap();
        self.data
            .write_u32::<LittleEndian>(content.len() as u32)
            .unwrap();
        self.data
            .write_u16::<LittleEndian>(name.len() as u16)
            .unwrap();
        self.data.write_u16::<LittleEndian>(0).unwrap(); // extra field length
        self.data.extend_from_slice(name.as_bytes());
        self.data.extend_from_slice(data);

        // Central Directory File Header
        self.central.extend_from_slice(b"PK\x01\x02");
        self.central.write_u16::<LittleEndian>(20).unwrap(); // version made by
        self.central.write_u16::<LittleEndian>(20).unwrap(); // version needed
        self.central.write_u16::<LittleEndian>(0).unwrap(); // flags
        self.central.write_u16::<LittleEndian>(method).unwrap();
        self.central.write_u16::<LittleEndian>(0).unwrap(); // mod time
        self.central.write_u16::<LittleEndian>(0).unwrap(); // mod date
        self.central.write_u32::<LittleEndian>(crc).unwrap();
        self.central
            .write_u32::<LittleEndian>(data.len() as u32)
            .unwrap();
        self.central
            .write_u32::<LittleEndian>(content.len() as u32)
            .unwrap();
        self.central
            .write_u16::<LittleEndian>(name.len() as u16)
            .unwrap();
        self.central.write_u16::<LittleEndian>(0).unwrap(); // extra field length
        self.central.write_u16::<LittleEndian>(0).unwrap(); // comment length
        self.central.write_u16::<LittleEndian>(0).unwrap(); // disk number start
        self.central.write_u16::<LittleEndian>(0).unwrap(); // internal attrs
        self.central.write_u32::<LittleEndian>(0).unwrap(); // external attrs
        self.central.write_u32::<LittleEndian>(lfh_offset).unwrap();
        self.central.extend_from_slice(name.as_bytes());

        self.entries += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.build_with_comment("")
    }

    pub fn build_with_comment(mut self, comment: &str) -> Vec<u8> {
        let cd_offset = self.data.len() as u32;
        let cd_size = self.central.len() as u32;
        let central = std::mem::take(&mut self.central);
        self.data.extend_from_slice(&central);

        // End of Central Directory
        self.data.extend_from_slice(b"PK\x05\x06");
        self.data.write_u16::<LittleEndian>(0).unwrap(); // disk number
        self.data.write_u16::<LittleEndian>(0).unwrap(); // disk with CD
        self.data.write_u16::<LittleEndian>(self.entries).unwrap();
        self.data.write_u16::<LittleEndian>(self.entries).unwrap();
        self.data.write_u32::<LittleEndian>(cd_size).unwrap();
        self.data.write_u32::<LittleEndian>(cd_offset).unwrap();
        self.data
            .write_u16::<LittleEndian>(comment.len() as u16)
            .unwrap();
        self.data.extend_from_slice(comment.as_bytes());

        self.data
    }
}

//! BIOS ROM.
//!
//! Holds the boot firmware image at the reset vector. The image is supplied by
//! the host, either as raw bytes or loaded from a file of exactly the configured
//! ROM size. The ROM answers word reads and refuses writes.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::common::addr::AddressRange;
use crate::config::MemoryMapConfig;
use crate::soc::traits::Device;

/// Errors raised while loading a BIOS image.
#[derive(Debug, Error)]
pub enum BiosError {
    /// The image file could not be read.
    #[error("failed to read BIOS image: {0}")]
    Io(#[from] std::io::Error),

    /// The image does not match the configured ROM size.
    #[error("BIOS image is {actual} bytes, expected {expected}")]
    BadSize {
        /// Configured ROM size.
        expected: u32,
        /// Size of the supplied image.
        actual: usize,
    },
}

/// Read-only boot ROM.
#[derive(Clone, Debug)]
pub struct Bios {
    base: u32,
    data: Vec<u8>,
}

impl Bios {
    /// Creates a ROM holding `data` at physical address `base`.
    ///
    /// The mapped window is exactly as long as the image.
    pub fn from_bytes(base: u32, data: Vec<u8>) -> Self {
        Self { base, data }
    }

    /// Creates a ROM from instruction words, laid out little-endian from `base`.
    pub fn from_words(base: u32, words: &[u32]) -> Self {
        let data = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        Self::from_bytes(base, data)
    }

    /// Creates an empty ROM; the interpreter refuses to start with one.
    pub fn empty(base: u32) -> Self {
        Self::from_bytes(base, Vec::new())
    }

    /// Loads an image file, checking it against the configured ROM size.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the raw ROM dump.
    /// * `map` - Memory map supplying the ROM base and expected size.
    ///
    /// # Errors
    ///
    /// `BiosError::Io` if the file cannot be read, `BiosError::BadSize` if its
    /// length differs from `map.bios_size`.
    pub fn from_file(path: impl AsRef<Path>, map: &MemoryMapConfig) -> Result<Self, BiosError> {
        let data = fs::read(path.as_ref())?;
        if data.len() != map.bios_size as usize {
            return Err(BiosError::BadSize {
                expected: map.bios_size,
                actual: data.len(),
            });
        }
        info!("Loaded BIOS image from {}", path.as_ref().display());
        Ok(Self::from_bytes(map.bios_base, data))
    }

    /// Returns `true` if an image is present.
    pub fn is_loaded(&self) -> bool {
        !self.data.is_empty()
    }

    /// Returns the raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Device for Bios {
    fn name(&self) -> &'static str {
        "BIOS"
    }

    fn range(&self) -> AddressRange {
        AddressRange::new(self.base, self.data.len() as u32)
    }

    /// Reads a little-endian word; bytes past the end of a truncated image read as 0.
    fn read_u32(&self, offset: u32) -> u32 {
        let mut bytes = [0u8; 4];
        let tail = self.data.iter().skip(offset as usize);
        for (dst, src) in bytes.iter_mut().zip(tail) {
            *dst = *src;
        }
        u32::from_le_bytes(bytes)
    }
}

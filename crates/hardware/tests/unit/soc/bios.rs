//! # BIOS Loading Tests
//!
//! Loading ROM images from disk and checking them against the configured size.

use std::io::Write;

use r3000_core::config::MemoryMapConfig;
use r3000_core::soc::devices::{Bios, BiosError, Device};
use tempfile::NamedTempFile;

/// Helper function to create a temporary image file for testing.
fn create_temp_image(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

fn small_map() -> MemoryMapConfig {
    MemoryMapConfig {
        bios_size: 8,
        ..MemoryMapConfig::default()
    }
}

#[test]
fn test_load_image_of_configured_size() {
    let file = create_temp_image(&[0x34, 0x12, 0x01, 0x3C, 0, 0, 0, 0]);
    let bios = Bios::from_file(file.path(), &small_map()).unwrap();
    assert!(bios.is_loaded());
    assert_eq!(bios.range().base(), 0x1FC0_0000);
    assert_eq!(bios.range().length(), 8);
    assert_eq!(bios.read_u32(0), 0x3C01_1234);
}

#[test]
fn test_load_full_size_image() {
    let map = MemoryMapConfig::default();
    let file = create_temp_image(&vec![0u8; map.bios_size as usize]);
    let bios = Bios::from_file(file.path(), &map).unwrap();
    assert_eq!(bios.data().len(), 512 * 1024);
}

#[test]
fn test_load_rejects_wrong_size() {
    let file = create_temp_image(&[0u8; 4]);
    let err = Bios::from_file(file.path(), &small_map()).unwrap_err();
    assert!(matches!(
        err,
        BiosError::BadSize {
            expected: 8,
            actual: 4
        }
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Bios::from_file(dir.path().join("missing.bin"), &small_map()).unwrap_err();
    assert!(matches!(err, BiosError::Io(_)));
}

#[test]
fn test_bytes_past_truncated_image_read_zero() {
    let bios = Bios::from_bytes(0x1FC0_0000, vec![0xAA, 0xBB]);
    assert_eq!(bios.read_u32(0), 0x0000_BBAA);
}

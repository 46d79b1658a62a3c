//! # Configuration Tests
//!
//! Tests for configuration defaults and JSON deserialization.

use r3000_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.reset_pc, 0xBFC0_0000);
    assert_eq!(config.general.register_fill, 0xDEAD_BEEF);
}

#[test]
fn test_memory_map_defaults() {
    let map = MemoryMapConfig::default();
    assert_eq!(map.bios_base, 0x1FC0_0000);
    assert_eq!(map.bios_size, 512 * 1024);
    assert_eq!(map.mem_control_base, 0x1F80_1000);
    assert_eq!(map.mem_control_size, 36);
    assert_eq!(map.ram_size_register, 0x1F80_1060);
}

#[test]
fn test_empty_json_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.reset_pc, 0xBFC0_0000);
    assert_eq!(config.memory_map.bios_size, 512 * 1024);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let json = r#"{
        "general": { "register_fill": 0 },
        "memory_map": { "bios_size": 1024 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.register_fill, 0);
    assert_eq!(config.general.reset_pc, 0xBFC0_0000);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory_map.bios_size, 1024);
    assert_eq!(config.memory_map.bios_base, 0x1FC0_0000);
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = Config::from_json("{ \"general\": ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_wrong_field_type_is_rejected() {
    let err = Config::from_json(r#"{ "general": { "reset_pc": "high" } }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid configuration"));
}

//! Configuration system for the emulator.
//!
//! This module defines the configuration structures used to parameterize the
//! machine. It provides:
//! 1. **Defaults:** Baseline reset state and the R3000A/PSX physical memory map.
//! 2. **Structures:** `GeneralConfig` (reset and tracing) and `MemoryMapConfig` (device windows).
//!
//! Configuration is supplied as JSON by the host, or use `Config::default()`.
//!
//! # Example
//!
//! ```
//! use r3000_core::config::Config;
//!
//! let json = r#"{ "general": { "trace_instructions": true } }"#;
//! let config = Config::from_json(json).unwrap();
//! assert!(config.general.trace_instructions);
//! assert_eq!(config.memory_map.bios_base, 0x1FC0_0000);
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants;

/// Errors raised while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document is malformed or has fields of the wrong type.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Reset state and tracing options.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Physical windows of the mapped devices.
    #[serde(default)]
    pub memory_map: MemoryMapConfig,
}

impl Config {
    /// Parses a configuration from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// `ConfigError::Json` if the document is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reset state and tracing options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Report every executed instruction through `tracing`.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Program counter after reset (defaults to the KSEG1 reset vector).
    #[serde(default = "GeneralConfig::default_reset_pc")]
    pub reset_pc: u32,

    /// Value loaded into `$1..$31` at reset.
    #[serde(default = "GeneralConfig::default_register_fill")]
    pub register_fill: u32,
}

impl GeneralConfig {
    fn default_reset_pc() -> u32 {
        constants::RESET_VECTOR
    }

    fn default_register_fill() -> u32 {
        constants::REGISTER_FILL
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            reset_pc: constants::RESET_VECTOR,
            register_fill: constants::REGISTER_FILL,
        }
    }
}

/// Physical memory map.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryMapConfig {
    /// BIOS ROM base address.
    #[serde(default = "MemoryMapConfig::default_bios_base")]
    pub bios_base: u32,

    /// Expected BIOS image size in bytes (checked when loading from a file).
    #[serde(default = "MemoryMapConfig::default_bios_size")]
    pub bios_size: u32,

    /// Memory-control register bank base address.
    #[serde(default = "MemoryMapConfig::default_mem_control_base")]
    pub mem_control_base: u32,

    /// Memory-control register bank size in bytes.
    #[serde(default = "MemoryMapConfig::default_mem_control_size")]
    pub mem_control_size: u32,

    /// Address of the `RAM_SIZE` configuration register.
    #[serde(default = "MemoryMapConfig::default_ram_size_register")]
    pub ram_size_register: u32,
}

impl MemoryMapConfig {
    fn default_bios_base() -> u32 {
        constants::BIOS_BASE
    }

    fn default_bios_size() -> u32 {
        constants::BIOS_SIZE
    }

    fn default_mem_control_base() -> u32 {
        constants::MEM_CONTROL_BASE
    }

    fn default_mem_control_size() -> u32 {
        constants::MEM_CONTROL_SIZE
    }

    fn default_ram_size_register() -> u32 {
        constants::RAM_SIZE_REGISTER
    }
}

impl Default for MemoryMapConfig {
    fn default() -> Self {
        Self {
            bios_base: constants::BIOS_BASE,
            bios_size: constants::BIOS_SIZE,
            mem_control_base: constants::MEM_CONTROL_BASE,
            mem_control_size: constants::MEM_CONTROL_SIZE,
            ram_size_register: constants::RAM_SIZE_REGISTER,
        }
    }
}

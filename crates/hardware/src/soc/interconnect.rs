//! System interconnect (bus) for word accesses.
//!
//! This module implements the bus that routes CPU addresses to devices. It provides:
//! 1. **Validation:** Every 32-bit access must be word-aligned; this is checked before routing.
//! 2. **Read routing:** Fetches and loads go to the BIOS; anything else is an unmapped read.
//! 3. **Write routing:** Stores to the memory-control bank and the `RAM_SIZE` register are
//!    accepted and reported as unimplemented; any other store is an unmapped write.
//!
//! CPU addresses are segment-masked before lookup, while faults and diagnostics
//! always carry the address the CPU issued.

use tracing::{error, warn};

use crate::common::addr::mask_region;
use crate::common::constants::WORD_SIZE;
use crate::common::error::{Diagnostic, Fault, Severity};
use crate::config::MemoryMapConfig;
use crate::soc::devices::{Bios, MemControl};
use crate::soc::traits::Device;

/// Bus owning every mapped device; constructed once per CPU.
#[derive(Debug)]
pub struct Interconnect {
    bios: Bios,
    mem_control: MemControl,
    ram_size_register: u32,
}

impl Interconnect {
    /// Builds the bus around a BIOS image using the given memory map.
    pub fn new(map: &MemoryMapConfig, bios: Bios) -> Self {
        Self {
            bios,
            mem_control: MemControl::new(map.mem_control_base, map.mem_control_size),
            ram_size_register: map.ram_size_register,
        }
    }

    /// Returns the BIOS ROM.
    pub fn bios(&self) -> &Bios {
        &self.bios
    }

    /// Returns the memory-control register bank.
    pub fn mem_control(&self) -> &MemControl {
        &self.mem_control
    }

    /// Returns every mapped device, ordered by base address.
    pub fn devices(&self) -> [&dyn Device; 2] {
        [&self.mem_control, &self.bios]
    }

    /// Reads a word through the fixed BIOS fetch path.
    ///
    /// # Errors
    ///
    /// `UnalignedAccess` if `address` is not word-aligned, `UnmappedRead` if it
    /// falls outside the BIOS.
    pub fn read32(&self, address: u32) -> Result<u32, Fault> {
        Self::read32_from(&self.bios, address)
    }

    /// Reads a word from a specific device.
    ///
    /// # Errors
    ///
    /// `UnalignedAccess` if `address` is not word-aligned, `UnmappedRead`
    /// (naming `device`) if the device's window does not contain it.
    pub fn read32_from(device: &dyn Device, address: u32) -> Result<u32, Fault> {
        check_alignment(address)?;
        match device.range().contains(mask_region(address)) {
            Some(offset) => Ok(device.read_u32(offset)),
            None => Err(Fault::UnmappedRead {
                address,
                device: device.name(),
            }),
        }
    }

    /// Stores a word.
    ///
    /// # Returns
    ///
    /// `Some(diagnostic)` when the store was accepted by a device whose
    /// behavior is not modeled. The diagnostic has already been logged.
    ///
    /// # Errors
    ///
    /// `UnalignedAccess` if `address` is not word-aligned, `UnmappedWrite` if no
    /// device or special register claims it.
    pub fn write32(&mut self, address: u32, value: u32) -> Result<Option<Diagnostic>, Fault> {
        check_alignment(address)?;
        let phys = mask_region(address);

        if let Some(offset) = self.mem_control.range().contains(phys) {
            self.mem_control.write_u32(offset, value)?;
            return Ok(Some(report(Diagnostic::UnimplementedStore {
                address,
                value,
                target: self.mem_control.name(),
                severity: Severity::Error,
            })));
        }

        if phys == self.ram_size_register {
            return Ok(Some(report(Diagnostic::UnimplementedStore {
                address,
                value,
                target: "RAM_SIZE",
                severity: Severity::Warning,
            })));
        }

        Err(Fault::UnmappedWrite { address, value })
    }
}

fn check_alignment(address: u32) -> Result<(), Fault> {
    if address % WORD_SIZE != 0 {
        return Err(Fault::UnalignedAccess { address });
    }
    Ok(())
}

fn report(diagnostic: Diagnostic) -> Diagnostic {
    match diagnostic.severity() {
        Severity::Error => error!("{diagnostic}"),
        Severity::Warning => warn!("{diagnostic}"),
    }
    diagnostic
}

//! Memory bus contract between the processor and the host system.

use crate::cpu::RESET_VECTOR;

/// Byte-addressable store the processor executes against. Implementations
/// cover the full 16-bit address space; there is no out-of-range address.
///
/// `read` may carry side effects when the bus is backed by memory-mapped
/// hardware; `peek` must not. Diagnostic walks (disassembly, monitors) go
/// through `peek` so that inspection never perturbs emulated state.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn peek(&self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

/// Flat 64 KiB RAM, the reference bus used by tests and simple hosts.
/// Real systems substitute their own mapping of ROM, RAM and I/O.
pub struct Ram {
    memory: Box<[u8; 0x10000]>,
}

impl Ram {
    pub fn new() -> Self {
        Ram {
            memory: Box::new([0; 0x10000]),
        }
    }

    /// Copy a program image into memory starting at `origin`. Writes wrap
    /// around the top of the address space like any other bus write.
    pub fn load(&mut self, program: &[u8], origin: u16) {
        for (i, &byte) in program.iter().enumerate() {
            let addr = origin.wrapping_add(i as u16);
            self.memory[addr as usize] = byte;
        }
    }

    /// Plant `addr` little-endian in the reset vector slot.
    pub fn set_reset_vector(&mut self, addr: u16) {
        self.memory[RESET_VECTOR as usize] = (addr & 0x00FF) as u8;
        self.memory[RESET_VECTOR as usize + 1] = (addr >> 8) as u8;
    }
}

impl Default for Ram {
    fn default() -> Self {
        Ram::new()
    }
}

impl Bus for Ram {
    fn read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn peek(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }
}

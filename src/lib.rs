//! Cycle-accurate MOS 6502 emulation core.
//!
//! The processor is the whole story here: a 256-entry decode table, twelve
//! addressing modes, the documented instruction set with page-cross cycle
//! penalties, the reset/IRQ/NMI sequences and the indirect-JMP hardware bug.
//! Memory sits behind the [`Bus`] trait so the core drops into any machine
//! built around this chip; [`Ram`] is the flat 64 KiB reference bus.
//!
//! ```
//! use mos6502::{Bus, Cpu, Ram};
//!
//! let mut ram = Ram::new();
//! // LDA #$05 / STA $00, entered through the reset vector.
//! ram.load(&[0xA9, 0x05, 0x85, 0x00], 0x8000);
//! ram.set_reset_vector(0x8000);
//!
//! let mut cpu = Cpu::new();
//! cpu.connect(ram);
//! cpu.reset()?;
//! while !cpu.complete() {
//!     cpu.clock()?; // burn the reset latency
//! }
//!
//! for _ in 0..2 {
//!     loop {
//!         cpu.clock()?;
//!         if cpu.complete() {
//!             break;
//!         }
//!     }
//! }
//!
//! assert_eq!(cpu.a, 0x05);
//! assert_eq!(cpu.bus().unwrap().peek(0x0000), 0x05);
//! # Ok::<(), mos6502::CpuError>(())
//! ```

mod bus;
mod cpu;
mod error;
mod snapshot;

pub use bus::{Bus, Ram};
pub use cpu::{Cpu, StatusFlags, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
pub use error::{CpuError, Result};
pub use snapshot::Snapshot;

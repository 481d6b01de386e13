//! Cycle-accurate MOS 6502 core: registers, decode table, addressing modes,
//! operation handlers and the clock/interrupt state machine.

use bitflags::bitflags;

use crate::bus::Bus;
use crate::error::{CpuError, Result};
use crate::snapshot::Snapshot;

mod table;
#[cfg(test)]
mod tests;

use table::{AddrMode, Op, INSTRUCTIONS};

/// NMI handler address slot (little-endian).
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Power-on / reset address slot (little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ and BRK handler address slot (little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;

// Hardware stack lives in page one, descending.
const STACK_BASE: u16 = 0x0100;

const RESET_CYCLES: u8 = 8;
const IRQ_CYCLES: u8 = 7;
const NMI_CYCLES: u8 = 8;

bitflags! {
    /// Processor status register. UNUSED is hard-wired high on the chip;
    /// several operations force it when the register passes over the stack.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b00000001;
        const ZERO = 0b00000010;
        const INTERRUPT_DISABLE = 0b00000100;
        const DECIMAL = 0b00001000;
        const BREAK = 0b00010000;
        const UNUSED = 0b00100000;
        const OVERFLOW = 0b01000000;
        const NEGATIVE = 0b10000000;
    }
}

/// The processor. Generic over the memory bus it executes against; the bus
/// is wired once with [`Cpu::connect`] and every stepping operation reports
/// a configuration fault if called before that.
///
/// Drive it with [`Cpu::clock`] once per emulated cycle. Instructions take
/// effect in full during the fetch tick and the remaining cycles only burn
/// time, which is indistinguishable from real hardware from the outside.
pub struct Cpu<B> {
    pub a: u8,      // Accumulator
    pub x: u8,      // X register
    pub y: u8,      // Y register
    pub sp: u8,     // Stack pointer (offset into page 0x0100)
    pub pc: u16,    // Program counter
    pub status: StatusFlags,
    fetched: u8,   // Operand byte latched by fetch()
    addr_abs: u16, // Effective address resolved by the addressing mode
    addr_rel: u16, // Sign-extended branch displacement
    opcode: u8,    // Opcode of the in-flight instruction
    cycles: u8,    // Pending cycles for the in-flight instruction
    ticks: u64,    // Total clock pulses observed
    bus: Option<B>,
}

impl<B: Bus> Cpu<B> {
    pub fn new() -> Self {
        Cpu {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0,
            status: StatusFlags::UNUSED,
            fetched: 0,
            addr_abs: 0,
            addr_rel: 0,
            opcode: 0,
            cycles: 0,
            ticks: 0,
            bus: None,
        }
    }

    /// Wire the memory bus. Replaces any previously connected bus; the old
    /// one is dropped.
    pub fn connect(&mut self, bus: B) {
        self.bus = Some(bus);
    }

    pub fn bus(&self) -> Option<&B> {
        self.bus.as_ref()
    }

    pub fn bus_mut(&mut self) -> Option<&mut B> {
        self.bus.as_mut()
    }

    /// 1 if `flag` is set, 0 otherwise.
    pub fn get_flag(&self, flag: StatusFlags) -> u8 {
        if self.status.contains(flag) {
            1
        } else {
            0
        }
    }

    /// Set or clear exactly `flag`, leaving every other bit untouched.
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.status.set(flag, value);
    }

    /// Cycles left before the in-flight instruction finishes.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Total clock pulses since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True at an instruction boundary, i.e. the next `clock` call will
    /// fetch. Lets a driver run whole instructions:
    /// `loop { cpu.clock()?; if cpu.complete() { break; } }`.
    pub fn complete(&self) -> bool {
        self.cycles == 0
    }

    /// Advance the machine by one cycle pulse. While an instruction is in
    /// flight this only counts down; at a boundary it fetches, decodes and
    /// executes the next instruction in full and charges its cycle cost.
    pub fn clock(&mut self) -> Result<()> {
        let mut bus = self.bus.take().ok_or(CpuError::NotConnected)?;
        self.tick(&mut bus);
        self.bus = Some(bus);
        Ok(())
    }

    /// Power-on / reset sequence: clear the register file, reload the
    /// program counter from the reset vector and charge the fixed latency.
    pub fn reset(&mut self) -> Result<()> {
        let mut bus = self.bus.take().ok_or(CpuError::NotConnected)?;

        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.status = StatusFlags::UNUSED;

        self.pc = self.read_word(&mut bus, RESET_VECTOR);

        self.fetched = 0;
        self.addr_abs = 0;
        self.addr_rel = 0;
        self.cycles = RESET_CYCLES;

        log::trace!("reset: pc={:04X}", self.pc);

        self.bus = Some(bus);
        Ok(())
    }

    /// Maskable interrupt request. Ignored while INTERRUPT_DISABLE is set.
    /// Well-defined at instruction boundaries only.
    pub fn irq(&mut self) -> Result<()> {
        let mut bus = self.bus.take().ok_or(CpuError::NotConnected)?;
        if self.get_flag(StatusFlags::INTERRUPT_DISABLE) == 0 {
            self.interrupt(&mut bus, IRQ_VECTOR, IRQ_CYCLES);
            log::trace!("irq taken: pc={:04X}", self.pc);
        }
        self.bus = Some(bus);
        Ok(())
    }

    /// Non-maskable interrupt. Always honored, one cycle slower than IRQ.
    /// Well-defined at instruction boundaries only.
    pub fn nmi(&mut self) -> Result<()> {
        let mut bus = self.bus.take().ok_or(CpuError::NotConnected)?;
        self.interrupt(&mut bus, NMI_VECTOR, NMI_CYCLES);
        log::trace!("nmi taken: pc={:04X}", self.pc);
        self.bus = Some(bus);
        Ok(())
    }

    /// Capture the full processor state. Pair it with a host-side copy of
    /// memory to resume deterministically later.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: Snapshot::CURRENT_VERSION,
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status.bits(),
            fetched: self.fetched,
            addr_abs: self.addr_abs,
            addr_rel: self.addr_rel,
            opcode: self.opcode,
            cycles: self.cycles,
            ticks: self.ticks,
        }
    }

    /// Reload state captured by [`Cpu::snapshot`]. The bus is untouched;
    /// restoring memory is the host's job.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.a = snapshot.a;
        self.x = snapshot.x;
        self.y = snapshot.y;
        self.sp = snapshot.sp;
        self.pc = snapshot.pc;
        self.status = StatusFlags::from_bits_truncate(snapshot.status);
        self.fetched = snapshot.fetched;
        self.addr_abs = snapshot.addr_abs;
        self.addr_rel = snapshot.addr_rel;
        self.opcode = snapshot.opcode;
        self.cycles = snapshot.cycles;
        self.ticks = snapshot.ticks;
    }

    /// Decode `[start, stop]` into `(address, text)` lines without touching
    /// processor or bus state; all reads go through `peek`.
    pub fn disassemble(&self, start: u16, stop: u16) -> Result<Vec<(u16, String)>> {
        let bus = self.bus.as_ref().ok_or(CpuError::NotConnected)?;
        let mut lines = Vec::new();

        // Walk in 32 bits so an inclusive stop of 0xFFFF terminates.
        let mut addr = u32::from(start);
        let stop = u32::from(stop);

        while addr <= stop {
            let line_addr = addr as u16;
            let opcode = bus.peek(addr as u16);
            addr += 1;

            let instruction = &INSTRUCTIONS[opcode as usize];
            let mut text = format!("${:04x}: {}", line_addr, instruction.mnemonic);

            match instruction.mode {
                AddrMode::Imp => {
                    text.push_str(" {IMP}");
                }
                AddrMode::Imm => {
                    let value = bus.peek(addr as u16);
                    addr += 1;
                    text.push_str(&format!(" #${:02x} {{IMM}}", value));
                }
                AddrMode::Zp0
                | AddrMode::Zpx
                | AddrMode::Zpy
                | AddrMode::Izx
                | AddrMode::Izy => {
                    let lo = bus.peek(addr as u16);
                    addr += 1;
                    text.push_str(&format!(" ${:02x} {{{}}}", lo, instruction.mode.tag()));
                }
                AddrMode::Abs | AddrMode::Abx | AddrMode::Aby | AddrMode::Ind => {
                    let lo = bus.peek(addr as u16);
                    addr += 1;
                    let hi = bus.peek(addr as u16);
                    addr += 1;
                    let word = (u16::from(hi) << 8) | u16::from(lo);
                    text.push_str(&format!(" ${:04x} {{{}}}", word, instruction.mode.tag()));
                }
                AddrMode::Rel => {
                    let value = bus.peek(addr as u16);
                    addr += 1;
                    let displacement = if value & 0x80 != 0 {
                        u16::from(value) | 0xFF00
                    } else {
                        u16::from(value)
                    };
                    let target = (addr as u16).wrapping_add(displacement);
                    text.push_str(&format!(" ${:02x} [${:04x}] {{REL}}", value, target));
                }
            }

            lines.push((line_addr, text));
        }

        Ok(lines)
    }

    // --- clock machine ---

    fn tick(&mut self, bus: &mut B) {
        self.ticks += 1;

        if self.cycles != 0 {
            self.cycles -= 1;
            return;
        }

        self.opcode = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let instruction = &INSTRUCTIONS[self.opcode as usize];
        self.cycles = instruction.cycles;

        let extra_addr = self.resolve(bus, instruction.mode);
        let extra_op = self.execute(bus, instruction.op);

        // The extra cycle is only charged when the addressing mode crossed a
        // page AND the operation is one that pays for it.
        self.cycles += extra_addr & extra_op;
    }

    /// Shared IRQ/NMI sequence. Pushes the return address and the status
    /// with BREAK clear, UNUSED set and the pre-interrupt disable bit, then
    /// vectors and charges the latency.
    fn interrupt(&mut self, bus: &mut B, vector: u16, latency: u8) {
        self.push_word(bus, self.pc);

        let mut pushed = self.status;
        pushed.remove(StatusFlags::BREAK);
        pushed.insert(StatusFlags::UNUSED);
        self.push(bus, pushed.bits());

        self.pc = self.read_word(bus, vector);
        self.set_flag(StatusFlags::INTERRUPT_DISABLE, true);

        self.cycles = latency;
    }

    // --- bus helpers ---

    fn read_word(&mut self, bus: &mut B, addr: u16) -> u16 {
        let lo = u16::from(bus.read(addr));
        let hi = u16::from(bus.read(addr.wrapping_add(1)));
        (hi << 8) | lo
    }

    fn push(&mut self, bus: &mut B, data: u8) {
        bus.write(STACK_BASE + u16::from(self.sp), data);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn push_word(&mut self, bus: &mut B, data: u16) {
        self.push(bus, (data >> 8) as u8);
        self.push(bus, (data & 0x00FF) as u8);
    }

    fn pull(&mut self, bus: &mut B) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE + u16::from(self.sp))
    }

    fn pull_word(&mut self, bus: &mut B) -> u16 {
        let lo = u16::from(self.pull(bus));
        let hi = u16::from(self.pull(bus));
        (hi << 8) | lo
    }

    /// Latch the operand for the in-flight instruction: the accumulator in
    /// implied mode, the byte at the effective address otherwise.
    fn fetch(&mut self, bus: &mut B) -> u8 {
        if INSTRUCTIONS[self.opcode as usize].mode != AddrMode::Imp {
            self.fetched = bus.read(self.addr_abs);
        }
        self.fetched
    }

    // --- addressing modes ---

    fn resolve(&mut self, bus: &mut B, mode: AddrMode) -> u8 {
        match mode {
            AddrMode::Imp => self.imp(),
            AddrMode::Imm => self.imm(),
            AddrMode::Zp0 => self.zp0(bus),
            AddrMode::Zpx => self.zpx(bus),
            AddrMode::Zpy => self.zpy(bus),
            AddrMode::Rel => self.rel(bus),
            AddrMode::Abs => self.abs(bus),
            AddrMode::Abx => self.abx(bus),
            AddrMode::Aby => self.aby(bus),
            AddrMode::Ind => self.ind(bus),
            AddrMode::Izx => self.izx(bus),
            AddrMode::Izy => self.izy(bus),
        }
    }

    fn imp(&mut self) -> u8 {
        self.fetched = self.a;
        0
    }

    fn imm(&mut self) -> u8 {
        self.addr_abs = self.pc;
        self.pc = self.pc.wrapping_add(1);
        0
    }

    fn zp0(&mut self, bus: &mut B) -> u8 {
        self.addr_abs = u16::from(bus.read(self.pc));
        self.pc = self.pc.wrapping_add(1);
        0
    }

    fn zpx(&mut self, bus: &mut B) -> u8 {
        // Index wraps within page zero, never carries into page one.
        self.addr_abs = u16::from(bus.read(self.pc).wrapping_add(self.x));
        self.pc = self.pc.wrapping_add(1);
        0
    }

    fn zpy(&mut self, bus: &mut B) -> u8 {
        self.addr_abs = u16::from(bus.read(self.pc).wrapping_add(self.y));
        self.pc = self.pc.wrapping_add(1);
        0
    }

    fn rel(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.addr_rel = if value & 0x80 != 0 {
            u16::from(value) | 0xFF00
        } else {
            u16::from(value)
        };
        0
    }

    fn abs(&mut self, bus: &mut B) -> u8 {
        self.addr_abs = self.read_word(bus, self.pc);
        self.pc = self.pc.wrapping_add(2);
        0
    }

    fn abx(&mut self, bus: &mut B) -> u8 {
        let lo = u16::from(bus.read(self.pc));
        self.pc = self.pc.wrapping_add(1);
        let hi = u16::from(bus.read(self.pc));
        self.pc = self.pc.wrapping_add(1);

        self.addr_abs = ((hi << 8) | lo).wrapping_add(u16::from(self.x));
        if (self.addr_abs & 0xFF00) != (hi << 8) {
            1
        } else {
            0
        }
    }

    fn aby(&mut self, bus: &mut B) -> u8 {
        let lo = u16::from(bus.read(self.pc));
        self.pc = self.pc.wrapping_add(1);
        let hi = u16::from(bus.read(self.pc));
        self.pc = self.pc.wrapping_add(1);

        self.addr_abs = ((hi << 8) | lo).wrapping_add(u16::from(self.y));
        if (self.addr_abs & 0xFF00) != (hi << 8) {
            1
        } else {
            0
        }
    }

    fn ind(&mut self, bus: &mut B) -> u8 {
        let ptr_lo = u16::from(bus.read(self.pc));
        self.pc = self.pc.wrapping_add(1);
        let ptr_hi = u16::from(bus.read(self.pc));
        self.pc = self.pc.wrapping_add(1);
        let ptr = (ptr_hi << 8) | ptr_lo;

        // Hardware bug: a pointer ending in 0xFF wraps within its page when
        // the high byte is read, instead of carrying into the next page.
        self.addr_abs = if ptr_lo == 0x00FF {
            (u16::from(bus.read(ptr & 0xFF00)) << 8) | u16::from(bus.read(ptr))
        } else {
            (u16::from(bus.read(ptr.wrapping_add(1))) << 8) | u16::from(bus.read(ptr))
        };
        0
    }

    fn izx(&mut self, bus: &mut B) -> u8 {
        let base = bus.read(self.pc).wrapping_add(self.x);
        self.pc = self.pc.wrapping_add(1);

        let lo = u16::from(bus.read(u16::from(base)));
        let hi = u16::from(bus.read(u16::from(base.wrapping_add(1))));
        self.addr_abs = (hi << 8) | lo;
        0
    }

    fn izy(&mut self, bus: &mut B) -> u8 {
        let ptr = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);

        let lo = u16::from(bus.read(u16::from(ptr)));
        let hi = u16::from(bus.read(u16::from(ptr.wrapping_add(1))));

        self.addr_abs = ((hi << 8) | lo).wrapping_add(u16::from(self.y));
        if (self.addr_abs & 0xFF00) != (hi << 8) {
            1
        } else {
            0
        }
    }

    // --- operations ---

    fn execute(&mut self, bus: &mut B, op: Op) -> u8 {
        match op {
            Op::Adc => self.adc(bus),
            Op::And => self.and(bus),
            Op::Asl => self.asl(bus),
            Op::Bcc => self.bcc(),
            Op::Bcs => self.bcs(),
            Op::Beq => self.beq(),
            Op::Bit => self.bit(bus),
            Op::Bmi => self.bmi(),
            Op::Bne => self.bne(),
            Op::Bpl => self.bpl(),
            Op::Brk => self.brk(bus),
            Op::Bvc => self.bvc(),
            Op::Bvs => self.bvs(),
            Op::Clc => self.clc(),
            Op::Cld => self.cld(),
            Op::Cli => self.cli(),
            Op::Clv => self.clv(),
            Op::Cmp => self.cmp(bus),
            Op::Cpx => self.cpx(bus),
            Op::Cpy => self.cpy(bus),
            Op::Dec => self.dec(bus),
            Op::Dex => self.dex(),
            Op::Dey => self.dey(),
            Op::Eor => self.eor(bus),
            Op::Inc => self.inc(bus),
            Op::Inx => self.inx(),
            Op::Iny => self.iny(),
            Op::Jmp => self.jmp(),
            Op::Jsr => self.jsr(bus),
            Op::Lda => self.lda(bus),
            Op::Ldx => self.ldx(bus),
            Op::Ldy => self.ldy(bus),
            Op::Lsr => self.lsr(bus),
            Op::Nop => self.nop(),
            Op::Ora => self.ora(bus),
            Op::Pha => self.pha(bus),
            Op::Php => self.php(bus),
            Op::Pla => self.pla(bus),
            Op::Plp => self.plp(bus),
            Op::Rol => self.rol(bus),
            Op::Ror => self.ror(bus),
            Op::Rti => self.rti(bus),
            Op::Rts => self.rts(bus),
            Op::Sbc => self.sbc(bus),
            Op::Sec => self.sec(),
            Op::Sed => self.sed(),
            Op::Sei => self.sei(),
            Op::Sta => self.sta(bus),
            Op::Stx => self.stx(bus),
            Op::Sty => self.sty(bus),
            Op::Tax => self.tax(),
            Op::Tay => self.tay(),
            Op::Tsx => self.tsx(),
            Op::Txa => self.txa(),
            Op::Txs => self.txs(),
            Op::Tya => self.tya(),
            Op::Xxx => self.xxx(),
        }
    }

    fn set_zero_negative(&mut self, value: u8) {
        self.set_flag(StatusFlags::ZERO, value == 0);
        self.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    fn adc(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);

        let carry_in = u16::from(self.get_flag(StatusFlags::CARRY));
        let temp = u16::from(self.a) + u16::from(self.fetched) + carry_in;

        self.set_flag(StatusFlags::CARRY, temp > 255);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        // Overflow: both addends share a sign and the sum's sign differs.
        let overflow =
            (!(u16::from(self.a) ^ u16::from(self.fetched)) & (u16::from(self.a) ^ temp)) & 0x0080;
        self.set_flag(StatusFlags::OVERFLOW, overflow != 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);

        self.a = (temp & 0x00FF) as u8;
        1
    }

    fn sbc(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);

        // Same adder as ADC with the operand complemented; carry-in means
        // "no borrow".
        let value = u16::from(self.fetched) ^ 0x00FF;
        let carry_in = u16::from(self.get_flag(StatusFlags::CARRY));
        let temp = u16::from(self.a) + value + carry_in;

        self.set_flag(StatusFlags::CARRY, temp & 0xFF00 != 0);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        let overflow = (temp ^ u16::from(self.a)) & (temp ^ value) & 0x0080;
        self.set_flag(StatusFlags::OVERFLOW, overflow != 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);

        self.a = (temp & 0x00FF) as u8;
        1
    }

    fn and(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        self.a &= self.fetched;
        self.set_zero_negative(self.a);
        1
    }

    fn ora(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        self.a |= self.fetched;
        self.set_zero_negative(self.a);
        1
    }

    fn eor(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        self.a ^= self.fetched;
        self.set_zero_negative(self.a);
        1
    }

    fn asl(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let temp = u16::from(self.fetched) << 1;

        self.set_flag(StatusFlags::CARRY, temp & 0xFF00 != 0);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);

        let result = (temp & 0x00FF) as u8;
        if INSTRUCTIONS[self.opcode as usize].mode == AddrMode::Imp {
            self.a = result;
        } else {
            bus.write(self.addr_abs, result);
        }
        0
    }

    fn lsr(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        self.set_flag(StatusFlags::CARRY, self.fetched & 0x01 != 0);

        let result = self.fetched >> 1;
        self.set_zero_negative(result);

        if INSTRUCTIONS[self.opcode as usize].mode == AddrMode::Imp {
            self.a = result;
        } else {
            bus.write(self.addr_abs, result);
        }
        0
    }

    fn rol(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let temp = (u16::from(self.fetched) << 1) | u16::from(self.get_flag(StatusFlags::CARRY));

        self.set_flag(StatusFlags::CARRY, temp & 0xFF00 != 0);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);

        let result = (temp & 0x00FF) as u8;
        if INSTRUCTIONS[self.opcode as usize].mode == AddrMode::Imp {
            self.a = result;
        } else {
            bus.write(self.addr_abs, result);
        }
        0
    }

    fn ror(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let carry_in = u16::from(self.get_flag(StatusFlags::CARRY)) << 7;
        let temp = carry_in | u16::from(self.fetched >> 1);

        self.set_flag(StatusFlags::CARRY, self.fetched & 0x01 != 0);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);

        let result = (temp & 0x00FF) as u8;
        if INSTRUCTIONS[self.opcode as usize].mode == AddrMode::Imp {
            self.a = result;
        } else {
            bus.write(self.addr_abs, result);
        }
        0
    }

    fn cmp(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let temp = u16::from(self.a).wrapping_sub(u16::from(self.fetched));

        self.set_flag(StatusFlags::CARRY, self.a >= self.fetched);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);
        1
    }

    fn cpx(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let temp = u16::from(self.x).wrapping_sub(u16::from(self.fetched));

        self.set_flag(StatusFlags::CARRY, self.x >= self.fetched);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);
        0
    }

    fn cpy(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let temp = u16::from(self.y).wrapping_sub(u16::from(self.fetched));

        self.set_flag(StatusFlags::CARRY, self.y >= self.fetched);
        self.set_flag(StatusFlags::ZERO, temp & 0x00FF == 0);
        self.set_flag(StatusFlags::NEGATIVE, temp & 0x0080 != 0);
        0
    }

    fn inc(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let result = self.fetched.wrapping_add(1);
        bus.write(self.addr_abs, result);
        self.set_zero_negative(result);
        0
    }

    fn dec(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let result = self.fetched.wrapping_sub(1);
        bus.write(self.addr_abs, result);
        self.set_zero_negative(result);
        0
    }

    fn inx(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        self.set_zero_negative(self.x);
        0
    }

    fn iny(&mut self) -> u8 {
        self.y = self.y.wrapping_add(1);
        self.set_zero_negative(self.y);
        0
    }

    fn dex(&mut self) -> u8 {
        self.x = self.x.wrapping_sub(1);
        self.set_zero_negative(self.x);
        0
    }

    fn dey(&mut self) -> u8 {
        self.y = self.y.wrapping_sub(1);
        self.set_zero_negative(self.y);
        0
    }

    fn lda(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        self.a = self.fetched;
        self.set_zero_negative(self.a);
        1
    }

    fn ldx(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        self.x = self.fetched;
        self.set_zero_negative(self.x);
        1
    }

    fn ldy(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        self.y = self.fetched;
        self.set_zero_negative(self.y);
        1
    }

    fn sta(&mut self, bus: &mut B) -> u8 {
        bus.write(self.addr_abs, self.a);
        0
    }

    fn stx(&mut self, bus: &mut B) -> u8 {
        bus.write(self.addr_abs, self.x);
        0
    }

    fn sty(&mut self, bus: &mut B) -> u8 {
        bus.write(self.addr_abs, self.y);
        0
    }

    fn bit(&mut self, bus: &mut B) -> u8 {
        self.fetch(bus);
        let temp = self.a & self.fetched;

        self.set_flag(StatusFlags::ZERO, temp == 0);
        // N and V mirror bits 7 and 6 of the operand, not of the AND result.
        self.set_flag(StatusFlags::NEGATIVE, self.fetched & 0x80 != 0);
        self.set_flag(StatusFlags::OVERFLOW, self.fetched & 0x40 != 0);
        0
    }

    // Taken-branch path shared by all eight conditions: +1 cycle, +1 more
    // when the target sits in a different page than the next instruction.
    fn branch(&mut self) {
        self.cycles += 1;
        self.addr_abs = self.pc.wrapping_add(self.addr_rel);

        if (self.addr_abs & 0xFF00) != (self.pc & 0xFF00) {
            self.cycles += 1;
        }
        self.pc = self.addr_abs;
    }

    fn bcc(&mut self) -> u8 {
        if self.get_flag(StatusFlags::CARRY) == 0 {
            self.branch();
        }
        0
    }

    fn bcs(&mut self) -> u8 {
        if self.get_flag(StatusFlags::CARRY) == 1 {
            self.branch();
        }
        0
    }

    fn beq(&mut self) -> u8 {
        if self.get_flag(StatusFlags::ZERO) == 1 {
            self.branch();
        }
        0
    }

    fn bne(&mut self) -> u8 {
        if self.get_flag(StatusFlags::ZERO) == 0 {
            self.branch();
        }
        0
    }

    fn bmi(&mut self) -> u8 {
        if self.get_flag(StatusFlags::NEGATIVE) == 1 {
            self.branch();
        }
        0
    }

    fn bpl(&mut self) -> u8 {
        if self.get_flag(StatusFlags::NEGATIVE) == 0 {
            self.branch();
        }
        0
    }

    fn bvc(&mut self) -> u8 {
        if self.get_flag(StatusFlags::OVERFLOW) == 0 {
            self.branch();
        }
        0
    }

    fn bvs(&mut self) -> u8 {
        if self.get_flag(StatusFlags::OVERFLOW) == 1 {
            self.branch();
        }
        0
    }

    fn jmp(&mut self) -> u8 {
        self.pc = self.addr_abs;
        0
    }

    fn jsr(&mut self, bus: &mut B) -> u8 {
        // Push the address of the instruction's final byte; RTS adds one.
        self.pc = self.pc.wrapping_sub(1);
        self.push_word(bus, self.pc);
        self.pc = self.addr_abs;
        0
    }

    fn rts(&mut self, bus: &mut B) -> u8 {
        self.pc = self.pull_word(bus);
        self.pc = self.pc.wrapping_add(1);
        0
    }

    fn pha(&mut self, bus: &mut B) -> u8 {
        self.push(bus, self.a);
        0
    }

    fn pla(&mut self, bus: &mut B) -> u8 {
        self.a = self.pull(bus);
        self.set_zero_negative(self.a);
        0
    }

    fn php(&mut self, bus: &mut B) -> u8 {
        // BREAK and UNUSED read as set in the pushed copy and are cleared
        // in the live register afterwards.
        let pushed = self.status | StatusFlags::BREAK | StatusFlags::UNUSED;
        self.push(bus, pushed.bits());
        self.set_flag(StatusFlags::BREAK, false);
        self.set_flag(StatusFlags::UNUSED, false);
        0
    }

    fn plp(&mut self, bus: &mut B) -> u8 {
        let value = self.pull(bus);
        self.status = StatusFlags::from_bits_truncate(value);
        self.set_flag(StatusFlags::UNUSED, true);
        0
    }

    fn rti(&mut self, bus: &mut B) -> u8 {
        let value = self.pull(bus);
        self.status = StatusFlags::from_bits_truncate(value);
        self.status.remove(StatusFlags::BREAK);
        self.status.remove(StatusFlags::UNUSED);

        self.pc = self.pull_word(bus);
        0
    }

    fn brk(&mut self, bus: &mut B) -> u8 {
        // Two-byte instruction: immediate mode consumed the padding byte,
        // and the pushed return address skips one more.
        self.pc = self.pc.wrapping_add(1);
        self.push_word(bus, self.pc);

        let pushed = self.status | StatusFlags::BREAK | StatusFlags::UNUSED;
        self.push(bus, pushed.bits());

        self.pc = self.read_word(bus, IRQ_VECTOR);
        self.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
        0
    }

    fn tax(&mut self) -> u8 {
        self.x = self.a;
        self.set_zero_negative(self.x);
        0
    }

    fn tay(&mut self) -> u8 {
        self.y = self.a;
        self.set_zero_negative(self.y);
        0
    }

    fn txa(&mut self) -> u8 {
        self.a = self.x;
        self.set_zero_negative(self.a);
        0
    }

    fn tya(&mut self) -> u8 {
        self.a = self.y;
        self.set_zero_negative(self.a);
        0
    }

    fn tsx(&mut self) -> u8 {
        self.x = self.sp;
        self.set_zero_negative(self.x);
        0
    }

    fn txs(&mut self) -> u8 {
        self.sp = self.x;
        0
    }

    fn clc(&mut self) -> u8 {
        self.set_flag(StatusFlags::CARRY, false);
        0
    }

    fn sec(&mut self) -> u8 {
        self.set_flag(StatusFlags::CARRY, true);
        0
    }

    fn cli(&mut self) -> u8 {
        self.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
        0
    }

    fn sei(&mut self) -> u8 {
        self.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
        0
    }

    fn cld(&mut self) -> u8 {
        self.set_flag(StatusFlags::DECIMAL, false);
        0
    }

    fn sed(&mut self) -> u8 {
        self.set_flag(StatusFlags::DECIMAL, true);
        0
    }

    fn clv(&mut self) -> u8 {
        self.set_flag(StatusFlags::OVERFLOW, false);
        0
    }

    fn nop(&mut self) -> u8 {
        // 0xEA is the canonical NOP; the other fillers behave the same but
        // report the extra-cycle signal their slots carry on hardware.
        if self.opcode == 0xEA {
            0
        } else {
            1
        }
    }

    fn xxx(&mut self) -> u8 {
        log::debug!(
            "undocumented opcode {:02X} at {:04X}, burning cycles only",
            self.opcode,
            self.pc.wrapping_sub(1)
        );
        0
    }
}

impl<B: Bus> Default for Cpu<B> {
    fn default() -> Self {
        Cpu::new()
    }
}

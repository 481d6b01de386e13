//! Opcode decode table: 256 immutable descriptors indexed by the opcode byte.
//!
//! Undocumented opcodes carry the `???` mnemonic and dispatch to the
//! harmless fallback, with the cycle count the hardware burns on them.

/// Addressing mode tag, dispatched by `Cpu::resolve`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum AddrMode {
    Imp,
    Imm,
    Zp0,
    Zpx,
    Zpy,
    Rel,
    Abs,
    Abx,
    Aby,
    Ind,
    Izx,
    Izy,
}

impl AddrMode {
    /// Canonical tag text as printed by the disassembler.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            AddrMode::Imp => "IMP",
            AddrMode::Imm => "IMM",
            AddrMode::Zp0 => "ZP0",
            AddrMode::Zpx => "ZPX",
            AddrMode::Zpy => "ZPY",
            AddrMode::Rel => "REL",
            AddrMode::Abs => "ABS",
            AddrMode::Abx => "ABX",
            AddrMode::Aby => "ABY",
            AddrMode::Ind => "IND",
            AddrMode::Izx => "IZX",
            AddrMode::Izy => "IZY",
        }
    }
}

/// Operation tag, dispatched by `Cpu::execute`. `Xxx` is the fallback for
/// every undocumented opcode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Op {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    Xxx,
}

pub(crate) struct Instruction {
    pub mnemonic: &'static str,
    pub mode: AddrMode,
    pub op: Op,
    pub cycles: u8,
}

const fn op(mnemonic: &'static str, mode: AddrMode, op: Op, cycles: u8) -> Instruction {
    Instruction {
        mnemonic,
        mode,
        op,
        cycles,
    }
}

use AddrMode::*;
use Op::*;

#[rustfmt::skip]
pub(crate) const INSTRUCTIONS: [Instruction; 256] = [
    // 0x00
    op("BRK", Imm, Brk, 7), op("ORA", Izx, Ora, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 3), op("ORA", Zp0, Ora, 3), op("ASL", Zp0, Asl, 5), op("???", Imp, Xxx, 5),
    op("PHP", Imp, Php, 3), op("ORA", Imm, Ora, 2), op("ASL", Imp, Asl, 2), op("???", Imp, Xxx, 2),
    op("???", Imp, Xxx, 4), op("ORA", Abs, Ora, 4), op("ASL", Abs, Asl, 6), op("???", Imp, Xxx, 6),
    // 0x10
    op("BPL", Rel, Bpl, 2), op("ORA", Izy, Ora, 5), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 4), op("ORA", Zpx, Ora, 4), op("ASL", Zpx, Asl, 6), op("???", Imp, Xxx, 6),
    op("CLC", Imp, Clc, 2), op("ORA", Aby, Ora, 4), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 7),
    op("???", Imp, Xxx, 4), op("ORA", Abx, Ora, 4), op("ASL", Abx, Asl, 7), op("???", Imp, Xxx, 7),
    // 0x20
    op("JSR", Abs, Jsr, 6), op("AND", Izx, And, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("BIT", Zp0, Bit, 3), op("AND", Zp0, And, 3), op("ROL", Zp0, Rol, 5), op("???", Imp, Xxx, 5),
    op("PLP", Imp, Plp, 4), op("AND", Imm, And, 2), op("ROL", Imp, Rol, 2), op("???", Imp, Xxx, 2),
    op("BIT", Abs, Bit, 4), op("AND", Abs, And, 4), op("ROL", Abs, Rol, 6), op("???", Imp, Xxx, 6),
    // 0x30
    op("BMI", Rel, Bmi, 2), op("AND", Izy, And, 5), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 4), op("AND", Zpx, And, 4), op("ROL", Zpx, Rol, 6), op("???", Imp, Xxx, 6),
    op("SEC", Imp, Sec, 2), op("AND", Aby, And, 4), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 7),
    op("???", Imp, Xxx, 4), op("AND", Abx, And, 4), op("ROL", Abx, Rol, 7), op("???", Imp, Xxx, 7),
    // 0x40
    op("RTI", Imp, Rti, 6), op("EOR", Izx, Eor, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 3), op("EOR", Zp0, Eor, 3), op("LSR", Zp0, Lsr, 5), op("???", Imp, Xxx, 5),
    op("PHA", Imp, Pha, 3), op("EOR", Imm, Eor, 2), op("LSR", Imp, Lsr, 2), op("???", Imp, Xxx, 2),
    op("JMP", Abs, Jmp, 3), op("EOR", Abs, Eor, 4), op("LSR", Abs, Lsr, 6), op("???", Imp, Xxx, 6),
    // 0x50
    op("BVC", Rel, Bvc, 2), op("EOR", Izy, Eor, 5), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 4), op("EOR", Zpx, Eor, 4), op("LSR", Zpx, Lsr, 6), op("???", Imp, Xxx, 6),
    op("CLI", Imp, Cli, 2), op("EOR", Aby, Eor, 4), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 7),
    op("???", Imp, Xxx, 4), op("EOR", Abx, Eor, 4), op("LSR", Abx, Lsr, 7), op("???", Imp, Xxx, 7),
    // 0x60
    op("RTS", Imp, Rts, 6), op("ADC", Izx, Adc, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 3), op("ADC", Zp0, Adc, 3), op("ROR", Zp0, Ror, 5), op("???", Imp, Xxx, 5),
    op("PLA", Imp, Pla, 4), op("ADC", Imm, Adc, 2), op("ROR", Imp, Ror, 2), op("???", Imp, Xxx, 2),
    op("JMP", Ind, Jmp, 5), op("ADC", Abs, Adc, 4), op("ROR", Abs, Ror, 6), op("???", Imp, Xxx, 6),
    // 0x70
    op("BVS", Rel, Bvs, 2), op("ADC", Izy, Adc, 5), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 4), op("ADC", Zpx, Adc, 4), op("ROR", Zpx, Ror, 6), op("???", Imp, Xxx, 6),
    op("SEI", Imp, Sei, 2), op("ADC", Aby, Adc, 4), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 7),
    op("???", Imp, Xxx, 4), op("ADC", Abx, Adc, 4), op("ROR", Abx, Ror, 7), op("???", Imp, Xxx, 7),
    // 0x80
    op("???", Imp, Xxx, 2), op("STA", Izx, Sta, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 6),
    op("STY", Zp0, Sty, 3), op("STA", Zp0, Sta, 3), op("STX", Zp0, Stx, 3), op("???", Imp, Xxx, 3),
    op("DEY", Imp, Dey, 2), op("???", Imp, Xxx, 2), op("TXA", Imp, Txa, 2), op("???", Imp, Xxx, 2),
    op("STY", Abs, Sty, 4), op("STA", Abs, Sta, 4), op("STX", Abs, Stx, 4), op("???", Imp, Xxx, 4),
    // 0x90
    op("BCC", Rel, Bcc, 2), op("STA", Izy, Sta, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 6),
    op("STY", Zpx, Sty, 4), op("STA", Zpx, Sta, 4), op("STX", Zpy, Stx, 4), op("???", Imp, Xxx, 4),
    op("TYA", Imp, Tya, 2), op("STA", Aby, Sta, 5), op("TXS", Imp, Txs, 2), op("???", Imp, Xxx, 5),
    op("???", Imp, Xxx, 5), op("STA", Abx, Sta, 5), op("???", Imp, Xxx, 5), op("???", Imp, Xxx, 5),
    // 0xA0
    op("LDY", Imm, Ldy, 2), op("LDA", Izx, Lda, 6), op("LDX", Imm, Ldx, 2), op("???", Imp, Xxx, 6),
    op("LDY", Zp0, Ldy, 3), op("LDA", Zp0, Lda, 3), op("LDX", Zp0, Ldx, 3), op("???", Imp, Xxx, 3),
    op("TAY", Imp, Tay, 2), op("LDA", Imm, Lda, 2), op("TAX", Imp, Tax, 2), op("???", Imp, Xxx, 2),
    op("LDY", Abs, Ldy, 4), op("LDA", Abs, Lda, 4), op("LDX", Abs, Ldx, 4), op("???", Imp, Xxx, 4),
    // 0xB0
    op("BCS", Rel, Bcs, 2), op("LDA", Izy, Lda, 5), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 5),
    op("LDY", Zpx, Ldy, 4), op("LDA", Zpx, Lda, 4), op("LDX", Zpy, Ldx, 4), op("???", Imp, Xxx, 4),
    op("CLV", Imp, Clv, 2), op("LDA", Aby, Lda, 4), op("TSX", Imp, Tsx, 2), op("???", Imp, Xxx, 4),
    op("LDY", Abx, Ldy, 4), op("LDA", Abx, Lda, 4), op("LDX", Aby, Ldx, 4), op("???", Imp, Xxx, 4),
    // 0xC0
    op("CPY", Imm, Cpy, 2), op("CMP", Izx, Cmp, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("CPY", Zp0, Cpy, 3), op("CMP", Zp0, Cmp, 3), op("DEC", Zp0, Dec, 5), op("???", Imp, Xxx, 5),
    op("INY", Imp, Iny, 2), op("CMP", Imm, Cmp, 2), op("DEX", Imp, Dex, 2), op("???", Imp, Xxx, 2),
    op("CPY", Abs, Cpy, 4), op("CMP", Abs, Cmp, 4), op("DEC", Abs, Dec, 6), op("???", Imp, Xxx, 6),
    // 0xD0
    op("BNE", Rel, Bne, 2), op("CMP", Izy, Cmp, 5), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 4), op("CMP", Zpx, Cmp, 4), op("DEC", Zpx, Dec, 6), op("???", Imp, Xxx, 6),
    op("CLD", Imp, Cld, 2), op("CMP", Aby, Cmp, 4), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 7),
    op("???", Imp, Xxx, 4), op("CMP", Abx, Cmp, 4), op("DEC", Abx, Dec, 7), op("???", Imp, Xxx, 7),
    // 0xE0
    op("CPX", Imm, Cpx, 2), op("SBC", Izx, Sbc, 6), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("CPX", Zp0, Cpx, 3), op("SBC", Zp0, Sbc, 3), op("INC", Zp0, Inc, 5), op("???", Imp, Xxx, 5),
    op("INX", Imp, Inx, 2), op("SBC", Imm, Sbc, 2), op("NOP", Imp, Nop, 2), op("???", Imp, Xxx, 2),
    op("CPX", Abs, Cpx, 4), op("SBC", Abs, Sbc, 4), op("INC", Abs, Inc, 6), op("???", Imp, Xxx, 6),
    // 0xF0
    op("BEQ", Rel, Beq, 2), op("SBC", Izy, Sbc, 5), op("???", Imp, Xxx, 2), op("???", Imp, Xxx, 8),
    op("???", Imp, Xxx, 4), op("SBC", Zpx, Sbc, 4), op("INC", Zpx, Inc, 6), op("???", Imp, Xxx, 6),
    op("SED", Imp, Sed, 2), op("SBC", Aby, Sbc, 4), op("NOP", Imp, Nop, 2), op("???", Imp, Xxx, 7),
    op("???", Imp, Xxx, 4), op("SBC", Abx, Sbc, 4), op("INC", Abx, Inc, 7), op("???", Imp, Xxx, 7),
];

use super::*;

#[path = "addressing_tests.rs"]
mod addressing_mode_tests;

struct TestBus {
    memory: [u8; 0x10000],
}

impl TestBus {
    fn new() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }

    fn load_program(&mut self, program: &[u8], start_addr: u16) {
        for (i, &byte) in program.iter().enumerate() {
            self.memory[start_addr as usize + i] = byte;
        }
    }
}

impl Bus for TestBus {
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

fn setup_cpu() -> Cpu<TestBus> {
    let mut bus = TestBus::new();
    // Set reset vector
    bus.write(0xFFFC, 0x00);
    bus.write(0xFFFD, 0x80);

    let mut cpu = Cpu::new();
    cpu.connect(bus);
    cpu
}

fn load_program(cpu: &mut Cpu<TestBus>, program: &[u8]) {
    cpu.bus_mut().unwrap().load_program(program, 0x8000);
}

fn poke(cpu: &mut Cpu<TestBus>, addr: u16, data: u8) {
    cpu.bus_mut().unwrap().write(addr, data);
}

fn peek(cpu: &Cpu<TestBus>, addr: u16) -> u8 {
    cpu.bus().unwrap().peek(addr)
}

/// Reset and burn the reset latency so the next clock call fetches.
fn run_reset(cpu: &mut Cpu<TestBus>) {
    cpu.reset().unwrap();
    while !cpu.complete() {
        cpu.clock().unwrap();
    }
}

/// Run one whole instruction and return its cycle cost (base plus any
/// extras), read from the pending counter right after the fetch tick.
fn step(cpu: &mut Cpu<TestBus>) -> u8 {
    cpu.clock().unwrap();
    let cycles = cpu.cycles_remaining();
    while !cpu.complete() {
        cpu.clock().unwrap();
    }
    cycles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lda_immediate() {
        let mut cpu = setup_cpu();
        // LDA #$42
        load_program(&mut cpu, &[0xA9, 0x42]);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);

        assert_eq!(cpu.a, 0x42);
        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cycles, 2);
        assert!(!cpu.status.contains(StatusFlags::ZERO));
        assert!(!cpu.status.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_lda_zero_flag() {
        let mut cpu = setup_cpu();
        // LDA #$00
        load_program(&mut cpu, &[0xA9, 0x00]);
        run_reset(&mut cpu);

        step(&mut cpu);

        assert_eq!(cpu.a, 0x00);
        assert!(cpu.status.contains(StatusFlags::ZERO));
        assert!(!cpu.status.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_lda_negative_flag() {
        let mut cpu = setup_cpu();
        // LDA #$80
        load_program(&mut cpu, &[0xA9, 0x80]);
        run_reset(&mut cpu);

        step(&mut cpu);

        assert_eq!(cpu.a, 0x80);
        assert!(!cpu.status.contains(StatusFlags::ZERO));
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_sta_zero_page() {
        let mut cpu = setup_cpu();
        // STA $10
        load_program(&mut cpu, &[0x85, 0x10]);
        run_reset(&mut cpu);
        cpu.a = 0x42;

        let cycles = step(&mut cpu);

        assert_eq!(peek(&cpu, 0x0010), 0x42);
        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn test_ldx_ldy() {
        let mut cpu = setup_cpu();
        // LDX #$10, LDY #$20
        load_program(&mut cpu, &[0xA2, 0x10, 0xA0, 0x20]);
        run_reset(&mut cpu);

        step(&mut cpu);
        assert_eq!(cpu.x, 0x10);

        step(&mut cpu);
        assert_eq!(cpu.y, 0x20);
    }

    #[test]
    fn test_inx_wraparound() {
        let mut cpu = setup_cpu();
        // INX
        load_program(&mut cpu, &[0xE8]);
        run_reset(&mut cpu);
        cpu.x = 0xFF;

        step(&mut cpu);

        assert_eq!(cpu.x, 0x00);
        assert!(cpu.status.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_dey_underflow() {
        let mut cpu = setup_cpu();
        // DEY
        load_program(&mut cpu, &[0x88]);
        run_reset(&mut cpu);
        cpu.y = 0x00;

        step(&mut cpu);

        assert_eq!(cpu.y, 0xFF);
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
        assert!(!cpu.status.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_adc_no_carry() {
        let mut cpu = setup_cpu();
        // ADC #$20
        load_program(&mut cpu, &[0x69, 0x20]);
        run_reset(&mut cpu);
        cpu.a = 0x10;

        step(&mut cpu);

        assert_eq!(cpu.a, 0x30);
        assert!(!cpu.status.contains(StatusFlags::CARRY));
        assert!(!cpu.status.contains(StatusFlags::OVERFLOW));
    }

    #[test]
    fn test_adc_with_carry_out() {
        let mut cpu = setup_cpu();
        // ADC #$01
        load_program(&mut cpu, &[0x69, 0x01]);
        run_reset(&mut cpu);
        cpu.a = 0xFF;

        step(&mut cpu);

        assert_eq!(cpu.a, 0x00);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_adc_carry_in() {
        let mut cpu = setup_cpu();
        // ADC #$20
        load_program(&mut cpu, &[0x69, 0x20]);
        run_reset(&mut cpu);
        cpu.a = 0x10;
        cpu.set_flag(StatusFlags::CARRY, true);

        step(&mut cpu);

        assert_eq!(cpu.a, 0x31);
        assert!(!cpu.status.contains(StatusFlags::CARRY));
    }

    #[test]
    fn test_adc_signed_overflow() {
        let mut cpu = setup_cpu();
        // ADC #$50: 0x50 + 0x50 overflows past +127
        load_program(&mut cpu, &[0x69, 0x50]);
        run_reset(&mut cpu);
        cpu.a = 0x50;

        step(&mut cpu);

        assert_eq!(cpu.a, 0xA0);
        assert!(cpu.status.contains(StatusFlags::OVERFLOW));
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
        assert!(!cpu.status.contains(StatusFlags::CARRY));
    }

    #[test]
    fn test_sbc_no_borrow() {
        let mut cpu = setup_cpu();
        // SBC #$10 with carry set (no borrow pending)
        load_program(&mut cpu, &[0xE9, 0x10]);
        run_reset(&mut cpu);
        cpu.a = 0x30;
        cpu.set_flag(StatusFlags::CARRY, true);

        step(&mut cpu);

        assert_eq!(cpu.a, 0x20);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(!cpu.status.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_sbc_with_borrow_out() {
        let mut cpu = setup_cpu();
        // SBC #$20 from a smaller accumulator borrows and clears carry
        load_program(&mut cpu, &[0xE9, 0x20]);
        run_reset(&mut cpu);
        cpu.a = 0x10;
        cpu.set_flag(StatusFlags::CARRY, true);

        step(&mut cpu);

        assert_eq!(cpu.a, 0xF0);
        assert!(!cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_cmp_carry_rules() {
        let mut cpu = setup_cpu();
        // CMP #$30, CMP #$50, CMP #$40 against A = 0x40
        load_program(&mut cpu, &[0xC9, 0x30, 0xC9, 0x50, 0xC9, 0x40]);
        run_reset(&mut cpu);
        cpu.a = 0x40;

        step(&mut cpu);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(!cpu.status.contains(StatusFlags::ZERO));

        step(&mut cpu);
        assert!(!cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));

        step(&mut cpu);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::ZERO));
        assert_eq!(cpu.a, 0x40);
    }

    #[test]
    fn test_cpx_cpy() {
        let mut cpu = setup_cpu();
        // CPX #$10, CPY #$30
        load_program(&mut cpu, &[0xE0, 0x10, 0xC0, 0x30]);
        run_reset(&mut cpu);
        cpu.x = 0x10;
        cpu.y = 0x20;

        step(&mut cpu);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::ZERO));

        step(&mut cpu);
        assert!(!cpu.status.contains(StatusFlags::CARRY));
    }

    #[test]
    fn test_branch_not_taken_costs_base() {
        let mut cpu = setup_cpu();
        // BEQ +$10 with ZERO clear
        load_program(&mut cpu, &[0xF0, 0x10]);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);

        assert_eq!(cpu.pc, 0x8002);
        assert_eq!(cycles, 2);
    }

    #[test]
    fn test_branch_taken_same_page() {
        let mut cpu = setup_cpu();
        // BEQ +$10 with ZERO set
        load_program(&mut cpu, &[0xF0, 0x10]);
        run_reset(&mut cpu);
        cpu.set_flag(StatusFlags::ZERO, true);

        let cycles = step(&mut cpu);

        assert_eq!(cpu.pc, 0x8012);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn test_branch_taken_page_cross() {
        let mut cpu = setup_cpu();
        // BEQ -$0A crosses back into page 0x7F
        load_program(&mut cpu, &[0xF0, 0xF6]);
        run_reset(&mut cpu);
        cpu.set_flag(StatusFlags::ZERO, true);

        let cycles = step(&mut cpu);

        assert_eq!(cpu.pc, 0x7FF8);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_jmp_absolute() {
        let mut cpu = setup_cpu();
        // JMP $9000
        load_program(&mut cpu, &[0x4C, 0x00, 0x90]);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);

        assert_eq!(cpu.pc, 0x9000);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn test_jsr_rts() {
        let mut cpu = setup_cpu();
        // JSR $9000 ... $9000: RTS
        load_program(&mut cpu, &[0x20, 0x00, 0x90]);
        poke(&mut cpu, 0x9000, 0x60);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);
        assert_eq!(cpu.pc, 0x9000);
        assert_eq!(cycles, 6);
        // Return address is the JSR's final byte, pushed high then low.
        assert_eq!(peek(&cpu, 0x01FD), 0x80);
        assert_eq!(peek(&cpu, 0x01FC), 0x02);
        assert_eq!(cpu.sp, 0xFB);

        let cycles = step(&mut cpu);
        assert_eq!(cpu.pc, 0x8003);
        assert_eq!(cycles, 6);
        assert_eq!(cpu.sp, 0xFD);
    }

    #[test]
    fn test_pha_pla() {
        let mut cpu = setup_cpu();
        // LDA #$37, PHA, LDA #$00, PLA
        load_program(&mut cpu, &[0xA9, 0x37, 0x48, 0xA9, 0x00, 0x68]);
        run_reset(&mut cpu);

        step(&mut cpu);
        step(&mut cpu);
        assert_eq!(peek(&cpu, 0x01FD), 0x37);
        assert_eq!(cpu.sp, 0xFC);

        step(&mut cpu);
        assert!(cpu.status.contains(StatusFlags::ZERO));

        step(&mut cpu);
        assert_eq!(cpu.a, 0x37);
        assert_eq!(cpu.sp, 0xFD);
        assert!(!cpu.status.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_php_plp() {
        let mut cpu = setup_cpu();
        // SEC, PHP, CLC, PLP
        load_program(&mut cpu, &[0x38, 0x08, 0x18, 0x28]);
        run_reset(&mut cpu);

        step(&mut cpu);
        step(&mut cpu);
        // Pushed copy reads BREAK and UNUSED as set.
        assert_eq!(peek(&cpu, 0x01FD), 0x31);

        step(&mut cpu);
        assert!(!cpu.status.contains(StatusFlags::CARRY));

        step(&mut cpu);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::UNUSED));
    }

    #[test]
    fn test_brk_pushes_and_vectors() {
        let mut cpu = setup_cpu();
        // BRK with the IRQ/BRK vector pointing at $1234
        load_program(&mut cpu, &[0x00]);
        poke(&mut cpu, 0xFFFE, 0x34);
        poke(&mut cpu, 0xFFFF, 0x12);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);

        assert_eq!(cpu.pc, 0x1234);
        assert_eq!(cycles, 7);
        // Return address skips the padding byte.
        assert_eq!(peek(&cpu, 0x01FD), 0x80);
        assert_eq!(peek(&cpu, 0x01FC), 0x03);
        // Pushed status carries BREAK|UNUSED and the pre-interrupt I bit.
        assert_eq!(peek(&cpu, 0x01FB), 0x30);
        assert_eq!(cpu.sp, 0xFA);
        assert!(cpu.status.contains(StatusFlags::INTERRUPT_DISABLE));
    }

    #[test]
    fn test_irq_masked_when_disabled() {
        let mut cpu = setup_cpu();
        poke(&mut cpu, 0xFFFE, 0x00);
        poke(&mut cpu, 0xFFFF, 0x90);
        run_reset(&mut cpu);
        cpu.set_flag(StatusFlags::INTERRUPT_DISABLE, true);

        cpu.irq().unwrap();

        assert_eq!(cpu.pc, 0x8000);
        assert!(cpu.complete());
    }

    #[test]
    fn test_irq_taken() {
        let mut cpu = setup_cpu();
        poke(&mut cpu, 0xFFFE, 0x00);
        poke(&mut cpu, 0xFFFF, 0x90);
        run_reset(&mut cpu);

        cpu.irq().unwrap();

        assert_eq!(cpu.pc, 0x9000);
        assert_eq!(cpu.sp, 0xFA);
        // Pushed status: UNUSED set, BREAK clear, I still clear.
        assert_eq!(peek(&cpu, 0x01FB), 0x20);
        assert!(cpu.status.contains(StatusFlags::INTERRUPT_DISABLE));

        let mut latency = 0;
        while !cpu.complete() {
            cpu.clock().unwrap();
            latency += 1;
        }
        assert_eq!(latency, 7);
    }

    #[test]
    fn test_nmi_ignores_interrupt_disable() {
        let mut cpu = setup_cpu();
        poke(&mut cpu, 0xFFFA, 0x00);
        poke(&mut cpu, 0xFFFB, 0xA0);
        run_reset(&mut cpu);
        cpu.set_flag(StatusFlags::INTERRUPT_DISABLE, true);

        cpu.nmi().unwrap();

        assert_eq!(cpu.pc, 0xA000);

        let mut latency = 0;
        while !cpu.complete() {
            cpu.clock().unwrap();
            latency += 1;
        }
        assert_eq!(latency, 8);
    }

    #[test]
    fn test_rti_restores_status_and_pc() {
        let mut cpu = setup_cpu();
        // RTI with a hand-built interrupt frame on the stack
        load_program(&mut cpu, &[0x40]);
        run_reset(&mut cpu);
        cpu.sp = 0xFA;
        poke(&mut cpu, 0x01FB, 0x31); // CARRY|BREAK|UNUSED
        poke(&mut cpu, 0x01FC, 0x34);
        poke(&mut cpu, 0x01FD, 0x12);

        let cycles = step(&mut cpu);

        assert_eq!(cpu.pc, 0x1234);
        assert_eq!(cycles, 6);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        // BREAK and UNUSED are forced clear on restore.
        assert!(!cpu.status.contains(StatusFlags::BREAK));
        assert!(!cpu.status.contains(StatusFlags::UNUSED));
    }

    #[test]
    fn test_asl_lsr_accumulator() {
        let mut cpu = setup_cpu();
        // ASL A, LSR A
        load_program(&mut cpu, &[0x0A, 0x4A]);
        run_reset(&mut cpu);
        cpu.a = 0x81;

        step(&mut cpu);
        assert_eq!(cpu.a, 0x02);
        assert!(cpu.status.contains(StatusFlags::CARRY));

        cpu.a = 0x01;
        step(&mut cpu);
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_rol_ror_carry_chain() {
        let mut cpu = setup_cpu();
        // ROL A, ROR A
        load_program(&mut cpu, &[0x2A, 0x6A]);
        run_reset(&mut cpu);
        cpu.a = 0x40;
        cpu.set_flag(StatusFlags::CARRY, true);

        step(&mut cpu);
        assert_eq!(cpu.a, 0x81);
        assert!(!cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));

        cpu.a = 0x01;
        cpu.set_flag(StatusFlags::CARRY, true);
        step(&mut cpu);
        assert_eq!(cpu.a, 0x80);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_asl_memory_writeback() {
        let mut cpu = setup_cpu();
        // ASL $10
        load_program(&mut cpu, &[0x06, 0x10]);
        poke(&mut cpu, 0x0010, 0x40);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);

        assert_eq!(peek(&cpu, 0x0010), 0x80);
        assert_eq!(cycles, 5);
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_inc_dec_memory() {
        let mut cpu = setup_cpu();
        // INC $10, DEC $20
        load_program(&mut cpu, &[0xE6, 0x10, 0xC6, 0x20]);
        poke(&mut cpu, 0x0010, 0xFF);
        poke(&mut cpu, 0x0020, 0x00);
        run_reset(&mut cpu);

        step(&mut cpu);
        assert_eq!(peek(&cpu, 0x0010), 0x00);
        assert!(cpu.status.contains(StatusFlags::ZERO));

        step(&mut cpu);
        assert_eq!(peek(&cpu, 0x0020), 0xFF);
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
    }

    #[test]
    fn test_bit_instruction() {
        let mut cpu = setup_cpu();
        // BIT $10 with operand 0xC0
        load_program(&mut cpu, &[0x24, 0x10]);
        poke(&mut cpu, 0x0010, 0xC0);
        run_reset(&mut cpu);
        cpu.a = 0x01;

        step(&mut cpu);

        // Zero comes from A & M; N and V mirror operand bits 7 and 6.
        assert!(cpu.status.contains(StatusFlags::ZERO));
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));
        assert!(cpu.status.contains(StatusFlags::OVERFLOW));
    }

    #[test]
    fn test_transfers() {
        let mut cpu = setup_cpu();
        // TAX, TAY, TSX
        load_program(&mut cpu, &[0xAA, 0xA8, 0xBA]);
        run_reset(&mut cpu);
        cpu.a = 0x80;

        step(&mut cpu);
        assert_eq!(cpu.x, 0x80);
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));

        step(&mut cpu);
        assert_eq!(cpu.y, 0x80);

        step(&mut cpu);
        assert_eq!(cpu.x, 0xFD);
    }

    #[test]
    fn test_txs_sets_no_flags() {
        let mut cpu = setup_cpu();
        // TXS with X = 0 must not touch ZERO
        load_program(&mut cpu, &[0x9A]);
        run_reset(&mut cpu);
        cpu.x = 0x00;

        step(&mut cpu);

        assert_eq!(cpu.sp, 0x00);
        assert!(!cpu.status.contains(StatusFlags::ZERO));
    }

    #[test]
    fn test_flag_set_clear_ops() {
        let mut cpu = setup_cpu();
        // SEC, SED, SEI, CLC, CLD, CLI
        load_program(&mut cpu, &[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58]);
        run_reset(&mut cpu);

        step(&mut cpu);
        step(&mut cpu);
        step(&mut cpu);
        assert!(cpu.status.contains(StatusFlags::CARRY));
        assert!(cpu.status.contains(StatusFlags::DECIMAL));
        assert!(cpu.status.contains(StatusFlags::INTERRUPT_DISABLE));

        step(&mut cpu);
        step(&mut cpu);
        step(&mut cpu);
        assert!(!cpu.status.contains(StatusFlags::CARRY));
        assert!(!cpu.status.contains(StatusFlags::DECIMAL));
        assert!(!cpu.status.contains(StatusFlags::INTERRUPT_DISABLE));
    }

    #[test]
    fn test_illegal_opcode_burns_cycles() {
        let mut cpu = setup_cpu();
        // 0x02 is undocumented: two cycles, no effect
        load_program(&mut cpu, &[0x02]);
        run_reset(&mut cpu);
        cpu.a = 0x55;

        let cycles = step(&mut cpu);

        assert_eq!(cycles, 2);
        assert_eq!(cpu.a, 0x55);
        assert_eq!(cpu.pc, 0x8001);
    }

    #[test]
    fn test_illegal_opcode_cycle_counts_vary() {
        let mut cpu = setup_cpu();
        // 0x03 burns eight cycles on hardware
        load_program(&mut cpu, &[0x03]);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);

        assert_eq!(cycles, 8);
    }

    #[test]
    fn test_nop_variants() {
        let mut cpu = setup_cpu();
        // NOP (canonical), NOP (filler 0xFA)
        load_program(&mut cpu, &[0xEA, 0xFA]);
        run_reset(&mut cpu);

        let cycles = step(&mut cpu);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.pc, 0x8001);

        let cycles = step(&mut cpu);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn test_reset_loads_vector_and_state() {
        let mut cpu = setup_cpu();
        cpu.reset().unwrap();

        assert_eq!(cpu.pc, 0x8000);
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.sp, 0xFD);
        assert_eq!(cpu.status, StatusFlags::UNUSED);

        let mut latency = 0;
        while !cpu.complete() {
            cpu.clock().unwrap();
            latency += 1;
        }
        assert_eq!(latency, 8);
    }

    #[test]
    fn test_stepping_before_connect_fails() {
        let mut cpu: Cpu<TestBus> = Cpu::new();

        assert!(matches!(cpu.clock(), Err(CpuError::NotConnected)));
        assert!(matches!(cpu.reset(), Err(CpuError::NotConnected)));
        assert!(matches!(cpu.irq(), Err(CpuError::NotConnected)));
        assert!(matches!(cpu.nmi(), Err(CpuError::NotConnected)));
        assert!(matches!(
            cpu.disassemble(0x8000, 0x8001),
            Err(CpuError::NotConnected)
        ));
    }

    #[test]
    fn test_eor_ora_and() {
        let mut cpu = setup_cpu();
        // AND #$0F, ORA #$80, EOR #$FF
        load_program(&mut cpu, &[0x29, 0x0F, 0x09, 0x80, 0x49, 0xFF]);
        run_reset(&mut cpu);
        cpu.a = 0x55;

        step(&mut cpu);
        assert_eq!(cpu.a, 0x05);

        step(&mut cpu);
        assert_eq!(cpu.a, 0x85);
        assert!(cpu.status.contains(StatusFlags::NEGATIVE));

        step(&mut cpu);
        assert_eq!(cpu.a, 0x7A);
        assert!(!cpu.status.contains(StatusFlags::NEGATIVE));
    }
}

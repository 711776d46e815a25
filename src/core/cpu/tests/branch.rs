// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::*;

#[test]
fn test_beq_taken_skips_two_instructions() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 5);
    cpu.set_reg(9, 5);

    // beq r8, r9, +2 jumps over the next two words
    step_one(&mut cpu, &mut memory, &mut console, itype(0x04, 8, 9, 2));
    assert_eq!(cpu.pc(), CODE_BASE + 12);
}

#[test]
fn test_beq_not_taken_falls_through() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 5);
    cpu.set_reg(9, 6);

    step_one(&mut cpu, &mut memory, &mut console, itype(0x04, 8, 9, 2));
    assert_eq!(cpu.pc(), CODE_BASE + 4);
}

#[test]
fn test_bne_with_equal_operands_falls_through() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 5);
    cpu.set_reg(9, 5);

    step_one(&mut cpu, &mut memory, &mut console, itype(0x05, 8, 9, 2));
    assert_eq!(cpu.pc(), CODE_BASE + 4);
}

#[test]
fn test_bne_taken() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 5);
    cpu.set_reg(9, 6);

    step_one(&mut cpu, &mut memory, &mut console, itype(0x05, 8, 9, 2));
    assert_eq!(cpu.pc(), CODE_BASE + 12);
}

#[test]
fn test_backward_branch() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_pc(CODE_BASE + 0x20);
    cpu.set_reg(8, 1);

    // bne r8, r0, -4: back over three words from the following address
    step_one(&mut cpu, &mut memory, &mut console, itype(0x05, 8, 0, 0xFFFC));
    assert_eq!(cpu.pc(), CODE_BASE + 0x14);
}

#[test]
fn test_blez_boundary() {
    let (mut cpu, mut memory, mut console) = setup();

    // blez r8 with r8 == 0 is taken
    cpu.set_reg(8, 0);
    step_one(&mut cpu, &mut memory, &mut console, itype(0x06, 8, 0, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 20);

    // blez with a positive value falls through
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 1);
    step_one(&mut cpu, &mut memory, &mut console, itype(0x06, 8, 0, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 4);

    // and with a negative value is taken
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, (-1i32) as u32);
    step_one(&mut cpu, &mut memory, &mut console, itype(0x06, 8, 0, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 20);
}

#[test]
fn test_bgtz_boundary() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 1);
    step_one(&mut cpu, &mut memory, &mut console, itype(0x07, 8, 0, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 20);

    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 0);
    step_one(&mut cpu, &mut memory, &mut console, itype(0x07, 8, 0, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 4);
}

#[test]
fn test_bltz_and_bgez() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, (-1i32) as u32);

    // bltz r8, +4 taken
    step_one(&mut cpu, &mut memory, &mut console, regimm(0x00, 8, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 20);

    // bgez r8, +4 not taken for negative r8
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, (-1i32) as u32);
    step_one(&mut cpu, &mut memory, &mut console, regimm(0x01, 8, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 4);

    // bgez taken for zero
    let (mut cpu, mut memory, mut console) = setup();
    step_one(&mut cpu, &mut memory, &mut console, regimm(0x01, 0, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 20);
}

#[test]
fn test_bgezal_links_and_branches() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 7);

    // bgezal r8, +4
    step_one(&mut cpu, &mut memory, &mut console, regimm(0x11, 8, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 20);
    assert_eq!(cpu.reg(CPU::RA), CODE_BASE + 8);
}

#[test]
fn test_bltzal_links_even_when_not_taken() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, 7);

    // bltzal r8, +4: not taken, but ra is still written
    step_one(&mut cpu, &mut memory, &mut console, regimm(0x10, 8, 4));
    assert_eq!(cpu.pc(), CODE_BASE + 4);
    assert_eq!(cpu.reg(CPU::RA), CODE_BASE + 8);
}

#[test]
fn test_j_target_composition() {
    let (mut cpu, mut memory, mut console) = setup();

    // j 0x00500000: target field is the word address
    step_one(&mut cpu, &mut memory, &mut console, jtype(0x02, 0x0050_0000 >> 2));
    assert_eq!(cpu.pc(), ((CODE_BASE + 4) & 0xF000_0000) | 0x0050_0000);
}

#[test]
fn test_jal_links_two_words_past() {
    let (mut cpu, mut memory, mut console) = setup();

    // jal 0x00500000
    step_one(&mut cpu, &mut memory, &mut console, jtype(0x03, 0x0050_0000 >> 2));
    assert_eq!(cpu.pc(), 0x0050_0000);
    assert_eq!(cpu.reg(CPU::RA), CODE_BASE + 8);
}

#[test]
fn test_jr_jumps_to_register() {
    let (mut cpu, mut memory, mut console) = setup();
    cpu.set_reg(8, CODE_BASE + 0x100);

    // jr r8
    step_one(&mut cpu, &mut memory, &mut console, special(0x08, 8, 0, 0, 0));
    assert_eq!(cpu.pc(), CODE_BASE + 0x100);
}

#[test]
fn test_jal_then_jr_returns_past_the_call() {
    let (mut cpu, mut memory, mut console) = setup();

    let sub = CODE_BASE + 0x40;
    // jal sub at CODE_BASE; jr ra at sub
    memory.write32(CODE_BASE, jtype(0x03, sub >> 2)).unwrap();
    memory.write32(sub, special(0x08, CPU::RA, 0, 0, 0)).unwrap();

    cpu.step(&mut memory, &mut console).unwrap();
    assert_eq!(cpu.pc(), sub);
    cpu.step(&mut memory, &mut console).unwrap();

    // Control returns two words after the jal
    assert_eq!(cpu.pc(), CODE_BASE + 8);
}

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

//! CPU (MIPS I) interpretation
//!
//! Architectural state is the 32 general-purpose registers, the HI/LO
//! multiply/divide registers, and the program counter. One call to
//! [`CPU::step`] fetches, decodes, and executes a single instruction.
//! Branch delay slots are not modeled: a taken branch or jump executes its
//! target as the very next instruction.

pub mod decode;

mod instructions;

#[cfg(test)]
mod tests;

use super::console::Console;
use super::error::Result;
use super::memory::Memory;
use decode::Instruction;

/// CPU architectural state
///
/// # Example
/// ```
/// use mipsim::core::cpu::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.set_reg(1, 0x12345678);
/// assert_eq!(cpu.reg(1), 0x12345678);
/// assert_eq!(cpu.reg(0), 0); // r0 is always 0
/// ```
pub struct CPU {
    /// General purpose registers (r0-r31)
    ///
    /// r0 is hardwired to always return 0
    regs: [u32; 32],

    /// Program counter
    pc: u32,

    /// HI register (multiplication result upper 32 bits, division remainder)
    hi: u32,

    /// LO register (multiplication result lower 32 bits, division quotient)
    lo: u32,

    /// Set once the guest executes the exit syscall
    exited: bool,
}

impl CPU {
    /// `v0`, the syscall number / syscall result register
    pub const V0: u8 = 2;
    /// `a0`, the first syscall argument register
    pub const A0: u8 = 4;
    /// `a1`, the second syscall argument register
    pub const A1: u8 = 5;
    /// `sp`, the stack pointer
    pub const SP: u8 = 29;
    /// `ra`, the link register written by jump-and-link
    pub const RA: u8 = 31;

    /// Create a CPU with all architectural state zeroed
    ///
    /// The loader establishes the real initial state by setting the entry
    /// point and stack pointer.
    pub fn new() -> Self {
        Self {
            regs: [0u32; 32],
            pc: 0,
            hi: 0,
            lo: 0,
            exited: false,
        }
    }

    /// Read from general purpose register
    ///
    /// r0 always returns 0.
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        if index == 0 {
            0
        } else {
            self.regs[index as usize]
        }
    }

    /// Write to general purpose register
    ///
    /// Writes to r0 are ignored (r0 is always 0).
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        if index != 0 {
            self.regs[index as usize] = value;
        }
    }

    /// Current program counter
    #[inline(always)]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Set the program counter (used by the loader)
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// HI register value
    pub fn hi(&self) -> u32 {
        self.hi
    }

    /// LO register value
    pub fn lo(&self) -> u32 {
        self.lo
    }

    /// Whether the guest has executed the exit syscall
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Fetch, decode, and execute one instruction
    ///
    /// The program counter advances to the following instruction before
    /// execution, so control-flow operations overwrite it with their
    /// target; every instruction performs exactly one PC update.
    ///
    /// # Errors
    ///
    /// Memory faults (unmapped or misaligned access, including a bad PC)
    /// and decode faults are fatal and leave the CPU state as of the
    /// failing instruction for diagnostics.
    pub fn step(&mut self, memory: &mut Memory, console: &mut Console) -> Result<()> {
        let word = memory.read32(self.pc)?;
        self.pc = self.pc.wrapping_add(4);

        let instruction = Instruction::decode(word)?;
        self.execute(instruction, memory, console)
    }

    /// Log the full register file at error level
    ///
    /// Called by the front end when the simulation dies, so the final
    /// guest state lands next to the failure diagnostic.
    pub fn dump_registers(&self) {
        log::error!(
            "PC=0x{:08X}  HI=0x{:08X}  LO=0x{:08X}",
            self.pc,
            self.hi,
            self.lo
        );
        for row in 0..8 {
            let i = row * 4;
            log::error!(
                "r{:<2}=0x{:08X}  r{:<2}=0x{:08X}  r{:<2}=0x{:08X}  r{:<2}=0x{:08X}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            );
        }
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

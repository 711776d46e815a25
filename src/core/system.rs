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

//! System integration module
//!
//! Ties the CPU, the memory image, and the host console together and
//! drives the fetch-execute loop. `load_executable` turns an ELF file
//! into mapped regions plus the initial register context; `run` then
//! interprets instructions until the guest exits or a fatal fault ends
//! the simulation.

use std::path::Path;

use super::console::Console;
use super::cpu::CPU;
use super::error::Result;
use super::loader::{round_up_word, Executable};
use super::memory::{Memory, Region};

/// The simulated machine
///
/// # Example
/// ```no_run
/// use mipsim::core::system::System;
///
/// let mut system = System::new();
/// system.load_executable("guest.elf").unwrap();
/// system.run().unwrap();
/// println!("retired {} instructions", system.instructions());
/// ```
pub struct System {
    /// CPU architectural state
    cpu: CPU,

    /// Guest memory image
    memory: Memory,

    /// Host console backing the I/O syscalls
    console: Console,

    /// Instructions retired so far
    instructions: u64,
}

impl System {
    /// Base virtual address of the user stack region
    pub const STACK_BASE: u32 = 0xC000_0000;

    /// Size of the user stack region in bytes
    pub const STACK_SIZE: u32 = 0x8000;

    /// Create a system wired to process stdin/stdout
    pub fn new() -> Self {
        Self::with_console(Console::stdio())
    }

    /// Create a system over a custom console
    ///
    /// Used by tests to substitute in-memory streams for process stdio.
    pub fn with_console(console: Console) -> Self {
        Self {
            cpu: CPU::new(),
            memory: Memory::new(),
            console,
            instructions: 0,
        }
    }

    /// Load a guest executable and establish the initial context
    ///
    /// Maps every loadable segment (zero-padded to whole words), reserves
    /// the stack region, and points the CPU at the entry point with the
    /// stack pointer at the last word of the stack.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not a valid little-endian
    /// 32-bit MIPS executable, or maps overlapping regions.
    pub fn load_executable<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let data = std::fs::read(path)?;
        let exe = Executable::load(&data)?;

        for segment in &exe.segments {
            let len = round_up_word(segment.memsz) as u32;
            self.memory
                .map(Region::with_data(segment.vaddr, len, &segment.data))?;
        }
        self.memory
            .map(Region::new(Self::STACK_BASE, Self::STACK_SIZE))?;

        self.cpu.set_pc(exe.entry);
        self.cpu
            .set_reg(CPU::SP, Self::STACK_BASE + Self::STACK_SIZE - 4);

        log::info!(
            "mapped {} region(s), sp=0x{:08X}, entry=0x{:08X}",
            self.memory.regions().len(),
            self.cpu.reg(CPU::SP),
            exe.entry
        );
        Ok(())
    }

    /// Execute one instruction
    ///
    /// # Errors
    ///
    /// Returns the fatal fault that ended the simulation, leaving the CPU
    /// and memory state in place for diagnostics.
    pub fn step(&mut self) -> Result<()> {
        self.cpu.step(&mut self.memory, &mut self.console)?;
        self.instructions += 1;
        Ok(())
    }

    /// Run until the guest exits
    ///
    /// # Errors
    ///
    /// Returns the first fatal fault; the guest exiting via syscall 10 is
    /// the only non-error way out.
    pub fn run(&mut self) -> Result<()> {
        while !self.cpu.has_exited() {
            self.step()?;
        }
        Ok(())
    }

    /// Whether the guest has executed the exit syscall
    pub fn has_exited(&self) -> bool {
        self.cpu.has_exited()
    }

    /// Current program counter
    pub fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// Instructions retired so far
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// The CPU state
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// The guest memory image
    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

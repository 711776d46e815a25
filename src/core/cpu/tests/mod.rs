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

//! CPU unit tests and shared helpers

mod branch;

use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use super::CPU;
use crate::core::console::Console;
use crate::core::memory::{Memory, Region};

/// Base address of the code region used by the tests
const CODE_BASE: u32 = 0x0040_0000;

/// Base address of the data region used by the tests
const DATA_BASE: u32 = 0x1000_0000;

/// A CPU at CODE_BASE with small code and data regions mapped
fn setup() -> (CPU, Memory, Console) {
    let mut memory = Memory::new();
    memory.map(Region::new(CODE_BASE, 0x1000)).unwrap();
    memory.map(Region::new(DATA_BASE, 0x1000)).unwrap();

    let mut cpu = CPU::new();
    cpu.set_pc(CODE_BASE);
    (cpu, memory, Console::sink())
}

/// Write `program` at the current PC and execute it to completion
fn run(cpu: &mut CPU, memory: &mut Memory, console: &mut Console, program: &[u32]) {
    let base = cpu.pc();
    for (i, &word) in program.iter().enumerate() {
        memory.write32(base + (i as u32) * 4, word).unwrap();
    }
    for _ in 0..program.len() {
        cpu.step(memory, console).unwrap();
    }
}

/// Write one instruction at the current PC and execute it
fn step_one(cpu: &mut CPU, memory: &mut Memory, console: &mut Console, word: u32) {
    memory.write32(cpu.pc(), word).unwrap();
    cpu.step(memory, console).unwrap();
}

// === Instruction encoders ===

/// Encode an R-type (SPECIAL) instruction
fn special(funct: u8, rs: u8, rt: u8, rd: u8, shamt: u8) -> u32 {
    ((rs as u32) << 21)
        | ((rt as u32) << 16)
        | ((rd as u32) << 11)
        | ((shamt as u32) << 6)
        | (funct as u32)
}

/// Encode an I-type instruction
fn itype(op: u8, rs: u8, rt: u8, imm: u16) -> u32 {
    ((op as u32) << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u32)
}

/// Encode a J-type instruction
fn jtype(op: u8, target: u32) -> u32 {
    ((op as u32) << 26) | (target & 0x03FF_FFFF)
}

/// Encode a REGIMM branch; `cond` is the rt field selecting the condition
fn regimm(cond: u8, rs: u8, offset: u16) -> u32 {
    itype(0x01, rs, cond, offset)
}

// === Console capture ===

/// A cloneable write handle so tests can inspect console output
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A console fed by `input` whose output can be read back
fn capture_console(input: &str) -> (Console, SharedBuf) {
    let buffer = SharedBuf::default();
    let console = Console::new(
        Box::new(Cursor::new(input.as_bytes().to_vec())),
        Box::new(buffer.clone()),
    );
    (console, buffer)
}

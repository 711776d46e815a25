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

//! Test fixtures: tiny hand-assembled MIPS ELF executables
//!
//! The builders here synthesize minimal but well-formed little-endian
//! 32-bit MIPS ELF images, write them to temporary files, and wire up a
//! [`System`] whose console runs over in-memory streams.

use std::cell::RefCell;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use tempfile::NamedTempFile;

use mipsim::core::console::Console;
use mipsim::core::system::System;

/// Virtual address where fixture code segments load
pub const CODE_BASE: u32 = 0x0040_0000;

/// Virtual address where fixture data segments load
pub const DATA_BASE: u32 = 0x1000_0000;

// === Instruction encoders ===

/// Encode an R-type (SPECIAL) instruction
pub fn special(funct: u8, rs: u8, rt: u8, rd: u8, shamt: u8) -> u32 {
    ((rs as u32) << 21)
        | ((rt as u32) << 16)
        | ((rd as u32) << 11)
        | ((shamt as u32) << 6)
        | (funct as u32)
}

/// Encode an I-type instruction
pub fn itype(op: u8, rs: u8, rt: u8, imm: u16) -> u32 {
    ((op as u32) << 26) | ((rs as u32) << 21) | ((rt as u32) << 16) | (imm as u32)
}

/// Encode a J-type instruction
pub fn jtype(op: u8, target: u32) -> u32 {
    ((op as u32) << 26) | (target & 0x03FF_FFFF)
}

/// The SYSCALL instruction word
pub const SYSCALL: u32 = 0x0000_000C;

/// Flatten instruction words into little-endian bytes
pub fn assemble(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

// === ELF image builder ===

/// Build a 32-bit little-endian MIPS ELF executable image
///
/// Each `(vaddr, memsz, data)` triple becomes one PT_LOAD segment with
/// `filesz == data.len()`; a `memsz` beyond that is zero-filled at load.
pub fn build_elf(entry: u32, segments: &[(u32, u32, &[u8])]) -> Vec<u8> {
    const EHDR_SIZE: usize = 52;
    const PHENT_SIZE: usize = 32;

    let phnum = segments.len();
    let data_start = EHDR_SIZE + phnum * PHENT_SIZE;

    let mut image = vec![0u8; data_start];
    image[0..4].copy_from_slice(&[0x7F, b'E', b'L', b'F']);
    image[4] = 1; // 32-bit
    image[5] = 1; // little-endian
    image[6] = 1; // e_ident version
    image[0x10..0x12].copy_from_slice(&2u16.to_le_bytes()); // ET_EXEC
    image[0x12..0x14].copy_from_slice(&8u16.to_le_bytes()); // EM_MIPS
    image[0x14..0x18].copy_from_slice(&1u32.to_le_bytes()); // EV_CURRENT
    image[0x18..0x1C].copy_from_slice(&entry.to_le_bytes());
    image[0x1C..0x20].copy_from_slice(&(EHDR_SIZE as u32).to_le_bytes());
    image[0x2A..0x2C].copy_from_slice(&(PHENT_SIZE as u16).to_le_bytes());
    image[0x2C..0x2E].copy_from_slice(&(phnum as u16).to_le_bytes());

    let mut offset = data_start;
    for (index, (vaddr, memsz, data)) in segments.iter().enumerate() {
        let base = EHDR_SIZE + index * PHENT_SIZE;
        image[base..base + 4].copy_from_slice(&1u32.to_le_bytes()); // PT_LOAD
        image[base + 0x04..base + 0x08].copy_from_slice(&(offset as u32).to_le_bytes());
        image[base + 0x08..base + 0x0C].copy_from_slice(&vaddr.to_le_bytes());
        image[base + 0x10..base + 0x14].copy_from_slice(&(data.len() as u32).to_le_bytes());
        image[base + 0x14..base + 0x18].copy_from_slice(&memsz.to_le_bytes());
        offset += data.len();
    }
    for (_, _, data) in segments {
        image.extend_from_slice(data);
    }
    image
}

/// Write an ELF image to a temporary file; `memsz == filesz` per segment
pub fn elf_file(entry: u32, segments: &[(u32, &[u8])]) -> NamedTempFile {
    let segments: Vec<(u32, u32, &[u8])> = segments
        .iter()
        .map(|&(vaddr, data)| (vaddr, data.len() as u32, data))
        .collect();
    elf_file_raw(entry, &segments)
}

/// Write an ELF image with explicit per-segment memory sizes
pub fn elf_file_raw(entry: u32, segments: &[(u32, u32, &[u8])]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(&build_elf(entry, segments))
        .expect("write ELF image");
    file
}

// === Console capture ===

/// A cloneable write handle so tests can inspect console output
#[derive(Clone, Default)]
pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
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

/// A system whose console is fed `input` and whose output can be read back
pub fn system_with_input(input: &str) -> (System, SharedBuf) {
    let buffer = SharedBuf::default();
    let console = Console::new(
        Box::new(Cursor::new(input.as_bytes().to_vec())),
        Box::new(buffer.clone()),
    );
    (System::with_console(console), buffer)
}

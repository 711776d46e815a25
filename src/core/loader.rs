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

//! Executable loading
//!
//! Guests are statically linked 32-bit little-endian MIPS ELF executables.
//! Loading parses the ELF header, validates it against that shape, and
//! collects every PT_LOAD program header as one loadable segment: `p_memsz`
//! bytes at `p_vaddr`, initialized from `p_filesz` bytes at `p_offset` and
//! zero-padded beyond. Non-LOAD headers are skipped.
//!
//! # ELF32 layout
//!
//! ```text
//! 0x00-0x03: 0x7F 'E' 'L' 'F' magic
//! 0x04:      class (1 = 32-bit)
//! 0x05:      data encoding (1 = little-endian)
//! 0x10-0x11: e_type (2 = executable)
//! 0x12-0x13: e_machine (8 = MIPS)
//! 0x14-0x17: e_version (1 = current)
//! 0x18-0x1B: e_entry
//! 0x1C-0x1F: e_phoff
//! 0x2A-0x2B: e_phentsize (32)
//! 0x2C-0x2D: e_phnum
//! ```

use super::error::{Result, SimulatorError};

/// ELF magic number
const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];
/// e_ident class for 32-bit objects
const ELFCLASS32: u8 = 1;
/// e_ident data encoding for little-endian objects
const ELFDATA2LSB: u8 = 1;
/// e_type for executable files
const ET_EXEC: u16 = 2;
/// e_machine for MIPS
const EM_MIPS: u16 = 8;
/// e_version for the current ELF version
const EV_CURRENT: u32 = 1;
/// p_type for loadable segments
const PT_LOAD: u32 = 1;

/// Size of the ELF32 file header
const EHDR_SIZE: usize = 52;
/// Size of one ELF32 program header
const PHENT_SIZE: u16 = 32;

/// One loadable segment of the executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Virtual load address (must be 4-byte aligned)
    pub vaddr: u32,

    /// Size of the segment in guest memory
    pub memsz: u32,

    /// Initial contents; at most `memsz` bytes, the rest is zero-filled
    pub data: Vec<u8>,
}

/// A parsed and validated MIPS ELF executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Executable {
    /// Initial program counter (entry point)
    pub entry: u32,

    /// Loadable segments in program-header order
    pub segments: Vec<Segment>,
}

impl Executable {
    /// Parse an executable from raw file data
    ///
    /// # Errors
    ///
    /// Returns `SimulatorError::Loader` if the image is not a well-formed
    /// statically linked little-endian 32-bit MIPS executable, or if any
    /// program header is inconsistent with the file size.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mipsim::core::loader::Executable;
    ///
    /// let data = std::fs::read("guest.elf").unwrap();
    /// let exe = Executable::load(&data).unwrap();
    /// println!("entry point: 0x{:08X}", exe.entry);
    /// ```
    pub fn load(data: &[u8]) -> Result<Self> {
        if data.len() < EHDR_SIZE {
            return Err(SimulatorError::Loader(
                "file too small for an ELF header".to_string(),
            ));
        }

        if data[0..4] != ELF_MAGIC {
            return Err(SimulatorError::Loader("bad ELF magic number".to_string()));
        }
        if data[4] != ELFCLASS32 {
            return Err(SimulatorError::Loader(format!(
                "unsupported ELF class {} (expected 32-bit)",
                data[4]
            )));
        }
        if data[5] != ELFDATA2LSB {
            return Err(SimulatorError::Loader(format!(
                "unsupported ELF data encoding {} (expected little-endian)",
                data[5]
            )));
        }

        let e_type = read_u16(data, 0x10);
        if e_type != ET_EXEC {
            return Err(SimulatorError::Loader(format!(
                "unsupported ELF type {} (expected executable)",
                e_type
            )));
        }
        let e_machine = read_u16(data, 0x12);
        if e_machine != EM_MIPS {
            return Err(SimulatorError::Loader(format!(
                "unsupported machine {} (expected MIPS)",
                e_machine
            )));
        }
        let e_version = read_u32(data, 0x14);
        if e_version != EV_CURRENT {
            return Err(SimulatorError::Loader(format!(
                "unsupported ELF version {}",
                e_version
            )));
        }
        let e_phentsize = read_u16(data, 0x2A);
        if e_phentsize != PHENT_SIZE {
            return Err(SimulatorError::Loader(format!(
                "unexpected program header size {} (expected {})",
                e_phentsize, PHENT_SIZE
            )));
        }

        let entry = read_u32(data, 0x18);
        let phoff = read_u32(data, 0x1C) as usize;
        let phnum = read_u16(data, 0x2C) as usize;

        let table_end = phoff + phnum * PHENT_SIZE as usize;
        if table_end > data.len() {
            return Err(SimulatorError::Loader(
                "program header table runs past end of file".to_string(),
            ));
        }

        let mut segments = Vec::new();
        for index in 0..phnum {
            let base = phoff + index * PHENT_SIZE as usize;
            let p_type = read_u32(data, base);
            if p_type != PT_LOAD {
                log::debug!("skipping non-LOAD program header {} (type {})", index, p_type);
                continue;
            }

            let p_offset = read_u32(data, base + 0x04) as usize;
            let p_vaddr = read_u32(data, base + 0x08);
            let p_filesz = read_u32(data, base + 0x10) as usize;
            let p_memsz = read_u32(data, base + 0x14);

            if p_memsz == 0 {
                log::debug!("skipping empty LOAD program header {}", index);
                continue;
            }
            if p_vaddr % 4 != 0 {
                return Err(SimulatorError::Loader(format!(
                    "segment {} load address 0x{:08X} is not word-aligned",
                    index, p_vaddr
                )));
            }
            if p_filesz as u64 > p_memsz as u64 {
                return Err(SimulatorError::Loader(format!(
                    "segment {} file size 0x{:X} exceeds memory size 0x{:X}",
                    index, p_filesz, p_memsz
                )));
            }
            if p_vaddr as u64 + round_up_word(p_memsz) > (1 << 32) {
                return Err(SimulatorError::Loader(format!(
                    "segment {} runs past the top of the address space",
                    index
                )));
            }
            let file_end = p_offset.checked_add(p_filesz).filter(|&end| end <= data.len());
            let Some(file_end) = file_end else {
                return Err(SimulatorError::Loader(format!(
                    "segment {} data runs past end of file",
                    index
                )));
            };

            segments.push(Segment {
                vaddr: p_vaddr,
                memsz: p_memsz,
                data: data[p_offset..file_end].to_vec(),
            });
        }

        if segments.is_empty() {
            return Err(SimulatorError::Loader(
                "executable has no loadable segments".to_string(),
            ));
        }

        log::info!(
            "ELF loaded: entry=0x{:08X}, {} loadable segment(s)",
            entry,
            segments.len()
        );

        Ok(Self { entry, segments })
    }
}

/// Round a byte count up to the next word multiple
pub fn round_up_word(len: u32) -> u64 {
    (len as u64 + 3) & !3
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

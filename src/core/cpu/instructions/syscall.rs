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

//! The syscall dispatcher
//!
//! SYSCALL hands control to the host. The syscall number is read from v0,
//! arguments from a0/a1, and results land back in v0. Guest pointers are
//! never handed to the host: string syscalls walk guest memory one byte at
//! a time through the word-granular memory image.

use super::{read_byte, write_byte, CPU};
use crate::core::console::Console;
use crate::core::error::Result;
use crate::core::memory::Memory;

/// Print a signed integer from a0
const SYS_PRINT_INT: u32 = 1;
/// Print the NUL-terminated string a0 points at
const SYS_PRINT_STRING: u32 = 4;
/// Read a signed integer into v0
const SYS_READ_INT: u32 = 5;
/// Read a line into the a0 buffer of length a1
const SYS_READ_STRING: u32 = 8;
/// Terminate the guest
const SYS_EXIT: u32 = 10;

impl CPU {
    /// SYSCALL: System Call
    ///
    /// Dispatches on the number in v0. Unknown numbers are logged and
    /// skipped; execution continues at the following instruction.
    pub(crate) fn op_syscall(&mut self, memory: &mut Memory, console: &mut Console) -> Result<()> {
        match self.reg(Self::V0) {
            SYS_PRINT_INT => console.print_int(self.reg(Self::A0) as i32),
            SYS_PRINT_STRING => self.print_string(memory, console),
            SYS_READ_INT => {
                let value = console.read_int()?;
                self.set_reg(Self::V0, value as u32);
                Ok(())
            }
            SYS_READ_STRING => self.read_string(memory, console),
            SYS_EXIT => {
                self.exited = true;
                Ok(())
            }
            number => {
                log::warn!(
                    "unknown syscall {} at PC=0x{:08X}",
                    number,
                    self.pc.wrapping_sub(4)
                );
                Ok(())
            }
        }
    }

    /// Emit guest bytes from a0 until the NUL terminator
    ///
    /// The terminator itself is not emitted. Walking off the end of a
    /// mapped region before finding a NUL is an ordinary memory fault.
    fn print_string(&mut self, memory: &Memory, console: &mut Console) -> Result<()> {
        let mut addr = self.reg(Self::A0);
        loop {
            let byte = read_byte(memory, addr)?;
            if byte == 0 {
                break;
            }
            console.write_byte(byte)?;
            addr = addr.wrapping_add(1);
        }
        console.flush()
    }

    /// Read a line into the guest buffer at a0, capacity a1
    ///
    /// At most a1 - 1 bytes are stored, newline included when it fits,
    /// then a NUL terminator. A zero-length buffer stores nothing.
    fn read_string(&mut self, memory: &mut Memory, console: &mut Console) -> Result<()> {
        let addr = self.reg(Self::A0);
        let len = self.reg(Self::A1);
        if len == 0 {
            return Ok(());
        }

        let bytes = console.read_line((len - 1) as usize)?;
        for (i, &byte) in bytes.iter().enumerate() {
            write_byte(memory, addr.wrapping_add(i as u32), byte)?;
        }
        write_byte(memory, addr.wrapping_add(bytes.len() as u32), 0)
    }
}

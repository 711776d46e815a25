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

use super::read_byte;
use super::CPU;
use crate::core::error::Result;
use crate::core::memory::Memory;

impl CPU {
    // === Load Instructions ===

    /// LW: Load Word (32-bit)
    ///
    /// The effective address must be 4-byte aligned; the memory image
    /// rejects anything else.
    ///
    /// Format: lw rt, offset(rs)
    /// Operation: rt = memory[rs + sign_extend(offset)]
    pub(crate) fn op_lw(&mut self, rs: u8, rt: u8, imm: u16, memory: &Memory) -> Result<()> {
        let offset = (imm as i16) as u32; // Sign extend
        let addr = self.reg(rs).wrapping_add(offset);

        let value = memory.read32(addr)?;
        self.set_reg(rt, value);
        Ok(())
    }

    /// LB: Load Byte (8-bit, sign-extended)
    ///
    /// Fetches the word containing the byte, extracts the little-endian
    /// lane, and sign-extends it to 32 bits. Any byte address inside a
    /// mapped region is legal.
    ///
    /// Format: lb rt, offset(rs)
    /// Operation: rt = sign_extend(memory[rs + sign_extend(offset)])
    pub(crate) fn op_lb(&mut self, rs: u8, rt: u8, imm: u16, memory: &Memory) -> Result<()> {
        let offset = (imm as i16) as u32; // Sign extend
        let addr = self.reg(rs).wrapping_add(offset);

        let value = read_byte(memory, addr)? as i8 as i32 as u32; // Sign extend
        self.set_reg(rt, value);
        Ok(())
    }
}

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

use super::write_byte;
use super::CPU;
use crate::core::error::Result;
use crate::core::memory::Memory;

impl CPU {
    // === Store Instructions ===

    /// SW: Store Word (32-bit)
    ///
    /// The effective address must be 4-byte aligned; the memory image
    /// rejects anything else.
    ///
    /// Format: sw rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt
    pub(crate) fn op_sw(&mut self, rs: u8, rt: u8, imm: u16, memory: &mut Memory) -> Result<()> {
        let offset = (imm as i16) as u32; // Sign extend
        let addr = self.reg(rs).wrapping_add(offset);

        memory.write32(addr, self.reg(rt))
    }

    /// SB: Store Byte (8-bit)
    ///
    /// Read-modify-writes the containing word, replacing the little-endian
    /// byte lane with the low 8 bits of rt. Any byte address inside a
    /// mapped region is legal.
    ///
    /// Format: sb rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[7:0]
    pub(crate) fn op_sb(&mut self, rs: u8, rt: u8, imm: u16, memory: &mut Memory) -> Result<()> {
        let offset = (imm as i16) as u32; // Sign extend
        let addr = self.reg(rs).wrapping_add(offset);

        write_byte(memory, addr, self.reg(rt) as u8)
    }
}

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

use super::CPU;
use crate::core::error::Result;

impl CPU {
    // === Jump Instructions ===

    /// J: Jump
    ///
    /// The target address keeps the upper 4 bits of the address of the
    /// following instruction and replaces the rest with the 26-bit target
    /// field shifted left by 2.
    ///
    /// Format: j target
    /// Operation: PC = ((PC + 4) & 0xF0000000) | (target << 2)
    pub(crate) fn op_j(&mut self, target: u32) -> Result<()> {
        // self.pc already holds the address of the following instruction
        self.pc = (self.pc & 0xF000_0000) | (target << 2);
        Ok(())
    }

    /// JAL: Jump and Link
    ///
    /// Jumps like J after saving the return address in r31. The return
    /// address is two words past the jump.
    ///
    /// Format: jal target
    /// Operation: r31 = PC + 8; PC = ((PC + 4) & 0xF0000000) | (target << 2)
    pub(crate) fn op_jal(&mut self, target: u32) -> Result<()> {
        self.set_reg(Self::RA, self.pc.wrapping_add(4));
        self.pc = (self.pc & 0xF000_0000) | (target << 2);
        Ok(())
    }

    /// JR: Jump Register
    ///
    /// Used for function returns and indirect jumps.
    ///
    /// Format: jr rs
    /// Operation: PC = rs
    pub(crate) fn op_jr(&mut self, rs: u8) -> Result<()> {
        self.pc = self.reg(rs);
        Ok(())
    }
}

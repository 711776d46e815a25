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

use super::super::decode::Condition;
use super::CPU;
use crate::core::error::Result;

impl CPU {
    // === Branch Instructions ===
    //
    // At execution time the program counter already points at the
    // instruction after the branch, so every target is computed as
    // pc + (sign_extend(offset) << 2). With no delay slot, a taken branch
    // executes its target immediately.

    /// REGIMM compare-against-zero branches
    ///
    /// BLTZ, BGEZ, BLTZAL, and BGEZAL share one encoding family; the
    /// condition selects sign test and linking. The linking variants
    /// write the return address to r31 whether or not the branch is
    /// taken.
    pub(crate) fn op_bcond(&mut self, cond: Condition, rs: u8, offset: u16) -> Result<()> {
        let offset = ((offset as i16) as i32) << 2;

        let negative = (self.reg(rs) as i32) < 0;
        let (taken, link) = match cond {
            Condition::Bltz => (negative, false),
            Condition::Bgez => (!negative, false),
            Condition::Bltzal => (negative, true),
            Condition::Bgezal => (!negative, true),
        };

        if link {
            // Return address is two words past the branch itself
            self.set_reg(Self::RA, self.pc.wrapping_add(4));
        }

        if taken {
            self.branch(offset);
        }
        Ok(())
    }

    /// BEQ: Branch on Equal
    ///
    /// Format: beq rs, rt, offset
    /// Operation: if (rs == rt) PC = PC + 4 + (sign_extend(offset) << 2)
    pub(crate) fn op_beq(&mut self, rs: u8, rt: u8, offset: u16) -> Result<()> {
        if self.reg(rs) == self.reg(rt) {
            self.branch(((offset as i16) as i32) << 2);
        }
        Ok(())
    }

    /// BNE: Branch on Not Equal
    ///
    /// Format: bne rs, rt, offset
    /// Operation: if (rs != rt) PC = PC + 4 + (sign_extend(offset) << 2)
    pub(crate) fn op_bne(&mut self, rs: u8, rt: u8, offset: u16) -> Result<()> {
        if self.reg(rs) != self.reg(rt) {
            self.branch(((offset as i16) as i32) << 2);
        }
        Ok(())
    }

    /// BLEZ: Branch on Less Than or Equal to Zero
    ///
    /// Format: blez rs, offset
    /// Operation: if (rs <= 0) PC = PC + 4 + (sign_extend(offset) << 2)
    pub(crate) fn op_blez(&mut self, rs: u8, offset: u16) -> Result<()> {
        if (self.reg(rs) as i32) <= 0 {
            self.branch(((offset as i16) as i32) << 2);
        }
        Ok(())
    }

    /// BGTZ: Branch on Greater Than Zero
    ///
    /// Format: bgtz rs, offset
    /// Operation: if (rs > 0) PC = PC + 4 + (sign_extend(offset) << 2)
    pub(crate) fn op_bgtz(&mut self, rs: u8, offset: u16) -> Result<()> {
        if (self.reg(rs) as i32) > 0 {
            self.branch(((offset as i16) as i32) << 2);
        }
        Ok(())
    }

    /// Redirect execution to a taken branch target
    ///
    /// `offset` is the pre-shifted byte displacement relative to the
    /// instruction after the branch, which is where the program counter
    /// points when this is called.
    pub(crate) fn branch(&mut self, offset: i32) {
        self.pc = self.pc.wrapping_add(offset as u32);
    }
}

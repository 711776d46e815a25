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
    // === Logical Instructions ===
    //
    // The immediate forms zero-extend their 16-bit operand, unlike the
    // arithmetic immediates which sign-extend.

    /// AND: Bitwise And
    ///
    /// Format: and rd, rs, rt
    /// Operation: rd = rs & rt
    pub(crate) fn op_and(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs) & self.reg(rt);
        self.set_reg(rd, result);
        Ok(())
    }

    /// OR: Bitwise Or
    ///
    /// Format: or rd, rs, rt
    /// Operation: rd = rs | rt
    pub(crate) fn op_or(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs) | self.reg(rt);
        self.set_reg(rd, result);
        Ok(())
    }

    /// XOR: Bitwise Exclusive Or
    ///
    /// Format: xor rd, rs, rt
    /// Operation: rd = rs ^ rt
    pub(crate) fn op_xor(&mut self, rs: u8, rt: u8, rd: u8) -> Result<()> {
        let result = self.reg(rs) ^ self.reg(rt);
        self.set_reg(rd, result);
        Ok(())
    }

    /// ANDI: And Immediate
    ///
    /// Format: andi rt, rs, imm
    /// Operation: rt = rs & zero_extend(imm)
    pub(crate) fn op_andi(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let result = self.reg(rs) & (imm as u32);
        self.set_reg(rt, result);
        Ok(())
    }

    /// ORI: Or Immediate
    ///
    /// Format: ori rt, rs, imm
    /// Operation: rt = rs | zero_extend(imm)
    pub(crate) fn op_ori(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let result = self.reg(rs) | (imm as u32);
        self.set_reg(rt, result);
        Ok(())
    }

    /// XORI: Exclusive Or Immediate
    ///
    /// Format: xori rt, rs, imm
    /// Operation: rt = rs ^ zero_extend(imm)
    pub(crate) fn op_xori(&mut self, rs: u8, rt: u8, imm: u16) -> Result<()> {
        let result = self.reg(rs) ^ (imm as u32);
        self.set_reg(rt, result);
        Ok(())
    }

    /// LUI: Load Upper Immediate
    ///
    /// Places the immediate in the upper halfword of rt; the lower
    /// halfword is zeroed. Pairs with ORI to build 32-bit constants.
    ///
    /// Format: lui rt, imm
    /// Operation: rt = imm << 16
    pub(crate) fn op_lui(&mut self, rt: u8, imm: u16) -> Result<()> {
        self.set_reg(rt, (imm as u32) << 16);
        Ok(())
    }
}

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

//! Instruction decoding
//!
//! A 32-bit MIPS instruction word is one of three formats:
//!
//! - R-type: | op (6) | rs (5) | rt (5) | rd (5) | shamt (5) | funct (6) |
//! - I-type: | op (6) | rs (5) | rt (5) | immediate (16) |
//! - J-type: | op (6) | target (26) |
//!
//! Dispatch is two-level: the primary opcode selects the format, and for
//! SPECIAL (opcode 0x00) the funct field, or for REGIMM (opcode 0x01) the
//! rt field, selects the operation. [`Instruction::decode`] folds both
//! levels into one tagged value so execution can match exhaustively;
//! anything outside the supported set decodes to a typed error.

use crate::core::error::{Result, SimulatorError};

/// Decode R-type instruction fields
///
/// # Returns
///
/// Tuple of (rs, rt, rd, shamt, funct)
#[inline(always)]
fn decode_r_type(word: u32) -> (u8, u8, u8, u8, u8) {
    let rs = ((word >> 21) & 0x1F) as u8;
    let rt = ((word >> 16) & 0x1F) as u8;
    let rd = ((word >> 11) & 0x1F) as u8;
    let shamt = ((word >> 6) & 0x1F) as u8;
    let funct = (word & 0x3F) as u8;
    (rs, rt, rd, shamt, funct)
}

/// Decode I-type instruction fields
///
/// # Returns
///
/// Tuple of (rs, rt, imm)
#[inline(always)]
fn decode_i_type(word: u32) -> (u8, u8, u16) {
    let rs = ((word >> 21) & 0x1F) as u8;
    let rt = ((word >> 16) & 0x1F) as u8;
    let imm = (word & 0xFFFF) as u16;
    (rs, rt, imm)
}

/// Decode the J-type 26-bit target field
#[inline(always)]
fn decode_j_type(word: u32) -> u32 {
    word & 0x03FF_FFFF
}

/// SPECIAL (opcode 0x00) operations, selected by the funct field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sll,
    Srl,
    Sra,
    Sllv,
    Srlv,
    Jr,
    Syscall,
    Mfhi,
    Mflo,
    Mult,
    Multu,
    Div,
    Divu,
    Add,
    Addu,
    Sub,
    Subu,
    And,
    Or,
    Xor,
    Slt,
    Sltu,
}

impl Function {
    fn from_funct(funct: u8) -> Result<Self> {
        let function = match funct {
            0x00 => Function::Sll,
            0x02 => Function::Srl,
            0x03 => Function::Sra,
            0x04 => Function::Sllv,
            0x06 => Function::Srlv,
            0x08 => Function::Jr,
            0x0C => Function::Syscall,
            0x10 => Function::Mfhi,
            0x12 => Function::Mflo,
            0x18 => Function::Mult,
            0x19 => Function::Multu,
            0x1A => Function::Div,
            0x1B => Function::Divu,
            0x20 => Function::Add,
            0x21 => Function::Addu,
            0x22 => Function::Sub,
            0x23 => Function::Subu,
            0x24 => Function::And,
            0x25 => Function::Or,
            0x26 => Function::Xor,
            0x2A => Function::Slt,
            0x2B => Function::Sltu,
            _ => return Err(SimulatorError::UnknownFunction { funct }),
        };
        Ok(function)
    }
}

/// REGIMM (opcode 0x01) branch conditions, selected by the rt field
///
/// Bit 0 of rt distinguishes BGEZ from BLTZ; bit 4 selects the linking
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Bltz,
    Bgez,
    Bltzal,
    Bgezal,
}

impl Condition {
    fn from_rt(rt: u8) -> Result<Self> {
        let condition = match rt {
            0x00 => Condition::Bltz,
            0x01 => Condition::Bgez,
            0x10 => Condition::Bltzal,
            0x11 => Condition::Bgezal,
            _ => return Err(SimulatorError::UnknownRegimm { rt }),
        };
        Ok(condition)
    }
}

/// I-type operations, selected by the primary opcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmediateOp {
    Beq,
    Bne,
    Blez,
    Bgtz,
    Addi,
    Addiu,
    Slti,
    Sltiu,
    Andi,
    Ori,
    Xori,
    Lui,
    Lb,
    Lw,
    Sb,
    Sw,
}

/// J-type operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOp {
    J,
    Jal,
}

/// A fully decoded instruction
///
/// Exactly one format applies per opcode. Register indices are already
/// masked to 5 bits and the immediate is kept raw; sign- or zero-extension
/// is the execution engine's decision because it depends on the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// R-type, opcode 0x00
    Special {
        funct: Function,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    },
    /// REGIMM compare-against-zero branches, opcode 0x01
    Regimm { cond: Condition, rs: u8, offset: u16 },
    /// I-type
    Immediate {
        op: ImmediateOp,
        rs: u8,
        rt: u8,
        imm: u16,
    },
    /// J-type
    Jump { op: JumpOp, target: u32 },
}

impl Instruction {
    /// Decode a 32-bit instruction word
    ///
    /// # Errors
    ///
    /// - `SimulatorError::UnknownOpcode` for a primary opcode outside the
    ///   supported set
    /// - `SimulatorError::UnknownFunction` for an unsupported SPECIAL funct
    /// - `SimulatorError::UnknownRegimm` for an unsupported REGIMM rt
    pub fn decode(word: u32) -> Result<Self> {
        let opcode = (word >> 26) as u8;

        match opcode {
            0x00 => {
                let (rs, rt, rd, shamt, funct) = decode_r_type(word);
                Ok(Instruction::Special {
                    funct: Function::from_funct(funct)?,
                    rs,
                    rt,
                    rd,
                    shamt,
                })
            }
            0x01 => {
                let (rs, rt, offset) = decode_i_type(word);
                Ok(Instruction::Regimm {
                    cond: Condition::from_rt(rt)?,
                    rs,
                    offset,
                })
            }
            0x02 | 0x03 => {
                let op = if opcode == 0x02 { JumpOp::J } else { JumpOp::Jal };
                Ok(Instruction::Jump {
                    op,
                    target: decode_j_type(word),
                })
            }
            _ => {
                let op = match opcode {
                    0x04 => ImmediateOp::Beq,
                    0x05 => ImmediateOp::Bne,
                    0x06 => ImmediateOp::Blez,
                    0x07 => ImmediateOp::Bgtz,
                    0x08 => ImmediateOp::Addi,
                    0x09 => ImmediateOp::Addiu,
                    0x0A => ImmediateOp::Slti,
                    0x0B => ImmediateOp::Sltiu,
                    0x0C => ImmediateOp::Andi,
                    0x0D => ImmediateOp::Ori,
                    0x0E => ImmediateOp::Xori,
                    0x0F => ImmediateOp::Lui,
                    0x20 => ImmediateOp::Lb,
                    0x23 => ImmediateOp::Lw,
                    0x28 => ImmediateOp::Sb,
                    0x2B => ImmediateOp::Sw,
                    _ => return Err(SimulatorError::UnknownOpcode { opcode }),
                };
                let (rs, rt, imm) = decode_i_type(word);
                Ok(Instruction::Immediate { op, rs, rt, imm })
            }
        }
    }
}

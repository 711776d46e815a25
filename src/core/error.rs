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

//! Simulator error types

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Simulator error types
///
/// Every variant is fatal to the running guest: memory faults and decode
/// faults abort the simulation, loader errors abort before it starts.
/// Non-fatal conditions (unknown syscall numbers, unparsable console input)
/// are logged and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatorError {
    /// Access to a virtual address outside every mapped region
    #[error("unmapped memory access at address 0x{address:08X}")]
    Unmapped {
        /// The address that was accessed
        address: u32,
    },

    /// Word access to an address that is not 4-byte aligned
    #[error("misaligned word access at address 0x{address:08X}")]
    Misaligned {
        /// The address that was accessed
        address: u32,
    },

    /// Primary opcode outside the supported set
    #[error("unknown opcode 0x{opcode:02X}")]
    UnknownOpcode {
        /// The opcode field (bits [31:26])
        opcode: u8,
    },

    /// SPECIAL (opcode 0x00) function code outside the supported set
    #[error("unknown SPECIAL function 0x{funct:02X}")]
    UnknownFunction {
        /// The function field (bits [5:0])
        funct: u8,
    },

    /// REGIMM (opcode 0x01) condition code outside the supported set
    #[error("unknown REGIMM condition 0x{rt:02X}")]
    UnknownRegimm {
        /// The rt field (bits [20:16]) selecting the branch condition
        rt: u8,
    },

    /// Executable cannot be parsed or validated
    #[error("invalid executable: {0}")]
    Loader(String),

    /// Instruction limit given on the command line was exhausted
    #[error("instruction limit of {0} reached")]
    InstructionLimit(u64),

    /// Host I/O error (file operations, console streams)
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SimulatorError {
    fn from(err: std::io::Error) -> Self {
        SimulatorError::Io(err.to_string())
    }
}

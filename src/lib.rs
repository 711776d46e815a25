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

//! User-mode MIPS I simulator library
//!
//! This library loads statically linked little-endian 32-bit MIPS ELF
//! executables into a simulated address space and interprets them one
//! instruction at a time. A small syscall interface gives guests
//! character I/O over the host console and a way to exit.
//!
//! # Example
//!
//! ```
//! use mipsim::core::cpu::CPU;
//! use mipsim::core::memory::{Memory, Region};
//!
//! let mut cpu = CPU::new();
//! let mut memory = Memory::new();
//! memory.map(Region::new(0x0040_0000, 0x1000)).unwrap();
//!
//! cpu.set_pc(0x0040_0000);
//! assert_eq!(cpu.reg(0), 0); // r0 is always 0
//! ```

pub mod core;

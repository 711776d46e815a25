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

use clap::Parser;
use log::{error, info};
use mipsim::core::error::{Result, SimulatorError};
use mipsim::core::system::System;

/// User-mode MIPS I simulator
#[derive(Parser)]
#[command(name = "mipsim")]
#[command(about = "User-mode MIPS I ELF simulator", long_about = None)]
struct Args {
    /// Path to a statically linked little-endian 32-bit MIPS ELF executable
    elf_file: String,

    /// Abort with an error after this many instructions
    #[arg(short = 'n', long)]
    max_instructions: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    info!("mipsim v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading executable from: {}", args.elf_file);

    let mut system = System::new();
    if let Err(e) = system.load_executable(&args.elf_file) {
        error!("Failed to load executable: {}", e);
        return Err(e);
    }

    while !system.has_exited() {
        if let Some(max) = args.max_instructions {
            if system.instructions() >= max {
                error!("Instruction limit reached at PC=0x{:08X}", system.pc());
                return Err(SimulatorError::InstructionLimit(max));
            }
        }

        if let Err(e) = system.step() {
            error!("Error at PC=0x{:08X}: {}", system.pc(), e);
            error!("Instructions retired: {}", system.instructions());
            system.cpu().dump_registers();
            return Err(e);
        }
    }

    info!("Guest exited after {} instructions", system.instructions());
    Ok(())
}

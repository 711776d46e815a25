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

//! Host console streams behind the guest syscall interface
//!
//! The syscall dispatcher never touches process stdio directly; it goes
//! through a [`Console`] so tests can substitute in-memory streams. Reads
//! block until the host delivers input, which is the simulator's only
//! blocking point.

use std::io::{self, BufRead, BufReader, Read, Write};

use super::error::Result;

/// Character-oriented host I/O for the guest
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    /// Create a console over arbitrary host streams
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// Create a console over process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }

    /// Create a console with no input and discarded output
    ///
    /// Used by tests and benchmarks that never reach an I/O syscall.
    pub fn sink() -> Self {
        Self::new(Box::new(io::empty()), Box::new(io::sink()))
    }

    /// Write a signed decimal integer followed by a newline
    pub fn print_int(&mut self, value: i32) -> Result<()> {
        writeln!(self.output, "{}", value)?;
        self.output.flush()?;
        Ok(())
    }

    /// Write one raw byte
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.output.write_all(&[byte])?;
        Ok(())
    }

    /// Flush buffered output to the host
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }

    /// Read one signed decimal integer
    ///
    /// Consumes one input line. Unparsable input (including end-of-input)
    /// is logged and yields 0; the guest never observes a read failure.
    pub fn read_int(&mut self) -> Result<i32> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        match line.trim().parse::<i32>() {
            Ok(value) => Ok(value),
            Err(_) => {
                log::warn!("could not parse integer from input {:?}", line.trim());
                Ok(0)
            }
        }
    }

    /// Read raw bytes up to and including a newline, or until `max` bytes
    ///
    /// Bytes beyond `max` stay buffered for the next read, matching the
    /// C `fgets` contract the guest runtime expects.
    pub fn read_line(&mut self, max: usize) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(max.min(64));
        while bytes.len() < max {
            let mut byte = [0u8; 1];
            if self.input.read(&mut byte)? == 0 {
                break;
            }
            bytes.push(byte[0]);
            if byte[0] == b'\n' {
                break;
            }
        }
        Ok(bytes)
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

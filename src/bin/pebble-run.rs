//! Thin reference harness: loads a ROM, runs it for a fixed number of
//! frames, and exits. Not a product CLI — no argument-parsing crate, just
//! `std::env::args`, per the Non-goal on CLI ergonomics.

use std::{env, process::ExitCode};

use pebble_core::{machine::Machine, util::read_file};

const FRAMES: u32 = 60;
const CYCLES_PER_FRAME: u32 = 70224;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(rom_path) = args.get(1) else {
        eprintln!("usage: pebble-run <rom-path>");
        return ExitCode::from(1);
    };

    let rom_bytes = match read_file(rom_path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read rom: {err}");
            return ExitCode::from(1);
        }
    };

    let mut machine = Machine::new();
    if let Err(err) = machine.load_cartridge(&rom_bytes) {
        eprintln!("failed to load cartridge: {err}");
        return ExitCode::from(2);
    }
    machine.power_on();

    for _ in 0..FRAMES {
        let mut cycles = 0u32;
        while cycles < CYCLES_PER_FRAME {
            match machine.step() {
                Ok(true) => {}
                Ok(false) => {
                    eprintln!("machine halted on an unrecoverable decode error");
                    return ExitCode::from(3);
                }
                Err(err) => {
                    eprintln!("machine error: {err}");
                    return ExitCode::from(3);
                }
            }
            cycles += 4;
        }
    }

    ExitCode::from(0)
}

//! Top-level aggregate wiring the CPU and the bus together and driving the
//! per-instruction tick order: execute, advance the PPU, service
//! interrupts, advance the PPU again for any cycles interrupt dispatch
//! spent, then tick the EI/DI latch.

use crate::{
    bus::Bus,
    cpu::Cpu,
    error::Error,
    interrupt::Interrupt,
    rom::Cartridge,
    util::{read_file, write_file},
};

pub struct Machine {
    cpu: Cpu,
    bus: Bus,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: Bus::new(),
        }
    }

    /// Parses the cartridge header, validates the mapper is supported and
    /// installs it on the bus.
    pub fn load_cartridge(&mut self, rom_bytes: &[u8]) -> Result<(), Error> {
        let cartridge = Cartridge::from_data(rom_bytes)?;
        self.bus.set_cartridge(cartridge);
        Ok(())
    }

    pub fn power_on(&mut self) {
        self.cpu.power_on();
        self.bus.power_on();
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Runs one full tick: fetch/decode/execute, PPU advance, interrupt
    /// dispatch, a second PPU advance for the dispatch's own cycles, then
    /// the IME latch. Returns `Ok(false)` when the CPU hit an
    /// unrecoverable decode error and the machine can no longer progress.
    pub fn step(&mut self) -> Result<bool, Error> {
        let pc_before = self.cpu.pc;
        let was_idling = self.cpu.halted() || self.cpu.stopped();

        let cycles = match self.cpu.step(&mut self.bus) {
            Ok(cycles) => cycles,
            Err(_) => return Ok(false),
        };
        self.bus.step_ppu(cycles);

        let extra = self.cpu.service_interrupts(&mut self.bus);
        if extra > 0 {
            self.bus.step_ppu(extra);
        }

        self.cpu.tick_ime_latch();

        // HALT/STOP hold PC in place by design while waiting for an
        // interrupt; that's not the infinite loop StateDrift is meant to
        // catch (an instruction that executed and somehow left PC where it
        // found it, with no interrupt to explain the stall).
        if !was_idling && self.cpu.pc == pc_before && extra == 0 {
            return Err(Error::StateDrift(pc_before));
        }

        Ok(true)
    }

    pub fn framebuffer(&self) -> &[[u8; crate::consts::SCREEN_WIDTH]; crate::consts::SCREEN_HEIGHT] {
        self.bus.ppu().framebuffer()
    }

    pub fn request_external_interrupt(&mut self, kind: Interrupt) {
        self.bus.request_interrupt(kind);
    }

    /// Persists cartridge RAM to `path`. A no-op for cartridges without
    /// battery-backed RAM.
    pub fn save_ram(&self, path: &str) -> Result<(), Error> {
        if !self.bus.cartridge().has_battery() {
            return Ok(());
        }
        write_file(path, self.bus.cartridge().ram_data())
    }

    pub fn load_ram(&mut self, path: &str) -> Result<(), Error> {
        if !self.bus.cartridge().has_battery() {
            return Ok(());
        }
        let data = read_file(path)?;
        self.bus.cartridge_mut().set_ram_data(&data);
        Ok(())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Machine;

    fn rom_with_entry(opcodes: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100..0x0100 + opcodes.len()].copy_from_slice(opcodes);
        rom[0x0147] = 0x00; // ROM ONLY
        rom[0x0148] = 0x00;
        rom[0x0149] = 0x00;
        rom
    }

    #[test]
    fn test_step_advances_pc() {
        let mut machine = Machine::new();
        machine.load_cartridge(&rom_with_entry(&[0x00, 0x00])).unwrap();
        machine.power_on();
        let pc_before = machine.cpu().pc;
        machine.step().unwrap();
        assert_ne!(machine.cpu().pc, pc_before);
    }

    #[test]
    fn test_unsupported_mapper_rejected_at_load() {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0147] = 0xff;
        let mut machine = Machine::new();
        assert!(machine.load_cartridge(&rom).is_err());
    }

    #[test]
    fn test_halt_does_not_trigger_state_drift() {
        let mut machine = Machine::new();
        machine
            .load_cartridge(&rom_with_entry(&[0x76, 0x00])) // HALT, NOP
            .unwrap();
        machine.power_on();
        machine.step().unwrap();
        assert!(machine.cpu().halted());
        for _ in 0..10 {
            assert!(machine.step().unwrap());
        }
    }

    #[test]
    fn test_vblank_dispatches_when_enabled() {
        let mut machine = Machine::new();
        machine
            .load_cartridge(&rom_with_entry(&[0xfb, 0x00])) // EI, NOP
            .unwrap();
        machine.power_on();
        machine.bus_mut().write(0xffff, 0x01); // IE: VBlank enabled

        // EI; the following NOP finishes the one-instruction delay.
        machine.step().unwrap();
        machine.step().unwrap();
        assert!(machine.cpu().ime());

        machine.request_external_interrupt(crate::interrupt::Interrupt::VBlank);
        machine.step().unwrap();
        assert_eq!(machine.cpu().pc, 0x0040);
        assert!(!machine.cpu().ime());
    }
}

//! Breakpoints evaluated against a running [`Machine`], decoupled from the
//! interpreter loop itself.

use crate::machine::Machine;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakpoint {
    /// Triggers the instant the program counter reaches the given address.
    Address(u16),
    /// Triggers when the next fetched opcode matches.
    Opcode(u8),
    /// Triggers when the byte at `addr` differs from `last`. The caller is
    /// expected to update `last` after each check (see
    /// [`Breakpoint::observe`]).
    AddressValueChange { addr: u16, last: u8 },
    /// Triggers when any byte in `start..=end` differs from the snapshot
    /// taken when the breakpoint was armed.
    AddressRangeValueChange { start: u16, end: u16, last: Vec<u8> },
}

impl Breakpoint {
    pub fn triggered(&self, machine: &Machine) -> bool {
        match self {
            Breakpoint::Address(addr) => machine.cpu().pc == *addr,
            Breakpoint::Opcode(opcode) => machine.bus().read(machine.cpu().pc) == *opcode,
            Breakpoint::AddressValueChange { addr, last } => machine.bus().read(*addr) != *last,
            Breakpoint::AddressRangeValueChange { start, end, last } => (*start..=*end)
                .enumerate()
                .any(|(i, addr)| machine.bus().read(addr) != last[i]),
        }
    }

    /// Refreshes the snapshot this breakpoint compares against, so it can
    /// detect the *next* change rather than re-triggering on the one it
    /// just reported.
    pub fn observe(&mut self, machine: &Machine) {
        match self {
            Breakpoint::AddressValueChange { addr, last } => {
                *last = machine.bus().read(*addr);
            }
            Breakpoint::AddressRangeValueChange { start, end, last } => {
                *last = (*start..=*end).map(|addr| machine.bus().read(addr)).collect();
            }
            Breakpoint::Address(_) | Breakpoint::Opcode(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Breakpoint;
    use crate::machine::Machine;

    fn rom_with_entry(opcodes: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100..0x0100 + opcodes.len()].copy_from_slice(opcodes);
        rom
    }

    #[test]
    fn test_address_breakpoint() {
        let mut machine = Machine::new();
        machine.load_cartridge(&rom_with_entry(&[0x00])).unwrap();
        machine.power_on();
        let bp = Breakpoint::Address(0x0100);
        assert!(bp.triggered(&machine));
    }

    #[test]
    fn test_value_change_breakpoint() {
        let mut machine = Machine::new();
        machine.load_cartridge(&rom_with_entry(&[0x00])).unwrap();
        machine.power_on();
        let mut bp = Breakpoint::AddressValueChange {
            addr: 0xc000,
            last: 0x00,
        };
        assert!(!bp.triggered(&machine));
        machine.bus_mut().write(0xc000, 0x42);
        assert!(bp.triggered(&machine));
        bp.observe(&machine);
        assert!(!bp.triggered(&machine));
    }
}

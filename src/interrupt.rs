//! Interrupt kinds, their priority order and dispatch vectors.

/// The five interrupt sources the DMG recognizes, in bit/priority order
/// (bit 0 is highest priority when more than one is pending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// All five kinds in priority order, lowest bit first.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    /// Bit position of this interrupt within IE/IF.
    pub fn bit(&self) -> u8 {
        match self {
            Interrupt::VBlank => 0,
            Interrupt::LcdStat => 1,
            Interrupt::Timer => 2,
            Interrupt::Serial => 3,
            Interrupt::Joypad => 4,
        }
    }

    pub fn mask(&self) -> u8 {
        1 << self.bit()
    }

    /// Fixed handler address this interrupt dispatches to.
    pub fn vector(&self) -> u16 {
        match self {
            Interrupt::VBlank => 0x0040,
            Interrupt::LcdStat => 0x0048,
            Interrupt::Timer => 0x0050,
            Interrupt::Serial => 0x0058,
            Interrupt::Joypad => 0x0060,
        }
    }
}

/// The `IE`/`IF` register pair. Kept as its own small struct rather than
/// raw bytes on `Bus` so the priority scan has one obvious home.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterruptController {
    pub ie: u8,
    pub if_: u8,
}

impl InterruptController {
    pub fn new() -> Self {
        Self { ie: 0, if_: 0 }
    }

    pub fn request(&mut self, interrupt: Interrupt) {
        self.if_ |= interrupt.mask();
    }

    pub fn clear(&mut self, interrupt: Interrupt) {
        self.if_ &= !interrupt.mask();
    }

    /// The highest-priority interrupt that is both enabled in IE and
    /// pending in IF, if any.
    pub fn pending(&self) -> Option<Interrupt> {
        Interrupt::ALL
            .into_iter()
            .find(|interrupt| self.ie & self.if_ & interrupt.mask() != 0)
    }

    /// Whether any interrupt is enabled-and-requested, regardless of
    /// IME. Used to release the CPU from HALT.
    pub fn any_pending(&self) -> bool {
        self.ie & self.if_ & 0x1f != 0
    }
}

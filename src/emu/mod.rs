// SPDX-License-Identifier: GPL-3.0-or-later

mod k1;
pub use k1::{HardwareConfig, K1Soc};

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::regmap::RegisterMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccessStats {
    pub reads: u64,
    pub writes: u64,
}

type WriteCallback = Rc<dyn Fn(u32)>;

/// In-memory register file. Registers read back what was last written,
/// unless the offset has self-clearing or forced bits.
pub struct EmuRegisters {
    name: String,
    regs: RefCell<BTreeMap<u32, u32>>,
    // offset -> mask
    self_clearing: RefCell<BTreeMap<u32, u32>>,
    // offset -> (mask, value)
    forced: RefCell<BTreeMap<u32, (u32, u32)>>,
    write_callbacks: RefCell<Vec<(u32, WriteCallback)>>,
    stats: Cell<AccessStats>,
}

impl EmuRegisters {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            regs: Default::default(),
            self_clearing: Default::default(),
            forced: Default::default(),
            write_callbacks: Default::default(),
            stats: Default::default(),
        }
    }

    /// Sets a register without counting the access nor running callbacks.
    pub fn poke(&self, offset: u32, value: u32) {
        self.regs.borrow_mut().insert(offset, value);
    }

    pub fn peek(&self, offset: u32) -> u32 {
        let v = self.regs.borrow().get(&offset).copied().unwrap_or(0);
        match self.forced.borrow().get(&offset) {
            Some(&(mask, forced)) => (v & !mask) | (forced & mask),
            None => v,
        }
    }

    pub fn assign_bits(&self, offset: u32, mask: u32, set: bool) {
        let mut regs = self.regs.borrow_mut();
        let v = regs.entry(offset).or_insert(0);
        if set { *v |= mask } else { *v &= !mask }
    }

    /// Bits that hardware deasserts as soon as it latched them.
    pub fn add_self_clearing(&self, offset: u32, mask: u32) {
        *self.self_clearing.borrow_mut().entry(offset).or_insert(0) |= mask;
    }

    /// Bits that always read as `value`, whatever is written.
    #[cfg(test)]
    pub fn force_bits(&self, offset: u32, mask: u32, value: u32) {
        self.forced.borrow_mut().insert(offset, (mask, value));
    }

    pub fn add_write_callback(&self, offset: u32, f: impl Fn(u32) + 'static) {
        self.write_callbacks.borrow_mut().push((offset, Rc::new(f)));
    }

    pub fn stats(&self) -> AccessStats {
        self.stats.get()
    }

    pub fn dump(&self) -> Vec<(u32, u32)> {
        self.regs.borrow().keys().map(|&o| (o, self.peek(o))).collect()
    }
}

impl RegisterMap for EmuRegisters {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self, offset: u32) -> u32 {
        let mut stats = self.stats.get();
        stats.reads += 1;
        self.stats.set(stats);

        let v = self.peek(offset);
        trace!("read:  {} offset=0x{:04x} value=0x{:08x}", self.name, offset, v);
        v
    }

    fn write(&self, offset: u32, value: u32) {
        let mut stats = self.stats.get();
        stats.writes += 1;
        self.stats.set(stats);

        trace!("write: {} offset=0x{:04x} value=0x{:08x}", self.name, offset, value);

        let clearing = self.self_clearing.borrow().get(&offset).copied().unwrap_or(0);
        self.regs.borrow_mut().insert(offset, value & !clearing);

        // Callbacks may touch this register file again
        let callbacks = self.write_callbacks.borrow().iter()
            .filter(|(o, _)| *o == offset)
            .map(|(_, f)| f.clone())
            .collect::<Vec<_>>();
        for f in callbacks {
            f(value);
        }
    }
}

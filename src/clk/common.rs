// SPDX-License-Identifier: GPL-3.0-or-later

use std::cell::Cell;

use crate::error::{ClkError, Result};
use crate::regmap::Regmap;

/// What every registered node holds: its name and the register maps it was
/// bound to when its CCU is bound.
pub struct CcuCommon {
    pub name: &'static str,
    pub base: Regmap,
    pub lock_base: Option<Regmap>,
    warned: Cell<bool>,
}

impl CcuCommon {
    pub fn new(name: &'static str, base: Regmap, lock_base: Option<Regmap>) -> Self {
        Self { name, base, lock_base, warned: Cell::new(false) }
    }

    pub fn read(&self, reg: u32) -> u32 {
        self.base.read(reg)
    }

    pub fn update(&self, reg: u32, mask: u32, value: u32) {
        self.base.update_bits(reg, mask, value)
    }

    pub fn poll(
        &self,
        reg: u32,
        what: &'static str,
        cond: &dyn Fn(u32) -> bool,
        delay_us: u64,
        timeout_us: u64,
    ) -> Result<u32> {
        self.base.read_poll_timeout_atomic(reg, cond, delay_us, timeout_us)
            .map_err(|last| {
                warn!("{} {} timeout {} reg=0x{:04x} value=0x{:08x}",
                    self.name, what, self.base.name(), reg, last.0);
                self.timeout(what, reg)
            })
    }

    pub fn lock_map(&self) -> Result<&Regmap> {
        self.lock_base.as_ref().ok_or_else(||
            ClkError::Config(format!("{} has no lock register map", self.name)))
    }

    pub fn timeout(&self, what: &'static str, offset: u32) -> ClkError {
        ClkError::Timeout { clk: self.name.to_string(), what, offset }
    }

    pub fn invalid_rate(&self, rate: u64) -> ClkError {
        ClkError::InvalidRate { clk: self.name.to_string(), rate }
    }

    /// True the first time only. For WARN_ONCE style diagnostics.
    pub fn warn_once(&self) -> bool {
        !self.warned.replace(true)
    }
}

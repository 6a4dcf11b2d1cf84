// SPDX-License-Identifier: GPL-3.0-or-later

//! M/N fractional synthesizer: `num / den = Fin / (Fout * factor)`.

use super::common::CcuCommon;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdnInfo {
    pub factor: u32,
    pub num_mask: u32,
    pub den_mask: u32,
    pub num_shift: u8,
    pub den_shift: u8,
}

impl DdnInfo {
    fn field_mask(&self) -> u32 {
        (self.num_mask << self.num_shift) | (self.den_mask << self.den_shift)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdnEntry {
    pub num: u32,
    pub den: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdnGate {
    pub sel: u32,
    pub mask: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ddn {
    pub ctrl: u32,
    pub info: &'static DdnInfo,
    pub table: &'static [DdnEntry],
    pub gate: Option<DdnGate>,
}

impl Ddn {
    pub const fn new(ctrl: u32, info: &'static DdnInfo, table: &'static [DdnEntry]) -> Self {
        Self { ctrl, info, table, gate: None }
    }

    #[allow(dead_code)]
    pub const fn with_gate(self, sel: u32, mask: u32) -> Self {
        Self { gate: Some(DdnGate { sel, mask }), ..self }
    }

    fn entry_rate(&self, e: &DdnEntry, parent_rate: u64) -> u64 {
        (parent_rate * e.den as u64)
            .checked_div(e.num as u64 * self.info.factor as u64)
            .unwrap_or(0)
    }

    /// No confirmation poll, the synthesizer output is live right away.
    pub fn enable(&self, c: &CcuCommon) {
        if let Some(gate) = self.gate {
            c.update(gate.sel, gate.mask, gate.mask);
        }
    }

    pub fn disable(&self, c: &CcuCommon) {
        if let Some(gate) = self.gate {
            c.update(gate.sel, gate.mask, 0);
        }
    }

    pub fn is_enabled(&self, c: &CcuCommon) -> bool {
        match self.gate {
            Some(gate) => c.read(gate.sel) & gate.mask != 0,
            None => true,
        }
    }

    pub fn recalc_rate(&self, c: &CcuCommon, parent_rate: u64) -> u64 {
        let val = c.read(self.ctrl);
        let num = (val >> self.info.num_shift) & self.info.num_mask;
        let den = (val >> self.info.den_shift) & self.info.den_mask;

        if den == 0 || num == 0 {
            return 0;
        }

        parent_rate * den as u64 / (num as u64 * self.info.factor as u64)
    }

    /// Nearest table rate. Out of the table range, the boundary entry.
    pub fn round_rate(&self, rate: u64, parent_rate: u64) -> u64 {
        let mut prev_rate = 0;
        let mut cur_rate = 0;
        let mut stop = self.table.len();

        for (i, e) in self.table.iter().enumerate() {
            prev_rate = cur_rate;
            cur_rate = self.entry_rate(e, parent_rate);
            if cur_rate > rate {
                stop = i;
                break;
            }
        }

        if stop == 0 || stop == self.table.len() {
            cur_rate
        } else if rate - prev_rate > cur_rate - rate {
            cur_rate
        } else {
            prev_rate
        }
    }

    /// Programs the last entry that does not exceed `rate`, or the first
    /// entry when all of them do. Note that this can differ from what
    /// `round_rate` returns.
    pub fn set_rate(&self, c: &CcuCommon, rate: u64, parent_rate: u64) -> Result<()> {
        if self.table.is_empty() {
            return Err(c.invalid_rate(rate));
        }

        let index = match self.table.iter().position(|e| self.entry_rate(e, parent_rate) > rate) {
            Some(0) => 0,
            Some(i) => i - 1,
            None => self.table.len() - 1,
        };
        let e = &self.table[index];
        let info = self.info;

        let value = (e.num & info.num_mask) << info.num_shift
            | (e.den & info.den_mask) << info.den_shift;
        c.update(self.ctrl, info.field_mask(), value);

        debug!("{} num={} den={} rate={}", c.name, e.num, e.den, self.entry_rate(e, parent_rate));
        Ok(())
    }
}

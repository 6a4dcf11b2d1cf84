// SPDX-License-Identifier: GPL-3.0-or-later

//! Gate, fixed factor, divider and multiplexer building blocks. The K1 mixes
//! them freely in one control register, see [`super::Clk`].

use super::common::CcuCommon;
use crate::error::Result;
use crate::util::{div_round_up, field_get, field_mask};

/// Poll bound of gate confirmation and frequency-change handshake, in us.
const MIX_TIMEOUT: u64 = 10_000;
const GATE_POLL_DELAY: u64 = 10;
const FC_POLL_DELAY: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    pub ctrl: u32,
    pub mask: u32,
    pub val_enable: u32,
    pub val_disable: u32,
}

impl Gate {
    pub const fn new(ctrl: u32, mask: u32, val_enable: u32, val_disable: u32) -> Self {
        Self { ctrl, mask, val_enable, val_disable }
    }

    pub fn enable(&self, c: &CcuCommon) -> Result<()> {
        c.update(self.ctrl, self.mask, self.val_enable);

        let (mask, val_enable) = (self.mask, self.val_enable);
        c.poll(self.ctrl, "gate enable", &|v| v & mask == val_enable,
            GATE_POLL_DELAY, MIX_TIMEOUT)?;
        Ok(())
    }

    pub fn disable(&self, c: &CcuCommon) {
        c.update(self.ctrl, self.mask, self.val_disable);
    }

    pub fn is_enabled(&self, c: &CcuCommon) -> bool {
        c.read(self.ctrl) & self.mask == self.val_enable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Factor {
    pub div: u32,
    pub mul: u32,
}

impl Factor {
    pub const fn new(div: u32, mul: u32) -> Self {
        Self { div, mul }
    }

    pub fn recalc_rate(&self, parent_rate: u64) -> u64 {
        parent_rate * self.mul as u64 / self.div as u64
    }

    /// The ratio is fixed: whatever is asked, this is what we get.
    pub fn round_rate(&self, _rate: u64, parent_rate: u64) -> u64 {
        self.recalc_rate(parent_rate)
    }
}

/// Frequency-change trigger. Hardware clears the bit once the new
/// divider/mux setting is latched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fc {
    pub reg: u32,
    pub bit: u32,
}

impl Fc {
    pub fn trigger(&self, c: &CcuCommon) -> Result<()> {
        let bit = self.bit;
        c.update(self.reg, bit, bit);
        c.poll(self.reg, "frequency change", &|v| v & bit == 0, FC_POLL_DELAY, MIX_TIMEOUT)?;
        Ok(())
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivTableEntry {
    pub val: u32,
    pub div: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Div {
    pub ctrl: u32,
    pub shift: u8,
    pub width: u8,
    pub table: Option<&'static [DivTableEntry]>,
    pub fc: Option<Fc>,
}

impl Div {
    pub const fn new(ctrl: u32, shift: u8, width: u8) -> Self {
        Self { ctrl, shift, width, table: None, fc: None }
    }

    pub const fn with_fc(self, reg: u32, bit: u32) -> Self {
        Self { fc: Some(Fc { reg, bit }), ..self }
    }

    #[allow(dead_code)]
    pub const fn with_table(self, table: &'static [DivTableEntry]) -> Self {
        Self { table: Some(table), ..self }
    }

    fn divisor(&self, val: u32) -> Option<u32> {
        match self.table {
            Some(table) => table.iter().find(|e| e.val == val).map(|e| e.div),
            None => Some(val + 1),
        }
    }

    /// (field value, divisor) pairs this divider can be programmed with.
    pub fn divisors(&self) -> Vec<(u32, u32)> {
        match self.table {
            Some(table) => table.iter()
                .filter(|e| e.div != 0)
                .map(|e| (e.val, e.div))
                .collect(),
            None => (1..=(1u32 << self.width)).map(|div| (div - 1, div)).collect(),
        }
    }

    pub fn recalc_rate(&self, c: &CcuCommon, parent_rate: u64) -> u64 {
        let val = field_get(c.read(self.ctrl), self.shift, self.width);
        match self.divisor(val) {
            Some(div) if div != 0 => div_round_up(parent_rate, div as u64),
            _ => {
                warn!("{} invalid divider value={}", c.name, val);
                parent_rate
            }
        }
    }

    /// Only the divider moves here; the parent was already chosen by the
    /// time a rate is set.
    pub fn set_rate(&self, c: &CcuCommon, rate: u64, parent_rate: u64) -> Result<()> {
        let best = match calc_best_rate(Some(self), rate, &[Some(parent_rate)]) {
            Some(best) => best,
            None => return Err(c.invalid_rate(rate)),
        };

        let current = field_get(c.read(self.ctrl), self.shift, self.width);
        if current == best.val {
            return Ok(());
        }

        debug!("{} div={} -> {} rate={}", c.name, current, best.val, best.rate);
        c.update(self.ctrl, field_mask(self.shift, self.width), best.val << self.shift);

        if let Some(fc) = self.fc {
            fc.trigger(c)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mux {
    pub ctrl: u32,
    pub shift: u8,
    pub width: u8,
    /// logical parent index -> hardware select value
    pub table: Option<&'static [u32]>,
    pub fc: Option<Fc>,
}

impl Mux {
    pub const fn new(ctrl: u32, shift: u8, width: u8) -> Self {
        Self { ctrl, shift, width, table: None, fc: None }
    }

    pub const fn with_fc(self, reg: u32, bit: u32) -> Self {
        Self { fc: Some(Fc { reg, bit }), ..self }
    }

    #[allow(dead_code)]
    pub const fn with_table(self, table: &'static [u32]) -> Self {
        Self { table: Some(table), ..self }
    }

    pub fn get_parent(&self, c: &CcuCommon) -> u8 {
        let val = field_get(c.read(self.ctrl), self.shift, self.width);

        self.table
            .and_then(|table| table.iter().position(|&t| t == val))
            .map(|i| i as u8)
            .unwrap_or(val as u8)
    }

    pub fn set_parent(&self, c: &CcuCommon, index: u8) -> Result<()> {
        let val = match self.table {
            Some(table) => table.get(index as usize).copied().unwrap_or(index as u32),
            None => index as u32,
        };

        debug!("{} select={}", c.name, val);
        c.update(self.ctrl, field_mask(self.shift, self.width), val << self.shift);

        if let Some(fc) = self.fc {
            fc.trigger(c)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestRate {
    pub rate: u64,
    pub parent: usize,
    pub parent_rate: u64,
    /// Divider field value, 0 when there is no divider.
    pub val: u32,
}

/// Closest rate over every (parent, divisor) pair. Parents that cannot be
/// resolved are `None` and skipped. Ties keep the first pair found.
pub fn calc_best_rate(div: Option<&Div>, rate: u64, parents: &[Option<u64>]) -> Option<BestRate> {
    let divisors = div.map(|d| d.divisors()).unwrap_or_else(|| vec![(0, 1)]);
    let mut best: Option<BestRate> = None;

    for (parent, parent_rate) in parents.iter().enumerate() {
        let parent_rate = match parent_rate {
            Some(r) => *r,
            None => continue,
        };

        for &(val, d) in &divisors {
            let tmp = div_round_up(parent_rate, d as u64);
            if best.map_or(true, |b| tmp.abs_diff(rate) < b.rate.abs_diff(rate)) {
                best = Some(BestRate { rate: tmp, parent, parent_rate, val });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clk::tests::emu_common;
    use crate::error::ClkError;
    use crate::regmap::RegisterMap;
    use std::time::{Duration, Instant};

    const CTRL: u32 = 0x54;

    #[test]
    fn gate_enable_disable() {
        let (regs, c) = emu_common("sdh0_clk");
        let gate = Gate::new(CTRL, 1 << 4, 1 << 4, 0);

        assert!(!gate.is_enabled(&c));
        gate.enable(&c).unwrap();
        assert!(gate.is_enabled(&c));
        assert_eq!(regs.peek(CTRL), 1 << 4);

        gate.disable(&c);
        assert!(!gate.is_enabled(&c));
    }

    #[test]
    fn gate_multi_bit_value() {
        let (regs, c) = emu_common("rtc_clk");
        let gate = Gate::new(0x28, 0x82, 0x82, 0);
        regs.poke(0x28, 0x1);

        gate.enable(&c).unwrap();
        assert_eq!(regs.peek(0x28), 0x83);
        gate.disable(&c);
        assert_eq!(regs.peek(0x28), 0x1);
    }

    #[test]
    fn gate_enable_twice_keeps_state() {
        let (regs, c) = emu_common("uart2_clk");
        let gate = Gate::new(0x4, 1 << 1, 1 << 1, 0);

        gate.enable(&c).unwrap();
        gate.enable(&c).unwrap();
        assert!(gate.is_enabled(&c));
        assert_eq!(regs.peek(0x4), 1 << 1);
    }

    #[test]
    fn gate_enable_times_out_when_hardware_never_confirms() {
        let (regs, c) = emu_common("dma_clk");
        regs.force_bits(0x64, 1 << 3, 0);
        let gate = Gate::new(0x64, 1 << 3, 1 << 3, 0);

        let start = Instant::now();
        let err = gate.enable(&c).unwrap_err();
        assert!(matches!(err, ClkError::Timeout { offset: 0x64, .. }));
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn factor_rates() {
        let f = Factor::new(16, 3);
        assert_eq!(f.recalc_rate(307_200_000), 57_600_000);
        for rate in [0, 1, 57_600_000, u32::MAX as u64] {
            assert_eq!(f.recalc_rate(f.round_rate(rate, 307_200_000)),
                f.recalc_rate(f.recalc_rate(307_200_000)));
            assert_eq!(f.round_rate(rate, 307_200_000), 57_600_000);
        }
    }

    #[test]
    fn div_recalc_rounds_up() {
        let (regs, c) = emu_common("cpu_c0_ace_clk");
        let div = Div::new(0x38c, 6, 3);

        regs.poke(0x38c, 0b010 << 6);
        assert_eq!(div.recalc_rate(&c, 1_228_800_000), 409_600_000);

        regs.poke(0x38c, 0b110 << 6);
        assert_eq!(div.recalc_rate(&c, 1_000), 143);
    }

    #[test]
    fn div_table_recalc() {
        static TABLE: [DivTableEntry; 2] = [
            DivTableEntry { val: 0, div: 2 },
            DivTableEntry { val: 1, div: 4 },
        ];
        let (regs, c) = emu_common("tbl");
        let div = Div::new(0x0, 0, 2).with_table(&TABLE);

        regs.poke(0x0, 1);
        assert_eq!(div.recalc_rate(&c, 400), 100);
        // unknown value falls back to the parent rate
        regs.poke(0x0, 3);
        assert_eq!(div.recalc_rate(&c, 400), 400);
        assert_eq!(div.divisors(), vec![(0, 2), (1, 4)]);
    }

    #[test]
    fn best_rate_is_global_minimum() {
        let div = Div::new(0, 0, 2);
        let parents = [Some(409_600_000), None, Some(614_400_000)];

        // 409.6 / 2 and 614.4 / 3 tie, the first parent wins
        let best = calc_best_rate(Some(&div), 204_800_000, &parents).unwrap();
        assert_eq!(best, BestRate { rate: 204_800_000, parent: 0, parent_rate: 409_600_000, val: 1 });

        let best = calc_best_rate(Some(&div), 150_000_000, &parents).unwrap();
        assert_eq!(best, BestRate { rate: 153_600_000, parent: 2, parent_rate: 614_400_000, val: 3 });

        // brute force check
        for target in (1..40).map(|i| i * 25_000_000) {
            let best = calc_best_rate(Some(&div), target, &parents).unwrap();
            let min = parents.iter().flatten()
                .flat_map(|p| (1..=4).map(move |d| div_round_up(*p, d)))
                .map(|r| r.abs_diff(target))
                .min()
                .unwrap();
            assert_eq!(best.rate.abs_diff(target), min);
        }
    }

    #[test]
    fn best_rate_without_divider_picks_parent() {
        let parents = [Some(25_600_000), Some(51_200_000), Some(25_600_000), Some(102_400_000)];
        let best = calc_best_rate(None, 60_000_000, &parents).unwrap();
        assert_eq!((best.parent, best.rate), (1, 51_200_000));
        assert_eq!(calc_best_rate(None, 60_000_000, &[None, None]), None);
    }

    #[test]
    fn div_set_rate_round_trip() {
        let (_regs, c) = emu_common("emmc_x_clk");
        let div = Div::new(0x104, 12, 3);

        for target in [1_228_800_000, 600_000_000, 300_000_000, 200_000_000, 1] {
            let best = calc_best_rate(Some(&div), target, &[Some(1_228_800_000)]).unwrap();
            div.set_rate(&c, best.rate, 1_228_800_000).unwrap();
            assert_eq!(div.recalc_rate(&c, 1_228_800_000), best.rate);
        }
    }

    #[test]
    fn div_set_rate_same_divider_does_not_write() {
        let (regs, c) = emu_common("cpu_c0_tcm_clk");
        let div = Div::new(0x38c, 9, 3);
        regs.poke(0x38c, 1 << 9);

        let writes = regs.stats().writes;
        div.set_rate(&c, 614_400_000, 1_228_800_000).unwrap();
        assert_eq!(regs.stats().writes, writes);
    }

    #[test]
    fn div_set_rate_triggers_fc() {
        let (regs, c) = emu_common("sdh0_clk");
        regs.add_self_clearing(CTRL, 1 << 11);
        let div = Div::new(CTRL, 8, 3).with_fc(CTRL, 1 << 11);

        div.set_rate(&c, 204_800_000, 409_600_000).unwrap();
        assert_eq!(regs.peek(CTRL), 1 << 8);
        // one write for the field, one for the trigger
        assert_eq!(regs.stats().writes, 2);
    }

    #[test]
    fn fc_timeout_leaves_field_written() {
        let (regs, c) = emu_common("sdh0_clk");
        let div = Div::new(CTRL, 8, 3).with_fc(CTRL, 1 << 11);

        let err = div.set_rate(&c, 204_800_000, 409_600_000).unwrap_err();
        assert!(matches!(err, ClkError::Timeout { what: "frequency change", .. }));
        assert_eq!(regs.peek(CTRL), (1 << 8) | (1 << 11));
    }

    #[test]
    fn mux_select_and_read_back() {
        let (regs, c) = emu_common("uart0_clk");
        let mux = Mux::new(0x0, 4, 3);

        mux.set_parent(&c, 2).unwrap();
        assert_eq!(regs.peek(0x0), 2 << 4);
        assert_eq!(mux.get_parent(&c), 2);
    }

    #[test]
    fn mux_translation_table() {
        static TABLE: [u32; 3] = [0, 2, 5];
        let (regs, c) = emu_common("tbl_mux");
        let mux = Mux::new(0x8, 0, 3).with_table(&TABLE);

        mux.set_parent(&c, 2).unwrap();
        assert_eq!(regs.peek(0x8), 5);
        assert_eq!(mux.get_parent(&c), 2);

        // untranslatable select values read back raw
        regs.poke(0x8, 7);
        assert_eq!(mux.get_parent(&c), 7);
    }

    #[test]
    fn mux_with_fc_in_other_register() {
        let (regs, c) = emu_common("dpu_mclk");
        regs.add_self_clearing(0x44, 1 << 29);
        let mux = Mux::new(0x4c, 5, 3).with_fc(0x44, 1 << 29);

        mux.set_parent(&c, 3).unwrap();
        assert_eq!(regs.read(0x4c), 3 << 5);
        assert_eq!(regs.read(0x44), 0);
    }

    #[test]
    fn mux_fc_timeout_leaves_select_written() {
        let (regs, c) = emu_common("sdh0_clk");
        let mux = Mux::new(CTRL, 5, 3).with_fc(CTRL, 1 << 11);

        let err = mux.set_parent(&c, 3).unwrap_err();
        assert!(matches!(err, ClkError::Timeout { what: "frequency change", offset: CTRL, .. }));
        assert_eq!(regs.peek(CTRL), (3 << 5) | (1 << 11));
        assert_eq!(mux.get_parent(&c), 3);
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later

use super::common::CcuCommon;
use crate::error::Result;
use crate::util::{bit, field_get, genmask};

pub const PLL_MIN_FREQ: u64 = 600_000_000;
/// Lock wait bound, in us.
const PLL_DELAY_TIME: u64 = 3_000;
const PLL_LOCK_POLL_DELAY: u64 = 5;

const SWCR1_REG5_SHIFT: u8 = 0;
const SWCR1_REG6_SHIFT: u8 = 8;
const SWCR1_REG7_SHIFT: u8 = 16;
const SWCR1_REG8_SHIFT: u8 = 24;

const SWCR3_DIV_FRC_SHIFT: u8 = 0;
const SWCR3_DIV_FRC_MASK: u32 = genmask(23, 0);
const SWCR3_DIV_INT_SHIFT: u8 = 24;
const SWCR3_DIV_INT_MASK: u32 = genmask(30, 24);
pub const SWCR3_EN: u32 = bit(31);

/// A characterized PLL setting. The PLL can only run at rates listed in
/// its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PllRateEntry {
    pub rate: u64,
    pub reg5: u8,
    pub reg6: u8,
    pub reg7: u8,
    pub reg8: u8,
    pub div_int: u32,
    pub div_frac: u32,
}

impl PllRateEntry {
    pub const fn new(rate: u64, reg5: u8, reg6: u8, reg7: u8, reg8: u8, div_int: u32, div_frac: u32) -> Self {
        Self { rate, reg5, reg6, reg7, reg8, div_int, div_frac }
    }

    pub fn swcr1(&self) -> u32 {
        (self.reg5 as u32) << SWCR1_REG5_SHIFT
            | (self.reg6 as u32) << SWCR1_REG6_SHIFT
            | (self.reg7 as u32) << SWCR1_REG7_SHIFT
            | (self.reg8 as u32) << SWCR1_REG8_SHIFT
    }

    pub fn swcr3(&self) -> u32 {
        (self.div_int << SWCR3_DIV_INT_SHIFT) & SWCR3_DIV_INT_MASK
            | (self.div_frac << SWCR3_DIV_FRC_SHIFT) & SWCR3_DIV_FRC_MASK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pll {
    pub swcr1: u32,
    pub swcr2: u32,
    pub swcr3: u32,
    /// Offset of the lock status register, in the lock region.
    pub reg_lock: u32,
    pub lock_bit: u32,
    pub table: &'static [PllRateEntry],
}

impl Pll {
    pub const fn new(
        table: &'static [PllRateEntry],
        swcr1: u32, swcr2: u32, swcr3: u32,
        reg_lock: u32, lock_bit: u32,
    ) -> Self {
        Self { swcr1, swcr2, swcr3, reg_lock, lock_bit, table }
    }

    pub fn is_enabled(&self, c: &CcuCommon) -> bool {
        c.read(self.swcr3) & SWCR3_EN != 0
    }

    pub fn enable(&self, c: &CcuCommon) -> Result<()> {
        if self.is_enabled(c) {
            return Ok(());
        }

        let lock = c.lock_map()?;
        c.update(self.swcr3, SWCR3_EN, SWCR3_EN);

        let lock_bit = self.lock_bit;
        lock.read_poll_timeout_atomic(self.reg_lock, &|v| v & lock_bit != 0,
            PLL_LOCK_POLL_DELAY, PLL_DELAY_TIME)
            .map_err(|last| {
                warn!("{} lock timeout reg=0x{:04x} value=0x{:08x}", c.name, self.reg_lock, last.0);
                c.timeout("pll lock", self.reg_lock)
            })?;

        debug!("{} locked", c.name);
        Ok(())
    }

    pub fn disable(&self, c: &CcuCommon) {
        c.update(self.swcr3, SWCR3_EN, 0);
    }

    /// Programs the dividers for `rate`. Takes effect on the next enable,
    /// the PLL is expected to be off.
    pub fn set_rate(&self, c: &CcuCommon, rate: u64) -> Result<()> {
        let entry = match self.table.iter().find(|e| e.rate == rate) {
            Some(entry) => entry,
            None => {
                warn!("{} rate={} not in rate table", c.name, rate);
                return Err(c.invalid_rate(rate));
            }
        };

        c.update(self.swcr1, genmask(31, 0), entry.swcr1());
        c.update(self.swcr3, SWCR3_DIV_INT_MASK | SWCR3_DIV_FRC_MASK, entry.swcr3());

        debug!("{} rate={} div_int=0x{:02x} div_frac=0x{:06x}",
            c.name, rate, entry.div_int, entry.div_frac);
        Ok(())
    }

    /// Looks the live register contents up in the table. Unknown settings
    /// (not programmed yet, or by someone else) read as 0.
    pub fn recalc_rate(&self, c: &CcuCommon) -> u64 {
        let swcr1 = c.read(self.swcr1);
        let swcr3 = c.read(self.swcr3);

        let live = PllRateEntry {
            rate: 0,
            reg5: field_get(swcr1, SWCR1_REG5_SHIFT, 8) as u8,
            reg6: field_get(swcr1, SWCR1_REG6_SHIFT, 8) as u8,
            reg7: field_get(swcr1, SWCR1_REG7_SHIFT, 8) as u8,
            reg8: field_get(swcr1, SWCR1_REG8_SHIFT, 8) as u8,
            div_int: field_get(swcr3, SWCR3_DIV_INT_SHIFT, 7),
            div_frac: field_get(swcr3, SWCR3_DIV_FRC_SHIFT, 24),
        };

        let found = self.table.iter()
            .find(|e| PllRateEntry { rate: 0, ..**e } == live)
            .map(|e| e.rate);

        match found {
            Some(rate) => rate,
            None => {
                if c.warn_once() {
                    warn!("{} unknown setting swcr1=0x{:08x} swcr3=0x{:08x}", c.name, swcr1, swcr3);
                }
                0
            }
        }
    }

    pub fn round_rate(&self, rate: u64) -> u64 {
        self.table.iter()
            .map(|e| e.rate)
            .filter(|&r| r <= rate)
            .max()
            .unwrap_or(0)
            .max(PLL_MIN_FREQ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clk::tests::emu_common;
    use crate::emu::EmuRegisters;
    use crate::error::ClkError;
    use crate::regmap::Regmap;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    static PLL1_TABLE: [PllRateEntry; 1] = [
        PllRateEntry::new(2_457_600_000, 0x64, 0xdd, 0x50, 0x00, 0x33, 0x0ccccd),
    ];

    static PLL3_TABLE: [PllRateEntry; 3] = [
        PllRateEntry::new(3_000_000_000, 0x66, 0xdd, 0x50, 0x00, 0x3f, 0xe00000),
        PllRateEntry::new(3_200_000_000, 0x67, 0xdd, 0x50, 0x00, 0x43, 0xeaaaab),
        PllRateEntry::new(2_457_600_000, 0x64, 0xdd, 0x50, 0x00, 0x33, 0x0ccccd),
    ];

    const POSR: u32 = 0x10;
    const PLL1_LOCK: u32 = 1 << 27;

    fn pll1() -> Pll {
        Pll::new(&PLL1_TABLE, 0x100, 0x104, 0x108, POSR, PLL1_LOCK)
    }

    #[test]
    fn set_rate_then_recalc() {
        let (regs, c) = emu_common("pll1");
        let pll = pll1();

        pll.set_rate(&c, 2_457_600_000).unwrap();
        assert_eq!(regs.peek(0x100), 0x0050_dd64);
        assert_eq!(regs.peek(0x108), 0x330c_cccd);
        assert_eq!(pll.recalc_rate(&c), 2_457_600_000);
    }

    #[test]
    fn set_rate_rejects_unlisted_rate() {
        let (regs, c) = emu_common("pll1");
        let err = pll1().set_rate(&c, 2_000_000_000).unwrap_err();
        assert_eq!(err, ClkError::InvalidRate { clk: "pll1".into(), rate: 2_000_000_000 });
        assert_eq!(regs.stats().writes, 0);
    }

    #[test]
    fn set_rate_keeps_enable_bit() {
        let (regs, c) = emu_common("pll3");
        let pll = Pll::new(&PLL3_TABLE, 0x124, 0x128, 0x12c, POSR, 1 << 29);
        regs.poke(0x12c, SWCR3_EN);

        pll.set_rate(&c, 3_200_000_000).unwrap();
        assert_eq!(regs.peek(0x12c), SWCR3_EN | 0x43ea_aaab);
        assert_eq!(pll.recalc_rate(&c), 3_200_000_000);
    }

    #[test]
    fn recalc_unknown_setting_is_zero() {
        let (regs, c) = emu_common("pll1");
        regs.poke(0x100, 0x1234_5678);
        assert_eq!(pll1().recalc_rate(&c), 0);
        assert_eq!(pll1().recalc_rate(&c), 0);
    }

    #[test]
    fn round_rate_floors_to_table() {
        let pll = Pll::new(&PLL3_TABLE, 0x124, 0x128, 0x12c, POSR, 1 << 29);
        assert_eq!(pll.round_rate(3_100_000_000), 3_000_000_000);
        assert_eq!(pll.round_rate(4_000_000_000), 3_200_000_000);
        assert_eq!(pll.round_rate(2_457_600_000), 2_457_600_000);
        assert_eq!(pll.round_rate(1_000_000_000), PLL_MIN_FREQ);
    }

    fn with_lock() -> (Rc<EmuRegisters>, Rc<EmuRegisters>, CcuCommon) {
        let base = Rc::new(EmuRegisters::new("apbs"));
        let lock = Rc::new(EmuRegisters::new("mpmu"));
        let c = CcuCommon::new("pll1", base.clone() as Regmap, Some(lock.clone() as Regmap));
        (base, lock, c)
    }

    #[test]
    fn enable_waits_for_lock() {
        let (base, lock, c) = with_lock();
        lock.poke(POSR, PLL1_LOCK);

        let pll = pll1();
        pll.enable(&c).unwrap();
        assert!(pll.is_enabled(&c));
        assert_eq!(base.peek(0x108), SWCR3_EN);

        pll.disable(&c);
        assert!(!pll.is_enabled(&c));
    }

    #[test]
    fn enable_when_enabled_does_not_touch_hardware() {
        let (base, lock, c) = with_lock();
        base.poke(0x108, SWCR3_EN);

        pll1().enable(&c).unwrap();
        pll1().enable(&c).unwrap();
        assert_eq!(base.stats().writes, 0);
        assert_eq!(lock.stats().reads, 0);
    }

    #[test]
    fn enable_times_out_without_lock() {
        let (_base, _lock, c) = with_lock();

        let start = Instant::now();
        let err = pll1().enable(&c).unwrap_err();
        let elapsed = start.elapsed();

        assert_eq!(err, ClkError::Timeout { clk: "pll1".into(), what: "pll lock", offset: POSR });
        assert!(elapsed >= Duration::from_millis(3));
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn enable_without_lock_map_is_config_error() {
        let (_regs, c) = emu_common("pll1");
        assert!(matches!(pll1().enable(&c), Err(ClkError::Config(_))));
    }
}

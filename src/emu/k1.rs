// SPDX-License-Identifier: GPL-3.0-or-later

use std::rc::Rc;

use serde::Deserialize;

use super::EmuRegisters;
use crate::ccu::k1::{self, APMU_FC_BITS, PLL_LOCKS, MPMU_POSR};
use crate::ccu::Region;
use crate::clk::pll::{PllRateEntry, SWCR3_EN};
use crate::regmap::Regmap;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct HardwareConfig {
    /// PLLs report lock in MPMU_POSR as soon as they are switched on.
    pub pll_lock: bool,
    /// APMU frequency-change requests complete immediately.
    pub fc_self_clear: bool,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self { pll_lock: true, fc_self_clear: true }
    }
}

/// The four clock control register regions of a K1, backed by memory.
pub struct K1Soc {
    apbs: Rc<EmuRegisters>,
    mpmu: Rc<EmuRegisters>,
    apbc: Rc<EmuRegisters>,
    apmu: Rc<EmuRegisters>,
    hw: HardwareConfig,
}

impl K1Soc {
    pub fn new() -> Self {
        Self::with_config(HardwareConfig::default())
    }

    pub fn with_config(hw: HardwareConfig) -> Self {
        let soc = Self {
            apbs: Rc::new(EmuRegisters::new(Region::Apbs.name())),
            mpmu: Rc::new(EmuRegisters::new(Region::Mpmu.name())),
            apbc: Rc::new(EmuRegisters::new(Region::Apbc.name())),
            apmu: Rc::new(EmuRegisters::new(Region::Apmu.name())),
            hw,
        };

        if hw.pll_lock {
            for &(swcr3, lock_bit) in PLL_LOCKS {
                let mpmu = soc.mpmu.clone();
                soc.apbs.add_write_callback(swcr3, move |v| {
                    mpmu.assign_bits(MPMU_POSR, lock_bit, v & SWCR3_EN != 0);
                });
            }
        }

        if hw.fc_self_clear {
            for &(offset, mask) in APMU_FC_BITS {
                soc.apmu.add_self_clearing(offset, mask);
            }
        }

        debug!("k1 pll_lock={} fc_self_clear={}", hw.pll_lock, hw.fc_self_clear);
        soc
    }

    pub fn regs(&self, region: Region) -> &Rc<EmuRegisters> {
        match region {
            Region::Apbs => &self.apbs,
            Region::Mpmu => &self.mpmu,
            Region::Apbc => &self.apbc,
            Region::Apmu => &self.apmu,
        }
    }

    pub fn map(&self, region: Region) -> Regmap {
        self.regs(region).clone() as Regmap
    }

    /// Sets a register the way firmware left it before the kernel runs.
    pub fn preload(&self, region: Region, offset: u32, value: u32) {
        self.regs(region).poke(offset, value);
        trace!("preload {} offset=0x{:04x} value=0x{:08x}", region, offset, value);

        if region == Region::Apbs && self.hw.pll_lock {
            self.sync_pll_locks();
        }
    }

    /// Programs the PLL dividers the boot loader leaves behind: pll1 at
    /// 2457.6 MHz, pll2 and pll3 at 3 GHz. PLLs stay off.
    pub fn program_boot_plls(&self) {
        let boot: [(u32, u32, PllRateEntry); 3] = [
            (k1::APB_SPARE1_REG, k1::APB_SPARE3_REG, k1::PLL1_RATES[0]),
            (k1::APB_SPARE7_REG, k1::APB_SPARE9_REG, k1::PLL2_RATES[0]),
            (k1::APB_SPARE10_REG, k1::APB_SPARE12_REG, k1::PLL3_RATES[0]),
        ];

        for (swcr1, swcr3, entry) in boot {
            let en = self.apbs.peek(swcr3) & SWCR3_EN;
            self.preload(Region::Apbs, swcr1, entry.swcr1());
            self.preload(Region::Apbs, swcr3, entry.swcr3() | en);
        }
    }

    fn sync_pll_locks(&self) {
        for &(swcr3, lock_bit) in PLL_LOCKS {
            let on = self.apbs.peek(swcr3) & SWCR3_EN != 0;
            self.mpmu.assign_bits(MPMU_POSR, lock_bit, on);
        }
    }
}

impl Default for K1Soc {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ccu::k1::{APB_SPARE3_REG, POSR_PLL1_LOCK, POSR_PLL3_LOCK, APB_SPARE12_REG};
    use crate::regmap::RegisterMap;

    #[test]
    fn pll_enable_reports_lock() {
        let soc = K1Soc::new();
        soc.map(Region::Apbs).update_bits(APB_SPARE3_REG, SWCR3_EN, SWCR3_EN);
        assert_eq!(soc.regs(Region::Mpmu).peek(MPMU_POSR), POSR_PLL1_LOCK);

        soc.map(Region::Apbs).update_bits(APB_SPARE3_REG, SWCR3_EN, 0);
        assert_eq!(soc.regs(Region::Mpmu).peek(MPMU_POSR), 0);
    }

    #[test]
    fn no_lock_without_mirroring() {
        let soc = K1Soc::with_config(HardwareConfig { pll_lock: false, fc_self_clear: true });
        soc.map(Region::Apbs).write(APB_SPARE3_REG, SWCR3_EN);
        assert_eq!(soc.regs(Region::Mpmu).peek(MPMU_POSR), 0);
    }

    #[test]
    fn preloaded_running_pll_is_locked() {
        let soc = K1Soc::new();
        soc.preload(Region::Apbs, APB_SPARE12_REG, SWCR3_EN);
        assert_eq!(soc.regs(Region::Mpmu).peek(MPMU_POSR), POSR_PLL3_LOCK);
        assert_eq!(soc.regs(Region::Apbs).stats().writes, 0);
    }

    #[test]
    fn fc_bits_self_clear() {
        let soc = K1Soc::new();
        soc.map(Region::Apmu).write(0x54, (1 << 11) | (1 << 4));
        assert_eq!(soc.regs(Region::Apmu).peek(0x54), 1 << 4);

        let soc = K1Soc::with_config(HardwareConfig { pll_lock: true, fc_self_clear: false });
        soc.map(Region::Apmu).write(0x54, 1 << 11);
        assert_eq!(soc.regs(Region::Apmu).peek(0x54), 1 << 11);
    }

    #[test]
    fn boot_plls() {
        let soc = K1Soc::new();
        soc.program_boot_plls();
        let apbs = soc.regs(Region::Apbs);
        assert_eq!(apbs.peek(k1::APB_SPARE1_REG), 0x0050_dd64);
        assert_eq!(apbs.peek(APB_SPARE3_REG), 0x330c_cccd);
        assert_eq!(apbs.peek(APB_SPARE12_REG) & SWCR3_EN, 0);
        assert_eq!(soc.regs(Region::Mpmu).peek(MPMU_POSR), 0);
    }

    #[test]
    fn hardware_config_defaults() {
        let hw: HardwareConfig = serde_yaml::from_str("pll_lock: false").unwrap();
        assert_eq!(hw, HardwareConfig { pll_lock: false, fc_self_clear: true });
    }
}

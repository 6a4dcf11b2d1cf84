// SPDX-License-Identifier: GPL-3.0-or-later

pub mod k1;

use serde::Deserialize;

use crate::clk::{CcuCommon, ClkDesc, ClkId, ClkTree};
use crate::error::{ClkError, Result};
use crate::regmap::Regmap;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Apbs,
    Mpmu,
    Apbc,
    Apmu,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Apbs, Region::Mpmu, Region::Apbc, Region::Apmu];

    pub fn name(&self) -> &'static str {
        match self {
            Region::Apbs => "apbs",
            Region::Mpmu => "mpmu",
            Region::Apbc => "apbc",
            Region::Apmu => "apmu",
        }
    }

    pub fn data(&self) -> &'static CcuData {
        match self {
            Region::Apbs => &k1::APBS_DATA,
            Region::Mpmu => &k1::MPMU_DATA,
            Region::Apbc => &k1::APBC_DATA,
            Region::Apmu => &k1::APMU_DATA,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Region {
    type Err = ClkError;

    fn from_str(s: &str) -> Result<Self> {
        Region::ALL.iter()
            .find(|r| r.name() == s)
            .copied()
            .ok_or_else(|| ClkError::Config(format!("unknown ccu region: {}", s)))
    }
}

pub struct CcuData {
    /// Position in the table is the index consumers use.
    pub clks: &'static [ClkDesc],
    /// The PLLs live here, their lock status in another region.
    pub need_pll_lock: bool,
}

/// One bound CCU instance. Maps the region's dense indices to clocks of
/// the tree.
pub struct Ccu {
    pub region: Region,
    clks: Vec<ClkId>,
}

impl Ccu {
    pub fn bind(region: Region, base: Option<Regmap>, lock: Option<Regmap>, tree: &mut ClkTree) -> Result<Self> {
        let data = region.data();

        let base = base.ok_or_else(||
            ClkError::Config(format!("{}: no register map", region)))?;

        let lock = match (data.need_pll_lock, lock) {
            (true, None) => return Err(ClkError::Config(format!("{}: no lock register map", region))),
            (true, lock) => lock,
            (false, _) => None,
        };

        let batch = data.clks.iter()
            .map(|desc| (*desc, CcuCommon::new(desc.name, base.clone(), lock.clone())))
            .collect();

        let clks = tree.register(batch).map_err(|e| {
            error!("{}: cannot register clocks: {}", region, e);
            e
        })?;

        info!("ccu region={} clocks={}", region, clks.len());
        Ok(Self { region, clks })
    }

    /// One-cell style lookup.
    pub fn get(&self, index: usize) -> Option<ClkId> {
        self.clks.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.clks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emu::EmuRegisters;
    use std::rc::Rc;

    fn tree() -> ClkTree {
        let mut tree = ClkTree::new();
        for (name, rate) in k1::OSCILLATORS {
            tree.add_fixed(name, *rate).unwrap();
        }
        tree
    }

    #[test]
    fn missing_base_map() {
        let mut tree = tree();
        let before = tree.len();
        let err = Ccu::bind(Region::Apbc, None, None, &mut tree).err().unwrap();
        assert!(matches!(err, ClkError::Config(_)));
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn apbs_needs_lock_map() {
        let mut tree = tree();
        let before = tree.len();
        let base = Rc::new(EmuRegisters::new("apbs")) as Regmap;

        let err = Ccu::bind(Region::Apbs, Some(base), None, &mut tree).err().unwrap();
        assert!(matches!(err, ClkError::Config(_)));
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn lock_map_ignored_elsewhere() {
        let mut tree = tree();
        let base = Rc::new(EmuRegisters::new("mpmu")) as Regmap;
        let ccu = Ccu::bind(Region::Mpmu, Some(base.clone()), Some(base), &mut tree).unwrap();
        assert_eq!(ccu.len(), k1::MPMU_DATA.clks.len());
    }

    #[test]
    fn probing_twice_fails() {
        let mut tree = tree();
        let base = Rc::new(EmuRegisters::new("mpmu")) as Regmap;
        Ccu::bind(Region::Mpmu, Some(base.clone()), None, &mut tree).unwrap();
        let before = tree.len();

        let err = Ccu::bind(Region::Mpmu, Some(base), None, &mut tree).err().unwrap();
        assert!(matches!(err, ClkError::Config(_)));
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn region_names() {
        for r in Region::ALL {
            assert_eq!(r.name().parse::<Region>(), Ok(r));
        }
        assert!(matches!("APBC".parse::<Region>(), Err(ClkError::Config(_))));
    }

    #[test]
    fn index_lookup() {
        let mut tree = tree();
        let base = Rc::new(EmuRegisters::new("mpmu")) as Regmap;
        let ccu = Ccu::bind(Region::Mpmu, Some(base), None, &mut tree).unwrap();

        assert_eq!(tree.name(ccu.get(0).unwrap()), "pll1_d8_307p2");
        assert_eq!(tree.name(ccu.get(32).unwrap()), "apb_clk");
        assert_eq!(ccu.get(ccu.len()), None);
    }
}

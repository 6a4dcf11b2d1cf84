// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{anyhow, bail, Context as _, Result};

use crate::ccu::{k1, Ccu, Region};
use crate::clk::{ClkId, ClkTree};
use crate::config::Config;
use crate::emu::K1Soc;

/// Everything the command line operates on.
pub struct System {
    pub soc: K1Soc,
    pub tree: ClkTree,
    pub ccus: Vec<Ccu>,
}

impl System {
    /// Finds a clock by name, or by `region:index` the way a device tree
    /// consumer would.
    pub fn clk(&self, name: &str) -> Result<ClkId> {
        if let Some((region, index)) = name.split_once(':') {
            let region: Region = region.parse()?;
            let index: usize = index.parse()
                .with_context(|| format!("Invalid clock index={}", index))?;
            return self.ccu(region)
                .and_then(|c| c.get(index))
                .ok_or_else(|| anyhow!("No clock at region={} index={}", region, index));
        }
        Ok(self.tree.lookup(name)?)
    }

    pub fn ccu(&self, region: Region) -> Option<&Ccu> {
        self.ccus.iter().find(|c| c.region == region)
    }

    /// The clocks of one region in index order.
    pub fn list(&self, region: Region) -> Result<String> {
        let ccu = self.ccu(region)
            .ok_or_else(|| anyhow!("ccu region={} is not configured", region))?;

        let mut out = format!("{:>5} {:<28} {:<16} {:<24} {:>6} {:>12}\n",
            "index", "clock", "kind", "flags", "enable", "rate");
        for (index, id) in (0..ccu.len()).filter_map(|i| ccu.get(i).map(|id| (i, id))) {
            out.push_str(&format!("{:>5} {:<28} {:<16} {:<24} {:>6} {:>12}\n",
                index, self.tree.name(id), self.tree.kind(id), self.tree.flags(id).to_string(),
                self.tree.enable_count(id), self.tree.rate(id)));
        }
        Ok(out)
    }
}

fn add_oscillators(tree: &mut ClkTree, config: &Config) -> Result<()> {
    match config.oscillators {
        Some(ref oscillators) => {
            for o in oscillators {
                tree.add_fixed(&o.name, o.rate)
                    .with_context(|| format!("Failed to add oscillator name={}", o.name))?;
            }
        }
        None => {
            for (name, rate) in k1::OSCILLATORS {
                tree.add_fixed(name, *rate)?;
            }
        }
    }
    Ok(())
}

fn bind_ccus(soc: &K1Soc, tree: &mut ClkTree, config: &Config) -> Result<Vec<Ccu>> {
    let mut ccus: Vec<Ccu> = vec![];

    for c in &config.ccus {
        if ccus.iter().any(|p| p.region == c.region) {
            bail!("ccu region={} listed twice", c.region);
        }

        let base = Some(soc.map(c.region));
        let lock = c.lock.map(|r| soc.map(r));
        let ccu = Ccu::bind(c.region, base, lock, tree)
            .with_context(|| format!("Failed to bind ccu region={}", c.region))?;
        ccus.push(ccu);
    }

    Ok(ccus)
}

/// Device tree style assigned-clock-parents, assigned-clock-rates, then the
/// clocks consumers keep enabled.
fn apply_assignments(tree: &mut ClkTree, config: &Config) -> Result<()> {
    for a in config.assigned_parents.as_ref().unwrap_or(&vec![]) {
        let clk = tree.lookup(&a.clock)?;
        tree.set_parent(clk, &a.parent)
            .with_context(|| format!("Failed to assign parent={} to clock={}", a.parent, a.clock))?;
    }

    for a in config.assigned_rates.as_ref().unwrap_or(&vec![]) {
        let clk = tree.lookup(&a.clock)?;
        tree.set_rate(clk, a.rate)
            .with_context(|| format!("Failed to assign rate={} to clock={}", a.rate, a.clock))?;
    }

    for name in config.enable.as_ref().unwrap_or(&vec![]) {
        let clk = tree.lookup(name)?;
        tree.prepare_enable(clk)
            .with_context(|| format!("Failed to enable clock={}", name))?;
    }

    Ok(())
}

pub fn prepare(config: &Config) -> Result<System> {
    let soc = K1Soc::with_config(config.hardware);
    if config.boot_plls {
        soc.program_boot_plls();
    }

    for p in config.preload.as_ref().unwrap_or(&vec![]) {
        debug!("Preloading region={} offset=0x{:04x} value=0x{:08x}", p.region, p.offset, p.value);
        soc.preload(p.region, p.offset, p.value);
    }

    let mut tree = ClkTree::new();
    add_oscillators(&mut tree, config)?;
    let ccus = bind_ccus(&soc, &mut tree, config)?;
    apply_assignments(&mut tree, config)?;

    info!("Clock tree ready clocks={} ccus={}", tree.len(), ccus.len());
    Ok(System { soc, tree, ccus })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../k1.yaml");

    #[test]
    fn sample_config_comes_up() {
        let config = Config::parse(SAMPLE).unwrap();
        let sys = prepare(&config).unwrap();
        let rate = |n| sys.tree.rate(sys.clk(n).unwrap());

        assert_eq!(sys.ccus.len(), 4);
        assert_eq!(rate("apb_clk"), 51_200_000);
        assert_eq!(rate("slow_uart1_14p74"), 14_745_600);
        assert_eq!(rate("uart3_clk"), 48_000_000);
        assert_eq!(rate("sdh0_clk"), 204_800_000);
        assert!(sys.tree.is_enabled(sys.clk("sdh0_clk").unwrap()));

        let mpmu = sys.ccu(Region::Mpmu).unwrap();
        assert_eq!(sys.tree.name(mpmu.get(32).unwrap()), "apb_clk");
    }

    #[test]
    fn apbs_without_lock_region() {
        let config = Config::parse("ccus:\n  - region: apbs\n").unwrap();
        let err = prepare(&config).err().unwrap();
        assert!(format!("{:#}", err).contains("region=apbs"));
    }

    #[test]
    fn region_listed_twice() {
        let config = Config::parse("ccus:\n  - region: mpmu\n  - region: mpmu\n").unwrap();
        assert!(prepare(&config).is_err());
    }

    #[test]
    fn unknown_assigned_clock() {
        let config = Config::parse(r#"
ccus: [{ region: mpmu }]
assigned_rates: [{ clock: nope, rate: 1 }]
"#).unwrap();
        assert!(prepare(&config).is_err());
    }

    #[test]
    fn custom_oscillators() {
        let config = Config::parse(r#"
oscillators: [{ name: vctcxo_24m, rate: 26000000 }]
ccus: [{ region: mpmu }]
"#).unwrap();
        let sys = prepare(&config).unwrap();
        assert_eq!(sys.tree.rate(sys.clk("ripc_clk").unwrap()), 26_000_000);
        assert!(sys.tree.lookup("osc").is_err());
    }

    #[test]
    fn clocks_by_region_index() {
        let config = Config::parse(SAMPLE).unwrap();
        let sys = prepare(&config).unwrap();

        assert_eq!(sys.clk("mpmu:32").unwrap(), sys.clk("apb_clk").unwrap());
        assert_eq!(sys.clk("mpmu:0").unwrap(), sys.clk("pll1_d8_307p2").unwrap());
        assert!(sys.clk("mpmu:100000").is_err());
        assert!(sys.clk("mpmu:x").is_err());
        assert!(sys.clk("ddr:0").is_err());
    }

    #[test]
    fn index_lookup_needs_the_region() {
        let config = Config::parse("ccus: [{ region: mpmu }]").unwrap();
        let sys = prepare(&config).unwrap();

        assert!(sys.clk("mpmu:32").is_ok());
        assert!(sys.clk("apbc:0").is_err());
        assert!(sys.list(Region::Apbc).is_err());
    }

    #[test]
    fn region_listing() {
        let config = Config::parse(SAMPLE).unwrap();
        let sys = prepare(&config).unwrap();
        let list = sys.list(Region::Mpmu).unwrap();
        let lines = list.lines().collect::<Vec<_>>();

        assert!(lines[0].trim_start().starts_with("index"));
        assert_eq!(lines.len(), 1 + sys.ccu(Region::Mpmu).unwrap().len());
        let count = sys.tree.enable_count(sys.clk("apb_clk").unwrap()).to_string();
        let apb = lines[33].split_whitespace().collect::<Vec<_>>();
        assert_eq!(apb, vec!["32", "apb_clk", "mux", "-", count.as_str(), "51200000"]);
    }
}

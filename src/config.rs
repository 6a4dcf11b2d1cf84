// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::ccu::Region;
use crate::emu::HardwareConfig;
use crate::util::read_file_str;

#[derive(Debug, Deserialize)]
pub struct Oscillator {
   pub name: String,
   pub rate: u64,
}

#[derive(Debug, Deserialize)]
pub struct CcuConfig {
   pub region: Region,
   /// Region holding the PLL lock status, needed by APBS.
   pub lock: Option<Region>,
}

#[derive(Debug, Deserialize)]
pub struct Preload {
   pub region: Region,
   pub offset: u32,
   pub value: u32,
}

#[derive(Debug, Deserialize)]
pub struct AssignedParent {
   pub clock: String,
   pub parent: String,
}

#[derive(Debug, Deserialize)]
pub struct AssignedRate {
   pub clock: String,
   pub rate: u64,
}

#[derive(Debug, Deserialize)]
pub struct Config {
   /// Defaults to the K1 board oscillators.
   pub oscillators: Option<Vec<Oscillator>>,
   /// Bound in this order.
   pub ccus: Vec<CcuConfig>,
   #[serde(default)]
   pub hardware: HardwareConfig,
   /// Start with the PLL dividers programmed like the boot loader does.
   #[serde(default)]
   pub boot_plls: bool,
   pub preload: Option<Vec<Preload>>,
   pub assigned_parents: Option<Vec<AssignedParent>>,
   pub assigned_rates: Option<Vec<AssignedRate>>,
   pub enable: Option<Vec<String>>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        Self::parse(&read_file_str(path)?)
            .with_context(|| format!("Failed to parse {}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal() {
        let config = Config::parse("ccus:\n  - region: mpmu\n").unwrap();
        assert_eq!(config.ccus.len(), 1);
        assert_eq!(config.ccus[0].region, Region::Mpmu);
        assert!(config.ccus[0].lock.is_none());
        assert!(config.oscillators.is_none());
        assert_eq!(config.hardware, HardwareConfig::default());
        assert!(!config.boot_plls);
    }

    #[test]
    fn full() {
        let config = Config::parse(r#"
oscillators:
  - { name: osc, rate: 32768 }
ccus:
  - { region: apbs, lock: mpmu }
hardware:
  fc_self_clear: false
boot_plls: true
preload:
  - { region: apbs, offset: 0x104, value: 0xff }
assigned_parents:
  - { clock: uart3_clk, parent: slow_uart2_48 }
assigned_rates:
  - { clock: slow_uart2_48, rate: 48000000 }
enable: [sdh0_clk]
"#).unwrap();

        assert_eq!(config.ccus[0].lock, Some(Region::Mpmu));
        assert!(!config.hardware.fc_self_clear);
        assert!(config.hardware.pll_lock);
        let preload = &config.preload.unwrap()[0];
        assert_eq!((preload.region, preload.offset, preload.value), (Region::Apbs, 0x104, 0xff));
        assert_eq!(config.assigned_rates.unwrap()[0].rate, 48_000_000);
        assert_eq!(config.enable.unwrap(), vec!["sdh0_clk".to_string()]);
    }

    #[test]
    fn unknown_region() {
        assert!(Config::parse("ccus:\n  - region: ddr\n").is_err());
    }

    #[test]
    fn missing_file() {
        let err = Config::load("/nonexistent/k1.yaml").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/k1.yaml"));
    }
}

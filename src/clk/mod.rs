// SPDX-License-Identifier: GPL-3.0-or-later

pub mod common;
pub mod ddn;
pub mod mix;
pub mod pll;
pub mod tree;

pub use common::CcuCommon;
pub use tree::{ClkId, ClkTree};

use ddn::{Ddn, DdnEntry, DdnInfo};
use mix::{calc_best_rate, BestRate, Div, Factor, Gate, Mux};
use pll::{Pll, PllRateEntry};

use crate::error::{ClkError, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClkFlags(u32);

impl ClkFlags {
    pub const NONE: Self = Self(0);
    /// Never gated, enabled as soon as it is registered.
    pub const CRITICAL: Self = Self(1 << 0);
    /// Left alone by the unused clock sweep.
    pub const IGNORE_UNUSED: Self = Self(1 << 1);
    /// Rate can only change while the clock is off.
    pub const SET_RATE_GATE: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::fmt::Display for ClkFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            (ClkFlags::CRITICAL, "critical"),
            (ClkFlags::IGNORE_UNUSED, "ignore_unused"),
            (ClkFlags::SET_RATE_GATE, "set_rate_gate"),
        ];
        let set = names.iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>();

        if set.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&set.join(","))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentRef {
    /// Another CCU clock, possibly from another region.
    Hw(&'static str),
    /// A clock coming from outside the CCUs, like a board oscillator.
    Fw(&'static str),
}

impl ParentRef {
    pub fn name(&self) -> &'static str {
        match self {
            ParentRef::Hw(name) | ParentRef::Fw(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Op {
    Enable,
    Disable,
    IsEnabled,
    RecalcRate,
    RoundRate,
    DetermineRate,
    SetRate,
    GetParent,
    SetParent,
}

impl Op {
    pub fn name(&self) -> &'static str {
        match self {
            Op::Enable => "enable",
            Op::Disable => "disable",
            Op::IsEnabled => "is_enabled",
            Op::RecalcRate => "recalc_rate",
            Op::RoundRate => "round_rate",
            Op::DetermineRate => "determine_rate",
            Op::SetRate => "set_rate",
            Op::GetParent => "get_parent",
            Op::SetParent => "set_parent",
        }
    }
}

use Op::*;

const GATE_OPS: &[Op] = &[Enable, Disable, IsEnabled];
const FACTOR_OPS: &[Op] = &[RecalcRate, RoundRate, SetRate];
const GATE_FACTOR_OPS: &[Op] = &[Enable, Disable, IsEnabled, RecalcRate, RoundRate, SetRate];
const MUX_OPS: &[Op] = &[DetermineRate, GetParent, SetParent];
const MUX_GATE_OPS: &[Op] = &[Enable, Disable, IsEnabled, DetermineRate, GetParent, SetParent];
const DIV_OPS: &[Op] = &[RecalcRate, DetermineRate, SetRate];
const DIV_GATE_OPS: &[Op] = &[Enable, Disable, IsEnabled, RecalcRate, DetermineRate, SetRate];
const DIV_MUX_OPS: &[Op] = &[RecalcRate, DetermineRate, SetRate, GetParent, SetParent];
const DIV_MUX_GATE_OPS: &[Op] = &[
    Enable, Disable, IsEnabled, RecalcRate, DetermineRate, SetRate, GetParent, SetParent,
];
const PLL_OPS: &[Op] = &[Enable, Disable, IsEnabled, RecalcRate, RoundRate, SetRate];
const DDN_OPS: &[Op] = &[RecalcRate, RoundRate, SetRate];
const DDN_GATE_OPS: &[Op] = &[Enable, Disable, IsEnabled, RecalcRate, RoundRate, SetRate];

/// One hardware clock node. Every variant owns exactly the building blocks
/// its control register(s) implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clk {
    Gate(Gate),
    Factor(Factor),
    GateFactor(Gate, Factor),
    Mux(Mux),
    MuxGate(Mux, Gate),
    Div(Div),
    DivGate(Div, Gate),
    DivMux(Div, Mux),
    DivMuxGate(Div, Mux, Gate),
    Pll(Pll),
    Ddn(Ddn),
}

impl Clk {
    pub fn ops(&self) -> &'static [Op] {
        match self {
            Clk::Gate(_) => GATE_OPS,
            Clk::Factor(_) => FACTOR_OPS,
            Clk::GateFactor(..) => GATE_FACTOR_OPS,
            Clk::Mux(_) => MUX_OPS,
            Clk::MuxGate(..) => MUX_GATE_OPS,
            Clk::Div(_) => DIV_OPS,
            Clk::DivGate(..) => DIV_GATE_OPS,
            Clk::DivMux(..) => DIV_MUX_OPS,
            Clk::DivMuxGate(..) => DIV_MUX_GATE_OPS,
            Clk::Pll(_) => PLL_OPS,
            Clk::Ddn(ddn) if ddn.gate.is_some() => DDN_GATE_OPS,
            Clk::Ddn(_) => DDN_OPS,
        }
    }

    pub fn supports(&self, op: Op) -> bool {
        self.ops().contains(&op)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Clk::Gate(_) => "gate",
            Clk::Factor(_) => "factor",
            Clk::GateFactor(..) => "gate_factor",
            Clk::Mux(_) => "mux",
            Clk::MuxGate(..) => "mux_gate",
            Clk::Div(_) => "div",
            Clk::DivGate(..) => "div_gate",
            Clk::DivMux(..) => "div_mux",
            Clk::DivMuxGate(..) => "div_mux_gate",
            Clk::Pll(_) => "pll",
            Clk::Ddn(_) => "ddn",
        }
    }

    fn gate(&self) -> Option<&Gate> {
        match self {
            Clk::Gate(g) | Clk::GateFactor(g, _) | Clk::MuxGate(_, g)
            | Clk::DivGate(_, g) | Clk::DivMuxGate(_, _, g) => Some(g),
            _ => None,
        }
    }

    pub fn mux(&self) -> Option<&Mux> {
        match self {
            Clk::Mux(m) | Clk::MuxGate(m, _) | Clk::DivMux(_, m) | Clk::DivMuxGate(_, m, _) => Some(m),
            _ => None,
        }
    }

    fn div(&self) -> Option<&Div> {
        match self {
            Clk::Div(d) | Clk::DivGate(d, _) | Clk::DivMux(d, _) | Clk::DivMuxGate(d, _, _) => Some(d),
            _ => None,
        }
    }

    fn factor(&self) -> Option<&Factor> {
        match self {
            Clk::Factor(f) | Clk::GateFactor(_, f) => Some(f),
            _ => None,
        }
    }

    fn not_supported(c: &CcuCommon, op: Op) -> ClkError {
        ClkError::NotSupported { clk: c.name.to_string(), op: op.name() }
    }

    pub fn enable(&self, c: &CcuCommon) -> Result<()> {
        match self {
            Clk::Pll(pll) => pll.enable(c),
            Clk::Ddn(ddn) if ddn.gate.is_some() => {
                ddn.enable(c);
                Ok(())
            }
            _ => match self.gate() {
                Some(gate) => gate.enable(c),
                None => Err(Self::not_supported(c, Enable)),
            },
        }
    }

    pub fn disable(&self, c: &CcuCommon) -> Result<()> {
        match self {
            Clk::Pll(pll) => pll.disable(c),
            Clk::Ddn(ddn) if ddn.gate.is_some() => ddn.disable(c),
            _ => match self.gate() {
                Some(gate) => gate.disable(c),
                None => return Err(Self::not_supported(c, Disable)),
            },
        }
        Ok(())
    }

    pub fn is_enabled(&self, c: &CcuCommon) -> Result<bool> {
        match self {
            Clk::Pll(pll) => Ok(pll.is_enabled(c)),
            Clk::Ddn(ddn) if ddn.gate.is_some() => Ok(ddn.is_enabled(c)),
            _ => match self.gate() {
                Some(gate) => Ok(gate.is_enabled(c)),
                None => Err(Self::not_supported(c, IsEnabled)),
            },
        }
    }

    pub fn recalc_rate(&self, c: &CcuCommon, parent_rate: u64) -> Result<u64> {
        match self {
            Clk::Pll(pll) => Ok(pll.recalc_rate(c)),
            Clk::Ddn(ddn) => Ok(ddn.recalc_rate(c, parent_rate)),
            _ => {
                if let Some(div) = self.div() {
                    Ok(div.recalc_rate(c, parent_rate))
                } else if let Some(factor) = self.factor() {
                    Ok(factor.recalc_rate(parent_rate))
                } else {
                    Err(Self::not_supported(c, RecalcRate))
                }
            }
        }
    }

    pub fn round_rate(&self, c: &CcuCommon, rate: u64, parent_rate: u64) -> Result<u64> {
        match self {
            Clk::Pll(pll) => Ok(pll.round_rate(rate)),
            Clk::Ddn(ddn) => Ok(ddn.round_rate(rate, parent_rate)),
            _ => match self.factor() {
                Some(factor) => Ok(factor.round_rate(rate, parent_rate)),
                None => Err(Self::not_supported(c, RoundRate)),
            },
        }
    }

    /// Best (parent, divider) pair for `rate`. `parents` holds the rate of
    /// every parent candidate in order, `None` when it cannot be resolved.
    /// No resolvable parent gives `Ok(None)`.
    pub fn determine_rate(&self, c: &CcuCommon, rate: u64, parents: &[Option<u64>]) -> Result<Option<BestRate>> {
        if !self.supports(DetermineRate) {
            return Err(Self::not_supported(c, DetermineRate));
        }
        Ok(calc_best_rate(self.div(), rate, parents))
    }

    pub fn set_rate(&self, c: &CcuCommon, rate: u64, parent_rate: u64) -> Result<()> {
        match self {
            Clk::Pll(pll) => pll.set_rate(c, rate),
            Clk::Ddn(ddn) => ddn.set_rate(c, rate, parent_rate),
            // Fixed ratio, nothing to program
            Clk::Factor(_) | Clk::GateFactor(..) => Ok(()),
            _ => match self.div() {
                Some(div) => div.set_rate(c, rate, parent_rate),
                None => Err(Self::not_supported(c, SetRate)),
            },
        }
    }

    pub fn get_parent(&self, c: &CcuCommon) -> Result<u8> {
        match self.mux() {
            Some(mux) => Ok(mux.get_parent(c)),
            None => Err(Self::not_supported(c, GetParent)),
        }
    }

    pub fn set_parent(&self, c: &CcuCommon, index: u8) -> Result<()> {
        match self.mux() {
            Some(mux) => mux.set_parent(c, index),
            None => Err(Self::not_supported(c, SetParent)),
        }
    }
}

/// Static description of a clock node, as laid out in the region tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClkDesc {
    pub name: &'static str,
    pub parents: &'static [ParentRef],
    pub flags: ClkFlags,
    pub clk: Clk,
}

// Gates of the K1 are all "mask bits set means on".
#[allow(clippy::too_many_arguments)]
impl ClkDesc {
    pub const fn new(name: &'static str, parents: &'static [ParentRef], flags: ClkFlags, clk: Clk) -> Self {
        Self { name, parents, flags, clk }
    }

    pub const fn gate(
        name: &'static str, parent: &'static [ParentRef],
        reg: u32, mask: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parent, flags, Clk::Gate(Gate::new(reg, mask, mask, 0)))
    }

    pub const fn factor(name: &'static str, parent: &'static [ParentRef], div: u32, mul: u32) -> Self {
        Self::new(name, parent, ClkFlags::NONE, Clk::Factor(Factor::new(div, mul)))
    }

    pub const fn gate_factor(
        name: &'static str, parent: &'static [ParentRef],
        reg: u32, mask: u32, div: u32, mul: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parent, flags,
            Clk::GateFactor(Gate::new(reg, mask, mask, 0), Factor::new(div, mul)))
    }

    pub const fn mux(
        name: &'static str, parents: &'static [ParentRef],
        reg: u32, shift: u8, width: u8, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parents, flags, Clk::Mux(Mux::new(reg, shift, width)))
    }

    pub const fn mux_fc(
        name: &'static str, parents: &'static [ParentRef],
        reg: u32, fc: u32, shift: u8, width: u8, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parents, flags, Clk::Mux(Mux::new(reg, shift, width).with_fc(reg, fc)))
    }

    pub const fn mux_gate(
        name: &'static str, parents: &'static [ParentRef],
        reg: u32, shift: u8, width: u8, mask: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parents, flags,
            Clk::MuxGate(Mux::new(reg, shift, width), Gate::new(reg, mask, mask, 0)))
    }

    pub const fn div(
        name: &'static str, parent: &'static [ParentRef],
        reg: u32, shift: u8, width: u8, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parent, flags, Clk::Div(Div::new(reg, shift, width)))
    }

    pub const fn div_gate(
        name: &'static str, parent: &'static [ParentRef],
        reg: u32, shift: u8, width: u8, mask: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parent, flags,
            Clk::DivGate(Div::new(reg, shift, width), Gate::new(reg, mask, mask, 0)))
    }

    pub const fn div_mux_gate(
        name: &'static str, parents: &'static [ParentRef], reg: u32,
        mshift: u8, mwidth: u8, muxshift: u8, muxwidth: u8, mask: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parents, flags, Clk::DivMuxGate(
            Div::new(reg, mshift, mwidth),
            Mux::new(reg, muxshift, muxwidth),
            Gate::new(reg, mask, mask, 0),
        ))
    }

    /// Divider and mux share one fc trigger living in `reg_fc`.
    pub const fn div2_fc_mux_gate(
        name: &'static str, parents: &'static [ParentRef], reg: u32, reg_fc: u32,
        mshift: u8, mwidth: u8, fc: u32, muxshift: u8, muxwidth: u8, mask: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parents, flags, Clk::DivMuxGate(
            Div::new(reg, mshift, mwidth).with_fc(reg_fc, fc),
            Mux::new(reg, muxshift, muxwidth).with_fc(reg_fc, fc),
            Gate::new(reg, mask, mask, 0),
        ))
    }

    pub const fn div_fc_mux_gate(
        name: &'static str, parents: &'static [ParentRef], reg: u32,
        mshift: u8, mwidth: u8, fc: u32, muxshift: u8, muxwidth: u8, mask: u32, flags: ClkFlags,
    ) -> Self {
        Self::div2_fc_mux_gate(name, parents, reg, reg, mshift, mwidth, fc, muxshift, muxwidth, mask, flags)
    }

    pub const fn div_fc_mux(
        name: &'static str, parents: &'static [ParentRef], reg: u32,
        mshift: u8, mwidth: u8, fc: u32, muxshift: u8, muxwidth: u8, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parents, flags, Clk::DivMux(
            Div::new(reg, mshift, mwidth).with_fc(reg, fc),
            Mux::new(reg, muxshift, muxwidth).with_fc(reg, fc),
        ))
    }

    pub const fn pll(
        name: &'static str, table: &'static [PllRateEntry],
        swcr1: u32, swcr2: u32, swcr3: u32, reg_lock: u32, lock_bit: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, &[], flags, Clk::Pll(Pll::new(table, swcr1, swcr2, swcr3, reg_lock, lock_bit)))
    }

    pub const fn ddn(
        name: &'static str, parent: &'static [ParentRef],
        info: &'static DdnInfo, table: &'static [DdnEntry], reg: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parent, flags, Clk::Ddn(Ddn::new(reg, info, table)))
    }

    #[allow(dead_code)]
    pub const fn ddn_gate(
        name: &'static str, parent: &'static [ParentRef],
        info: &'static DdnInfo, table: &'static [DdnEntry],
        reg_ddn: u32, reg_gate: u32, mask: u32, flags: ClkFlags,
    ) -> Self {
        Self::new(name, parent, flags, Clk::Ddn(Ddn::new(reg_ddn, info, table).with_gate(reg_gate, mask)))
    }

    /// Checks what can be checked without touching hardware.
    pub fn validate(&self) -> Result<()> {
        let bad = |why: String| Err(ClkError::Config(format!("{}: {}", self.name, why)));

        if self.name.is_empty() {
            return bad("empty name".into());
        }

        match (self.clk.mux(), &self.clk) {
            (Some(mux), _) => {
                let max = match mux.table {
                    Some(table) => table.len(),
                    None => 1usize << mux.width,
                };
                if self.parents.is_empty() || self.parents.len() > max {
                    return bad(format!("{} parents for a {} bit select field",
                        self.parents.len(), mux.width));
                }
            }
            (None, Clk::Pll(_)) => {
                if !self.parents.is_empty() {
                    return bad("a pll has no parent".into());
                }
            }
            (None, _) => {
                if self.parents.len() != 1 {
                    return bad(format!("expected 1 parent, got {}", self.parents.len()));
                }
            }
        }

        if let Clk::Factor(f) | Clk::GateFactor(_, f) = self.clk {
            if f.div == 0 {
                return bad("zero factor divider".into());
            }
        }

        if let Some(div) = self.clk.div() {
            if div.width == 0 || div.width > 16 {
                return bad(format!("divider width {}", div.width));
            }
        }

        Ok(())
    }
}

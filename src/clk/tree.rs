// SPDX-License-Identifier: GPL-3.0-or-later

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use super::{CcuCommon, Clk, ClkDesc, ClkFlags, Op, ParentRef};
use crate::error::{ClkError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClkId(usize);

enum Hw {
    /// Board oscillator, or anything else living outside the CCUs.
    Fixed(u64),
    Ccu { clk: Clk, common: CcuCommon },
}

struct Node {
    name: String,
    parents: &'static [ParentRef],
    flags: ClkFlags,
    hw: Hw,
    enable_count: u32,
    // The parent we hold an enable reference on
    held_parent: Option<ClkId>,
}

/// Outcome of a rate negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateRequest {
    pub rate: u64,
    pub parent: Option<ClkId>,
    /// Position in the parent list, when the parent has to change.
    pub parent_index: Option<usize>,
    pub parent_rate: u64,
}

/// Registered clocks, addressed by `ClkId`. Parents are referenced by name
/// and resolved on every lookup, so clocks can be registered in any order.
#[derive(Default)]
pub struct ClkTree {
    nodes: Vec<Node>,
    names: HashMap<String, ClkId>,
}

impl ClkTree {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_fixed(&mut self, name: &str, rate: u64) -> Result<ClkId> {
        if self.names.contains_key(name) {
            return Err(ClkError::Config(format!("clock {} already registered", name)));
        }

        let id = ClkId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            parents: &[],
            flags: ClkFlags::NONE,
            hw: Hw::Fixed(rate),
            enable_count: 0,
            held_parent: None,
        });
        self.names.insert(name.to_string(), id);

        debug!("fixed clock name={} rate={}", name, rate);
        Ok(id)
    }

    /// Registers a batch of clocks. Everything is validated before the
    /// first clock is added. Critical clocks get enabled, if that fails the
    /// whole batch is withdrawn.
    pub fn register(&mut self, batch: Vec<(ClkDesc, CcuCommon)>) -> Result<Vec<ClkId>> {
        let mut seen = HashSet::new();
        for (desc, _) in &batch {
            desc.validate()?;
            if self.names.contains_key(desc.name) || !seen.insert(desc.name) {
                return Err(ClkError::Config(format!("clock {} already registered", desc.name)));
            }
        }

        let first = self.nodes.len();
        for (desc, common) in batch {
            let id = ClkId(self.nodes.len());
            self.names.insert(desc.name.to_string(), id);
            self.nodes.push(Node {
                name: desc.name.to_string(),
                parents: desc.parents,
                flags: desc.flags,
                hw: Hw::Ccu { clk: desc.clk, common },
                enable_count: 0,
                held_parent: None,
            });
        }
        let ids = (first..self.nodes.len()).map(ClkId).collect::<Vec<_>>();

        let mut enabled = vec![];
        for &id in &ids {
            if !self.nodes[id.0].flags.contains(ClkFlags::CRITICAL) {
                continue;
            }

            if let Err(e) = self.prepare_enable(id) {
                warn!("critical clock {} failed to enable: {}", self.nodes[id.0].name, e);
                for &id in enabled.iter().rev() {
                    self.put(id, true);
                }
                for node in self.nodes.drain(first..) {
                    self.names.remove(&node.name);
                }
                return Err(e);
            }
            enabled.push(id);
        }

        self.adopt_orphans();
        Ok(ids)
    }

    /// Clocks enabled while their parent was not registered yet hold no
    /// reference on it. Take it now if the parent showed up.
    fn adopt_orphans(&mut self) {
        for i in 0..self.nodes.len() {
            let id = ClkId(i);
            let node = &self.nodes[i];
            if node.enable_count == 0 || node.held_parent.is_some() {
                continue;
            }

            if let Some(parent) = self.parent(id) {
                match self.prepare_enable(parent) {
                    Ok(()) => self.nodes[i].held_parent = Some(parent),
                    Err(e) => warn!("{} cannot enable parent {}: {}",
                        self.nodes[i].name, self.nodes[parent.0].name, e),
                }
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Result<ClkId> {
        self.names.get(name).copied()
            .ok_or_else(|| ClkError::NoSuchClock(name.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = ClkId> {
        (0..self.nodes.len()).map(ClkId)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn name(&self, id: ClkId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn flags(&self, id: ClkId) -> ClkFlags {
        self.nodes[id.0].flags
    }

    pub fn kind(&self, id: ClkId) -> &'static str {
        match &self.nodes[id.0].hw {
            Hw::Fixed(_) => "fixed",
            Hw::Ccu { clk, .. } => clk.kind(),
        }
    }

    pub fn enable_count(&self, id: ClkId) -> u32 {
        self.nodes[id.0].enable_count
    }

    pub fn parent_names(&self, id: ClkId) -> Vec<&'static str> {
        self.nodes[id.0].parents.iter().map(|p| p.name()).collect()
    }

    fn resolve(&self, parent: &ParentRef) -> Option<ClkId> {
        let id = *self.names.get(parent.name())?;
        let fixed = matches!(self.nodes[id.0].hw, Hw::Fixed(_));
        match parent {
            ParentRef::Hw(_) if !fixed => Some(id),
            ParentRef::Fw(_) if fixed => Some(id),
            _ => None,
        }
    }

    /// Current parent. Muxes are asked which input they select.
    pub fn parent(&self, id: ClkId) -> Option<ClkId> {
        let node = &self.nodes[id.0];
        let index = match &node.hw {
            Hw::Fixed(_) => return None,
            Hw::Ccu { clk, common } => match clk.mux() {
                Some(_) => clk.get_parent(common).ok()? as usize,
                None => 0,
            },
        };
        node.parents.get(index).and_then(|p| self.resolve(p))
    }

    fn depth(&self, id: ClkId) -> usize {
        let mut depth = 0;
        let mut cur = id;
        while let Some(p) = self.parent(cur) {
            depth += 1;
            cur = p;
            if depth > self.nodes.len() {
                break;
            }
        }
        depth
    }

    pub fn rate(&self, id: ClkId) -> u64 {
        match &self.nodes[id.0].hw {
            Hw::Fixed(rate) => *rate,
            Hw::Ccu { clk, common } => {
                let parent_rate = self.parent(id).map(|p| self.rate(p)).unwrap_or(0);
                if clk.supports(Op::RecalcRate) {
                    clk.recalc_rate(common, parent_rate).unwrap_or(parent_rate)
                } else {
                    parent_rate
                }
            }
        }
    }

    /// Hardware state. Clocks that cannot be gated are always running.
    pub fn is_enabled(&self, id: ClkId) -> bool {
        match &self.nodes[id.0].hw {
            Hw::Fixed(_) => true,
            Hw::Ccu { clk, common } => clk.is_enabled(common).unwrap_or(true),
        }
    }

    pub fn prepare_enable(&mut self, id: ClkId) -> Result<()> {
        if self.nodes[id.0].enable_count == 0 {
            let parent = self.parent(id);
            if let Some(parent) = parent {
                self.prepare_enable(parent)?;
            }

            let result = match &self.nodes[id.0].hw {
                Hw::Ccu { clk, common } if clk.supports(Op::Enable) => clk.enable(common),
                _ => Ok(()),
            };
            if let Err(e) = result {
                if let Some(parent) = parent {
                    self.put(parent, true);
                }
                return Err(e);
            }

            trace!("enabled {}", self.nodes[id.0].name);
            self.nodes[id.0].held_parent = parent;
        }

        self.nodes[id.0].enable_count += 1;
        Ok(())
    }

    /// Drops one enable reference. The last reference of a critical clock
    /// is never dropped.
    pub fn disable(&mut self, id: ClkId) {
        self.put(id, false);
    }

    fn put(&mut self, id: ClkId, force: bool) {
        let node = &mut self.nodes[id.0];
        if node.enable_count == 0 {
            warn!("{} unbalanced disable", node.name);
            return;
        }
        if !force && node.enable_count == 1 && node.flags.contains(ClkFlags::CRITICAL) {
            warn!("{} is critical, leaving it enabled", node.name);
            return;
        }

        node.enable_count -= 1;
        if node.enable_count > 0 {
            return;
        }

        if let Hw::Ccu { clk, common } = &node.hw {
            if clk.supports(Op::Disable) {
                if let Err(e) = clk.disable(common) {
                    warn!("{} disable failed: {}", node.name, e);
                }
                debug!("disabled {}", node.name);
            }
        }

        // The reference on the parent is ours, not the parent's own
        let held = node.held_parent.take();
        if let Some(parent) = held {
            self.put(parent, true);
        }
    }

    fn determine(&self, id: ClkId, rate: u64) -> Result<RateRequest> {
        let node = &self.nodes[id.0];
        let parent = self.parent(id);
        let parent_rate = parent.map(|p| self.rate(p)).unwrap_or(0);
        let keep = |rate| RateRequest { rate, parent, parent_index: None, parent_rate };

        let (clk, common) = match &node.hw {
            Hw::Fixed(rate) => return Ok(keep(*rate)),
            Hw::Ccu { clk, common } => (clk, common),
        };

        if clk.supports(Op::DetermineRate) {
            let candidates = node.parents.iter()
                .map(|p| self.resolve(p))
                .collect::<Vec<_>>();
            let rates = candidates.iter()
                .map(|p| p.map(|p| self.rate(p)))
                .collect::<Vec<_>>();

            let best = clk.determine_rate(common, rate, &rates)?
                .ok_or_else(|| common.invalid_rate(rate))?;

            Ok(RateRequest {
                rate: best.rate,
                parent: candidates[best.parent],
                parent_index: Some(best.parent),
                parent_rate: best.parent_rate,
            })
        } else if clk.supports(Op::RoundRate) {
            Ok(keep(clk.round_rate(common, rate, parent_rate)?))
        } else {
            Ok(keep(self.rate(id)))
        }
    }

    pub fn round_rate(&self, id: ClkId, rate: u64) -> Result<u64> {
        Ok(self.determine(id, rate)?.rate)
    }

    pub fn set_rate(&mut self, id: ClkId, rate: u64) -> Result<()> {
        let req = self.determine(id, rate)?;
        let current = self.rate(id);
        if req.rate == current {
            debug!("{} already at rate={}", self.nodes[id.0].name, current);
            return Ok(());
        }

        let node = &self.nodes[id.0];
        if node.flags.contains(ClkFlags::SET_RATE_GATE) && node.enable_count > 0 {
            return Err(ClkError::Busy(node.name.clone()));
        }

        if let Some(index) = req.parent_index {
            if req.parent != self.parent(id) {
                self.switch_parent(id, index)?;
            }
        }

        let node = &self.nodes[id.0];
        if let Hw::Ccu { clk, common } = &node.hw {
            if clk.supports(Op::SetRate) {
                clk.set_rate(common, req.rate, req.parent_rate)?;
            }
        }

        info!("{} rate={} -> {}", node.name, current, req.rate);
        Ok(())
    }

    pub fn set_parent(&mut self, id: ClkId, parent: &str) -> Result<()> {
        let node = &self.nodes[id.0];
        let index = node.parents.iter().position(|p| p.name() == parent)
            .ok_or_else(|| ClkError::InvalidParent {
                clk: node.name.clone(),
                parent: parent.to_string(),
            })?;

        if self.parent(id).map(|p| self.name(p)) == Some(parent) {
            return Ok(());
        }

        match &node.hw {
            Hw::Ccu { clk, .. } if clk.supports(Op::SetParent) => {}
            _ => return Err(ClkError::NotSupported { clk: node.name.clone(), op: Op::SetParent.name() }),
        }

        self.switch_parent(id, index)?;
        info!("{} parent={}", self.nodes[id.0].name, parent);
        Ok(())
    }

    /// Moves an enabled clock's reference from the old parent to the new one.
    fn switch_parent(&mut self, id: ClkId, index: usize) -> Result<()> {
        let node = &self.nodes[id.0];
        let new_parent = node.parents.get(index)
            .and_then(|p| self.resolve(p))
            .ok_or_else(|| ClkError::InvalidParent {
                clk: node.name.clone(),
                parent: node.parents.get(index).map(|p| p.name()).unwrap_or("?").to_string(),
            })?;

        let enabled = node.enable_count > 0;
        if enabled {
            self.prepare_enable(new_parent)?;
        }

        let result = match &self.nodes[id.0].hw {
            Hw::Ccu { clk, common } => clk.set_parent(common, index as u8),
            Hw::Fixed(_) => Err(ClkError::NotSupported {
                clk: self.nodes[id.0].name.clone(),
                op: Op::SetParent.name(),
            }),
        };

        if let Err(e) = result {
            if enabled {
                self.put(new_parent, true);
            }
            return Err(e);
        }

        if enabled {
            if let Some(old) = self.nodes[id.0].held_parent.replace(new_parent) {
                self.put(old, true);
            }
        }
        Ok(())
    }

    /// Gates clocks left running with no users, leaves first. Returns how
    /// many were gated.
    pub fn disable_unused(&mut self) -> usize {
        let mut order = self.ids().collect::<Vec<_>>();
        order.sort_by_key(|&id| Reverse(self.depth(id)));

        let mut count = 0;
        for id in order {
            let node = &self.nodes[id.0];
            if node.enable_count > 0
                || node.flags.contains(ClkFlags::CRITICAL)
                || node.flags.contains(ClkFlags::IGNORE_UNUSED) {
                continue;
            }

            if let Hw::Ccu { clk, common } = &node.hw {
                if !clk.supports(Op::Disable) || !clk.is_enabled(common).unwrap_or(false) {
                    continue;
                }
                info!("disabling unused clock {}", node.name);
                if let Err(e) = clk.disable(common) {
                    warn!("{} disable failed: {}", node.name, e);
                    continue;
                }
                count += 1;
            }
        }
        count
    }

    /// Listing of the whole tree, children indented under their parent.
    pub fn summary(&self) -> String {
        let mut children: HashMap<Option<ClkId>, Vec<ClkId>> = HashMap::new();
        for id in self.ids() {
            children.entry(self.parent(id)).or_default().push(id);
        }

        let mut out = format!("{:<44} {:>6} {:>9} {:>12}\n", "clock", "enable", "hardware", "rate");
        out.push_str(&"-".repeat(74));
        out.push('\n');

        let mut stack = children.get(&None).cloned().unwrap_or_default();
        stack.reverse();
        let mut depths = vec![0; stack.len()];

        while let (Some(id), Some(depth)) = (stack.pop(), depths.pop()) {
            let hw = match &self.nodes[id.0].hw {
                Hw::Fixed(_) => 'Y',
                Hw::Ccu { clk, common } => match clk.is_enabled(common) {
                    Ok(true) => 'Y',
                    Ok(false) => 'N',
                    Err(_) if !clk.supports(Op::Enable) => 'Y',
                    Err(_) => '?',
                },
            };

            let label = format!("{}{}", " ".repeat(depth * 3), self.nodes[id.0].name);
            out.push_str(&format!("{:<44} {:>6} {:>9} {:>12}\n",
                label, self.nodes[id.0].enable_count, hw, self.rate(id)));

            if let Some(kids) = children.get(&Some(id)) {
                for &kid in kids.iter().rev() {
                    stack.push(kid);
                    depths.push(depth + 1);
                }
            }
        }
        out
    }
}

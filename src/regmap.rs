// SPDX-License-Identifier: GPL-3.0-or-later

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::util::udelay;

/// Last value read when a poll gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTimeout(pub u32);

/// A region of 32-bit registers addressed by byte offset.
///
/// Every access goes to the hardware, nothing is cached. Implementations use
/// interior mutability so that maps can be shared between all the clocks of
/// a region, and the lock region between PLLs.
pub trait RegisterMap {
    fn name(&self) -> &str;
    fn read(&self, offset: u32) -> u32;
    fn write(&self, offset: u32, value: u32);

    fn update_bits(&self, offset: u32, mask: u32, value: u32) {
        let old = self.read(offset);
        let new = (old & !mask) | (value & mask);
        if new != old {
            self.write(offset, new);
        }
    }

    /// Spins until `cond` holds on the register value. Never sleeps, so it
    /// can run where the caller holds a spinlock. The register is sampled
    /// once more after `timeout_us` elapses before giving up.
    fn read_poll_timeout_atomic(
        &self,
        offset: u32,
        cond: &dyn Fn(u32) -> bool,
        delay_us: u64,
        timeout_us: u64,
    ) -> Result<u32, PollTimeout> {
        let deadline = Instant::now() + Duration::from_micros(timeout_us);
        loop {
            let v = self.read(offset);
            if cond(v) {
                return Ok(v);
            }
            if Instant::now() > deadline {
                let v = self.read(offset);
                return if cond(v) { Ok(v) } else { Err(PollTimeout(v)) };
            }
            if delay_us > 0 {
                udelay(delay_us);
            }
        }
    }
}

pub type Regmap = Rc<dyn RegisterMap>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emu::EmuRegisters;

    #[test]
    fn update_bits_keeps_other_bits() {
        let regs = EmuRegisters::new("test");
        regs.write(0x10, 0xf0f0_0000);
        regs.update_bits(0x10, 0x0000_00ff, 0x1234_5678);
        assert_eq!(regs.read(0x10), 0xf0f0_0078);
    }

    #[test]
    fn update_bits_skips_redundant_write() {
        let regs = EmuRegisters::new("test");
        regs.write(0x10, 0x3);
        let writes = regs.stats().writes;
        regs.update_bits(0x10, 0x3, 0x3);
        assert_eq!(regs.stats().writes, writes);
    }

    #[test]
    fn poll_returns_matching_value() {
        let regs = EmuRegisters::new("test");
        regs.write(0x4, 0x80);
        let v = regs.read_poll_timeout_atomic(0x4, &|v| v & 0x80 != 0, 5, 100);
        assert_eq!(v, Ok(0x80));
    }

    #[test]
    fn poll_gives_up_after_bound() {
        let regs = EmuRegisters::new("test");
        let start = Instant::now();
        let v = regs.read_poll_timeout_atomic(0x4, &|v| v & 0x80 != 0, 5, 1000);
        assert_eq!(v, Err(PollTimeout(0)));
        assert!(start.elapsed() >= Duration::from_micros(1000));
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}

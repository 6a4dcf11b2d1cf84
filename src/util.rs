// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::prelude::*;
use std::time::{Duration, Instant};
use anyhow::{Context, Result};

pub fn read_file(path: &str) -> Result<Vec<u8>> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path))?;

    let mut buf = Vec::new();
    file.read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {}", path))?;

    Ok(buf)
}

pub fn read_file_str(path: &str) -> Result<String> {
    let content = read_file(path)?;
    let str = String::from_utf8(content)?;
    Ok(str)
}

/// Bits `lo..=hi` set, like the kernel's GENMASK().
pub const fn genmask(hi: u32, lo: u32) -> u32 {
    (u32::MAX >> (31 - hi)) & (u32::MAX << lo)
}

pub const fn bit(n: u32) -> u32 {
    1 << n
}

/// Mask of a `width` bits field at `shift`.
pub const fn field_mask(shift: u8, width: u8) -> u32 {
    genmask(shift as u32 + width as u32 - 1, shift as u32)
}

pub fn field_get(reg: u32, shift: u8, width: u8) -> u32 {
    (reg & field_mask(shift, width)) >> shift
}

pub fn div_round_up(n: u64, d: u64) -> u64 {
    (n + d - 1) / d
}

/// Busy-waits. Used where the caller may not sleep.
pub fn udelay(us: u64) {
    let deadline = Instant::now() + Duration::from_micros(us);
    while Instant::now() < deadline {
        std::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genmask_matches_kernel_layout() {
        assert_eq!(genmask(7, 0), 0x0000_00ff);
        assert_eq!(genmask(31, 24), 0xff00_0000);
        assert_eq!(genmask(30, 24), 0x7f00_0000);
        assert_eq!(genmask(23, 0), 0x00ff_ffff);
        assert_eq!(genmask(31, 0), u32::MAX);
    }

    #[test]
    fn field_helpers() {
        assert_eq!(field_mask(4, 3), 0b111_0000);
        assert_eq!(field_get(0b1010_0000, 4, 3), 0b010);
        assert_eq!(field_get(0x7f00_0000, 24, 7), 0x7f);
    }

    #[test]
    fn round_up_division() {
        assert_eq!(div_round_up(10, 3), 4);
        assert_eq!(div_round_up(9, 3), 3);
        assert_eq!(div_round_up(2_457_600_000, 7), 351_085_715);
    }
}

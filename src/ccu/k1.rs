// SPDX-License-Identifier: GPL-3.0-or-later

//! SpacemiT K1 clock tables. Table order is the index consumers refer to
//! clocks with, do not reorder.

use super::CcuData;
use crate::clk::ddn::{DdnEntry, DdnInfo};
use crate::clk::pll::PllRateEntry;
use crate::clk::ParentRef::{Fw, Hw};
use crate::clk::{ClkDesc, ClkFlags, ParentRef};
use crate::util::bit;

const NONE: ClkFlags = ClkFlags::NONE;
const CRITICAL: ClkFlags = ClkFlags::CRITICAL;

/// Board oscillators feeding the CCUs, and their usual rates.
pub const OSCILLATORS: &[(&str, u64)] = &[
    ("osc", 32_768),
    ("vctcxo_24m", 24_000_000),
    ("vctcxo_3m", 3_000_000),
    ("vctcxo_1m", 1_000_000),
];

// APBS
pub const APB_SPARE1_REG: u32 = 0x100;
pub const APB_SPARE2_REG: u32 = 0x104;
pub const APB_SPARE3_REG: u32 = 0x108;
pub const APB_SPARE7_REG: u32 = 0x118;
pub const APB_SPARE8_REG: u32 = 0x11c;
pub const APB_SPARE9_REG: u32 = 0x120;
pub const APB_SPARE10_REG: u32 = 0x124;
pub const APB_SPARE11_REG: u32 = 0x128;
pub const APB_SPARE12_REG: u32 = 0x12c;

// MPMU
pub const MPMU_POSR: u32 = 0x10;
pub const POSR_PLL1_LOCK: u32 = bit(27);
pub const POSR_PLL2_LOCK: u32 = bit(28);
pub const POSR_PLL3_LOCK: u32 = bit(29);

const MPMU_WDTPCR: u32 = 0x200;
const MPMU_RIPCCR: u32 = 0x210;
const MPMU_ACGR: u32 = 0x1024;
const MPMU_SUCCR: u32 = 0x14;
const MPMU_ISCCR: u32 = 0x44;
const MPMU_SUCCR_1: u32 = 0x10b0;
const MPMU_APBCSCR: u32 = 0x1050;

// APBC
const APBC_UART1_CLK_RST: u32 = 0x0;
const APBC_UART2_CLK_RST: u32 = 0x4;
const APBC_GPIO_CLK_RST: u32 = 0x8;
const APBC_PWM0_CLK_RST: u32 = 0xc;
const APBC_PWM1_CLK_RST: u32 = 0x10;
const APBC_PWM2_CLK_RST: u32 = 0x14;
const APBC_PWM3_CLK_RST: u32 = 0x18;
const APBC_TWSI8_CLK_RST: u32 = 0x20;
const APBC_UART3_CLK_RST: u32 = 0x24;
const APBC_RTC_CLK_RST: u32 = 0x28;
const APBC_TWSI0_CLK_RST: u32 = 0x2c;
const APBC_TWSI1_CLK_RST: u32 = 0x30;
const APBC_TIMERS1_CLK_RST: u32 = 0x34;
const APBC_TWSI2_CLK_RST: u32 = 0x38;
const APBC_AIB_CLK_RST: u32 = 0x3c;
const APBC_TWSI4_CLK_RST: u32 = 0x40;
const APBC_TIMERS2_CLK_RST: u32 = 0x44;
const APBC_ONEWIRE_CLK_RST: u32 = 0x48;
const APBC_TWSI5_CLK_RST: u32 = 0x4c;
const APBC_DRO_CLK_RST: u32 = 0x58;
const APBC_IR_CLK_RST: u32 = 0x5c;
const APBC_TWSI6_CLK_RST: u32 = 0x60;
const APBC_TWSI7_CLK_RST: u32 = 0x68;
const APBC_TSEN_CLK_RST: u32 = 0x6c;
const APBC_UART4_CLK_RST: u32 = 0x70;
const APBC_UART5_CLK_RST: u32 = 0x74;
const APBC_UART6_CLK_RST: u32 = 0x78;
const APBC_SSP3_CLK_RST: u32 = 0x7c;
const APBC_SSPA0_CLK_RST: u32 = 0x80;
const APBC_SSPA1_CLK_RST: u32 = 0x84;
const APBC_IPC_AP2AUD_CLK_RST: u32 = 0x90;
const APBC_UART7_CLK_RST: u32 = 0x94;
const APBC_UART8_CLK_RST: u32 = 0x98;
const APBC_UART9_CLK_RST: u32 = 0x9c;
const APBC_CAN0_CLK_RST: u32 = 0xa0;
const APBC_PWM4_CLK_RST: u32 = 0xa8;
const APBC_PWM5_CLK_RST: u32 = 0xac;
const APBC_PWM6_CLK_RST: u32 = 0xb0;
const APBC_PWM7_CLK_RST: u32 = 0xb4;
const APBC_PWM8_CLK_RST: u32 = 0xb8;
const APBC_PWM9_CLK_RST: u32 = 0xbc;
const APBC_PWM10_CLK_RST: u32 = 0xc0;
const APBC_PWM11_CLK_RST: u32 = 0xc4;
const APBC_PWM12_CLK_RST: u32 = 0xc8;
const APBC_PWM13_CLK_RST: u32 = 0xcc;
const APBC_PWM14_CLK_RST: u32 = 0xd0;
const APBC_PWM15_CLK_RST: u32 = 0xd4;
const APBC_PWM16_CLK_RST: u32 = 0xd8;
const APBC_PWM17_CLK_RST: u32 = 0xdc;
const APBC_PWM18_CLK_RST: u32 = 0xe0;
const APBC_PWM19_CLK_RST: u32 = 0xe4;

// APMU
const APMU_JPG_CLK_RES_CTRL: u32 = 0x20;
const APMU_CSI_CCIC2_CLK_RES_CTRL: u32 = 0x24;
const APMU_ISP_CLK_RES_CTRL: u32 = 0x38;
const APMU_LCD_CLK_RES_CTRL1: u32 = 0x44;
const APMU_LCD_SPI_CLK_RES_CTRL: u32 = 0x48;
const APMU_LCD_CLK_RES_CTRL2: u32 = 0x4c;
const APMU_CCIC_CLK_RES_CTRL: u32 = 0x50;
const APMU_SDH0_CLK_RES_CTRL: u32 = 0x54;
const APMU_SDH1_CLK_RES_CTRL: u32 = 0x58;
const APMU_USB_CLK_RES_CTRL: u32 = 0x5c;
const APMU_QSPI_CLK_RES_CTRL: u32 = 0x60;
const APMU_DMA_CLK_RES_CTRL: u32 = 0x64;
const APMU_AES_CLK_RES_CTRL: u32 = 0x68;
const APMU_VPU_CLK_RES_CTRL: u32 = 0xa4;
const APMU_GPU_CLK_RES_CTRL: u32 = 0xcc;
const APMU_SDH2_CLK_RES_CTRL: u32 = 0xe0;
const APMU_PMUA_EM_CLK_RES_CTRL: u32 = 0x104;
const APMU_AUDIO_CLK_RES_CTRL: u32 = 0x14c;
const APMU_HDMI_CLK_RES_CTRL: u32 = 0x1b8;
const APMU_CCI550_CLK_CTRL: u32 = 0x300;
const APMU_ACLK_CLK_CTRL: u32 = 0x388;
const APMU_CPU_C0_CLK_CTRL: u32 = 0x38c;
const APMU_CPU_C1_CLK_CTRL: u32 = 0x390;
const APMU_PCIE_CLK_RES_CTRL_0: u32 = 0x3cc;
const APMU_PCIE_CLK_RES_CTRL_1: u32 = 0x3d4;
const APMU_PCIE_CLK_RES_CTRL_2: u32 = 0x3dc;
const APMU_EMAC0_CLK_RES_CTRL: u32 = 0x3e4;
const APMU_EMAC1_CLK_RES_CTRL: u32 = 0x3ec;

/// Frequency-change trigger bits of the APMU, they self-clear once the
/// hardware latched the new setting.
pub const APMU_FC_BITS: &[(u32, u32)] = &[
    (APMU_ACLK_CLK_CTRL, bit(4)),
    (APMU_CCI550_CLK_CTRL, bit(12)),
    (APMU_CPU_C0_CLK_CTRL, bit(12)),
    (APMU_CPU_C1_CLK_CTRL, bit(12)),
    (APMU_JPG_CLK_RES_CTRL, bit(15)),
    (APMU_CSI_CCIC2_CLK_RES_CTRL, bit(15)),
    (APMU_ISP_CLK_RES_CTRL, bit(23) | bit(7)),
    (APMU_LCD_CLK_RES_CTRL1, bit(31) | bit(30) | bit(29) | bit(28)),
    (APMU_LCD_SPI_CLK_RES_CTRL, bit(7)),
    (APMU_CCIC_CLK_RES_CTRL, bit(15)),
    (APMU_SDH0_CLK_RES_CTRL, bit(11)),
    (APMU_SDH1_CLK_RES_CTRL, bit(11)),
    (APMU_SDH2_CLK_RES_CTRL, bit(11)),
    (APMU_QSPI_CLK_RES_CTRL, bit(12)),
    (APMU_VPU_CLK_RES_CTRL, bit(21)),
    (APMU_GPU_CLK_RES_CTRL, bit(15)),
    (APMU_PMUA_EM_CLK_RES_CTRL, bit(11)),
    (APMU_AUDIO_CLK_RES_CTRL, bit(15)),
    (APMU_HDMI_CLK_RES_CTRL, bit(29)),
];

/// (swcr3 offset, lock bit in MPMU_POSR) of every PLL.
pub const PLL_LOCKS: &[(u32, u32)] = &[
    (APB_SPARE3_REG, POSR_PLL1_LOCK),
    (APB_SPARE9_REG, POSR_PLL2_LOCK),
    (APB_SPARE12_REG, POSR_PLL3_LOCK),
];

// pll1 and pll2 feed almost everything, they are not retuned at runtime
pub const PLL1_RATES: [PllRateEntry; 1] = [
    PllRateEntry::new(2_457_600_000, 0x64, 0xdd, 0x50, 0x00, 0x33, 0x0ccccd),
];

pub const PLL2_RATES: [PllRateEntry; 1] = [
    PllRateEntry::new(3_000_000_000, 0x66, 0xdd, 0x50, 0x00, 0x3f, 0xe00000),
];

pub const PLL3_RATES: [PllRateEntry; 3] = [
    PllRateEntry::new(3_000_000_000, 0x66, 0xdd, 0x50, 0x00, 0x3f, 0xe00000),
    PllRateEntry::new(3_200_000_000, 0x67, 0xdd, 0x50, 0x00, 0x43, 0xeaaaab),
    PllRateEntry::new(2_457_600_000, 0x64, 0xdd, 0x50, 0x00, 0x33, 0x0ccccd),
];

pub const UART_DDN_INFO: DdnInfo = DdnInfo {
    factor: 2,
    num_mask: 0x1fff,
    den_mask: 0x1fff,
    num_shift: 16,
    den_shift: 0,
};

const SLOW_UART1_TBL: [DdnEntry; 1] = [DdnEntry { num: 125, den: 24 }];
const SLOW_UART2_TBL: [DdnEntry; 1] = [DdnEntry { num: 6144, den: 960 }];

const PLL1: &[ParentRef] = &[Hw("pll1")];
const PLL2: &[ParentRef] = &[Hw("pll2")];
const PLL3: &[ParentRef] = &[Hw("pll3")];
const PLL1_D8: &[ParentRef] = &[Hw("pll1_d8")];
const PLL1_D8_307P2: &[ParentRef] = &[Hw("pll1_d8_307p2")];
const PLL1_D384_6P4: &[ParentRef] = &[Hw("pll1_d384_6p4")];
const PLL3_D8: &[ParentRef] = &[Hw("pll3_d8")];
const APB_CLK: &[ParentRef] = &[Hw("apb_clk")];
const PMUA_ACLK: &[ParentRef] = &[Hw("pmua_aclk")];
const OSC: &[ParentRef] = &[Fw("osc")];
const VCTCXO_24M: &[ParentRef] = &[Fw("vctcxo_24m")];

const APBS_CLKS: &[ClkDesc] = &[
    ClkDesc::pll("pll1", &PLL1_RATES, APB_SPARE1_REG, APB_SPARE2_REG, APB_SPARE3_REG,
        MPMU_POSR, POSR_PLL1_LOCK, ClkFlags::SET_RATE_GATE),
    ClkDesc::pll("pll2", &PLL2_RATES, APB_SPARE7_REG, APB_SPARE8_REG, APB_SPARE9_REG,
        MPMU_POSR, POSR_PLL2_LOCK, ClkFlags::SET_RATE_GATE),
    ClkDesc::pll("pll3", &PLL3_RATES, APB_SPARE10_REG, APB_SPARE11_REG, APB_SPARE12_REG,
        MPMU_POSR, POSR_PLL3_LOCK, NONE),

    ClkDesc::gate_factor("pll1_d2", PLL1, APB_SPARE2_REG, bit(1), 2, 1, NONE),
    ClkDesc::gate_factor("pll1_d3", PLL1, APB_SPARE2_REG, bit(2), 3, 1, NONE),
    ClkDesc::gate_factor("pll1_d4", PLL1, APB_SPARE2_REG, bit(3), 4, 1, NONE),
    ClkDesc::gate_factor("pll1_d5", PLL1, APB_SPARE2_REG, bit(4), 5, 1, NONE),
    ClkDesc::gate_factor("pll1_d6", PLL1, APB_SPARE2_REG, bit(5), 6, 1, NONE),
    ClkDesc::gate_factor("pll1_d7", PLL1, APB_SPARE2_REG, bit(6), 7, 1, NONE),
    ClkDesc::gate_factor("pll1_d8", PLL1, APB_SPARE2_REG, bit(7), 8, 1, NONE),
    ClkDesc::gate_factor("pll1_d11_223p4", PLL1, APB_SPARE2_REG, bit(15), 11, 1, NONE),
    ClkDesc::gate_factor("pll1_d13_189", PLL1, APB_SPARE2_REG, bit(16), 13, 1, NONE),
    ClkDesc::gate_factor("pll1_d23_106p8", PLL1, APB_SPARE2_REG, bit(20), 23, 1, NONE),
    ClkDesc::gate_factor("pll1_d64_38p4", PLL1, APB_SPARE2_REG, bit(0), 64, 1, NONE),
    ClkDesc::gate_factor("pll1_aud_245p7", PLL1, APB_SPARE2_REG, bit(10), 10, 1, NONE),
    ClkDesc::gate_factor("pll1_aud_24p5", PLL1, APB_SPARE2_REG, bit(11), 100, 1, NONE),

    ClkDesc::gate_factor("pll2_d1", PLL2, APB_SPARE8_REG, bit(0), 1, 1, NONE),
    ClkDesc::gate_factor("pll2_d2", PLL2, APB_SPARE8_REG, bit(1), 2, 1, NONE),
    ClkDesc::gate_factor("pll2_d3", PLL2, APB_SPARE8_REG, bit(2), 3, 1, NONE),
    ClkDesc::gate_factor("pll2_d4", PLL2, APB_SPARE8_REG, bit(3), 4, 1, NONE),
    ClkDesc::gate_factor("pll2_d5", PLL2, APB_SPARE8_REG, bit(4), 5, 1, NONE),
    ClkDesc::gate_factor("pll2_d6", PLL2, APB_SPARE8_REG, bit(5), 6, 1, NONE),
    ClkDesc::gate_factor("pll2_d7", PLL2, APB_SPARE8_REG, bit(6), 7, 1, NONE),
    ClkDesc::gate_factor("pll2_d8", PLL2, APB_SPARE8_REG, bit(7), 8, 1, NONE),

    ClkDesc::gate_factor("pll3_d1", PLL3, APB_SPARE11_REG, bit(0), 1, 1, NONE),
    ClkDesc::gate_factor("pll3_d2", PLL3, APB_SPARE11_REG, bit(1), 2, 1, NONE),
    ClkDesc::gate_factor("pll3_d3", PLL3, APB_SPARE11_REG, bit(2), 3, 1, NONE),
    ClkDesc::gate_factor("pll3_d4", PLL3, APB_SPARE11_REG, bit(3), 4, 1, NONE),
    ClkDesc::gate_factor("pll3_d5", PLL3, APB_SPARE11_REG, bit(4), 5, 1, NONE),
    ClkDesc::gate_factor("pll3_d6", PLL3, APB_SPARE11_REG, bit(5), 6, 1, NONE),
    ClkDesc::gate_factor("pll3_d7", PLL3, APB_SPARE11_REG, bit(6), 7, 1, NONE),
    ClkDesc::gate_factor("pll3_d8", PLL3, APB_SPARE11_REG, bit(7), 8, 1, NONE),

    ClkDesc::factor("pll3_80", PLL3_D8, 5, 1),
    ClkDesc::factor("pll3_40", PLL3_D8, 10, 1),
    ClkDesc::factor("pll3_20", PLL3_D8, 20, 1),
];

const APB_PARENTS: &[ParentRef] = &[
    Hw("pll1_d96_25p6"),
    Hw("pll1_d48_51p2"),
    Hw("pll1_d96_25p6"),
    Hw("pll1_d24_102p4"),
];

const MPMU_CLKS: &[ClkDesc] = &[
    ClkDesc::gate("pll1_d8_307p2", PLL1_D8, MPMU_ACGR, bit(13), NONE),
    ClkDesc::factor("pll1_d32_76p8", PLL1_D8_307P2, 4, 1),
    ClkDesc::factor("pll1_d40_61p44", PLL1_D8_307P2, 5, 1),
    ClkDesc::factor("pll1_d16_153p6", PLL1_D8, 2, 1),
    ClkDesc::gate_factor("pll1_d24_102p4", PLL1_D8, MPMU_ACGR, bit(12), 3, 1, NONE),
    ClkDesc::gate_factor("pll1_d48_51p2", PLL1_D8, MPMU_ACGR, bit(7), 6, 1, NONE),
    ClkDesc::gate_factor("pll1_d48_51p2_ap", PLL1_D8, MPMU_ACGR, bit(11), 6, 1, NONE),
    ClkDesc::gate_factor("pll1_m3d128_57p6", PLL1_D8, MPMU_ACGR, bit(8), 16, 3, NONE),
    ClkDesc::gate_factor("pll1_d96_25p6", PLL1_D8, MPMU_ACGR, bit(4), 12, 1, NONE),
    ClkDesc::gate_factor("pll1_d192_12p8", PLL1_D8, MPMU_ACGR, bit(3), 24, 1, NONE),
    ClkDesc::gate_factor("pll1_d192_12p8_wdt", PLL1_D8, MPMU_ACGR, bit(19), 24, 1, NONE),
    ClkDesc::gate_factor("pll1_d384_6p4", PLL1_D8, MPMU_ACGR, bit(2), 48, 1, NONE),
    ClkDesc::factor("pll1_d768_3p2", PLL1_D384_6P4, 2, 1),
    ClkDesc::factor("pll1_d1536_1p6", PLL1_D384_6P4, 4, 1),
    ClkDesc::factor("pll1_d3072_0p8", PLL1_D384_6P4, 8, 1),
    ClkDesc::factor("pll1_d7_351p08", &[Hw("pll1_d7")], 1, 1),
    ClkDesc::gate("pll1_d6_409p6", &[Hw("pll1_d6")], MPMU_ACGR, bit(0), NONE),
    ClkDesc::gate_factor("pll1_d12_204p8", &[Hw("pll1_d6")], MPMU_ACGR, bit(5), 2, 1, NONE),
    ClkDesc::gate("pll1_d5_491p52", &[Hw("pll1_d5")], MPMU_ACGR, bit(21), NONE),
    ClkDesc::gate_factor("pll1_d10_245p76", &[Hw("pll1_d5")], MPMU_ACGR, bit(18), 2, 1, NONE),
    ClkDesc::gate("pll1_d4_614p4", &[Hw("pll1_d4")], MPMU_ACGR, bit(15), NONE),
    ClkDesc::gate_factor("pll1_d52_47p26", &[Hw("pll1_d4")], MPMU_ACGR, bit(10), 13, 1, NONE),
    ClkDesc::gate_factor("pll1_d78_31p5", &[Hw("pll1_d4")], MPMU_ACGR, bit(6), 39, 2, NONE),
    ClkDesc::gate("pll1_d3_819p2", &[Hw("pll1_d3")], MPMU_ACGR, bit(14), NONE),
    ClkDesc::gate("pll1_d2_1228p8", &[Hw("pll1_d2")], MPMU_ACGR, bit(16), NONE),

    ClkDesc::gate("slow_uart", OSC, MPMU_ACGR, bit(1), ClkFlags::IGNORE_UNUSED),
    ClkDesc::ddn("slow_uart1_14p74", &[Hw("pll1_d16_153p6")], &UART_DDN_INFO, &SLOW_UART1_TBL,
        MPMU_SUCCR, NONE),
    ClkDesc::ddn("slow_uart2_48", &[Hw("pll1_d4_614p4")], &UART_DDN_INFO, &SLOW_UART2_TBL,
        MPMU_SUCCR_1, NONE),

    ClkDesc::gate("wdt_clk", &[Hw("pll1_d96_25p6")], MPMU_WDTPCR, bit(1), NONE),
    ClkDesc::gate("ripc_clk", VCTCXO_24M, MPMU_RIPCCR, 0x3, NONE),
    ClkDesc::gate_factor("i2s_sysclk", &[Hw("pll1_d16_153p6")], MPMU_ISCCR, bit(31), 50, 1, NONE),
    ClkDesc::gate_factor("i2s_bclk", &[Hw("i2s_sysclk")], MPMU_ISCCR, bit(29), 1, 1, NONE),
    ClkDesc::mux("apb_clk", APB_PARENTS, MPMU_APBCSCR, 0, 2, NONE),
    ClkDesc::gate("wdt_bus_clk", APB_CLK, MPMU_WDTPCR, bit(2), NONE),
];

const UART_CLK_PARENTS: &[ParentRef] = &[
    Hw("pll1_m3d128_57p6"),
    Hw("slow_uart1_14p74"),
    Hw("slow_uart2_48"),
];

const PWM_PARENTS: &[ParentRef] = &[Hw("pll1_d192_12p8"), Fw("osc")];

const SSP_PARENTS: &[ParentRef] = &[
    Hw("pll1_d384_6p4"),
    Hw("pll1_d192_12p8"),
    Hw("pll1_d96_25p6"),
    Hw("pll1_d48_51p2"),
    Hw("pll1_d768_3p2"),
    Hw("pll1_d1536_1p6"),
    Hw("pll1_d3072_0p8"),
];

const TWSI_PARENTS: &[ParentRef] = &[
    Hw("pll1_d78_31p5"),
    Hw("pll1_d48_51p2"),
    Hw("pll1_d40_61p44"),
];

const TIMER_PARENTS: &[ParentRef] = &[
    Hw("pll1_d192_12p8"),
    Fw("osc"),
    Hw("pll1_d384_6p4"),
    Fw("vctcxo_3m"),
    Fw("vctcxo_1m"),
];

const SSPA_PARENTS: &[ParentRef] = &[
    Hw("pll1_d384_6p4"),
    Hw("pll1_d192_12p8"),
    Hw("pll1_d96_25p6"),
    Hw("pll1_d48_51p2"),
    Hw("pll1_d768_3p2"),
    Hw("pll1_d1536_1p6"),
    Hw("pll1_d3072_0p8"),
    Hw("i2s_bclk"),
];

const CAN_PARENTS: &[ParentRef] = &[Hw("pll3_20"), Hw("pll3_40"), Hw("pll3_80")];

// Function clock select at [6:4], enable at bit 1. Bus clock enable at bit 0.
const fn func_mux(name: &'static str, parents: &'static [ParentRef], reg: u32, flags: ClkFlags) -> ClkDesc {
    ClkDesc::mux_gate(name, parents, reg, 4, 3, bit(1), flags)
}

const fn bus(name: &'static str, reg: u32, flags: ClkFlags) -> ClkDesc {
    ClkDesc::gate(name, APB_CLK, reg, bit(0), flags)
}

const APBC_CLKS: &[ClkDesc] = &[
    func_mux("uart0_clk", UART_CLK_PARENTS, APBC_UART1_CLK_RST, CRITICAL),
    func_mux("uart2_clk", UART_CLK_PARENTS, APBC_UART2_CLK_RST, NONE),
    func_mux("uart3_clk", UART_CLK_PARENTS, APBC_UART3_CLK_RST, NONE),
    func_mux("uart4_clk", UART_CLK_PARENTS, APBC_UART4_CLK_RST, NONE),
    func_mux("uart5_clk", UART_CLK_PARENTS, APBC_UART5_CLK_RST, NONE),
    func_mux("uart6_clk", UART_CLK_PARENTS, APBC_UART6_CLK_RST, NONE),
    func_mux("uart7_clk", UART_CLK_PARENTS, APBC_UART7_CLK_RST, NONE),
    func_mux("uart8_clk", UART_CLK_PARENTS, APBC_UART8_CLK_RST, NONE),
    func_mux("uart9_clk", UART_CLK_PARENTS, APBC_UART9_CLK_RST, NONE),
    ClkDesc::gate("gpio_clk", VCTCXO_24M, APBC_GPIO_CLK_RST, bit(1), NONE),
    func_mux("pwm0_clk", PWM_PARENTS, APBC_PWM0_CLK_RST, NONE),
    func_mux("pwm1_clk", PWM_PARENTS, APBC_PWM1_CLK_RST, NONE),
    func_mux("pwm2_clk", PWM_PARENTS, APBC_PWM2_CLK_RST, NONE),
    func_mux("pwm3_clk", PWM_PARENTS, APBC_PWM3_CLK_RST, NONE),
    func_mux("pwm4_clk", PWM_PARENTS, APBC_PWM4_CLK_RST, NONE),
    func_mux("pwm5_clk", PWM_PARENTS, APBC_PWM5_CLK_RST, NONE),
    func_mux("pwm6_clk", PWM_PARENTS, APBC_PWM6_CLK_RST, NONE),
    func_mux("pwm7_clk", PWM_PARENTS, APBC_PWM7_CLK_RST, NONE),
    func_mux("pwm8_clk", PWM_PARENTS, APBC_PWM8_CLK_RST, NONE),
    func_mux("pwm9_clk", PWM_PARENTS, APBC_PWM9_CLK_RST, NONE),
    func_mux("pwm10_clk", PWM_PARENTS, APBC_PWM10_CLK_RST, NONE),
    func_mux("pwm11_clk", PWM_PARENTS, APBC_PWM11_CLK_RST, NONE),
    func_mux("pwm12_clk", PWM_PARENTS, APBC_PWM12_CLK_RST, NONE),
    func_mux("pwm13_clk", PWM_PARENTS, APBC_PWM13_CLK_RST, NONE),
    func_mux("pwm14_clk", PWM_PARENTS, APBC_PWM14_CLK_RST, NONE),
    func_mux("pwm15_clk", PWM_PARENTS, APBC_PWM15_CLK_RST, NONE),
    func_mux("pwm16_clk", PWM_PARENTS, APBC_PWM16_CLK_RST, NONE),
    func_mux("pwm17_clk", PWM_PARENTS, APBC_PWM17_CLK_RST, NONE),
    func_mux("pwm18_clk", PWM_PARENTS, APBC_PWM18_CLK_RST, NONE),
    func_mux("pwm19_clk", PWM_PARENTS, APBC_PWM19_CLK_RST, NONE),
    func_mux("ssp3_clk", SSP_PARENTS, APBC_SSP3_CLK_RST, NONE),
    ClkDesc::gate("rtc_clk", OSC, APBC_RTC_CLK_RST, 0x82, NONE),
    func_mux("twsi0_clk", TWSI_PARENTS, APBC_TWSI0_CLK_RST, NONE),
    func_mux("twsi1_clk", TWSI_PARENTS, APBC_TWSI1_CLK_RST, NONE),
    func_mux("twsi2_clk", TWSI_PARENTS, APBC_TWSI2_CLK_RST, NONE),
    func_mux("twsi4_clk", TWSI_PARENTS, APBC_TWSI4_CLK_RST, NONE),
    func_mux("twsi5_clk", TWSI_PARENTS, APBC_TWSI5_CLK_RST, NONE),
    func_mux("twsi6_clk", TWSI_PARENTS, APBC_TWSI6_CLK_RST, NONE),
    func_mux("twsi7_clk", TWSI_PARENTS, APBC_TWSI7_CLK_RST, NONE),
    func_mux("twsi8_clk", TWSI_PARENTS, APBC_TWSI8_CLK_RST, NONE),
    ClkDesc::mux_gate("timers1_clk", TIMER_PARENTS, APBC_TIMERS1_CLK_RST, 4, 3, 0x3, NONE),
    ClkDesc::mux_gate("timers2_clk", TIMER_PARENTS, APBC_TIMERS2_CLK_RST, 4, 3, 0x3, NONE),
    ClkDesc::gate("aib_clk", VCTCXO_24M, APBC_AIB_CLK_RST, bit(1), NONE),
    ClkDesc::gate("onewire_clk", VCTCXO_24M, APBC_ONEWIRE_CLK_RST, bit(1), NONE),
    func_mux("sspa0_clk", SSPA_PARENTS, APBC_SSPA0_CLK_RST, NONE),
    func_mux("sspa1_clk", SSPA_PARENTS, APBC_SSPA1_CLK_RST, NONE),
    ClkDesc::gate("dro_clk", APB_CLK, APBC_DRO_CLK_RST, bit(1), NONE),
    ClkDesc::gate("ir_clk", APB_CLK, APBC_IR_CLK_RST, bit(1), NONE),
    ClkDesc::gate("tsen_clk", APB_CLK, APBC_TSEN_CLK_RST, bit(1), NONE),
    ClkDesc::gate("ipc_ap2aud_clk", APB_CLK, APBC_IPC_AP2AUD_CLK_RST, bit(1), NONE),
    func_mux("can0_clk", CAN_PARENTS, APBC_CAN0_CLK_RST, NONE),
    ClkDesc::gate("can0_bus_clk", VCTCXO_24M, APBC_CAN0_CLK_RST, bit(0), NONE),

    bus("uart0_bus_clk", APBC_UART1_CLK_RST, CRITICAL),
    bus("uart2_bus_clk", APBC_UART2_CLK_RST, NONE),
    bus("uart3_bus_clk", APBC_UART3_CLK_RST, NONE),
    bus("uart4_bus_clk", APBC_UART4_CLK_RST, NONE),
    bus("uart5_bus_clk", APBC_UART5_CLK_RST, NONE),
    bus("uart6_bus_clk", APBC_UART6_CLK_RST, NONE),
    bus("uart7_bus_clk", APBC_UART7_CLK_RST, NONE),
    bus("uart8_bus_clk", APBC_UART8_CLK_RST, NONE),
    bus("uart9_bus_clk", APBC_UART9_CLK_RST, NONE),
    bus("gpio_bus_clk", APBC_GPIO_CLK_RST, NONE),
    bus("pwm0_bus_clk", APBC_PWM0_CLK_RST, NONE),
    bus("pwm1_bus_clk", APBC_PWM1_CLK_RST, NONE),
    bus("pwm2_bus_clk", APBC_PWM2_CLK_RST, NONE),
    bus("pwm3_bus_clk", APBC_PWM3_CLK_RST, NONE),
    bus("pwm4_bus_clk", APBC_PWM4_CLK_RST, NONE),
    bus("pwm5_bus_clk", APBC_PWM5_CLK_RST, NONE),
    bus("pwm6_bus_clk", APBC_PWM6_CLK_RST, NONE),
    bus("pwm7_bus_clk", APBC_PWM7_CLK_RST, NONE),
    bus("pwm8_bus_clk", APBC_PWM8_CLK_RST, NONE),
    bus("pwm9_bus_clk", APBC_PWM9_CLK_RST, NONE),
    bus("pwm10_bus_clk", APBC_PWM10_CLK_RST, NONE),
    bus("pwm11_bus_clk", APBC_PWM11_CLK_RST, NONE),
    bus("pwm12_bus_clk", APBC_PWM12_CLK_RST, NONE),
    bus("pwm13_bus_clk", APBC_PWM13_CLK_RST, NONE),
    bus("pwm14_bus_clk", APBC_PWM14_CLK_RST, NONE),
    bus("pwm15_bus_clk", APBC_PWM15_CLK_RST, NONE),
    bus("pwm16_bus_clk", APBC_PWM16_CLK_RST, NONE),
    bus("pwm17_bus_clk", APBC_PWM17_CLK_RST, NONE),
    bus("pwm18_bus_clk", APBC_PWM18_CLK_RST, NONE),
    bus("pwm19_bus_clk", APBC_PWM19_CLK_RST, NONE),
    bus("ssp3_bus_clk", APBC_SSP3_CLK_RST, NONE),
    bus("rtc_bus_clk", APBC_RTC_CLK_RST, NONE),
    bus("twsi0_bus_clk", APBC_TWSI0_CLK_RST, NONE),
    bus("twsi1_bus_clk", APBC_TWSI1_CLK_RST, NONE),
    bus("twsi2_bus_clk", APBC_TWSI2_CLK_RST, NONE),
    bus("twsi4_bus_clk", APBC_TWSI4_CLK_RST, NONE),
    bus("twsi5_bus_clk", APBC_TWSI5_CLK_RST, NONE),
    bus("twsi6_bus_clk", APBC_TWSI6_CLK_RST, NONE),
    bus("twsi7_bus_clk", APBC_TWSI7_CLK_RST, NONE),
    bus("twsi8_bus_clk", APBC_TWSI8_CLK_RST, NONE),
    bus("timers1_bus_clk", APBC_TIMERS1_CLK_RST, NONE),
    bus("timers2_bus_clk", APBC_TIMERS2_CLK_RST, NONE),
    bus("aib_bus_clk", APBC_AIB_CLK_RST, NONE),
    bus("onewire_bus_clk", APBC_ONEWIRE_CLK_RST, NONE),
    bus("sspa0_bus_clk", APBC_SSPA0_CLK_RST, NONE),
    bus("sspa1_bus_clk", APBC_SSPA1_CLK_RST, NONE),
    bus("tsen_bus_clk", APBC_TSEN_CLK_RST, NONE),
    bus("ipc_ap2aud_bus_clk", APBC_IPC_AP2AUD_CLK_RST, NONE),
];

const PMUA_ACLK_PARENTS: &[ParentRef] = &[Hw("pll1_d10_245p76"), Hw("pll1_d8_307p2")];

const CCI550_PARENTS: &[ParentRef] = &[
    Hw("pll1_d5_491p52"),
    Hw("pll1_d4_614p4"),
    Hw("pll1_d3_819p2"),
    Hw("pll2_d3"),
];

const CPU_HI_PARENTS: &[ParentRef] = &[Hw("pll3_d2"), Hw("pll3_d1")];

const CPU_C0_PARENTS: &[ParentRef] = &[
    Hw("pll1_d4_614p4"),
    Hw("pll1_d3_819p2"),
    Hw("pll1_d6_409p6"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d2_1228p8"),
    Hw("pll3_d3"),
    Hw("pll2_d3"),
    Hw("cpu_c0_hi_clk"),
];

const CPU_C1_PARENTS: &[ParentRef] = &[
    Hw("pll1_d4_614p4"),
    Hw("pll1_d3_819p2"),
    Hw("pll1_d6_409p6"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d2_1228p8"),
    Hw("pll3_d3"),
    Hw("pll2_d3"),
    Hw("cpu_c1_hi_clk"),
];

const JPG_PARENTS: &[ParentRef] = &[
    Hw("pll1_d4_614p4"),
    Hw("pll1_d6_409p6"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d3_819p2"),
    Hw("pll1_d2_1228p8"),
    Hw("pll2_d4"),
    Hw("pll2_d3"),
];

const CCIC_PHY_PARENTS: &[ParentRef] = &[Hw("pll1_d24_102p4"), Hw("pll1_d48_51p2_ap")];

const CSI_PARENTS: &[ParentRef] = &[
    Hw("pll1_d5_491p52"),
    Hw("pll1_d6_409p6"),
    Hw("pll1_d4_614p4"),
    Hw("pll1_d3_819p2"),
    Hw("pll2_d2"),
    Hw("pll2_d3"),
    Hw("pll2_d4"),
    Hw("pll1_d2_1228p8"),
];

const CAMM_PARENTS: &[ParentRef] = &[
    Hw("pll1_d8_307p2"),
    Hw("pll2_d5"),
    Hw("pll1_d6_409p6"),
    Fw("vctcxo_24m"),
];

const ISP_CPP_PARENTS: &[ParentRef] = &[Hw("pll1_d8_307p2"), Hw("pll1_d6_409p6")];

const ISP_BUS_PARENTS: &[ParentRef] = &[
    Hw("pll1_d6_409p6"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d8_307p2"),
    Hw("pll1_d10_245p76"),
];

// isp, dpu_mclk and hdmi_mclk share this list
const ISP_PARENTS: &[ParentRef] = &[
    Hw("pll1_d6_409p6"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d4_614p4"),
    Hw("pll1_d8_307p2"),
];

const DPU_ESC_PARENTS: &[ParentRef] = &[
    Hw("pll1_d48_51p2_ap"),
    Hw("pll1_d52_47p26"),
    Hw("pll1_d96_25p6"),
    Hw("pll1_d32_76p8"),
];

const DPU_BIT_PARENTS: &[ParentRef] = &[
    Hw("pll1_d3_819p2"),
    Hw("pll2_d2"),
    Hw("pll2_d3"),
    Hw("pll1_d2_1228p8"),
    Hw("pll2_d4"),
    Hw("pll2_d5"),
    Hw("pll2_d8"),
    Hw("pll2_d8"),
];

const DPU_PX_PARENTS: &[ParentRef] = &[
    Hw("pll1_d6_409p6"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d4_614p4"),
    Hw("pll1_d8_307p2"),
    Hw("pll2_d7"),
    Hw("pll2_d8"),
];

const DPU_SPI_PARENTS: &[ParentRef] = &[
    Hw("pll1_d8_307p2"),
    Hw("pll1_d6_409p6"),
    Hw("pll1_d10_245p76"),
    Hw("pll1_d11_223p4"),
    Hw("pll1_d13_189"),
    Hw("pll1_d23_106p8"),
    Hw("pll2_d3"),
    Hw("pll2_d5"),
];

const V2D_PARENTS: &[ParentRef] = &[
    Hw("pll1_d5_491p52"),
    Hw("pll1_d6_409p6"),
    Hw("pll1_d8_307p2"),
    Hw("pll1_d4_614p4"),
];

// The select field is 2 bits wide, only the first four inputs are reachable
const CCIC_4X_PARENTS: &[ParentRef] = &[
    Hw("pll1_d5_491p52"),
    Hw("pll1_d6_409p6"),
    Hw("pll1_d4_614p4"),
    Hw("pll1_d3_819p2"),
];

const SDH01_PARENTS: &[ParentRef] = &[
    Hw("pll1_d6_409p6"),
    Hw("pll1_d4_614p4"),
    Hw("pll2_d8"),
    Hw("pll2_d5"),
    Hw("pll1_d11_223p4"),
    Hw("pll1_d13_189"),
    Hw("pll1_d23_106p8"),
];

const SDH2_PARENTS: &[ParentRef] = &[
    Hw("pll1_d6_409p6"),
    Hw("pll1_d4_614p4"),
    Hw("pll2_d8"),
    Hw("pll1_d3_819p2"),
    Hw("pll1_d11_223p4"),
    Hw("pll1_d13_189"),
    Hw("pll1_d23_106p8"),
];

const QSPI_PARENTS: &[ParentRef] = &[
    Hw("pll1_d6_409p6"),
    Hw("pll2_d8"),
    Hw("pll1_d8_307p2"),
    Hw("pll1_d10_245p76"),
    Hw("pll1_d11_223p4"),
    Hw("pll1_d23_106p8"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d13_189"),
];

const AES_PARENTS: &[ParentRef] = &[Hw("pll1_d12_204p8"), Hw("pll1_d24_102p4")];

// vpu and gpu
const MEDIA_PARENTS: &[ParentRef] = &[
    Hw("pll1_d4_614p4"),
    Hw("pll1_d5_491p52"),
    Hw("pll1_d3_819p2"),
    Hw("pll1_d6_409p6"),
    Hw("pll3_d6"),
    Hw("pll2_d3"),
    Hw("pll2_d4"),
    Hw("pll2_d5"),
];

const EMMC_PARENTS: &[ParentRef] = &[
    Hw("pll1_d6_409p6"),
    Hw("pll1_d4_614p4"),
    Hw("pll1_d52_47p26"),
    Hw("pll1_d3_819p2"),
];

const AUDIO_PARENTS: &[ParentRef] = &[
    Hw("pll1_aud_245p7"),
    Hw("pll1_d8_307p2"),
    Hw("pll1_d6_409p6"),
];

const APMU_CLKS: &[ClkDesc] = &[
    ClkDesc::div_fc_mux("cci550_clk", CCI550_PARENTS, APMU_CCI550_CLK_CTRL,
        8, 3, bit(12), 0, 2, CRITICAL),
    ClkDesc::mux("cpu_c0_hi_clk", CPU_HI_PARENTS, APMU_CPU_C0_CLK_CTRL, 13, 1, NONE),
    ClkDesc::mux_fc("cpu_c0_core_clk", CPU_C0_PARENTS, APMU_CPU_C0_CLK_CTRL, bit(12), 0, 3, CRITICAL),
    ClkDesc::div("cpu_c0_ace_clk", &[Hw("cpu_c0_core_clk")], APMU_CPU_C0_CLK_CTRL, 6, 3, CRITICAL),
    ClkDesc::div("cpu_c0_tcm_clk", &[Hw("cpu_c0_core_clk")], APMU_CPU_C0_CLK_CTRL, 9, 3, CRITICAL),
    ClkDesc::mux("cpu_c1_hi_clk", CPU_HI_PARENTS, APMU_CPU_C1_CLK_CTRL, 13, 1, CRITICAL),
    ClkDesc::mux_fc("cpu_c1_core_clk", CPU_C1_PARENTS, APMU_CPU_C1_CLK_CTRL, bit(12), 0, 3, CRITICAL),
    ClkDesc::div("cpu_c1_ace_clk", &[Hw("cpu_c1_core_clk")], APMU_CPU_C1_CLK_CTRL, 6, 3, CRITICAL),

    ClkDesc::div_fc_mux_gate("ccic_4x_clk", CCIC_4X_PARENTS, APMU_CCIC_CLK_RES_CTRL,
        18, 3, bit(15), 23, 2, bit(4), NONE),
    ClkDesc::mux_gate("ccic1phy_clk", CCIC_PHY_PARENTS, APMU_CCIC_CLK_RES_CTRL, 7, 1, bit(5), NONE),
    ClkDesc::gate("sdh_axi_aclk", PMUA_ACLK, APMU_SDH0_CLK_RES_CTRL, bit(3), NONE),
    ClkDesc::div_fc_mux_gate("sdh0_clk", SDH01_PARENTS, APMU_SDH0_CLK_RES_CTRL,
        8, 3, bit(11), 5, 3, bit(4), NONE),
    ClkDesc::div_fc_mux_gate("sdh1_clk", SDH01_PARENTS, APMU_SDH1_CLK_RES_CTRL,
        8, 3, bit(11), 5, 3, bit(4), NONE),
    ClkDesc::div_fc_mux_gate("sdh2_clk", SDH2_PARENTS, APMU_SDH2_CLK_RES_CTRL,
        8, 3, bit(11), 5, 3, bit(4), NONE),
    ClkDesc::gate("usb_p1_aclk", PMUA_ACLK, APMU_USB_CLK_RES_CTRL, bit(5), NONE),
    ClkDesc::gate("usb_axi_clk", PMUA_ACLK, APMU_USB_CLK_RES_CTRL, bit(1), NONE),
    ClkDesc::gate("usb30_clk", PMUA_ACLK, APMU_USB_CLK_RES_CTRL, bit(8), NONE),
    ClkDesc::div_fc_mux_gate("qspi_clk", QSPI_PARENTS, APMU_QSPI_CLK_RES_CTRL,
        9, 3, bit(12), 6, 3, bit(4), NONE),
    ClkDesc::gate("qspi_bus_clk", PMUA_ACLK, APMU_QSPI_CLK_RES_CTRL, bit(3), NONE),
    ClkDesc::gate("dma_clk", PMUA_ACLK, APMU_DMA_CLK_RES_CTRL, bit(3), NONE),
    ClkDesc::mux_gate("aes_clk", AES_PARENTS, APMU_AES_CLK_RES_CTRL, 6, 1, bit(5), NONE),
    ClkDesc::div_fc_mux_gate("vpu_clk", MEDIA_PARENTS, APMU_VPU_CLK_RES_CTRL,
        13, 3, bit(21), 10, 3, bit(3), NONE),
    ClkDesc::div_fc_mux_gate("gpu_clk", MEDIA_PARENTS, APMU_GPU_CLK_RES_CTRL,
        12, 3, bit(15), 18, 3, bit(4), NONE),
    ClkDesc::div_fc_mux_gate("emmc_clk", EMMC_PARENTS, APMU_PMUA_EM_CLK_RES_CTRL,
        8, 3, bit(11), 6, 2, bit(4), NONE),
    ClkDesc::div_gate("emmc_x_clk", &[Hw("pll1_d2_1228p8")], APMU_PMUA_EM_CLK_RES_CTRL,
        12, 3, bit(15), NONE),
    ClkDesc::div_fc_mux_gate("audio_clk", AUDIO_PARENTS, APMU_AUDIO_CLK_RES_CTRL,
        4, 3, bit(15), 7, 3, bit(12), NONE),
    ClkDesc::div_fc_mux_gate("hdmi_mclk", ISP_PARENTS, APMU_HDMI_CLK_RES_CTRL,
        1, 4, bit(29), 5, 3, bit(0), NONE),
    ClkDesc::div_fc_mux("pmua_aclk", PMUA_ACLK_PARENTS, APMU_ACLK_CLK_CTRL,
        1, 2, bit(4), 0, 1, NONE),
    ClkDesc::gate("pcie0_clk", PMUA_ACLK, APMU_PCIE_CLK_RES_CTRL_0, 0x7, NONE),
    ClkDesc::gate("pcie1_clk", PMUA_ACLK, APMU_PCIE_CLK_RES_CTRL_1, 0x7, NONE),
    ClkDesc::gate("pcie2_clk", PMUA_ACLK, APMU_PCIE_CLK_RES_CTRL_2, 0x7, NONE),
    ClkDesc::gate("emac0_bus_clk", PMUA_ACLK, APMU_EMAC0_CLK_RES_CTRL, bit(0), NONE),
    ClkDesc::gate("emac0_ptp_clk", &[Hw("pll2_d6")], APMU_EMAC0_CLK_RES_CTRL, bit(15), NONE),
    ClkDesc::gate("emac1_bus_clk", PMUA_ACLK, APMU_EMAC1_CLK_RES_CTRL, bit(0), NONE),
    ClkDesc::gate("emac1_ptp_clk", &[Hw("pll2_d6")], APMU_EMAC1_CLK_RES_CTRL, bit(15), NONE),

    ClkDesc::div_fc_mux_gate("jpg_clk", JPG_PARENTS, APMU_JPG_CLK_RES_CTRL,
        5, 3, bit(15), 2, 3, bit(1), NONE),
    ClkDesc::mux_gate("ccic2phy_clk", CCIC_PHY_PARENTS, APMU_CSI_CCIC2_CLK_RES_CTRL, 7, 1, bit(5), NONE),
    ClkDesc::mux_gate("ccic3phy_clk", CCIC_PHY_PARENTS, APMU_CSI_CCIC2_CLK_RES_CTRL, 31, 1, bit(30), NONE),
    ClkDesc::div_fc_mux_gate("csi_clk", CSI_PARENTS, APMU_CSI_CCIC2_CLK_RES_CTRL,
        20, 3, bit(15), 16, 3, bit(4), NONE),
    ClkDesc::div_mux_gate("camm0_clk", CAMM_PARENTS, APMU_CSI_CCIC2_CLK_RES_CTRL,
        23, 4, 8, 2, bit(28), NONE),
    ClkDesc::div_mux_gate("camm1_clk", CAMM_PARENTS, APMU_CSI_CCIC2_CLK_RES_CTRL,
        23, 4, 8, 2, bit(6), NONE),
    ClkDesc::div_mux_gate("camm2_clk", CAMM_PARENTS, APMU_CSI_CCIC2_CLK_RES_CTRL,
        23, 4, 8, 2, bit(3), NONE),
    ClkDesc::div_mux_gate("isp_cpp_clk", ISP_CPP_PARENTS, APMU_ISP_CLK_RES_CTRL,
        24, 2, 26, 1, bit(28), NONE),
    ClkDesc::div_fc_mux_gate("isp_bus_clk", ISP_BUS_PARENTS, APMU_ISP_CLK_RES_CTRL,
        18, 3, bit(23), 21, 2, bit(17), NONE),
    ClkDesc::div_fc_mux_gate("isp_clk", ISP_PARENTS, APMU_ISP_CLK_RES_CTRL,
        4, 3, bit(7), 8, 2, bit(1), NONE),

    ClkDesc::div2_fc_mux_gate("dpu_mclk", ISP_PARENTS, APMU_LCD_CLK_RES_CTRL2, APMU_LCD_CLK_RES_CTRL1,
        1, 4, bit(29), 5, 3, bit(0), NONE),
    ClkDesc::mux_gate("dpu_esc_clk", DPU_ESC_PARENTS, APMU_LCD_CLK_RES_CTRL1, 0, 2, bit(2), NONE),
    ClkDesc::div_fc_mux_gate("dpu_bit_clk", DPU_BIT_PARENTS, APMU_LCD_CLK_RES_CTRL1,
        17, 3, bit(31), 20, 3, bit(16), NONE),
    ClkDesc::div2_fc_mux_gate("dpu_pxclk", DPU_PX_PARENTS, APMU_LCD_CLK_RES_CTRL2, APMU_LCD_CLK_RES_CTRL1,
        17, 4, bit(30), 21, 3, bit(16), NONE),
    ClkDesc::gate("dpu_hclk", PMUA_ACLK, APMU_LCD_CLK_RES_CTRL1, bit(5), NONE),
    ClkDesc::div_fc_mux_gate("dpu_spi_clk", DPU_SPI_PARENTS, APMU_LCD_SPI_CLK_RES_CTRL,
        8, 3, bit(7), 12, 3, bit(1), NONE),
    ClkDesc::gate("dpu_spi_hbus_clk", PMUA_ACLK, APMU_LCD_SPI_CLK_RES_CTRL, bit(3), NONE),
    ClkDesc::gate("dpu_spi_bus_clk", PMUA_ACLK, APMU_LCD_SPI_CLK_RES_CTRL, bit(5), NONE),
    ClkDesc::gate("dpu_spi_aclk", PMUA_ACLK, APMU_LCD_SPI_CLK_RES_CTRL, bit(6), NONE),
    ClkDesc::div_fc_mux_gate("v2d_clk", V2D_PARENTS, APMU_LCD_CLK_RES_CTRL1,
        9, 3, bit(28), 12, 2, bit(8), NONE),
    ClkDesc::gate("emmc_bus_clk", PMUA_ACLK, APMU_PMUA_EM_CLK_RES_CTRL, bit(3), NONE),
];

pub static APBS_DATA: CcuData = CcuData { clks: APBS_CLKS, need_pll_lock: true };
pub static MPMU_DATA: CcuData = CcuData { clks: MPMU_CLKS, need_pll_lock: false };
pub static APBC_DATA: CcuData = CcuData { clks: APBC_CLKS, need_pll_lock: false };
pub static APMU_DATA: CcuData = CcuData { clks: APMU_CLKS, need_pll_lock: false };

// SPDX-License-Identifier: GPL-3.0-or-later

mod ccu;
mod clk;
mod config;
mod emu;
mod error;
mod regmap;
mod system;
mod util;

use std::io::prelude::*;
use clap::{AppSettings, Parser, Subcommand};
use clap_num::si_number;
use anyhow::Result;
use env_logger::fmt::Color;
use log::LevelFilter;

use ccu::Region;
use config::Config;
use regmap::RegisterMap;
use system::System;

#[macro_use]
extern crate log;

/// Inspect and drive the SpacemiT K1 clock controllers
#[derive(Parser, Debug)]
#[clap(
    global_setting(AppSettings::DeriveDisplayOrder)
)]
pub struct Args {
    /// Config file
    config: String,

    /// Verbosity. Can be repeated
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the clock tree (default)
    Summary,
    /// Print the rate of a clock. Clocks are named, or given as region:index
    Rate { clock: String },
    /// Change the rate of a clock. Accepts SI suffixes, like 204.8M
    SetRate {
        clock: String,
        #[clap(parse(try_from_str = si_number))]
        rate: u64,
    },
    /// Switch a clock to another parent
    SetParent { clock: String, parent: String },
    /// Take an enable reference on a clock and its parents
    Enable { clock: String },
    /// Drop an enable reference taken by enable
    Disable { clock: String },
    /// Gate every clock nobody holds
    DisableUnused,
    /// List the possible parents of a clock
    Parents { clock: String },
    /// List the clocks of a region by index
    List { region: Region },
    /// Dump the registers of a region
    Regs { region: Region },
}

fn init_logging(level: u8) {
    let lf = match level {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(lf)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            let mut style = buf.style();
            let level = match record.level() {
                log::Level::Error => style.set_color(Color::Red).set_intense(true).value("ERROR"),
                log::Level::Warn =>  style.set_color(Color::Yellow).set_intense(true).value("WARN "),
                log::Level::Info =>  style.set_color(Color::Green).set_intense(true).value("INFO "),
                log::Level::Debug => style.set_color(Color::Cyan).set_intense(true).value("DEBUG"),
                log::Level::Trace => style.set_color(Color::Blue).set_intense(true).value("TRACE"),
            };

            writeln!(buf, "{} {}", level, record.args())
        })
        .init();
}

fn run(sys: &mut System, command: Command) -> Result<()> {
    match command {
        Command::Summary => {
            print!("{}", sys.tree.summary());
        }
        Command::Rate { clock } => {
            let clk = sys.clk(&clock)?;
            println!("{}", sys.tree.rate(clk));
        }
        Command::SetRate { clock, rate } => {
            let clk = sys.clk(&clock)?;
            sys.tree.set_rate(clk, rate)?;
            println!("{} {}", clock, sys.tree.rate(clk));
        }
        Command::SetParent { clock, parent } => {
            let clk = sys.clk(&clock)?;
            sys.tree.set_parent(clk, &parent)?;
            println!("{} {}", clock, sys.tree.rate(clk));
        }
        Command::Enable { clock } => {
            let clk = sys.clk(&clock)?;
            sys.tree.prepare_enable(clk)?;
        }
        Command::Disable { clock } => {
            let clk = sys.clk(&clock)?;
            sys.tree.disable(clk);
        }
        Command::DisableUnused => {
            let n = sys.tree.disable_unused();
            info!("Gated unused clocks count={}", n);
        }
        Command::Parents { clock } => {
            let clk = sys.clk(&clock)?;
            let current = sys.tree.parent(clk);
            for (index, name) in sys.tree.parent_names(clk).into_iter().enumerate() {
                let selected = current.map(|p| sys.tree.name(p) == name).unwrap_or(false);
                println!("{} {}{}", index, name, if selected { " *" } else { "" });
            }
        }
        Command::List { region } => {
            print!("{}", sys.list(region)?);
        }
        Command::Regs { region } => {
            let regs = sys.soc.regs(region);
            for (offset, value) in regs.dump() {
                println!("{} 0x{:04x} 0x{:08x}", regs.name(), offset, value);
            }
        }
    }

    let (reads, writes) = Region::ALL.iter()
        .map(|r| sys.soc.regs(*r).stats())
        .fold((0, 0), |(r, w), s| (r + s.reads, w + s.writes));
    debug!("Register accesses reads={} writes={}", reads, writes);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load(&args.config)?;
    let mut sys = system::prepare(&config)?;

    run(&mut sys, args.command.unwrap_or(Command::Summary))
}

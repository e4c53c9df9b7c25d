//! Command-line arguments and the read → normalize → render → figure pipeline.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use crate::cowsay::gen_bubble;
use crate::error::Exit;
use crate::figures::{print_figure, Figure, DEFAULT_FIGURE};
use crate::input::{pipe_guard, read_lines};

#[derive(Parser, Debug)]
#[command(name = "pipesay")]
#[command(version)]
#[command(about = "Wraps piped text in a speech balloon said by an ASCII figure")]
pub struct Args {
    /// The figure to use. Can be 'cow' or 'stegosaurus'
    #[arg(short, long, env = "PIPESAY_FIGURE", default_value = DEFAULT_FIGURE)]
    pub figure: String,

    /// List the available figures and exit
    #[arg(short, long)]
    pub list: bool,
}

/// Run once against the given streams. `interactive` tells whether `input` is a terminal.
pub fn run<R, W, E>(args: &Args, interactive: bool, input: R, out: &mut W, err: &mut E) -> Result<Exit>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if args.list {
        for name in Figure::names() {
            writeln!(out, "{name}")?;
        }
        return Ok(Exit::Success);
    }

    if pipe_guard(interactive, err)? {
        return Ok(Exit::NotAPipe);
    }

    let lines = read_lines(input).context("reading stdin")?;
    let balloon = gen_bubble(&lines);
    writeln!(out, "{balloon}").context("writing balloon")?;

    let figure = print_figure(out, &args.figure).context("writing figure")?;
    debug!("figure: {figure:?}");
    writeln!(out)?;
    out.flush()?;
    Ok(Exit::Success)
}

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use thiserror::Error;

use toggle_chain::Chain;

const SEPARATOR_WIDTH: usize = 48;

/// Binary toggle chain: press Enter to count up one step
#[derive(Parser)]
#[command(name = "toggle-chain", version)]
struct Args {
    /// Number of links in the chain
    #[arg(
        short = 'n',
        long = "number-of-links",
        value_name = "LINKS",
        default_value = "5",
        value_parser = parse_links,
        allow_hyphen_values = true
    )]
    links: usize,
}

fn parse_links(s: &str) -> Result<usize, String> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not an integer"))?;
    if n <= 0 {
        return Err("chain must have at least one link".to_string());
    }
    usize::try_from(n).map_err(|_| format!("{n} links is too many"))
}

/// Exit with status 0 as soon as Ctrl-C arrives.
///
/// The watcher runs on its own thread with a current-thread runtime so the
/// blocking stdin loop in `main` is left alone. Returns once the handler is
/// installed.
fn exit_on_interrupt() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building signal runtime")?;
    let (ready_tx, ready_rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("interrupt".into())
        .spawn(move || {
            runtime.block_on(async move {
                let ready = async move {
                    let _ = ready_tx.send(());
                    std::future::pending::<()>().await
                };
                // ctrl_c installs its handler on first poll, before `ready` runs.
                tokio::select! {
                    biased;
                    res = tokio::signal::ctrl_c() => match res {
                        Ok(()) => {
                            info!("interrupted, exiting");
                            std::process::exit(0);
                        }
                        Err(e) => warn!("cannot listen for Ctrl-C: {e}"),
                    },
                    _ = ready => {}
                }
            });
        })
        .context("spawning interrupt watcher")?;
    // The sender is dropped unsent when the handler could not be installed;
    // the chain still runs, it just won't catch Ctrl-C.
    ready_rx.recv().ok();
    Ok(())
}

/// Why a driver session stopped early.
#[derive(Debug, Error)]
enum DriveError {
    #[error("reading input")]
    Read(#[source] io::Error),

    #[error("writing chain state")]
    Write(#[source] io::Error),
}

fn show<W: Write>(chain: &Chain, toggles: u64, out: &mut W) -> io::Result<()> {
    writeln!(out, "{chain}")?;
    writeln!(out, "Number of toggles: {toggles} ")?;
    write!(out, "Press Enter to continue ")?;
    out.flush()
}

/// Show the chain, wait for a line, toggle, repeat until `input` runs out.
///
/// Lines are read as raw bytes and their contents ignored. Returns the
/// number of toggles performed.
fn run<R: BufRead, W: Write>(
    chain: &mut Chain,
    mut input: R,
    out: &mut W,
) -> Result<u64, DriveError> {
    let mut line = Vec::new();
    let mut toggles = 0u64;
    loop {
        show(chain, toggles, out).map_err(DriveError::Write)?;

        line.clear();
        if input.read_until(b'\n', &mut line).map_err(DriveError::Read)? == 0 {
            debug!("end of input after {toggles} toggles");
            return Ok(toggles);
        }

        toggles += 1;
        chain.toggle();
        writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH)).map_err(DriveError::Write)?;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    exit_on_interrupt()?;

    println!("Number of links: {}", args.links);
    let mut chain = Chain::zeroed(args.links);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut chain, stdin.lock(), &mut out)?;
    writeln!(out)?;
    Ok(())
}

// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless sheet + list scenario.
//!
//! Lays out a sheet with a header and a list, attaches a console-backed sheet, and
//! replays a scripted touch session: press at the top, scroll, pause, press again.
//! Every `set_draggable` call is printed with its simulated timestamp.
//!
//! Run:
//! - `cargo run -p tether_demos --bin sheet_scenario`
//! - `RUST_LOG=debug cargo run -p tether_demos --bin sheet_scenario -- --items 6`

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::{Point, Rect};
use tether_arbiter::config::ArbiterConfig;
use tether_arbiter::host::DragTarget;
use tether_arbiter::list::UniformList;
use tether_responder::adapter::SheetAdapter;
use tether_responder::router::Router;
use tether_responder::types::{Region, RegionNode};

const SHEET_WIDTH: f64 = 400.0;
const PADDING: f64 = 32.0;
const HEADER_HEIGHT: f64 = 100.0;
const GAP: f64 = 20.0;

#[derive(Parser, Debug)]
#[command(about = "Replay a touch session against a sheet hosting a scrollable list")]
struct Args {
    /// Number of list rows.
    #[arg(long, default_value_t = 101)]
    items: usize,
    /// Rows that fit in the list viewport.
    #[arg(long, default_value_t = 10)]
    viewport_rows: u32,
    /// Height of one row in pixels.
    #[arg(long, default_value_t = 48)]
    row_extent: u32,
    /// Override the settle delay from the config.
    #[arg(long)]
    settle_delay_ms: Option<u64>,
    /// JSON file with `settleDelayMs` / `topEdgeTolerance`.
    #[arg(long)]
    config: Option<PathBuf>,
}

type Clock = Rc<Cell<Duration>>;

/// A sheet that prints what it is told.
#[derive(Debug)]
struct ConsoleSheet {
    clock: Clock,
    writes: Vec<(Duration, bool)>,
}

impl DragTarget for ConsoleSheet {
    fn set_draggable(&mut self, enabled: bool) {
        let now = self.clock.get();
        println!("  [{:>5} ms] set_draggable({enabled})", now.as_millis());
        self.writes.push((now, enabled));
    }
}

/// Press points in sheet space.
struct Targets {
    header: Point,
    list: Point,
}

fn build_router(args: &Args) -> (Router, Targets) {
    let viewport = f64::from(args.viewport_rows * args.row_extent);
    let list_top = PADDING + HEADER_HEIGHT + GAP;
    let sheet = Rect::new(0.0, 0.0, SHEET_WIDTH, list_top + viewport + PADDING);
    let header = Rect::new(
        PADDING,
        PADDING,
        SHEET_WIDTH - PADDING,
        PADDING + HEADER_HEIGHT,
    );
    let list = Rect::new(PADDING, list_top, SHEET_WIDTH - PADDING, list_top + viewport);

    let mut router = Router::new();
    router.insert(None, Region::Sheet, RegionNode::new(sheet));
    router.insert(Some(Region::Sheet), Region::Content(0), RegionNode::new(header));
    router.insert(Some(Region::Sheet), Region::List, RegionNode::new(list));

    let targets = Targets {
        header: header.center(),
        list: list.center(),
    };
    (router, targets)
}

fn load_config(args: &Args) -> Result<ArbiterConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => ArbiterConfig::default(),
    };
    if let Some(ms) = args.settle_delay_ms {
        config = config.with_settle_delay_ms(ms);
    }
    Ok(config)
}

/// Drives the adapter with a simulated clock.
struct Session {
    adapter: SheetAdapter<ConsoleSheet, UniformList>,
    clock: Clock,
}

impl Session {
    /// Move the clock forward, firing any due settle.
    fn at(&mut self, ms: u64) {
        let now = Duration::from_millis(ms);
        self.clock.set(now);
        self.adapter.advance(now);
    }

    fn press(&mut self, label: &str, point: Point) {
        println!("[{:>5} ms] press on {label}", self.clock.get().as_millis());
        self.adapter.pointer_down(point, self.clock.get());
    }

    fn release(&mut self) {
        println!("[{:>5} ms] release", self.clock.get().as_millis());
        self.adapter.pointer_up();
    }

    fn scroll_to_item(&mut self, index: usize) {
        let moved = self
            .adapter
            .source_mut()
            .is_some_and(|list| list.scroll_to_item(index));
        if moved {
            println!(
                "[{:>5} ms] list scrolled to row {index}",
                self.clock.get().as_millis()
            );
            self.adapter.scroll_changed(self.clock.get());
        }
    }
}

fn run(args: &Args, config: ArbiterConfig) -> Vec<(Duration, bool)> {
    let (router, targets) = build_router(args);
    let clock = Clock::default();
    let mut adapter = SheetAdapter::new(config, router);
    let viewport = args.viewport_rows * args.row_extent;
    println!(
        "sheet: {} rows of {}px, viewport {viewport}px, settle {} ms",
        args.items, args.row_extent, config.settle_delay_ms
    );
    adapter.attach(
        ConsoleSheet {
            clock: clock.clone(),
            writes: Vec::new(),
        },
        UniformList::new(args.items, args.row_extent, viewport),
    );
    let mut s = Session { adapter, clock };
    let settle = config.settle_delay_ms;

    // Drag the list from its top down to row 5.
    s.at(0);
    s.press("list", targets.list);
    for (step, row) in (1..=5).enumerate() {
        s.at(16 * step as u64 + 16);
        s.scroll_to_item(row);
    }
    s.release();
    s.at(80 + settle / 2);
    s.at(80 + settle);

    // Press the scrolled list again and lift without scrolling.
    s.at(1_000);
    s.press("list", targets.list);
    s.release();
    s.at(1_000 + settle);

    // Header presses always drag the sheet.
    s.at(2_000);
    s.press("header", targets.header);
    s.scroll_to_item(0);
    s.release();
    s.at(2_000 + settle);

    match s.adapter.detach() {
        Some((sheet, _list)) => sheet.writes,
        None => Vec::new(),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let writes = run(&args, config);
    let last = writes.last().map(|&(_, enabled)| enabled);
    log::info!("{} drag flag writes, sheet draggable at end: {last:?}", writes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: usize) -> Args {
        Args {
            items,
            viewport_rows: 10,
            row_extent: 48,
            settle_delay_ms: None,
            config: None,
        }
    }

    #[test]
    fn scripted_session_on_long_list() {
        let writes = run(&args(100), ArbiterConfig::default());
        let ms = Duration::from_millis;
        assert_eq!(
            writes,
            vec![
                (ms(0), true),     // attach
                (ms(16), false),   // row 1
                (ms(32), false),   // row 2
                (ms(48), false),   // row 3
                (ms(64), false),   // row 4
                (ms(80), false),   // row 5
                (ms(180), true),   // settle
                (ms(1_000), false), // press while scrolled
                (ms(1_100), true), // settle after a stationary press
                (ms(2_000), true), // header press
                (ms(2_000), true), // scroll under a header press
            ]
        );
    }

    #[test]
    fn short_list_only_ever_enables() {
        let writes = run(&args(6), ArbiterConfig::default());
        assert!(writes.iter().all(|&(_, enabled)| enabled));
    }
}

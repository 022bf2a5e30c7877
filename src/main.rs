//! Headless brickfall runner (default binary).
//!
//! Drops a sequence of pieces straight down, clearing rows as they fill, and
//! prints the resulting board.
//!
//! ```text
//! brickfall [--width N] [--height N] [--no-verify] [--json] <kind>[:<rotation>]@<column> ...
//! brickfall --width 6 --height 8 stick@0 square@1 pyramid@3
//! ```
//!
//! Board settings start from `BRICKFALL_WIDTH` / `BRICKFALL_HEIGHT` /
//! `BRICKFALL_VERIFY` and flags override them. `BRICKFALL_LOG` sets the log
//! level (default `warn`).

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use brickfall::core::{Board, BoardConfig, PieceRegistry};
use brickfall::engine::{drop_and_lock, LockOutcome, PlaceError};
use brickfall::types::PieceKind;

/// One requested drop: piece kind, quarter turns from the root, left column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DropSpec {
    kind: PieceKind,
    rotation: usize,
    column: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    board: BoardConfig,
    json: bool,
    drops: Vec<DropSpec>,
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    width: usize,
    height: usize,
    max_height: usize,
    rows_cleared: usize,
    topped_out: bool,
    outcomes: &'a [LockOutcome],
    rows: Vec<String>,
}

fn parse_drop(arg: &str) -> Result<DropSpec> {
    let (piece, column) = arg
        .split_once('@')
        .ok_or_else(|| anyhow!("drop {:?}: expected <kind>[:<rotation>]@<column>", arg))?;

    let (kind, rotation) = match piece.split_once(':') {
        Some((kind, rotation)) => {
            let rotation = rotation
                .parse::<usize>()
                .map_err(|_| anyhow!("drop {:?}: invalid rotation: {}", arg, rotation))?;
            (kind, rotation)
        }
        None => (piece, 0),
    };

    let kind =
        PieceKind::from_str(kind).ok_or_else(|| anyhow!("drop {:?}: unknown piece: {}", arg, kind))?;
    let column = column
        .parse::<i32>()
        .map_err(|_| anyhow!("drop {:?}: invalid column: {}", arg, column))?;

    Ok(DropSpec {
        kind,
        rotation,
        column,
    })
}

fn parse_args(args: &[String], mut board: BoardConfig) -> Result<RunConfig> {
    let mut json = false;
    let mut drops = Vec::new();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--width" | "--height" => {
                let flag = args[i].as_str();
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                let n = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
                if flag == "--width" {
                    board.width = n;
                } else {
                    board.height = n;
                }
            }
            "--no-verify" => board.verification = false,
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            other => drops.push(parse_drop(other)?),
        }
        i += 1;
    }

    Ok(RunConfig { board, json, drops })
}

fn init_logging() {
    let level = std::env::var("BRICKFALL_LOG")
        .ok()
        .and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::WARN);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let run = parse_args(&args, BoardConfig::from_env())?;

    let registry = PieceRegistry::build().context("building piece registry")?;
    let mut board = Board::with_config(&run.board)?;

    let mut outcomes = Vec::with_capacity(run.drops.len());
    let mut topped_out = false;
    for drop in &run.drops {
        let shape = registry.ring(drop.kind).shape(drop.rotation);
        match drop_and_lock(&mut board, shape, drop.column) {
            Ok(outcome) => outcomes.push(outcome),
            Err(PlaceError::TooTall) | Err(PlaceError::Blocked) => {
                info!(kind = drop.kind.as_str(), column = drop.column, "board topped out");
                topped_out = true;
                break;
            }
            Err(err) => {
                return Err(anyhow!(
                    "{}@{}: {} ({})",
                    drop.kind.as_str(),
                    drop.column,
                    err,
                    err.code()
                ));
            }
        }
    }

    let rendered = board.to_string();
    if run.json {
        let summary = Summary {
            width: board.width(),
            height: board.height(),
            max_height: board.max_height(),
            rows_cleared: outcomes.iter().map(|o| o.rows_cleared).sum(),
            topped_out,
            outcomes: &outcomes,
            rows: rendered.lines().map(str::to_string).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", rendered);
        if topped_out {
            println!("topped out after {} pieces", outcomes.len());
        }
    }

    Ok(())
}

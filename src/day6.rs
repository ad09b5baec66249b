//! Day 6: Probably a Fire Hazard.
//!
//! A 1000x1000 grid of lights driven by rectangle instructions such as
//! `turn on 0,0 through 999,999`. Part 1 treats lights as on/off, part 2 as
//! brightness dials.

use std::str::FromStr;
use thiserror::Error;

pub const SIDE: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: malformed light instruction {text:?}")]
    Malformed { line: usize, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
    Toggle,
}

/// Inclusive rectangle of lights with corners normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub command: Command,
    pub rect: Rect,
}

impl Instruction {
    /// Parses `<command> X1,Y1 through X2,Y2`; `None` on anything else,
    /// including coordinates off the grid.
    pub fn parse(s: &str) -> Option<Self> {
        let (command, rest) = if let Some(rest) = s.strip_prefix("turn on ") {
            (Command::On, rest)
        } else if let Some(rest) = s.strip_prefix("turn off ") {
            (Command::Off, rest)
        } else if let Some(rest) = s.strip_prefix("toggle ") {
            (Command::Toggle, rest)
        } else {
            return None;
        };
        let (a, b) = rest.split_once(" through ")?;
        let (ax, ay) = parse_corner(a)?;
        let (bx, by) = parse_corner(b)?;
        let rect = Rect {
            x0: ax.min(bx),
            y0: ay.min(by),
            x1: ax.max(bx),
            y1: ay.max(by),
        };
        Some(Instruction { command, rect })
    }
}

fn parse_corner(text: &str) -> Option<(usize, usize)> {
    let (x, y) = text.trim().split_once(',')?;
    let x = usize::from_str(x).ok()?;
    let y = usize::from_str(y).ok()?;
    if x >= SIDE || y >= SIDE {
        return None;
    }
    Some((x, y))
}

pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Instruction>, ParseError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let text = text.as_ref().trim();
            Instruction::parse(text).ok_or_else(|| ParseError::Malformed {
                line: idx + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Applies `apply` to every cell of every instruction's rectangle, row-major.
fn run<T: Copy>(instructions: &[Instruction], init: T, apply: impl Fn(Command, &mut T)) -> Vec<T> {
    let mut grid = vec![init; SIDE * SIDE];
    for ins in instructions {
        let r = ins.rect;
        for row in grid.chunks_mut(SIDE).skip(r.y0).take(r.y1 - r.y0 + 1) {
            for cell in &mut row[r.x0..=r.x1] {
                apply(ins.command, cell);
            }
        }
    }
    grid
}

/// Number of lights left on.
pub fn lit(instructions: &[Instruction]) -> usize {
    let grid = run(instructions, false, |cmd, cell| match cmd {
        Command::On => *cell = true,
        Command::Off => *cell = false,
        Command::Toggle => *cell = !*cell,
    });
    grid.into_iter().filter(|on| *on).count()
}

/// Total brightness: on +1, off -1 (not below zero), toggle +2.
pub fn brightness(instructions: &[Instruction]) -> u64 {
    let grid = run(instructions, 0u32, |cmd, cell| match cmd {
        Command::On => *cell += 1,
        Command::Off => *cell = cell.saturating_sub(1),
        Command::Toggle => *cell += 2,
    });
    grid.into_iter().map(u64::from).sum()
}

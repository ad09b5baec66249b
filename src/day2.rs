//! Day 2: I Was Told There Would Be No Math.
//!
//! Each present is a box `LxWxH`. Paper covers the surface plus the
//! smallest side; ribbon wraps the smallest perimeter plus a bow as long as
//! the volume.

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected LxWxH, got {text:?}")]
    Malformed { line: usize, text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present {
    pub l: u64,
    pub w: u64,
    pub h: u64,
}

impl Present {
    /// Parses `LxWxH`; `None` unless there are exactly three integers.
    pub fn parse(s: &str) -> Option<Self> {
        let mut dims = s.trim().split('x').map(|d| u64::from_str(d).ok());
        let present = Present {
            l: dims.next()??,
            w: dims.next()??,
            h: dims.next()??,
        };
        if dims.next().is_some() {
            return None;
        }
        Some(present)
    }

    fn sides(&self) -> [u64; 3] {
        [self.l * self.w, self.w * self.h, self.h * self.l]
    }

    pub fn paper(&self) -> u64 {
        let sides = self.sides();
        let slack = sides.iter().copied().min().unwrap_or(0);
        2 * sides.iter().sum::<u64>() + slack
    }

    pub fn ribbon(&self) -> u64 {
        let mut dims = [self.l, self.w, self.h];
        dims.sort_unstable();
        2 * (dims[0] + dims[1]) + self.l * self.w * self.h
    }
}

pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Present>, ParseError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            Present::parse(text.as_ref()).ok_or_else(|| ParseError::Malformed {
                line: idx + 1,
                text: text.as_ref().to_string(),
            })
        })
        .collect()
}

pub fn total_paper(presents: &[Present]) -> u64 {
    presents.iter().map(Present::paper).sum()
}

pub fn total_ribbon(presents: &[Present]) -> u64 {
    presents.iter().map(Present::ribbon).sum()
}

//! # aoc2015
//!
//! **Advent of Code 2015 — one module per puzzle**
//!
//! Every day is self-contained: parse a small text input, compute one or two
//! answers. The only shared piece is [`input`], which loads puzzle files.
//!
//! ## Quick Start
//!
//! ```rust
//! use aoc2015::circuit::Circuit;
//!
//! let mut circuit = Circuit::parse("123 -> x\nx LSHIFT 2 -> f\n").unwrap();
//! circuit.resolve().unwrap();
//! print!("{}", circuit.report());
//! assert_eq!(circuit.signal("f"), Some(492));
//! ```
//!
//! ## Days
//!
//! - [`day1`] — floors from parentheses
//! - [`day2`] — wrapping paper and ribbon
//! - [`day3`] — houses visited on an infinite grid
//! - [`day4`] — MD5 AdventCoin mining
//! - [`day5`] — nice and naughty strings
//! - [`day6`] — 1000x1000 light grid
//! - [`circuit`] — day 7, 16-bit logic wire kit

pub mod circuit;
pub mod day1;
pub mod day2;
pub mod day3;
pub mod day4;
pub mod day5;
pub mod day6;
pub mod input;

pub use circuit::{Circuit, CircuitError, Report, Signal};
pub use input::InputError;

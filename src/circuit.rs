//! # Circuit — 16-bit wire kit resolver
//!
//! This module parses the bitwise-logic wiring instructions of day 7 into an
//! arena of wires and a list of gates, then resolves every wire by repeatedly
//! activating the gates whose inputs are known until nothing is left to do.
//!
//! ## Example
//!
//! ```rust
//! use aoc2015::circuit::Circuit;
//!
//! let mut circuit = Circuit::parse(r#"
//!     123 -> x
//!     456 -> y
//!     x AND y -> d
//!     NOT x -> h
//! "#).unwrap();
//!
//! circuit.resolve().unwrap();
//! assert_eq!(circuit.signal("d"), Some(72));
//! assert_eq!(circuit.signal("h"), Some(65412));
//! ```

use crate::input::lines_from_str;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

/// The value carried by a wire.
pub type Signal = u16;

/// Largest shift amount accepted by `LSHIFT` / `RSHIFT`.
pub const MAX_SHIFT: u8 = 15;

/// Index of a wire in the circuit arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireId(usize);

/// A named signal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    pub label: String,
    pub resolved: bool,
    pub signal: Signal,
    /// Set for anonymous wires standing in for numeric operands (`1 AND x`)
    constant: bool,
    /// Set when the value is known at parse time (literal assignment or constant)
    literal: bool,
}

impl Wire {
    fn unresolved(label: &str) -> Self {
        Wire {
            label: label.to_string(),
            resolved: false,
            signal: 0,
            constant: false,
            literal: false,
        }
    }

    fn set_literal(&mut self, signal: Signal) {
        self.signal = signal;
        self.resolved = true;
        self.literal = true;
    }
}

/// Operand of an instruction: another wire or a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Wire(String),
    Value(Signal),
}

/// One parsed line of the wiring diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `<value-or-label> -> <label>`
    Assign { source: Operand, output: String },
    /// `NOT <label> -> <label>`
    Not { input: Operand, output: String },
    /// `<label> AND <label> -> <label>`
    And { lhs: Operand, rhs: Operand, output: String },
    /// `<label> OR <label> -> <label>`
    Or { lhs: Operand, rhs: Operand, output: String },
    /// `<label> LSHIFT <amount> -> <label>`
    LShift { input: Operand, amount: u8, output: String },
    /// `<label> RSHIFT <amount> -> <label>`
    RShift { input: Operand, amount: u8, output: String },
}

impl Instruction {
    pub fn output(&self) -> &str {
        match self {
            Instruction::Assign { output, .. }
            | Instruction::Not { output, .. }
            | Instruction::And { output, .. }
            | Instruction::Or { output, .. }
            | Instruction::LShift { output, .. }
            | Instruction::RShift { output, .. } => output,
        }
    }
}

/// A logic gate wired to wires of the arena.
///
/// Every gate drives exactly one output wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    And { lhs: WireId, rhs: WireId, output: WireId },
    Or { lhs: WireId, rhs: WireId, output: WireId },
    Not { input: WireId, output: WireId },
    LShift { input: WireId, amount: u8, output: WireId },
    RShift { input: WireId, amount: u8, output: WireId },
    /// Copies one wire onto another (`lx -> rx`)
    Passthrough { input: WireId, output: WireId },
}

impl Gate {
    pub fn kind(&self) -> &'static str {
        match self {
            Gate::And { .. } => "AND",
            Gate::Or { .. } => "OR",
            Gate::Not { .. } => "NOT",
            Gate::LShift { .. } => "LSHIFT",
            Gate::RShift { .. } => "RSHIFT",
            Gate::Passthrough { .. } => "PASSTHROUGH",
        }
    }

    pub fn output(&self) -> WireId {
        match *self {
            Gate::And { output, .. }
            | Gate::Or { output, .. }
            | Gate::Not { output, .. }
            | Gate::LShift { output, .. }
            | Gate::RShift { output, .. }
            | Gate::Passthrough { output, .. } => output,
        }
    }

    /// Computes the output signal, or `None` while an input is unresolved.
    pub fn activate(&self, wires: &[Wire]) -> Option<Signal> {
        let get = |id: WireId| {
            let wire = &wires[id.0];
            wire.resolved.then_some(wire.signal)
        };
        let signal = match *self {
            Gate::And { lhs, rhs, .. } => get(lhs)? & get(rhs)?,
            Gate::Or { lhs, rhs, .. } => get(lhs)? | get(rhs)?,
            Gate::Not { input, .. } => !get(input)?,
            Gate::LShift { input, amount, .. } => get(input)? << amount,
            Gate::RShift { input, amount, .. } => get(input)? >> amount,
            Gate::Passthrough { input, .. } => get(input)?,
        };
        Some(signal)
    }

    /// Resolves the output wire if possible. Returns whether the gate is
    /// satisfied, i.e. its output now carries a signal.
    fn try_activate(&self, wires: &mut [Wire]) -> bool {
        let out = self.output();
        if wires[out.0].resolved {
            return true;
        }
        match self.activate(wires) {
            Some(signal) => {
                let wire = &mut wires[out.0];
                wire.signal = signal;
                wire.resolved = true;
                log::trace!("{} gate resolved {} = {}", self.kind(), wire.label, signal);
                true
            }
            None => false,
        }
    }
}

/// Errors raised while parsing a single wiring instruction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line matches none of the instruction shapes
    #[error("line {line}: malformed instruction {text:?}")]
    Malformed { line: usize, text: String },
    /// Shift amount is not an integer in 0..=15
    #[error("line {line}: invalid shift amount {amount:?}")]
    BadShift { line: usize, amount: String },
    /// A second instruction drives a wire that already has a driver
    #[error("line {line}: wire {label} already has a signal source")]
    DuplicateOutput { line: usize, label: String },
}

/// Errors raised while building or resolving a circuit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircuitError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A wire is read but nothing ever drives it
    #[error("wire {0} is never given a signal")]
    UndefinedWire(String),
    /// A full pass over the gates made no progress
    #[error("circuit cannot be resolved, wires still pending: {}", .pending.join(", "))]
    Unsatisfiable { pending: Vec<String> },
}

/// Parses one instruction line. `line` is the 1-based line number used in
/// error messages.
pub fn parse_instruction(text: &str, line: usize) -> Result<Instruction, ParseError> {
    let malformed = || ParseError::Malformed {
        line,
        text: text.trim().to_string(),
    };
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (lhs, output) = match tokens.as_slice() {
        [lhs @ .., "->", out] => (lhs, parse_label(out).ok_or_else(malformed)?),
        _ => return Err(malformed()),
    };
    let operand = |tok: &str| parse_operand(tok).ok_or_else(malformed);
    let instruction = match *lhs {
        [source] => Instruction::Assign {
            source: operand(source)?,
            output,
        },
        ["NOT", input] => Instruction::Not {
            input: operand(input)?,
            output,
        },
        [a, "AND", b] => Instruction::And {
            lhs: operand(a)?,
            rhs: operand(b)?,
            output,
        },
        [a, "OR", b] => Instruction::Or {
            lhs: operand(a)?,
            rhs: operand(b)?,
            output,
        },
        [a, "LSHIFT", k] => Instruction::LShift {
            input: operand(a)?,
            amount: parse_shift(k, line)?,
            output,
        },
        [a, "RSHIFT", k] => Instruction::RShift {
            input: operand(a)?,
            amount: parse_shift(k, line)?,
            output,
        },
        _ => return Err(malformed()),
    };
    Ok(instruction)
}

// Labels are lowercase so they never clash with operator keywords.
fn parse_label(tok: &str) -> Option<String> {
    if !tok.is_empty() && tok.chars().all(|c| c.is_ascii_lowercase()) {
        Some(tok.to_string())
    } else {
        None
    }
}

fn parse_operand(tok: &str) -> Option<Operand> {
    if !tok.is_empty() && tok.chars().all(|c| c.is_ascii_digit()) {
        // wraps like an unsigned 16-bit store, whatever the literal's length
        let value = tok
            .bytes()
            .fold(0u32, |acc, d| (acc * 10 + u32::from(d - b'0')) % 65536);
        return Some(Operand::Value(value as Signal));
    }
    parse_label(tok).map(Operand::Wire)
}

fn parse_shift(tok: &str, line: usize) -> Result<u8, ParseError> {
    match tok.parse::<u8>() {
        Ok(k) if k <= MAX_SHIFT => Ok(k),
        _ => Err(ParseError::BadShift {
            line,
            amount: tok.to_string(),
        }),
    }
}

/// Resolved wire values keyed by label, in label order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub signals: BTreeMap<String, Signal>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, signal) in &self.signals {
            writeln!(f, "{}: {}", label, signal)?;
        }
        Ok(())
    }
}

/// A wiring diagram: the wire arena plus the gates connecting it.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    wires: Vec<Wire>,
    index: HashMap<String, WireId>,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Parses a whole diagram, one instruction per line. Blank lines are
    /// skipped.
    pub fn parse(text: &str) -> Result<Self, CircuitError> {
        Self::from_lines(lines_from_str(text))
    }

    /// Builds a circuit from instruction lines.
    ///
    /// Fails on the first malformed line, on a wire driven twice, and on any
    /// wire that is read but never driven.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, CircuitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut circuit = Circuit::default();
        let mut drivers: HashMap<WireId, usize> = HashMap::new();
        let mut literals = 0usize;

        for (idx, text) in lines.into_iter().enumerate() {
            let line = idx + 1;
            let instruction = parse_instruction(text.as_ref(), line)?;
            let out = circuit.intern(instruction.output());
            if drivers.insert(out, line).is_some() {
                return Err(ParseError::DuplicateOutput {
                    line,
                    label: instruction.output().to_string(),
                }
                .into());
            }
            let gate = match instruction {
                Instruction::Assign {
                    source: Operand::Value(signal),
                    ..
                } => {
                    circuit.wires[out.0].set_literal(signal);
                    literals += 1;
                    continue;
                }
                Instruction::Assign { source, .. } => Gate::Passthrough {
                    input: circuit.operand(&source),
                    output: out,
                },
                Instruction::Not { input, .. } => Gate::Not {
                    input: circuit.operand(&input),
                    output: out,
                },
                Instruction::And { lhs, rhs, .. } => Gate::And {
                    lhs: circuit.operand(&lhs),
                    rhs: circuit.operand(&rhs),
                    output: out,
                },
                Instruction::Or { lhs, rhs, .. } => Gate::Or {
                    lhs: circuit.operand(&lhs),
                    rhs: circuit.operand(&rhs),
                    output: out,
                },
                Instruction::LShift { input, amount, .. } => Gate::LShift {
                    input: circuit.operand(&input),
                    amount,
                    output: out,
                },
                Instruction::RShift { input, amount, .. } => Gate::RShift {
                    input: circuit.operand(&input),
                    amount,
                    output: out,
                },
            };
            circuit.gates.push(gate);
        }

        let mut undriven: Vec<&str> = circuit
            .wires
            .iter()
            .enumerate()
            .filter(|(id, w)| !w.constant && !drivers.contains_key(&WireId(*id)))
            .map(|(_, w)| w.label.as_str())
            .collect();
        undriven.sort_unstable();
        if let Some(label) = undriven.first() {
            return Err(CircuitError::UndefinedWire(label.to_string()));
        }

        log::debug!(
            "parsed circuit: {} wires, {} gates, {} literal signals",
            circuit.wires.len(),
            circuit.gates.len(),
            literals
        );
        Ok(circuit)
    }

    fn intern(&mut self, label: &str) -> WireId {
        if let Some(id) = self.index.get(label) {
            return *id;
        }
        let id = WireId(self.wires.len());
        self.wires.push(Wire::unresolved(label));
        self.index.insert(label.to_string(), id);
        id
    }

    fn operand(&mut self, operand: &Operand) -> WireId {
        match operand {
            Operand::Wire(label) => self.intern(label),
            Operand::Value(signal) => {
                // digits never collide with alphabetic labels
                let id = self.intern(&signal.to_string());
                let wire = &mut self.wires[id.0];
                wire.constant = true;
                wire.set_literal(*signal);
                id
            }
        }
    }

    pub fn wire(&self, label: &str) -> Option<&Wire> {
        self.index.get(label).map(|id| &self.wires[id.0])
    }

    /// Signal on `label`, if the wire exists and is resolved.
    pub fn signal(&self, label: &str) -> Option<Signal> {
        self.wire(label).filter(|w| w.resolved).map(|w| w.signal)
    }

    /// Runs passes over the gate list until every gate is satisfied.
    ///
    /// Returns the number of passes taken. A pass that satisfies no more
    /// gates than the previous one means some wires can never resolve
    /// (typically a loop with no literal source) and yields
    /// [`CircuitError::Unsatisfiable`].
    pub fn resolve(&mut self) -> Result<usize, CircuitError> {
        let total = self.gates.len();
        let mut satisfied = vec![false; total];
        let mut previous = 0usize;
        let mut passes = 0usize;
        loop {
            passes += 1;
            for (slot, gate) in satisfied.iter_mut().zip(&self.gates) {
                *slot = gate.try_activate(&mut self.wires);
            }
            let count = satisfied.iter().filter(|s| **s).count();
            log::debug!("pass {}: {}/{} gates satisfied", passes, count, total);
            if count == total {
                return Ok(passes);
            }
            if count == previous {
                let mut pending: Vec<String> = self
                    .gates
                    .iter()
                    .zip(&satisfied)
                    .filter(|(_, ok)| !**ok)
                    .map(|(g, _)| self.wires[g.output().0].label.clone())
                    .collect();
                pending.sort();
                pending.dedup();
                return Err(CircuitError::Unsatisfiable { pending });
            }
            previous = count;
        }
    }

    /// Every resolved named wire, sorted by label.
    pub fn report(&self) -> Report {
        let signals = self
            .wires
            .iter()
            .filter(|w| !w.constant && w.resolved)
            .map(|w| (w.label.clone(), w.signal))
            .collect();
        Report { signals }
    }

    /// Forgets every signal computed by a gate; literal signals stay.
    pub fn reset(&mut self) {
        for wire in self.wires.iter_mut().filter(|w| !w.literal) {
            wire.resolved = false;
            wire.signal = 0;
        }
    }

    /// Pins `label` to `signal`. Whatever gate drove the wire is then always
    /// treated as satisfied.
    pub fn force(&mut self, label: &str, signal: Signal) -> Result<(), CircuitError> {
        let id = *self
            .index
            .get(label)
            .ok_or_else(|| CircuitError::UndefinedWire(label.to_string()))?;
        self.wires[id.0].set_literal(signal);
        Ok(())
    }
}

/// Resolves the circuit, feeds the signal on `watch` back into `target`,
/// and resolves again from scratch. Returns the new signal on `watch`.
pub fn override_and_resolve(
    circuit: &mut Circuit,
    watch: &str,
    target: &str,
) -> Result<Signal, CircuitError> {
    let missing = || CircuitError::UndefinedWire(watch.to_string());
    circuit.resolve()?;
    let first = circuit.signal(watch).ok_or_else(missing)?;
    log::info!("{} = {}, overriding {}", watch, first, target);
    circuit.reset();
    circuit.force(target, first)?;
    circuit.resolve()?;
    circuit.signal(watch).ok_or_else(missing)
}

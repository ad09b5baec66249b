//! End-to-end checks that load puzzle inputs from disk the way the binary does.

use aoc2015::circuit::{override_and_resolve, Circuit, CircuitError};
use aoc2015::input::{read_chars, read_lines, InputError};
use aoc2015::{day1, day2, day3, day5, day6};
use std::fs;
use tempfile::tempdir;

#[test]
fn circuit_from_file_reports_sorted_wires() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("day7.txt");
    fs::write(
        &path,
        "x AND y -> d\nx OR y -> e\n\n123 -> x\nx LSHIFT 2 -> f\ny RSHIFT 2 -> g\n   \nNOT x -> h\nNOT y -> i\n456 -> y\n",
    )
    .unwrap();

    let mut circuit = Circuit::from_lines(read_lines(&path).unwrap()).unwrap();
    circuit.resolve().unwrap();
    assert_eq!(
        circuit.report().to_string(),
        "d: 72\ne: 507\nf: 492\ng: 114\nh: 65412\ni: 65079\nx: 123\ny: 456\n"
    );
}

#[test]
fn circuit_part_two_rewires_b() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("day7.txt");
    fs::write(&path, "lx -> a\nb LSHIFT 1 -> lx\n3 -> b\n").unwrap();

    let mut circuit = Circuit::from_lines(read_lines(&path).unwrap()).unwrap();
    assert_eq!(override_and_resolve(&mut circuit, "a", "b").unwrap(), 12);
    assert_eq!(circuit.report().signals["b"], 6);
}

#[test]
fn bad_circuit_files_fail() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("day7.txt");

    fs::write(&path, "1 -> x\nx FOO y -> z\n").unwrap();
    let err = Circuit::from_lines(read_lines(&path).unwrap()).unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");

    fs::write(&path, "a -> b\nb -> a\n").unwrap();
    let mut circuit = Circuit::from_lines(read_lines(&path).unwrap()).unwrap();
    assert!(matches!(
        circuit.resolve(),
        Err(CircuitError::Unsatisfiable { .. })
    ));

    let missing = dir.path().join("missing.txt");
    assert!(matches!(read_lines(&missing), Err(InputError::Open { .. })));
}

#[test]
fn single_line_puzzles_ignore_whitespace() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("moves.txt");
    fs::write(&path, "(()(\n()))\n)\n").unwrap();
    let moves = read_chars(&path).unwrap();
    assert_eq!(day1::final_floor(&moves), -1);
    assert_eq!(day1::basement_position(&moves), Some(9));

    fs::write(&path, "^v^v^\nv^v^v\n").unwrap();
    let moves = read_chars(&path).unwrap();
    assert_eq!(day3::part1(&moves), 2);
    assert_eq!(day3::part2(&moves), 11);
}

#[test]
fn multi_line_puzzles() {
    let dir = tempdir().unwrap();
    let boxes = dir.path().join("day2.txt");
    fs::write(&boxes, "2x3x4\n\n1x1x10\n").unwrap();
    let presents = day2::parse(&read_lines(&boxes).unwrap()).unwrap();
    assert_eq!(day2::total_paper(&presents), 101);
    assert_eq!(day2::total_ribbon(&presents), 48);

    let words = dir.path().join("day5.txt");
    fs::write(&words, "ugknbfddgicrmopn\naaa\nqjhvhtzxzqqjkmpb\n").unwrap();
    let words = read_lines(&words).unwrap();
    assert_eq!(day5::count_nice(&words, day5::is_nice), 2);
    assert_eq!(day5::count_nice(&words, day5::is_nicer), 1);

    let lights = dir.path().join("day6.txt");
    fs::write(
        &lights,
        "turn on 0,0 through 999,999\ntoggle 0,0 through 999,0\nturn off 499,499 through 500,500\n",
    )
    .unwrap();
    let instructions = day6::parse(&read_lines(&lights).unwrap()).unwrap();
    assert_eq!(day6::lit(&instructions), 998_996);
}

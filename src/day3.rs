//! Day 3: Perfectly Spherical Houses in a Vacuum.

use std::collections::HashSet;

type House = (i32, i32);

fn delta(c: char) -> Option<House> {
    match c {
        '^' => Some((0, 1)),
        'v' => Some((0, -1)),
        '>' => Some((1, 0)),
        '<' => Some((-1, 0)),
        _ => None,
    }
}

/// Houses receiving at least one present when `couriers` take turns
/// following the moves. Unknown characters are skipped without using a turn.
pub fn houses_visited(moves: &str, couriers: usize) -> usize {
    let couriers = couriers.max(1);
    let mut positions = vec![(0, 0); couriers];
    let mut visited: HashSet<House> = HashSet::from([(0, 0)]);
    for (turn, (dx, dy)) in moves.chars().filter_map(delta).enumerate() {
        let pos = &mut positions[turn % couriers];
        pos.0 += dx;
        pos.1 += dy;
        visited.insert(*pos);
    }
    visited.len()
}

pub fn part1(moves: &str) -> usize {
    houses_visited(moves, 1)
}

/// Santa and Robo-Santa alternate moves.
pub fn part2(moves: &str) -> usize {
    houses_visited(moves, 2)
}

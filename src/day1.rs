//! Day 1: Not Quite Lisp. `(` goes up a floor, `)` goes down.

/// Floor reached after following every instruction. Characters other than
/// parentheses are ignored.
pub fn final_floor(moves: &str) -> i32 {
    moves.chars().map(step).sum()
}

/// 1-based position of the first character that enters the basement.
pub fn basement_position(moves: &str) -> Option<usize> {
    let mut floor = 0i32;
    for (idx, c) in moves.chars().enumerate() {
        floor += step(c);
        if floor < 0 {
            return Some(idx + 1);
        }
    }
    None
}

fn step(c: char) -> i32 {
    match c {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors() {
        assert_eq!(final_floor("(())"), 0);
        assert_eq!(final_floor("()()"), 0);
        assert_eq!(final_floor("((("), 3);
        assert_eq!(final_floor("))((((("), 3);
        assert_eq!(final_floor(")))"), -3);
        assert_eq!(final_floor(")())())"), -3);
    }

    #[test]
    fn basement() {
        assert_eq!(basement_position(")"), Some(1));
        assert_eq!(basement_position("()())"), Some(5));
        assert_eq!(basement_position("((("), None);
    }
}

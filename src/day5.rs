//! Day 5: Doesn't He Have Intern-Elves For This?

const VOWELS: &[u8] = b"aeiou";
const FORBIDDEN: [&str; 4] = ["ab", "cd", "pq", "xy"];

/// Old rules: three vowels, a doubled letter, no forbidden pair.
pub fn is_nice(s: &str) -> bool {
    let b = s.as_bytes();
    let vowels = b.iter().filter(|c| VOWELS.contains(c)).count();
    let doubled = b.windows(2).any(|w| w[0] == w[1]);
    vowels >= 3 && doubled && !FORBIDDEN.iter().any(|p| s.contains(p))
}

/// New rules: a pair appearing twice without overlap, and a letter
/// repeating with exactly one letter between.
pub fn is_nicer(s: &str) -> bool {
    let b = s.as_bytes();
    let repeated_pair = (0..b.len().saturating_sub(1))
        .any(|i| b[i + 2..].windows(2).any(|w| w == &b[i..i + 2]));
    let sandwich = b.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

pub fn count_nice<S: AsRef<str>>(lines: &[S], rule: fn(&str) -> bool) -> usize {
    lines.iter().filter(|l| rule(l.as_ref().trim())).count()
}

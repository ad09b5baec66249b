//! Day 4: The Ideal Stocking Stuffer.
//!
//! Find the lowest number which, appended to the secret key, gives an MD5
//! hash whose hex form starts with a run of zeroes. Candidates are checked
//! in batches on the rayon pool; `find_first` keeps the answer identical to
//! a sequential scan.

use md5::{Digest, Md5};
use rayon::prelude::*;
use thiserror::Error;

/// Candidates hashed per parallel batch.
const BATCH: u64 = 16_384;

/// Hex digits in an MD5 digest.
const MAX_ZEROES: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MiningError {
    #[error("an MD5 digest has only 32 hex digits, cannot require {0} zeroes")]
    Difficulty(usize),
}

/// A mined suffix together with the hash it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub suffix: u64,
    pub hash: String,
}

fn digest(key: &str, suffix: u64) -> [u8; 16] {
    let mut hasher = Md5::new();
    hasher.update(key.as_bytes());
    hasher.update(suffix.to_string().as_bytes());
    let mut out = [0u8; 16];
    out.copy_from_slice(&hasher.finalize());
    out
}

fn has_zero_prefix(digest: &[u8; 16], zeroes: usize) -> bool {
    let full = zeroes / 2;
    if digest[..full].iter().any(|b| *b != 0) {
        return false;
    }
    zeroes % 2 == 0 || digest[full] >> 4 == 0
}

/// Lowest suffix whose hash starts with `zeroes` hex zeroes.
pub fn mine(key: &str, zeroes: usize) -> Result<Coin, MiningError> {
    if zeroes > MAX_ZEROES {
        return Err(MiningError::Difficulty(zeroes));
    }
    let mut start = 0u64;
    loop {
        let end = start + BATCH;
        let found = (start..end)
            .into_par_iter()
            .find_first(|n| has_zero_prefix(&digest(key, *n), zeroes));
        if let Some(suffix) = found {
            let hash = hex::encode(digest(key, suffix));
            log::debug!("mined {}{} -> {}", key, suffix, hash);
            return Ok(Coin { suffix, hash });
        }
        start = end;
        log::trace!("no coin below {}", start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_check_counts_nibbles() {
        let mut d = [0u8; 16];
        d[2] = 0x0f;
        assert!(has_zero_prefix(&d, 5));
        assert!(!has_zero_prefix(&d, 6));
        d[2] = 0x10;
        assert!(!has_zero_prefix(&d, 5));
        assert!(has_zero_prefix(&d, 4));
    }

    #[test]
    fn puzzle_examples() {
        let coin = mine("abcdef", 5).unwrap();
        assert_eq!(coin.suffix, 609043);
        assert!(coin.hash.starts_with("000001dbbfa"));
        assert_eq!(mine("pqrstuv", 5).unwrap().suffix, 1048970);
    }

    #[test]
    fn zero_difficulty_is_immediate() {
        assert_eq!(mine("abcdef", 0).unwrap().suffix, 0);
    }

    #[test]
    fn impossible_difficulty() {
        assert_eq!(mine("abcdef", 33), Err(MiningError::Difficulty(33)));
    }
}

use anyhow::{Context, Result};
use aoc2015::circuit::{override_and_resolve, Circuit};
use aoc2015::input::{read_chars, read_lines};
use aoc2015::{day1, day2, day3, day4, day5, day6};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "aoc2015", version, about = "Advent of Code 2015 solutions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Not Quite Lisp
    Day1 {
        #[arg(long)]
        input: PathBuf,
    },
    /// I Was Told There Would Be No Math
    Day2 {
        #[arg(long)]
        input: PathBuf,
    },
    /// Perfectly Spherical Houses in a Vacuum
    Day3 {
        #[arg(long)]
        input: PathBuf,
    },
    /// The Ideal Stocking Stuffer
    Day4 {
        #[arg(long)]
        input: PathBuf,
        /// Mine only this difficulty instead of 5 and 6
        #[arg(long)]
        zeroes: Option<usize>,
    },
    /// Doesn't He Have Intern-Elves For This?
    Day5 {
        #[arg(long)]
        input: PathBuf,
    },
    /// Probably a Fire Hazard
    Day6 {
        #[arg(long)]
        input: PathBuf,
    },
    /// Some Assembly Required
    Day7 {
        #[arg(long)]
        input: PathBuf,
        /// Print the wire report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Feed the watched wire's signal back into the override wire and resolve again
        #[arg(long, default_value_t = false)]
        part2: bool,
        #[arg(long, default_value = "a")]
        watch: String,
        #[arg(long = "override", default_value = "b")]
        target: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Day1 { input } => {
            let moves = chars(&input)?;
            println!("part1 floor={}", day1::final_floor(&moves));
            match day1::basement_position(&moves) {
                Some(pos) => println!("part2 basement_position={}", pos),
                None => println!("part2 basement never reached"),
            }
        }
        Commands::Day2 { input } => {
            let presents = day2::parse(&lines(&input)?)?;
            println!("part1 paper={}", day2::total_paper(&presents));
            println!("part2 ribbon={}", day2::total_ribbon(&presents));
        }
        Commands::Day3 { input } => {
            let moves = chars(&input)?;
            println!("part1 houses={}", day3::part1(&moves));
            println!("part2 houses={}", day3::part2(&moves));
        }
        Commands::Day4 { input, zeroes } => {
            let key = chars(&input)?;
            let difficulties = match zeroes {
                Some(z) => vec![z],
                None => vec![5, 6],
            };
            for z in difficulties {
                let coin = day4::mine(&key, z)?;
                println!("zeroes={} suffix={} md5={}", z, coin.suffix, coin.hash);
            }
        }
        Commands::Day5 { input } => {
            let words = lines(&input)?;
            println!("part1 nice={}", day5::count_nice(&words, day5::is_nice));
            println!("part2 nice={}", day5::count_nice(&words, day5::is_nicer));
        }
        Commands::Day6 { input } => {
            let instructions = day6::parse(&lines(&input)?)?;
            println!("part1 lit={}", day6::lit(&instructions));
            println!("part2 brightness={}", day6::brightness(&instructions));
        }
        Commands::Day7 {
            input,
            json,
            part2,
            watch,
            target,
        } => {
            let mut circuit = Circuit::from_lines(lines(&input)?)
                .with_context(|| format!("invalid circuit in {}", input.display()))?;
            if part2 {
                let signal = override_and_resolve(&mut circuit, &watch, &target)?;
                log::info!("{} = {} after overriding {}", watch, signal, target);
                println!("part2 {}={}", watch, signal);
            } else {
                let passes = circuit.resolve()?;
                log::info!("circuit resolved in {} passes", passes);
            }
            let report = circuit.report();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }
    Ok(())
}

fn lines(path: &Path) -> Result<Vec<String>> {
    Ok(read_lines(path)?)
}

fn chars(path: &Path) -> Result<String> {
    Ok(read_chars(path)?)
}

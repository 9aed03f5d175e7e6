use std::io;

use dialoguer::{Confirm, Input, Select};
use tracing::warn;

use crate::phy::{InitialLevel, LineEncoder};
use crate::ui::plot::render_all;
use crate::utils::consts::DEFAULT_INITIAL_LEVEL;

const LEVEL_ITEMS: [InitialLevel; 2] = [InitialLevel::High, InitialLevel::Low];

/// Ask for the bit string. Empty answers are allowed so the validator can
/// report them.
pub fn ask_bits() -> io::Result<String> {
    Input::<String>::new()
        .with_prompt("Enter binary data")
        .allow_empty(true)
        .interact_text()
        .map_err(io::Error::other)
}

/// Ask for the initial signal level, preselecting
/// [`DEFAULT_INITIAL_LEVEL`].
pub fn ask_initial_level() -> io::Result<InitialLevel> {
    let names: Vec<&str> = LEVEL_ITEMS.iter().map(|l| l.name()).collect();
    let default = LEVEL_ITEMS
        .iter()
        .position(|&l| l == DEFAULT_INITIAL_LEVEL)
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Initial Signal Level")
        .items(&names)
        .default(default)
        .interact()
        .map_err(io::Error::other)?;
    Ok(LEVEL_ITEMS[index])
}

fn ask_again() -> io::Result<bool> {
    Confirm::new()
        .with_prompt("Encode another sequence?")
        .default(true)
        .interact()
        .map_err(io::Error::other)
}

/// Prompt, encode with all six schemes and print the charts until the user
/// stops. Invalid input prints the error and asks again.
pub fn run_interactive(cols_per_bit: usize) -> io::Result<()> {
    loop {
        let raw = ask_bits()?;
        let initial_level = ask_initial_level()?;

        let encoder = LineEncoder::all(initial_level);
        match encoder.encode_str(&raw) {
            Ok((bits, signals)) => {
                println!("{}", render_all(&bits, &signals, cols_per_bit));
            }
            Err(err) => {
                warn!("Rejected input: {}", err);
                println!("{}", err.user_message());
            }
        }

        if !ask_again()? {
            return Ok(());
        }
    }
}

//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::game::{Session, banner_text};
use crate::output::print_board;
use crate::providers::{FarewellTexts, LivesPool, WordProvider};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// word provider fails when starting a new round.
pub fn run_simple<P: WordProvider>(
    session: &mut Session<P>,
    pool: &LivesPool,
    farewells: &FarewellTexts,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Assembly: Endgame                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!(
        "\nGuess the word within {} attempts to keep the programming world",
        session.round().max_wrong()
    );
    println!("safe from Assembly!\n");
    println!("Commands: 'quit' to exit, 'new' for a new round\n");

    loop {
        let outcome = session.round().outcome();
        let banner = banner_text(&outcome, farewells);

        print_board(session.round(), pool, banner.as_deref());

        if outcome.is_over {
            if outcome.is_lost {
                println!(
                    "The word was {}",
                    session.round().word().text().to_uppercase().bold()
                );
            }

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    session.new_round()?;
                    println!("\n🔄 New round started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        let input = get_user_input("Guess a letter")?.to_lowercase();

        // 'q' stays a guess; quitting takes the full word
        match input.as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.new_round()?;
                println!("\n🔄 New round started!\n");
            }
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_ascii_alphabetic() => {
                        session.round_mut().submit(letter);
                    }
                    _ => {
                        println!("{}", "Enter a single letter (a-z).".red());
                    }
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

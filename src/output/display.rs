//! Colored board printing for the simple CLI mode

use super::formatters::{KeyState, guessed_line, key_state, reveal_line};
use crate::core::ALPHABET;
use crate::game::{Narrative, Round, classify};
use crate::providers::LivesPool;
use colored::Colorize;

/// Print the full board: banner, language chips, word reveal, keyboard
pub fn print_board(round: &Round, pool: &LivesPool, banner: Option<&str>) {
    let outcome = round.outcome();

    println!();
    if let Some(text) = banner {
        let styled = match classify(&outcome) {
            Narrative::Won => text.green().bold(),
            Narrative::Lost => text.red().bold(),
            Narrative::Warning { .. } => text.magenta().italic(),
            Narrative::Neutral => text.normal(),
        };
        println!("{styled}\n");
    }

    print_chips(pool, outcome.wrong_guesses);

    println!(
        "\n  {}\n",
        reveal_line(round.word(), round.guesses(), outcome.is_lost)
            .bright_white()
            .bold()
    );

    print_keyboard(round);

    let guessed = guessed_line(round.guesses());
    if !guessed.is_empty() {
        println!("\n  Guessed: {}", guessed.cyan());
    }

    let remaining = round.max_wrong().saturating_sub(outcome.wrong_guesses);
    println!(
        "\n{} wrong {} left",
        remaining.to_string().bright_yellow().bold(),
        if remaining == 1 { "guess" } else { "guesses" }
    );
}

fn print_chips(pool: &LivesPool, wrong_guesses: usize) {
    print!("  ");
    for (index, lang) in pool.entries().iter().enumerate() {
        let (br, bg, bb) = lang.background;
        let (fr, fg, fb) = lang.foreground;

        let chip = format!(" {} ", lang.name);
        if pool.is_lost(index, wrong_guesses) {
            print!("{} ", chip.strikethrough().dimmed());
        } else {
            print!("{} ", chip.truecolor(fr, fg, fb).on_truecolor(br, bg, bb));
        }
    }
    println!();
}

fn print_keyboard(round: &Round) {
    print!("  ");
    for letter in ALPHABET.chars() {
        let display = letter.to_uppercase().to_string();
        let styled = match key_state(letter, round.word(), round.guesses()) {
            KeyState::Correct => display.black().on_green(),
            KeyState::Wrong => display.black().on_red(),
            KeyState::Unused => display.bright_white(),
        };
        print!("{styled} ");
    }
    println!();
}

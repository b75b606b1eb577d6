mod assemble;
mod board;
mod error;
mod source;

use anyhow::{Context, Result};
use board::{Board, RevealOutcome, Showing};
use clap::{Arg, Command};
use dialoguer::Select;
use source::JServiceClient;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Parse CLI arguments
    let matches = Command::new("Trebek-RS")
        .version("0.1.1")
        .about("Terminal trivia board backed by a jservice-style API")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the trivia API")
                .default_value(source::DEFAULT_API_URL),
        )
        .get_matches();

    let api_url = matches.get_one::<String>("api-url").unwrap(); // Safe due to default

    let client = JServiceClient::new(api_url).context("Failed to create API client")?;

    loop {
        println!("Assembling a new board...");
        // Each round owns exactly one fully assembled board; a failed
        // assembly never leaves a partial one behind.
        let mut board = assemble::assemble_board(&client)
            .await
            .context("Failed to assemble board")?;

        if !play_board(&mut board)? {
            break;
        }
    }

    Ok(())
}

/// Runs one round on the given board. Returns true when the player asked
/// for a new game, false to quit.
fn play_board(board: &mut Board) -> Result<bool> {
    loop {
        print_board(board);

        let mut items: Vec<String> = board
            .categories()
            .iter()
            .map(|c| c.title.clone())
            .collect();
        items.push("New game".to_string());
        items.push("Quit".to_string());

        let pick = Select::new()
            .with_prompt("Pick a category")
            .default(0)
            .items(&items)
            .interact()?;
        if pick == board.columns() {
            return Ok(true);
        }
        if pick == board.columns() + 1 {
            return Ok(false);
        }

        let values: Vec<String> = (0..board.rows()).map(cell_label).collect();
        let row = Select::new()
            .with_prompt("Pick a value")
            .default(0)
            .items(&values)
            .interact()?;

        match board.reveal(row, pick)? {
            RevealOutcome::Question(text) => println!("\nClue: {text}"),
            RevealOutcome::Answer(text) => println!("\nAnswer: {text}"),
            RevealOutcome::AlreadyRevealed => println!("\nAlready revealed."),
        }
    }
}

const CELL_WIDTH: usize = 14;

fn print_board(board: &Board) {
    println!();
    let header: Vec<String> = board
        .categories()
        .iter()
        .map(|c| fit(&c.title))
        .collect();
    println!("{}", header.join(" | "));

    for row in 0..board.rows() {
        let cells: Vec<String> = board
            .categories()
            .iter()
            .map(|category| {
                let text = match category.clues[row].showing {
                    Showing::None => cell_label(row),
                    Showing::Question => "?".to_string(),
                    Showing::Answer => "-".to_string(),
                };
                fit(&text)
            })
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!();
}

/// Dollar value shown on an unrevealed cell: $200 for the top row up to
/// $1000 for the bottom one.
fn cell_label(row: usize) -> String {
    format!("${}", (row + 1) * 200)
}

fn fit(text: &str) -> String {
    let truncated: String = if text.chars().count() > CELL_WIDTH {
        // Mark truncation so long category titles stay readable.
        text.chars().take(CELL_WIDTH - 1).chain(['…']).collect()
    } else {
        text.to_string()
    };
    format!("{:^width$}", truncated, width = CELL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_labels_step_by_200() {
        assert_eq!(cell_label(0), "$200");
        assert_eq!(cell_label(4), "$1000");
    }

    #[test]
    fn test_fit_pads_short_titles() {
        assert_eq!(fit("abc").chars().count(), CELL_WIDTH);
        assert!(!fit("abc").contains('…'));
    }

    #[test]
    fn test_fit_marks_truncated_titles() {
        let fitted = fit("a very long category title");
        assert_eq!(fitted.chars().count(), CELL_WIDTH);
        assert!(fitted.ends_with('…'));
    }
}

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use log::info;
use rs_wordle_engine::*;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::Write;

mod words;

use words::{Secrets, WordList};

const PROMPT: &str = "Guess: ";

/// Simple program to play a game of Wordle in the terminal.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line. The
    /// secret word of each game is chosen from this list at random.
    #[clap(short = 'f', long)]
    words_file: Option<String>,

    /// Play against this word instead of one chosen from the words file.
    #[clap(short = 'w', long)]
    word: Option<String>,

    /// If set, the secret word of each game is written to this file before the game starts.
    #[clap(long)]
    secret_file: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively, reading one guess per line from stdin. After each game you can start a
    /// new one.
    Interactive,
    /// Play a game with the given guesses, in order.
    Replay {
        #[clap(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let secrets = secrets_from_args(&args)?;
    let secret_file = args.secret_file.as_deref();

    println!(
        "Guess the {}-letter word. You have {} attempts.",
        WORD_SIZE, MAX_ATTEMPTS
    );
    match args.command {
        Command::Interactive => {
            let num_games = play_interactive_games(&secrets, secret_file, io::stdin().lock())?;
            info!("Played {} games.", num_games);
            Ok(())
        }
        Command::Replay { guesses } => {
            let target = start_game(&secrets, secret_file)?;
            replay_game(&target, guesses)
        }
    }
}

fn secrets_from_args(args: &Args) -> anyhow::Result<Secrets> {
    if let Some(word) = &args.word {
        return Secrets::fixed(word, WORD_SIZE);
    }
    let path = match &args.words_file {
        Some(path) => path,
        None => bail!("Either --words-file or --word must be given."),
    };
    let words_reader = io::BufReader::new(
        File::open(path).with_context(|| format!("Failed to open words file {}", path))?,
    );
    let word_list = WordList::from_reader(words_reader, WORD_SIZE)?;
    info!("There are {} possible words.", word_list.len());

    Secrets::random(word_list).with_context(|| format!("Can't choose a word from {}", path))
}

/// Picks the secret word for a new game, and writes it to `secret_file` if given.
fn start_game(secrets: &Secrets, secret_file: Option<&str>) -> anyhow::Result<String> {
    let target = secrets.next_secret()?;
    if let Some(path) = secret_file {
        write_secret(path, &target)?;
    }
    Ok(target)
}

/// Writes just the secret word, replacing any previous contents of the file.
fn write_secret(path: &str, target: &str) -> anyhow::Result<()> {
    fs::write(path, target)
        .with_context(|| format!("Failed to write the secret word to {}", path))?;
    info!("Wrote the secret word to {}", path);
    Ok(())
}

/// Plays games until the player declines a new one. Returns the number of games played.
fn play_interactive_games<R: BufRead>(
    secrets: &Secrets,
    secret_file: Option<&str>,
    input: R,
) -> anyhow::Result<u32> {
    let mut lines = input.lines();
    let mut num_games = 0;
    loop {
        let target = start_game(secrets, secret_file)?;
        num_games += 1;
        play(&target, || read_guess(&mut lines), print_outcome)?;

        print!("Play again? [y/N] ");
        io::stdout().flush()?;
        match lines.next().transpose()? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => println!(),
            _ => return Ok(num_games),
        }
    }
}

fn read_guess<R: BufRead>(lines: &mut io::Lines<R>) -> anyhow::Result<String> {
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => bail!("Input ended before the game was over."),
        };
        let guess = line.trim().to_uppercase();
        // Wrong lengths re-prompt without using an attempt.
        if guess.chars().count() != WORD_SIZE {
            println!("Guess must be {} letters long.", WORD_SIZE);
            continue;
        }
        return Ok(guess);
    }
}

fn replay_game(target: &str, guesses: Vec<String>) -> anyhow::Result<()> {
    let mut guesses = guesses.into_iter();
    play(
        target,
        || -> anyhow::Result<String> {
            let guess = guesses
                .next()
                .ok_or_else(|| anyhow!("Ran out of guesses before the game was over."))?
                .to_uppercase();
            println!("{}{}", PROMPT, guess);
            Ok(guess)
        },
        print_outcome,
    )
}

fn print_outcome(outcome: AttemptOutcome) -> anyhow::Result<()> {
    println!("{}{}", " ".repeat(PROMPT.len()), format_results(&outcome.results));
    println!(
        "Attempts remaining: {}",
        MAX_ATTEMPTS.saturating_sub(outcome.attempt)
    );
    if !outcome.message.is_empty() {
        println!("{}", outcome.message);
    }
    Ok(())
}

/// Formats each result as 'g' (exact), 'y' (partial) or '.' (no match).
fn format_results(results: &[MatchResult]) -> String {
    results
        .iter()
        .map(|result| match result {
            MatchResult::Exact => 'g',
            MatchResult::Partial => 'y',
            MatchResult::NoMatch => '.',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}", name, std::process::id()))
    }

    #[test]
    fn format_results_uses_one_char_per_letter() -> Result<(), WordleError> {
        assert_eq!(format_results(&score("FAVOR", "RAPID")?), "yg...");
        assert_eq!(format_results(&score("SKILL", "SILLY")?), "gyyg.");
        Ok(())
    }

    #[test]
    fn replay_until_won() {
        assert!(replay_game("FAVOR", vec!["skill".to_string(), "favor".to_string()]).is_ok());
    }

    #[test]
    fn replay_out_of_guesses() {
        assert!(replay_game("FAVOR", vec!["skill".to_string()]).is_err());
    }

    #[test]
    fn replay_invalid_guess() {
        let err = replay_game("FAVOR", vec!["for".to_string()]).unwrap_err();

        assert_eq!(
            err.downcast_ref::<WordleError>(),
            Some(&WordleError::InvalidGuessLength {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn write_secret_writes_bare_word() -> anyhow::Result<()> {
        let path = temp_path("wordle-secret-bare");
        let path_str = path.to_str().unwrap();

        write_secret(path_str, "SKILL")?;
        write_secret(path_str, "FAVOR")?;

        assert_eq!(fs::read_to_string(&path)?, "FAVOR");
        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn interactive_stops_when_not_playing_again() -> anyhow::Result<()> {
        let secrets = Secrets::fixed("favor", WORD_SIZE)?;
        let input = "for\nskill\nfavor\nn\nrapid\n";

        assert_eq!(play_interactive_games(&secrets, None, input.as_bytes())?, 1);
        Ok(())
    }

    #[test]
    fn interactive_plays_again_after_win_and_loss() -> anyhow::Result<()> {
        let secrets = Secrets::fixed("favor", WORD_SIZE)?;
        let path = temp_path("wordle-secret-again");
        let input = "favor\ny\nskill\nskill\nskill\nskill\nskill\nskill\nY\nfavor\n";

        let num_games = play_interactive_games(&secrets, path.to_str(), input.as_bytes())?;

        assert_eq!(num_games, 3);
        assert_eq!(fs::read_to_string(&path)?, "FAVOR");
        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn interactive_new_game_writes_new_secret() -> anyhow::Result<()> {
        let secrets = Secrets::random(WordList::from_reader("skill\n".as_bytes(), WORD_SIZE)?)?;
        let path = temp_path("wordle-secret-random");

        play_interactive_games(&secrets, path.to_str(), "skill\n".as_bytes())?;

        assert_eq!(fs::read_to_string(&path)?, "SKILL");
        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn interactive_input_ends_mid_game() -> anyhow::Result<()> {
        let secrets = Secrets::fixed("favor", WORD_SIZE)?;

        assert!(play_interactive_games(&secrets, None, "skill\n".as_bytes()).is_err());
        Ok(())
    }
}

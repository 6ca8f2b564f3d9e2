//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: every line is either a command or a word.

use crate::dictionary::Dictionary;
use crate::round::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineInput {
    Quit,
    NewRound,
    Score,
    ResetScore,
    Words,
    Help,
    Word(String),
}

impl LineInput {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewRound,
            ":score" => Self::Score,
            ":reset" => Self::ResetScore,
            ":words" | ":w" => Self::Words,
            ":help" | ":h" | ":?" => Self::Help,
            _ => Self::Word(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Starts a round, then reads lines until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D, R, W>(session: &mut Session<D>, mut reader: R, mut out: W) -> Result<()>
where
    D: Dictionary,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Make words of at least {} letters from the root word.",
        session.rules().min_length
    )?;
    print_help(&mut out)?;

    session.new_round();
    print_root(&mut out, session)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match LineInput::parse(&line) {
            LineInput::Quit => break,
            LineInput::NewRound => {
                session.new_round();
                writeln!(out, "\n🔄 New round!")?;
                print_root(&mut out, session)?;
            }
            LineInput::Score => print_score(&mut out, session)?,
            LineInput::ResetScore => {
                session.reset_score();
                writeln!(out, "Score reset.")?;
                print_score(&mut out, session)?;
            }
            LineInput::Words => print_words(&mut out, session)?,
            LineInput::Help => print_help(&mut out)?,
            LineInput::Word(raw) => match session.submit(&raw) {
                Ok(Some(accepted)) => {
                    writeln!(
                        out,
                        "{} {} (+{})",
                        "✓".green().bold(),
                        accepted.text.bright_white().bold(),
                        accepted.score_delta
                    )?;
                    print_score(&mut out, session)?;
                }
                Ok(None) => {}
                Err(rejection) => {
                    writeln!(
                        out,
                        "{} {}: {}",
                        "✗".red().bold(),
                        rejection.title().red().bold(),
                        rejection.message()
                    )?;
                }
            },
        }
    }

    writeln!(
        out,
        "👋 Thanks for playing! Final score: {}",
        session.state().score()
    )?;
    Ok(())
}

fn print_root<D: Dictionary, W: Write>(out: &mut W, session: &Session<D>) -> Result<()> {
    writeln!(
        out,
        "Root word: {}\n",
        session.state().root().to_uppercase().bright_yellow().bold()
    )?;
    Ok(())
}

fn print_score<D: Dictionary, W: Write>(out: &mut W, session: &Session<D>) -> Result<()> {
    writeln!(out, "Score: {}", session.state().score())?;
    Ok(())
}

fn print_words<D: Dictionary, W: Write>(out: &mut W, session: &Session<D>) -> Result<()> {
    let state = session.state();
    if state.used_words().next().is_none() {
        writeln!(out, "No words yet.")?;
        return Ok(());
    }

    for word in state.used_words() {
        writeln!(out, "  {word:<12} {}", word.chars().count())?;
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Commands: ':new' new root word, ':words' your words, ':score', ':reset' score, ':quit'\n"
    )?;
    Ok(())
}

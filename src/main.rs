//! Word Scramble - CLI
//!
//! Find as many words as you can inside a scrambled root word. TUI and
//! line-mode play, plus commands for checking words and exploring root lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};
use word_scramble::{
    commands::{check_word, find_solutions, print_survey_statistics, run_simple, run_survey},
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    interactive::{App, run_tui},
    logging,
    output::{print_check_result, print_solutions_result},
    round::{DEFAULT_MIN_LENGTH, Rules, ScorePolicy, Session},
    wordlists::load_or_default,
};

/// Value of `--words`/`--dictionary` selecting the bundled list
const EMBEDDED: &str = "embedded";

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Word scramble game: spell words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = EMBEDDED)]
    dictionary: String,

    /// Language tag used for spell checking
    #[arg(long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Minimum number of letters a word needs
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Reject the root word itself as an answer
    #[arg(long, global = true)]
    forbid_root: bool,

    /// Start every round with a score of zero
    #[arg(long, global = true)]
    reset_score: bool,

    /// Seed for reproducible root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check whether a word would be accepted for a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,
    },

    /// List every valid word hidden in a root word
    Solutions {
        /// The root word
        root: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Count the solutions of every root word in the list
    Survey {
        /// Limit number of root words to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn rules(&self) -> Rules {
        Rules {
            min_length: self.min_length,
            language: self.language.clone(),
            allow_root_word: !self.forbid_root,
            score_policy: if self.reset_score {
                ScorePolicy::Reset
            } else {
                ScorePolicy::Persist
            },
        }
    }

    /// Log level used from startup on
    fn log_level(&self) -> LevelFilter {
        logging::level_for_verbosity(self.verbose)
    }

    /// Whether logging must stop once the TUI owns the screen
    ///
    /// Startup warnings such as a missing `-w` file are still printed first.
    fn quiet_tui(&self, command: &Commands) -> bool {
        matches!(command, Commands::Play) && self.log_file.is_none()
    }
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(choice: &str, language: &str) -> Result<WordListDictionary> {
    if choice == EMBEDDED {
        return Ok(WordListDictionary::embedded());
    }

    WordListDictionary::from_file(choice, language)
        .with_context(|| format!("Failed to load dictionary '{choice}'"))
}

/// Load the root words selected by the -w flag, falling back to the bundled list
fn load_roots(choice: &str) -> Vec<String> {
    let path = (choice != EMBEDDED).then(|| Path::new(choice));
    load_or_default(path)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    logging::init(cli.log_level(), cli.log_file.as_deref())?;
    let quiet_tui = cli.quiet_tui(&command);

    let rules = cli.rules();
    let dictionary = load_dictionary(&cli.dictionary, &rules.language)?;

    match command {
        Commands::Play => {
            let session = new_session(&cli, dictionary, rules);
            if quiet_tui {
                logging::silence_unless_requested();
            }
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = new_session(&cli, dictionary, rules);
            run_simple(&mut session, io::stdin().lock(), io::stdout().lock())
        }
        Commands::Check { root, word } => {
            let result = check_word(&root, &word, &dictionary, &rules);
            print_check_result(&result);
            Ok(())
        }
        Commands::Solutions { root, limit } => {
            let result = find_solutions(&root, &dictionary, &rules);
            print_solutions_result(&result, limit);
            Ok(())
        }
        Commands::Survey { limit } => {
            let roots = load_roots(&cli.words);
            let count = limit.unwrap_or(roots.len()).min(roots.len());
            println!("Surveying {count} root words...");
            let stats = run_survey(&roots, &dictionary, &rules, limit);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn new_session(
    cli: &Cli,
    dictionary: WordListDictionary,
    rules: Rules,
) -> Session<WordListDictionary> {
    let roots = load_roots(&cli.words);
    match cli.seed {
        Some(seed) => Session::with_seed(roots, dictionary, rules, seed),
        None => Session::new(roots, dictionary, rules),
    }
}

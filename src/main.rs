//! Mauka Lexicon - Main entrypoint.
//!
//! Loads configuration, builds a lexicon from the configured vocabulary source,
//! and answers lookups, prefix suggestions and corrections from the command line
//! or an interactive prompt.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mauka_lexicon_lib::config::engine::EngineConfig;
use mauka_lexicon_lib::config::source::SourceFormat;
use mauka_lexicon_lib::config::{ConfigLoader, LexiconConfig, LogConfig, Validate, ENV_PREFIX};
use mauka_lexicon_lib::error::{ErrorContext, ErrorReporter, TracingErrorReporter};
use mauka_lexicon_lib::{build_lexicon, Lexicon};

/// Command line arguments for the Mauka Lexicon.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Lexicon", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Vocabulary file, overrides `source.path`
    #[clap(short, long, value_parser)]
    source: Option<PathBuf>,

    /// Vocabulary format (auto, csv, tsv, json), overrides `source.format`
    #[clap(short, long, value_parser)]
    format: Option<SourceFormat>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Look a word up, suggesting corrections when it is missing
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Complete a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions
        #[clap(short, long, value_parser)]
        limit: Option<usize>,
    },

    /// Suggest corrections for a word
    Correct {
        /// Possibly misspelled word
        word: String,

        /// Maximum edit distance
        #[clap(short = 'd', long, value_parser)]
        max_distance: Option<usize>,

        /// Maximum number of corrections
        #[clap(short, long, value_parser)]
        limit: Option<usize>,
    },

    /// Answer queries read from standard input
    Repl,

    /// Print vocabulary statistics
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// A single query against the lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Query {
    Lookup(String),
    Suggest {
        prefix: String,
        limit: usize,
    },
    Correct {
        word: String,
        max_distance: usize,
        limit: usize,
    },
}

impl Query {
    /// Parses a prompt line: `?prefix` suggests, `~word` corrects, anything else
    /// is looked up. Blank lines yield `None`.
    fn parse(line: &str, engine: &EngineConfig) -> Option<Query> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some(prefix) = line.strip_prefix('?') {
            Some(Query::Suggest {
                prefix: prefix.trim().to_string(),
                limit: engine.max_suggestions,
            })
        } else if let Some(word) = line.strip_prefix('~') {
            Some(Query::Correct {
                word: word.trim().to_string(),
                max_distance: engine.max_distance,
                limit: engine.max_corrections,
            })
        } else {
            Some(Query::Lookup(line.to_string()))
        }
    }
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    };

    result.context("failed to set global tracing subscriber")
}

/// Builds the lexicon, reporting a load failure before returning it.
fn load_lexicon(config: &LexiconConfig) -> anyhow::Result<Lexicon> {
    let span = tracing::info_span!("load", source = ?config.source.path);
    let _enter = span.enter();

    build_lexicon(config).map_err(|error| {
        let message = error.to_string();
        TracingErrorReporter.report(
            ErrorContext::new(error, "source")
                .with_details(format!("format: {:?}", config.source.format))
                .with_span_trace(),
        );
        anyhow!(message)
    })
}

/// Answers one query, writing the result to `out`.
fn answer<W: Write>(
    query: &Query,
    lexicon: &Lexicon,
    engine: &EngineConfig,
    as_json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    match query {
        Query::Lookup(word) => {
            let result = lexicon.lookup(word);
            let did_you_mean = if result.found {
                Vec::new()
            } else {
                lexicon.correct(word, engine.max_distance, engine.max_corrections)
            };

            if as_json {
                let value = json!({
                    "word": word,
                    "found": result.found,
                    "definition": result.definition,
                    "did_you_mean": did_you_mean,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else if result.found && result.definition.is_empty() {
                writeln!(out, "{word}: (no definition)")?;
            } else if result.found {
                writeln!(out, "{word}: {}", result.definition)?;
            } else if did_you_mean.is_empty() {
                writeln!(out, "{word}: not found")?;
            } else {
                writeln!(
                    out,
                    "{word}: not found. Did you mean: {}?",
                    did_you_mean.join(", ")
                )?;
            }
        }
        Query::Suggest { prefix, limit } => {
            let suggestions = lexicon.suggest_prefix(prefix, *limit);
            if as_json {
                writeln!(out, "{}", serde_json::to_string_pretty(&suggestions)?)?;
            } else {
                for word in &suggestions {
                    writeln!(out, "{word}")?;
                }
            }
        }
        Query::Correct {
            word,
            max_distance,
            limit,
        } => {
            let corrections = lexicon.rank_corrections(word, *max_distance, *limit);
            if as_json {
                writeln!(out, "{}", serde_json::to_string_pretty(&corrections)?)?;
            } else {
                for correction in &corrections {
                    writeln!(out, "{}\t{}", correction.word, correction.distance)?;
                }
            }
        }
    }
    Ok(())
}

/// Reads queries from standard input until EOF or `:q`.
fn repl(lexicon: &Lexicon, engine: &EngineConfig, as_json: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "{} words loaded. ?prefix suggests, ~word corrects, :q quits",
        lexicon.len()
    )?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim() == ":q" {
            break;
        }

        if let Some(query) = Query::parse(&line, engine) {
            answer(&query, lexicon, engine, as_json, &mut out)?;
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = loader.load().context("failed to load configuration")?;
    init_logging(&config.log)?;

    if let Some(path) = args.source {
        config.source.path = Some(path);
    }
    if let Some(format) = args.format {
        config.source.format = format;
    }

    let engine = config.engine.clone();
    let query = match args.command {
        Command::Validate => {
            config.validate()?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            return Ok(());
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LexiconConfig::default())
                .context("failed to serialize config")?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            return Ok(());
        }
        Command::Repl => {
            let lexicon = load_lexicon(&config)?;
            return repl(&lexicon, &engine, args.json);
        }
        Command::Stats => {
            let lexicon = load_lexicon(&config)?;
            if args.json {
                let value = json!({
                    "words": lexicon.len(),
                    "nodes": lexicon.trie().node_count(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("words: {}", lexicon.len());
                println!("nodes: {}", lexicon.trie().node_count());
            }
            return Ok(());
        }
        Command::Lookup { word } => Query::Lookup(word),
        Command::Suggest { prefix, limit } => Query::Suggest {
            prefix,
            limit: limit.unwrap_or(engine.max_suggestions),
        },
        Command::Correct {
            word,
            max_distance,
            limit,
        } => Query::Correct {
            word,
            max_distance: max_distance.unwrap_or(engine.max_distance),
            limit: limit.unwrap_or(engine.max_corrections),
        },
    };

    let lexicon = load_lexicon(&config)?;
    let stdout = io::stdout();
    answer(&query, &lexicon, &engine, args.json, &mut stdout.lock())
}

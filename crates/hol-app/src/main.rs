use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hol_core::language::{Language, PhraseTranslator};
use hol_lang_klingon::KlingonProcessor;

pub mod logging;
pub mod profile;
pub mod render;

#[derive(Parser)]
#[command(name = "hol", about = "Dictionary-backed English / Klingon phrase translator")]
struct Cli {
    /// JSON config file; defaults to `.env` and HOL_* variables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra dictionary file merged over the configured ones
    #[arg(long = "dictionary", global = true)]
    dictionaries: Vec<String>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a phrase
    Translate {
        text: String,
        #[arg(long, default_value = "english")]
        from: String,
        #[arg(long, default_value = "klingon")]
        to: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Substring search over both languages and categories
    Search { query: String },
    /// List categories
    Categories,
    /// List entries in a category
    Category { name: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = profile::load_config(cli.config.as_deref())?;
    config.dictionary.additional_paths.extend(cli.dictionaries);

    let processor = KlingonProcessor::from_config(&config);
    tracing::debug!("Dictionary has {} entries", processor.dictionary().entry_count());

    match cli.command {
        Command::Translate { text, from, to, json } => {
            let result = processor.translate(&text, &from, &to);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let output_lang = from.parse::<Language>().ok().map(|l| l.other());
                print!("{}", render::translation(&result, processor.is_successful(&result), output_lang));
            }
        }
        Command::Search { query } => {
            print!("{}", render::entries(&processor.search(&query)));
        }
        Command::Categories => {
            for category in processor.categories() {
                println!("{category}");
            }
        }
        Command::Category { name } => {
            print!("{}", render::entries(&processor.by_category(&name)));
        }
    }

    Ok(())
}

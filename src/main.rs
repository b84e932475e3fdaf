use std::path::PathBuf;
use std::process;

use clap::Parser;

use rollpass::cache;
use rollpass::generator::{self, Error, GenerationRequest, Result};
use rollpass::settings;

#[derive(Parser)]
#[command(
    name = "rollpass",
    version,
    about = "Generate diceware passphrases from the EFF large wordlist"
)]
struct Cli {
    /// Minimum passphrase length in characters (at least 12).
    #[arg(short = 'l', long)]
    min_chars: Option<usize>,

    /// Number of passphrases to generate.
    #[arg(short = 'n', long)]
    quantity: Option<usize>,

    /// Title-case words, replace delimiters with symbols and inject a digit.
    #[arg(short, long, overrides_with = "no_complex")]
    complex: bool,

    /// Plain word output, even when the settings file turns complex mode on.
    #[arg(long, overrides_with = "complex")]
    no_complex: bool,

    /// Characters used to replace the delimiters in complex mode.
    #[arg(long)]
    complex_chars: Option<String>,

    /// Read the wordlist from this file instead of the cached one.
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Write a settings.toml with the defaults and exit.
    #[arg(long)]
    init_config: bool,
}

/// Either complexity flag on the command line beats the settings file.
fn resolve_complex(cli_complex: bool, cli_no_complex: bool, configured: bool) -> bool {
    if cli_complex {
        true
    } else if cli_no_complex {
        false
    } else {
        configured
    }
}

fn get_usize(config: &config::Config, key: &str) -> Result<usize> {
    usize::try_from(config.get_int(key)?)
        .map_err(|_| Error::InvalidConfiguration(format!("{key} must not be negative")))
}

fn run(cli: Cli) -> Result<()> {
    let home = std::env::var("HOME").ok().map(PathBuf::from);
    let xdg_config_home = std::env::var("XDG_CONFIG_HOME").ok().map(PathBuf::from);
    let xdg_cache_home = std::env::var("XDG_CACHE_HOME").ok().map(PathBuf::from);

    if cli.init_config {
        let location = settings::xdg_config_file_location(&home, &xdg_config_home)?;
        settings::write_default_settings(&location)?;
        println!("wrote {}", location.display());
        return Ok(());
    }

    let config = settings::read_config(&home, &xdg_config_home)?;

    let min_chars = match cli.min_chars {
        Some(min_chars) => min_chars,
        None => get_usize(&config, "min_chars")?,
    };
    let quantity = match cli.quantity {
        Some(quantity) => quantity,
        None => get_usize(&config, "quantity")?,
    };
    let complex = resolve_complex(cli.complex, cli.no_complex, config.get_bool("complex")?);
    let complex_chars = match cli.complex_chars {
        Some(complex_chars) => complex_chars,
        None => config.get_str("complex_chars")?,
    };

    // Validated before the wordlist is touched, so a bad request never
    // triggers a fetch.
    let request = GenerationRequest::new(min_chars, quantity, complex, &complex_chars)?;

    let wordlist_path = if let Some(path) = cli.wordlist {
        path
    } else {
        let path = match config.get_str("wordlist_path") {
            Ok(configured) => PathBuf::from(configured),
            Err(config::ConfigError::NotFound(_)) => {
                cache::default_wordlist_path(&home, &xdg_cache_home)?
            }
            Err(err) => return Err(err.into()),
        };
        cache::ensure_word_list(&config.get_str("wordlist_url")?, &path)?;
        path
    };
    let wordlist = cache::load_word_list(&wordlist_path)?;

    for passphrase in generator::generate_passphrases(&request, &wordlist)? {
        println!("{passphrase}");
    }

    Ok(())
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod cli_tests;

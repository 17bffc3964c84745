use clap::{Parser, ValueEnum};
use dictionary::reqwest::Url;
use dictionary::{DEFAULT_CONCURRENCY, RANDOM_WORD_API_URL, WIKTIONARY_URL};
use log::LevelFilter;

use crate::storage::DB_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Browse random words with their Wiktionary definitions.
#[derive(Parser, Debug)]
#[command(name = "definery", version)]
pub struct Config {
    /// SQLite database holding the last loaded batch
    #[arg(long, env = "DEFINERY_DATABASE_URL", default_value = DB_URL)]
    pub database_url: String,

    /// Base url of the random word service
    #[arg(long, env = "DEFINERY_RANDOM_WORDS_URL", default_value = RANDOM_WORD_API_URL)]
    pub random_words_url: Url,

    /// Base url of the Wiktionary instance
    #[arg(long, env = "DEFINERY_DEFINITIONS_URL", default_value = WIKTIONARY_URL)]
    pub definitions_url: Url,

    /// Language code of the first batch (en, es, it, de, fr, zh, pt-br)
    #[arg(short, long, env = "DEFINERY_LANGUAGE", default_value = "en")]
    pub language: String,

    /// Words requested per load
    #[arg(short, long, env = "DEFINERY_BATCH_SIZE", default_value_t = 10)]
    pub batch_size: usize,

    /// Definition lookups in flight at once
    #[arg(long, env = "DEFINERY_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Logging level, overridden per module by RUST_LOG
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn init_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level.into())
            .parse_default_env()
            .init();
    }
}

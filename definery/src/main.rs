use std::sync::Arc;

use clap::Parser;
use config::Config;
use dictionary::{
    Dictionary, DictionaryError, ExtractionError, LocalWordLoader, RemoteWithLocalFallbackLoader,
    Word,
};
use feed::{FeedError, LoaderFactory, WordFeed, SUPPORTED_LANGUAGES};
use storage::Storage;
use utilities::{confirm, input};

mod config;
mod feed;
mod storage;
mod utilities;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.init_logging();

    let storage = Storage::initialize(&config.database_url).await?;
    let dict = Arc::new(Dictionary::with_endpoints(
        config.random_words_url.clone(),
        config.definitions_url.clone(),
    ));
    let mut feed = WordFeed::new(&config.language, loader_factory(&config, &dict, storage))?;

    println!("Loading {} words...", feed.language());
    report(feed.refresh().await.map(|count| format!("Loaded {count} words.")));
    loop {
        let line = input(">> ")?;
        if line.is_empty() {
            break;
        }
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "quit" | "q" => {
                    break;
                }
                "refresh" | "r" => {
                    report(feed.refresh().await.map(|count| format!("Loaded {count} words.")));
                }
                "more" | "m" => {
                    report(feed.load_more().await.map(|count| format!("Added {count} new words.")));
                }
                "lang" | "language" => match command_parts.next() {
                    Some(code) => report(
                        feed.switch_language(code)
                            .await
                            .map(|count| format!("Switched to '{}', loaded {count} words.", feed.language())),
                    ),
                    None => println!(
                        "Current language is '{}'. Available: {}.",
                        feed.language(),
                        SUPPORTED_LANGUAGES.join(", ")
                    ),
                },
                "list" | "ls" => {
                    list_words(&feed);
                }
                "define" | "find" => {
                    let word = command_parts.collect::<Vec<&str>>().join(" ");
                    define_word(&dict, &mut feed, &word).await?;
                }
                "help" | "h" => {
                    print_help();
                }
                _ => {
                    println!("Unknown command {command}. Type 'help' for the list of commands.");
                }
            }
        }
    }
    Ok(())
}

/// Remote batches for the requested language, falling back to the last batch
/// saved in `storage`.
fn loader_factory(config: &Config, dict: &Arc<Dictionary>, storage: Storage) -> LoaderFactory {
    let dict = dict.clone();
    let local = Arc::new(LocalWordLoader::new(storage));
    let batch_size = config.batch_size;
    let concurrency = config.concurrency;
    Box::new(move |language| {
        let remote = dict
            .remote_loader(language, batch_size)
            .with_concurrency(concurrency);
        Box::new(RemoteWithLocalFallbackLoader::new(
            remote,
            local.clone(),
            local.clone(),
        ))
    })
}

fn report(result: Result<String, FeedError>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(FeedError::UnsupportedLanguage(code)) => {
            println!(
                "'{code}' is not available. Choose one of: {}.",
                SUPPORTED_LANGUAGES.join(", ")
            );
        }
        Err(error) => {
            eprintln!("Couldn't load words: {error}");
        }
    }
}

async fn define_word(dict: &Dictionary, feed: &mut WordFeed, word: &str) -> anyhow::Result<()> {
    if word.is_empty() {
        println!("Usage: define <word>");
        return Ok(());
    }
    match dict.get_definition(word, feed.language()).await {
        Ok(word) => {
            print_definition(&word);
            if confirm("Add it to the list?")? {
                if feed.insert(word) {
                    println!("Added the word to the list.");
                } else {
                    println!("This word is already in the list.");
                }
            }
        }
        Err(DictionaryError::Extraction(ExtractionError::NoDefinitionFound)) => {
            println!("The word has no definition in this language.");
        }
        Err(error) if error.is_not_found() => {
            println!("Couldn't find the word you were looking for.");
        }
        Err(other) => {
            println!("Encountered an error while searching for the word definition: {other}");
        }
    }
    Ok(())
}

fn list_words(feed: &WordFeed) {
    if feed.words().is_empty() {
        println!("The list is empty. Try 'refresh' or 'more'.");
        return;
    }
    for (index, word) in feed.words().iter().enumerate() {
        if index != 0 {
            println!("----------------------------------------");
        }
        print_definition(word);
    }
    println!(
        "{} words, parts of speech: {}",
        feed.words().len(),
        feed.parts_of_speech().join(", ")
    );
}

fn print_definition(word: &Word) {
    match &word.phonetic {
        Some(phonetic) => println!("Showing definition for '{}' {phonetic}:", word.text),
        None => println!("Showing definition for '{}':", word.text),
    }
    for meaning in &word.meanings {
        println!("    {}:", meaning.part_of_speech);
        println!("        {}", meaning.definition);
        if let Some(example) = &meaning.example {
            println!("          example: {example}");
        }
    }
}

fn print_help() {
    println!("refresh, r        load a new batch of words");
    println!("more, m           append more words to the list");
    println!("lang <code>       switch language ({})", SUPPORTED_LANGUAGES.join(", "));
    println!("list, ls          show the words in the list");
    println!("define <word>     look up a single word");
    println!("quit, exit, q     leave");
}

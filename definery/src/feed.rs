use std::collections::HashSet;

use dictionary::{DictionaryError, Word, WordLoader};
use log::{debug, info};
use thiserror::Error;

/// Languages offered by the language picker.
pub const SUPPORTED_LANGUAGES: [&str; 7] = ["en", "es", "it", "de", "fr", "zh", "pt-br"];

/// Builds the loader used for a given language code.
pub type LoaderFactory = Box<dyn Fn(&str) -> Box<dyn WordLoader> + Send + Sync>;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("unsupported language '{0}', expected one of: {}", SUPPORTED_LANGUAGES.join(", "))]
    UnsupportedLanguage(String),
    #[error(transparent)]
    Load(#[from] DictionaryError),
}

/// The list of words on screen and the loader feeding it.
pub struct WordFeed {
    language: String,
    words: Vec<Word>,
    loader: Box<dyn WordLoader>,
    factory: LoaderFactory,
}

impl WordFeed {
    pub fn new(language: &str, factory: LoaderFactory) -> Result<Self, FeedError> {
        let language = supported(language)?;
        Ok(Self {
            loader: factory(&language),
            language,
            words: Vec::new(),
            factory,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Replaces the list with a fresh batch. The list is left alone on error.
    pub async fn refresh(&mut self) -> Result<usize, FeedError> {
        self.words = self.loader.load().await?;
        info!("loaded {} {} words", self.words.len(), self.language);
        Ok(self.words.len())
    }

    /// Appends a fresh batch, skipping words already in the list.
    pub async fn load_more(&mut self) -> Result<usize, FeedError> {
        let batch = self.loader.load().await?;
        let received = batch.len();
        let mut added = 0;
        for word in batch {
            if self.insert(word) {
                added += 1;
            }
        }
        debug!("{added} of {received} loaded words were new");
        Ok(added)
    }

    /// Switches to `code` and loads its first batch. On failure the feed keeps
    /// its previous language and words.
    pub async fn switch_language(&mut self, code: &str) -> Result<usize, FeedError> {
        let language = supported(code)?;
        let loader = (self.factory)(&language);
        let words = loader.load().await?;
        info!("switched from {} to {language}", self.language);
        self.language = language;
        self.loader = loader;
        self.words = words;
        Ok(self.words.len())
    }

    /// Adds `word` unless a word with the same text is already listed.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.words.iter().any(|listed| listed.text == word.text) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Parts of speech across every listed word, in first-seen order.
    pub fn parts_of_speech(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.words
            .iter()
            .flat_map(|word| word.all_parts_of_speech())
            .filter(|part| seen.insert(*part))
            .collect()
    }
}

fn supported(code: &str) -> Result<String, FeedError> {
    let code = code.trim().to_lowercase();
    if SUPPORTED_LANGUAGES.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(FeedError::UnsupportedLanguage(code))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use dictionary::Meaning;

    use super::*;

    /// Hands out the queued batches per language, one per load.
    #[derive(Default)]
    struct Batches {
        queued: Mutex<Vec<(String, Result<Vec<Word>, String>)>>,
        requested: Mutex<Vec<String>>,
    }

    impl Batches {
        fn push(&self, language: &str, batch: Result<Vec<&str>, &str>) {
            let batch = batch
                .map(|texts| texts.into_iter().map(|text| word(text, language)).collect())
                .map_err(str::to_owned);
            self.queued.lock().unwrap().push((language.to_owned(), batch));
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    struct BatchLoader {
        language: String,
        batches: Arc<Batches>,
    }

    #[async_trait]
    impl WordLoader for BatchLoader {
        async fn load(&self) -> Result<Vec<Word>, DictionaryError> {
            self.batches.requested.lock().unwrap().push(self.language.clone());
            let mut queued = self.batches.queued.lock().unwrap();
            let position = queued
                .iter()
                .position(|(language, _)| *language == self.language)
                .ok_or_else(|| DictionaryError::Connectivity("nothing queued".to_owned()))?;
            queued.remove(position).1.map_err(DictionaryError::Connectivity)
        }
    }

    fn word(text: &str, language: &str) -> Word {
        Word::new(text, language, None, vec![Meaning::new("Noun", "a thing", None)])
    }

    fn texts(feed: &WordFeed) -> Vec<&str> {
        feed.words().iter().map(|word| word.text.as_str()).collect()
    }

    fn feed(language: &str) -> (WordFeed, Arc<Batches>) {
        let batches = Arc::new(Batches::default());
        let shared = batches.clone();
        let factory: LoaderFactory = Box::new(move |language| {
            Box::new(BatchLoader {
                language: language.to_owned(),
                batches: shared.clone(),
            })
        });
        (WordFeed::new(language, factory).unwrap(), batches)
    }

    #[tokio::test]
    async fn refresh_replaces_the_list() {
        let (mut feed, batches) = feed("en");
        batches.push("en", Ok(vec!["one", "two"]));
        batches.push("en", Ok(vec!["three"]));

        assert_eq!(feed.refresh().await.unwrap(), 2);
        assert_eq!(feed.refresh().await.unwrap(), 1);
        assert_eq!(texts(&feed), vec!["three"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_the_list() {
        let (mut feed, batches) = feed("en");
        batches.push("en", Ok(vec!["one"]));
        batches.push("en", Err("offline"));

        feed.refresh().await.unwrap();
        assert!(matches!(feed.refresh().await, Err(FeedError::Load(_))));
        assert_eq!(texts(&feed), vec!["one"]);
    }

    #[tokio::test]
    async fn load_more_appends_only_new_words() {
        let (mut feed, batches) = feed("en");
        batches.push("en", Ok(vec!["one", "two"]));
        batches.push("en", Ok(vec!["two", "three", "three"]));

        feed.refresh().await.unwrap();
        assert_eq!(feed.load_more().await.unwrap(), 1);
        assert_eq!(texts(&feed), vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn switch_language_loads_new_batch() {
        let (mut feed, batches) = feed("en");
        batches.push("en", Ok(vec!["one"]));
        batches.push("es", Ok(vec!["uno", "dos"]));

        feed.refresh().await.unwrap();
        assert_eq!(feed.switch_language(" ES ").await.unwrap(), 2);
        assert_eq!(feed.language(), "es");
        assert_eq!(texts(&feed), vec!["uno", "dos"]);
        assert_eq!(batches.requested(), vec!["en", "es"]);
    }

    #[tokio::test]
    async fn unsupported_language_is_rejected_without_loading() {
        let (mut feed, batches) = feed("en");

        match feed.switch_language("xx").await {
            Err(FeedError::UnsupportedLanguage(code)) => assert_eq!(code, "xx"),
            other => panic!("expected unsupported language, got {other:?}"),
        }
        assert_eq!(feed.language(), "en");
        assert!(batches.requested().is_empty());
    }

    #[tokio::test]
    async fn failed_switch_keeps_previous_language() {
        let (mut feed, batches) = feed("en");
        batches.push("en", Ok(vec!["one"]));
        batches.push("en", Ok(vec!["two"]));
        batches.push("fr", Err("offline"));

        feed.refresh().await.unwrap();
        assert!(feed.switch_language("fr").await.is_err());
        assert_eq!(feed.language(), "en");
        assert_eq!(texts(&feed), vec!["one"]);

        feed.load_more().await.unwrap();
        assert_eq!(texts(&feed), vec!["one", "two"]);
    }

    #[test]
    fn new_rejects_unsupported_language() {
        let factory: LoaderFactory = Box::new(|_| unreachable!("no loader for rejected languages"));

        assert!(matches!(
            WordFeed::new("klingon", factory),
            Err(FeedError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn insert_skips_listed_text() {
        let (mut feed, _) = feed("en");

        assert!(feed.insert(word("one", "en")));
        assert!(!feed.insert(word("one", "en")));
        assert_eq!(feed.words().len(), 1);
    }

    #[test]
    fn parts_of_speech_are_unique() {
        let (mut feed, _) = feed("en");
        feed.insert(Word::new(
            "run",
            "en",
            None,
            vec![
                Meaning::new("Noun", "An act of running.", None),
                Meaning::new("Verb", "To move swiftly.", None),
            ],
        ));
        feed.insert(word("dog", "en"));

        assert_eq!(feed.parts_of_speech(), vec!["Noun", "Verb"]);
    }
}

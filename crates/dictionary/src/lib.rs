use reqwest::Url;

mod dictionary;
mod endpoints;
mod error;
mod http;
mod loader;
mod random_word_api;
pub mod wikitext;

pub use dictionary::{Meaning, Word};
pub use endpoints::{WordsEndpoint, RANDOM_WORD_API_URL, WIKTIONARY_URL};
pub use error::{DictionaryError, ExtractionError, Result};
pub use http::{HttpClient, HttpResponse};
pub use loader::{
    LocalWordLoader, RemoteWithLocalFallbackLoader, RemoteWordLoader, WordCache, WordLoader,
    WordStore, DEFAULT_CONCURRENCY,
};
pub use reqwest;

pub struct Dictionary {
    client: reqwest::Client,
    random_words_url: Url,
    definitions_url: Url,
}

impl Dictionary {
    pub fn with_endpoints(random_words_url: Url, definitions_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            random_words_url,
            definitions_url,
        }
    }

    pub async fn get_definition(&self, word: &str, language: &str) -> Result<Word> {
        let url = WordsEndpoint::Definition { word }.url(&self.definitions_url);
        let res = HttpClient::get(&self.client, &url).await?;
        Ok(wikitext::extract(&res.body, res.status, word, language)?)
    }

    /// A loader fetching `count` random words in `language` per load.
    pub fn remote_loader(&self, language: &str, count: usize) -> RemoteWordLoader<reqwest::Client> {
        RemoteWordLoader::new(
            self.client.clone(),
            self.random_words_url.clone(),
            self.definitions_url.clone(),
            language,
            count,
        )
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt};
use reqwest::Url;

use crate::endpoints::WordsEndpoint;
use crate::http::HttpClient;
use crate::random_word_api::get_random_words;
use crate::{wikitext, DictionaryError, Word};

/// Definition requests in flight at once for a single batch.
pub const DEFAULT_CONCURRENCY: usize = 8;

#[async_trait]
pub trait WordLoader: Send + Sync {
    async fn load(&self) -> Result<Vec<Word>, DictionaryError>;
}

#[async_trait]
pub trait WordCache: Send + Sync {
    async fn save(&self, words: &[Word]) -> Result<(), DictionaryError>;
}

/// Persistence backend behind [`LocalWordLoader`].
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn delete_cached_words(&self) -> Result<(), DictionaryError>;
    async fn insert_cache(&self, words: &[Word]) -> Result<(), DictionaryError>;
    async fn retrieve_words(&self) -> Result<Vec<Word>, DictionaryError>;
}

#[async_trait]
impl<T: WordLoader + ?Sized> WordLoader for Arc<T> {
    async fn load(&self) -> Result<Vec<Word>, DictionaryError> {
        (**self).load().await
    }
}

#[async_trait]
impl<T: WordLoader + ?Sized> WordLoader for Box<T> {
    async fn load(&self) -> Result<Vec<Word>, DictionaryError> {
        (**self).load().await
    }
}

#[async_trait]
impl<T: WordCache + ?Sized> WordCache for Arc<T> {
    async fn save(&self, words: &[Word]) -> Result<(), DictionaryError> {
        (**self).save(words).await
    }
}

/// Fetches a batch of random words and looks each one up concurrently.
///
/// Words whose definition cannot be fetched or extracted are dropped from the
/// batch; only a failure to get the word list itself fails the load.
pub struct RemoteWordLoader<C> {
    client: C,
    random_words_base_url: Url,
    definition_base_url: Url,
    language: String,
    count: usize,
    concurrency: usize,
}

impl<C: HttpClient> RemoteWordLoader<C> {
    pub fn new(
        client: C,
        random_words_base_url: Url,
        definition_base_url: Url,
        language: impl Into<String>,
        count: usize,
    ) -> Self {
        Self {
            client,
            random_words_base_url,
            definition_base_url,
            language: language.into(),
            count,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    async fn define(&self, word: &str) -> Result<Word, DictionaryError> {
        let url = WordsEndpoint::Definition { word }.url(&self.definition_base_url);
        let res = self.client.get(&url).await?;
        Ok(wikitext::extract(&res.body, res.status, word, &self.language)?)
    }

    async fn lookup(&self, text: String) -> Option<Word> {
        match self.define(&text).await {
            Ok(word) => Some(word),
            Err(error) => {
                log::debug!("dropping {text:?}: {error}");
                None
            }
        }
    }
}

#[async_trait]
impl<C: HttpClient> WordLoader for RemoteWordLoader<C> {
    async fn load(&self) -> Result<Vec<Word>, DictionaryError> {
        let texts = get_random_words(
            &self.client,
            &self.random_words_base_url,
            self.count,
            &self.language,
        )
        .await?;
        log::debug!("looking up {} {} words", texts.len(), self.language);

        let lookups = texts.into_iter().map(|text| self.lookup(text));
        let words: Vec<Word> = stream::iter(lookups)
            .buffer_unordered(self.concurrency)
            .filter_map(future::ready)
            .collect()
            .await;
        Ok(words)
    }
}

/// Reads and replaces the cached batch held by a [`WordStore`].
pub struct LocalWordLoader<S> {
    store: S,
}

impl<S: WordStore> LocalWordLoader<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: WordStore> WordLoader for LocalWordLoader<S> {
    async fn load(&self) -> Result<Vec<Word>, DictionaryError> {
        self.store.retrieve_words().await
    }
}

#[async_trait]
impl<S: WordStore> WordCache for LocalWordLoader<S> {
    async fn save(&self, words: &[Word]) -> Result<(), DictionaryError> {
        self.store.delete_cached_words().await?;
        self.store.insert_cache(words).await
    }
}

/// Serves remote words and caches them, falling back to the local copy when
/// the remote load fails.
pub struct RemoteWithLocalFallbackLoader<R, L, C> {
    remote: R,
    local: L,
    cache: C,
}

impl<R: WordLoader, L: WordLoader, C: WordCache> RemoteWithLocalFallbackLoader<R, L, C> {
    pub fn new(remote: R, local: L, cache: C) -> Self {
        Self {
            remote,
            local,
            cache,
        }
    }
}

#[async_trait]
impl<R: WordLoader, L: WordLoader, C: WordCache> WordLoader for RemoteWithLocalFallbackLoader<R, L, C> {
    async fn load(&self) -> Result<Vec<Word>, DictionaryError> {
        match self.remote.load().await {
            Ok(words) => {
                if let Err(error) = self.cache.save(&words).await {
                    log::warn!("failed to cache {} words: {error}", words.len());
                }
                Ok(words)
            }
            Err(error) => {
                log::warn!("remote load failed, using cached words: {error}");
                self.local.load().await
            }
        }
    }
}

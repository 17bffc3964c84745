use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use dictionary::{DictionaryError, Meaning, Word, WordStore};
use sqlx::{
    migrate::MigrateDatabase, query, query_as, sqlite::SqlitePoolOptions, FromRow, Pool, Sqlite,
};
use uuid::Uuid;

pub const DB_URL: &str = "sqlite://definery.db";

#[derive(Debug, FromRow)]
struct WordRow {
    id: String,
    text: String,
    language: String,
    phonetic: Option<String>,
}

#[derive(Debug, FromRow)]
struct MeaningRow {
    word_id: String,
    part_of_speech: String,
    definition: String,
    example: Option<String>,
}

/// SQLite copy of the most recently loaded batch of words.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn initialize(url: &str) -> sqlx::Result<Self> {
        let in_memory = url.contains(":memory:");
        if !in_memory && !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?;
        }
        // every in-memory connection is its own database
        let options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = options.connect(url).await?;
        sqlx::migrate!().run(&pool).await?;
        Ok(Self { pool })
    }
}

impl Storage {
    pub async fn delete_words(&self) -> sqlx::Result<()> {
        let mut tx = self.pool.begin().await?;
        query("DELETE FROM meanings").execute(&mut *tx).await?;
        query("DELETE FROM words").execute(&mut *tx).await?;
        tx.commit().await
    }

    pub async fn insert_words(&self, words: &[Word]) -> sqlx::Result<()> {
        let mut tx = self.pool.begin().await?;
        for (position, word) in words.iter().enumerate() {
            let id = word.id.to_string();
            query("INSERT INTO words(id, text, language, phonetic, position) VALUES(?, ?, ?, ?, ?)")
                .bind(id.as_str())
                .bind(word.text.as_str())
                .bind(word.language.as_str())
                .bind(word.phonetic.as_deref())
                .bind(position as i64)
                .execute(&mut *tx)
                .await?;
            for (position, meaning) in word.meanings.iter().enumerate() {
                query(
                    "INSERT INTO meanings(word_id, position, part_of_speech, definition, example) VALUES(?, ?, ?, ?, ?)",
                )
                .bind(id.as_str())
                .bind(position as i64)
                .bind(meaning.part_of_speech.as_str())
                .bind(meaning.definition.as_str())
                .bind(meaning.example.as_deref())
                .execute(&mut *tx)
                .await?;
            }
        }
        tx.commit().await
    }

    /// Words in insertion order, each with its meanings in heading order.
    pub async fn select_words(&self) -> sqlx::Result<Vec<Word>> {
        let words: Vec<WordRow> =
            query_as("SELECT id, text, language, phonetic FROM words ORDER BY position")
                .fetch_all(&self.pool)
                .await?;
        let rows: Vec<MeaningRow> = query_as(
            "SELECT word_id, part_of_speech, definition, example FROM meanings ORDER BY word_id, position",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut meanings: HashMap<String, Vec<Meaning>> = HashMap::new();
        for row in rows {
            meanings.entry(row.word_id).or_default().push(Meaning {
                part_of_speech: row.part_of_speech,
                definition: row.definition,
                example: row.example,
            });
        }

        words
            .into_iter()
            .map(|row| -> sqlx::Result<Word> {
                let id = Uuid::parse_str(&row.id).map_err(|error| sqlx::Error::Decode(Box::new(error)))?;
                Ok(Word {
                    id,
                    meanings: meanings.remove(&row.id).unwrap_or_default(),
                    text: row.text,
                    language: row.language,
                    phonetic: row.phonetic,
                })
            })
            .collect()
    }
}

#[async_trait]
impl WordStore for Storage {
    async fn delete_cached_words(&self) -> Result<(), DictionaryError> {
        self.delete_words().await.map_err(DictionaryError::cache)
    }

    async fn insert_cache(&self, words: &[Word]) -> Result<(), DictionaryError> {
        self.insert_words(words).await.map_err(DictionaryError::cache)
    }

    async fn retrieve_words(&self) -> Result<Vec<Word>, DictionaryError> {
        self.select_words().await.map_err(DictionaryError::cache)
    }
}

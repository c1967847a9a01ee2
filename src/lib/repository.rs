use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::errors::{Error, Result};
use super::supabase::Supabase;

const WORD_BANKS: &str = "word_banks";
const WORDS: &str = "words";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewWordBank {
    pub user_id: i64,
    pub name: String,
    pub is_selected: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WordBank {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub is_selected: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewWord {
    pub word_bank_id: i64,
    pub word: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Word {
    pub word_bank_id: i64,
    pub word: String,
}

/// Storage for word banks and their words.
#[async_trait]
pub trait WordBankStore {
    async fn create_word_bank(&self, bank: &NewWordBank) -> Result<WordBank>;

    /// Returns the rows the store reports as inserted, which may be fewer than given.
    async fn insert_words(&self, words: &[NewWord]) -> Result<Vec<Word>>;
}

#[async_trait]
impl WordBankStore for Supabase {
    async fn create_word_bank(&self, bank: &NewWordBank) -> Result<WordBank> {
        self.insert::<_, WordBank>(WORD_BANKS, bank)
            .await?
            .into_iter()
            .next()
            .ok_or(Error::MissingGeneratedId)
    }

    async fn insert_words(&self, words: &[NewWord]) -> Result<Vec<Word>> {
        self.insert(WORDS, words).await
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeedReport {
    pub word_bank_id: i64,
    pub inserted: usize,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created word bank with ID: {}", self.word_bank_id)?;
        write!(f, "Inserted {} words into the words table", self.inserted)
    }
}

/// Creates the word bank, then inserts all `words` under it in one request.
///
/// The two inserts are independent: if the second fails the word bank stays.
pub async fn seed<S, I>(store: &S, bank: &NewWordBank, words: I) -> Result<SeedReport>
where
    S: WordBankStore + Sync + ?Sized,
    I: IntoIterator<Item = String>,
{
    let created = store.create_word_bank(bank).await?;
    info!(
        "Created word bank `{}` with id {} for user {} (selected: {})",
        created.name, created.id, created.user_id, created.is_selected
    );

    let rows: Vec<NewWord> = words
        .into_iter()
        .map(|word| NewWord { word_bank_id: created.id, word })
        .collect();
    debug!("Inserting {} words", rows.len());
    let inserted = store.insert_words(&rows).await?;
    info!("Service reported {} of {} words inserted", inserted.len(), rows.len());
    for word in inserted.iter().filter(|w| w.word_bank_id != created.id) {
        warn!("Word `{}` came back tagged with word bank {}", word.word, word.word_bank_id);
    }

    Ok(SeedReport {
        word_bank_id: created.id,
        inserted: inserted.len(),
    })
}

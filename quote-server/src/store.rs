use quote_core::seed::SeedEntry;
use rand::Rng;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("author name is empty")]
    EmptyAuthor,

    #[error("quote for author {0:?} is empty")]
    EmptyQuote(String),

    #[error("quote store is empty")]
    Empty,
}

/// Автор и его цитаты. Список цитат никогда не пуст.
#[derive(Debug, Clone)]
pub struct AuthorQuotes {
    name: String,
    quotes: Vec<String>,
}

impl AuthorQuotes {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    /// Равномерно выбирает одну цитату
    pub fn pick_random_quote<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let i = rng.random_range(0..self.quotes.len());
        &self.quotes[i]
    }
}

/// Хранилище цитат: автор -> упорядоченный список цитат.
///
/// Заполняется один раз через [`QuoteStoreBuilder`] и дальше только читается,
/// поэтому разделяется между запросами через `Arc` без блокировок.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    /// порядок вставки; случайный автор выбирается индексом в этом векторе
    entries: Vec<AuthorQuotes>,
    index: HashMap<String, usize>,
}

impl QuoteStore {
    pub fn builder() -> QuoteStoreBuilder {
        QuoteStoreBuilder::default()
    }

    /// Собирает хранилище из записей seed-файла
    pub fn from_seed(entries: impl IntoIterator<Item = SeedEntry>) -> Result<Self, StoreError> {
        let mut b = Self::builder();
        for e in entries {
            b.insert(e.author, e.quote)?;
        }
        b.build()
    }

    /// Точный (с учётом регистра) поиск автора
    pub fn lookup(&self, author: &str) -> Option<&AuthorQuotes> {
        self.index.get(author).map(|&i| &self.entries[i])
    }

    /// Равномерно выбирает автора
    pub fn pick_random_author<R: Rng + ?Sized>(&self, rng: &mut R) -> &AuthorQuotes {
        let i = rng.random_range(0..self.entries.len());
        &self.entries[i]
    }

    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// число авторов
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct QuoteStoreBuilder {
    entries: Vec<AuthorQuotes>,
    index: HashMap<String, usize>,
}

impl QuoteStoreBuilder {
    pub fn insert(
        &mut self,
        author: impl Into<String>,
        quote: impl Into<String>,
    ) -> Result<&mut Self, StoreError> {
        let author = author.into();
        let quote = quote.into();

        if author.is_empty() {
            return Err(StoreError::EmptyAuthor);
        }
        if quote.is_empty() {
            return Err(StoreError::EmptyQuote(author));
        }

        match self.index.entry(author) {
            Entry::Occupied(e) => self.entries[*e.get()].quotes.push(quote),
            Entry::Vacant(e) => {
                self.entries.push(AuthorQuotes {
                    name: e.key().clone(),
                    quotes: vec![quote],
                });
                e.insert(self.entries.len() - 1);
            }
        }

        Ok(self)
    }

    pub fn build(self) -> Result<QuoteStore, StoreError> {
        if self.entries.is_empty() {
            return Err(StoreError::Empty);
        }

        Ok(QuoteStore {
            entries: self.entries,
            index: self.index,
        })
    }
}

#[cfg(test)]
pub(crate) fn fixture_store() -> QuoteStore {
    let mut b = QuoteStore::builder();
    for q in ["Q1", "Q2", "Q3"] {
        b.insert("Mark Twain", q).unwrap();
    }
    b.insert("Ben Franklin", "Q4").unwrap();
    b.build().unwrap()
}

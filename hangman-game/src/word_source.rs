use crate::{normalize::normalize, word::Word, word_list::WordList};
use async_trait::async_trait;
use chrono::NaiveDate;
use hangman_data::{first_definition, Category, DefinitionResponse, RandomWordResponse};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const DEFINITION_UNAVAILABLE: &str = "definition unavailable";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("word source unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Unavailable(e.to_string())
    }
}

#[async_trait]
pub trait WordService {
    async fn random_word(&self) -> Result<String, SourceError>;

    /// `Ok(None)` if the dictionary has no entry for `word`
    async fn definition(&self, word: &str) -> Result<Option<String>, SourceError>;
}

fn parse_random_word(body: &str) -> Result<String, SourceError> {
    let res: RandomWordResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::Unavailable(format!("malformed random word response: {e}")))?;
    usable_word(&res.word)
}

/// Uppercased, or `Unavailable` if there is nothing to guess in it
fn usable_word(word: &str) -> Result<String, SourceError> {
    Word::new(word)
        .map(|w| w.target())
        .map_err(|_| SourceError::Unavailable(format!("unusable word {word:?}")))
}

/// HTTP client of a dicionario-aberto compatible API
#[derive(Clone, Debug)]
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WordService for DictionaryClient {
    async fn random_word(&self) -> Result<String, SourceError> {
        let body = self
            .client
            .get(format!("{}/random", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_random_word(&body)
    }

    async fn definition(&self, word: &str) -> Result<Option<String>, SourceError> {
        let res = self
            .client
            .get(format!("{}/word/{}", self.base_url, word))
            .send()
            .await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let res: DefinitionResponse = res.error_for_status()?.json().await?;
        Ok(first_definition(&res).map(|d| d.to_string()))
    }
}

#[derive(Clone, Debug)]
pub struct WordSource<W> {
    words: WordList,
    service: W,
}

impl<W: WordService> WordSource<W> {
    pub fn new(words: WordList, service: W) -> Self {
        Self { words, service }
    }

    pub fn daily_word(&self, category: Category, date: NaiveDate) -> String {
        self.words.daily_word(category, date)
    }

    pub async fn random_word(&self) -> Result<String, SourceError> {
        match self
            .service
            .random_word()
            .await
            .and_then(|word| usable_word(&word))
        {
            Ok(word) => {
                info!("fetched random word: {word}");
                Ok(word)
            }
            Err(e) => {
                warn!("failed to fetch random word: {e}");
                Err(e)
            }
        }
    }

    /// Tries `word` as is, then without accents. Never fails.
    pub async fn definition_for(&self, word: &str) -> String {
        let plain = word.to_lowercase();
        let stripped = normalize(word).to_lowercase();
        let mut candidates = vec![plain];
        if stripped != candidates[0] {
            candidates.push(stripped);
        }

        for candidate in candidates {
            match self.service.definition(&candidate).await {
                Ok(Some(definition)) if !definition.trim().is_empty() => return definition,
                Ok(_) => debug!("no definition for {candidate}"),
                Err(e) => warn!("failed to look up {candidate}: {e}"),
            }
        }
        DEFINITION_UNAVAILABLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedService;

    #[tokio::test]
    async fn random_word_passes_through() {
        let source = WordSource::new(WordList::builtin(), ScriptedService::with_words(["SAUDADE"]));
        assert_eq!(source.random_word().await.unwrap(), "SAUDADE");
        assert!(matches!(
            source.random_word().await,
            Err(SourceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn random_word_without_letters_is_unavailable() {
        let source = WordSource::new(WordList::builtin(), ScriptedService::with_words(["-", " limão "]));
        assert!(matches!(
            source.random_word().await,
            Err(SourceError::Unavailable(_))
        ));
        assert_eq!(source.random_word().await.unwrap(), "LIMÃO");
    }

    #[test]
    fn random_word_response() {
        assert_eq!(parse_random_word(r#"{"word":"  coração "}"#).unwrap(), "CORAÇÃO");
        assert_eq!(parse_random_word(r#"{"word":"pé-de-moleque"}"#).unwrap(), "PÉ-DE-MOLEQUE");
        for body in [
            r#"{"word":""}"#,
            r#"{"word":"   "}"#,
            r#"{"word":"-"}"#,
            r#"{"word":42}"#,
            r#"{"palavra":"uva"}"#,
            "<html>",
        ] {
            assert!(
                matches!(parse_random_word(body), Err(SourceError::Unavailable(_))),
                "{body} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn definition_falls_back_to_stripped_word() {
        let service = ScriptedService::default().with_definition("limao", "Fruto ácido.");
        let source = WordSource::new(WordList::builtin(), service);
        assert_eq!(source.definition_for("LIMÃO").await, "Fruto ácido.");
        assert_eq!(
            source.service.lookups(),
            vec!["limão".to_string(), "limao".to_string()]
        );
    }

    #[tokio::test]
    async fn definition_unavailable() {
        let service = ScriptedService::default().with_definition("uva", "  ");
        let source = WordSource::new(WordList::builtin(), service);
        assert_eq!(source.definition_for("UVA").await, DEFINITION_UNAVAILABLE);
        // no accents, so only one lookup
        assert_eq!(source.service.lookups(), vec!["uva".to_string()]);
    }

    #[test]
    fn client_trims_base_url() {
        let client =
            DictionaryClient::new("https://api.dicionario-aberto.net/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.base_url, "https://api.dicionario-aberto.net");
    }
}

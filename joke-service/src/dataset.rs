//! Dataset backend: serves jokes from a local file, one joke per non-empty line (`\n` escapes allowed).
//!
//! An empty prompt rotates through the dataset. A prompt picks the next joke mentioning one of its
//! words (3+ characters, case-insensitive) and falls back to rotation. Grades are tallied in memory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::backend::JokeBackend;
use crate::error::{JokeError, Result};
use crate::joke::{FeedbackEvent, Joke, Polarity};

const MIN_WORD_LEN: usize = 3;

/// Positive and negative grade counts for one joke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeTally {
    pub positive: u64,
    pub negative: u64,
}

pub struct DatasetJokeBackend {
    tag: String,
    jokes: Vec<String>,
    cursor: AtomicUsize,
    tallies: Mutex<HashMap<String, GradeTally>>,
}

/// Keeps ids free of the rating separator and the A/B tag delimiter.
fn sanitize_tag(raw: &str) -> String {
    let tag: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if tag.is_empty() {
        "dataset".to_string()
    } else {
        tag
    }
}

fn parse_jokes(content: &str, max_len: usize) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.replace("\\n", "\n"))
        .filter(|joke| joke.chars().count() <= max_len)
        .collect()
}

impl DatasetJokeBackend {
    /// Loads `path`; jokes longer than `max_len` characters are skipped. The id tag is the file stem.
    pub fn from_path(path: impl AsRef<Path>, max_len: usize) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let backend = Self::from_jokes(&stem, parse_jokes(&content, max_len));
        info!(path = %path.display(), tag = %backend.tag, jokes = backend.len(), "Loaded joke dataset");
        Ok(backend)
    }

    pub fn from_jokes(tag: &str, jokes: Vec<String>) -> Self {
        Self {
            tag: sanitize_tag(tag),
            jokes,
            cursor: AtomicUsize::new(0),
            tallies: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Grades recorded so far for `joke_id`.
    pub async fn tally(&self, joke_id: &str) -> GradeTally {
        self.tallies
            .lock()
            .await
            .get(joke_id)
            .copied()
            .unwrap_or_default()
    }

    fn joke_id(&self, index: usize) -> String {
        format!("{}.{}", self.tag, index)
    }

    fn index_of(&self, joke_id: &str) -> Option<usize> {
        let index: usize = joke_id
            .strip_prefix(self.tag.as_str())?
            .strip_prefix('.')?
            .parse()
            .ok()?;
        (index < self.jokes.len()).then_some(index)
    }

    fn pick(&self, prompt: &str) -> usize {
        let n = self.jokes.len();
        let start = self.cursor.fetch_add(1, Ordering::Relaxed) % n;
        let words: Vec<String> = prompt
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|w| w.chars().count() >= MIN_WORD_LEN)
            .collect();
        if words.is_empty() {
            return start;
        }
        (0..n)
            .map(|offset| (start + offset) % n)
            .find(|&i| {
                let joke = self.jokes[i].to_lowercase();
                words.iter().any(|w| joke.contains(w.as_str()))
            })
            .unwrap_or(start)
    }
}

#[async_trait]
impl JokeBackend for DatasetJokeBackend {
    fn name(&self) -> &str {
        &self.tag
    }

    async fn generate(&self, prompt: &str) -> Result<Joke> {
        if self.jokes.is_empty() {
            return Err(JokeError::GenerationUnavailable(format!(
                "dataset {} has no jokes",
                self.tag
            )));
        }
        let index = self.pick(prompt);
        debug!(tag = %self.tag, index = index, "step: dataset joke picked");
        Ok(Joke {
            id: self.joke_id(index),
            text: self.jokes[index].clone(),
        })
    }

    async fn record_grade(&self, event: &FeedbackEvent) -> Result<()> {
        if self.index_of(&event.joke_id).is_none() {
            return Err(JokeError::Grade(format!(
                "joke {} is not in dataset {}",
                event.joke_id, self.tag
            )));
        }
        let mut tallies = self.tallies.lock().await;
        let tally = tallies.entry(event.joke_id.clone()).or_default();
        match event.polarity {
            Polarity::Positive => tally.positive += 1,
            Polarity::Negative => tally.negative += 1,
        }
        Ok(())
    }
}

//! Scripted [`JokeService`] for dispatch tests.

use async_trait::async_trait;
use joke_service::{Joke, JokeError, JokeService, Result};

use super::{Event, Journal};

pub struct FakeJokeService {
    journal: Journal,
    joke: Option<Joke>,
    fail_grades: bool,
}

impl FakeJokeService {
    /// Always returns `joke`.
    pub fn returning(journal: Journal, joke: Joke) -> Self {
        Self {
            journal,
            joke: Some(joke),
            fail_grades: false,
        }
    }

    /// Generation always fails with GenerationUnavailable.
    pub fn unavailable(journal: Journal) -> Self {
        Self {
            journal,
            joke: None,
            fail_grades: false,
        }
    }

    /// Grades are recorded, then fail.
    pub fn failing_grades(mut self) -> Self {
        self.fail_grades = true;
        self
    }

    fn grade_result(&self) -> Result<()> {
        if self.fail_grades {
            return Err(JokeError::Grade("backend down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl JokeService for FakeJokeService {
    async fn generate_joke(&self, prompt: &str) -> Result<Joke> {
        self.journal.push(Event::Generate {
            prompt: prompt.to_string(),
        });
        self.joke
            .clone()
            .ok_or_else(|| JokeError::GenerationUnavailable("model not loaded".to_string()))
    }

    async fn positive_grade(&self, user_id: &str, joke_id: &str) -> Result<()> {
        self.journal.push(Event::PositiveGrade {
            user_id: user_id.to_string(),
            joke_id: joke_id.to_string(),
        });
        self.grade_result()
    }

    async fn negative_grade(&self, user_id: &str, joke_id: &str) -> Result<()> {
        self.journal.push(Event::NegativeGrade {
            user_id: user_id.to_string(),
            joke_id: joke_id.to_string(),
        });
        self.grade_result()
    }
}

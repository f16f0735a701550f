//! Facade over a single backend.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

use crate::backend::JokeBackend;
use crate::error::Result;
use crate::joke::{FeedbackEvent, Joke, Polarity};
use crate::service::{generate_checked, record_checked, JokeService, DEFAULT_GENERATION_TIMEOUT};

/// Routes every call to one backend; ids are passed through untouched.
pub struct SingleJokeService {
    backend: Arc<dyn JokeBackend>,
    timeout: Duration,
}

impl SingleJokeService {
    pub fn new(backend: Arc<dyn JokeBackend>) -> Self {
        Self {
            backend,
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    /// Sets the bound on one generation or grade call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn record(&self, user_id: &str, joke_id: &str, polarity: Polarity) -> Result<()> {
        let event = FeedbackEvent::new(user_id, joke_id, polarity);
        record_checked(self.backend.as_ref(), &event, self.timeout).await?;
        info!(
            backend = %self.backend.name(),
            user_id = %user_id,
            joke_id = %joke_id,
            polarity = polarity.as_str(),
            "step: grade recorded"
        );
        Ok(())
    }
}

#[async_trait]
impl JokeService for SingleJokeService {
    #[instrument(skip(self))]
    async fn generate_joke(&self, prompt: &str) -> Result<Joke> {
        generate_checked(self.backend.as_ref(), prompt, self.timeout).await
    }

    async fn positive_grade(&self, user_id: &str, joke_id: &str) -> Result<()> {
        self.record(user_id, joke_id, Polarity::Positive).await
    }

    async fn negative_grade(&self, user_id: &str, joke_id: &str) -> Result<()> {
        self.record(user_id, joke_id, Polarity::Negative).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JokeError;
    use std::sync::Mutex;

    /// Backend returning a fixed outcome and recording grades.
    struct StubBackend {
        joke: Option<Joke>,
        delay: Duration,
        grade_delay: Duration,
        grades: Mutex<Vec<FeedbackEvent>>,
    }

    impl StubBackend {
        fn returning(joke: Option<Joke>) -> Self {
            Self {
                joke,
                delay: Duration::ZERO,
                grade_delay: Duration::ZERO,
                grades: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl JokeBackend for StubBackend {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(&self, _prompt: &str) -> Result<Joke> {
            tokio::time::sleep(self.delay).await;
            self.joke
                .clone()
                .ok_or_else(|| JokeError::Config("backend down".to_string()))
        }

        async fn record_grade(&self, event: &FeedbackEvent) -> Result<()> {
            tokio::time::sleep(self.grade_delay).await;
            self.grades.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_generate_passes_joke_through() {
        let backend = Arc::new(StubBackend::returning(Some(Joke::new("42", "Why did..."))));
        let service = SingleJokeService::new(backend);

        let joke = service.generate_joke("").await.unwrap();

        assert_eq!(joke, Joke::new("42", "Why did..."));
    }

    #[tokio::test]
    async fn test_backend_error_becomes_generation_unavailable() {
        let service = SingleJokeService::new(Arc::new(StubBackend::returning(None)));

        let err = service.generate_joke("cats").await.unwrap_err();

        assert!(matches!(err, JokeError::GenerationUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_text_becomes_generation_unavailable() {
        let service = SingleJokeService::new(Arc::new(StubBackend::returning(Some(Joke::new(
            "1", "   ",
        )))));

        assert!(matches!(
            service.generate_joke("").await,
            Err(JokeError::GenerationUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_id_becomes_generation_unavailable() {
        let service = SingleJokeService::new(Arc::new(StubBackend::returning(Some(Joke::new(
            "", "text",
        )))));

        assert!(matches!(
            service.generate_joke("").await,
            Err(JokeError::GenerationUnavailable(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out() {
        let mut backend = StubBackend::returning(Some(Joke::new("1", "late")));
        backend.delay = Duration::from_secs(60);
        let service = SingleJokeService::new(Arc::new(backend)).with_timeout(Duration::from_secs(5));

        let err = service.generate_joke("").await.unwrap_err();

        assert!(matches!(err, JokeError::GenerationUnavailable(ref m) if m.contains("timed out")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_grade_times_out() {
        let mut backend = StubBackend::returning(None);
        backend.grade_delay = Duration::from_secs(60);
        let backend = Arc::new(backend);
        let service = SingleJokeService::new(backend.clone()).with_timeout(Duration::from_secs(5));

        let err = service.positive_grade("7", "42").await.unwrap_err();

        assert!(matches!(err, JokeError::Grade(ref m) if m.contains("within 5s")));
        assert!(backend.grades.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_grades_are_not_deduplicated() {
        let backend = Arc::new(StubBackend::returning(None));
        let service = SingleJokeService::new(backend.clone());

        service.positive_grade("7", "42").await.unwrap();
        service.negative_grade("7", "42").await.unwrap();
        service.grade("7", "42", Polarity::Positive).await.unwrap();

        let grades = backend.grades.lock().unwrap();
        assert_eq!(
            *grades,
            vec![
                FeedbackEvent::new("7", "42", Polarity::Positive),
                FeedbackEvent::new("7", "42", Polarity::Negative),
                FeedbackEvent::new("7", "42", Polarity::Positive),
            ]
        );
    }
}

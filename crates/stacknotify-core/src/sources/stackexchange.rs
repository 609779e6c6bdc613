// Stack Exchange source - bridges the API client with the QuestionSource trait
use async_trait::async_trait;
use stacknotify_api::{ApiQuestion, StackExchangeClient};

use crate::{models::Question, watch::QuestionSource, Error, Result};

const QUESTION_URL_BASE: &str = "https://stackoverflow.com/questions";

/// Wrapper around StackExchangeClient that implements QuestionSource
pub struct StackExchangeSource {
    client: StackExchangeClient,
    page_size: u32,
}

impl StackExchangeSource {
    pub fn new(client: StackExchangeClient, page_size: u32) -> Self {
        Self { client, page_size }
    }
}

#[async_trait]
impl QuestionSource for StackExchangeSource {
    async fn recent_questions(&self) -> Result<Vec<Question>> {
        let questions = self
            .client
            .recent_questions(self.page_size)
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        Ok(questions.into_iter().map(api_to_question).collect())
    }
}

/// Convert an API question to our internal Question model.
///
/// The API does not serve a canonical link; it is derived from the id.
fn api_to_question(api: ApiQuestion) -> Question {
    Question {
        id: api.question_id,
        title: api.title,
        tags: api.tags,
        up_votes: api.up_vote_count,
        down_votes: api.down_vote_count,
        answer_count: api.answer_count,
        created_at: api.creation_date,
        url: format!("{}/{}/", QUESTION_URL_BASE, api.question_id),
    }
}

use crate::ports::RecordStore;
use flipdns_domain::{DomainError, Question, ResourceRecord, StoredRecord};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Answers every question of a query from the record store.
pub struct ResolveQuestionsUseCase {
    store: Arc<dyn RecordStore>,
    lookup_timeout: Option<Duration>,
}

impl ResolveQuestionsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            lookup_timeout: None,
        }
    }

    /// Bounds each store lookup; one that runs longer fails the query.
    pub fn with_lookup_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Returns one A record per question, in question order.
    ///
    /// A single unknown name fails the whole batch with
    /// [`DomainError::RecordNotFound`]; no partial answers are produced.
    pub async fn execute(&self, questions: &[Question]) -> Result<Vec<ResourceRecord>, DomainError> {
        let mut answers = Vec::with_capacity(questions.len());

        for question in questions {
            debug!(domain = %question.domain, "Resolving question");

            let record = self
                .lookup(&question.domain)
                .await?
                .ok_or_else(|| DomainError::RecordNotFound(question.domain.to_string()))?;

            let answer = ResourceRecord::a_record(&question.name, &record.address, record.ttl)?;
            answers.push(answer);
        }

        Ok(answers)
    }

    async fn lookup(&self, domain: &str) -> Result<Option<StoredRecord>, DomainError> {
        match self.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, self.store.lookup(domain))
                .await
                .map_err(|_| DomainError::LookupTimeout(domain.to_string()))?,
            None => self.store.lookup(domain).await,
        }
    }
}

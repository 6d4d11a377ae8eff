// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::RepositoryError;
use crate::service::ExampleRecord;
use crate::traits::ExampleRepository;

#[derive(Debug, Default)]
struct Store {
    records: HashMap<String, ExampleRecord>,
    /// Example ids in first-save order.
    order: Vec<String>,
}

/// Example repository held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryExampleRepository {
    store: RwLock<Store>,
}

impl InMemoryExampleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.records.is_empty()
    }
}

#[async_trait]
impl ExampleRepository for InMemoryExampleRepository {
    async fn save_example(&self, record: &ExampleRecord) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        if store
            .records
            .insert(record.id.clone(), record.clone())
            .is_none()
        {
            store.order.push(record.id.clone());
        }
        Ok(())
    }

    async fn get_example(&self, example_id: &str) -> Result<ExampleRecord, RepositoryError> {
        self.store
            .read()
            .await
            .records
            .get(example_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(example_id.to_string()))
    }

    async fn set_result(&self, example_id: &str, value: f64) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        let record = store
            .records
            .get_mut(example_id)
            .ok_or_else(|| RepositoryError::NotFound(example_id.to_string()))?;
        record.result = Some(value);
        Ok(())
    }

    async fn get_result(&self, example_id: &str) -> Result<Option<f64>, RepositoryError> {
        Ok(self.get_example(example_id).await?.result)
    }

    async fn examples_by_user(&self, user_id: &str) -> Result<Vec<ExampleRecord>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.records.get(id))
            .filter(|record| record.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, user_id: Option<&str>) -> ExampleRecord {
        ExampleRecord::rejected(id, "2++3", user_id.map(str::to_string), "malformed")
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let repository = InMemoryExampleRepository::new();
        repository.save_example(&record("a", None)).await.unwrap();

        let fetched = repository.get_example("a").await.unwrap();
        assert_eq!(fetched, record("a", None));
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_example() {
        let repository = InMemoryExampleRepository::new();

        assert!(matches!(
            repository.get_example("nope").await,
            Err(RepositoryError::NotFound(id)) if id == "nope"
        ));
        assert!(matches!(
            repository.set_result("nope", 1.0).await,
            Err(RepositoryError::NotFound(_))
        ));
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn test_result_round_trip() {
        let repository = InMemoryExampleRepository::new();
        repository.save_example(&record("a", None)).await.unwrap();

        assert_eq!(repository.get_result("a").await.unwrap(), None);
        repository.set_result("a", 14.0).await.unwrap();
        assert_eq!(repository.get_result("a").await.unwrap(), Some(14.0));
    }

    #[tokio::test]
    async fn test_examples_by_user_keeps_submission_order() {
        let repository = InMemoryExampleRepository::new();
        for (id, user) in [("c", Some("alice")), ("a", Some("bob")), ("b", Some("alice")), ("d", None)] {
            repository.save_example(&record(id, user)).await.unwrap();
        }
        // Re-saving keeps the original position.
        repository.save_example(&record("c", Some("alice"))).await.unwrap();

        let ids: Vec<String> = repository
            .examples_by_user("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["c", "b"]);
    }
}

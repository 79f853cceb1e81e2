//! Doctor roster service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::DEFAULT_DOCTORS;
use crate::domain::Doctor;
use crate::errors::AppResult;
use crate::infra::DoctorRepository;

#[async_trait]
pub trait DoctorService: Send + Sync {
    /// All doctors, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Doctor>>;

    /// Insert the default roster when the table is empty.
    /// Returns the number of rows inserted.
    async fn seed_defaults(&self) -> AppResult<usize>;
}

pub struct DoctorManager {
    repo: Arc<dyn DoctorRepository>,
}

impl DoctorManager {
    pub fn new(repo: Arc<dyn DoctorRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl DoctorService for DoctorManager {
    async fn find_all(&self) -> AppResult<Vec<Doctor>> {
        self.repo.list().await
    }

    async fn seed_defaults(&self) -> AppResult<usize> {
        if self.repo.count().await? > 0 {
            tracing::debug!("Doctors already present, skipping seed");
            return Ok(0);
        }

        let roster: Vec<(String, String)> = DEFAULT_DOCTORS
            .iter()
            .map(|(name, specialization)| (name.to_string(), specialization.to_string()))
            .collect();
        let inserted = roster.len();

        self.repo.insert_many(roster).await?;
        tracing::info!(count = inserted, "Seeded default doctors");

        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockDoctorRepository;

    #[tokio::test]
    async fn test_seed_inserts_roster_into_empty_table() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_insert_many()
            .withf(|doctors| {
                doctors.len() == 3
                    && doctors[0].0 == "Dr. Smith"
                    && doctors[0].1 == "General Practice"
            })
            .times(1)
            .returning(|_| Ok(()));

        let inserted = DoctorManager::new(Arc::new(repo)).seed_defaults().await.unwrap();
        assert_eq!(inserted, 3);
    }

    #[tokio::test]
    async fn test_seed_skips_populated_table() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_count().returning(|| Ok(3));
        repo.expect_insert_many().never();

        let inserted = DoctorManager::new(Arc::new(repo)).seed_defaults().await.unwrap();
        assert_eq!(inserted, 0);
    }

    #[tokio::test]
    async fn test_find_all() {
        let mut repo = MockDoctorRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![Doctor {
                id: 1,
                name: "Dr. Smith".into(),
                specialization: "General Practice".into(),
            }])
        });

        let doctors = DoctorManager::new(Arc::new(repo)).find_all().await.unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].name, "Dr. Smith");
    }
}

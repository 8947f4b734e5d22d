use super::{DataStore, InternshipList};
use crate::error::{Result, SprintError};
use crate::model::UserProfile;

/// In-memory storage for testing and development.
/// Keeps the last saved snapshot instead of writing to disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    internships: InternshipList,
    profile: UserProfile,
    saves: usize,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose saves always fail, for exercising persistence errors.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Number of successful saves of either kind.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> &InternshipList {
        &self.internships
    }

    pub fn saved_profile(&self) -> &UserProfile {
        &self.profile
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(SprintError::Store("storage is unavailable".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn save(&mut self, internships: &InternshipList) -> Result<()> {
        self.check()?;
        self.internships = internships.clone();
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<InternshipList> {
        Ok(self.internships.clone())
    }

    fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.check()?;
        self.profile = profile.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_profile(&self) -> Result<UserProfile> {
        Ok(self.profile.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Internship;

    pub struct StoreFixture {
        pub internships: InternshipList,
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                internships: InternshipList::new(),
                store: InMemoryStore::new(),
            }
        }

        pub fn with_software(mut self, company: &str, role: &str, tech: &str) -> Self {
            self.internships
                .add(Internship::software(company, role, tech));
            self
        }

        pub fn with_hardware(mut self, company: &str, role: &str, hardtech: &str) -> Self {
            self.internships
                .add(Internship::hardware(company, role, hardtech));
            self
        }

        pub fn with_general(mut self, company: &str, role: &str, dept: &str) -> Self {
            self.internships
                .add(Internship::general(company, role, dept));
            self
        }

        pub fn failing(mut self) -> Self {
            self.store.set_failing(true);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Kind;

    #[test]
    fn save_keeps_snapshot() {
        let fixture = StoreFixture::new()
            .with_software("Google", "SWE", "Go")
            .with_general("UBS", "IT", "Tech");
        let mut store = fixture.store;
        store.save(&fixture.internships).unwrap();

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap(), fixture.internships);
        assert_eq!(store.saved().sequence(Kind::General).len(), 1);
    }

    #[test]
    fn failing_store_rejects_saves() {
        let mut store = InMemoryStore::failing();
        match store.save(&InternshipList::new()) {
            Err(SprintError::Store(_)) => {}
            other => panic!("Expected Store error, got {:?}", other),
        }
        assert!(store.save_profile(&UserProfile::default()).is_err());
        assert_eq!(store.save_count(), 0);

        store.set_failing(false);
        store.save(&InternshipList::new()).unwrap();
        assert_eq!(store.save_count(), 1);
    }
}

//! Test record fixture and deterministic dataset generation
//!
//! Every codec is measured against the same [`Record`] shape: a user profile
//! with identifier, name, email, age, active flag, roles and balance.
//! [`Dataset::generate`] builds the records from a seeded PRNG so two runs with
//! the same seed and size see byte-for-byte identical input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Role names assigned to generated records, in assignment order
pub const ROLE_VOCABULARY: [&str; 3] = ["user", "admin", "moderator"];

/// Lowest generated age
pub const MIN_AGE: i32 = 20;

/// Number of distinct ages above [`MIN_AGE`]
pub const AGE_SPAN: i32 = 50;

/// Lowest generated balance
pub const MIN_BALANCE: f64 = 1000.0;

/// Width of the generated balance range
pub const BALANCE_SPAN: f64 = 9000.0;

/// A user profile, the single entity serialized by every codec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier within a run
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Age in years
    pub age: i32,
    /// Whether the account is active
    pub active: bool,
    /// Ordered role list
    pub roles: Vec<String>,
    /// Account balance
    pub balance: f64,
}

impl Record {
    /// Build the record at position `index`, drawing age, active flag and
    /// balance from `rng` in that order
    fn generated<R: Rng>(index: usize, rng: &mut R) -> Self {
        let age = MIN_AGE + rng.random_range(0..AGE_SPAN);
        let active = rng.random::<f32>() < 0.5;
        let balance = MIN_BALANCE + rng.random::<f64>() * BALANCE_SPAN;

        Self {
            id: format!("user_{}", index),
            name: format!("User Name {}", index),
            email: format!("user{}@example.com", index),
            age,
            active,
            roles: ROLE_VOCABULARY.iter().map(|role| role.to_string()).collect(),
            balance,
        }
    }
}

/// Ordered, read-only collection of records shared by every phase of a run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Generate `size` records from `seed`
    pub fn generate(size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = (0..size)
            .map(|index| Record::generated(index, &mut rng))
            .collect();
        Self { records }
    }

    /// All records in generation order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The first `count` records, or all of them if the dataset is shorter
    pub fn head(&self, count: usize) -> &[Record] {
        &self.records[..count.min(self.records.len())]
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let first = Dataset::generate(1000, 42);
        let second = Dataset::generate(1000, 42);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1000);
    }

    #[test]
    fn test_seed_42_golden_values() {
        // pinned values: a change here means the PRNG stream moved
        let dataset = Dataset::generate(3, 42);
        let drawn: Vec<(i32, bool, f64)> = dataset
            .iter()
            .map(|r| (r.age, r.active, r.balance))
            .collect();
        assert_eq!(
            drawn,
            vec![
                (26, false, 5884.526889128295),
                (63, false, 4653.11582407699),
                (68, true, 4734.611615668241),
            ]
        );
    }

    #[test]
    fn test_different_seed_changes_values() {
        let first = Dataset::generate(50, 42);
        let second = Dataset::generate(50, 7);
        let ages_a: Vec<i32> = first.iter().map(|r| r.age).collect();
        let ages_b: Vec<i32> = second.iter().map(|r| r.age).collect();
        assert_ne!(ages_a, ages_b);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::generate(0, 42);
        assert!(dataset.is_empty());
        assert!(dataset.head(10).is_empty());
    }

    #[test]
    fn test_field_ranges_and_identity() {
        let dataset = Dataset::generate(500, 42);
        for (index, record) in dataset.iter().enumerate() {
            assert_eq!(record.id, format!("user_{}", index));
            assert_eq!(record.name, format!("User Name {}", index));
            assert_eq!(record.email, format!("user{}@example.com", index));
            assert!((20..70).contains(&record.age));
            assert!(record.balance >= 1000.0 && record.balance < 10000.0);
            assert_eq!(record.roles, vec!["user", "admin", "moderator"]);
        }
    }

    #[test]
    fn test_active_flag_varies() {
        let dataset = Dataset::generate(200, 42);
        let active = dataset.iter().filter(|r| r.active).count();
        assert!(active > 0 && active < dataset.len());
    }

    #[test]
    fn test_head_clamps() {
        let dataset = Dataset::generate(5, 42);
        assert_eq!(dataset.head(3).len(), 3);
        assert_eq!(dataset.head(100).len(), 5);
        assert_eq!(dataset.head(3)[2].id, "user_2");
    }
}

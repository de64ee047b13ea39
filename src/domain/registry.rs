//! Session-scoped collection of link records.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::LinkRecord;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::ValidUrl;

/// Maximum number of links a single registry may hold at once.
pub const MAX_LINKS: usize = 5;

/// Returned by [`LinkRegistry::add`] when the registry is full.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Registry already holds {capacity} links")]
pub struct RegistryFull {
    pub capacity: usize,
}

/// Returned by [`LinkRegistry::record_click`] for a code it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No link with short code '{0}'")]
pub struct UnknownCode(pub String);

/// Holds the links created during one session.
///
/// # Invariants
///
/// - At most [`MAX_LINKS`] records; further adds are refused, nothing is evicted
/// - Short codes are pairwise distinct
/// - Records keep insertion order and are never removed
/// - Ids are assigned from a counter and never reused
pub struct LinkRegistry {
    records: Vec<LinkRecord>,
    generator: Arc<dyn CodeGenerator>,
    next_id: u64,
}

impl LinkRegistry {
    /// Creates an empty registry drawing codes from `generator`.
    pub fn new(generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            records: Vec::with_capacity(MAX_LINKS),
            generator,
            next_id: 1,
        }
    }

    /// Adds a new record for `original_url`.
    ///
    /// Generates codes until one is not held by any current record, assigns
    /// the next id and the current time, and returns a copy of the stored
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryFull`] when the registry is full.
    /// The registry is left untouched in that case.
    pub fn add(&mut self, original_url: ValidUrl) -> Result<LinkRecord, RegistryFull> {
        if self.is_full() {
            return Err(RegistryFull {
                capacity: MAX_LINKS,
            });
        }

        let short_code = self.unique_code();
        let record = LinkRecord::new(
            self.next_id,
            original_url.into_string(),
            short_code,
            Utc::now(),
        );

        self.next_id += 1;
        self.records.push(record.clone());

        Ok(record)
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[LinkRecord] {
        &self.records
    }

    /// Number of records currently held.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn capacity(&self) -> usize {
        MAX_LINKS
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= MAX_LINKS
    }

    /// Finds a record by short code.
    pub fn find(&self, short_code: &str) -> Option<&LinkRecord> {
        self.records.iter().find(|r| r.short_code == short_code)
    }

    /// Registers a click on behalf of an external tracking collaborator.
    ///
    /// Increments `clicks`, stamps `last_clicked` and replaces `location`
    /// when one is given. Nothing else on the record changes.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCode`] if no record has `short_code`.
    pub fn record_click(
        &mut self,
        short_code: &str,
        location: Option<String>,
    ) -> Result<LinkRecord, UnknownCode> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.short_code == short_code)
            .ok_or_else(|| UnknownCode(short_code.to_string()))?;

        record.register_click(Utc::now(), location);
        Ok(record.clone())
    }

    fn unique_code(&self) -> String {
        loop {
            let code = self.generator.generate();
            if self.find(&code).is_none() {
                return code;
            }
            tracing::debug!(code = %code, "Short code collision, regenerating");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::code_generator::{MockCodeGenerator, RandomCodeGenerator};
    use crate::utils::url_validator::validate_absolute_url;
    use std::collections::HashSet;

    fn url(s: &str) -> ValidUrl {
        validate_absolute_url(s).unwrap()
    }

    fn random_registry() -> LinkRegistry {
        LinkRegistry::new(Arc::new(RandomCodeGenerator))
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = random_registry();
        assert_eq!(registry.size(), 0);
        assert!(registry.list().is_empty());
        assert_eq!(registry.capacity(), MAX_LINKS);
        assert!(!registry.is_full());
    }

    #[test]
    fn test_add_success() {
        let mut registry = random_registry();

        let record = registry.add(url("https://example.com/page")).unwrap();

        assert_eq!(record.original_url, "https://example.com/page");
        assert_eq!(record.clicks, 0);
        assert_eq!(record.short_code.len(), 6);
        assert!(record.last_clicked.is_none());
        assert!(record.location.is_none());
        assert_eq!(registry.size(), 1);
        assert_eq!(registry.list()[0], record);
    }

    #[test]
    fn test_add_preserves_insertion_order_and_assigns_ids() {
        let mut registry = random_registry();

        for i in 0..3 {
            registry
                .add(url(&format!("https://example.com/{i}")))
                .unwrap();
        }

        let urls: Vec<&str> = registry
            .list()
            .iter()
            .map(|r| r.original_url.as_str())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/0",
                "https://example.com/1",
                "https://example.com/2"
            ]
        );

        let ids: Vec<u64> = registry.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_rejects_beyond_capacity() {
        let mut registry = random_registry();

        for i in 0..MAX_LINKS {
            registry
                .add(url(&format!("https://example.com/{i}")))
                .unwrap();
        }
        assert!(registry.is_full());

        let before: Vec<LinkRecord> = registry.list().to_vec();
        let result = registry.add(url("https://example.com/overflow"));

        assert_eq!(
            result,
            Err(RegistryFull {
                capacity: MAX_LINKS
            })
        );
        assert_eq!(registry.size(), MAX_LINKS);
        assert_eq!(registry.list(), before.as_slice());
    }

    #[test]
    fn test_codes_pairwise_distinct_at_capacity() {
        let mut registry = random_registry();
        for i in 0..MAX_LINKS {
            registry
                .add(url(&format!("https://example.com/{i}")))
                .unwrap();
        }

        let codes: HashSet<&str> = registry
            .list()
            .iter()
            .map(|r| r.short_code.as_str())
            .collect();
        assert_eq!(codes.len(), MAX_LINKS);
    }

    #[test]
    fn test_add_regenerates_on_collision() {
        let mut generator = MockCodeGenerator::new();
        let mut calls = 0;
        generator.expect_generate().times(3).returning(move || {
            calls += 1;
            let code = if calls < 3 { "aaaaaa" } else { "bbbbbb" };
            code.to_string()
        });

        let mut registry = LinkRegistry::new(Arc::new(generator));

        let first = registry.add(url("https://example.com/1")).unwrap();
        let second = registry.add(url("https://example.com/2")).unwrap();

        assert_eq!(first.short_code, "aaaaaa");
        assert_eq!(second.short_code, "bbbbbb");
    }

    #[test]
    fn test_add_keeps_regenerating_through_repeated_collisions() {
        let mut generator = MockCodeGenerator::new();
        let mut calls = 0;
        generator.expect_generate().times(7).returning(move || {
            calls += 1;
            let code = if calls == 7 { "fresh1" } else { "taken1" };
            code.to_string()
        });

        let mut registry = LinkRegistry::new(Arc::new(generator));
        registry.add(url("https://example.com/a")).unwrap();
        let second = registry.add(url("https://example.com/b")).unwrap();

        assert_eq!(second.short_code, "fresh1");
        assert_eq!(registry.size(), 2);
    }

    #[test]
    fn test_capacity_checked_before_generating() {
        let mut generator = MockCodeGenerator::new();
        let mut calls = 0;
        generator
            .expect_generate()
            .times(MAX_LINKS)
            .returning(move || {
                calls += 1;
                format!("code{calls:02}")
            });

        let mut registry = LinkRegistry::new(Arc::new(generator));
        for i in 0..MAX_LINKS {
            registry
                .add(url(&format!("https://example.com/{i}")))
                .unwrap();
        }

        assert!(registry.add(url("https://example.com/extra")).is_err());
    }

    #[test]
    fn test_read_operations_are_idempotent() {
        let mut registry = random_registry();
        registry.add(url("https://example.com/1")).unwrap();
        registry.add(url("https://example.com/2")).unwrap();

        let first_list = registry.list().to_vec();
        let first_size = registry.size();

        for _ in 0..3 {
            assert_eq!(registry.list(), first_list.as_slice());
            assert_eq!(registry.size(), first_size);
        }
    }

    #[test]
    fn test_returned_record_is_a_copy() {
        let mut registry = random_registry();
        let mut record = registry.add(url("https://example.com")).unwrap();

        record.clicks = 99;

        assert_eq!(registry.list()[0].clicks, 0);
    }

    #[test]
    fn test_record_click() {
        let mut registry = random_registry();
        let record = registry.add(url("https://example.com")).unwrap();

        let updated = registry
            .record_click(&record.short_code, Some("Canada".to_string()))
            .unwrap();

        assert_eq!(updated.clicks, 1);
        assert!(updated.last_clicked.is_some());
        assert_eq!(updated.location.as_deref(), Some("Canada"));
        assert_eq!(updated.original_url, record.original_url);
        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(registry.find(&record.short_code), Some(&updated));
    }

    #[test]
    fn test_record_click_unknown_code() {
        let mut registry = random_registry();
        let result = registry.record_click("nope00", None);
        assert_eq!(result, Err(UnknownCode("nope00".to_string())));
    }
}

//! Synthetic record generation over an ordered field list.

use crate::field::CanonicalField;
use crate::values::SyntheticRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use synth_registry::GenerationError;
use tracing::{debug, info};

/// Produces independent records from a borrowed field list.
///
/// Fields are synthesized in place for every copy, so the list only ever
/// holds the latest values; the returned records are the history. Parallel
/// callers must give each worker its own clone of the fields.
pub struct SyntheticDocument<'a> {
    /// Fields in declaration order
    fields: &'a mut [CanonicalField],
    /// Random source shared by every generator call
    rng: StdRng,
    /// Number of records produced so far
    produced: u64,
}

impl<'a> SyntheticDocument<'a> {
    /// Create a generator seeded from system entropy.
    pub fn new(fields: &'a mut [CanonicalField]) -> Self {
        Self {
            fields,
            rng: StdRng::from_entropy(),
            produced: 0,
        }
    }

    /// Re-seed for reproducible output: the same seed and fields always give
    /// the same records.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of records produced so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Synthesize every field once, in order, and snapshot the result.
    pub fn next_record(&mut self) -> Result<SyntheticRecord, GenerationError> {
        let mut record = SyntheticRecord::with_capacity(self.fields.len());
        for field in self.fields.iter_mut() {
            field.synthesize_with(&mut self.rng)?;
            record.insert(field.snapshot());
        }
        self.produced += 1;
        Ok(record)
    }

    /// Produce `copies` records.
    ///
    /// The first generator failure aborts the whole batch and no records are
    /// returned.
    pub fn synthesize_data(
        &mut self,
        copies: usize,
    ) -> Result<Vec<SyntheticRecord>, GenerationError> {
        info!(
            "Synthesizing {} copies of {} fields",
            copies,
            self.fields.len()
        );
        let records = self.records(copies).collect::<Result<Vec<_>, _>>()?;
        debug!("Synthesized {} records", records.len());
        Ok(records)
    }

    /// Lazily produce `copies` records. Iteration stops after the first error.
    pub fn records(&mut self, copies: usize) -> RecordIterator<'_, 'a> {
        RecordIterator {
            document: self,
            remaining: copies,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'g, 'a> {
    document: &'g mut SyntheticDocument<'a>,
    remaining: usize,
}

impl Iterator for RecordIterator<'_, '_> {
    type Item = Result<SyntheticRecord, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let result = self.document.next_record();
        if result.is_err() {
            self.remaining = 0;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use synth_registry::{Generator, GeneratorRegistry};

    fn test_fields() -> Vec<CanonicalField> {
        [
            json!({"name": "id", "data_type": "hexadecimal_string"}),
            json!({"name": "customer", "data_type": "name", "prefix": "To: "}),
            json!({"name": "total", "data_type": "pricetag", "bbox": [1, 2, 3, 4]}),
        ]
        .iter()
        .map(|d| CanonicalField::from_definition(d).unwrap())
        .collect()
    }

    #[test]
    fn test_record_count_and_keys() {
        let mut fields = test_fields();
        let mut generator = SyntheticDocument::new(&mut fields);

        for copies in [0, 1, 5] {
            let records = generator.synthesize_data(copies).unwrap();
            assert_eq!(records.len(), copies);
            for record in &records {
                assert_eq!(
                    record.keys().collect::<Vec<_>>(),
                    vec!["id", "customer", "total"]
                );
            }
        }
    }

    #[test]
    fn test_zero_copies_invokes_no_generator() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let registry = GeneratorRegistry::builder()
            .register(Generator::new("counted", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok("x".to_string())
            }))
            .unwrap()
            .build()
            .unwrap();
        let mut fields = vec![CanonicalField::builder("a")
            .data_type("counted")
            .build_with(&registry)];

        let records = SyntheticDocument::new(&mut fields)
            .synthesize_data(0)
            .unwrap();
        assert!(records.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        SyntheticDocument::new(&mut fields)
            .synthesize_data(3)
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut fields = test_fields();
        let records = SyntheticDocument::new(&mut fields)
            .synthesize_data(1)
            .unwrap();

        let id = records[0].get("id").unwrap();
        assert_eq!(id.data_type, "hexadecimal_string");
        assert_eq!(id.value.len(), 8);
        assert_eq!(id.bbox, (0, 0, 0, 0));

        let customer = records[0].get("customer").unwrap();
        assert!(customer.value.starts_with("To: "));

        let total = records[0].get("total").unwrap();
        assert_eq!(total.bbox, (1, 2, 3, 4));
    }

    #[test]
    fn test_fields_hold_latest_value() {
        let mut fields = test_fields();
        let records = SyntheticDocument::new(&mut fields)
            .synthesize_data(4)
            .unwrap();

        let last = records.last().unwrap();
        assert_eq!(fields[0].value, last.get("id").unwrap().value);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut fields1 = test_fields();
        let mut fields2 = test_fields();

        let records1 = SyntheticDocument::new(&mut fields1)
            .with_seed(42)
            .synthesize_data(3)
            .unwrap();
        let records2 = SyntheticDocument::new(&mut fields2)
            .with_seed(42)
            .synthesize_data(3)
            .unwrap();

        assert_eq!(records1, records2);
    }

    #[test]
    fn test_generation_failure_returns_no_records() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let registry = GeneratorRegistry::builder()
            .register(Generator::new("flaky", move |_| {
                if counter.fetch_add(1, Ordering::SeqCst) == 1 {
                    Err(GenerationError::failed("flaky", "second call fails"))
                } else {
                    Ok("ok".to_string())
                }
            }))
            .unwrap()
            .build()
            .unwrap();
        let mut fields = vec![CanonicalField::builder("a")
            .data_type("flaky")
            .build_with(&registry)];

        let result = SyntheticDocument::new(&mut fields).synthesize_data(5);
        assert!(matches!(result, Err(GenerationError::Failed { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_records_iterator_stops_after_error() {
        let registry = GeneratorRegistry::builder()
            .register(Generator::new("broken", |_| {
                Err(GenerationError::failed("broken", "always"))
            }))
            .unwrap()
            .build()
            .unwrap();
        let mut fields = vec![CanonicalField::builder("a")
            .data_type("broken")
            .build_with(&registry)];
        let mut generator = SyntheticDocument::new(&mut fields);

        let results: Vec<_> = generator.records(10).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
        assert_eq!(generator.produced(), 0);
    }

    #[test]
    fn test_produced_counter() {
        let mut fields = test_fields();
        let mut generator = SyntheticDocument::new(&mut fields);
        assert_eq!(generator.produced(), 0);
        generator.next_record().unwrap();
        generator.synthesize_data(2).unwrap();
        assert_eq!(generator.produced(), 3);
        assert_eq!(generator.field_count(), 3);
    }
}

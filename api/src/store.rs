use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use tracing::{info, warn};

use crate::error::FetchError;
use crate::record::{RecordKey, StudentRecord};
use crate::{seed, synth, timing};

/// In-memory record list. Clones share the same list.
///
/// Records are only ever appended; consumers receive `Rc` handles and never
/// mutate in place.
#[derive(Clone, Default)]
pub struct RecordStore {
    records: Rc<RefCell<Vec<Rc<StudentRecord>>>>,
}

impl PartialEq for RecordStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.records, &other.records)
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("len", &self.len())
            .finish()
    }
}

impl RecordStore {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        let store = Self::default();
        for record in records {
            store.append(record);
        }
        store
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_records())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every record in insertion order.
    pub fn list(&self) -> Vec<Rc<StudentRecord>> {
        self.records.borrow().clone()
    }

    pub fn get_by_id(
        &self,
        student_id: &str,
        program_id: &str,
    ) -> Result<Rc<StudentRecord>, FetchError> {
        self.records
            .borrow()
            .iter()
            .find(|r| r.id == student_id && r.program_id == program_id)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                student_id: student_id.to_string(),
                program_id: program_id.to_string(),
            })
    }

    pub fn get(&self, key: &RecordKey) -> Result<Rc<StudentRecord>, FetchError> {
        self.get_by_id(&key.student_id, &key.program_id)
    }

    fn contains_id(&self, id: &str) -> bool {
        self.records.borrow().iter().any(|r| r.id == id)
    }

    /// Append a record, logging any broken invariants.
    pub fn append(&self, record: StudentRecord) -> RecordKey {
        let problems = record.invariant_violations();
        if !problems.is_empty() {
            warn!(key = %record.key(), ?problems, "record violates invariants");
        }
        let key = record.key();
        self.records.borrow_mut().push(Rc::new(record));
        key
    }

    /// Synthesize a random record, append it, and return its key. The id is
    /// the current Unix time in milliseconds, suffixed on collision.
    pub fn generate_synthetic<R: Rng + ?Sized>(&self, rng: &mut R) -> RecordKey {
        let base = timing::now_unix_ms().to_string();
        let mut id = base.clone();
        let mut suffix = 1;
        while self.contains_id(&id) {
            id = format!("{base}{suffix}");
            suffix += 1;
        }
        let record = synth::synthesize(rng, id);
        info!(
            key = %record.key(),
            score = record.final_score,
            level = record.engagement_level.as_str(),
            "generated synthetic record"
        );
        self.append(record)
    }
}

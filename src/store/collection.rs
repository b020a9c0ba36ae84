/// A record that can live in a [`Collection`]: it carries its own string id.
pub trait Resource {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// In-memory ordered collection for one entity type.
///
/// Records stay in insertion order and every lookup is a linear scan. Ids
/// are decimal strings taken from a monotonically increasing counter, so a
/// deleted record's id is never handed out again.
#[derive(Debug)]
pub struct Collection<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Resource + Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a collection from pre-assigned records. The id counter starts
    /// above the largest numeric id found in the seed.
    pub fn seeded(records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);
        Self { records, next_id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.iter().find(|r| predicate(r)).cloned()
    }

    /// Assign the next id to the record, append it, and return the stored copy.
    pub fn insert(&mut self, mut record: T) -> T {
        record.set_id(self.next_id.to_string());
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    /// Apply `mutate` to the record with the given id, if present, and return
    /// the updated copy. The id itself is untouched.
    pub fn update_with<F>(&mut self, id: &str, mutate: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        mutate(record);
        Some(record.clone())
    }

    /// Remove the record with the given id. Returns false when absent, so a
    /// repeated delete of the same id fails.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() < before
    }
}

impl<T: Resource + Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

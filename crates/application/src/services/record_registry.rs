use ferrous_mdns_domain::dns_record::name::name_matches;
use ferrous_mdns_domain::{Record, RecordType};
use std::collections::BTreeMap;
use tracing::debug;

/// Records advertised by this host, bucketed by record type.
///
/// Buckets are created on first insertion and iterate in wire-code order.
/// Within a bucket insertion order is kept.
#[derive(Debug, Default)]
pub struct RecordRegistry {
    buckets: BTreeMap<RecordType, Vec<Record>>,
}

impl RecordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every record not already present. A record is present when its
    /// bucket holds one with the same name and payload.
    pub fn register<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        for record in records {
            let bucket = self.buckets.entry(record.record_type()).or_default();
            if bucket.iter().any(|existing| existing.is_duplicate_of(&record)) {
                continue;
            }
            debug!(name = %record.name, record_type = %record.record_type(), "Record registered");
            bucket.push(record);
        }
    }

    /// Removes, for each given record, every record of its type carrying the
    /// same name. The payload is not compared.
    pub fn unregister<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.remove(record.record_type(), &record.name);
        }
    }

    /// Removes every record of `record_type` named exactly `name`.
    /// Returns how many records were dropped.
    pub fn remove(&mut self, record_type: RecordType, name: &str) -> usize {
        let Some(bucket) = self.buckets.get_mut(&record_type) else {
            return 0;
        };

        let before = bucket.len();
        bucket.retain(|r| r.name != name);
        let removed = before - bucket.len();

        if bucket.is_empty() {
            self.buckets.remove(&record_type);
        }
        if removed > 0 {
            debug!(name, record_type = %record_type, removed, "Records unregistered");
        }
        removed
    }

    /// Records of `record_type` whose name matches `name`.
    pub fn records_for(&self, name: &str, record_type: RecordType) -> Vec<Record> {
        self.buckets
            .get(&record_type)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|r| name_matches(&r.name, name))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Types that currently hold at least one record, in iteration order.
    pub fn record_types(&self) -> impl Iterator<Item = RecordType> + '_ {
        self.buckets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

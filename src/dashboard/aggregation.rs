//! Pure aggregations over the record sequence that feed the dashboard charts.

use crate::types::station_record::{normalize_category, StationRecord, UNSPECIFIED_LABEL};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Label/count pairs in first-seen order of their label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    entries: Vec<(String, u32)>,
}

impl CategoryCounts {
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|(label, _)| label.clone()).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.entries.iter().map(|(_, count)| *count).collect()
    }

    pub fn get(&self, label: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

/// Groups records by key, keeping groups in the order their key first appears.
fn group_in_order<'a, K>(
    records: &'a [StationRecord],
    key: impl Fn(&'a StationRecord) -> K,
) -> Vec<(K, Vec<&'a StationRecord>)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a StationRecord>)> = Vec::new();
    for record in records {
        let k = key(record);
        let slot = match index.get(&k).copied() {
            Some(slot) => slot,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, Vec::new()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(record);
    }
    groups
}

/// Number of distinct stations per region.
///
/// Regions are compared as raw strings: values differing only in casing or whitespace
/// form separate groups, and an empty region is its own `""` group. Only records without
/// a region are labelled with the unspecified label. Multiple readings of one station
/// count once, and a record without a station id counts as one anonymous station within
/// its region.
pub fn stations_per_region(records: &[StationRecord]) -> CategoryCounts {
    let entries = group_in_order(records, |record| record.region.as_deref())
        .into_iter()
        .map(|(region, members)| {
            let stations: HashSet<Option<&str>> = members
                .iter()
                .map(|record| record.station_id.as_deref())
                .collect();
            (
                region.unwrap_or(UNSPECIFIED_LABEL).to_string(),
                stations.len() as u32,
            )
        })
        .collect();

    CategoryCounts { entries }
}

/// Number of records per sensor description, with missing or empty descriptions merged
/// into the unspecified label. Every reading counts.
pub fn sensor_type_distribution(records: &[StationRecord]) -> CategoryCounts {
    let entries = group_in_order(records, |record| {
        normalize_category(record.sensor_description.as_deref())
    })
    .into_iter()
    .map(|(sensor, members)| (sensor.to_string(), members.len() as u32))
    .collect();

    CategoryCounts { entries }
}

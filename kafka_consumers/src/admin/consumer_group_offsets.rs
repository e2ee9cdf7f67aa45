use crate::admin::TopicPartition;
use getset::Getters;
use std::collections::BTreeMap;

/// Committed offsets of one consumer group. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct ConsumerGroupOffsets {
    group_id: String,
    offsets: BTreeMap<TopicPartition, i64>,
}

impl ConsumerGroupOffsets {
    pub fn new(group_id: impl Into<String>, offsets: BTreeMap<TopicPartition, i64>) -> Self {
        Self {
            group_id: group_id.into(),
            offsets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Copy holding only the entries of `topic`.
    pub fn for_topic(&self, topic: &str) -> Self {
        let offsets = self
            .offsets
            .iter()
            .filter(|(key, _)| key.topic == topic)
            .map(|(key, offset)| (key.clone(), *offset))
            .collect();

        Self {
            group_id: self.group_id.clone(),
            offsets,
        }
    }
}

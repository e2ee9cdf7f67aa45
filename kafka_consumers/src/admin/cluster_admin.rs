use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopicPartition {
    pub topic: String,
    pub partition: i32,
}

impl TopicPartition {
    pub fn new(topic: impl Into<String>, partition: i32) -> Self {
        Self {
            topic: topic.into(),
            partition,
        }
    }
}

/// The two cluster calls consumer resolution is built on.
pub trait ClusterAdmin {
    /// All consumer group ids known to the cluster, in the order the cluster reports them.
    /// Duplicates are passed through.
    fn list_consumer_groups(&self) -> Result<Vec<String>, anyhow::Error>;

    /// Committed offsets of `group_id` across every topic.
    /// A group that never committed yields an empty map, not an error.
    fn list_consumer_group_offsets(
        &self,
        group_id: &str,
    ) -> Result<BTreeMap<TopicPartition, i64>, anyhow::Error>;
}

impl<T: ClusterAdmin + ?Sized> ClusterAdmin for &T {
    fn list_consumer_groups(&self) -> Result<Vec<String>, anyhow::Error> {
        (**self).list_consumer_groups()
    }

    fn list_consumer_group_offsets(
        &self,
        group_id: &str,
    ) -> Result<BTreeMap<TopicPartition, i64>, anyhow::Error> {
        (**self).list_consumer_group_offsets(group_id)
    }
}

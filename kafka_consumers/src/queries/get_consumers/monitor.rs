use crate::admin::{ClusterAdmin, ConsumerGroupOffsets};
use crate::queries::get_consumers::{
    ConsumerPartitionView, ConsumerTopicView, ConsumerView, UNKNOWN_OFFSET,
};
use crate::topic::TopicDescriptor;
use rayon::prelude::*;
use tracing::debug;

/// Resolves which consumer groups read a topic and how far each of them got.
pub struct ConsumerMonitor<A> {
    admin: A,
}

impl<A> ConsumerMonitor<A>
where
    A: ClusterAdmin + Sync,
{
    pub fn new(admin: A) -> Self {
        Self { admin }
    }

    /// One [`ConsumerView`] per group with at least one committed offset on `topic`,
    /// in the order the cluster listed the groups.
    ///
    /// An empty partition lookup is taken as a topic with no partitions and yields no consumers.
    /// Any collaborator failure aborts the whole call and is returned as is.
    pub fn get_consumers(
        &self,
        topic: &TopicDescriptor,
    ) -> Result<Vec<ConsumerView>, anyhow::Error> {
        if topic.partitions_count() == 0 {
            debug!("Topic {} has no partitions", topic.name());
            return Ok(Vec::new());
        }

        let consumer_offsets_list = self.get_consumer_offsets(topic.name())?;
        debug!("consumer_offsets_list: {:?}", consumer_offsets_list);

        let consumers = consumer_offsets_list
            .into_iter()
            .map(|consumer_offsets| build_consumer_view(consumer_offsets, topic))
            .collect();

        Ok(consumers)
    }

    fn get_consumer_offsets(
        &self,
        topic: &str,
    ) -> Result<Vec<ConsumerGroupOffsets>, anyhow::Error> {
        let groups = self.admin.list_consumer_groups()?;
        debug!("Resolving offsets of {} groups", groups.len());

        let offsets = groups
            .into_par_iter()
            .map(|group_id| {
                self.resolve_offsets(group_id)
                    .map(|offsets| offsets.for_topic(topic))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(offsets
            .into_iter()
            .filter(|offsets| !offsets.is_empty())
            .collect())
    }

    fn resolve_offsets(&self, group_id: String) -> Result<ConsumerGroupOffsets, anyhow::Error> {
        let offsets = self.admin.list_consumer_group_offsets(&group_id)?;
        Ok(ConsumerGroupOffsets::new(group_id, offsets))
    }
}

fn build_consumer_view(
    consumer_offsets: ConsumerGroupOffsets,
    topic: &TopicDescriptor,
) -> ConsumerView {
    let group_id = consumer_offsets.group_id();
    let mut consumer_topic = ConsumerTopicView::new(topic.name());

    for (topic_partition, offset) in consumer_offsets.offsets() {
        let partition = topic_partition.partition;
        let watermarks = topic.partition(partition);

        consumer_topic.add_offset(ConsumerPartitionView {
            group_id: group_id.clone(),
            topic: topic.name().clone(),
            partition,
            offset: *offset,
            size: watermarks.map_or(UNKNOWN_OFFSET, |x| x.max_offset),
            first_offset: watermarks.map_or(UNKNOWN_OFFSET, |x| x.min_offset),
        });
    }

    let mut consumer = ConsumerView::new(group_id.clone());
    consumer.add_topic(consumer_topic);
    consumer
}

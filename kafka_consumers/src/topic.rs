use crate::queries::get_topic_partitions_with_offsets::{
    GetTopicPartitionsWithOffsetsQueryResponseInternal, MinMaxOffset,
};
use getset::Getters;
use std::collections::HashMap;

/// Topic name plus the known watermarks of its partitions.
///
/// The lookup may be partial: a partition missing here is treated as unknown
/// by the consumer views built from it.
#[derive(Debug, Clone, Default, Getters)]
#[getset(get = "pub")]
pub struct TopicDescriptor {
    name: String,
    partitions: HashMap<i32, MinMaxOffset>,
}

impl TopicDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            partitions: HashMap::new(),
        }
    }

    pub fn with_partition(mut self, partition: i32, first_offset: i64, size: i64) -> Self {
        self.partitions.insert(
            partition,
            MinMaxOffset {
                min_offset: first_offset,
                max_offset: size,
            },
        );
        self
    }

    pub fn partition(&self, partition: i32) -> Option<&MinMaxOffset> {
        self.partitions.get(&partition)
    }

    pub fn partitions_count(&self) -> usize {
        self.partitions.len()
    }

    pub fn from_watermarks(
        name: impl Into<String>,
        response: GetTopicPartitionsWithOffsetsQueryResponseInternal,
    ) -> Self {
        Self {
            name: name.into(),
            partitions: response.partitions_offsets.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_lookup_is_partial() {
        let topic = TopicDescriptor::new("orders")
            .with_partition(0, 0, 100)
            .with_partition(1, 10, 50);

        let partition = topic.partition(1).unwrap();
        assert_eq!(partition.min_offset, 10);
        assert_eq!(partition.max_offset, 50);
        assert!(topic.partition(2).is_none());
        assert_eq!(topic.partitions_count(), 2);
    }

    #[test]
    fn descriptor_is_built_from_watermarks() {
        let response = GetTopicPartitionsWithOffsetsQueryResponseInternal {
            partitions_offsets: vec![
                (
                    0,
                    MinMaxOffset {
                        min_offset: 3,
                        max_offset: 7,
                    },
                ),
                (
                    1,
                    MinMaxOffset {
                        min_offset: 0,
                        max_offset: 0,
                    },
                ),
            ],
        };

        let topic = TopicDescriptor::from_watermarks("billing", response);

        assert_eq!(topic.name(), "billing");
        assert_eq!(topic.partitions_count(), 2);
        assert_eq!(topic.partition(0).unwrap().messages_count(), 4);
    }
}

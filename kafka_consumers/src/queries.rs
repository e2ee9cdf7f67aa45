pub mod get_consumers;
pub mod get_topic_partitions_with_offsets;

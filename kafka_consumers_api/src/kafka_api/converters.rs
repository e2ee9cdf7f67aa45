mod get_topic_consumers;
mod get_topic_partition_offset;
mod shared;

pub use get_topic_consumers::*;
pub use get_topic_partition_offset::*;
pub use shared::*;

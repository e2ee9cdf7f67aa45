#[derive(Debug)]
pub struct GetTopicPartitionsWithOffsetsQueryResponseInternal {
    pub partitions_offsets: Vec<(i32, MinMaxOffset)>,
}

/// Low and high watermark of a partition.
/// `max_offset` is the partition size, `min_offset` the first retained offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinMaxOffset {
    pub min_offset: i64,
    pub max_offset: i64,
}

impl MinMaxOffset {
    pub fn messages_count(&self) -> i64 {
        self.max_offset.max(0) - self.min_offset.max(0)
    }
}

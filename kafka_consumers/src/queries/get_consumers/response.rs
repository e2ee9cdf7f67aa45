/// Size or first offset of a partition the topic metadata doesn't know about.
pub const UNKNOWN_OFFSET: i64 = -1;

#[derive(Debug)]
pub struct GetTopicConsumersQueryResponseInternal {
    pub topic: String,
    pub consumers: Vec<ConsumerView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerView {
    pub group_id: String,
    pub topics: Vec<ConsumerTopicView>,
}

impl ConsumerView {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            topics: Vec::new(),
        }
    }

    pub fn add_topic(&mut self, topic: ConsumerTopicView) {
        self.topics.push(topic);
    }

    pub fn topic(&self, topic: &str) -> Option<&ConsumerTopicView> {
        self.topics.iter().find(|x| x.topic == topic)
    }

    pub fn lag(&self) -> i64 {
        self.topics.iter().map(ConsumerTopicView::lag).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerTopicView {
    pub topic: String,
    pub offsets: Vec<ConsumerPartitionView>,
}

impl ConsumerTopicView {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            offsets: Vec::new(),
        }
    }

    pub fn add_offset(&mut self, offset: ConsumerPartitionView) {
        self.offsets.push(offset);
    }

    pub fn partition(&self, partition: i32) -> Option<&ConsumerPartitionView> {
        self.offsets.iter().find(|x| x.partition == partition)
    }

    pub fn lag(&self) -> i64 {
        self.offsets.iter().map(ConsumerPartitionView::lag).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerPartitionView {
    pub group_id: String,
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub size: i64,
    pub first_offset: i64,
}

impl ConsumerPartitionView {
    /// Records between the committed offset and the high watermark.
    /// Unknown partitions report 0; offsets already removed by retention
    /// count from the first retained offset.
    pub fn lag(&self) -> i64 {
        if self.size < 0 || self.first_offset < 0 {
            0
        } else if self.offset < self.first_offset {
            self.size - self.first_offset
        } else {
            self.size - self.offset
        }
    }
}

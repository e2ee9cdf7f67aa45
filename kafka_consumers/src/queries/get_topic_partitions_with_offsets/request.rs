use crate::connection_settings::ConnectionSettings;

#[derive(Debug)]
pub struct GetTopicPartitionsWithOffsetsQueryInternal {
    pub connection_settings: ConnectionSettings,
    pub topic: String,
}

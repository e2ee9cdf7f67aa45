use crate::connection_settings::ConnectionSettings;

#[derive(Debug)]
pub struct GetTopicConsumersQueryInternal {
    pub connection_settings: ConnectionSettings,
    pub topic: String,
}

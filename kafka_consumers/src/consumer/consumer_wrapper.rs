use crate::connection_settings::ConnectionSettings;
use anyhow::Context;
use rdkafka::consumer::BaseConsumer;
use rdkafka::ClientConfig;
use std::ops::Deref;

/// Consumer handle used only for metadata, watermark and committed offset lookups.
/// It never subscribes and never commits.
pub struct ConsumerWrapper {
    consumer: BaseConsumer,
}

impl ConsumerWrapper {
    pub fn create_for_non_consuming(
        connection_settings: &ConnectionSettings,
        group: Option<&str>,
    ) -> Result<Self, anyhow::Error> {
        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        let mut config = ClientConfig::try_from(connection_settings)?;
        config
            .set("enable.auto.commit", "false")
            .set("enable.partition.eof", "false");

        if let Some(group) = group {
            config.set("group.id", group);
        }

        let consumer: BaseConsumer = config
            .create()
            .context("While creating kafka BaseConsumer")?;

        Ok(Self { consumer })
    }
}

impl Deref for ConsumerWrapper {
    type Target = BaseConsumer;

    fn deref(&self) -> &Self::Target {
        &self.consumer
    }
}

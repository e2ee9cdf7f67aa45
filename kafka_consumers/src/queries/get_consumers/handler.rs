use crate::admin::AdminWrapper;
use crate::queries::get_consumers::{
    ConsumerMonitor, GetTopicConsumersQueryInternal, GetTopicConsumersQueryResponseInternal,
};
use crate::queries::get_topic_partitions_with_offsets::fetch_topic_partitions_offsets;
use crate::topic::TopicDescriptor;
use anyhow::Context;
use tracing::info;

pub async fn get_topic_consumers(
    query: GetTopicConsumersQueryInternal,
) -> Result<GetTopicConsumersQueryResponseInternal, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || build_response(query));

    handle.await.context("While joining handle")?
}

fn build_response(
    query: GetTopicConsumersQueryInternal,
) -> Result<GetTopicConsumersQueryResponseInternal, anyhow::Error> {
    let admin = AdminWrapper::create(&query.connection_settings)?;

    let watermarks = fetch_topic_partitions_offsets(&admin, &query.topic)
        .with_context(|| format!("While fetching topic '{}' partitions", query.topic))?;
    let topic = TopicDescriptor::from_watermarks(query.topic.clone(), watermarks);

    let consumers = ConsumerMonitor::new(admin)
        .get_consumers(&topic)
        .with_context(|| format!("While resolving consumers of topic '{}'", query.topic))?;

    info!(
        "Resolved {} consumer groups of topic {}",
        consumers.len(),
        query.topic
    );

    Ok(GetTopicConsumersQueryResponseInternal {
        topic: query.topic,
        consumers,
    })
}

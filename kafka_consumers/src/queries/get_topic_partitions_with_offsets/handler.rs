use crate::consumer::ConsumerWrapper;
use crate::queries::get_topic_partitions_with_offsets::{
    GetTopicPartitionsWithOffsetsQueryInternal, GetTopicPartitionsWithOffsetsQueryResponseInternal,
    MinMaxOffset,
};
use anyhow::{bail, Context};
use rayon::prelude::*;
use rdkafka::consumer::Consumer;
use rdkafka::util::Timeout;
use std::time::Duration;
use tracing::trace;

pub async fn get_topic_partition_offsets(
    query: GetTopicPartitionsWithOffsetsQueryInternal,
) -> Result<GetTopicPartitionsWithOffsetsQueryResponseInternal, anyhow::Error> {
    let handle = tokio::task::spawn_blocking(move || build_response(query));

    handle.await.context("While joining handle")?
}

fn build_response(
    query: GetTopicPartitionsWithOffsetsQueryInternal,
) -> Result<GetTopicPartitionsWithOffsetsQueryResponseInternal, anyhow::Error> {
    let consumer = ConsumerWrapper::create_for_non_consuming(&query.connection_settings, None)
        .context("While creating consumer")?;

    fetch_topic_partitions_offsets(&consumer, &query.topic)
}

/// Blocking watermark lookup for every partition of `topic`, ordered by partition id.
pub fn fetch_topic_partitions_offsets(
    consumer: &ConsumerWrapper,
    topic: &str,
) -> Result<GetTopicPartitionsWithOffsetsQueryResponseInternal, anyhow::Error> {
    let metadata = consumer
        .fetch_metadata(Some(topic), Timeout::After(Duration::from_secs(5)))
        .with_context(|| format!("While fetching topic '{}' metadata", topic))?;

    trace!(
        "Got metadata for topic partition offset from broker. Count: {:?}",
        metadata.topics().len()
    );

    let [topic_metadata] = metadata.topics() else {
        bail!(
            "Incorrect topics count returned, expected 1, got: {}",
            metadata.topics().len()
        )
    };

    trace!(
        "Got data for topic. Name: {}, partitions: {}",
        topic_metadata.name(),
        topic_metadata.partitions().len()
    );
    let mut partitions = topic_metadata
        .partitions()
        .iter()
        .map(|x| x.id())
        .collect::<Vec<_>>();
    partitions.sort_unstable();

    let partitions_offsets = partitions
        .into_par_iter()
        .map(|x| fetch_topic_partition_offset(consumer, topic, x))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("While fetching watermarks for topic {}", topic))?;

    Ok(GetTopicPartitionsWithOffsetsQueryResponseInternal { partitions_offsets })
}

fn fetch_topic_partition_offset(
    consumer: &ConsumerWrapper,
    topic: &str,
    partition: i32,
) -> Result<(i32, MinMaxOffset), anyhow::Error> {
    let (low, high) = consumer
        .fetch_watermarks(topic, partition, Timeout::After(Duration::from_secs(5)))
        .with_context(|| {
            format!(
                "While fetching watermarks for topic {} and partition {}",
                topic, partition
            )
        })?;

    Ok((
        partition,
        MinMaxOffset {
            min_offset: low,
            max_offset: high,
        },
    ))
}

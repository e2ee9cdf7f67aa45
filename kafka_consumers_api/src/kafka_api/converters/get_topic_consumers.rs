use crate::kafka_api::converters::proto_connection_setting_to_internal;
use crate::kafka_api::proto::{
    ConsumerDto, ConsumerPartitionDto, ConsumerTopicDto, GetTopicConsumersQuery,
    GetTopicConsumersQueryResponse,
};
use anyhow::{bail, Context};
use kafka_consumers::queries::get_consumers::{
    ConsumerPartitionView, ConsumerTopicView, ConsumerView, GetTopicConsumersQueryInternal,
    GetTopicConsumersQueryResponseInternal,
};

pub fn proto_get_topic_consumers_to_internal(
    model: GetTopicConsumersQuery,
) -> Result<GetTopicConsumersQueryInternal, anyhow::Error> {
    let connection_settings = proto_connection_setting_to_internal(model.connection_settings)
        .context("While converting connection_settings")?;
    if model.topic.is_empty() {
        bail!("Topic can't be empty")
    }

    Ok(GetTopicConsumersQueryInternal {
        connection_settings,
        topic: model.topic,
    })
}

pub fn topic_consumers_to_proto_response(
    model: GetTopicConsumersQueryResponseInternal,
) -> GetTopicConsumersQueryResponse {
    let consumers = model.consumers.into_iter().map(consumer_to_dto).collect();

    GetTopicConsumersQueryResponse {
        topic: model.topic,
        consumers,
    }
}

fn consumer_to_dto(model: ConsumerView) -> ConsumerDto {
    let lag = model.lag();
    ConsumerDto {
        group_id: model.group_id,
        topics: model.topics.into_iter().map(consumer_topic_to_dto).collect(),
        lag,
    }
}

fn consumer_topic_to_dto(model: ConsumerTopicView) -> ConsumerTopicDto {
    let lag = model.lag();
    ConsumerTopicDto {
        topic: model.topic,
        partitions: model
            .offsets
            .into_iter()
            .map(consumer_partition_to_dto)
            .collect(),
        lag,
    }
}

fn consumer_partition_to_dto(model: ConsumerPartitionView) -> ConsumerPartitionDto {
    let lag = model.lag();
    ConsumerPartitionDto {
        group_id: model.group_id,
        topic: model.topic,
        partition: model.partition,
        offset: model.offset,
        size: model.size,
        first_offset: model.first_offset,
        lag,
    }
}

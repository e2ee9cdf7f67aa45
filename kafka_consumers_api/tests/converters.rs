use kafka_consumers::consumer::SecurityProtocol;
use kafka_consumers::queries::get_consumers::{
    ConsumerPartitionView, ConsumerTopicView, ConsumerView, GetTopicConsumersQueryResponseInternal,
    UNKNOWN_OFFSET,
};
use kafka_consumers::queries::get_topic_partitions_with_offsets::{
    GetTopicPartitionsWithOffsetsQueryResponseInternal, MinMaxOffset,
};
use kafka_consumers_api::error::ApplicationError;
use kafka_consumers_api::kafka_api::proto::security_protocol_dto::{Protocol, SslProtocolDto};
use kafka_consumers_api::kafka_api::proto::{
    ConnectionSettingsDto, GetTopicConsumersQuery, GetTopicPartitionsWithOffsetsQuery,
    SecurityProtocolDto,
};
use kafka_consumers_api::kafka_api::{
    proto_get_topic_consumers_to_internal, proto_get_topic_partition_offsets_internal,
    topic_consumers_to_proto_response,
    topic_partition_offsets_to_proto_response,
};
use tonic::{Code, Status};

fn connection_settings(protocol: Option<Protocol>) -> Option<ConnectionSettingsDto> {
    Some(ConnectionSettingsDto {
        brokers: vec!["localhost:9092".to_owned()],
        security_protocol: protocol.map(|x| SecurityProtocolDto { protocol: Some(x) }),
    })
}

fn partition(partition: i32, offset: i64, size: i64, first_offset: i64) -> ConsumerPartitionView {
    ConsumerPartitionView {
        group_id: "g1".to_owned(),
        topic: "orders".to_owned(),
        partition,
        offset,
        size,
        first_offset,
    }
}

#[test]
fn query_defaults_to_plaintext() -> Result<(), anyhow::Error> {
    let query = proto_get_topic_consumers_to_internal(GetTopicConsumersQuery {
        connection_settings: connection_settings(None),
        topic: "orders".to_owned(),
    })?;

    assert_eq!(query.topic, "orders");
    assert_eq!(query.connection_settings.brokers, vec!["localhost:9092"]);
    assert_eq!(
        query.connection_settings.security_protocol,
        SecurityProtocol::Plaintext
    );
    Ok(())
}

#[test]
fn query_keeps_ssl_protocol() -> Result<(), anyhow::Error> {
    let query = proto_get_topic_consumers_to_internal(GetTopicConsumersQuery {
        connection_settings: connection_settings(Some(Protocol::Ssl(SslProtocolDto {}))),
        topic: "orders".to_owned(),
    })?;

    assert_eq!(query.connection_settings.security_protocol, SecurityProtocol::Ssl);
    Ok(())
}

#[test]
fn query_without_connection_settings_is_rejected() {
    let error = proto_get_topic_consumers_to_internal(GetTopicConsumersQuery {
        connection_settings: None,
        topic: "orders".to_owned(),
    })
    .unwrap_err();

    assert_eq!(
        error.root_cause().to_string(),
        "Connection settings can't be null"
    );

    let status = Status::from(ApplicationError::InvalidArgument(error));
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[test]
fn query_without_topic_is_rejected() {
    let result = proto_get_topic_consumers_to_internal(GetTopicConsumersQuery {
        connection_settings: connection_settings(None),
        topic: String::new(),
    });

    assert!(result.is_err());
}

#[test]
fn watermarks_query_without_topic_is_rejected() {
    let error = proto_get_topic_partition_offsets_internal(GetTopicPartitionsWithOffsetsQuery {
        connection_settings: connection_settings(None),
        topic: String::new(),
    })
    .unwrap_err();

    assert_eq!(error.to_string(), "Topic can't be empty");

    let status = Status::from(ApplicationError::InvalidArgument(error));
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[test]
fn watermarks_query_keeps_topic() -> Result<(), anyhow::Error> {
    let query = proto_get_topic_partition_offsets_internal(GetTopicPartitionsWithOffsetsQuery {
        connection_settings: connection_settings(None),
        topic: "orders".to_owned(),
    })?;

    assert_eq!(query.topic, "orders");
    assert_eq!(query.connection_settings.brokers, vec!["localhost:9092"]);
    Ok(())
}

#[test]
fn consumers_are_converted_with_lags() {
    let mut topic = ConsumerTopicView::new("orders");
    topic.add_offset(partition(0, 80, 100, 0));
    topic.add_offset(partition(2, 10, UNKNOWN_OFFSET, UNKNOWN_OFFSET));
    let mut consumer = ConsumerView::new("g1");
    consumer.add_topic(topic);

    let response = topic_consumers_to_proto_response(GetTopicConsumersQueryResponseInternal {
        topic: "orders".to_owned(),
        consumers: vec![consumer],
    });

    assert_eq!(response.topic, "orders");
    assert_eq!(response.consumers.len(), 1);
    let consumer = &response.consumers[0];
    assert_eq!(consumer.group_id, "g1");
    assert_eq!(consumer.lag, 20);

    let topic = &consumer.topics[0];
    assert_eq!(topic.topic, "orders");
    assert_eq!(topic.lag, 20);
    assert_eq!(topic.partitions.len(), 2);

    let unknown = &topic.partitions[1];
    assert_eq!(unknown.partition, 2);
    assert_eq!(unknown.offset, 10);
    assert_eq!(unknown.size, -1);
    assert_eq!(unknown.first_offset, -1);
    assert_eq!(unknown.lag, 0);
}

#[test]
fn watermarks_are_converted_with_messages_count() {
    let response =
        topic_partition_offsets_to_proto_response(GetTopicPartitionsWithOffsetsQueryResponseInternal {
            partitions_offsets: vec![(
                0,
                MinMaxOffset {
                    min_offset: 10,
                    max_offset: 50,
                },
            )],
        });

    assert_eq!(response.partitions.len(), 1);
    assert_eq!(response.partitions[0].id, 0);
    assert_eq!(response.partitions[0].messages_count, 40);
}

#[test]
fn broker_failures_become_internal_status() {
    let status = Status::from(ApplicationError::Internal(anyhow::anyhow!(
        "Broker transport failure"
    )));

    assert_eq!(status.code(), Code::Internal);
    assert!(status.message().contains("Broker transport failure"));
}

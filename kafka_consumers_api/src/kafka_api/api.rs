use crate::error::ApplicationError;
use crate::kafka_api::proto::{
    GetTopicConsumersQuery, GetTopicConsumersQueryResponse, GetTopicPartitionsWithOffsetsQuery,
    GetTopicPartitionsWithOffsetsQueryResponse,
};
use crate::kafka_api::{
    proto, proto_get_topic_consumers_to_internal, proto_get_topic_partition_offsets_internal,
    topic_consumers_to_proto_response, topic_partition_offsets_to_proto_response,
};
use kafka_consumers::queries::get_consumers::get_topic_consumers;
use kafka_consumers::queries::get_topic_partitions_with_offsets::get_topic_partition_offsets;
use tonic::{Request, Response, Status};
use tracing::debug;

#[derive(Debug)]
pub struct KafkaService;

#[tonic::async_trait]
impl proto::KafkaService for KafkaService {
    #[tracing::instrument(skip_all)]
    async fn get_topic_consumers(
        &self,
        request: Request<GetTopicConsumersQuery>,
    ) -> Result<Response<GetTopicConsumersQueryResponse>, Status> {
        let proto_request = request.into_inner();
        debug!("New request: {:?}", proto_request);

        let query = proto_get_topic_consumers_to_internal(proto_request)
            .map_err(ApplicationError::InvalidArgument)?;

        debug!("Mapped request: {:?}", query);

        let response = get_topic_consumers(query)
            .await
            .map_err(ApplicationError::Internal)?;

        let proto_response = topic_consumers_to_proto_response(response);
        Ok(Response::new(proto_response))
    }

    #[tracing::instrument(skip_all)]
    async fn get_topic_partitions_with_offsets(
        &self,
        request: Request<GetTopicPartitionsWithOffsetsQuery>,
    ) -> Result<Response<GetTopicPartitionsWithOffsetsQueryResponse>, Status> {
        let proto_request = request.into_inner();

        let query = proto_get_topic_partition_offsets_internal(proto_request)
            .map_err(ApplicationError::InvalidArgument)?;

        let response = get_topic_partition_offsets(query)
            .await
            .map_err(ApplicationError::Internal)?;

        let proto_response = topic_partition_offsets_to_proto_response(response);
        Ok(Response::new(proto_response))
    }
}

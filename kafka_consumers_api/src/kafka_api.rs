mod api;
mod converters;

pub use api::*;
pub use converters::*;

pub mod proto {
    pub use kafka_service_server::*;
    tonic::include_proto!("kafka_consumers_api");

    pub(crate) const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("kafka_service_descriptor");
}

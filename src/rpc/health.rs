pub mod pb {
    #![allow(clippy::derive_partial_eq_without_eq)]
    tonic::include_proto!("grpc.health.v1");
}

#[cfg(feature = "client")]
pub use pb::health_client::HealthClient;
#[cfg(feature = "server")]
pub use pb::health_server::{Health, HealthServer};
pub use pb::health_check_response::ServingStatus;
pub use pb::{HealthCheckRequest, HealthCheckResponse};

/// Encoded `google.protobuf.FileDescriptorSet` for `health.proto`, for reflection services.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("grpc_health_v1");

/// protobuf package of the schema.
pub const PACKAGE: &str = "grpc.health.v1";
/// fully qualified service name used for routing.
pub const SERVICE_NAME: &str = "grpc.health.v1.Health";
/// route of the unary `Check` method.
pub const CHECK_PATH: &str = "/grpc.health.v1.Health/Check";
/// route of the server-streaming `Watch` method.
pub const WATCH_PATH: &str = "/grpc.health.v1.Health/Watch";

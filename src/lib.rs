//! Schema and tonic bindings for the gRPC health checking protocol,
//! `grpc.health.v1.Health`.
//!
//! The crate only carries the wire contract: the request/response messages,
//! the `ServingStatus` enum and the `Check`/`Watch` service definition. Deciding
//! what is healthy is left to the server built on top of it.

extern crate log;
extern crate prost;
extern crate tonic;
#[macro_use]
extern crate lazy_static;

pub mod error;
// internal packages.
pub mod interface;
pub mod rpc;

pub use error::Error;
pub use interface::messages::status_after_close;
#[cfg(feature = "client")]
pub use rpc::health::HealthClient;
#[cfg(feature = "server")]
pub use rpc::health::{Health, HealthServer};
pub use rpc::health::{
    HealthCheckRequest, HealthCheckResponse, ServingStatus, CHECK_PATH, FILE_DESCRIPTOR_SET,
    PACKAGE, SERVICE_NAME, WATCH_PATH,
};

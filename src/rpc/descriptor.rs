//! Read-only view over the descriptor set compiled from `health.proto`.
//!
//! The set is decoded on first use and shared afterwards. It lets callers
//! confirm the names, types and streaming flags that the wire contract fixes
//! without depending on generated code.

use log::{debug, log_enabled, Level};
use prost::Message;
use prost_types::{FileDescriptorProto, FileDescriptorSet, FileOptions};

use crate::error::{Error, Result};
use crate::rpc::health::{FILE_DESCRIPTOR_SET, PACKAGE};

const SERVICE: &str = "Health";
const RESPONSE_MESSAGE: &str = "HealthCheckResponse";
const STATUS_ENUM: &str = "ServingStatus";

lazy_static! {
    static ref DESCRIPTOR_SET: std::result::Result<FileDescriptorSet, prost::DecodeError> =
        FileDescriptorSet::decode(FILE_DESCRIPTOR_SET);
}

/// A single rpc of the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodShape {
    pub name: String,
    /// fully qualified request type, e.g. `grpc.health.v1.HealthCheckRequest`.
    pub input_type: String,
    /// fully qualified response type.
    pub output_type: String,
    pub client_streaming: bool,
    pub server_streaming: bool,
}

impl MethodShape {
    /// Route the method is served on, `/<package>.<service>/<method>`.
    pub fn path(&self, service: &ServiceShape) -> String {
        format!("/{}/{}", service.full_name(), self.name)
    }

    /// one request, one response.
    pub fn is_unary(&self) -> bool {
        !self.client_streaming && !self.server_streaming
    }
}

/// The service as declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceShape {
    pub package: String,
    pub name: String,
    pub methods: Vec<MethodShape>,
}

impl ServiceShape {
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodShape> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Decoded descriptor set, parsed once per process.
pub fn file_descriptor_set() -> Result<&'static FileDescriptorSet> {
    match DESCRIPTOR_SET.as_ref() {
        Ok(set) => {
            if log_enabled!(Level::Debug) {
                debug!("descriptor set - {} file(s)", set.file.len());
            }
            Ok(set)
        }
        Err(e) => Err(Error::Decode(e.clone())),
    }
}

fn health_file() -> Result<&'static FileDescriptorProto> {
    file_descriptor_set()?
        .file
        .iter()
        .find(|f| f.package() == PACKAGE)
        .ok_or_else(|| Error::MissingFile(PACKAGE.to_string()))
}

/// Shape of `grpc.health.v1.Health`.
pub fn health_service() -> Result<ServiceShape> {
    let file = health_file()?;
    let service = file
        .service
        .iter()
        .find(|s| s.name() == SERVICE)
        .ok_or_else(|| Error::MissingService(format!("{}.{}", PACKAGE, SERVICE)))?;

    let methods = service
        .method
        .iter()
        .map(|m| MethodShape {
            name: m.name().to_string(),
            input_type: m.input_type().trim_start_matches('.').to_string(),
            output_type: m.output_type().trim_start_matches('.').to_string(),
            client_streaming: m.client_streaming(),
            server_streaming: m.server_streaming(),
        })
        .collect();

    Ok(ServiceShape {
        package: file.package().to_string(),
        name: service.name().to_string(),
        methods,
    })
}

/// `ServingStatus` variants as `(name, number)` in declaration order.
pub fn serving_status_values() -> Result<Vec<(String, i32)>> {
    let qualified = format!("{}.{}.{}", PACKAGE, RESPONSE_MESSAGE, STATUS_ENUM);
    let status = health_file()?
        .message_type
        .iter()
        .find(|m| m.name() == RESPONSE_MESSAGE)
        .and_then(|m| m.enum_type.iter().find(|e| e.name() == STATUS_ENUM))
        .ok_or(Error::MissingEnum(qualified))?;

    Ok(status
        .value
        .iter()
        .map(|v| (v.name().to_string(), v.number()))
        .collect())
}

/// Language options declared on `health.proto`.
pub fn file_options() -> Result<FileOptions> {
    Ok(health_file()?.options.clone().unwrap_or_default())
}

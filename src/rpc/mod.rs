/// Descriptor inspection of the compiled schema.
pub mod descriptor;
/// Generated `grpc.health.v1` bindings.
pub mod health;

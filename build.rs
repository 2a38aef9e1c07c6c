use std::env::var;
use std::path::PathBuf;

const PROTO: &str = "proto/health.proto";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let descriptor_path = PathBuf::from(var("OUT_DIR")?).join("grpc_health_v1.bin");

    // cargo exposes enabled features as CARGO_FEATURE_<NAME>
    let build_server = var("CARGO_FEATURE_SERVER").is_ok();
    let build_client = var("CARGO_FEATURE_CLIENT").is_ok();

    tonic_build::configure()
        .file_descriptor_set_path(descriptor_path)
        .build_server(build_server)
        .build_client(build_client)
        .compile(&[PROTO], &["proto"])?;

    println!("cargo:rerun-if-changed={}", PROTO);

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Central proto repo is at ../../proto relative to core/
    let proto_root = "../../proto";
    let spog_proto = format!("{proto_root}/spog/v1/spog.proto");

    // Tell Cargo to rerun if the proto file changes
    println!("cargo:rerun-if-changed={spog_proto}");

    // Skip proto compilation if source doesn't exist (CI uses pre-generated file)
    if !std::path::Path::new(&spog_proto).exists() {
        println!("cargo:warning=Proto source not found, using pre-generated file");
        return Ok(());
    }

    // The ack streams carry google.protobuf.Empty; map it to the unit type
    // instead of pulling in prost-types for a single empty message.
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir("src/proto")
        .extern_path(".google.protobuf.Empty", "()")
        .compile_protos(&[&spog_proto], &[proto_root])?;

    Ok(())
}

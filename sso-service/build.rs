fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Client is generated too: integration tests drive the server through it
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile(&["../proto/sso.proto"], &["../proto"])?;

    Ok(())
}

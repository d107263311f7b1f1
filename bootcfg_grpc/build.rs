fn main() {
    tonic_build::configure()
        .build_server(false) // we only need the client side
        .build_client(true)
        .compile_protos(&["proto/bootcfg.proto"], &["proto"])
        .unwrap();
}

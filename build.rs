fn main() {
    println!("cargo:rerun-if-changed=proto/tensor_bundle.proto");
    std::fs::create_dir_all("src/protomodels").unwrap();
    protobuf_codegen::Codegen::new()
        .pure()
        .out_dir("src/protomodels")
        .include("proto")
        .input("proto/tensor_bundle.proto")
        .run()
        .unwrap();
}

use std::env;

fn main() {
    let jbig2enc_include = env::var("JBIG2ENC_INCLUDE_PATH")
        .expect("JBIG2ENC_INCLUDE_PATH must be set");
    let jbig2enc_lib =
        env::var("JBIG2ENC_LIB_PATH").expect("JBIG2ENC_LIB_PATH must be set");
    let leptonica_include = env::var("LEPTONICA_INCLUDE_PATH")
        .expect("LEPTONICA_INCLUDE_PATH must be set");

    // Compile the C-linkage adapter around jbig2_encode_generic
    cc::Build::new()
        .cpp(true)
        .std("c++17")
        .file("csrc/jbig2enc_shim.cpp")
        .include(&jbig2enc_include)
        .include(&leptonica_include)
        .compile("jbig2enc_shim");

    println!("cargo:rustc-link-search=native={jbig2enc_lib}");
    println!("cargo:rustc-link-lib=jbig2enc");

    // Leptonica usually lives on the default search path; allow an override.
    if let Ok(leptonica_lib) = env::var("LEPTONICA_LIB_PATH") {
        println!("cargo:rustc-link-search=native={leptonica_lib}");
    }
    println!("cargo:rustc-link-lib=lept");

    // jbig2enc is C++, so we need the C++ standard library
    println!("cargo:rustc-link-lib=stdc++");

    println!("cargo:rerun-if-changed=csrc/jbig2enc_shim.cpp");
    println!("cargo:rerun-if-env-changed=JBIG2ENC_INCLUDE_PATH");
    println!("cargo:rerun-if-env-changed=JBIG2ENC_LIB_PATH");
    println!("cargo:rerun-if-env-changed=LEPTONICA_INCLUDE_PATH");
    println!("cargo:rerun-if-env-changed=LEPTONICA_LIB_PATH");
}

fn main() {
    // shown in the site footer
    let built_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={built_at}");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data");
}

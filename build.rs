fn main() {
    // 起動バナーに表示するビルド時刻
    let built_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    println!("cargo:rustc-env=BUILD_TIMESTAMP={built_at}");

    println!("cargo:rerun-if-changed=build.rs");
}

fn main() {
    // Stamped into the page head and the server startup log
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
    // read through option_env! in src/config.rs
    println!("cargo:rerun-if-env-changed=PORTFOLIO_BASE_URL");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_REPLAY_DELAY_MS");
}

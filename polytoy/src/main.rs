fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => polytoy::load_options(&path).unwrap_or_else(|e| {
            log::warn!("could not load options from {}: {}", path, e);
            Default::default()
        }),
        None => Default::default(),
    };
    polytoy::main(options)
}

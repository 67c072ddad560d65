#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = dockprefs::cli::cli().await {
        log::error!("{}", e);
        eprintln!("dockprefs: {}", e);
        std::process::exit(1);
    }
}

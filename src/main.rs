mod config;
mod handlers;
mod models;
mod scheduler;
mod server;
mod store;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::AppConfig::from_env();

    server::run_server(&config).await;
}

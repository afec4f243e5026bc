//! Chatbot Data Gateway - main entry point
//!
//! Loads `config/<env>.yaml`, wires up logging, and serves the dynamic-data
//! endpoints until shutdown.

use std::sync::Arc;

use chatbot_gateway::clock::SystemClock;
use chatbot_gateway::config::AppConfig;
use chatbot_gateway::gateway::{self, state::AppState};
use chatbot_gateway::logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }

    let _guard = logging::init_logging(&config);
    tracing::info!(env = %env, "starting chatbot data gateway");

    let state = Arc::new(AppState::new(Arc::new(SystemClock)));
    gateway::run_server(&config.gateway, state).await
}

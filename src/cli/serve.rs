// src/cli/serve.rs — `registrar serve`

use std::sync::Arc;

use crate::api::{self, ApiState};
use crate::infra::config::Config;
use crate::registry::Registry;

pub async fn run_serve(mut config: Config, port: Option<u16>, seed: bool) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    let registry = if seed {
        crate::cli::seed::demo_registry()?
    } else {
        Arc::new(Registry::new())
    };

    let state = ApiState::new(registry, &config);
    api::start_server(&config, state).await
}

//! Tigon headless host.
//!
//! Stands in for a native web view so a page's bridge traffic can be replayed
//! from a terminal:
//! - stdin: one `{"channel": ..., "body": ...}` JSON object per line
//! - stdout: one script call per line (what the web view would evaluate)
//! - stderr: logs
//!
//! Every bridge request is answered by the echo handler.

use std::path::Path;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{fmt, EnvFilter};

use tigon_bridge::config::{self, TigonConfig, DEFAULT_CONFIG_PATH};
use tigon_bridge::executor::{ScriptHost, WriterHost};
use tigon_bridge::services::EchoHandler;
use tigon_bridge::{host, BridgeView};
use tigon_core::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cfg = load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let script_host: Arc<dyn ScriptHost> = Arc::new(WriterHost::new(std::io::stdout()));
    let view = BridgeView::new(&cfg.view, Arc::clone(&script_host));
    let handler = Arc::new(EchoHandler::new(script_host));
    view.install(&handler)?;

    tracing::info!(
        inline_media = view.allows_inline_media_playback(),
        "tigon-host ready, reading messages from stdin"
    );

    let res = host::run(&view, BufReader::new(tokio::io::stdin())).await;
    view.uninstall()?;
    let stats = res?;

    tracing::info!(
        delivered = stats.delivered,
        invalid = stats.invalid,
        undelivered = stats.undelivered,
        "tigon-host stopped"
    );
    Ok(())
}

fn load_config() -> Result<TigonConfig> {
    match std::env::args().nth(1) {
        Some(path) => config::load_from_file(&path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            config::load_from_file(DEFAULT_CONFIG_PATH)
        }
        None => Ok(TigonConfig::default()),
    }
}

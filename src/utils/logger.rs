use tracing_subscriber::fmt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "inventory_model=debug,info"
    } else {
        "inventory_model=info"
    }
}

/// `RUST_LOG` 優先，否則使用預設層級
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

// 只輸出訊息本身，不帶 target、執行緒與原始碼位置
fn message_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(message_layer().compact())
        .init();
}

/// One JSON object per line, for log collectors.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(message_layer().json())
        .init();
}

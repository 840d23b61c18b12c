use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// verbose 時固定為 debug，否則使用設定的 level
pub fn filter_directive(verbose: bool, level: &str) -> String {
    if verbose {
        "zoo_query=debug,info".to_string()
    } else {
        format!("zoo_query={}", level)
    }
}

fn default_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

pub fn init_cli_logger(verbose: bool, level: &str) {
    let filter = default_filter(&filter_directive(verbose, level));

    // try_init: 測試或重複呼叫時不要 panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger(verbose: bool, level: &str) {
    let filter = default_filter(&filter_directive(verbose, level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Pretty-print JSON written to stdout.
    pub pretty_json: bool,
}

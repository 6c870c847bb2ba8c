use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Surgirisk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address. A local tool: loopback only unless overridden.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8420";

/// Bind address, overridable via `SURGIRISK_ADDR`.
pub fn bind_addr() -> SocketAddr {
    std::env::var("SURGIRISK_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address is valid")
        })
}

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    "surgirisk=info,tower_http=warn".to_string()
}

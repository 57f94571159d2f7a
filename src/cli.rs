//! Tracing initialization for the `btu` binary.
//!
//! Grounded in `lockframe-server`'s `main.rs`: an `EnvFilter` from
//! `RUST_LOG`, falling back to a caller-supplied default, feeding a plain
//! `fmt` layer. The library itself never calls this — only the binary does.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global tracing subscriber. `default_level` is used when
/// `RUST_LOG` is unset (e.g. `"info"`, `"btu=debug"`). `force_debug`
/// overrides `default_level` to `"debug"` first — wired to `Config::debug`
/// (`BTU_DEBUG`) so that setting falls back to an observable effect instead
/// of a read-only, untested field.
pub fn init_tracing(default_level: &str, force_debug: bool) {
    let default_level = if force_debug { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

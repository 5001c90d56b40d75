//! Profiling utilities based on the `puffin` crate.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

use crate::config::{Config, ProfilingMode};

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Record scopes in-process only.
    InProcess,
    /// Send profiling data to puffin_viewer via HTTP.
    #[cfg(feature = "profiling")]
    PuffinHttp,
}

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Initialize profiling with the specified backend.
///
/// # Example
/// ```no_run
/// use trellis_core::profiling::{init_profiling, ProfilingBackend};
///
/// init_profiling(ProfilingBackend::InProcess);
/// ```
pub fn init_profiling(backend: ProfilingBackend) {
    puffin::set_scopes_on(true);

    match backend {
        ProfilingBackend::InProcess => {}
        #[cfg(feature = "profiling")]
        ProfilingBackend::PuffinHttp => match puffin_http::Server::new("0.0.0.0:8585") {
            Ok(server) => {
                tracing::info!("Puffin profiler server started on http://0.0.0.0:8585");
                let _ = PROFILING_SERVER.set(server);
            }
            Err(e) => {
                tracing::error!("Failed to start puffin server: {}", e);
            }
        },
    }
}

/// Enable profiling according to `config.profiling`.
pub fn init_from_config(config: &Config) {
    match config.profiling {
        ProfilingMode::Off => puffin::set_scopes_on(false),
        ProfilingMode::On => init_profiling(ProfilingBackend::InProcess),
        #[cfg(feature = "profiling")]
        ProfilingMode::WithWebserver => init_profiling(ProfilingBackend::PuffinHttp),
        #[cfg(not(feature = "profiling"))]
        ProfilingMode::WithWebserver => {
            tracing::warn!("puffin_http support not compiled in, recording in-process only");
            init_profiling(ProfilingBackend::InProcess);
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per iteration of the event loop (poll, dispatch, expose).
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

/// Configuration for the Trellis toolkit runtime.
#[derive(Debug, Clone)]
pub struct Config {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info,trellis_ui=debug".to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but disabled
    Off,
    /// Scopes are recorded and can be read by an in-process viewer
    On,
    /// Scopes are recorded and served to `puffin_viewer` over HTTP
    WithWebserver,
}

use crate::conf::types::RailwatchConfig;

pub const BIND_HOST_ENV: &str = "BIND_HOST";
pub const PORT_ENV: &str = "PORT";

/// Listen address overrides taken from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub bind_host: Option<String>,
    pub port: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            bind_host: non_empty_var(BIND_HOST_ENV),
            port: non_empty_var(PORT_ENV),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bind_host.is_none() && self.port.is_none()
    }

    /// Rewrite `server.listen`, keeping whichever half is not overridden.
    ///
    /// The result is not checked here; a bad port surfaces during validation.
    pub fn apply(&self, cfg: &mut RailwatchConfig) {
        if self.is_empty() {
            return;
        }

        let (host, port) = split_listen(&cfg.server.listen);
        let host = match &self.bind_host {
            Some(h) if h.contains(':') && !h.starts_with('[') => format!("[{h}]"),
            Some(h) => h.clone(),
            None => host.to_string(),
        };
        let port = self.port.as_deref().unwrap_or(port);

        let listen = format!("{host}:{port}");
        tracing::debug!(from = %cfg.server.listen, to = %listen, "listen address overridden");
        cfg.server.listen = listen;
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn split_listen(listen: &str) -> (&str, &str) {
    match listen.rsplit_once(':') {
        // A bare IPv6 address without brackets has no port to split off.
        Some((host, _)) if host.contains(':') && !host.starts_with('[') => (listen, ""),
        Some((host, port)) => (host, port),
        None => (listen, ""),
    }
}

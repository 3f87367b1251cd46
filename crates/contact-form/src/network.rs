// File: src/network.rs
// Purpose: Browser connectivity changes (observed and logged, never acted on)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    Online,
    Offline,
}

impl NetworkStatus {
    pub fn log_message(self) -> &'static str {
        match self {
            NetworkStatus::Online => "Network connection restored",
            NetworkStatus::Offline => "Network connection lost",
        }
    }
}

/// Log a connectivity change and return the logged line
pub fn report(status: NetworkStatus) -> &'static str {
    let message = status.log_message();
    match status {
        NetworkStatus::Online => tracing::info!("{message}"),
        NetworkStatus::Offline => tracing::warn!("{message}"),
    }
    message
}

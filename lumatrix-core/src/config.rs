//! Compiled-in configuration type definitions
//!
//! Every parameter of the node is fixed at build time: the platform crate
//! constructs a [`NodeConfig`] from constants and hands it to the node.
//! There is no file, flash, or environment surface.

/// Network attach timeout. A stuck association attempt leaves the radio
/// stack in an unrecoverable state, so exceeding this is fatal.
pub const ATTACH_TIMEOUT_MS: u32 = 20_000;

/// Minimum delay between a session closure and the next open attempt
pub const RECONNECT_DELAY_MS: u32 = 3_000;

/// Consecutive session failures after which network attachment is
/// re-verified before the next open attempt
pub const SESSION_FAILURE_THRESHOLD: u8 = 3;

/// Wireless credentials, one of two modes selected at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Credentials {
    /// Personal-mode network (pre-shared key)
    Personal {
        ssid: &'static str,
        secret: &'static str,
    },
    /// Enterprise-identity network (e.g. eduroam)
    Enterprise {
        identity: &'static str,
        username: &'static str,
        secret: &'static str,
    },
}

impl Credentials {
    /// Mode label for boot-time logging
    pub fn mode_name(&self) -> &'static str {
        match self {
            Credentials::Personal { .. } => "personal",
            Credentials::Enterprise { .. } => "enterprise",
        }
    }
}

/// Remote peer of the transport session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportTarget {
    pub host: &'static str,
    pub port: u16,
    pub path: &'static str,
    /// Use the secure (TLS) variant of the transport
    pub secure: bool,
}

/// Complete node configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeConfig {
    pub credentials: Credentials,
    pub target: TransportTarget,
    /// Which pair this panel belongs to; sent in the join handshake
    pub pair: u8,
    pub attach_timeout_ms: u32,
    pub reconnect_delay_ms: u32,
    pub session_failure_threshold: u8,
}

impl NodeConfig {
    /// Build a config with the default timing policy
    pub const fn new(credentials: Credentials, target: TransportTarget, pair: u8) -> Self {
        Self {
            credentials,
            target,
            pair,
            attach_timeout_ms: ATTACH_TIMEOUT_MS,
            reconnect_delay_ms: RECONNECT_DELAY_MS,
            session_failure_threshold: SESSION_FAILURE_THRESHOLD,
        }
    }
}

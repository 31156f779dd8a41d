use std::{fmt, str};
use thiserror::Error;

/// The network interfaces a simulated printer may expose.
///
/// The set is closed: a printer model supports some subset of these
/// (see [`NetworkConfig::support`]) and any query for an interface outside
/// that subset fails with [`NetworkError::UnknownInterface`].
///
/// ```
/// # use printersim_core::NetworkInterface;
/// let interface: NetworkInterface = "eth".parse().unwrap();
/// assert_eq!(interface, NetworkInterface::Wired);
/// assert_eq!(interface.to_string(), "wired");
/// ```
///
/// [`NetworkConfig::support`]: crate::NetworkConfig::support
/// [`NetworkError::UnknownInterface`]: crate::NetworkError::UnknownInterface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NetworkInterface {
    /// the ethernet port
    Wired,
    /// the wifi module
    Wireless,
    /// a loopback-style interface only present on test builds
    Loopback,
}

/// Error returned when a name does not match any [`NetworkInterface`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown network interface `{0}', expecting one of: wired, wireless, loopback")]
pub struct ParseInterfaceError(String);

impl NetworkInterface {
    /// every interface, in declaration order
    pub const ALL: [Self; 3] = [Self::Wired, Self::Wireless, Self::Loopback];

    /// Returns the canonical lowercase name of the interface.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wired => "wired",
            Self::Wireless => "wireless",
            Self::Loopback => "loopback",
        }
    }
}

impl str::FromStr for NetworkInterface {
    type Err = ParseInterfaceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wired" | "eth" | "ethernet" => Ok(Self::Wired),
            "wireless" | "wifi" | "wlan" => Ok(Self::Wireless),
            "loopback" | "lo" => Ok(Self::Loopback),
            _ => Err(ParseInterfaceError(s.to_owned())),
        }
    }
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

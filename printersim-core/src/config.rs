use crate::{defaults::PROXY_KEY, NetworkInterface};
use logos::Logos;
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};
use thiserror::Error;

/// Network configuration of a simulated printer.
///
/// Records which [`NetworkInterface`]s the printer model has, which of
/// them have an address and the port of the HTTP proxy, if any.
///
/// ## Textual form
///
/// Entries are separated by whitespace or `;`:
///
/// | Entry | Meaning |
/// |-------|---------|
/// | `wired` | interface supported, no address |
/// | `wired=192.168.1.50` | interface supported with that address |
/// | `proxy=8080` | HTTP proxy on port 8080 |
///
/// ```
/// # use printersim_core::{NetworkConfig, NetworkInterface};
/// let config: NetworkConfig = "wired=192.168.1.50; wireless; proxy=8080".parse().unwrap();
///
/// assert_eq!(config.ip_address(NetworkInterface::Wired), Some("192.168.1.50"));
/// assert_eq!(config.ip_address(NetworkInterface::Wireless), None);
/// assert!(config.is_supported(NetworkInterface::Wireless));
/// assert!(!config.is_supported(NetworkInterface::Loopback));
/// assert_eq!(config.proxy_http_port(), Some(8080));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    supported: BTreeSet<NetworkInterface>,

    /// every key is also in `supported`
    addresses: BTreeMap<NetworkInterface, String>,

    proxy_http_port: Option<u16>,
}

/// Error returned when building or parsing a [`NetworkConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown configuration key `{key}'")]
    UnknownKey { key: String },
    #[error("Configuration key `{key}' expects a value")]
    MissingValue { key: String },
    #[error("Invalid HTTP proxy port `{value}', expecting a number in 1..=65535")]
    InvalidPort { value: String },
    #[error("Invalid IP address `{address}'")]
    InvalidAddress { address: String },
    #[error("Configuration key `{key}' is set more than once")]
    DuplicateEntry { key: String },
    #[error("Unexpected token `{token}'")]
    UnexpectedToken { token: String },
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")] // Ignore this regex pattern between tokens
enum Token {
    #[token("=")]
    Equals,
    #[token(";")]
    Separator,

    #[regex("[A-Za-z0-9:][A-Za-z0-9._:-]*")]
    Word,
}

fn is_valid_address(address: &str) -> bool {
    let mut chars = address.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphanumeric() || first == ':')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '-'))
}

impl NetworkConfig {
    /// An empty configuration: no interface, no proxy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over the supported interfaces, in [`NetworkInterface`] order.
    pub fn supported(&self) -> impl Iterator<Item = NetworkInterface> + '_ {
        self.supported.iter().copied()
    }

    #[inline]
    pub fn is_supported(&self, interface: NetworkInterface) -> bool {
        self.supported.contains(&interface)
    }

    /// Returns the address of `interface`, `None` if it has none (or is
    /// not supported at all).
    pub fn ip_address(&self, interface: NetworkInterface) -> Option<&str> {
        self.addresses.get(&interface).map(String::as_str)
    }

    #[inline]
    pub fn proxy_http_port(&self) -> Option<u16> {
        self.proxy_http_port
    }

    /// Add `interface` to the supported set.
    ///
    /// returns `false` if the interface was already supported.
    pub fn support(&mut self, interface: NetworkInterface) -> bool {
        self.supported.insert(interface)
    }

    /// Assign an address to `interface`, adding it to the supported set if
    /// needed.
    ///
    /// If the interface already had an address the new one replaces it,
    /// returning the old one.
    pub fn set_ip_address(
        &mut self,
        interface: NetworkInterface,
        address: impl Into<String>,
    ) -> Result<Option<String>, ConfigError> {
        let address = address.into();
        if !is_valid_address(&address) {
            return Err(ConfigError::InvalidAddress { address });
        }

        self.supported.insert(interface);
        Ok(self.addresses.insert(interface, address))
    }

    /// Remove the address of `interface`; the interface stays supported.
    pub fn clear_ip_address(&mut self, interface: NetworkInterface) -> Option<String> {
        self.addresses.remove(&interface)
    }

    /// Set the HTTP proxy port, returning the previous one.
    ///
    /// Port `0` is refused.
    pub fn set_proxy_http_port(&mut self, port: u16) -> Result<Option<u16>, ConfigError> {
        if port == 0 {
            return Err(ConfigError::InvalidPort {
                value: port.to_string(),
            });
        }
        Ok(self.proxy_http_port.replace(port))
    }

    pub fn clear_proxy_http_port(&mut self) -> Option<u16> {
        self.proxy_http_port.take()
    }

    fn apply_entry(&mut self, key: &str, value: Option<&str>) -> Result<(), ConfigError> {
        if key.eq_ignore_ascii_case(PROXY_KEY) {
            let Some(value) = value else {
                return Err(ConfigError::MissingValue {
                    key: key.to_owned(),
                });
            };
            if self.proxy_http_port.is_some() {
                return Err(ConfigError::DuplicateEntry {
                    key: key.to_owned(),
                });
            }
            let port = value.parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                value: value.to_owned(),
            })?;
            self.set_proxy_http_port(port)?;
            return Ok(());
        }

        let interface: NetworkInterface =
            key.parse().map_err(|_| ConfigError::UnknownKey {
                key: key.to_owned(),
            })?;
        if self.is_supported(interface) {
            return Err(ConfigError::DuplicateEntry {
                key: key.to_owned(),
            });
        }

        match value {
            Some(address) => {
                self.set_ip_address(interface, address)?;
            }
            None => {
                self.support(interface);
            }
        }
        Ok(())
    }
}

impl FromStr for NetworkConfig {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = Token::lexer(s)
            .spanned()
            .map(|(token, span)| {
                let slice = &s[span];
                token
                    .map(|token| (token, slice))
                    .map_err(|()| ConfigError::UnexpectedToken {
                        token: slice.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = Self::new();
        let mut tokens = tokens.into_iter().peekable();

        while let Some((token, key)) = tokens.next() {
            match token {
                Token::Separator => continue,
                Token::Equals => {
                    return Err(ConfigError::UnexpectedToken {
                        token: key.to_owned(),
                    })
                }
                Token::Word => (),
            }

            let value = if tokens.next_if(|(token, _)| *token == Token::Equals).is_some() {
                match tokens.next() {
                    Some((Token::Word, value)) => Some(value),
                    Some((_, token)) => {
                        return Err(ConfigError::UnexpectedToken {
                            token: token.to_owned(),
                        })
                    }
                    None => {
                        return Err(ConfigError::MissingValue {
                            key: key.to_owned(),
                        })
                    }
                }
            } else {
                None
            };

            config.apply_entry(key, value)?;
        }

        Ok(config)
    }
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<String> = self
            .supported()
            .map(|interface| match self.ip_address(interface) {
                Some(address) => format!("{interface}={address}"),
                None => interface.to_string(),
            })
            .collect();
        if let Some(port) = self.proxy_http_port {
            entries.push(format!("{PROXY_KEY}={port}"));
        }

        f.write_str(&entries.join("; "))
    }
}

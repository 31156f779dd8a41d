use crate::{
    config::{ConfigError, NetworkConfig},
    defaults::{DEFAULT_INTERFACES, LOOPBACK_ADDRESS},
    NetworkError, NetworkInterface, Printer,
};
use log::{debug, trace};
use std::{
    str::FromStr,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use thiserror::Error;

/// An in-memory simulated printer.
///
/// `SimPrinter` is a handle: cloning it is cheap and every clone sees the
/// same network state. The test harness keeps one clone to reconfigure the
/// printer while the test queries it through the [`Printer`] trait.
///
/// ```
/// use printersim_core::{NetworkError, NetworkInterface, Printer, SimPrinter};
///
/// let printer = SimPrinter::builder()
///     .set_ip_address(NetworkInterface::Wired, "192.168.1.50")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     printer.network_ip_address_get(NetworkInterface::Wired).unwrap(),
///     "192.168.1.50"
/// );
/// assert_eq!(
///     printer.network_proxy_http_port_get(),
///     Err(NetworkError::ProxyNotConfigured)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimPrinter {
    state: Arc<RwLock<NetworkConfig>>,
}

/// Builder for a [`SimPrinter`].
///
/// Obtained via [`SimPrinter::builder`]. The printer starts with the
/// [`DEFAULT_INTERFACES`] supported and nothing configured.
///
/// The setters can be chained; the first invalid value is reported by
/// [`build`](SimPrinterBuilder::build).
///
/// [`DEFAULT_INTERFACES`]: crate::defaults::DEFAULT_INTERFACES
#[derive(Debug)]
pub struct SimPrinterBuilder {
    config: NetworkConfig,
    error: Option<ConfigError>,
}

/// Error returned when reconfiguring a running [`SimPrinter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconfigureError {
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl SimPrinterBuilder {
    fn new() -> Self {
        let mut config = NetworkConfig::new();
        for interface in DEFAULT_INTERFACES {
            config.support(interface);
        }
        Self {
            config,
            error: None,
        }
    }

    fn record(&mut self, result: Result<(), ConfigError>) {
        if let Err(error) = result {
            self.error.get_or_insert(error);
        }
    }

    /// Add an interface to the printer model without giving it an address.
    pub fn support(mut self, interface: NetworkInterface) -> Self {
        self.config.support(interface);
        self
    }

    pub fn set_ip_address(
        mut self,
        interface: NetworkInterface,
        address: impl Into<String>,
    ) -> Self {
        let result = self.config.set_ip_address(interface, address).map(|_| ());
        self.record(result);
        self
    }

    /// Support the [`NetworkInterface::Loopback`] interface with the
    /// [`LOOPBACK_ADDRESS`].
    ///
    /// [`LOOPBACK_ADDRESS`]: crate::defaults::LOOPBACK_ADDRESS
    pub fn with_loopback(self) -> Self {
        self.set_ip_address(NetworkInterface::Loopback, LOOPBACK_ADDRESS)
    }

    pub fn set_proxy_http_port(mut self, port: u16) -> Self {
        let result = self.config.set_proxy_http_port(port).map(|_| ());
        self.record(result);
        self
    }

    pub fn build(self) -> Result<SimPrinter, ConfigError> {
        let Self { config, error } = self;
        match error {
            Some(error) => Err(error),
            None => Ok(SimPrinter::new(config)),
        }
    }
}

impl SimPrinter {
    /// Create a printer with exactly the given network configuration.
    pub fn new(config: NetworkConfig) -> Self {
        debug!("new simulated printer: {config}");
        Self {
            state: Arc::new(RwLock::new(config)),
        }
    }

    pub fn builder() -> SimPrinterBuilder {
        SimPrinterBuilder::new()
    }

    /// Returns a snapshot of the current network configuration.
    pub fn config(&self) -> Result<NetworkConfig, NetworkError> {
        self.read().map(|config| config.clone())
    }

    /// Assign a new address to an interface of the printer.
    ///
    /// Unlike [`NetworkConfig::set_ip_address`], this does not add the
    /// interface to the printer model: a printer cannot grow a new network
    /// port at runtime.
    pub fn set_ip_address(
        &self,
        interface: NetworkInterface,
        address: impl Into<String>,
    ) -> Result<Option<String>, ReconfigureError> {
        let mut config = self.write()?;
        if !config.is_supported(interface) {
            return Err(NetworkError::UnknownInterface { interface }.into());
        }

        let address = address.into();
        debug!("{interface}: set ip address {address}");
        Ok(config.set_ip_address(interface, address)?)
    }

    /// Remove the address of an interface, returning it.
    pub fn clear_ip_address(
        &self,
        interface: NetworkInterface,
    ) -> Result<Option<String>, NetworkError> {
        let mut config = self.write()?;
        if !config.is_supported(interface) {
            return Err(NetworkError::UnknownInterface { interface });
        }

        debug!("{interface}: clear ip address");
        Ok(config.clear_ip_address(interface))
    }

    pub fn set_proxy_http_port(&self, port: u16) -> Result<Option<u16>, ReconfigureError> {
        debug!("set http proxy port {port}");
        Ok(self.write()?.set_proxy_http_port(port)?)
    }

    pub fn clear_proxy_http_port(&self) -> Result<Option<u16>, NetworkError> {
        debug!("clear http proxy port");
        Ok(self.write()?.clear_proxy_http_port())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, NetworkConfig>, NetworkError> {
        self.state.read().map_err(|error| NetworkError::Internal {
            reason: format!("network state poisoned: {error}"),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, NetworkConfig>, NetworkError> {
        self.state.write().map_err(|error| NetworkError::Internal {
            reason: format!("network state poisoned: {error}"),
        })
    }
}

impl FromStr for SimPrinter {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self::new)
    }
}

impl Printer for SimPrinter {
    type Error = NetworkError;

    fn network_ip_address_get(&self, interface: NetworkInterface) -> Result<String, Self::Error> {
        let config = self.read()?;
        if !config.is_supported(interface) {
            trace!("{interface}: not supported");
            return Err(NetworkError::UnknownInterface { interface });
        }

        let Some(address) = config.ip_address(interface) else {
            trace!("{interface}: no ip address");
            return Err(NetworkError::InterfaceNotConfigured { interface });
        };

        trace!("{interface}: ip address {address}");
        Ok(address.to_owned())
    }

    fn network_proxy_http_port_get(&self) -> Result<u16, Self::Error> {
        let port = self
            .read()?
            .proxy_http_port()
            .ok_or(NetworkError::ProxyNotConfigured)?;

        trace!("http proxy port {port}");
        Ok(port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn builder_defaults() {
        let printer = SimPrinter::builder().build().unwrap();
        let config = printer.config().unwrap();

        assert_eq!(
            config.supported().collect::<Vec<_>>(),
            DEFAULT_INTERFACES.to_vec()
        );
        assert_eq!(config.proxy_http_port(), None);

        for interface in DEFAULT_INTERFACES {
            assert_eq!(
                printer.network_ip_address_get(interface),
                Err(NetworkError::InterfaceNotConfigured { interface })
            );
        }
        assert_eq!(
            printer.network_ip_address_get(NetworkInterface::Loopback),
            Err(NetworkError::UnknownInterface {
                interface: NetworkInterface::Loopback
            })
        );
    }

    #[test]
    fn builder_loopback() {
        let printer = SimPrinter::builder().with_loopback().build().unwrap();
        assert_eq!(
            printer
                .network_ip_address_get(NetworkInterface::Loopback)
                .unwrap(),
            LOOPBACK_ADDRESS
        );
    }

    #[test]
    fn builder_reports_first_error() {
        let error = SimPrinter::builder()
            .set_proxy_http_port(0)
            .set_ip_address(NetworkInterface::Wired, "")
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidPort {
                value: "0".to_owned()
            }
        );
    }

    #[test]
    fn from_str() {
        let printer: SimPrinter = "wired=10.0.0.5 proxy=8080".parse().unwrap();

        assert_eq!(
            printer.network_ip_address_get(NetworkInterface::Wired).unwrap(),
            "10.0.0.5"
        );
        assert_eq!(
            printer.network_ip_address_get(NetworkInterface::Wireless),
            Err(NetworkError::UnknownInterface {
                interface: NetworkInterface::Wireless
            })
        );
        assert_eq!(printer.network_proxy_http_port_get(), Ok(8080));
    }

    #[test]
    fn clones_share_state() {
        let harness = SimPrinter::builder().build().unwrap();
        let printer = harness.clone();

        assert_eq!(
            harness.set_ip_address(NetworkInterface::Wireless, "10.1.1.1"),
            Ok(None)
        );
        assert_eq!(harness.set_proxy_http_port(3128), Ok(None));

        assert_eq!(
            printer
                .network_ip_address_get(NetworkInterface::Wireless)
                .unwrap(),
            "10.1.1.1"
        );
        assert_eq!(printer.network_proxy_http_port_get(), Ok(3128));

        assert_eq!(
            harness.clear_ip_address(NetworkInterface::Wireless),
            Ok(Some("10.1.1.1".to_owned()))
        );
        assert_eq!(harness.clear_proxy_http_port(), Ok(Some(3128)));
        assert_eq!(
            printer.network_ip_address_get(NetworkInterface::Wireless),
            Err(NetworkError::InterfaceNotConfigured {
                interface: NetworkInterface::Wireless
            })
        );
        assert_eq!(
            printer.network_proxy_http_port_get(),
            Err(NetworkError::ProxyNotConfigured)
        );
    }

    #[test]
    fn reconfigure_unsupported_interface() {
        let printer = SimPrinter::builder().build().unwrap();

        assert_eq!(
            printer.set_ip_address(NetworkInterface::Loopback, "127.0.0.1"),
            Err(ReconfigureError::Network(NetworkError::UnknownInterface {
                interface: NetworkInterface::Loopback
            }))
        );
        assert_eq!(
            printer.clear_ip_address(NetworkInterface::Loopback),
            Err(NetworkError::UnknownInterface {
                interface: NetworkInterface::Loopback
            })
        );
        assert!(!printer
            .config()
            .unwrap()
            .is_supported(NetworkInterface::Loopback));
    }

    #[test]
    fn reconfigure_invalid_values() {
        let printer = SimPrinter::builder().build().unwrap();

        assert_eq!(
            printer.set_proxy_http_port(0),
            Err(ReconfigureError::Config(ConfigError::InvalidPort {
                value: "0".to_owned()
            }))
        );
        assert!(matches!(
            printer.set_ip_address(NetworkInterface::Wired, "not an address"),
            Err(ReconfigureError::Config(ConfigError::InvalidAddress { .. }))
        ));
    }

    #[test]
    fn poisoned_state_is_an_internal_fault() {
        let printer = SimPrinter::builder().set_proxy_http_port(80).build().unwrap();
        let clone = printer.clone();

        let _ = thread::spawn(move || {
            let _guard = clone.state.write().unwrap();
            panic!("poisoning the printer state");
        })
        .join();

        assert!(matches!(
            printer.network_proxy_http_port_get(),
            Err(NetworkError::Internal { .. })
        ));
        assert!(matches!(
            printer.network_ip_address_get(NetworkInterface::Wired),
            Err(NetworkError::Internal { .. })
        ));
    }

    #[test]
    fn query_from_several_threads() {
        let printer = SimPrinter::builder()
            .set_ip_address(NetworkInterface::Wired, "192.168.1.50")
            .build()
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let printer = printer.clone();
                thread::spawn(move || printer.network_ip_address_get(NetworkInterface::Wired))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "192.168.1.50");
        }
    }
}

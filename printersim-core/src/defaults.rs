use crate::NetworkInterface;

/// Default supported interfaces
///
/// The interfaces a printer built with [`SimPrinter::builder`] has before
/// any other configuration: the ethernet port and the wifi module. None of
/// them has an address yet.
///
/// ```
/// # use printersim_core::{defaults::*, NetworkInterface};
/// assert_eq!(
///     DEFAULT_INTERFACES,
///     [NetworkInterface::Wired, NetworkInterface::Wireless],
/// );
/// ```
///
/// [`SimPrinter::builder`]: crate::SimPrinter::builder
pub const DEFAULT_INTERFACES: [NetworkInterface; 2] =
    [NetworkInterface::Wired, NetworkInterface::Wireless];

/// Address assigned to the [`NetworkInterface::Loopback`] interface by
/// [`SimPrinterBuilder::with_loopback`].
///
/// [`SimPrinterBuilder::with_loopback`]: crate::SimPrinterBuilder::with_loopback
pub const LOOPBACK_ADDRESS: &str = "127.0.0.1";

/// Name of the proxy entry in the textual [`NetworkConfig`].
///
/// There is no default proxy port: a printer without this
/// entry reports [`NetworkError::ProxyNotConfigured`].
///
/// [`NetworkConfig`]: crate::NetworkConfig
/// [`NetworkError::ProxyNotConfigured`]: crate::NetworkError::ProxyNotConfigured
pub const PROXY_KEY: &str = "proxy";

use crate::NetworkInterface;
use thiserror::Error;

/// Failures reported by [`SimPrinter`] when answering a network query.
///
/// The query functions of the `printersim` crate hand these back to the
/// test unchanged, so the message is what ends up in the test failure.
///
/// [`SimPrinter`]: crate::SimPrinter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The printer model has no such interface.
    #[error("Interface ({interface}) is not supported by this printer")]
    UnknownInterface { interface: NetworkInterface },
    /// The interface exists but has no address assigned.
    #[error("Interface ({interface}) has no IP address configured")]
    InterfaceNotConfigured { interface: NetworkInterface },
    /// No HTTP proxy port is configured on the printer.
    #[error("HTTP proxy is not configured")]
    ProxyNotConfigured,
    /// The simulator itself is in a broken state.
    #[error("Printer simulator internal fault: {reason}")]
    Internal { reason: String },
}

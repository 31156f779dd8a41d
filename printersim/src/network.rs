//! Network queries against the printer under test.
//!
//! These are direct accessors: whatever the [`Printer`] answers, including
//! its errors, is handed back to the test as is.

use printersim_core::{NetworkInterface, Printer};

/// Returns the address currently assigned to `interface` on the printer.
///
/// ```
/// use printersim::{network, NetworkInterface, SimPrinter};
///
/// let printer: SimPrinter = "wired=192.168.1.50".parse().unwrap();
/// assert_eq!(
///     network::ip_address_get(&printer, NetworkInterface::Wired).unwrap(),
///     "192.168.1.50"
/// );
/// ```
#[inline]
pub fn ip_address_get<P>(printer: &P, interface: NetworkInterface) -> Result<String, P::Error>
where
    P: Printer + ?Sized,
{
    printer.network_ip_address_get(interface)
}

/// Returns the port of the printer's HTTP proxy.
///
/// The proxy is a device-wide setting, there is no interface to pick.
#[inline]
pub fn proxy_http_port_get<P>(printer: &P) -> Result<u16, P::Error>
where
    P: Printer + ?Sized,
{
    printer.network_proxy_http_port_get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, fmt};

    #[derive(Debug, PartialEq, Eq)]
    struct Unplugged(NetworkInterface);

    impl fmt::Display for Unplugged {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "cable unplugged from {}", self.0)
        }
    }

    impl std::error::Error for Unplugged {}

    /// counts the calls and answers with a fixed error
    #[derive(Default)]
    struct Recorder {
        calls: Cell<usize>,
    }

    impl Printer for Recorder {
        type Error = Unplugged;

        fn network_ip_address_get(
            &self,
            interface: NetworkInterface,
        ) -> Result<String, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Err(Unplugged(interface))
        }

        fn network_proxy_http_port_get(&self) -> Result<u16, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(8080)
        }
    }

    #[test]
    fn error_is_passed_through() {
        let printer = Recorder::default();

        let error = ip_address_get(&printer, NetworkInterface::Wireless).unwrap_err();
        assert_eq!(error, Unplugged(NetworkInterface::Wireless));
        assert_eq!(error.to_string(), "cable unplugged from wireless");
    }

    #[test]
    fn single_call_per_query() {
        let printer = Recorder::default();

        assert_eq!(proxy_http_port_get(&printer), Ok(8080));
        assert_eq!(printer.calls.get(), 1);

        let _ = ip_address_get(&printer, NetworkInterface::Wired);
        assert_eq!(printer.calls.get(), 2);
    }

    #[test]
    fn accepts_trait_objects() {
        let printer: &dyn Printer<Error = Unplugged> = &Recorder::default();

        assert_eq!(proxy_http_port_get(printer), Ok(8080));
        assert_eq!(
            ip_address_get(printer, NetworkInterface::Loopback),
            Err(Unplugged(NetworkInterface::Loopback))
        );
    }
}

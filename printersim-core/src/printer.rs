use crate::NetworkInterface;
use std::{error::Error, sync::Arc};

/// The network capabilities of a printer under test.
///
/// This is the whole contract between the test actions and whatever stands
/// in for the device: [`SimPrinter`] in this crate, or any test double. Both
/// queries are read-only snapshots of the printer's state at call time.
///
/// Implementations choose their own [`Error`](Printer::Error) type; callers
/// receive it untouched.
///
/// ```
/// # use printersim_core::{NetworkInterface, Printer};
/// struct Fixed;
///
/// impl Printer for Fixed {
///     type Error = std::convert::Infallible;
///
///     fn network_ip_address_get(&self, _: NetworkInterface) -> Result<String, Self::Error> {
///         Ok("10.0.0.2".to_owned())
///     }
///
///     fn network_proxy_http_port_get(&self) -> Result<u16, Self::Error> {
///         Ok(3128)
///     }
/// }
///
/// assert_eq!(Fixed.network_proxy_http_port_get(), Ok(3128));
/// ```
///
/// [`SimPrinter`]: crate::SimPrinter
pub trait Printer {
    type Error: Error + Send + Sync + 'static;

    /// Returns the address currently assigned to `interface`.
    fn network_ip_address_get(&self, interface: NetworkInterface) -> Result<String, Self::Error>;

    /// Returns the device-wide HTTP proxy port.
    fn network_proxy_http_port_get(&self) -> Result<u16, Self::Error>;
}

impl<P: Printer + ?Sized> Printer for &P {
    type Error = P::Error;

    #[inline]
    fn network_ip_address_get(&self, interface: NetworkInterface) -> Result<String, Self::Error> {
        (**self).network_ip_address_get(interface)
    }

    #[inline]
    fn network_proxy_http_port_get(&self) -> Result<u16, Self::Error> {
        (**self).network_proxy_http_port_get()
    }
}

impl<P: Printer + ?Sized> Printer for Box<P> {
    type Error = P::Error;

    #[inline]
    fn network_ip_address_get(&self, interface: NetworkInterface) -> Result<String, Self::Error> {
        (**self).network_ip_address_get(interface)
    }

    #[inline]
    fn network_proxy_http_port_get(&self) -> Result<u16, Self::Error> {
        (**self).network_proxy_http_port_get()
    }
}

impl<P: Printer + ?Sized> Printer for Arc<P> {
    type Error = P::Error;

    #[inline]
    fn network_ip_address_get(&self, interface: NetworkInterface) -> Result<String, Self::Error> {
        (**self).network_ip_address_get(interface)
    }

    #[inline]
    fn network_proxy_http_port_get(&self) -> Result<u16, Self::Error> {
        (**self).network_proxy_http_port_get()
    }
}

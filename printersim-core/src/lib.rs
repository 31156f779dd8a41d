/*!
# printersim-core

Low-level pieces of the simulated printer used by the integration tests:

* [`NetworkInterface`]: the closed set of network interfaces a printer
  may have;
* [`Printer`]: the network capabilities the tests query, implemented by
  the simulator and by any test double;
* [`SimPrinter`]: the in-memory simulated printer, configured through a
  [`NetworkConfig`];
* [`NetworkError`]: what the simulator reports when a query cannot be
  answered.

```
use printersim_core::{NetworkError, NetworkInterface, Printer, SimPrinter};

let printer: SimPrinter = "wired=192.168.1.50; wireless; proxy=8080".parse()?;

assert_eq!(
    printer.network_ip_address_get(NetworkInterface::Wired)?,
    "192.168.1.50"
);
assert_eq!(
    printer.network_ip_address_get(NetworkInterface::Wireless),
    Err(NetworkError::InterfaceNotConfigured {
        interface: NetworkInterface::Wireless
    })
);
assert_eq!(printer.network_proxy_http_port_get()?, 8080);
# Ok::<(), anyhow::Error>(())
```
*/

mod config;
pub mod defaults;
mod error;
mod interface;
mod printer;
mod sim_printer;

pub use self::{
    config::{ConfigError, NetworkConfig},
    error::NetworkError,
    interface::{NetworkInterface, ParseInterfaceError},
    printer::Printer,
    sim_printer::{ReconfigureError, SimPrinter, SimPrinterBuilder},
};

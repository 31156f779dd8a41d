/*!
# Printer Simulator

Test actions querying the network state of a simulated printer.

```
use printersim::{network, NetworkError, NetworkInterface, SimPrinter};

let printer = SimPrinter::builder()
    .set_ip_address(NetworkInterface::Wired, "192.168.1.50")
    .set_proxy_http_port(8080)
    .build()?;

assert_eq!(
    network::ip_address_get(&printer, NetworkInterface::Wired)?,
    "192.168.1.50"
);
assert_eq!(network::proxy_http_port_get(&printer)?, 8080);
assert_eq!(
    network::ip_address_get(&printer, NetworkInterface::Wireless),
    Err(NetworkError::InterfaceNotConfigured {
        interface: NetworkInterface::Wireless
    })
);
# Ok::<(), anyhow::Error>(())
```
*/

pub mod network;

// convenient re-export of `printersim_core` core objects
pub use printersim_core::{
    defaults, ConfigError, NetworkConfig, NetworkError, NetworkInterface, ParseInterfaceError,
    Printer, ReconfigureError, SimPrinter, SimPrinterBuilder,
};

//! Query the network state of a simulated printer from the command line.
//!
//! Run with:
//!   cargo run --example query -p printersim -- \
//!       --config "wired=192.168.1.50; wireless; proxy=8080" \
//!       --interface wired

use anyhow::{Context as _, Result};
use clap::Parser;
use printersim::{network, NetworkInterface, SimPrinter};

#[derive(Parser)]
#[command(version, about)]
struct Command {
    /// network configuration of the simulated printer
    #[arg(long, short, default_value = "")]
    config: String,

    /// print the address of this interface (wired, wireless, loopback)
    ///
    /// if omitted, every interface of the printer is listed
    #[arg(long, short)]
    interface: Option<NetworkInterface>,

    /// print the HTTP proxy port
    #[arg(long, short)]
    proxy: bool,
}

fn main() -> Result<()> {
    let Command {
        config,
        interface,
        proxy,
    } = Command::parse();

    let printer: SimPrinter = config.parse().context("Invalid printer configuration")?;

    if proxy {
        let port = network::proxy_http_port_get(&printer)?;
        println!("proxy: {port}");
        return Ok(());
    }

    match interface {
        Some(interface) => {
            let address = network::ip_address_get(&printer, interface)?;
            println!("{interface}: {address}");
        }
        None => {
            for interface in NetworkInterface::ALL {
                match network::ip_address_get(&printer, interface) {
                    Ok(address) => println!("{interface}: {address}"),
                    Err(error) => println!("{interface}: {error}"),
                }
            }
        }
    }

    Ok(())
}

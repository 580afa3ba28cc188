//! Host identity lookups: hostname and local interface addresses.
//!
//! [`HostInfo`] is the seam between the responder and the operating
//! system. [`SystemHost`] backs it with the `hostname` and `if-addrs`
//! crates; tests substitute their own implementations. Both lookups are
//! best-effort, and the fallbacks live in [`resolve_hostname`] and
//! [`collect_ips`] rather than inside the implementations.

use std::io;
use std::net::IpAddr;

/// Substituted for the hostname when the lookup fails.
pub const UNKNOWN_HOST: &str = "unknown";

/// A network interface and the outcome of enumerating its addresses.
#[derive(Debug)]
pub struct NetInterface {
    pub name: String,
    pub addrs: io::Result<Vec<InterfaceAddr>>,
}

/// An interface address with its prefix length, displayed as `ip/prefix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub ip: IpAddr,
    pub prefix_len: u8,
}

impl std::fmt::Display for InterfaceAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.ip, self.prefix_len)
    }
}

pub trait HostInfo: Send + Sync {
    fn hostname(&self) -> io::Result<String>;
    fn interfaces(&self) -> io::Result<Vec<NetInterface>>;
}

/// [`HostInfo`] backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl HostInfo for SystemHost {
    fn hostname(&self) -> io::Result<String> {
        hostname::get()?.into_string().map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("hostname is not valid UTF-8: {raw:?}"),
            )
        })
    }

    fn interfaces(&self) -> io::Result<Vec<NetInterface>> {
        // if-addrs yields one entry per address; regroup by interface name
        // while keeping enumeration order.
        let mut interfaces: Vec<NetInterface> = Vec::new();
        for entry in if_addrs::get_if_addrs()? {
            let addr = interface_addr(&entry.addr);
            match interfaces.iter_mut().find(|i| i.name == entry.name) {
                Some(NetInterface {
                    addrs: Ok(addrs), ..
                }) => addrs.push(addr),
                Some(_) => {}
                None => interfaces.push(NetInterface {
                    name: entry.name,
                    addrs: Ok(vec![addr]),
                }),
            }
        }
        Ok(interfaces)
    }
}

fn interface_addr(addr: &if_addrs::IfAddr) -> InterfaceAddr {
    match addr {
        if_addrs::IfAddr::V4(v4) => InterfaceAddr {
            ip: IpAddr::V4(v4.ip),
            prefix_len: prefix_len(u32::from(v4.netmask).count_ones()),
        },
        if_addrs::IfAddr::V6(v6) => InterfaceAddr {
            ip: IpAddr::V6(v6.ip),
            prefix_len: prefix_len(u128::from(v6.netmask).count_ones()),
        },
    }
}

fn prefix_len(ones: u32) -> u8 {
    // At most 128 set bits in a netmask.
    u8::try_from(ones).unwrap_or(u8::MAX)
}

/// Hostname, or [`UNKNOWN_HOST`] when the lookup fails.
pub fn resolve_hostname(host: &dyn HostInfo) -> String {
    host.hostname().unwrap_or_else(|e| {
        tracing::debug!(error = %e, "hostname lookup failed, using fallback");
        UNKNOWN_HOST.to_string()
    })
}

/// Every interface address as a string, in enumeration order.
///
/// A failed top-level enumeration yields an empty list. An interface whose
/// addresses cannot be read is skipped; the others are still collected.
pub fn collect_ips(host: &dyn HostInfo) -> Vec<String> {
    let interfaces = match host.interfaces() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            tracing::debug!(error = %e, "interface enumeration failed");
            return Vec::new();
        }
    };

    let mut ips = Vec::new();
    for iface in interfaces {
        match iface.addrs {
            Ok(addrs) => ips.extend(addrs.iter().map(ToString::to_string)),
            Err(e) => {
                tracing::debug!(interface = %iface.name, error = %e, "skipping interface");
            }
        }
    }
    ips
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use super::*;

    struct FakeHost {
        hostname: Option<&'static str>,
        interfaces: Option<Vec<(&'static str, Option<Vec<InterfaceAddr>>)>>,
    }

    fn failure() -> io::Error {
        io::Error::other("simulated failure")
    }

    impl HostInfo for FakeHost {
        fn hostname(&self) -> io::Result<String> {
            self.hostname.map(String::from).ok_or_else(failure)
        }

        fn interfaces(&self) -> io::Result<Vec<NetInterface>> {
            let interfaces = self.interfaces.as_ref().ok_or_else(failure)?;
            Ok(interfaces
                .iter()
                .map(|(name, addrs)| NetInterface {
                    name: (*name).to_string(),
                    addrs: addrs.clone().ok_or_else(failure),
                })
                .collect())
        }
    }

    fn v4(a: u8, b: u8, c: u8, d: u8, prefix_len: u8) -> InterfaceAddr {
        InterfaceAddr {
            ip: IpAddr::V4(Ipv4Addr::new(a, b, c, d)),
            prefix_len,
        }
    }

    #[test]
    fn formats_address_with_prefix_length() {
        assert_eq!(v4(10, 0, 0, 5, 24).to_string(), "10.0.0.5/24");
        let v6 = InterfaceAddr {
            ip: IpAddr::V6(Ipv6Addr::LOCALHOST),
            prefix_len: 128,
        };
        assert_eq!(v6.to_string(), "::1/128");
    }

    #[test]
    fn hostname_passes_through() {
        let host = FakeHost {
            hostname: Some("backend-7"),
            interfaces: Some(vec![]),
        };
        assert_eq!(resolve_hostname(&host), "backend-7");
    }

    #[test]
    fn hostname_failure_falls_back_to_unknown() {
        let host = FakeHost {
            hostname: None,
            interfaces: Some(vec![]),
        };
        assert_eq!(resolve_hostname(&host), "unknown");
    }

    #[test]
    fn collects_addresses_in_order() {
        let host = FakeHost {
            hostname: Some("h"),
            interfaces: Some(vec![
                ("lo", Some(vec![v4(127, 0, 0, 1, 8)])),
                ("eth0", Some(vec![v4(10, 0, 0, 5, 24), v4(10, 0, 1, 5, 24)])),
            ]),
        };
        assert_eq!(
            collect_ips(&host),
            vec!["127.0.0.1/8", "10.0.0.5/24", "10.0.1.5/24"]
        );
    }

    #[test]
    fn failing_interface_is_skipped() {
        let host = FakeHost {
            hostname: Some("h"),
            interfaces: Some(vec![
                ("lo", Some(vec![v4(127, 0, 0, 1, 8)])),
                ("broken0", None),
                ("eth0", Some(vec![v4(10, 0, 0, 5, 24)])),
            ]),
        };
        assert_eq!(collect_ips(&host), vec!["127.0.0.1/8", "10.0.0.5/24"]);
    }

    #[test]
    fn enumeration_failure_yields_empty_list() {
        let host = FakeHost {
            hostname: Some("h"),
            interfaces: None,
        };
        assert!(collect_ips(&host).is_empty());
    }

    #[test]
    fn system_host_does_not_panic() {
        let host = SystemHost;
        let _ = resolve_hostname(&host);
        let _ = collect_ips(&host);
    }
}

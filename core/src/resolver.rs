//! Forward and reverse resolution of a single target.
//!
//! DNS itself is left to the host: [`SystemResolver`] goes through
//! `getaddrinfo`/`getnameinfo` via `dns-lookup`, so `/etc/hosts`, search
//! domains and the configured nameservers all apply. Every lookup blocks
//! until the system resolver answers or gives up.

use std::io;
use std::net::IpAddr;

use dns_lookup::{lookup_addr, lookup_host};
use revip_common::{debug, domain::ResolvedDomain, error::RevipError, target::Target};

/// Name resolution as seen by the discovery pipeline.
pub trait HostResolver {
    /// Resolves a domain name (or IP literal) to its addresses, in resolver order.
    fn forward(&self, target: &Target) -> io::Result<Vec<IpAddr>>;

    /// Resolves an address to zero or more hostnames (PTR records).
    fn reverse(&self, ip: &IpAddr) -> io::Result<Vec<String>>;
}

/// Resolver backed by the operating system's resolver library.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn forward(&self, target: &Target) -> io::Result<Vec<IpAddr>> {
        lookup_host(target.as_str())
    }

    fn reverse(&self, ip: &IpAddr) -> io::Result<Vec<String>> {
        let hostname = lookup_addr(ip)?;
        if is_numeric_echo(&hostname) {
            return Ok(Vec::new());
        }
        Ok(vec![hostname])
    }
}

/// getnameinfo falls back to the numeric form when there is no PTR record,
/// with a `%scope` suffix for scoped IPv6 addresses.
fn is_numeric_echo(hostname: &str) -> bool {
    let unscoped = hostname
        .split_once('%')
        .map_or(hostname, |(addr, _scope)| addr);
    unscoped.parse::<IpAddr>().is_ok()
}

/// Everything found for one target.
#[derive(Debug)]
pub struct Discovery {
    pub target: Target,
    pub domains: Vec<ResolvedDomain>,
    /// Reverse lookups that failed, in the order they were attempted.
    pub failures: Vec<RevipError>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Resolves `target` forward, then every address it maps to in reverse.
///
/// A failed forward lookup is returned as [`RevipError::DnsLookup`] and no
/// reverse lookup is attempted. A failed reverse lookup only skips that
/// address and is recorded in [`Discovery::failures`].
pub fn discover<R: HostResolver + ?Sized>(
    resolver: &R,
    target: &Target,
) -> Result<Discovery, RevipError> {
    if let Some(ip) = target.ip_literal() {
        debug!("{target} is an address literal, forward lookup will echo {ip}");
    }

    let ips = resolver
        .forward(target)
        .map_err(|source| RevipError::DnsLookup {
            target: target.to_string(),
            source,
        })?;
    let ips = dedup_in_order(ips);
    debug!("{target} resolved to {} address(es)", ips.len());

    let mut domains: Vec<ResolvedDomain> = Vec::new();
    let mut failures: Vec<RevipError> = Vec::new();

    for ip in ips {
        match resolver.reverse(&ip) {
            Ok(hostnames) => {
                debug!("{ip} has {} hostname(s)", hostnames.len());
                domains.extend(
                    hostnames
                        .into_iter()
                        .map(|hostname| ResolvedDomain::new(hostname, ip)),
                );
            }
            Err(source) => failures.push(RevipError::ReverseDnsLookup { ip, source }),
        }
    }

    Ok(Discovery {
        target: target.clone(),
        domains,
        failures,
    })
}

fn dedup_in_order(ips: Vec<IpAddr>) -> Vec<IpAddr> {
    let mut unique: Vec<IpAddr> = Vec::with_capacity(ips.len());
    for ip in ips {
        if !unique.contains(&ip) {
            unique.push(ip);
        }
    }
    unique
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

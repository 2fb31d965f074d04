use std::fmt;
use std::net::IpAddr;

/// One hostname found by reverse-resolving one address of a target.
///
/// The hostname is kept exactly as the resolver returned it, embedded
/// whitespace included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDomain {
    pub hostname: String,
    pub ip: IpAddr,
}

impl ResolvedDomain {
    pub fn new(hostname: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            hostname: hostname.into(),
            ip,
        }
    }
}

/// Renders the result file line, `hostname (ip)`.
impl fmt::Display for ResolvedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.hostname, self.ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn display_matches_result_line_format() {
        let v4 = ResolvedDomain::new("host.example.com", IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)));
        assert_eq!(v4.to_string(), "host.example.com (93.184.216.34)");

        let v6 = ResolvedDomain::new("localhost", IpAddr::V6(Ipv6Addr::LOCALHOST));
        assert_eq!(v6.to_string(), "localhost (::1)");
    }

    #[test]
    fn hostname_with_spaces_is_kept_whole() {
        let odd = ResolvedDomain::new("bad record.example", IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(odd.hostname, "bad record.example");
        assert_eq!(odd.to_string(), "bad record.example (127.0.0.1)");
    }
}

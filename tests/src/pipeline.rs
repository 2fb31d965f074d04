//! End-to-end checks of the collect -> discover -> persist pipeline, driven
//! through the public API of `revip-core` with a scripted resolver.

use revip_common::domain::ResolvedDomain;
use revip_common::error::RevipError;
use revip_common::target::Target;
use revip_core::input;
use revip_core::persist;
use revip_core::resolver::{self, HostResolver, SystemResolver};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::PathBuf;

struct TableResolver {
    forward: HashMap<&'static str, Vec<IpAddr>>,
    reverse: HashMap<IpAddr, Vec<&'static str>>,
}

impl HostResolver for TableResolver {
    fn forward(&self, target: &Target) -> io::Result<Vec<IpAddr>> {
        self.forward
            .get(target.as_str())
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "unknown host"))
    }

    fn reverse(&self, ip: &IpAddr) -> io::Result<Vec<String>> {
        match self.reverse.get(ip) {
            Some(names) => Ok(names.iter().map(|n| n.to_string()).collect()),
            None => Err(io::Error::new(io::ErrorKind::TimedOut, "PTR query timed out")),
        }
    }
}

fn resolver() -> TableResolver {
    let v4_a = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 10));
    let v4_b = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 11));
    let v6 = IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1));
    let silent = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 5));

    let mut forward = HashMap::new();
    forward.insert("shared.example", vec![v4_a, v4_b, v6]);
    forward.insert("quiet.example", vec![silent]);

    let mut reverse = HashMap::new();
    reverse.insert(v4_a, vec!["blog.example", "shop.example"]);
    reverse.insert(v6, vec!["v6.example"]);
    reverse.insert(silent, vec![]);

    TableResolver { forward, reverse }
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("revip-it-{}-{}", std::process::id(), name))
}

#[test]
fn rows_equal_successful_reverse_pairs() {
    let target: Target = "shared.example".parse().unwrap();
    let discovery = resolver::discover(&resolver(), &target).unwrap();

    // v4_b has no PTR answer; its failure does not hide the other addresses
    assert_eq!(discovery.domains.len(), 3);
    assert_eq!(discovery.failures.len(), 1);
    assert!(matches!(
        discovery.failures[0],
        RevipError::ReverseDnsLookup { .. }
    ));
}

#[test]
fn addresses_without_hostnames_give_empty_discovery() {
    let target: Target = "quiet.example".parse().unwrap();
    let discovery = resolver::discover(&resolver(), &target).unwrap();
    assert!(discovery.is_empty());
}

#[test]
fn save_then_read_back_keeps_lines_in_order() {
    let target: Target = "shared.example".parse().unwrap();
    let discovery = resolver::discover(&resolver(), &target).unwrap();
    let path = temp_path("roundtrip.txt");

    persist::save_results(&path, &discovery.domains).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    let expected: Vec<String> = discovery
        .domains
        .iter()
        .map(ResolvedDomain::to_string)
        .collect();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, expected);
    assert_eq!(
        lines,
        vec![
            "blog.example (198.51.100.10)",
            "shop.example (198.51.100.10)",
            "v6.example (2001:db8::1)",
        ]
    );
}

#[test]
fn interactive_target_comes_before_file_targets() {
    let path = temp_path("targets.txt");
    fs::write(&path, "a.com\nb.com\n").unwrap();

    let targets = input::collect_targets("first.example", path.to_str().unwrap()).unwrap();
    let _ = fs::remove_file(&path);

    let names: Vec<&str> = targets.iter().map(Target::as_str).collect();
    assert_eq!(names, vec!["first.example", "a.com", "b.com"]);
}

#[test]
fn file_only_targets() {
    let path = temp_path("file-only.txt");
    fs::write(&path, "a.com\nb.com").unwrap();

    let targets = input::collect_targets("", path.to_str().unwrap()).unwrap();
    let _ = fs::remove_file(&path);

    let names: Vec<&str> = targets.iter().map(Target::as_str).collect();
    assert_eq!(names, vec!["a.com", "b.com"]);
}

#[test]
fn loopback_forward_lookup_through_system_resolver() {
    let target: Target = "127.0.0.1".parse().unwrap();
    let result = resolver::discover(&SystemResolver, &target);

    assert!(result.is_ok(), "Forward lookup failed: {:?}", result.err());
    let discovery = result.unwrap();
    assert!(
        discovery
            .domains
            .iter()
            .all(|domain| domain.ip == IpAddr::V4(Ipv4Addr::LOCALHOST))
    );
}

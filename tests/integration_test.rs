//! Integration tests for subnet-calc
//!
//! Library scenarios through the public API, then the `subnet-calc` binary end to end.

use std::process::{Command, Output};
use subnet_calc::models::{bin_to_ip, ip_to_bin, SubnetCalculator};
use subnet_calc::{SubnetError, SubnetRequest};

fn subnet_calc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_subnet-calc"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("SUBNET_CALC_LOG_CONFIG")
        .env_remove("SUBNET_CALC_LOG_LEVEL")
        .output()
        .expect("Failed to run subnet-calc")
}

#[test]
fn test_mask_scenario() {
    let s = SubnetCalculator::with_mask("192.168.0.1", "255.255.255.0")
        .expect("Failed to build subnet");
    assert_eq!(s.network(), "192.168.0.0");
    assert_eq!(s.broadcast(), "192.168.0.255");
    assert_eq!(s.host_count(), 256);
    assert_eq!(s.prefix(), 24);
}

#[test]
fn test_prefix_scenarios() {
    let s = SubnetCalculator::with_prefix("10.0.5.200", 30).expect("Failed to build subnet");
    assert_eq!(
        (s.network(), s.broadcast(), s.host_count()),
        ("10.0.5.200", "10.0.5.203", 4)
    );

    let s = SubnetCalculator::with_prefix("172.16.0.5", 0).expect("Failed to build subnet");
    assert_eq!(
        (s.network(), s.broadcast(), s.host_count()),
        ("0.0.0.0", "255.255.255.255", 4294967296)
    );

    let s = SubnetCalculator::with_prefix("172.16.0.5", 32).expect("Failed to build subnet");
    assert_eq!(s.network(), s.ip());
    assert_eq!(s.broadcast(), s.ip());
    assert_eq!(s.host_count(), 1);
}

#[test]
fn test_round_trip_every_octet_value() {
    for v in 0..=255u16 {
        let ip = format!("{v}.{}.{}.{}", 255 - v, v / 2, (v * 7) % 256);
        let bin = ip_to_bin(&ip).expect("Failed to convert to binary");
        assert_eq!(bin.len(), 32);
        assert_eq!(bin_to_ip(&bin).expect("Failed to convert back"), ip);
    }
}

#[test]
fn test_json_request() {
    let request: SubnetRequest =
        serde_json::from_str(r#"{"ip": "192.168.0.1", "prefix": 24}"#).expect("Bad JSON");
    let subnet = request.build().expect("Failed to build subnet");
    assert_eq!(subnet.mask(), "255.255.255.0");
}

#[test]
fn test_errors_are_typed() {
    assert!(matches!(
        SubnetCalculator::new("192.168.0.1", None, None),
        Err(SubnetError::Configuration(_))
    ));
    assert!(matches!(
        SubnetCalculator::with_prefix("not.an.ip.addr", 8),
        Err(SubnetError::Validation(_))
    ));
}

#[test]
fn test_cli_text_output() {
    let out = subnet_calc(&["--ip", "192.168.0.1", "--mask", "255.255.255.0"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("IP Address:            192.168.0.1"));
    assert!(stdout.contains("Network Address:       192.168.0.0"));
    assert!(stdout.contains("Broadcast Address:     192.168.0.255"));
    assert!(stdout.contains("Total Number of Hosts: 256"));
    assert!(stdout.contains("Subnet Mask:           255.255.255.0"));
    assert!(stdout.contains("CIDR Notation:         /24"));
}

#[test]
fn test_cli_json_output() {
    let out = subnet_calc(&["--ip", "10.0.5.200", "--prefix", "30", "--format", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout should be JSON");
    assert_eq!(value["network"], "10.0.5.200");
    assert_eq!(value["broadcast"], "10.0.5.203");
    assert_eq!(value["hostCount"], 4);
    assert_eq!(value["mask"], "255.255.255.252");
    assert_eq!(value["prefix"], 30);
}

#[test]
fn test_cli_csv_output() {
    let out = subnet_calc(&["--ip", "10.0.5.200", "--prefix", "30", "--format", "csv"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0].replace(' ', ""),
        r#""ip","network","broadcast","hostCount","mask","prefix""#
    );
    assert_eq!(
        lines[1].replace(' ', ""),
        r#""10.0.5.200","10.0.5.200","10.0.5.203","4","255.255.255.252","30""#
    );
    assert!(lines[1].contains(r#""10.0.5.203""#));
    assert_eq!(lines[0].len(), lines[1].len());
}

#[test]
fn test_cli_both_mask_and_prefix() {
    let out = subnet_calc(&["--ip", "10.0.0.1", "--mask", "255.0.0.0", "--prefix", "8"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("supply only one of mask or prefix"), "{stderr}");
}

#[test]
fn test_cli_neither_mask_nor_prefix() {
    let out = subnet_calc(&["--ip", "10.0.0.1"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("either a mask or a prefix is required"), "{stderr}");
}

#[test]
fn test_cli_bad_values() {
    let out = subnet_calc(&["--ip", "10.0.0", "--prefix", "8"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("ip address 10.0.0 is invalid"));

    let out = subnet_calc(&["--ip", "10.0.0.1", "--prefix", "abc"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("must be an integer"));

    let out = subnet_calc(&["--ip", "10.0.0.1", "--prefix", "-1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of range"));

    let out = subnet_calc(&["--ip", "300.0.0.1", "--prefix", "8"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("longer than 32 bits"));
}

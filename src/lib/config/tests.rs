use std::path::PathBuf;

use super::{DEFAULT_CATALOG, REPORT_LIMIT, ReportConfig, report_config};
use crate::types::DamageType;

#[test]
fn no_args_keeps_defaults() {
    let cfg = ReportConfig::from_args(Vec::<String>::new()).unwrap();
    assert_eq!(cfg, report_config());
    assert_eq!(cfg.catalog, PathBuf::from(DEFAULT_CATALOG));
    assert_eq!(cfg.damage_type, DamageType::hull());
    assert_eq!(cfg.limit, REPORT_LIMIT);
}

#[test]
fn positional_and_limit_override() {
    let cfg = ReportConfig::from_args(["ships.json", "shield", "--limit", "3"]).unwrap();
    assert_eq!(cfg.catalog, PathBuf::from("ships.json"));
    assert_eq!(cfg.damage_type, DamageType::shield());
    assert_eq!(cfg.limit, 3);
}

#[test]
fn limit_may_come_first() {
    let cfg = ReportConfig::from_args(["--limit", "7", "other.json"]).unwrap();
    assert_eq!(cfg.limit, 7);
    assert_eq!(cfg.catalog, PathBuf::from("other.json"));
}

#[test]
fn rejects_bad_limit_and_extra_args() {
    assert!(ReportConfig::from_args(["--limit"]).is_err());
    assert!(ReportConfig::from_args(["--limit", "many"]).is_err());
    assert!(ReportConfig::from_args(["a.json", "hull", "extra"]).is_err());
}

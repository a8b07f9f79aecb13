//! Environment loading tests.
//!
//! These mutate process-wide environment variables, so they run serially.

use std::env;
use std::path::Path;

use serial_test::serial;
use userbuild::config::BuildEnv;
use userbuild::error::UserbuildError;
use userbuild::pkgconfig::PkgConfig;

#[test]
#[serial]
fn test_from_env_reads_sysroot_and_prefix() {
    env::set_var("SYSROOT", "/build/sysroot");
    env::set_var("PREFIX", "/usr");

    let build_env = BuildEnv::from_env().unwrap();
    assert_eq!(build_env.sysroot, Path::new("/build/sysroot"));
    assert_eq!(build_env.prefix, "/usr");

    env::remove_var("SYSROOT");
    env::remove_var("PREFIX");
}

#[test]
#[serial]
fn test_missing_sysroot_is_an_error() {
    env::remove_var("SYSROOT");
    env::set_var("PREFIX", "/usr");

    let err = BuildEnv::from_env().unwrap_err();
    match err {
        UserbuildError::MissingEnvironment { name } => assert_eq!(name, "SYSROOT"),
        other => panic!("Expected MissingEnvironment, got {other:?}"),
    }
    assert_eq!(
        UserbuildError::MissingEnvironment {
            name: "SYSROOT".to_string()
        }
        .to_string(),
        "$SYSROOT must be set"
    );

    env::remove_var("PREFIX");
}

#[test]
#[serial]
fn test_blank_prefix_is_an_error() {
    env::set_var("SYSROOT", "/build/sysroot");
    env::set_var("PREFIX", "   ");

    let err = BuildEnv::from_env().unwrap_err();
    assert!(matches!(
        err,
        UserbuildError::MissingEnvironment { ref name } if name == "PREFIX"
    ));

    env::remove_var("SYSROOT");
    env::remove_var("PREFIX");
}

#[test]
#[serial]
fn test_pkg_config_variable_overrides_lookup() {
    env::set_var("PKG_CONFIG", "/custom/cross-pkg-config");

    let tool = PkgConfig::from_env();
    assert_eq!(tool.program(), Path::new("/custom/cross-pkg-config"));

    env::remove_var("PKG_CONFIG");
}

#[test]
#[serial]
fn test_blank_pkg_config_variable_is_ignored() {
    env::set_var("PKG_CONFIG", "  ");

    let tool = PkgConfig::from_env();
    assert_ne!(tool.program(), Path::new("  "));

    env::remove_var("PKG_CONFIG");
}

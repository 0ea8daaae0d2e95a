//! Loading translation settings from disk and feeding them to the analyses.

use std::fs;

use rclower::binding::{FunctionElement, VarBinding};
use rclower::tree::AssignOp;
use rclower::types::TypeRef;
use rclower::{ExprTree, PassError, TranslationConfig, operator_function_modifier, retain_result};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn test_load_from_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rclower.toml");
    fs::write(
        &path,
        r#"
use_arc = true

[retained_functions]
JreStrcat = "JreStrcatRetained"
JreLoadArray = "JreLoadArrayRetained"
"#,
    )
    .unwrap();

    let config = TranslationConfig::load(&path).unwrap();
    assert!(config.use_arc);
    assert!(!config.strip_reflection);
    assert_eq!(config.retained_functions.len(), 2);
    assert_eq!(config.retained_functions.retained_name("JreLoadArray"), Some("JreLoadArrayRetained"));
}

#[test]
fn test_loaded_settings_drive_the_analyses() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rclower.toml");
    fs::write(&path, "use_arc = true\n[retained_functions]\nmakeName = \"makeNameRetained\"\n").unwrap();
    let config = TranslationConfig::load(&path).unwrap();

    let mut tree = ExprTree::new();
    let local = tree.name(VarBinding::local("name", TypeRef::string()));
    let call = tree.function_call(FunctionElement::new("makeName", TypeRef::string(), None), vec![]);
    let assign = tree.assign(AssignOp::Assign, local, call);

    assert_eq!(operator_function_modifier(&tree, local, &config), "Strong");
    assert_eq!(retain_result(&mut tree, call, &config.retained_functions), Some(call));
    assert!(tree.has_retained_result(call));
    assert_eq!(tree.children(assign).len(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = TranslationConfig::load(&path).unwrap_err();
    assert!(matches!(err, PassError::Io { .. }), "expected io error, got {err:?}");
    assert_eq!(err.path(), path.as_path());
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rclower.toml");
    fs::write(&path, "use_arc = true\nuse_gc = false\n").unwrap();

    let err = TranslationConfig::load(&path).unwrap_err();
    let PassError::Config { msg, path: reported } = &err else {
        panic!("expected config error, got {err:?}");
    };
    assert!(msg.contains("use_gc"), "unexpected message: {msg}");
    assert_eq!(reported, &path);
}

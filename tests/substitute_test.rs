mod common;

use common::{list_files, write_tree};
use std::fs;
use tempfile::TempDir;
use tinpig::error::Error;
use tinpig::substitute::{rename_files_with_tokens, replace_tokens_in_files};
use tinpig::tokens::TokenSet;

fn tokens(pairs: &[(&str, &str)]) -> TokenSet {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_contents_match_expected_tree() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    write_tree(
        &project,
        &[
            ("package.json", "{\"name\": \"${name}\", \"author\": \"${author}\"}"),
            ("src/index.js", "// ${name} by ${author}\nconsole.log('${name}');\n"),
            ("docs/notes.txt", "no tokens here, just ${unknown}\n"),
        ],
    );
    let expected = temp.path().join("expected");
    write_tree(
        &expected,
        &[
            ("package.json", "{\"name\": \"widget\", \"author\": \"pig\"}"),
            ("src/index.js", "// widget by pig\nconsole.log('widget');\n"),
            ("docs/notes.txt", "no tokens here, just ${unknown}\n"),
        ],
    );

    replace_tokens_in_files(&project, &tokens(&[("name", "widget"), ("author", "pig")])).unwrap();

    assert!(!dir_diff::is_different(&project, &expected).unwrap());
}

#[test]
fn test_non_utf8_files_are_untouched() {
    let temp = TempDir::new().unwrap();
    let binary = temp.path().join("image.bin");
    let bytes = [0xffu8, 0xfe, b'$', b'{', b'n', b'}'];
    fs::write(&binary, bytes).unwrap();

    replace_tokens_in_files(temp.path(), &tokens(&[("n", "x")])).unwrap();

    assert_eq!(fs::read(&binary).unwrap(), bytes);
}

#[test]
fn test_nested_names_are_renamed_at_every_level() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    write_tree(
        &project,
        &[
            ("%name%/%name%_test.rs", ""),
            ("%name%/src/%name%.rs", ""),
            ("%name%/src/lib.rs", ""),
            ("docs/%author%.md", ""),
        ],
    );

    rename_files_with_tokens(&project, &tokens(&[("name", "widget"), ("author", "pig")])).unwrap();

    assert_eq!(
        list_files(&project),
        vec!["docs/pig.md", "widget/src/lib.rs", "widget/src/widget.rs", "widget/widget_test.rs"]
    );
}

#[test]
fn test_multiple_markers_in_one_name() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path(), &[("%name%-%version%.txt", "")]);

    rename_files_with_tokens(temp.path(), &tokens(&[("name", "widget"), ("version", "1.0")]))
        .unwrap();

    assert_eq!(list_files(temp.path()), vec!["widget-1.0.txt"]);
}

#[test]
fn test_empty_value_leaving_empty_name_fails() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path(), &[("%name%", "")]);

    let err = rename_files_with_tokens(temp.path(), &tokens(&[("name", "")])).unwrap_err();

    assert!(matches!(err, Error::InvalidName { .. }));
    assert!(temp.path().join("%name%").exists());
}

#[test]
fn test_renamed_values_are_not_rescanned() {
    let temp = TempDir::new().unwrap();
    write_tree(temp.path(), &[("%a%.txt", "")]);

    rename_files_with_tokens(temp.path(), &tokens(&[("a", "%b%"), ("b", "y")])).unwrap();

    assert_eq!(list_files(temp.path()), vec!["%b%.txt"]);
}

#[cfg(unix)]
#[test]
fn test_unwritable_file_aborts_substitution() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    write_tree(
        temp.path(),
        &[("a.txt", "${name} first"), ("b.txt", "${name} locked"), ("c.txt", "${name} last")],
    );
    let locked = temp.path().join("b.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();
    if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
        // Permission bits are not enforced for this user (e.g. root).
        return;
    }

    let err = replace_tokens_in_files(temp.path(), &tokens(&[("name", "widget")])).unwrap_err();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    match err {
        Error::Substitution { path, source } => {
            assert!(path.ends_with("b.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("Expected Substitution, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(temp.path().join("a.txt")).unwrap(), "widget first");
    assert_eq!(fs::read_to_string(&locked).unwrap(), "${name} locked");
    assert_eq!(fs::read_to_string(temp.path().join("c.txt")).unwrap(), "${name} last");
}

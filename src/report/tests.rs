//! Unit tests for report output.

use pretty_assertions::assert_eq;

use super::{create_report, generation_banner, write_report};

#[test]
fn test_generation_banner() {
    assert_eq!(
        generation_banner("10/16/26 09:35:00"),
        "\n **** Syntactic analyzer : output data ****\n**** Generation date: 10/16/26 09:35:00 ****\n\n"
    );
}

#[test]
fn test_write_report_layout() {
    let lines = vec![
        "Token = INT, Lexeme = 'int', Row = 1, Column = 0",
        "Token = ID, Lexeme = 'x', Row = 1, Column = 4",
    ];
    let mut out = Vec::new();
    let mut echo = Vec::new();

    write_report(&mut out, &mut echo, &lines[..], "01/02/26 03:04:05").unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "\n **** Syntactic analyzer : output data ****\n\
         **** Generation date: 01/02/26 03:04:05 ****\n\n\
         \nToken = INT, Lexeme = 'int', Row = 1, Column = 0\
         \nToken = ID, Lexeme = 'x', Row = 1, Column = 4"
    );
    assert_eq!(
        String::from_utf8(echo).unwrap(),
        "Token = INT, Lexeme = 'int', Row = 1, Column = 0\nToken = ID, Lexeme = 'x', Row = 1, Column = 4\n"
    );
}

#[test]
fn test_write_report_without_tokens() {
    let lines: Vec<String> = vec![];
    let mut out = Vec::new();
    let mut echo = Vec::new();

    write_report(&mut out, &mut echo, &lines[..], "now").unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), generation_banner("now"));
    assert!(echo.is_empty());
}

#[test]
fn test_create_report_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexemes_tokens.txt");

    create_report(&path, &["Token = ID, Lexeme = 'a', Row = 1, Column = 0"]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("\n **** Syntactic analyzer : output data ****\n**** Generation date: "));
    assert!(contents.ends_with("\nToken = ID, Lexeme = 'a', Row = 1, Column = 0"));
}

#[test]
fn test_create_report_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let error = create_report(&path, &["line"]).unwrap_err();

    assert!(error.is_io());
    assert!(error.to_string().starts_with("cannot write report"));
}

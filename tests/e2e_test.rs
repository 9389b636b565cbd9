// Test complete flows of the scanner as a parser substrate.
// Run with `cargo test --test e2e_test`

use strscan::{Match, Position, PositionProvider, Scanner, ScannerBuilder};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn class_scans_on_mixed_case_input() {
    init();
    let mut scanner = Scanner::new("lowerUPPERcamelCase123num");

    let lower = scanner.scan_charclass("l").unwrap();
    assert_eq!(scanner.text(lower), b"lower");
    assert_eq!(lower.len(), 5);

    scanner.set_position(0);
    let before_digits = scanner.scan_upto_charclass("d").unwrap();
    assert_eq!(scanner.text(before_digits), b"lowerUPPERcamelCase");
    assert_eq!(before_digits.len(), 19);
    assert_eq!(scanner.position(), 19);

    let digits = scanner.scan_charclass("d").unwrap();
    assert_eq!(scanner.text(digits), b"123");
    let rest = scanner.scan_charclass("a").unwrap();
    assert_eq!(scanner.text(rest), b"num");
    assert!(scanner.at_end());
}

#[test]
fn upto_leaves_delimiter_for_the_next_scan() {
    init();
    let mut scanner = Scanner::new("hello, world!");

    let hello = scanner.scan_upto_charset(",").unwrap();
    assert_eq!(scanner.text(hello), b"hello");
    assert_eq!(scanner.position(), 5);
    assert_eq!(scanner.peek(0), Some(b','));

    let separator = scanner.scan_charset(", ").unwrap();
    assert_eq!(scanner.text(separator), b", ");

    let world = scanner.scan_upto_charset("!").unwrap();
    assert_eq!(scanner.text(world), b"world");
    assert_eq!(scanner.scan_char(b'!').map(|m| m.len()), Some(1));
    assert!(scanner.at_end());
}

#[test]
fn found_at_cursor_is_not_not_found() {
    init();
    let mut scanner = Scanner::new(",abc");
    let empty = scanner.scan_upto_charset(",").unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.start(), 0);
    assert_eq!(scanner.position(), 0);

    assert_eq!(scanner.scan_upto_charset(";"), None);
    assert_eq!(scanner.position(), 0);
}

#[test]
fn rescanning_after_reset_reproduces_results() {
    init();
    let mut scanner = Scanner::new("GET /index.html HTTP/1.1");
    let first: Vec<Match> = std::iter::from_fn(|| {
        let word = scanner.scan_charclass("S");
        scanner.scan_charclass("s");
        word
    })
    .collect();
    assert_eq!(first.len(), 3);

    scanner.set_position(0);
    assert_eq!(scanner.scan_charclass("S"), Some(first[0]));
    scanner.reset();
    assert_eq!(scanner.scan_upto_char(b' ').map(|m| m.span()), Some(first[0].span()));
}

/// Walks through the operations in the order a caller would use them on a small buffer.
#[test]
fn hello_world_walkthrough() {
    init();
    let mut scanner = Scanner::new("hello, world!");
    assert_eq!(scanner.current_pointer(), b"hello, world!");

    let peeked: Vec<u8> = (0..4).filter_map(|i| scanner.peek(i)).collect();
    assert_eq!(peeked, b"hell");
    assert_eq!(scanner.position(), 0);

    let taken: Vec<u8> = (0..5).filter_map(|_| scanner.next_char()).collect();
    assert_eq!(taken, b"hello");
    assert_eq!(scanner.position(), 5);

    scanner.set_position(0);
    let lowercase = "abcdefghijklmnopqrstuvwxyz";
    let word = scanner.scan_charset(lowercase).unwrap();
    assert_eq!(scanner.text(word), b"hello");
    assert_eq!(scanner.scan_charset(lowercase), None);
    assert!(scanner.scan_charset(",").is_some());
    assert_eq!(scanner.current_pointer(), b" world!");
}

#[test]
fn borrowed_and_owned_scanners_agree() {
    init();
    let input = String::from("alpha=1; beta=22; gamma=333");
    let mut owned = Scanner::new(&input);
    let mut borrowed = Scanner::new_borrowed(&input);
    assert!(owned.is_owned());
    assert!(!borrowed.is_owned());
    assert_ne!(owned.underlying_buffer().as_ptr(), input.as_ptr());
    assert_eq!(borrowed.underlying_buffer().as_ptr(), input.as_ptr());

    loop {
        let a = owned.scan_upto_literal("; ");
        let b = borrowed.scan_upto_literal("; ");
        assert_eq!(a, b);
        if a.is_none() {
            break;
        }
        owned.forward(2);
        borrowed.forward(2);
    }
    assert_eq!(owned.position(), borrowed.position());
    assert_eq!(owned.current_pointer(), b"gamma=333");

    // The owned copy survives the original input.
    drop(borrowed);
    drop(input);
    assert_eq!(owned.scan_charclass("a").map(|m| m.len()), Some(5));
}

/// A header block as a caller would parse it with the scanner.
#[derive(Debug, PartialEq)]
struct Header {
    name: String,
    value: String,
}

fn parse_headers(input: &str) -> Result<Vec<Header>, Position> {
    let mut scanner = ScannerBuilder::new().strict_positions(true).build_borrowed(input);
    let mut headers = Vec::new();
    while !scanner.at_end() {
        if scanner.scan_literal("\r\n").is_some() {
            // Empty line terminates the header block.
            break;
        }
        let name = scanner
            .scan_charclass("h")
            .ok_or_else(|| scanner.cursor_line_column())?;
        scanner
            .scan_char(b':')
            .ok_or_else(|| scanner.cursor_line_column())?;
        scanner.scan_charset(" \t");
        let value = scanner
            .scan_upto_literal("\r\n")
            .ok_or_else(|| scanner.cursor_line_column())?;
        scanner.scan_literal("\r\n");
        headers.push(Header {
            name: scanner.copy_match_string(name).unwrap(),
            value: scanner.copy_match_string(value).unwrap(),
        });
    }
    Ok(headers)
}

#[test]
fn header_parser() {
    init();
    let headers = parse_headers(
        "Host: example.org\r\nContent-Length:  42\r\nX-Empty:\r\n\r\nbody is ignored",
    )
    .unwrap();
    assert_eq!(
        headers,
        vec![
            Header {
                name: "Host".into(),
                value: "example.org".into()
            },
            Header {
                name: "Content-Length".into(),
                value: "42".into()
            },
            Header {
                name: "X-Empty".into(),
                value: "".into()
            },
        ]
    );
}

#[test]
fn header_parser_reports_error_position() {
    init();
    let error = parse_headers("Host: example.org\r\nBad Header: x\r\n").unwrap_err();
    assert_eq!(error, Position::new(2, 4));

    let error = parse_headers("Host: unterminated").unwrap_err();
    assert_eq!(error, Position::new(1, 7));
}

#[test]
fn case_insensitive_header_lookup() {
    init();
    let mut scanner = Scanner::new("HOST: a\r\ncontent-TYPE: text/html\r\n");
    scanner.scan_upto_literal_ci("content-type").unwrap();
    let name = scanner.scan_literal_ci("Content-Type").unwrap();
    assert_eq!(scanner.text(name), b"content-TYPE");
    assert_eq!(scanner.line_column(name.start()), Position::new(2, 1));
}

//! Walks a scanner over "hello, world!" and prints what each operation sees.
//! Run with `RUST_LOG=trace cargo run --example hello` to see the scanner's log output.

use strscan::Scanner;

fn main() {
    env_logger::init();

    let mut scanner = Scanner::new("hello, world!");

    // current pointer
    println!(
        "curptr -> \"{}\"",
        String::from_utf8_lossy(scanner.current_pointer())
    );

    // peek a char
    for i in 0..4 {
        if let Some(c) = scanner.peek(i) {
            println!("peek {} -> {}", i, c as char);
        }
    }

    // get next char
    for _ in 0..5 {
        if let Some(c) = scanner.next_char() {
            println!("next -> {}", c as char);
        }
    }

    // clear position
    scanner.set_position(0);
    println!("pos = 0");

    // scan characters from set
    let chars = "abcdefghijklmnopqrstuvwxyz";
    if let Some(word) = scanner.scan_charset(chars) {
        println!(
            "lowcase chrset -> {} ({})",
            String::from_utf8_lossy(scanner.text(word)),
            word.len()
        );
    }
    if scanner.scan_charset(chars).is_some() {
        println!("error");
    }
    if scanner.scan_charset(",").is_some() {
        println!("scan \",\"");
    }
}

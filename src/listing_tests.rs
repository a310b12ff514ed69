use crate::listing::{ListingStyle, render_line, write_listing};
use crate::loader::parse_hex_dump;
use crate::selection::select;

const SAMPLE: &str = "\
// two instructions and a data word
@1000
b3 05 c5 00
13 05 f0 ff
@1010
ff ff ff ff
";

fn listing(specs: &[&str], style: ListingStyle) -> (usize, String) {
    let image = parse_hex_dump(SAMPLE).unwrap();
    let addresses = select(specs).unwrap();
    let mut out = Vec::new();
    let count = write_listing(&image, &addresses, &mut out, style).unwrap();
    (count, String::from_utf8(out).unwrap())
}

#[test]
fn test_render_line() {
    assert_eq!(render_line(0x1000, 0x00c505b3), "00001000: 00c505b3  add x11,x10,x12");
    assert_eq!(render_line(0xffff_fffc, 0), "fffffffc: 00000000  unknown 0x00000000");
}

#[test]
fn test_listing_in_request_order_without_repeats() {
    let (count, text) = listing(&["1004", "1000..1014", "1004"], ListingStyle::default());
    assert_eq!(count, 5);
    assert_eq!(
        text,
        "\
00001004: fff00513  addi x10,x0,-1
00001000: 00c505b3  add x11,x10,x12
00001008: 00000000  unknown 0x00000000
0000100c: 00000000  unknown 0x00000000
00001010: ffffffff  unknown 0xffffffff
"
    );
}

#[test]
fn test_empty_selection_writes_nothing() {
    let (count, text) = listing(&[], ListingStyle::default());
    assert_eq!(count, 0);
    assert!(text.is_empty());
}

#[test]
fn test_color_keeps_text() {
    let (_, text) = listing(&["1000", "1010"], ListingStyle { color: true });
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("00001000: 00c505b3  "));
    assert!(lines[0].contains("add x11,x10,x12"));
    assert!(lines[0].contains('\u{1b}'));
    assert!(lines[1].contains("unknown 0xffffffff"));
}

use super::*;

#[test]
fn test_add_file() {
    let sm = SourceManager::new();
    let mut chunks = Vec::new();
    for text in ["abc\n", "def\nghi\n", "mlah\n", "", "abcdef"] {
        let chunk = sm.add_file("meh.v", text);
        assert_eq!(&chunk.text[..], text);
        chunks.push(chunk);
    }
    // References stay valid across later insertions.
    for (chunk, text) in chunks.iter().zip(["abc\n", "def\nghi\n", "mlah\n", "", "abcdef"]) {
        assert_eq!(&chunk.text[..], text);
        assert_eq!(&chunk.file_name[..], "meh.v");
    }
    assert_eq!(sm.iter_chunks().count(), 5);
}

#[test]
fn test_line_info() {
    let sm = SourceManager::new();
    let chunk = sm.add_file("meh.v", "abc\ndef\r\nghi");
    let li = chunk.get_line_info(0);
    assert_eq!((li.line_num, li.line, li.line_offset), (1, "abc\n", 0));
    let li = chunk.get_line_info(2);
    assert_eq!((li.line_num, li.line, li.line_offset), (1, "abc\n", 2));
    assert_eq!(li.column_num(), 3);
    // The newline itself belongs to the line it terminates.
    let li = chunk.get_line_info(3);
    assert_eq!((li.line_num, li.line, li.line_offset), (1, "abc\n", 3));
    let li = chunk.get_line_info(4);
    assert_eq!((li.line_num, li.line, li.line_offset), (2, "def\r\n", 0));
    // \r\n counts as a single line break.
    let li = chunk.get_line_info(5);
    assert_eq!(li.line_num, 2);
    let li = chunk.get_line_info(9);
    assert_eq!((li.line_num, li.line, li.line_offset), (3, "ghi", 0));
    // End-of-text position is still decodable.
    let li = chunk.get_line_info(12);
    assert_eq!((li.line_num, li.line_offset), (3, 3));
}

#[test]
fn test_line_info_empty() {
    let sm = SourceManager::new();
    let chunk = sm.add_file("meh.v", "");
    let li = chunk.get_line_info(0);
    assert_eq!((li.line_num, li.line, li.line_offset), (1, "", 0));
}

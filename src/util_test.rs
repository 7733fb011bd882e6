use super::*;

#[test]
fn test_reverse_utf8_ascii() {
    assert_eq!(reverse_utf8(b"hello"), b"olleh".to_vec());
}

#[test]
fn test_reverse_utf8_multibyte_stays_valid() {
    let original = "héllo"; // 'é' is two bytes in UTF-8
    let reversed = reverse_utf8(original.as_bytes());
    assert_eq!(String::from_utf8(reversed.clone()).unwrap(), "olléh");
    assert_eq!(reverse_utf8(&reversed), original.as_bytes());
}

#[test]
fn test_open_file_rw_round_trip() {
    use std::io::{Read, Write};

    let mut path = std::env::temp_dir();
    path.push(format!("datrie-util-test-{}.bin", std::process::id()));
    let path = path.to_str().unwrap().to_string();

    let mut w = open_file_w(&path, true).unwrap();
    w.write_all(b"abcxyz").unwrap();
    drop(w);

    let mut r = open_file_r(&path).unwrap();
    let mut buf = Vec::new();
    r.read_to_end(&mut buf).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(buf, b"abcxyz".to_vec());
}

#[test]
fn test_read_buffer_reports_truncation() {
    let mut path = std::env::temp_dir();
    path.push(format!("datrie-util-test-short-{}.bin", std::process::id()));
    let path = path.to_str().unwrap().to_string();

    {
        let mut w = open_file_w(&path, true).unwrap();
        use std::io::Write;
        w.write_all(b"ab").unwrap();
    }

    let mut f = open_file_r(&path).unwrap();
    let result = read_buffer(&mut f, 0, 10, "test read");
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}

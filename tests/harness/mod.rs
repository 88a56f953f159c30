#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::TestContext;

/// Minimal bytes that sniff as PNG.
pub(crate) fn png_bytes(tag: u8) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.push(tag);
    bytes
}

use std::io::Read;

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use flate2::read::ZlibDecoder;
use tracing::error;

/// Recover the XML text from a shared build code.
///
/// A missing or empty code is "nothing to do" and returns None without a
/// diagnostic. Any decode failure (bad base64, corrupt zlib stream,
/// invalid UTF-8) is logged and degrades to None; corruption is not
/// transient, so there are no retries.
pub fn recover(code: Option<&str>) -> Option<String> {
    let code = code?;
    if code.is_empty() {
        return None;
    }

    match decode(code) {
        Ok(xml) => Some(xml),
        Err(e) => {
            error!("Failed to decode or decompress build code: {:#}", e);
            None
        }
    }
}

fn decode(code: &str) -> Result<String> {
    let compressed = URL_SAFE
        .decode(code)
        .context("invalid url-safe base64")?;

    let mut bytes = Vec::new();
    ZlibDecoder::new(&compressed[..])
        .read_to_end(&mut bytes)
        .context("corrupt zlib stream")?;

    String::from_utf8(bytes).context("decompressed data is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn encode(text: &str) -> String {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(text.as_bytes()).unwrap();
        URL_SAFE.encode(enc.finish().unwrap())
    }

    #[test]
    fn round_trip() {
        let xml = "<PathOfBuilding><Build level=\"92\"/></PathOfBuilding>";
        assert_eq!(recover(Some(&encode(xml))).as_deref(), Some(xml));
    }

    #[test]
    fn round_trip_non_ascii() {
        let xml = "<Build className=\"Scïon\"/>";
        assert_eq!(recover(Some(&encode(xml))).as_deref(), Some(xml));
    }

    #[test]
    fn none_and_empty_are_nothing_to_do() {
        assert_eq!(recover(None), None);
        assert_eq!(recover(Some("")), None);
    }

    #[test]
    fn invalid_base64() {
        assert_eq!(recover(Some("not base64!!!")), None);
    }

    #[test]
    fn valid_base64_corrupt_stream() {
        let garbage = URL_SAFE.encode(b"definitely not a zlib stream");
        assert_eq!(recover(Some(&garbage)), None);
    }

    #[test]
    fn truncated_stream() {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"<Build/>").unwrap();
        let mut compressed = enc.finish().unwrap();
        compressed.truncate(compressed.len() / 2);
        assert_eq!(recover(Some(&URL_SAFE.encode(compressed))), None);
    }

    #[test]
    fn invalid_utf8_payload() {
        let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
        enc.write_all(&[0xff, 0xfe, 0x80]).unwrap();
        assert_eq!(recover(Some(&URL_SAFE.encode(enc.finish().unwrap()))), None);
    }
}

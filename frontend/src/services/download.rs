//! Client-side download of the transcript text.
//!
//! The transcript is offered to the user as a synthetic file: a transient
//! anchor element pointing at a `data:` URL, appended to the document,
//! clicked, and removed. Nothing is persisted.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::DOWNLOAD_MIME;
use crate::types::{AppError, AppResult};

/// Build a `data:text/plain;charset=utf-8,` URL carrying `text`.
///
/// Percent-encoding follows `encodeURIComponent`: the unreserved set
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` passes through, every other UTF-8
/// byte is `%XX`-escaped. Decoding the result yields the input exactly.
pub fn text_data_url(text: &str) -> String {
    let mut url = String::with_capacity(text.len() + 32);
    url.push_str("data:");
    url.push_str(DOWNLOAD_MIME);
    url.push_str(";charset=utf-8,");

    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => url.push(byte as char),
            _ => {
                url.push('%');
                url.push_str(&format!("{:02X}", byte));
            }
        }
    }

    url
}

/// Offer `text` to the user as a file named `filename`.
///
/// Creates the anchor, triggers the save with a synthetic click, then
/// detaches the anchor again. Called on the success path only; the busy
/// indicator has already been hidden by the time this runs.
pub fn offer_download(text: &str, filename: &str) -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Dom("no document".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| AppError::Dom("document has no body".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::Dom(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| AppError::Dom("created element is not an anchor".to_string()))?;

    anchor.set_href(&text_data_url(text));
    anchor.set_download(filename);

    body.append_child(&anchor)
        .map_err(|e| AppError::Dom(format!("{:?}", e)))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| AppError::Dom(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of the `%XX` escaping in `text_data_url`.
    fn percent_decode(encoded: &str) -> String {
        let mut bytes = Vec::with_capacity(encoded.len());
        let mut iter = encoded.bytes();
        while let Some(b) = iter.next() {
            if b == b'%' {
                let hex = [iter.next().unwrap(), iter.next().unwrap()];
                let hex = std::str::from_utf8(&hex).unwrap();
                bytes.push(u8::from_str_radix(hex, 16).unwrap());
            } else {
                bytes.push(b);
            }
        }
        String::from_utf8(bytes).unwrap()
    }

    fn payload(url: &str) -> &str {
        url.strip_prefix("data:text/plain;charset=utf-8,").unwrap()
    }

    #[test]
    fn data_url_carries_mime_and_charset() {
        let url = text_data_url("hello world");
        assert_eq!(url, "data:text/plain;charset=utf-8,hello%20world");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let text = "AZaz09-_.!~*'()";
        assert_eq!(payload(&text_data_url(text)), text);
    }

    #[test]
    fn decoding_recovers_the_exact_text() {
        let text = "1\n00:00:01,000 --> 00:00:04,000\nПривет, мир! 100% & more\n";
        assert_eq!(percent_decode(payload(&text_data_url(text))), text);
    }

    #[test]
    fn empty_text_yields_empty_payload() {
        assert_eq!(payload(&text_data_url("")), "");
    }
}

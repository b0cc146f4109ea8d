//! Shareable mermaid.live links.
//!
//! The mermaid.live editor accepts its state in the URL fragment as
//! `pako:<base64url(zlib-deflate(json state))>`.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::Serialize;
use std::io::Write;

/// Fixed editor configuration carried alongside the diagram source
const MERMAID_CONFIG: &str = r#"{"theme":"default"}"#;

#[derive(Serialize)]
struct EditorState<'a> {
    code: &'a str,
    mermaid: &'a str,
}

/// Compress and encode a diagram document into a `pako:` fragment
pub fn encode_pako(diagram: &str) -> Result<String> {
    let state = EditorState {
        code: diagram,
        mermaid: MERMAID_CONFIG,
    };
    let payload = serde_json::to_vec(&state).context("failed to serialize diagram state")?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&payload)
        .context("failed to compress diagram state")?;
    let compressed = encoder
        .finish()
        .context("failed to compress diagram state")?;

    Ok(format!("pako:{}", URL_SAFE_NO_PAD.encode(compressed)))
}

/// Build a mermaid.live edit URL for a diagram document
pub fn edit_url(diagram: &str) -> Result<String> {
    Ok(format!(
        "https://mermaid.live/edit#{}",
        encode_pako(diagram)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn decode(fragment: &str) -> String {
        let encoded = fragment.strip_prefix("pako:").unwrap();
        let compressed = URL_SAFE_NO_PAD.decode(encoded).unwrap();
        let mut inflated = String::new();
        ZlibDecoder::new(compressed.as_slice())
            .read_to_string(&mut inflated)
            .unwrap();
        inflated
    }

    #[test]
    fn test_fragment_shape() {
        let fragment = encode_pako("erDiagram").unwrap();
        assert!(fragment.starts_with("pako:"));
        // URL-safe alphabet, no padding
        assert!(!fragment.contains('='));
        assert!(!fragment.contains('+'));
        assert!(!fragment.contains('/'));
    }

    #[test]
    fn test_fragment_carries_the_document() {
        let diagram = "erDiagram\n  Author |o--o{ Book : \"books\"";
        let state: serde_json::Value =
            serde_json::from_str(&decode(&encode_pako(diagram).unwrap())).unwrap();

        assert_eq!(state["code"], diagram);
        assert_eq!(state["mermaid"], MERMAID_CONFIG);
    }

    #[test]
    fn test_edit_url_prefix() {
        let url = edit_url("erDiagram").unwrap();
        assert!(url.starts_with("https://mermaid.live/edit#pako:"));
    }
}

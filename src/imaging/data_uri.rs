use base64::Engine;

use crate::file::IntakeError;

/// Encode raw file contents as `data:<media-type>;base64,<payload>`
pub fn encode_data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        media_type,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Split a base64 data URI back into its media type and payload bytes
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), IntakeError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| IntakeError::InvalidDataUri("missing data: scheme".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| IntakeError::InvalidDataUri("missing payload separator".to_string()))?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| IntakeError::InvalidDataUri("only base64 payloads are supported".to_string()))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| IntakeError::InvalidDataUri(e.to_string()))?;
    Ok((media_type.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_round_trip() {
        let uri = encode_data_uri("image/gif", b"GIF89a");
        assert_eq!(uri, "data:image/gif;base64,R0lGODlh");
        let (media_type, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(media_type, "image/gif");
        assert_eq!(bytes, b"GIF89a");
    }

    #[test]
    fn test_rejects_malformed_uris() {
        assert!(decode_data_uri("image/png;base64,AAAA").is_err());
        assert!(decode_data_uri("data:image/png;base64").is_err());
        assert!(decode_data_uri("data:text/plain,hello").is_err());
        assert!(decode_data_uri("data:image/png;base64,@@@").is_err());
    }
}

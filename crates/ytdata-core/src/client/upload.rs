//! Media payloads and `multipart/related` encoding.

use std::fmt;

use bytes::{Bytes, BytesMut};
use uuid::Uuid;

use crate::error::InvalidInputError;
use crate::transport::RequestBody;

/// A media payload for upload operations.
#[derive(Clone, PartialEq, Eq)]
pub struct Media {
    /// MIME type of the data, e.g. `video/mp4` or `image/png`.
    pub content_type: String,
    pub data: Bytes,
}

impl Media {
    pub fn new(content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks that the content type can be written as a header value.
    pub(crate) fn check_content_type(&self) -> Result<(), InvalidInputError> {
        let value = self.content_type.as_str();
        if value.trim().is_empty() || value.chars().any(char::is_control) {
            return Err(InvalidInputError::MediaType {
                value: value.to_string(),
                reason: "must be non-empty and contain no control characters".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Media")
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Encodes JSON metadata and media as a two-part `multipart/related` body.
pub(crate) fn multipart_related(metadata: &[u8], media: &Media) -> RequestBody {
    let boundary = format!("ytdata_{}", Uuid::new_v4().simple());
    encode(metadata, media, &boundary)
}

fn encode(metadata: &[u8], media: &Media, boundary: &str) -> RequestBody {
    let mut body = BytesMut::with_capacity(metadata.len() + media.data.len() + 256);

    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(metadata);
    body.extend_from_slice(
        format!("\r\n--{boundary}\r\nContent-Type: {}\r\n\r\n", media.content_type).as_bytes(),
    );
    body.extend_from_slice(&media.data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    RequestBody {
        content_type: format!("multipart/related; boundary={boundary}"),
        data: body.freeze(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_metadata_then_media() {
        let media = Media::new("image/png", &b"\x89PNG"[..]);
        let body = encode(br#"{"snippet":{}}"#, &media, "XYZ");

        assert_eq!(body.content_type, "multipart/related; boundary=XYZ");
        let expected: &[u8] = b"--XYZ\r\n\
Content-Type: application/json; charset=UTF-8\r\n\r\n\
{\"snippet\":{}}\r\n\
--XYZ\r\n\
Content-Type: image/png\r\n\r\n\
\x89PNG\r\n\
--XYZ--\r\n";
        assert_eq!(&body.data[..], expected);
    }

    #[test]
    fn boundaries_are_unique() {
        let media = Media::new("text/plain", "hi");
        let a = multipart_related(b"{}", &media);
        let b = multipart_related(b"{}", &media);
        assert_ne!(a.content_type, b.content_type);
    }

    #[test]
    fn content_type_with_line_break_is_rejected() {
        for content_type in ["image/png\r\nX-Injected: 1", "image/png\n", "", "  "] {
            let media = Media::new(content_type, "x");
            assert!(
                matches!(media.check_content_type(), Err(InvalidInputError::MediaType { .. })),
                "{:?} accepted",
                content_type
            );
        }
        assert!(Media::new("video/mp4; codecs=avc1", "x").check_content_type().is_ok());
    }

    #[test]
    fn debug_hides_payload() {
        let media = Media::new("video/mp4", vec![0u8; 1024]);
        assert_eq!(
            format!("{:?}", media),
            "Media { content_type: \"video/mp4\", len: 1024 }"
        );
    }
}

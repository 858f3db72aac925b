//! AWS Signature Version 4 query presigning for S3-compatible storage.
//!
//! Clients upload object bytes directly to the bucket with a time-limited
//! PUT URL; the application never proxies file contents. Only the query
//! presigning flavor is implemented, with path-style addressing and an
//! unsigned payload.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::server::model::app::UploadSettings;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";

/// Builds a presigned PUT URL for `key`, valid for `settings.expiry_secs`
/// from `now`.
pub fn presign_put(settings: &UploadSettings, key: &str, now: DateTime<Utc>) -> String {
    let endpoint = settings.endpoint.trim_end_matches('/');
    let host = endpoint
        .strip_prefix("https://")
        .or_else(|| endpoint.strip_prefix("http://"))
        .unwrap_or(endpoint);

    let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
    let date = now.format("%Y%m%d").to_string();
    let scope = format!("{}/{}/{}/aws4_request", date, settings.region, SERVICE);
    let credential = format!("{}/{}", settings.access_key, scope);

    let canonical_uri = format!(
        "/{}/{}",
        uri_encode(&settings.bucket, false),
        uri_encode(key, true)
    );

    // Parameters are listed in sorted order, as the canonical query requires.
    let canonical_query = format!(
        "X-Amz-Algorithm={}\
         &X-Amz-Credential={}\
         &X-Amz-Date={}\
         &X-Amz-Expires={}\
         &X-Amz-SignedHeaders=host",
        ALGORITHM,
        uri_encode(&credential, false),
        amz_date,
        settings.expiry_secs,
    );

    let canonical_request = format!(
        "PUT\n{}\n{}\nhost:{}\n\nhost\nUNSIGNED-PAYLOAD",
        canonical_uri, canonical_query, host
    );

    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        ALGORITHM,
        amz_date,
        scope,
        hex::encode(Sha256::digest(canonical_request.as_bytes()))
    );

    let signing_key = derive_signing_key(&settings.secret_key, &date, &settings.region);
    let signature = hex::encode(hmac(&signing_key, string_to_sign.as_bytes()));

    format!(
        "{}{}?{}&X-Amz-Signature={}",
        endpoint, canonical_uri, canonical_query, signature
    )
}

/// Derives the per-day signing key through the SigV4 HMAC chain.
fn derive_signing_key(secret_key: &str, date: &str, region: &str) -> Vec<u8> {
    let date_key = hmac(format!("AWS4{}", secret_key).as_bytes(), date.as_bytes());
    let region_key = hmac(&date_key, region.as_bytes());
    let service_key = hmac(&region_key, SERVICE.as_bytes());

    hmac(&service_key, b"aws4_request")
}

fn hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(data);

    mac.finalize().into_bytes().to_vec()
}

/// Percent-encodes everything outside the SigV4 unreserved set. When
/// `is_path` is set, slashes are kept as segment separators.
fn uri_encode(input: &str, is_path: bool) -> String {
    let mut encoded = String::with_capacity(input.len());

    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            b'/' if is_path => encoded.push('/'),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }

    encoded
}

#[cfg(test)]
mod tests {
    mod presign_tests {
        use chrono::{TimeZone, Utc};

        use crate::server::{model::app::UploadSettings, util::sigv4::presign_put};

        fn settings() -> UploadSettings {
            UploadSettings {
                endpoint: "http://localhost:9000".to_string(),
                region: "us-east-1".to_string(),
                bucket: "alumnet-test".to_string(),
                access_key: "test-access-key".to_string(),
                secret_key: "test-secret-key".to_string(),
                expiry_secs: 600,
            }
        }

        /// Expect the URL to address the object path-style and carry the
        /// SigV4 query parameters
        #[test]
        fn test_presign_put_structure() {
            let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

            let url = presign_put(&settings(), "resumes/1700000000000-cv.pdf", now);

            assert!(url.starts_with(
                "http://localhost:9000/alumnet-test/resumes/1700000000000-cv.pdf?"
            ));
            assert!(url.contains("X-Amz-Algorithm=AWS4-HMAC-SHA256"));
            assert!(url.contains("X-Amz-Credential=test-access-key%2F20260314%2Fus-east-1%2Fs3%2Faws4_request"));
            assert!(url.contains("X-Amz-Date=20260314T092653Z"));
            assert!(url.contains("X-Amz-Expires=600"));
            assert!(url.contains("X-Amz-SignedHeaders=host"));

            let signature = url.split("X-Amz-Signature=").nth(1).unwrap();
            assert_eq!(signature.len(), 64);
            assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        }

        /// Expect the signature to be stable for identical inputs and change
        /// with the key
        #[test]
        fn test_presign_put_deterministic() {
            let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

            let first = presign_put(&settings(), "events/banner.png", now);
            let second = presign_put(&settings(), "events/banner.png", now);
            let other = presign_put(&settings(), "events/other.png", now);

            assert_eq!(first, second);
            assert_ne!(first, other);
        }

        /// Expect unsafe filename bytes to be percent-encoded in the path
        #[test]
        fn test_presign_put_encodes_key() {
            let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

            let url = presign_put(&settings(), "resumes/my cv.pdf", now);

            assert!(url.contains("/alumnet-test/resumes/my%20cv.pdf?"));
        }
    }
}

use chrono::Utc;

use crate::{
    model::upload::{PresignDto, PresignRequestDto},
    server::{error::Error, model::app::UploadSettings, util::sigv4},
};

/// Folders the client may request presigned uploads into.
const ALLOWED_FOLDERS: [&str; 4] = ["events", "donation-drives", "resumes", "contracts"];

pub struct UploadService<'a> {
    settings: &'a UploadSettings,
}

impl<'a> UploadService<'a> {
    /// Creates a new instance of [`UploadService`]
    pub fn new(settings: &'a UploadSettings) -> Self {
        Self { settings }
    }

    /// Validates the request and builds a presigned PUT URL for a fresh key
    ///
    /// Keys are prefixed with a millisecond timestamp so repeated uploads of
    /// the same filename never collide.
    pub fn presign(&self, request: PresignRequestDto) -> Result<PresignDto, Error> {
        if !ALLOWED_FOLDERS.contains(&request.folder.as_str()) {
            return Err(Error::Validation(format!(
                "Unknown upload folder {:?}",
                request.folder
            )));
        }

        let filename = sanitize_filename(&request.filename);
        if filename.is_empty() {
            return Err(Error::Validation(
                "Filename must contain at least one usable character".to_string(),
            ));
        }

        let key = format!(
            "{}/{}-{}",
            request.folder,
            Utc::now().timestamp_millis(),
            filename
        );
        let url = sigv4::presign_put(self.settings, &key, Utc::now());

        Ok(PresignDto { url, key })
    }
}

/// Reduces a client-supplied filename to a safe key segment.
fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    mod presign_tests {
        use crate::{
            model::upload::PresignRequestDto,
            server::{model::app::UploadSettings, service::upload::UploadService},
        };

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

        /// Expect a valid request to yield a key under the requested folder
        #[test]
        fn test_presign_success() {
            let settings = settings();
            let upload_service = UploadService::new(&settings);

            let result = upload_service.presign(PresignRequestDto {
                folder: "resumes".to_string(),
                filename: "cv.pdf".to_string(),
                content_type: "application/pdf".to_string(),
            });

            assert!(result.is_ok());
            let presigned = result.unwrap();

            assert!(presigned.key.starts_with("resumes/"));
            assert!(presigned.key.ends_with("-cv.pdf"));
            assert!(presigned.url.contains(&presigned.key));
        }

        /// Expect a folder outside the allowlist to be rejected
        #[test]
        fn test_presign_unknown_folder() {
            let settings = settings();
            let upload_service = UploadService::new(&settings);

            let result = upload_service.presign(PresignRequestDto {
                folder: "secrets".to_string(),
                filename: "cv.pdf".to_string(),
                content_type: "application/pdf".to_string(),
            });

            assert!(result.is_err());
        }

        /// Expect unsafe filename characters to be replaced
        #[test]
        fn test_presign_sanitizes_filename() {
            let settings = settings();
            let upload_service = UploadService::new(&settings);

            let presigned = upload_service
                .presign(PresignRequestDto {
                    folder: "events".to_string(),
                    filename: "spring gala (final).png".to_string(),
                    content_type: "image/png".to_string(),
                })
                .unwrap();

            assert!(presigned.key.ends_with("-spring-gala--final-.png"));
        }

        /// Expect a filename with no usable characters to be rejected
        #[test]
        fn test_presign_empty_filename() {
            let settings = settings();
            let upload_service = UploadService::new(&settings);

            let result = upload_service.presign(PresignRequestDto {
                folder: "events".to_string(),
                filename: "???".to_string(),
                content_type: "image/png".to_string(),
            });

            assert!(result.is_err());
        }
    }
}

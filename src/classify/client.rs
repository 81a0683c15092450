//! HTTP client for the `/predict` classification endpoint.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use tracing::debug;

use super::{ClassifyError, ClassifyOptions, SignatureClassifier, Verdict};

/// Blocking client posting crops to a classification service.
///
/// The crop is sent PNG-encoded as a multipart part named `file`;
/// `threshold` and `tta` travel as query parameters.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    base_url: String,
    client: Client,
}

impl HttpClassifier {
    /// Creates a client for the service at `base_url` (trailing slashes are
    /// trimmed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// The configured service base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn encode_png(image: &RgbImage) -> Result<Vec<u8>, ClassifyError> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(ClassifyError::Encode)?;
        Ok(buf)
    }
}

impl SignatureClassifier for HttpClassifier {
    fn classify(
        &self,
        image: &RgbImage,
        options: &ClassifyOptions,
    ) -> Result<Verdict, ClassifyError> {
        let png = Self::encode_png(image)?;
        let part = Part::bytes(png)
            .file_name("signature.png")
            .mime_str("image/png")?;
        let form = Form::new().part("file", part);

        let url = format!("{}/predict", self.base_url);
        debug!(
            %url,
            threshold = options.threshold,
            tta = options.tta,
            "posting crop for classification"
        );
        let response = self
            .client
            .post(&url)
            .query(&[
                ("threshold", options.threshold.to_string()),
                ("tta", options.tta.to_string()),
            ])
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ClassifyError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<Verdict>()?)
    }
}

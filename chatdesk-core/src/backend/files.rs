use super::AttachmentStore;
use super::http::{build_http_client, decode_json, error_detail};
use crate::attachments::{Attachment, UploadFile, UploadReceipt};
use crate::config::ChatdeskConfig;
use crate::config::constants::defaults;
use crate::error::ClientError;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use reqwest::multipart::{Form, Part};

/// Attachment store behind the `/api/files` endpoints
pub struct HttpAttachmentStore {
    http_client: HttpClient,
    list_url: String,
    upload_url: String,
    max_results: u32,
}

impl HttpAttachmentStore {
    pub fn new(
        http_client: HttpClient,
        list_url: String,
        upload_url: String,
        max_results: u32,
    ) -> Self {
        Self {
            http_client,
            list_url,
            upload_url,
            max_results,
        }
    }

    pub fn from_config(config: &ChatdeskConfig) -> Result<Self, ClientError> {
        let http_client = build_http_client(config.request_timeout())?;
        Ok(Self::new(
            http_client,
            config.endpoint(&config.files.list_path),
            config.endpoint(&config.files.upload_path),
            config.files.max_results,
        ))
    }

    fn multipart_form(file: &UploadFile) -> Result<Form, ClientError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                ClientError::upload(format!("invalid content type '{}': {e}", file.content_type))
            })?;
        Ok(Form::new().part(defaults::UPLOAD_FIELD, part))
    }
}

#[async_trait]
impl AttachmentStore for HttpAttachmentStore {
    async fn list(&self) -> Result<Vec<Attachment>, ClientError> {
        tracing::debug!(url = %self.list_url, max_results = self.max_results, "listing attachments");
        let response = self
            .http_client
            .get(&self.list_url)
            .query(&[("max_results", self.max_results)])
            .send()
            .await
            .map_err(ClientError::from)?;

        decode_json(response, &self.list_url).await
    }

    async fn upload(&self, file: &UploadFile) -> Result<UploadReceipt, ClientError> {
        tracing::debug!(
            url = %self.upload_url,
            name = %file.name,
            bytes = file.bytes.len(),
            "uploading attachment"
        );
        let form = Self::multipart_form(file)?;
        let response = self
            .http_client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::upload(e.to_string()))?;

        read_upload_receipt(response).await
    }
}

/// Interpret the upload response; only the status decides success
async fn read_upload_receipt(response: Response) -> Result<UploadReceipt, ClientError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::upload(format!("failed to read upload response: {e}")))?;

    if !status.is_success() {
        return Err(ClientError::upload(format!(
            "HTTP {status}: {}",
            error_detail(&body)
        )));
    }

    match serde_json::from_str::<UploadReceipt>(&body) {
        Ok(receipt) => Ok(receipt),
        Err(e) => {
            tracing::debug!("upload response was not a receipt: {e}");
            Ok(UploadReceipt::default())
        }
    }
}

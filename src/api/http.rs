use super::{ApiRequest, Reply, TextifyApi};
use crate::config::Config;
use crate::error::RequestError;
use reqwest::blocking::{multipart, Client};

/// Blocking HTTP transport. Each call stalls the caller until the server
/// answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &Config) -> Result<Self, RequestError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RequestError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.server_url.clone(),
        })
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint.path())
    }
}

impl TextifyApi for HttpApi {
    fn post(&self, request: ApiRequest) -> Result<Reply, RequestError> {
        let url = self.url(&request);
        log::debug!(
            "POST {} ({} fields, file: {})",
            url,
            request.fields.len(),
            request.file.as_ref().map_or(0, |part| part.bytes.len())
        );

        let builder = self.client.post(&url);
        let builder = match request.file {
            Some(part) => {
                let mut form = multipart::Form::new();
                for (name, value) in request.fields {
                    form = form.text(name, value);
                }
                let file = multipart::Part::bytes(part.bytes).file_name(part.file_name);
                builder.multipart(form.part(part.field, file))
            }
            None => builder.form(&request.fields),
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::info!("POST {} -> {}", url, status);

        Ok(Reply { status, body })
    }
}

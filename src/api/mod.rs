//! Wire-level description of the recognition service.
//!
//! Every user action maps to exactly one [`ApiRequest`]: a POST to a fixed
//! [`Endpoint`] carrying form fields and at most one file part. The
//! [`TextifyApi`] trait is the seam between flows and the network, so flows
//! can be exercised against a scripted implementation.

mod http;

pub use http::HttpApi;

use crate::error::RequestError;
use std::path::Path;

/// Fixed endpoints exposed by the recognition service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    Train,
    UploadDrawing,
    Drawings,
    RecognizePrinted,
    RecognizeHandwritten,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/textify/register",
            Self::Login => "/textify/login",
            Self::Train => "/textify/train",
            Self::UploadDrawing => "/textify/drawings/upload",
            Self::Drawings => "/textify/drawings",
            Self::RecognizePrinted => "/textify/",
            Self::RecognizeHandwritten => "/textify/handwritten",
        }
    }
}

/// A file sent as one multipart part
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// Multipart field name
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a local file into a part named `field`
    pub fn from_path(field: impl Into<String>, path: &Path) -> Result<Self, RequestError> {
        let bytes = std::fs::read(path).map_err(|source| RequestError::ReadUpload {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_owned());
        Ok(Self::new(field, file_name, bytes))
    }
}

/// A single POST to the recognition service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub fields: Vec<(String, String)>,
    pub file: Option<FilePart>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            fields: Vec::new(),
            file: None,
        }
    }

    pub fn field(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_owned(), value.to_string()));
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.file = Some(part);
        self
    }

    /// Value of a form field, if present
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn register(email: &str, password: &str, confirmation: &str) -> Self {
        Self::new(Endpoint::Register)
            .field("email", email)
            .field("password", password)
            .field("confirmation", confirmation)
    }

    pub fn login(email: &str, password: &str) -> Self {
        Self::new(Endpoint::Login)
            .field("email", email)
            .field("password", password)
    }

    pub fn train(user_id: &str) -> Self {
        Self::new(Endpoint::Train).field("user_id", user_id)
    }

    /// The file part is named after the file itself
    pub fn upload_drawing(user_id: &str, label_index: usize, name: &str, png: Vec<u8>) -> Self {
        Self::new(Endpoint::UploadDrawing)
            .field("user_id", user_id)
            .field("label_index", label_index)
            .field("name", name)
            .file(FilePart::new(name, name, png))
    }

    pub fn drawings(user_id: &str, label_index: usize) -> Self {
        Self::new(Endpoint::Drawings)
            .field("userId", user_id)
            .field("label", label_index)
    }

    pub fn recognize_printed(image: FilePart) -> Self {
        Self::new(Endpoint::RecognizePrinted).file(image)
    }

    pub fn recognize_handwritten(user_id: &str, image: FilePart) -> Self {
        Self::new(Endpoint::RecognizeHandwritten)
            .field("user_id", user_id)
            .file(image)
    }
}

/// Status and body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Only an exact 200 counts as success
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Transport to the recognition service
pub trait TextifyApi {
    /// Send one request and wait for the reply
    fn post(&self, request: ApiRequest) -> Result<Reply, RequestError>;
}

impl<T: TextifyApi + ?Sized> TextifyApi for Box<T> {
    fn post(&self, request: ApiRequest) -> Result<Reply, RequestError> {
        (**self).post(request)
    }
}

impl<T: TextifyApi + ?Sized> TextifyApi for std::rc::Rc<T> {
    fn post(&self, request: ApiRequest) -> Result<Reply, RequestError> {
        (**self).post(request)
    }
}

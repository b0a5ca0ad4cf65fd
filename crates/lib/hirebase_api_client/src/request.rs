//! Request building and response handling shared by every endpoint.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{ApiError, Client};

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Serialized as JSON and sent with `Content-Type: application/json`.
    Json(Value),
    /// Sent verbatim with no content type.
    Raw(String),
}

/// Per-request options. Defaults to an authenticated `GET` with no body.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Body>,
    pub headers: Vec<(String, String)>,
    /// Attach the session's bearer token, when one is stored.
    pub auth: bool,
    pub query: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            auth: true,
            query: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::method(Method::GET)
    }

    pub fn post() -> Self {
        Self::method(Method::POST)
    }

    pub fn put() -> Self {
        Self::method(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::method(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::method(Method::DELETE)
    }

    /// Attach `body` as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(Body::Json(
            serde_json::to_value(body).map_err(ApiError::Encode)?,
        ));
        Ok(self)
    }

    /// Attach an already serialized body.
    pub fn raw(mut self, body: impl Into<String>) -> Self {
        self.body = Some(Body::Raw(body.into()));
        self
    }

    /// Extra header, applied after the defaults so it can override them.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn auth(mut self, auth: bool) -> Self {
        self.auth = auth;
        self
    }

    pub fn query<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Client {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, auth: bool) -> Result<Option<String>, ApiError> {
        if !auth {
            return Ok(None);
        }
        Ok(self
            .session
            .token()?
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {t}")))
    }

    /// Build the request for `path` without sending it.
    pub fn build_request(&self, path: &str, opts: &RequestOptions) -> Result<Request, ApiError> {
        let mut builder = self.http.request(opts.method.clone(), self.url(path));
        if !opts.query.is_empty() {
            builder = builder.query(&opts.query);
        }
        match &opts.body {
            Some(Body::Json(value)) => {
                let bytes = serde_json::to_vec(value).map_err(ApiError::Encode)?;
                builder = builder.header(CONTENT_TYPE, "application/json").body(bytes);
            }
            Some(Body::Raw(text)) => builder = builder.body(text.clone()),
            None => {}
        }
        if let Some(bearer) = self.bearer(opts.auth)? {
            builder = builder.header(AUTHORIZATION, bearer);
        }

        let mut request = builder.build()?;
        for (name, value) in &opts.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            request.headers_mut().insert(header_name, header_value);
        }
        Ok(request)
    }

    /// Send a request and return the parsed JSON payload.
    ///
    /// Empty or non-JSON bodies yield `None`. Non-2xx responses become
    /// [`ApiError::Http`].
    pub async fn fetch_value(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let request = self.build_request(path, &opts)?;
        debug!(method = %request.method(), path, "api request");
        let response = self.http.execute(request).await?;
        read_payload(path, response).await
    }

    /// Send a request and decode the payload into `T`.
    ///
    /// An absent payload decodes as JSON `null`, so only types that accept
    /// null (such as `Option<_>` or `()`) succeed on an empty body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: RequestOptions,
    ) -> Result<T, ApiError> {
        let payload = self.fetch_value(path, opts).await?;
        decode(path, payload.unwrap_or(Value::Null))
    }

    /// Upload a resume as `multipart/form-data` (field `resume`) and return
    /// the stored file's URL, when the backend reports one.
    pub async fn upload_resume(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Option<String>, ApiError> {
        let path = "/api/uploads/resume";
        let mut part = Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(mime) = resume_mime(file_name) {
            part = part.mime_str(mime)?;
        }
        let mut builder = self
            .http
            .post(self.url(path))
            .multipart(Form::new().part("resume", part));
        if let Some(bearer) = self.bearer(true)? {
            builder = builder.header(AUTHORIZATION, bearer);
        }
        debug!(path, file_name, "uploading resume");
        let payload = read_payload(path, builder.send().await?).await?;
        Ok(payload.as_ref().and_then(uploaded_url))
    }
}

pub(crate) async fn read_payload(path: &str, response: Response) -> Result<Option<Value>, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    let payload = if text.trim().is_empty() {
        None
    } else {
        serde_json::from_str::<Value>(&text).ok()
    };
    if status.is_success() {
        Ok(payload)
    } else {
        debug!(path, status = status.as_u16(), "api request failed");
        Err(ApiError::http(status, payload))
    }
}

pub(crate) fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| {
        warn!(path, error = %source, "response did not match expected schema");
        ApiError::Decode {
            path: path.to_string(),
            source,
        }
    })
}

fn uploaded_url(payload: &Value) -> Option<String> {
    [payload.pointer("/data/url"), payload.get("url")]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

fn resume_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => None,
    }
}

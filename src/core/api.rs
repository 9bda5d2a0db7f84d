//! File server client.
//!
//! [`FileApi`] is the seam between the orchestration in [`crate::core::files`]
//! / [`crate::core::auth`] and the network. [`HttpApi`] talks to the real
//! server through `gloo-net`; tests swap in a recording mock.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::FormData;

use crate::config::api;
use crate::core::error::ApiError;
use crate::models::{FileId, FileRecord, delete_url};

/// Something that can be uploaded and has a display name for error messages.
pub trait UploadSource {
    fn file_name(&self) -> String;
}

impl UploadSource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Body of `POST /api/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub password: &'a str,
}

/// Answer of `POST /api/login`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
}

/// Operations offered by the file server.
#[allow(async_fn_in_trait)]
pub trait FileApi {
    type Upload: UploadSource;

    /// Submit the admin password.
    ///
    /// Only fails when no JSON answer could be obtained; a rejected
    /// password is `Ok(LoginResponse { success: false })`.
    async fn login(&self, password: &str) -> Result<LoginResponse, ApiError>;

    /// Fetch the full file list.
    async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError>;

    /// Upload one file.
    async fn upload(&self, file: &Self::Upload) -> Result<(), ApiError>;

    /// Delete a file by id.
    async fn delete(&self, id: &FileId) -> Result<(), ApiError>;
}

/// Browser fetch client for the same-origin server.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpApi;

impl HttpApi {
    fn url(path: &str) -> String {
        format!("{}{}", api::BASE_URL, path)
    }
}

impl FileApi for HttpApi {
    type Upload = web_sys::File;

    async fn login(&self, password: &str) -> Result<LoginResponse, ApiError> {
        let response = Request::post(&Self::url(api::LOGIN))
            .json(&LoginRequest { password })?
            .send()
            .await?;

        // The body is read whatever the status; a 401 still says `success: false`.
        Ok(response.json::<LoginResponse>().await?)
    }

    async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        let response = Request::get(&Self::url(api::FILES)).send().await?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }
        Ok(response.json::<Vec<FileRecord>>().await?)
    }

    async fn upload(&self, file: &web_sys::File) -> Result<(), ApiError> {
        let form = FormData::new()
            .map_err(|e| ApiError::RequestBuild(format!("{:?}", e)))?;
        form.append_with_blob(api::UPLOAD_FIELD, file)
            .map_err(|e| ApiError::RequestBuild(format!("{:?}", e)))?;

        let response = Request::post(&Self::url(api::UPLOAD))
            .body(form)?
            .send()
            .await?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }
        Ok(())
    }

    async fn delete(&self, id: &FileId) -> Result<(), ApiError> {
        let response = Request::delete(&delete_url(id)).send().await?;
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }
        Ok(())
    }
}

// ============================================================================
// Mock
// ============================================================================

/// Recording in-memory server for tests.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use std::cell::RefCell;
    use std::collections::{HashSet, VecDeque};

    use super::*;

    /// Named stand-in for a browser `File`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct MockUpload(pub String);

    impl UploadSource for MockUpload {
        fn file_name(&self) -> String {
            self.0.clone()
        }
    }

    /// Request as seen by the mock, in arrival order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Login(String),
        List,
        Upload(String),
        Delete(FileId),
    }

    #[derive(Debug, Default)]
    pub struct MockApi {
        pub password: String,
        pub offline: bool,
        pub files: RefCell<Vec<FileRecord>>,
        /// Upload names the server refuses with a 500.
        pub failing_uploads: HashSet<String>,
        /// Statuses returned by the next deletes (front first); 200 when empty.
        pub delete_statuses: RefCell<VecDeque<u16>>,
        pub calls: RefCell<Vec<Call>>,
    }

    impl MockApi {
        pub fn with_password(password: &str) -> Self {
            Self {
                password: password.to_string(),
                ..Default::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.offline {
                Err(ApiError::Network("Failed to fetch".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl FileApi for MockApi {
        type Upload = MockUpload;

        async fn login(&self, password: &str) -> Result<LoginResponse, ApiError> {
            self.record(Call::Login(password.to_string()))?;
            Ok(LoginResponse {
                success: password == self.password,
            })
        }

        async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
            self.record(Call::List)?;
            Ok(self.files.borrow().clone())
        }

        async fn upload(&self, file: &MockUpload) -> Result<(), ApiError> {
            self.record(Call::Upload(file.0.clone()))?;
            if self.failing_uploads.contains(&file.0) {
                return Err(ApiError::Http(500));
            }
            let mut files = self.files.borrow_mut();
            let id = FileId::Number(files.len() as u64 + 1);
            files.push(FileRecord {
                id,
                name: file.0.clone(),
                size: 0,
            });
            Ok(())
        }

        async fn delete(&self, id: &FileId) -> Result<(), ApiError> {
            self.record(Call::Delete(id.clone()))?;
            let status = self.delete_statuses.borrow_mut().pop_front().unwrap_or(200);
            if !(200..300).contains(&status) {
                return Err(ApiError::Http(status));
            }
            self.files.borrow_mut().retain(|f| &f.id != id);
            Ok(())
        }
    }
}

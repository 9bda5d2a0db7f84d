//! File list orchestration: load, upload batch, delete.
//!
//! Every mutation ends with a full reload; there is no local cache to keep
//! in sync.

use crate::core::api::{FileApi, UploadSource};
use crate::core::error::ApiError;
use crate::models::{FileId, ListState};

/// Fetch the whole list.
pub async fn load<A: FileApi>(api: &A) -> ListState {
    match api.list_files().await {
        Ok(files) => ListState::Loaded(files),
        Err(e) => ListState::Failed(e.to_string()),
    }
}

/// Upload `files` one after another, then reload once.
///
/// A failed upload is reported through `on_failed` with the file's name and
/// does not stop the rest of the batch.
pub async fn upload_batch<A, F>(api: &A, files: &[A::Upload], mut on_failed: F) -> ListState
where
    A: FileApi,
    F: FnMut(&str, &ApiError),
{
    for file in files {
        if let Err(e) = api.upload(file).await {
            on_failed(&file.file_name(), &e);
        }
    }
    load(api).await
}

/// Delete one file and reload on success.
pub async fn delete<A: FileApi>(api: &A, id: &FileId) -> Result<ListState, ApiError> {
    api.delete(id).await?;
    Ok(load(api).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::mock::{Call, MockApi, MockUpload};
    use crate::models::FileRecord;

    fn uploads(names: &[&str]) -> Vec<MockUpload> {
        names.iter().map(|n| MockUpload(n.to_string())).collect()
    }

    #[tokio::test]
    async fn test_load_returns_full_list() {
        let api = MockApi::default();
        api.files.borrow_mut().push(FileRecord {
            id: FileId::Number(1),
            name: "a.jar".to_string(),
            size: 12,
        });

        let ListState::Loaded(files) = load(&api).await else {
            panic!("expected loaded list");
        };
        assert_eq!(files.len(), 1);
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_load_failure() {
        let api = MockApi {
            offline: true,
            ..Default::default()
        };
        assert!(matches!(load(&api).await, ListState::Failed(_)));
    }

    #[tokio::test]
    async fn test_upload_batch_is_sequential_then_single_reload() {
        let api = MockApi::default();
        let batch = uploads(&["one.jar", "two.jar", "three.jar"]);

        let mut failed = Vec::new();
        let state = upload_batch(&api, &batch, |name, _| failed.push(name.to_string())).await;

        assert!(failed.is_empty());
        assert_eq!(
            api.calls(),
            vec![
                Call::Upload("one.jar".to_string()),
                Call::Upload("two.jar".to_string()),
                Call::Upload("three.jar".to_string()),
                Call::List,
            ]
        );
        let ListState::Loaded(files) = state else {
            panic!("expected loaded list");
        };
        assert_eq!(files.len(), 3);
    }

    #[tokio::test]
    async fn test_upload_failure_does_not_abort_batch() {
        let api = MockApi {
            failing_uploads: ["two.jar".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let batch = uploads(&["one.jar", "two.jar", "three.jar"]);

        let mut failed = Vec::new();
        upload_batch(&api, &batch, |name, err| {
            assert_eq!(err, &ApiError::Http(500));
            failed.push(name.to_string());
        })
        .await;

        assert_eq!(failed, vec!["two.jar".to_string()]);
        let calls = api.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls.iter().filter(|c| **c == Call::List).count(), 1);
        assert_eq!(calls.last(), Some(&Call::List));
    }

    #[tokio::test]
    async fn test_upload_batch_offline_still_reloads_once() {
        let api = MockApi {
            offline: true,
            ..Default::default()
        };
        let batch = uploads(&["a", "b"]);

        let mut failed = 0;
        let state = upload_batch(&api, &batch, |_, _| failed += 1).await;

        assert_eq!(failed, 2);
        assert!(matches!(state, ListState::Failed(_)));
        assert_eq!(
            api.calls(),
            vec![
                Call::Upload("a".to_string()),
                Call::Upload("b".to_string()),
                Call::List
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_reloads_on_success() {
        let api = MockApi::default();
        api.files.borrow_mut().push(FileRecord {
            id: FileId::Number(7),
            name: "x.jar".to_string(),
            size: 1,
        });

        let state = delete(&api, &FileId::Number(7)).await.unwrap();

        assert_eq!(state, ListState::Loaded(Vec::new()));
        assert_eq!(api.calls(), vec![Call::Delete(FileId::Number(7)), Call::List]);
    }

    #[tokio::test]
    async fn test_delete_failure_skips_reload() {
        let api = MockApi::default();
        api.delete_statuses.borrow_mut().push_back(404);

        let result = delete(&api, &FileId::Number(1)).await;

        assert_eq!(result, Err(ApiError::Http(404)));
        assert_eq!(api.calls(), vec![Call::Delete(FileId::Number(1))]);
    }
}

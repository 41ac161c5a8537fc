use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::models::record::{JobRecord, ResultFile};

/// File transfer half of the service client.
#[async_trait]
pub trait FileDownloader: Send + Sync {
    /// Download one product into `dest_dir`, returning where it was written.
    async fn download(&self, file: &ResultFile, dest_dir: &Path) -> Result<PathBuf, ServiceError>;
}

impl JobRecord {
    /// Hand each result file to `downloader`, in service order.
    ///
    /// A record without files yields no paths. Expired products are no longer
    /// hosted, so an expired record fails before any transfer starts.
    pub async fn download_files<D>(
        &self,
        downloader: &D,
        dest_dir: &Path,
    ) -> Result<Vec<PathBuf>, ServiceError>
    where
        D: FileDownloader + ?Sized,
    {
        if self.is_expired() {
            return Err(ServiceError::Expired {
                job_id: self.job_id.clone(),
            });
        }

        let mut paths = Vec::with_capacity(self.files().len());
        for file in self.files() {
            tracing::debug!(job_id = %self.job_id, filename = %file.filename, "Downloading job product");
            paths.push(downloader.download(file, dest_dir).await?);
        }
        Ok(paths)
    }
}

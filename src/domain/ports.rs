use crate::domain::model::GridResult;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write-only sink for the rendered sample file. The generator never reads
/// its own output back.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn start(&self) -> f64;
    fn stop(&self) -> f64;
    fn increment(&self) -> f64;
    fn output_path(&self) -> &str;
    fn filename(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Generate the sample sequence used as both coordinate axes.
    async fn sample(&self) -> Result<Vec<f64>>;
    /// Evaluate x² + y² over the axis crossed with itself and render the
    /// text artifact.
    async fn evaluate(&self, axis: Vec<f64>) -> Result<GridResult>;
    /// Persist the rendered text, returning the output path.
    async fn write(&self, result: GridResult) -> Result<String>;
}

use crate::core::range::DecimalRange;
use crate::core::{ConfigProvider, GridResult, GridRow, Pipeline, Storage};
use crate::utils::error::Result;

pub struct GridPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GridPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for GridPipeline<S, C> {
    async fn sample(&self) -> Result<Vec<f64>> {
        tracing::debug!(
            "Generating sample sequence: start={}, stop={}, increment={}",
            self.config.start(),
            self.config.stop(),
            self.config.increment()
        );

        let axis: Vec<f64> =
            DecimalRange::new(self.config.start(), self.config.stop(), self.config.increment())
                .collect();

        tracing::debug!("Generated {} axis samples", axis.len());
        Ok(axis)
    }

    async fn evaluate(&self, axis: Vec<f64>) -> Result<GridResult> {
        let mut rows = Vec::with_capacity(axis.len());
        let mut text_output = String::new();

        // Header line: every x value, each followed by a single space.
        for x in &axis {
            text_output.push_str(&format!("{} ", x));
        }
        text_output.push('\n');

        // One line per y: the y value, then x² + y² for every x on the axis.
        for &y in &axis {
            let values: Vec<f64> = axis.iter().map(|&x| x * x + y * y).collect();

            text_output.push_str(&format!("{} ", y));
            for value in &values {
                text_output.push_str(&format!("{} ", value));
            }
            text_output.push('\n');

            rows.push(GridRow { y, values });
        }

        Ok(GridResult {
            axis,
            rows,
            text_output,
        })
    }

    async fn write(&self, result: GridResult) -> Result<String> {
        let filename = self.config.filename();
        let output_path = format!("{}/{}", self.config.output_path(), filename);

        tracing::debug!(
            "Writing {} bytes ({} rows) to {}",
            result.text_output.len(),
            result.rows.len(),
            output_path
        );

        self.storage
            .write_file(filename, result.text_output.as_bytes())
            .await?;

        tracing::debug!("Sample file saved successfully");
        Ok(output_path)
    }
}

use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct SamplerEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> SamplerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: enabled.then(|| SystemMonitor::new(true)),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting grid sampling...");

        tracing::info!("Generating sample sequence...");
        let axis = self.pipeline.sample().await?;
        tracing::info!("Generated {} samples", axis.len());
        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_stats("sample");
        }

        tracing::info!("Evaluating grid...");
        let result = self.pipeline.evaluate(axis).await?;
        tracing::info!(
            "Evaluated {} rows of {} values",
            result.rows.len(),
            result.axis.len()
        );
        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_stats("evaluate");
        }

        tracing::info!("Writing sample file...");
        let output_path = self.pipeline.write(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_stats("write");
        }

        Ok(output_path)
    }
}

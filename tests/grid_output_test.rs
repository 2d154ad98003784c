use grid_sampler::{CliConfig, GridPipeline, LocalStorage, SamplerEngine};
use tempfile::TempDir;

const FILENAME: &str = "for_two_dimensional_interpolation_sequential.txt";

fn default_config(output_path: &str) -> CliConfig {
    CliConfig {
        start: -1.0,
        stop: 1.0001,
        increment: 1.0,
        output_path: output_path.to_string(),
        filename: FILENAME.to_string(),
        verbose: false,
        monitor: false,
    }
}

async fn run_sampler(config: CliConfig) -> String {
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = GridPipeline::new(storage, config);
    let engine = SamplerEngine::new(pipeline);
    engine.run().await.unwrap()
}

#[tokio::test]
async fn test_end_to_end_default_constants() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let result_path = run_sampler(default_config(&output_path)).await;
    assert!(result_path.ends_with(FILENAME));

    let full_path = temp_dir.path().join(FILENAME);
    let content = std::fs::read_to_string(&full_path).unwrap();

    assert_eq!(content, "-1 0 1 \n-1 2 1 2 \n0 1 0 1 \n1 2 1 2 \n");

    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "-1 0 1 ");
    assert_eq!(lines[1], "-1 2 1 2 ");
    assert_eq!(lines[2], "0 1 0 1 ");
    assert_eq!(lines[3], "1 2 1 2 ");
}

#[tokio::test]
async fn test_rerun_overwrites_with_identical_content() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let full_path = temp_dir.path().join(FILENAME);

    // Stale content from a previous run must be truncated, not appended to.
    std::fs::write(&full_path, "stale content that is much longer than the real output\n")
        .unwrap();

    run_sampler(default_config(&output_path)).await;
    let first = std::fs::read(&full_path).unwrap();

    run_sampler(default_config(&output_path)).await;
    let second = std::fs::read(&full_path).unwrap();

    assert_eq!(first, b"-1 0 1 \n-1 2 1 2 \n0 1 0 1 \n1 2 1 2 \n");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_every_row_width_matches_header() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = CliConfig {
        start: -2.0,
        stop: 2.0001,
        increment: 0.5,
        ..default_config(&output_path)
    };
    run_sampler(config).await;

    let content = std::fs::read_to_string(temp_dir.path().join(FILENAME)).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    let header_count = lines[0].split_whitespace().count();
    assert_eq!(lines.len(), header_count + 1);

    for line in &lines[1..] {
        // y value plus one function value per x
        assert_eq!(line.split_whitespace().count(), header_count + 1);
    }
}

#[tokio::test]
async fn test_grid_values_are_symmetric() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    run_sampler(default_config(&output_path)).await;

    let content = std::fs::read_to_string(temp_dir.path().join(FILENAME)).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    let grid: Vec<Vec<f64>> = lines[1..]
        .iter()
        .map(|line| {
            line.split_whitespace()
                .skip(1)
                .map(|v| v.parse().unwrap())
                .collect()
        })
        .collect();

    let n = grid.len();
    for i in 0..n {
        for j in 0..n {
            assert_eq!(grid[i][j], grid[j][i]);
            assert_eq!(grid[i][j], grid[i][n - 1 - j]);
            assert_eq!(grid[i][j], grid[n - 1 - i][j]);
        }
    }
}

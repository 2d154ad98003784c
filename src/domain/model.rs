use serde::{Deserialize, Serialize};

/// One output row: a y coordinate and x² + y² for every x on the axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRow {
    pub y: f64,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct GridResult {
    pub axis: Vec<f64>,
    pub rows: Vec<GridRow>,
    pub text_output: String,
}

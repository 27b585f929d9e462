//! Aggregate shapes handed from the compute functions to the renderers

/// One labelled line series with integer x positions
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(i32, f64)>,
}

/// One labelled bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A dense annotated heatmap: `cells[row][col]`, labels per axis
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub cells: Vec<Vec<f64>>,
}

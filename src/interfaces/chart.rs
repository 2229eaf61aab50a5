use crate::domain::latency::LatencyTable;
use crate::domain::reference::ReferenceLine;

/// One plotted series: a legend label and its points in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// Everything the viewer needs to draw the figure, with raw (untransformed)
/// values. Keeping this separate from the egui layer lets the whole figure
/// be asserted on without a display backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub log_x: bool,
    pub log_y: bool,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl ChartSpec {
    /// Builds the latency figure: random and sequential latency against
    /// allocation size, both axes logarithmic, one vertical marker per
    /// reference line. Pure function of its inputs.
    pub fn build(table: &LatencyTable, reference_lines: Vec<ReferenceLine>) -> Self {
        let sizes: Vec<f64> = table.sizes().collect();

        let random = Series {
            name: "Random access".to_string(),
            points: sizes
                .iter()
                .zip(table.random_ns())
                .map(|(&x, y)| [x, y])
                .collect(),
        };

        let sequential = Series {
            name: "Sequential access".to_string(),
            points: sizes
                .iter()
                .zip(table.sequential_ns())
                .map(|(&x, y)| [x, y])
                .collect(),
        };

        ChartSpec {
            title: "Latency as a function of array size".to_string(),
            x_label: "Bytes allocated (log scale)".to_string(),
            y_label: "Latency (ns log scale)".to_string(),
            log_x: true,
            log_y: true,
            series: vec![random, sequential],
            reference_lines,
        }
    }
}

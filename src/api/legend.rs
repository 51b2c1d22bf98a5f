use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::render::Color;

/// Where the legend goes relative to the chart body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
    Hidden,
}

/// Vertical sections a host lays out for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSection {
    Legend,
    Body,
}

impl LegendPosition {
    /// Top-to-bottom order in which the host composes legend and body.
    #[must_use]
    pub fn section_order(self) -> &'static [ChartSection] {
        match self {
            Self::Top => &[ChartSection::Legend, ChartSection::Body],
            Self::Bottom => &[ChartSection::Body, ChartSection::Legend],
            Self::Hidden => &[ChartSection::Body],
        }
    }
}

/// One legend swatch; drawing it is up to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: Color,
}

#[must_use]
pub fn legend_entries(dataset: &Dataset) -> Vec<LegendEntry> {
    dataset
        .series
        .iter()
        .map(|series| LegendEntry {
            name: series.name.clone(),
            color: series.color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ChartSection, LegendPosition, legend_entries};
    use crate::core::{Dataset, Series};
    use crate::render::Color;

    #[test]
    fn section_order_follows_position() {
        assert_eq!(
            LegendPosition::Bottom.section_order(),
            &[ChartSection::Body, ChartSection::Legend]
        );
        assert_eq!(LegendPosition::Hidden.section_order(), &[ChartSection::Body]);
    }

    #[test]
    fn entries_follow_series_order() {
        let dataset = Dataset::new(
            vec![
                Series::new("revenue", vec![], Color::BLUE),
                Series::new("cost", vec![], Color::GRAY),
            ],
            vec![],
        );
        let names: Vec<String> = legend_entries(&dataset)
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["revenue", "cost"]);
    }
}

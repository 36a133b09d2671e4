use std::collections::BTreeSet;

use eframe::egui::Color32;

use super::model::LabeledBlock;
use crate::color::series_color;

// ---------------------------------------------------------------------------
// Chart series for the selected blocks
// ---------------------------------------------------------------------------

/// One line on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub name: String,
    /// `[timestamp, clock_rate_mhz]` in stored sample order.
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
}

/// Build the series for every block whose label is in `selected`.
///
/// Series follow block-list order and are coloured by their position among
/// the selected series, so the same selection always gets the same colours.
pub fn plot_series(blocks: &[LabeledBlock], selected: &BTreeSet<String>) -> Vec<PlotSeries> {
    blocks
        .iter()
        .filter(|b| selected.contains(&b.block_name))
        .enumerate()
        .map(|(pos, block)| PlotSeries {
            name: block.block_name.clone(),
            points: block
                .samples
                .iter()
                .map(|s| [s.timestamp as f64, s.clock_rate_mhz])
                .collect(),
            color: series_color(pos),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SERIES_PALETTE_LEN;
    use crate::data::model::Sample;
    use crate::data::stats::FileStatistics;

    fn block(label: &str, samples: Vec<Sample>) -> LabeledBlock {
        LabeledBlock {
            block_name: label.to_string(),
            source_file_name: format!("{label}.csv"),
            stats: samples.iter().map(|s| s.clock_rate_mhz).collect::<FileStatistics>(),
            samples,
        }
    }

    fn select(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn only_selected_blocks_in_block_order() {
        let blocks = vec![
            block("C", vec![Sample::new(0, 1.0)]),
            block("A", vec![Sample::new(0, 2.0)]),
            block("B", vec![Sample::new(0, 3.0)]),
        ];
        let series = plot_series(&blocks, &select(&["A", "C"]));
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn samples_are_not_reordered() {
        let blocks = vec![block(
            "A",
            vec![Sample::new(5, 1.0), Sample::new(1, 2.0), Sample::new(3, 3.0)],
        )];
        let series = plot_series(&blocks, &select(&["A"]));
        assert_eq!(series[0].points, vec![[5.0, 1.0], [1.0, 2.0], [3.0, 3.0]]);
    }

    #[test]
    fn nothing_selected() {
        let blocks = vec![block("A", vec![Sample::new(0, 1.0)])];
        assert!(plot_series(&blocks, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn colours_are_positional_and_cycle() {
        let labels: Vec<String> = (0..SERIES_PALETTE_LEN + 2).map(|i| format!("L{i:02}")).collect();
        let blocks: Vec<LabeledBlock> = labels.iter().map(|l| block(l, vec![])).collect();
        let all: BTreeSet<String> = labels.iter().cloned().collect();

        let first = plot_series(&blocks, &all);
        let again = plot_series(&blocks, &all);
        assert_eq!(first, again);
        assert_eq!(first[SERIES_PALETTE_LEN].color, first[0].color);
        assert_eq!(first[SERIES_PALETTE_LEN + 1].color, first[1].color);
        assert_ne!(first[0].color, first[1].color);
    }
}

use super::build::BuildReport;
use crate::table::RobinHoodTable;
use std::hash::BuildHasher;

/// Rows of the probe-distance histogram printed before eliding the rest
const HISTOGRAM_ROWS: usize = 16;
const MAX_BAR: usize = 40;

/// Occupancy and probe-distance figures for a built table
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub capacity: usize,
    pub occupied: usize,
    pub load_factor: f64,
    /// Total line numbers stored across all entries
    pub postings: usize,
    pub max_probe: usize,
    pub mean_probe: f64,
    /// `histogram[d]` is the number of entries at probe distance `d`
    pub histogram: Vec<usize>,
}

impl TableStats {
    pub fn collect<S: BuildHasher>(table: &RobinHoodTable<S>) -> Self {
        let max_probe = table.max_probe_distance();
        let mut histogram = vec![0usize; max_probe + 1];
        let mut postings = 0;
        let mut total_probe = 0;

        for (_, entry) in table.iter() {
            histogram[entry.probe_distance()] += 1;
            total_probe += entry.probe_distance();
            postings += entry.lines().len();
        }

        let mean_probe = if table.is_empty() {
            0.0
        } else {
            total_probe as f64 / table.len() as f64
        };

        Self {
            capacity: table.capacity(),
            occupied: table.len(),
            load_factor: table.load_factor(),
            postings,
            max_probe,
            mean_probe,
            histogram,
        }
    }
}

/// Display table statistics
pub fn show_stats(stats: &TableStats, report: Option<&BuildReport>) {
    println!("Table Statistics");
    println!("================");
    println!();
    println!("Capacity:         {}", stats.capacity);
    println!("Distinct words:   {}", stats.occupied);
    println!("Load factor:      {:.4}", stats.load_factor);
    println!("Line postings:    {}", stats.postings);
    println!("Max probe:        {}", stats.max_probe);
    println!("Mean probe:       {:.3}", stats.mean_probe);

    if let Some(report) = report {
        println!();
        println!("Lines read:       {}", report.lines);
        println!("New words:        {}", report.inserted);
        println!("Merged words:     {}", report.merged);
        println!("Indexing time:    {:.6} seconds", report.elapsed.as_secs_f64());
    }

    if stats.occupied == 0 {
        return;
    }

    println!();
    println!("Probe distances:");
    let max = stats.histogram.iter().copied().max().unwrap_or(0);
    for (distance, &count) in stats.histogram.iter().enumerate().take(HISTOGRAM_ROWS) {
        println!("  {:>3} | {} ({})", distance, histogram_bar(count, max), count);
    }

    if stats.histogram.len() > HISTOGRAM_ROWS {
        let rest: usize = stats.histogram[HISTOGRAM_ROWS..].iter().sum();
        println!("  ... and {} entries further out", rest);
    }
}

/// Bar scaled so the largest bucket spans `MAX_BAR` cells
fn histogram_bar(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let cells = (count * MAX_BAR).div_ceil(max);
    "█".repeat(cells)
}

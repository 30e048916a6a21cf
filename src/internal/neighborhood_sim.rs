#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]
#![allow(clippy::unwrap_used)]
#![allow(warnings)]

use plotters::prelude::*;
use rand::Rng;

// Slot count of the simulated tables; a power of two so home buckets come
// from masking, as in the library implementation.
const TABLE_SIZE: usize = 65_536;
// Load factors from 0.1 to 0.95 with 10 steps
const NUM_LOAD_FACTORS: usize = 10;

// Placement strategies to compare
const METHODS: [&str; 2] = ["Linear Probing", "Bounded Neighborhood"];
const MAX_PROBES: usize = 1_000; // Prevent runaway linear scans

// Multiplicative hash for simulation purposes
fn hash_function(key: usize) -> usize {
    key.wrapping_mul(0x9E37_79B9_7F4A_7C15) & (TABLE_SIZE - 1)
}

// Cyclic forward distance between two slot indices
fn dist(from: usize, to: usize) -> usize {
    if to >= from { to - from } else { TABLE_SIZE - from + to }
}

// Traditional linear probing: step one slot at a time until a free slot
fn linear_probing(table: &mut [Option<usize>], key: usize) -> usize {
    let mut index = hash_function(key);
    let mut probes = 1;

    while table[index].is_some() && probes < MAX_PROBES {
        index = (index + 1) & (TABLE_SIZE - 1);
        probes += 1;
    }

    if table[index].is_none() {
        table[index] = Some(key);
    }

    probes
}

// Fixed-capacity table using bounded-neighborhood placement: every key ends
// up within `neighborhood` slots of its home bucket, with the bound doubling
// whenever a displacement cascade cannot free a slot in range.
struct BoundedTable {
    slots: Vec<Option<usize>>,
    origins: Vec<usize>,
    neighborhood: usize,
}

impl BoundedTable {
    fn new() -> Self {
        Self {
            slots: vec![None; TABLE_SIZE],
            origins: vec![0; TABLE_SIZE],
            neighborhood: 1,
        }
    }

    // Returns the number of slots touched to place the key, counting every
    // forward scan and cascade move, including work redone after the bound
    // doubles.
    fn insert(&mut self, key: usize) -> usize {
        let home = hash_function(key);
        let mut probes = 1;

        loop {
            if self.slots[home].is_none() {
                self.slots[home] = Some(key);
                self.origins[home] = home;
                return probes;
            }

            // Nearest free slot forward of the home bucket
            let mut free = None;
            for shift in 1..TABLE_SIZE {
                let pos = (home + shift) & (TABLE_SIZE - 1);
                probes += 1;
                if self.slots[pos].is_none() {
                    free = Some(pos);
                    break;
                }
            }
            let Some(mut candidate) = free else {
                // Table completely full; drop the key
                return probes;
            };

            let mut resolved = true;
            while dist(home, candidate) >= self.neighborhood {
                let mut moved = false;
                for shift in 1..self.neighborhood {
                    let source = (candidate + TABLE_SIZE - shift) & (TABLE_SIZE - 1);
                    probes += 1;
                    if self.slots[source].is_some()
                        && dist(self.origins[source], candidate) < self.neighborhood
                    {
                        self.slots[candidate] = self.slots[source].take();
                        self.origins[candidate] = self.origins[source];
                        candidate = source;
                        moved = true;
                        break;
                    }
                }
                if !moved {
                    // Nothing in the window may move; widen the bound and
                    // restart the placement
                    self.neighborhood *= 2;
                    resolved = false;
                    break;
                }
            }

            if resolved {
                self.slots[candidate] = Some(key);
                self.origins[candidate] = home;
                return probes;
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate load factors from 0.1 to 0.95
    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64))
        .collect();

    // Calculate number of keys for each load factor
    let num_keys: Vec<usize> =
        load_factors.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load factors: {:?}", load_factors);
    println!("Number of keys: {:?}", num_keys);

    // Results storage
    let mut average_placement_probes: Vec<Vec<f64>> = vec![Vec::new(); METHODS.len()];
    let mut lookup_windows: Vec<Vec<usize>> = vec![Vec::new(); METHODS.len()];

    // Generate random keys outside the loop to ensure fair comparison
    let mut rng = rand::rng();
    let max_keys_needed = *num_keys.iter().max().unwrap();
    let keys: Vec<usize> = (0..max_keys_needed).map(|_| rng.random_range(1..1_000_000)).collect();

    // Running experiments
    for &n_keys in &num_keys {
        println!("Testing with {} keys", n_keys);

        // Linear probing
        let mut linear_table: Vec<Option<usize>> = vec![None; TABLE_SIZE];
        let mut linear_probes: Vec<usize> = Vec::with_capacity(n_keys);
        for &key in keys.iter().take(n_keys) {
            linear_probes.push(linear_probing(&mut linear_table, key));
        }
        let linear_avg =
            linear_probes.iter().sum::<usize>() as f64 / linear_probes.len() as f64;
        // A linear-probing lookup may have to walk the longest placement run
        let linear_window = *linear_probes.iter().max().unwrap_or(&0);
        average_placement_probes[0].push(linear_avg);
        lookup_windows[0].push(linear_window);

        // Bounded neighborhood
        let mut bounded = BoundedTable::new();
        let mut bounded_probes: Vec<usize> = Vec::with_capacity(n_keys);
        for &key in keys.iter().take(n_keys) {
            bounded_probes.push(bounded.insert(key));
        }
        let bounded_avg =
            bounded_probes.iter().sum::<usize>() as f64 / bounded_probes.len() as f64;
        // A bounded lookup never scans past the neighborhood bound
        let bounded_window = bounded.neighborhood;
        average_placement_probes[1].push(bounded_avg);
        lookup_windows[1].push(bounded_window);

        println!(
            "  Linear Probing: Avg probes = {:.2}, Lookup window = {}",
            linear_avg, linear_window
        );
        println!(
            "  Bounded Neighborhood: Avg probes = {:.2}, Lookup window = {}",
            bounded_avg, bounded_window
        );
    }

    // Plot configuration
    let font_family = "sans-serif";

    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];

    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Custom x-axis labels shared by both plots
    let x_labels: Vec<String> = num_keys.iter().map(|&n| n.to_string()).collect();

    // Plot 1: Average Placement Probes
    let root = BitMapBackend::new("placement_probes.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_avg = average_placement_probes
        .iter()
        .flat_map(|v| v.iter())
        .fold(0.0, |max, &x| if x > max { x } else { max }) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Placement Cost: Linear vs Bounded Neighborhood", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_avg)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Average Placement Probes")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, average_placement_probes[method_idx][i])),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, average_placement_probes[method_idx][i]), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Plot 2: Worst-Case Lookup Window
    let root = BitMapBackend::new("lookup_window.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_window = lookup_windows
        .iter()
        .flat_map(|v| v.iter())
        .fold(0, |max, &x| if x > max { x } else { max }) as f64 *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption("Worst-Case Lookup Window", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..(num_keys.len() - 1), 0.0..max_window)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len() - 1)
        .x_label_formatter(&|x| {
            if *x < x_labels.len() { x_labels[*x].clone() } else { "".to_string() }
        })
        .x_desc("Number of Keys Inserted")
        .y_desc("Slots a Lookup May Scan")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, &method) in METHODS.iter().enumerate() {
        let color = &colors[method_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                (0..num_keys.len() - 1).map(|i| (i, lookup_windows[method_idx][i] as f64)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series((0..num_keys.len() - 1).map(|i| {
            Circle::new((i, lookup_windows[method_idx][i] as f64), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    println!("Generated plot images: placement_probes.png, lookup_window.png");

    Ok(())
}

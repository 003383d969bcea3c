//! Region traversal and reshape walkthrough.
//!
//! This example demonstrates:
//! - Checked element access on a dense matrix
//! - Row-major and column-major walks over a sub-region
//! - Writing through a region iterator
//! - Reshaping with and without value preservation
//!
//! Run with:
//! ```bash
//! RUST_LOG=tenrso_matrix=debug cargo run --example region_walk
//! ```

use tenrso_matrix::{DenseMatrix, Matrix, Region, TraversalOrder};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== TenRSo Matrix: Regions and Reshape ===\n");

    example_regions()?;
    example_write_through()?;
    example_reshape()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_regions() -> anyhow::Result<()> {
    println!("--- Example 1: Sub-region walks ---");

    let m = DenseMatrix::from_fn(3, 3, |r, c| (r * 3 + c) as f64);
    println!("Matrix 3x3 with v[r][c] = r*3 + c");

    let row_major: Vec<f64> = m.iterator(true, 0, 1, 1, 2)?.map(|e| e.value).collect();
    println!("  row-major rows 0..=1, cols 1..=2:    {:?}", row_major);

    let col_major: Vec<f64> = m.iterator(false, 0, 1, 1, 2)?.map(|e| e.value).collect();
    println!("  column-major rows 0..=1, cols 1..=2: {:?}", col_major);

    match m.iterator(true, 0, 0, 3, 0) {
        Ok(_) => println!("  unexpected: region past the last row accepted"),
        Err(err) => println!("  rejected: {}", err),
    }

    Ok(())
}

fn example_write_through() -> anyhow::Result<()> {
    println!("\n--- Example 2: Writing through an iterator ---");

    let mut m = DenseMatrix::zeros(4, 4);
    {
        let mut it = m.region_iter_mut(TraversalOrder::RowMajor, Region::new(1, 1, 2, 2))?;
        while let Some(entry) = it.next() {
            it.set((entry.row * 10 + entry.col) as f64)?;
        }
    }

    for r in 0..m.num_rows() {
        let row: Vec<f64> = (0..m.num_cols()).map(|c| m[(r, c)]).collect();
        println!("  {:?}", row);
    }

    Ok(())
}

fn example_reshape() -> anyhow::Result<()> {
    println!("\n--- Example 3: Reshape ---");

    let mut m = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    println!("Start: {:?}", m);

    m.reshape(2, 2, false)?;
    m.reshape(4, 4, true)?;
    println!(
        "After reshape(4, 4, true): {}x{}, capacity {}",
        m.num_rows(),
        m.num_cols(),
        m.capacity()
    );
    println!(
        "  preserved block: [[{}, {}], [{}, {}]]",
        m.get(0, 0)?,
        m.get(0, 1)?,
        m.get(1, 0)?,
        m.get(1, 1)?
    );

    m.reshape(3, 2, true)?;
    println!(
        "After reshape(3, 2, true): {} elements, capacity still {}",
        m.num_elements(),
        m.capacity()
    );

    Ok(())
}

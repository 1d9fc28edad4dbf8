use binreduce::{
    binreduce, binreduce_batch, BinReduceConfig, BinReduceJob, MinLength, RecordWarnings, ReduceOp,
};
use ndarray::arr1;

fn format_bins(values: &[f64]) -> String {
    let cells: Vec<String> = values
        .iter()
        .map(|v| if v.is_nan() { "nan".to_string() } else { format!("{}", v) })
        .collect();
    format!("[{}]", cells.join(", "))
}

fn main() {
    println!("binreduce {}: per-bin max/min of weights", binreduce::VERSION);

    let list = arr1(&[0i64, 2, 0, 1]);
    let weights = arr1(&[5.0, 3.0, 9.0, 1.0]);

    println!("\nIndices: {}", list);
    println!("Weights: {}", weights);

    let mut warnings = RecordWarnings::new();
    for (op, minlength) in [
        ("max", MinLength::Explicit(0)),
        ("min", MinLength::Explicit(5)),
        ("max", MinLength::Unspecified),
    ] {
        match binreduce(op, &list, Some(&weights), minlength, &mut warnings) {
            Ok(out) => println!("  {} {:?}: {}", op, minlength, format_bins(&out.to_vec())),
            Err(e) => println!("  {} {:?}: error: {}", op, minlength, e),
        }
    }

    for warning in &warnings.warnings {
        println!("  {}", warning);
    }

    // Rejected inputs
    println!("\nErrors:");
    let bad = arr1(&[0i64, -1]);
    let bad_weights = arr1(&[1.0, 2.0]);
    let negative =
        binreduce("min", &bad, Some(&bad_weights), MinLength::Explicit(0), &mut warnings);
    if let Err(e) = negative {
        println!("  {}", e);
    }
    let unknown = binreduce("mean", &list, Some(&weights), MinLength::Explicit(0), &mut warnings);
    if let Err(e) = unknown {
        println!("  {}", e);
    }

    // Independent reductions on the worker pool
    let config = BinReduceConfig::default();
    println!("\nBatch on {} threads:", config.system_params.n_threads);
    let jobs: Vec<BinReduceJob> = (0..8)
        .map(|i| {
            let op = if i % 2 == 0 { ReduceOp::Max } else { ReduceOp::Min };
            BinReduceJob::new(op, vec![0, 2, 0, 1], vec![5.0 + i as f64, 3.0, 9.0, 1.0], 0)
        })
        .collect();

    match binreduce_batch(&jobs, &config) {
        Ok(results) => {
            for (i, (job, result)) in jobs.iter().zip(results).enumerate() {
                match result {
                    Ok(out) => println!("  Job {} ({}): {}", i, job.op, format_bins(&out)),
                    Err(e) => println!("  Job {} ({}): error: {}", i, job.op, e),
                }
            }
        }
        Err(e) => eprintln!("Batch failed: {}", e),
    }
}

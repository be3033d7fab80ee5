use neuroscreen_core::run_from_csv;

pub fn run(file: &str, seed: Option<u32>, output: Option<&str>) {
    let text = match std::fs::read_to_string(file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Cannot read {file}: {e}");
            std::process::exit(1);
        }
    };

    let seed = super::resolve_seed(seed);
    println!("\u{1F9E0} Neuroscreen v{}", neuroscreen_core::VERSION);
    println!("   CSV analysis  file={file}  seed={seed}");

    match run_from_csv(&text, seed) {
        Ok(report) => {
            super::print_report(&report);
            super::write_report(&report, output);
        }
        Err(e) => {
            // Validation failures surface their specific message; there is
            // no fallback to simulated data.
            eprintln!("\nIngestion rejected: {e}");
            std::process::exit(1);
        }
    }
}

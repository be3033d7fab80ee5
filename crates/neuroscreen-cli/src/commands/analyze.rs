use neuroscreen_core::run_simulated;

pub fn run(seed: Option<u32>, pathology: bool, output: Option<&str>) {
    let seed = super::resolve_seed(seed);
    let profile = if pathology {
        "pathological"
    } else {
        "healthy"
    };

    println!("\u{1F9E0} Neuroscreen v{}", neuroscreen_core::VERSION);
    println!("   Simulated analysis  seed={seed}  profile={profile}");

    let report = run_simulated(pathology, seed);
    super::print_report(&report);
    super::write_report(&report, output);
}

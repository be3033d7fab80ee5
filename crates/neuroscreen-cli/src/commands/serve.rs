pub fn run(host: &str, port: u16, delay_ms: u64) {
    let base = format!("http://{host}:{port}");

    println!("\u{1F9E0} Neuroscreen Server v{}", neuroscreen_core::VERSION);
    println!("   {base}");
    if delay_ms > 0 {
        println!("   Simulated analysis latency: {delay_ms} ms");
    }
    println!();
    println!("   Endpoints:");
    println!("     GET  /                  API index (try: curl {base})");
    println!("     POST /api/v1/analyze    Simulated run (JSON body: seed, pathology)");
    println!("     POST /api/v1/ingest     Score a CSV body (?seed=N)");
    println!("     GET  /api/v1/history    Last 5 run summaries");
    println!("     GET  /health            Health check");
    println!();
    println!("   Examples:");
    println!("     curl -X POST {base}/api/v1/analyze -H 'content-type: application/json' -d '{{\"seed\":42,\"pathology\":true}}'");
    println!("     curl -X POST '{base}/api/v1/ingest?seed=42' --data-binary @recording.csv");
    println!("     curl {base}/api/v1/history");
    println!();
    println!("   Press Ctrl+C to stop");

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    if let Err(e) = runtime.block_on(neuroscreen_server::run_server(host, port, delay_ms)) {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}

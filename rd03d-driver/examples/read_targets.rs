use clap::Parser;
use rd03d_driver::{run_driver, DEFAULT_TIMEOUT_MS};

/// Prints the targets reported by an RD-03D radar.
#[derive(Parser)]
#[command(disable_version_flag = true)]
struct Args {
    /// The device path to a serial port
    port: String,
    /// Inter-byte timeout inside a frame, in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,
    /// Print frames as JSON lines
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let (driver_threads, frame_rx) = match run_driver(&args.port, args.timeout_ms) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to start radar on \"{}\". Error: {}", args.port, e);
            std::process::exit(1);
        }
    };

    while let Ok(frame) = frame_rx.recv() {
        if args.json {
            match serde_json::to_string(&frame) {
                Ok(line) => println!("{line}"),
                Err(e) => eprintln!("{e}"),
            }
            continue;
        }
        let stats = driver_threads.stats();
        println!(
            "frames {} errors {} targets {}",
            stats.frame_count,
            stats.error_count,
            frame.valid_count()
        );
        for (slot, target) in frame.valid_targets() {
            println!(
                "  #{} x {:6} mm  y {:6} mm  {:7.1} cm @ {:6.1} deg  {:5} cm/s",
                slot + 1,
                target.x(),
                target.y(),
                target.distance_cm(),
                target.angle_deg(),
                target.speed()
            );
        }
    }

    drop(driver_threads);
}

use std::env;
use std::process;

use sweepface::{ClockFace, FaceConfig};

fn main() {
    tracing_subscriber::fmt::init();

    // Parse --seed n and --title s from the command line
    let mut title = "sweepface".to_string();
    let mut seed: Option<u64> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                seed = args.next().and_then(|s| s.parse().ok());
            }
            "--title" => {
                if let Some(t) = args.next() {
                    title = t;
                }
            }
            _ => {}
        }
    }

    let config = FaceConfig::builder()
        .title(title)
        .maybe_seed(seed)
        .build();

    if let Err(err) = ClockFace::new(config).show() {
        tracing::error!(%err, "window loop failed");
        process::exit(1);
    }
}

use sweepface::{ClockFace, FaceConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A fixed seed always lands on the same background/accent pair, handy
    // for comparing palettes side by side.
    let config = FaceConfig::builder()
        .title("sweepface demo".to_string())
        .window_width(240)
        .window_height(240)
        .seed(7)
        .build();

    ClockFace::new(config).show()
}

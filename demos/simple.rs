fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("{}", bfpitch::pitch_svg(bfpitch::Orientation::Horizontal, false));
}

/// Example program to print the loaded transition defaults
///
/// Run with: cargo run -p rune-config --example print_config

fn main() {
    // Load configuration from motion.toml
    let config = rune_config::MotionConfig::load();

    println!("=== Motion Configuration ===\n");

    let sections = [
        ("Fade", &config.fade),
        ("Blur", &config.blur.timing),
        ("Fly", &config.fly.timing),
        ("Slide", &config.slide.timing),
        ("Scale", &config.scale.timing),
        ("Draw", &config.draw.timing),
        ("Crossfade", &config.crossfade.timing),
    ];

    for (name, timing) in sections {
        println!("{} Settings:", name);
        println!("  Delay: {:?}", timing.delay_ms);
        println!("  Duration: {:?}", timing.duration_ms);
        println!("  Easing: {:?}", timing.easing);
        println!();
    }

    println!("Shape Settings:");
    println!("  Blur Amount: {:?}", config.blur.amount);
    println!("  Fly Offset: {:?}, {:?}", config.fly.x, config.fly.y);
    println!("  Slide Axis: {:?}", config.slide.axis);
    println!("  Scale Start: {:?}", config.scale.start);
    println!("  Draw Speed: {:?}", config.draw.speed);
    println!("  Crossfade Distance Factor: {:?}", config.crossfade.distance_factor);
}

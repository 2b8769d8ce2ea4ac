//! Walkthrough of `strand-core` chains.
//!
//! # Usage
//!
//! ```text
//! cargo run --example pipeline
//! cargo run --example pipeline -- 3
//! RUST_LOG=strand_core=trace cargo run --example pipeline
//! ```
//!
//! # Examples
//!
//! - **1** — Length of "Hello World!", doubled and printed (24).
//! - **2** — The same pipeline built as a temporary; the print still happens.
//! - **3** — Integer pipeline with the `>>` operator (20).
//! - **4** — Length of "test" times three plus five (17).
//! - **5** — Floating-point pipeline (4.0).

use std::error::Error;

use strand_core::{Chain, Pipe, size};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let selection = std::env::args().nth(1).unwrap_or_else(|| "all".into());
    match selection.as_str() {
        "all" => {
            doubled_length()?;
            temporary_pipeline();
            integer_operators()?;
            text_length()?;
            floating_point()?;
        }
        "1" => doubled_length()?,
        "2" => temporary_pipeline(),
        "3" => integer_operators()?,
        "4" => text_length()?,
        "5" => floating_point()?,
        other => {
            eprintln!("Unknown example: {other}");
            eprintln!("Usage: pipeline [all|1|2|3|4|5]");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn doubled_length() -> Result<(), Box<dyn Error>> {
    let mut pipeline = "Hello World!"
        .pipe(size)
        .then(|x| x * 2)
        .tap(|x| print!("{x}"));
    println!("\nPipeline created");

    let result = pipeline.run()?;
    tracing::info!(result, "doubled length");

    // A chain hands out its result once.
    if let Err(error) = pipeline.run() {
        println!("Second run rejected: {error}");
    }
    println!();
    Ok(())
}

fn temporary_pipeline() {
    let _ = String::from("Hello World!")
        .pipe(size)
        .then(|x| x * 2)
        .tap(|x| println!("{x}"));
    println!();
}

fn integer_operators() -> Result<(), Box<dyn Error>> {
    let mut result = 5.into_chain() >> (|x: i32| x * 2) >> (|x: i32| x + 10);
    println!("Result: {}", result.run()?);
    println!();
    Ok(())
}

fn text_length() -> Result<(), Box<dyn Error>> {
    let mut text_pipeline = Chain::of("test")
        .then(size)
        .then(|x| x * 3)
        .then(|x| x + 5);
    println!("Text length * 3 + 5 = {}", text_pipeline.run()?);
    println!();
    Ok(())
}

fn floating_point() -> Result<(), Box<dyn Error>> {
    println!("Example 5: Multiple operations");
    let mut calc = 3.5
        .pipe(|x| x * 2.0)
        .then(|x| x + 1.0)
        .then(|x| x / 2.0);
    println!("Result: {:.1}", calc.run()?);
    println!();
    Ok(())
}

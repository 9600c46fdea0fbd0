//! ArcGauge - animated circular gauge driven by a numeric input.
//!
//! Shows one gauge and a numeric field; typing a number animates the gauge
//! toward it.

use anyhow::Context;
use clap::Parser;
use iced::{Size, application};

use arcgauge::ArcGauge;
use arcgauge::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.load_config().context("Failed to load configuration")?;

    arcgauge_common::init_tracing(&config.logging)?;

    tracing::info!(
        max = config.gauge.max_value,
        theme = ?config.theme,
        demo = args.demo,
        "Starting ArcGauge"
    );

    let side = config.gauge.canvas_size;
    let window_size = Size::new(side + 80.0, side + 140.0);
    let demo = args.demo;

    // Run the Iced application
    application(
        move || ArcGauge::boot(config.clone(), demo),
        ArcGauge::update,
        ArcGauge::view,
    )
    .title("ArcGauge")
    .subscription(ArcGauge::subscription)
    .theme(ArcGauge::theme)
    .window_size(window_size)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

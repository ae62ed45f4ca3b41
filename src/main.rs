use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_core::models::config::BookingConfig;
use slotbook_widget::{config, BookingWidget};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Demo driver: loads a configuration, prints the day grid, and runs a
/// scripted toggle/submit session so the emitted booking request can be
/// inspected on stdout.
fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config::log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration, falling back to the demo preset
    let config = match config::load_config() {
        Ok(config) => config,
        Err(error) => {
            info!(%error, "no host config supplied, using the demo preset");
            BookingConfig::demo_preset()
        }
    };

    let mut widget = BookingWidget::new(config)?;
    widget.on_booking(|request| {
        info!(booking_id = %request.booking_id, "host received booking request");
    });

    println!("Bookable slots for {}:", widget.date());
    for (index, slot) in widget.slots().iter().enumerate() {
        if !slot.visible {
            continue;
        }
        let state = if slot.enabled { "open" } else { "booked" };
        println!("  [{index:2}] {:<15} {state}", slot.label());
    }

    // Book the first two open slots of the day
    let picks: Vec<usize> = widget
        .slots()
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.visible && slot.enabled)
        .map(|(index, _)| index)
        .take(2)
        .collect();

    for index in picks {
        widget.toggle(index)?;
    }
    println!(
        "\nSelected total: {} {}",
        widget.total_charges(),
        widget.currency()
    );

    let request = widget.submit();
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}

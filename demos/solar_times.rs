//! Sun position and sunrise/transit/sunset for a date-time and location.
//!
//! Usage: `cargo run --example solar_times -- [RFC3339 date-time] [latitude] [longitude]`

use chrono::{DateTime, FixedOffset};
use solar_spa::{spa, ObserverConfig, TimeOfDay};

fn format_time(hours: f64) -> String {
    TimeOfDay::from_fractional_hours(hours).map_or_else(|| "--:--:--".to_string(), |t| t.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let datetime = args
        .next()
        .unwrap_or_else(|| "2003-10-17T12:30:30-07:00".to_string())
        .parse::<DateTime<FixedOffset>>()?;
    let latitude: f64 = args.next().map_or(Ok(39.742476), |s| s.parse())?;
    let longitude: f64 = args.next().map_or(Ok(-105.1786), |s| s.parse())?;

    let config = ObserverConfig::default()
        .with_datetime(&datetime)
        .with_location(latitude, longitude, 0.0)
        .with_offsets(37.0, 0.0);

    let output = spa::calculate(&config)?;
    let position = output.position();
    let rts = output.rise_transit_set();

    println!("Sun at {datetime} for {latitude:.4}°, {longitude:.4}°:");
    println!("  Zenith:               {:.6}°", position.zenith());
    println!("  Azimuth (navigator):  {:.6}°", position.azimuth());
    println!("  Azimuth (astronomer): {:.6}°", position.azimuth_astronomer());
    println!("  Equation of time:     {:.6} min", output.eot());

    if rts.is_circumpolar() {
        println!("  The sun does not rise or set on this date");
    } else {
        println!("  Sunrise:     {}", format_time(rts.sunrise()));
        println!("  Solar noon:  {} (altitude {:.3}°)", format_time(rts.suntransit()), rts.transit_altitude());
        println!("  Sunset:      {}", format_time(rts.sunset()));
    }

    Ok(())
}

// Dev/preview binary: prints the sky palette for a given or current hour,
// or follows the live feeds as they refresh.

use std::ffi::OsString;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use sky_palette::clock::{current_hour, SystemClock};
use sky_palette::config::SkyConfig;
use sky_palette::interpolate::{gradient_colors_at, star_color_at};
use sky_palette::live;

#[derive(Debug, Default)]
struct CliArgs {
    hour: Option<f32>,
    watch: bool,
}

impl CliArgs {
    fn from_env_args() -> Result<Self> {
        Self::from_iter(std::env::args_os().skip(1))
    }

    fn from_iter<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut parsed = Self::default();

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "--watch" => parsed.watch = true,
                "--hour" => {
                    let Some(value) = iter.next() else {
                        return Err(anyhow!("--hour requires a value"));
                    };
                    let hour: f32 = value
                        .to_string_lossy()
                        .parse()
                        .map_err(|_| anyhow!("--hour expects a number, got {value:?}"))?;
                    parsed.hour = Some(hour);
                }
                _ => {}
            }
        }

        Ok(parsed)
    }
}

/// One-line digest of the live feeds. Built only from feed samples; the
/// wall-clock hour is deliberately absent since the feeds sample at their
/// own instants and a freshly read hour could be up to a tick newer.
fn feed_summary(strip: &[String; 5], star: &str) -> String {
    format!("gradient {} -> {}, stars {}", strip[0], strip[4], star)
}

fn print_palette(hour: f32) {
    let strip = gradient_colors_at(hour);
    log::info!("hour {hour:.2}: gradient {} -> {}", strip[0], strip[4]);
    for (i, color) in strip.iter().enumerate() {
        log::info!("  stop {i}: {color}");
    }
    log::info!("  stars:  {}", star_color_at(hour));
}

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::from_env_args()?;
    let config = SkyConfig::load();

    if let Some(hour) = args.hour.or(config.fixed_hour) {
        print_palette(hour);
        return Ok(());
    }

    if !args.watch {
        print_palette(current_hour());
        return Ok(());
    }

    let interval = config.refresh_interval();
    log::info!("watching live palette, refresh every {interval:?}");
    let gradient = live::subscribe_gradient(Arc::new(SystemClock), interval);
    let stars = live::subscribe_star(Arc::new(SystemClock), interval);
    loop {
        std::thread::sleep(interval);
        log::info!("{}", feed_summary(&gradient.get(), &stars.get()));
    }
}

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use parabolic_trajectory::core::ballistics::LaunchParameters;
use parabolic_trajectory::core::constants::{
    DEFAULT_PADDING_PX, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH,
};
use parabolic_trajectory::core::inputs::{DEFAULT_GRAVITY_MPS2, RawInputs};
use parabolic_trajectory::core::plot::{ImageFormat, write_image};
use parabolic_trajectory::core::render::RenderOptions;

#[derive(Clone, Debug, PartialEq)]
struct CliOptions {
    positional: Vec<String>,
    output: Option<PathBuf>,
    width: u32,
    height: u32,
    padding: f64,
    draw_ticks: bool,
    format: ImageFormat,
    help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            positional: Vec::new(),
            output: None,
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            padding: DEFAULT_PADDING_PX,
            draw_ticks: true,
            format: ImageFormat::Png,
            help: false,
        }
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, label: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("Invalid {label}: '{value}'. Expected a number."))
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<&'a String> {
    iter.next()
        .ok_or_else(|| anyhow!("Missing value after {flag}."))
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--output" => options.output = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            "--width" => options.width = parse_number(flag_value(&mut iter, arg)?, "width")?,
            "--height" => options.height = parse_number(flag_value(&mut iter, arg)?, "height")?,
            "--padding" => options.padding = parse_number(flag_value(&mut iter, arg)?, "padding")?,
            "--no-ticks" => options.draw_ticks = false,
            "--svg" => options.format = ImageFormat::Svg,
            flag if flag.starts_with("--") => bail!("Unknown option '{flag}'."),
            value => options.positional.push(value.to_string()),
        }
    }

    if !options.positional.is_empty() && !(3..=4).contains(&options.positional.len()) {
        bail!("Expected 3 or 4 arguments: <angle_deg> <velocity_mps> <height_m> [gravity_mps2].");
    }
    if options.width == 0 || options.height == 0 {
        bail!("Image dimensions must be positive.");
    }
    if !options.padding.is_finite() || options.padding < 0.0 {
        bail!("Padding must be a non-negative number.");
    }

    Ok(options)
}

fn params_from_positional(positional: &[String]) -> LaunchParameters {
    RawInputs {
        angle: &positional[0],
        speed: &positional[1],
        height: &positional[2],
        gravity: positional.get(3).map_or("", String::as_str),
    }
    .to_params()
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("Could not read input")?;
    if bytes == 0 {
        bail!("Input ended unexpectedly (EOF).");
    }
    Ok(line.trim().to_string())
}

fn get_params_from_user() -> Result<LaunchParameters> {
    let angle = read_line("Angle (degrees): ")?;
    let speed = read_line("Velocity (m/s): ")?;
    let height = read_line("Height (m): ")?;
    let gravity = read_line(&format!("Gravity (m/s^2) [{DEFAULT_GRAVITY_MPS2}]: "))?;

    Ok(RawInputs {
        height: &height,
        speed: &speed,
        angle: &angle,
        gravity: &gravity,
    }
    .to_params())
}

fn default_output_path(format: ImageFormat) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("trajectory_{stamp}.{}", format.extension()))
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [options]");
    println!("  {program} [options] <angle_deg> <velocity_mps> <height_m> [gravity_mps2]");
    println!();
    println!("Options:");
    println!("  --output <path>   image file to write (default: trajectory_<timestamp>.png)");
    println!("  --width <px>      image width (default: {DEFAULT_SURFACE_WIDTH})");
    println!("  --height <px>     image height (default: {DEFAULT_SURFACE_HEIGHT})");
    println!("  --padding <px>    blank margin around the plot (default: {DEFAULT_PADDING_PX})");
    println!("  --no-ticks        draw bare axes without tick labels");
    println!("  --svg             write SVG instead of PNG");
    println!();
    println!("Examples:");
    println!("  {program}");
    println!("  {program} 45 30 1.5");
    println!("  {program} --svg --output moon.svg 45 30 1.5 1.62");
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage(&args[0]);
        return Ok(());
    }

    let params = if options.positional.is_empty() {
        get_params_from_user()?
    } else {
        params_from_positional(&options.positional)
    };
    log::debug!("launch parameters: {params:?}");

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(options.format));
    let render_options = RenderOptions {
        padding: options.padding,
        draw_ticks: options.draw_ticks,
        ..RenderOptions::default()
    };

    let report = write_image(
        &output,
        options.format,
        (options.width, options.height),
        params,
        &render_options,
    )?;

    println!("\nMax height: {} m", report.display.apex_height);
    println!("Horizontal distance: {} m", report.display.horizontal_range);
    println!("Time of flight: {} s", report.display.time_of_flight);
    if let Some(reason) = report.solution.failure {
        println!("No trajectory: {reason}");
    }
    println!("Wrote {}", output.display());
    log::info!("wrote {}", output.display());

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

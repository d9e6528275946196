//! CLI tool to register a plot with the survey server and fetch its sweep plan.

use anyhow::{bail, Context, Result};
use clap::Parser;
use reqwest::blocking::Client;
use survey_core::SweepPlan;

/// Register a plot and its obstacles, then request the sweep plan
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Survey server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Plot length (east-west cell count)
    #[arg(long)]
    length: u32,

    /// Plot width (north-south cell count)
    #[arg(long)]
    width: u32,

    /// Obstacle as "x,y,height"; may be repeated
    #[arg(long = "obstacle", value_parser = parse_obstacle)]
    obstacles: Vec<(u32, u32, u32)>,

    /// Travel distance budget; 0 means unbounded
    #[arg(long, default_value_t = 0)]
    max_distance: u64,
}

fn parse_obstacle(raw: &str) -> Result<(u32, u32, u32), String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,height but got '{raw}'"));
    }
    let parse = |part: &str, name: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid {name} in '{raw}'"))
    };
    Ok((
        parse(parts[0], "x")?,
        parse(parts[1], "y")?,
        parse(parts[2], "height")?,
    ))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();

    println!("Connecting to survey server at {}...", args.url);

    let resp = client
        .post(format!("{}/v1/plots", args.url))
        .json(&serde_json::json!({ "length": args.length, "width": args.width }))
        .send()
        .context("failed to create plot")?;
    if !resp.status().is_success() {
        bail!("plot creation rejected: {}", resp.text()?);
    }
    let body: serde_json::Value = resp.json()?;
    let plot_id = body["plot_id"]
        .as_str()
        .context("server response missing plot_id")?
        .to_string();
    println!("Registered plot {} ({}x{})", plot_id, args.length, args.width);

    for (x, y, height) in &args.obstacles {
        let resp = client
            .post(format!("{}/v1/plots/{}/obstacles", args.url, plot_id))
            .json(&serde_json::json!({ "x": x, "y": y, "height": height }))
            .send()
            .context("failed to register obstacle")?;
        if !resp.status().is_success() {
            bail!("obstacle ({x},{y}) rejected: {}", resp.text()?);
        }
        println!("  Obstacle at ({x},{y}) height {height}");
    }

    let mut request = client.get(format!("{}/v1/plots/{}/sweep-plan", args.url, plot_id));
    if args.max_distance > 0 {
        request = request.query(&[("max_distance", args.max_distance)]);
    }
    let resp = request.send().context("failed to fetch sweep plan")?;
    if !resp.status().is_success() {
        bail!("sweep plan rejected: {}", resp.text()?);
    }
    let plan: SweepPlan = resp.json()?;

    println!();
    println!("Total travel distance: {}", plan.distance);
    match plan.resume {
        Some(cell) => println!("Budget reached; resume sweep at ({}, {})", cell.x, cell.y),
        None => println!("Sweep completed within budget"),
    }

    Ok(())
}

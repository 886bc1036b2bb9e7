//! CLI command implementations

use anyhow::Context;
use ringroute_core::{Network, Route, RouteError, build_graph, plan_route};
use ringroute_input::{OutputFormat, PromptSession, Settings, load_network};
use std::io::Write;
use std::path::PathBuf;

pub fn route(settings: &Settings, network: Option<PathBuf>, from: &str, to: &str) -> anyhow::Result<()> {
    let (from, to) = (from.trim(), to.trim());
    let network = load(settings, network)?;
    let found = solve(&network, from, to)?;
    println!("{}", render(settings.format, from, to, found.as_ref())?);
    Ok(())
}

pub fn interactive(settings: &Settings) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = PromptSession::new(stdin.lock(), stdout.lock());
    let request = session.collect()?;
    let mut out = session.into_output();
    writeln!(out)?;
    drop(out);

    let network = request.network.normalized();
    let found = solve(&network, &request.from, &request.to)?;
    println!("{}", render(settings.format, &request.from, &request.to, found.as_ref())?);
    Ok(())
}

pub fn graph(settings: &Settings, network: Option<PathBuf>) -> anyhow::Result<()> {
    let network = load(settings, network)?;
    network.validate()?;

    let graph = build_graph(&network);
    println!("{}", serde_json::to_string_pretty(&graph.adjacency())?);
    Ok(())
}

pub fn check(settings: &Settings, network: Option<PathBuf>) -> anyhow::Result<()> {
    let network = load(settings, network)?;
    network.validate()?;

    let graph = build_graph(&network);
    println!(
        "{} circles, {} intersections, {} stops, {} legs",
        network.effective_circles().len(),
        network.intersections.len(),
        graph.stop_count(),
        graph.leg_count()
    );
    Ok(())
}

/// Load the network named by the flag, falling back to settings.
fn load(settings: &Settings, network: Option<PathBuf>) -> anyhow::Result<Network> {
    let path = network
        .or_else(|| settings.network.clone())
        .context("no network file given; pass --network or set RINGROUTE_NETWORK")?;
    Ok(load_network(&path)?)
}

/// Validate, build, and search. `Ok(None)` means no route exists.
pub(crate) fn solve(network: &Network, from: &str, to: &str) -> anyhow::Result<Option<Route>> {
    network.validate()?;
    let graph = build_graph(network);

    match plan_route(&graph, from.trim(), to.trim()) {
        Ok(route) => Ok(Some(route)),
        Err(RouteError::UnknownStop(stop)) => {
            tracing::warn!("Stop {} does not appear in the network", stop);
            Ok(None)
        }
        Err(e @ RouteError::NoRoute { .. }) => {
            tracing::info!("{}", e);
            Ok(None)
        }
    }
}

pub(crate) fn render(format: OutputFormat, from: &str, to: &str, route: Option<&Route>) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(from, to, route)),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "from": from,
                "to": to,
                "route": route,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}

fn render_text(from: &str, to: &str, route: Option<&Route>) -> String {
    match route {
        Some(route) => format!(
            "Routing Solution:\nStart: {}\nDestination: {}\nPath: {}\nTotal Travel Time: {} minutes",
            from,
            to,
            route.stops.join(" -> "),
            route.cost
        ),
        None => "No valid route found.".to_string(),
    }
}

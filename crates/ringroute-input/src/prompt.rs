//! Interactive prompt session
//!
//! Asks for circles, intersections, and the trip endpoints one line at a
//! time. Works over any reader/writer pair so it can be driven from tests.

use crate::error::InputError;
use ringroute_core::{Circle, Intersection, Network};
use std::io::{BufRead, Write};

/// Everything needed for one routing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub network: Network,
    pub from: String,
    pub to: String,
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptSession { input, output }
    }

    /// Run the full session and return the collected request.
    pub fn collect(&mut self) -> Result<RouteRequest, InputError> {
        let mut network = Network::new();

        let circle_count = self.ask_count("Enter the number of bus circles: ")?;
        for i in 0..circle_count {
            let name = self.ask(&format!("Enter name for circle {}: ", i + 1))?;
            let stops = self.ask(&format!("Enter stops for {} circle (comma-separated): ", name))?;
            network.circles.push(Circle::new(name, split_list(&stops)));
        }

        let intersection_count = self.ask_count("Enter number of intersections between circles: ")?;
        for _ in 0..intersection_count {
            let first = self.ask("Enter first circle name: ")?;
            let second = self.ask("Enter second circle name: ")?;
            let common = self.ask(&format!(
                "Enter common stops between {} and {} (comma-separated): ",
                first, second
            ))?;
            network
                .intersections
                .push(Intersection::new(first, second, split_list(&common)));
        }

        let from = self.ask("Enter start stop: ")?;
        let to = self.ask("Enter end stop: ")?;

        tracing::debug!(
            "Collected {} circles, {} intersections",
            network.circles.len(),
            network.intersections.len()
        );

        Ok(RouteRequest { network, from, to })
    }

    /// Print a prompt and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof(prompt.trim().to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn ask_count(&mut self, prompt: &str) -> Result<usize, InputError> {
        let value = self.ask(prompt)?;
        match value.parse() {
            Ok(count) => Ok(count),
            Err(_) => Err(InputError::InvalidCount {
                prompt: prompt.trim().to_string(),
                value,
            }),
        }
    }

    /// Give back the writer, e.g. to inspect what was prompted.
    pub fn into_output(self) -> W {
        self.output
    }
}

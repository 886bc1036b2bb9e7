//! Core data structures for the circle network

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// Travel time of one hop between adjacent stops on a circle.
pub const RIDE_COST: u32 = 5;

/// Changing circles at a shared stop is free.
pub const TRANSFER_COST: u32 = 0;

/// A stop as stored in the graph. Identity is the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stop {
    pub label: String,
}

impl Stop {
    pub fn new(label: impl Into<String>) -> Self {
        Stop { label: label.into() }
    }
}

/// A named cyclic route. The last stop connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    pub name: String,
    pub stops: Vec<String>,
}

impl Circle {
    pub fn new<I, S>(name: impl Into<String>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Circle {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }

    /// Consecutive stop pairs in cyclic order, including the wrap-around.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let len = self.stops.len();
        (0..len).map(move |i| {
            (
                self.stops[i].as_str(),
                self.stops[(i + 1) % len].as_str(),
            )
        })
    }
}

/// A declared zero-cost transfer between two circles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intersection {
    pub first: String,
    pub second: String,
    pub common: Vec<String>,
}

impl Intersection {
    pub fn new<I, S>(first: impl Into<String>, second: impl Into<String>, common: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Intersection {
            first: first.into(),
            second: second.into(),
            common: common.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything the Graph Builder needs: circles plus intersections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub circles: Vec<Circle>,
    #[serde(default)]
    pub intersections: Vec<Intersection>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_circle(mut self, circle: Circle) -> Self {
        self.circles.push(circle);
        self
    }

    pub fn with_intersection(mut self, intersection: Intersection) -> Self {
        self.intersections.push(intersection);
        self
    }

    /// Circles keyed by name. A name declared twice keeps its first
    /// position but takes the stops of the last declaration.
    pub fn effective_circles(&self) -> Vec<&Circle> {
        let mut circles: Vec<&Circle> = Vec::with_capacity(self.circles.len());
        for circle in &self.circles {
            match circles.iter_mut().find(|c| c.name == circle.name) {
                Some(slot) => {
                    tracing::warn!("Circle {} declared more than once, keeping the last", circle.name);
                    *slot = circle;
                }
                None => circles.push(circle),
            }
        }
        circles
    }

    /// Copy of the network with every name and label trimmed.
    pub fn normalized(&self) -> Network {
        let trim = |s: &String| s.trim().to_string();
        Network {
            circles: self
                .circles
                .iter()
                .map(|c| Circle {
                    name: trim(&c.name),
                    stops: c.stops.iter().map(trim).collect(),
                })
                .collect(),
            intersections: self
                .intersections
                .iter()
                .map(|i| Intersection {
                    first: trim(&i.first),
                    second: trim(&i.second),
                    common: i.common.iter().map(trim).collect(),
                })
                .collect(),
        }
    }

    /// Reject malformed declarations. The builder accepts anything; this is
    /// the gate callers run before building. Only the circles that reach the
    /// graph are checked, so a superseded declaration does not count.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let circles = self.effective_circles();
        for circle in &circles {
            if circle.name.trim().is_empty() {
                return Err(NetworkError::EmptyCircleName);
            }
            if circle.stops.is_empty() {
                return Err(NetworkError::EmptyCircle(circle.name.clone()));
            }
            if circle.stops.iter().any(|s| s.trim().is_empty()) {
                return Err(NetworkError::EmptyStopLabel(circle.name.clone()));
            }
        }

        for intersection in &self.intersections {
            for name in [&intersection.first, &intersection.second] {
                if !circles.iter().any(|c| c.name.trim() == name.trim()) {
                    return Err(NetworkError::UnknownCircle(name.clone()));
                }
            }
            if intersection.common.is_empty() {
                return Err(NetworkError::NoCommonStops {
                    first: intersection.first.clone(),
                    second: intersection.second.clone(),
                });
            }
            if intersection.common.iter().any(|s| s.trim().is_empty()) {
                return Err(NetworkError::EmptyStopLabel(format!(
                    "{}/{}",
                    intersection.first, intersection.second
                )));
            }
        }

        Ok(())
    }
}

/// What a graph edge represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LegKind {
    /// Riding a circle between adjacent stops.
    Ride { circle: String },
    /// Changing circles between stops declared common to an intersection.
    Transfer,
}

/// An undirected weighted edge between two stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(flatten)]
    pub kind: LegKind,
    pub weight: u32,
}

impl Leg {
    pub fn ride(circle: impl Into<String>) -> Self {
        Leg {
            kind: LegKind::Ride {
                circle: circle.into(),
            },
            weight: RIDE_COST,
        }
    }

    pub fn transfer() -> Self {
        Leg {
            kind: LegKind::Transfer,
            weight: TRANSFER_COST,
        }
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == LegKind::Transfer
    }
}

/// A found route: stops from start to goal inclusive, with total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<String>,
    pub cost: u32,
    /// Zero-cost transfer legs taken along the way.
    pub transfers: usize,
}

impl Route {
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }
}

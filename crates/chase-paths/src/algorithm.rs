use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// The searches an opponent can chase with.
///
/// Floyd-Warshall is not listed: it works on an explicit adjacency matrix
/// rather than a grid board and is called directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "astar", alias = "a-star"))]
    AStar,
    BellmanFord,
}

impl Algorithm {
    /// Every grid search, in the order the game cycles through them.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BellmanFord,
    ];

    /// The algorithm after this one in [`ALL`](Self::ALL), wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Short name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::BellmanFord => "bellman-ford",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a-star" | "a*" => Ok(Algorithm::AStar),
            "bellman-ford" | "bellmanford" => Ok(Algorithm::BellmanFord),
            _ => Err(PathError::UnknownAlgorithm(s.to_string())),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kebab_case_names() {
        assert_eq!(serde_json::to_string(&Algorithm::BellmanFord).unwrap(), "\"bellman-ford\"");
        assert_eq!(serde_json::to_string(&Algorithm::AStar).unwrap(), "\"astar\"");
        let alg: Algorithm = serde_json::from_str("\"a-star\"").unwrap();
        assert_eq!(alg, Algorithm::AStar);
    }
}

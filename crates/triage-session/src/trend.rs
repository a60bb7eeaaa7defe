use serde::{Deserialize, Serialize};

/// Direction of accuracy across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
}

impl Trend {
    /// Compare the first and last samples. `None` with fewer than two.
    /// A flat history counts as declining.
    pub fn from_history(history: &[f64]) -> Option<Self> {
        if history.len() < 2 {
            return None;
        }
        let (first, last) = (history[0], history[history.len() - 1]);
        Some(if last > first {
            Self::Improving
        } else {
            Self::Declining
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

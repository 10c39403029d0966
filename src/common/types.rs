use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Computation {
    pub m: u64,
    pub n: u64,
    pub gcd: u64,
    pub lcm: f64,
}

/// Which of the two inputs a value or failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    M,
    N,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::M => write!(f, "m"),
            Operand::N => write!(f, "n"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Float,
    Integer,
}

impl Notation {
    /// Render an LCM value for output. `Float` keeps an integral result
    /// recognizable as a float (`20.0`); `Integer` uses the minimal form
    /// (`20`).
    pub fn render(self, lcm: f64) -> String {
        match self {
            Notation::Float => {
                if lcm.fract() == 0.0 {
                    format!("{:.1}", lcm)
                } else {
                    lcm.to_string()
                }
            }
            Notation::Integer => lcm.to_string(),
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notation::Float => write!(f, "float"),
            Notation::Integer => write!(f, "integer"),
        }
    }
}

impl std::str::FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float" => Ok(Notation::Float),
            "integer" => Ok(Notation::Integer),
            _ => Err(format!(
                "unknown notation '{}' (expected 'float' or 'integer')",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain(Notation),
    Json,
}

use serde::{Deserialize, Serialize};

/// Trading decision carried by an alpha signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalKind {
    Buy,
    Sell,
    /// Keep the current position
    Hold,
}

impl SignalKind {
    /// Wire representation (`"BUY"`, `"SELL"`, `"HOLD"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Buy => "BUY",
            SignalKind::Sell => "SELL",
            SignalKind::Hold => "HOLD",
        }
    }

    /// Parse the wire representation. Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BUY" => Some(SignalKind::Buy),
            "SELL" => Some(SignalKind::Sell),
            "HOLD" => Some(SignalKind::Hold),
            _ => None,
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation window the dashboard endpoint accepts. The server is
/// authoritative; unknown tokens fall back to `today` on its side, so no
/// local validation happens beyond this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Today,
    Week,
    Month,
}

impl Period {
    /// Filter-bar order.
    pub const ALL: [Period; 3] = [Period::Today, Period::Week, Period::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    /// Button caption for the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Week => "This Week",
            Period::Month => "This Month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_server_tokens() {
        assert_eq!(serde_json::to_string(&Period::Today).unwrap(), "\"today\"");
        assert_eq!(serde_json::to_string(&Period::Week).unwrap(), "\"week\"");
        assert_eq!(serde_json::to_string(&Period::Month).unwrap(), "\"month\"");
    }

    #[test]
    fn deserializes_from_server_tokens() {
        for period in Period::ALL {
            let token = format!("\"{}\"", period.as_str());
            let parsed: Period = serde_json::from_str(&token).unwrap();
            assert_eq!(parsed, period);
        }
    }

    #[test]
    fn default_is_today() {
        assert_eq!(Period::default(), Period::Today);
        assert_eq!(Period::ALL[0], Period::Today);
    }
}

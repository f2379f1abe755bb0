//! Argument validation, applied before any network I/O

use dome_core::{DomeError, DomeResult};
use regex::Regex;
use std::sync::OnceLock;

static WALLET_RE: OnceLock<Regex> = OnceLock::new();

fn wallet_re() -> &'static Regex {
    WALLET_RE.get_or_init(|| {
        Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("wallet address pattern is valid")
    })
}

/// Ethereum-style wallet address: `0x` followed by exactly 40 hex characters
pub(crate) fn wallet_address(address: &str) -> DomeResult<()> {
    if address.trim().is_empty() {
        return Err(DomeError::argument("Wallet address cannot be empty"));
    }
    if !wallet_re().is_match(address) {
        return Err(DomeError::argument(
            "Invalid wallet address format. Must be a valid Ethereum address \
             (0x followed by 40 hex characters)",
        ));
    }
    Ok(())
}

pub(crate) fn non_blank(value: &str, name: &str) -> DomeResult<()> {
    if value.trim().is_empty() {
        return Err(DomeError::argument(format!("{name} cannot be empty")));
    }
    Ok(())
}

pub(crate) fn limit_in_range(limit: Option<u32>, max: u32) -> DomeResult<()> {
    if let Some(limit) = limit {
        if limit < 1 || limit > max {
            return Err(DomeError::argument(format!(
                "Limit must be between 1 and {max}"
            )));
        }
    }
    Ok(())
}

pub(crate) fn positive_timestamp(value: i64, name: &str) -> DomeResult<()> {
    if value <= 0 {
        return Err(DomeError::argument(format!(
            "{name} must be a positive integer (Unix timestamp)"
        )));
    }
    Ok(())
}

/// Both bounds required: each positive, start strictly before end
pub(crate) fn time_range(start_time: i64, end_time: i64) -> DomeResult<()> {
    positive_timestamp(start_time, "start_time")?;
    positive_timestamp(end_time, "end_time")?;
    if start_time >= end_time {
        return Err(DomeError::argument("start_time must be less than end_time"));
    }
    Ok(())
}

/// Either bound optional: each positive when given, ordered when both given
pub(crate) fn optional_time_range(
    start_time: Option<i64>,
    end_time: Option<i64>,
) -> DomeResult<()> {
    if let Some(start) = start_time {
        positive_timestamp(start, "start_time")?;
    }
    if let Some(end) = end_time {
        positive_timestamp(end, "end_time")?;
    }
    if let (Some(start), Some(end)) = (start_time, end_time) {
        if start >= end {
            return Err(DomeError::argument("start_time must be less than end_time"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_wallet_address() {
        assert!(wallet_address("0x7c3db723f1d4d8cb9c550095203b686cb11e5c6b").is_ok());
        assert!(wallet_address("0x7C3DB723F1D4D8CB9C550095203B686CB11E5C6B").is_ok());
    }

    #[test]
    fn rejects_malformed_wallet_addresses() {
        // too short
        assert!(wallet_address("0x7c3db723").is_err());
        // too long
        assert!(wallet_address("0x7c3db723f1d4d8cb9c550095203b686cb11e5c6bff").is_err());
        // missing prefix
        assert!(wallet_address("7c3db723f1d4d8cb9c550095203b686cb11e5c6b00").is_err());
        // non-hex characters
        assert!(wallet_address("0x7c3db723f1d4d8cb9c550095203b686cb11e5czz").is_err());
        // empty / whitespace
        assert!(wallet_address("").is_err());
        assert!(wallet_address("   ").is_err());
    }

    #[test]
    fn limit_bounds() {
        assert!(limit_in_range(None, 1000).is_ok());
        assert!(limit_in_range(Some(1), 1000).is_ok());
        assert!(limit_in_range(Some(1000), 1000).is_ok());
        assert!(limit_in_range(Some(0), 1000).is_err());
        assert!(limit_in_range(Some(1001), 1000).is_err());
        assert!(limit_in_range(Some(101), 100).is_err());
    }

    #[test]
    fn blank_identifiers_rejected() {
        assert!(non_blank("abc", "Token ID").is_ok());
        let err = non_blank("  ", "Token ID").unwrap_err();
        assert!(err.to_string().contains("Token ID"));
    }

    #[test]
    fn required_time_range() {
        assert!(time_range(100, 200).is_ok());
        assert!(time_range(200, 100).is_err());
        // equal bounds always fail
        assert!(time_range(100, 100).is_err());
        assert!(time_range(0, 100).is_err());
        assert!(time_range(100, -5).is_err());
    }

    #[test]
    fn optional_time_range_rules() {
        assert!(optional_time_range(None, None).is_ok());
        assert!(optional_time_range(Some(100), None).is_ok());
        assert!(optional_time_range(None, Some(100)).is_ok());
        assert!(optional_time_range(Some(100), Some(200)).is_ok());
        assert!(optional_time_range(Some(200), Some(100)).is_err());
        assert!(optional_time_range(Some(100), Some(100)).is_err());
        assert!(optional_time_range(Some(-1), None).is_err());
    }
}

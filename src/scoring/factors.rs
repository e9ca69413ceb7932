use anyhow::{bail, Result};
use std::fmt;

/// Predicate over a normalized count (wakeups or ounces of alcohol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    LessThan(u32),
    LessEqual(u32),
    GreaterThan(u32),
    GreaterEqual(u32),
    Equal(u32),
    Between(u32, u32), // Inclusive range: N-M
}

impl RangeOp {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(val) = s.strip_prefix(">=") {
            Ok(RangeOp::GreaterEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix("<=") {
            Ok(RangeOp::LessEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('>') {
            Ok(RangeOp::GreaterThan(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('<') {
            Ok(RangeOp::LessThan(val.trim().parse()?))
        } else if let Some((low, high)) = s.split_once('-') {
            if s.starts_with('-') {
                bail!("Invalid range format: {}", s)
            }
            let low: u32 = low.trim().parse()?;
            let high: u32 = high.trim().parse()?;
            if low > high {
                bail!("Range start {} is greater than end {}", low, high)
            }
            Ok(RangeOp::Between(low, high))
        } else {
            Ok(RangeOp::Equal(s.parse()?))
        }
    }

    pub fn matches(&self, value: u32) -> bool {
        match *self {
            RangeOp::LessThan(n) => value < n,
            RangeOp::LessEqual(n) => value <= n,
            RangeOp::GreaterThan(n) => value > n,
            RangeOp::GreaterEqual(n) => value >= n,
            RangeOp::Equal(n) => value == n,
            RangeOp::Between(low, high) => value >= low && value <= high,
        }
    }
}

impl fmt::Display for RangeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOp::LessThan(n) => write!(f, "<{}", n),
            RangeOp::LessEqual(n) => write!(f, "<={}", n),
            RangeOp::GreaterThan(n) => write!(f, ">{}", n),
            RangeOp::GreaterEqual(n) => write!(f, ">={}", n),
            RangeOp::Equal(n) => write!(f, "{}", n),
            RangeOp::Between(low, high) => write!(f, "{}-{}", low, high),
        }
    }
}

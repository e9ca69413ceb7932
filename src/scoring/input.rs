use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ReportError;

/// Form token meaning "ten or more wakeups".
pub const WAKEUPS_SENTINEL: &str = "10+ times";
/// Form token meaning "ten or more ounces".
pub const ALCOHOL_SENTINEL: &str = "10+ oz";
/// Form token meaning no alcohol at all.
pub const NO_ALCOHOL: &str = "No";
/// Count that both sentinels normalize to.
pub const SENTINEL_COUNT: u32 = 10;

/// Raw report submission as it arrives from the form. Nothing here is trusted.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ReportForm {
    #[serde(rename = "bedtimeHour")]
    pub bedtime_hour: String,
    #[serde(rename = "bedtimeMinute")]
    pub bedtime_minute: String,
    #[serde(rename = "bedtimeAmPm")]
    pub bedtime_ampm: String,
    #[serde(rename = "wakeupHour")]
    pub wakeup_hour: String,
    #[serde(rename = "wakeupMinute")]
    pub wakeup_minute: String,
    #[serde(rename = "wakeupAmPm")]
    pub wakeup_ampm: String,
    #[serde(rename = "wakeupcount")]
    pub wakeup_count: String,
    pub alcohol: String,
    #[serde(rename = "alcoholcount", default)]
    pub alcohol_count: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn parse(field: &'static str, s: &str) -> Result<Self, ReportError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(ReportError::invalid(field, s, "expected AM or PM")),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// Wall-clock time on a 12-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl TimeOfDay {
    /// Build from the three raw form tokens. `fields` names the form fields in errors.
    fn from_parts(
        hour: &str,
        minute: &str,
        meridiem: &str,
        fields: [&'static str; 3],
    ) -> Result<Self, ReportError> {
        let h: u8 = hour
            .trim()
            .parse()
            .map_err(|_| ReportError::invalid(fields[0], hour, "not a whole number"))?;
        let m: u8 = minute
            .trim()
            .parse()
            .map_err(|_| ReportError::invalid(fields[1], minute, "not a whole number"))?;
        let meridiem = Meridiem::parse(fields[2], meridiem)?;

        if !(1..=12).contains(&h) {
            return Err(ReportError::invalid(fields[0], hour, "must be between 1 and 12"));
        }
        if m > 59 {
            return Err(ReportError::invalid(fields[1], minute, "must be between 0 and 59"));
        }
        Ok(Self {
            hour: h,
            minute: m,
            meridiem,
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// A sleep session with every field normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepSessionInput {
    pub bedtime: TimeOfDay,
    pub wake_time: TimeOfDay,
    pub wakeup_count: u32,
    /// Category token as submitted, kept for display.
    pub alcohol: String,
    pub alcohol_count: u32,
}

impl SleepSessionInput {
    pub fn from_form(form: &ReportForm) -> Result<Self, ReportError> {
        let bedtime = TimeOfDay::from_parts(
            &form.bedtime_hour,
            &form.bedtime_minute,
            &form.bedtime_ampm,
            ["bedtimeHour", "bedtimeMinute", "bedtimeAmPm"],
        )?;
        let wake_time = TimeOfDay::from_parts(
            &form.wakeup_hour,
            &form.wakeup_minute,
            &form.wakeup_ampm,
            ["wakeupHour", "wakeupMinute", "wakeupAmPm"],
        )?;

        Ok(Self {
            bedtime,
            wake_time,
            wakeup_count: parse_wakeup_count(&form.wakeup_count)?,
            alcohol: form.alcohol.trim().to_string(),
            alcohol_count: parse_alcohol_count(&form.alcohol, form.alcohol_count.as_deref())?,
        })
    }
}

/// "10+ times" maps to 10, anything else must be a non-negative integer.
pub fn parse_wakeup_count(raw: &str) -> Result<u32, ReportError> {
    let raw_trimmed = raw.trim();
    if raw_trimmed == WAKEUPS_SENTINEL {
        return Ok(SENTINEL_COUNT);
    }
    // Redisplayed reports carry a " times" suffix
    let digits = raw_trimmed.strip_suffix(" times").unwrap_or(raw_trimmed);
    digits
        .trim()
        .parse()
        .map_err(|_| ReportError::invalid("wakeupcount", raw, "not a whole number"))
}

/// "No" maps to 0 and "10+ oz" to 10. Otherwise the ounce field is parsed,
/// falling back to the leading number of a category like "3 oz".
pub fn parse_alcohol_count(alcohol: &str, ounces: Option<&str>) -> Result<u32, ReportError> {
    let alcohol = alcohol.trim();
    if alcohol == NO_ALCOHOL {
        return Ok(0);
    }
    if alcohol == ALCOHOL_SENTINEL {
        return Ok(SENTINEL_COUNT);
    }

    match ounces.map(str::trim).filter(|s| !s.is_empty()) {
        Some(oz) => oz
            .parse()
            .map_err(|_| ReportError::invalid("alcoholcount", oz, "not a whole number")),
        None => alcohol
            .strip_suffix("oz")
            .and_then(|n| n.trim().parse().ok())
            .ok_or_else(|| ReportError::invalid("alcohol", alcohol, "no ounce amount given")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form(wakeups: &str, alcohol: &str, ounces: Option<&str>) -> ReportForm {
        ReportForm {
            bedtime_hour: "10".to_string(),
            bedtime_minute: "30".to_string(),
            bedtime_ampm: "PM".to_string(),
            wakeup_hour: "6".to_string(),
            wakeup_minute: "5".to_string(),
            wakeup_ampm: "AM".to_string(),
            wakeup_count: wakeups.to_string(),
            alcohol: alcohol.to_string(),
            alcohol_count: ounces.map(str::to_string),
        }
    }

    #[test]
    fn test_from_form_normalizes() {
        let input = SleepSessionInput::from_form(&sample_form("2", "No", None)).unwrap();
        assert_eq!(input.bedtime.to_string(), "10:30 PM");
        assert_eq!(input.wake_time.to_string(), "6:05 AM");
        assert_eq!(input.wakeup_count, 2);
        assert_eq!(input.alcohol_count, 0);
        assert_eq!(input.alcohol, "No");
    }

    #[test]
    fn test_wakeup_sentinel() {
        assert_eq!(parse_wakeup_count("10+ times").unwrap(), 10);
        assert_eq!(parse_wakeup_count(" 4 ").unwrap(), 4);
        assert_eq!(parse_wakeup_count("3 times").unwrap(), 3);
    }

    #[test]
    fn test_wakeup_rejects_non_numeric() {
        let err = parse_wakeup_count("abc").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(parse_wakeup_count("-1").is_err());
        assert!(parse_wakeup_count("").is_err());
    }

    #[test]
    fn test_alcohol_categories() {
        assert_eq!(parse_alcohol_count("No", Some("7")).unwrap(), 0);
        assert_eq!(parse_alcohol_count("10+ oz", None).unwrap(), 10);
        assert_eq!(parse_alcohol_count("Yes", Some("3")).unwrap(), 3);
        assert_eq!(parse_alcohol_count("4 oz", None).unwrap(), 4);
    }

    #[test]
    fn test_alcohol_ounce_field_wins_over_category() {
        assert_eq!(parse_alcohol_count("4 oz", Some("2")).unwrap(), 2);
    }

    #[test]
    fn test_alcohol_rejects_unparseable_amount() {
        assert!(parse_alcohol_count("Yes", Some("lots")).unwrap_err().is_invalid_input());
        assert!(parse_alcohol_count("Yes", None).unwrap_err().is_invalid_input());
        assert!(parse_alcohol_count("Yes", Some("  ")).is_err());
    }

    #[test]
    fn test_time_range_validated() {
        let mut form = sample_form("0", "No", None);
        form.bedtime_hour = "13".to_string();
        assert!(SleepSessionInput::from_form(&form).is_err());

        let mut form = sample_form("0", "No", None);
        form.wakeup_minute = "60".to_string();
        assert!(SleepSessionInput::from_form(&form).is_err());

        let mut form = sample_form("0", "No", None);
        form.bedtime_hour = "0".to_string();
        assert!(SleepSessionInput::from_form(&form).is_err());
    }

    #[test]
    fn test_meridiem_case_insensitive() {
        let mut form = sample_form("0", "No", None);
        form.bedtime_ampm = "pm".to_string();
        let input = SleepSessionInput::from_form(&form).unwrap();
        assert_eq!(input.bedtime.meridiem, Meridiem::Pm);

        form.bedtime_ampm = "noon".to_string();
        let err = SleepSessionInput::from_form(&form).unwrap_err();
        assert!(err.to_string().contains("bedtimeAmPm"));
    }

    #[test]
    fn test_form_deserializes_original_field_names() {
        let json = r#"{
            "bedtimeHour": "11", "bedtimeMinute": "00", "bedtimeAmPm": "PM",
            "wakeupHour": "7", "wakeupMinute": "15", "wakeupAmPm": "AM",
            "wakeupcount": "10+ times", "alcohol": "Yes", "alcoholcount": "3"
        }"#;
        let form: ReportForm = serde_json::from_str(json).unwrap();
        let input = SleepSessionInput::from_form(&form).unwrap();
        assert_eq!(input.bedtime.to_string(), "11:00 PM");
        assert_eq!(input.wakeup_count, 10);
        assert_eq!(input.alcohol_count, 3);
    }
}

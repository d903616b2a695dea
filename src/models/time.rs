use serde::{Deserialize, Serialize};

/// Time of day with minute resolution, stored as minutes since midnight.
///
/// Serialized as a 24-hour `"HH:MM"` string on the wire. Comparisons are
/// numeric, never lexical, so slot ordering cannot depend on zero-padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

/// Error returned when a `"HH:MM"` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time '{input}': expected HH:MM in 24-hour format")]
pub struct ParseClockTimeError {
    pub input: String,
}

impl ClockTime {
    /// Create from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ParseClockTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ParseClockTimeError {
                input: format!("{:02}:{:02}", hour, minute),
            });
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Parse a 24-hour `"HH:MM"` string.
    pub fn parse(s: &str) -> Result<Self, ParseClockTimeError> {
        let err = || ParseClockTimeError {
            input: s.to_string(),
        };
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hour: u16 = h.parse().map_err(|_| err())?;
        let minute: u16 = m.parse().map_err(|_| err())?;
        Self::from_hm(hour, minute).map_err(|_| err())
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// 24-hour `"HH:MM"` representation.
    pub fn format_24h(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// 12-hour `"h:mma"`/`"h:mmp"` representation, e.g. `"1:30pm"`.
    ///
    /// Hour 0 and hour 12 both render as `12` (midnight is `12:00am`,
    /// noon is `12:00pm`).
    pub fn format_12h(&self) -> String {
        let suffix = if self.hour() >= 12 { "pm" } else { "am" };
        let mut hour = self.hour() % 12;
        if hour == 0 {
            hour = 12;
        }
        format!("{}:{:02}{}", hour, self.minute(), suffix)
    }
}

impl std::str::FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.format_24h()
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_24h())
    }
}

#[cfg(test)]
mod tests {
    use super::ClockTime;

    #[test]
    fn test_parse_valid() {
        let t = ClockTime::parse("09:30").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.minutes(), 570);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(ClockTime::parse("24:00").is_err());
        assert!(ClockTime::parse("12:60").is_err());
        assert!(ClockTime::parse("noon").is_err());
        assert!(ClockTime::parse("12").is_err());
        assert!(ClockTime::parse("").is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let nine = ClockTime::parse("09:00").unwrap();
        let ten = ClockTime::parse("10:00").unwrap();
        assert!(nine < ten);
        assert!(ClockTime::parse("06:30").unwrap() > ClockTime::parse("06:00").unwrap());
    }

    #[test]
    fn test_format_24h_roundtrip() {
        let t = ClockTime::parse("07:05").unwrap();
        assert_eq!(t.format_24h(), "07:05");
        assert_eq!(ClockTime::parse(&t.format_24h()).unwrap(), t);
    }

    #[test]
    fn test_format_12h_midnight() {
        assert_eq!(ClockTime::parse("00:00").unwrap().format_12h(), "12:00am");
    }

    #[test]
    fn test_format_12h_noon() {
        assert_eq!(ClockTime::parse("12:00").unwrap().format_12h(), "12:00pm");
    }

    #[test]
    fn test_format_12h_afternoon() {
        assert_eq!(ClockTime::parse("13:30").unwrap().format_12h(), "1:30pm");
    }

    #[test]
    fn test_format_12h_morning() {
        assert_eq!(ClockTime::parse("09:00").unwrap().format_12h(), "9:00am");
        assert_eq!(ClockTime::parse("06:30").unwrap().format_12h(), "6:30am");
    }

    #[test]
    fn test_serde_uses_wire_format() {
        let t = ClockTime::parse("18:00").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"18:00\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<ClockTime, _> = serde_json::from_str("\"25:00\"");
        assert!(result.is_err());
    }
}

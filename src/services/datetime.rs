//! Pulls a `DD/MM/YY` date and an `HH:MM` time out of free text by position:
//! the first `/` or `:` anchors a fixed-width window around it.

use crate::errors::BotError;
use crate::models::{CalendarDate, TimeSlot};

pub fn extract_date(text: &str) -> Result<CalendarDate, BotError> {
    let i = text.find('/').ok_or(BotError::NoDateFound)?;
    if i < 2 || text.len() < i + 6 {
        return Err(BotError::NoDateFound);
    }
    let window = text.get(i - 2..i + 6).ok_or(BotError::NoDateFound)?;
    parse_date(window).ok_or(BotError::NoDateFound)
}

pub fn extract_time(text: &str) -> Result<TimeSlot, BotError> {
    let i = text.find(':').ok_or(BotError::NoTimeFound)?;
    if i < 2 || text.len() < i + 3 {
        return Err(BotError::NoTimeFound);
    }
    let window = text.get(i - 2..i + 3).ok_or(BotError::NoTimeFound)?;
    parse_time(window).ok_or(BotError::NoTimeFound)
}

// Scanf-style: spaces before a field are skipped, each field is one or two
// digits and the year may stop early, so " 1/10/23" yields (1, 10, 23) and
// "18/09/2 " yields (18, 9, 2).
fn parse_date(window: &str) -> Option<CalendarDate> {
    let (day, rest) = leading_number(window)?;
    let rest = rest.strip_prefix('/')?;
    let (month, rest) = leading_number(rest)?;
    let rest = rest.strip_prefix('/')?;
    let (year, _) = leading_number(rest)?;
    Some(CalendarDate { day, month, year })
}

// Both fields must be exactly two digits.
fn parse_time(window: &str) -> Option<TimeSlot> {
    let (hour, minute) = window.split_once(':')?;
    Some(TimeSlot {
        hour: two_digits(hour)?,
        minute: two_digits(minute)?,
    })
}

fn leading_number(s: &str) -> Option<(u32, &str)> {
    let s = s.trim_start_matches(' ');
    let len = s
        .bytes()
        .take(2)
        .take_while(u8::is_ascii_digit)
        .count();
    if len == 0 {
        return None;
    }
    let value = s[..len].parse().ok()?;
    Some((value, &s[len..]))
}

fn two_digits(s: &str) -> Option<u32> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_time() {
        let cases = [
            ("basic time only", "10:43", Some((10, 43))),
            ("date time", "18/09/23 10:42", Some((10, 42))),
            ("bad time", "18/09/23 10:2 oh yeah", None),
            ("no time", "18/09/23 noon", None),
            ("too close to start", "9:30 please", None),
            ("too close to end", "at 10:3", None),
        ];
        for (name, text, want) in cases {
            let got = extract_time(text).ok().map(|t| (t.hour, t.minute));
            assert_eq!(got, want, "{name}");
        }
    }

    #[test]
    fn test_extract_date() {
        let cases = [
            ("basic date only", "07/10/23", Some((7, 10, 23))),
            ("date time", "07/10/23 10:42", Some((7, 10, 23))),
            ("short year", "18/09/2 10:22", Some((18, 9, 2))),
            ("space-padded day", "on 1/10/23 10:00", Some((1, 10, 23))),
            ("space-padded month", "on 01/ 9/23", Some((1, 9, 23))),
            ("no date", "noon 12:00", None),
            ("too close to start", "7/10/23", None),
            ("too close to end", "on 07/10/", None),
            ("letters in window", "ab/cd/ef", None),
        ];
        for (name, text, want) in cases {
            let got = extract_date(text).ok().map(|d| (d.day, d.month, d.year));
            assert_eq!(got, want, "{name}");
        }
    }

    #[test]
    fn test_date_embedded_in_sentence() {
        let date = extract_date("book a court at 18/09/23 10:00").unwrap();
        assert_eq!(date, CalendarDate { day: 18, month: 9, year: 23 });
    }

    #[test]
    fn test_no_semantic_validation() {
        let date = extract_date("32/13/99").unwrap();
        assert_eq!((date.day, date.month, date.year), (32, 13, 99));
        let time = extract_time("25:61").unwrap();
        assert_eq!((time.hour, time.minute), (25, 61));
    }

    #[test]
    fn test_error_kinds() {
        assert!(matches!(extract_date("nothing here"), Err(BotError::NoDateFound)));
        assert!(matches!(extract_time("nothing here"), Err(BotError::NoTimeFound)));
    }

    #[test]
    fn test_multibyte_text_does_not_panic() {
        assert!(extract_date("é/10/23").is_err());
        assert!(extract_time("בשעה é:30").is_err());
    }
}

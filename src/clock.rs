use crate::err::Error;
use chrono::{DateTime, FixedOffset, SubsecRound, Utc};
use chrono_tz::Tz;

/// Supplies the current instant in the service's timezone.
pub trait Clock: Send + Sync {
    /// Current instant, truncated to whole seconds.
    fn now(&self) -> Result<DateTime<FixedOffset>, Error>;

    /// Express a stored UTC instant in this clock's timezone.
    fn localize(&self, at: DateTime<Utc>) -> DateTime<FixedOffset>;
}

/// `Clock` backed by the system time and a named IANA zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    zone: Tz,
}

impl SystemClock {
    /// Resolve `zone_name` (e.g. `America/Toronto`) against the bundled zone database.
    ///
    /// # Returns
    /// * A `SystemClock` for that zone
    /// * `Error::Timezone` if the name is unknown
    pub fn new(zone_name: &str) -> Result<Self, Error> {
        let zone = zone_name
            .trim()
            .parse::<Tz>()
            .map_err(|e| Error::Timezone(format!("{}: {}", zone_name, e)))?;

        Ok(Self { zone })
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, Error> {
        Ok(self.localize(Utc::now().trunc_subsecs(0)))
    }

    fn localize(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        at.with_timezone(&self.zone).fixed_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_known_zone() {
        let clock = SystemClock::new("America/Toronto").unwrap();
        assert_eq!(clock.zone(), chrono_tz::America::Toronto);
    }

    #[test]
    fn test_unknown_zone() {
        let result = SystemClock::new("Mars/Olympus_Mons");
        assert!(matches!(result, Err(Error::Timezone(_))));
    }

    #[test]
    fn test_now_is_whole_seconds() {
        let clock = SystemClock::new("America/Toronto").unwrap();
        let now = clock.now().unwrap();
        assert_eq!(now.nanosecond(), 0);
    }

    #[test]
    fn test_localize_follows_dst() {
        let clock = SystemClock::new("America/Toronto").unwrap();

        let winter = clock.localize(Utc.with_ymd_and_hms(2024, 1, 2, 20, 4, 5).unwrap());
        assert_eq!(winter.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(winter.hour(), 15);

        let summer = clock.localize(Utc.with_ymd_and_hms(2024, 7, 2, 20, 4, 5).unwrap());
        assert_eq!(summer.offset().local_minus_utc(), -4 * 3600);
    }
}

use chrono::{DateTime, FixedOffset, Utc};

/// Time zone carried by a [`Timestamp`].
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Zone {
    Utc,
    /// A fixed offset east of UTC, in seconds, with an optional name.
    Fixed { offset: i32, name: String },
}

/// An instant with nanosecond precision and the zone it is expressed in.
///
/// `secs` and `nanos` are relative to the Unix epoch in UTC regardless of `zone`.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Timestamp {
    pub secs: i64,
    pub nanos: u32,
    pub zone: Zone,
}

impl Timestamp {
    pub fn utc(secs: i64, nanos: u32) -> Self {
        Self {
            secs,
            nanos,
            zone: Zone::Utc,
        }
    }

    pub fn fixed(secs: i64, nanos: u32, offset: i32, name: impl Into<String>) -> Self {
        Self {
            secs,
            nanos,
            zone: Zone::Fixed {
                offset,
                name: name.into(),
            },
        }
    }

    pub fn offset(&self) -> i32 {
        match &self.zone {
            Zone::Utc => 0,
            Zone::Fixed { offset, .. } => *offset,
        }
    }

    pub fn zone_name(&self) -> &str {
        match &self.zone {
            Zone::Utc => "UTC",
            Zone::Fixed { name, .. } => name,
        }
    }

    /// Returns true when both denote the same instant, whatever their zones.
    pub fn same_instant(&self, other: &Timestamp) -> bool {
        self.secs == other.secs && self.nanos == other.nanos
    }

    /// Returns `None` when the instant or the offset is outside chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.offset())?;
        let utc = DateTime::<Utc>::from_timestamp(self.secs, self.nanos)?;
        Some(utc.with_timezone(&offset))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::utc(dt.timestamp(), dt.timestamp_subsec_nanos())
    }
}
impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        let offset = dt.offset().local_minus_utc();
        Self::fixed(dt.timestamp(), dt.timestamp_subsec_nanos(), offset, "")
    }
}

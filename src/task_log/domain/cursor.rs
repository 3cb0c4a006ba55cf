//! Pagination cursor resolution for the task log.
//!
//! A cursor is the `(page, watermark)` pair that fully determines which slice
//! of the log a request returns. Both values arrive as untrusted query
//! strings. Parsing is all-or-nothing: a request either supplies a complete,
//! valid cursor or gets a completely fresh one (page one, watermark now). A
//! cursor whose page came from the request while its watermark silently
//! defaulted to "now" would point into a different snapshot than the reader
//! was browsing, so that combination is never produced.
//!
//! Following a cursor to the next page only advances the page. The
//! watermark is carried forward unchanged, which keeps the pages of one
//! browsing session disjoint even when new tasks are completed meanwhile.

use super::{OwnerId, TaskLogDomainError};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use std::fmt;

/// Number of tasks shown per page.
pub const PAGE_SIZE: u32 = 3;

const PAGE_PARAM: &str = "page";
const WATERMARK_PARAM: &str = "completed_date";

/// Raw cursor parameters exactly as they arrived on the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCursorParams {
    /// Requested 1-based page number.
    pub page: Option<String>,
    /// Watermark as Unix epoch seconds.
    pub completed_date: Option<String>,
}

impl RawCursorParams {
    /// Creates empty parameters, equivalent to a request with no query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            completed_date: None,
        }
    }

    /// Collects cursor parameters from decoded query-string pairs.
    ///
    /// The first occurrence of each parameter wins and unrelated keys are
    /// ignored.
    #[must_use]
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                PAGE_PARAM => &mut params.page,
                WATERMARK_PARAM => &mut params.completed_date,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Sets the raw page parameter.
    #[must_use]
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Sets the raw watermark parameter.
    #[must_use]
    pub fn with_completed_date(mut self, completed_date: impl Into<String>) -> Self {
        self.completed_date = Some(completed_date.into());
        self
    }
}

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a validated page number.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogDomainError::InvalidPageNumber`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self, TaskLogDomainError> {
        if value == 0 {
            return Err(TaskLogDomainError::InvalidPageNumber(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses a page number from a query parameter value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogDomainError::InvalidPageNumber`] when the value is not
    /// a positive integer.
    pub fn parse(raw: &str) -> Result<Self, TaskLogDomainError> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or_else(|| TaskLogDomainError::InvalidPageNumber(raw.to_owned()))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the following page, saturating at the largest page number.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns how many rows precede this page.
    #[must_use]
    pub fn offset(self, page_size: u32) -> u64 {
        u64::from(self.0 - 1) * u64::from(page_size)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Upper bound on `completed_at` held constant across a browsing session.
///
/// Watermarks range from [`Watermark::MIN_EPOCH_SECONDS`] up to the latest
/// instant `chrono` represents, a span every storage adapter can compare
/// against. PostgreSQL `timestamptz` starts in 4713 BC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Watermark(DateTime<Utc>);

impl Watermark {
    /// Earliest accepted watermark: 4713-11-24 BC (proleptic Gregorian,
    /// astronomical year -4712) at midnight UTC.
    pub const MIN_EPOCH_SECONDS: i64 = -210_835_267_200;

    /// Captures the current time, truncated to whole seconds.
    #[must_use]
    pub fn now(clock: &impl Clock) -> Self {
        Self(clock.utc().trunc_subsecs(0))
    }

    /// Creates a watermark from Unix epoch seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogDomainError::InvalidWatermark`] when the value lies
    /// outside the supported timestamp range.
    pub fn from_epoch_seconds(seconds: i64) -> Result<Self, TaskLogDomainError> {
        Self::checked(seconds)
            .ok_or_else(|| TaskLogDomainError::InvalidWatermark(seconds.to_string()))
    }

    fn checked(seconds: i64) -> Option<Self> {
        if seconds < Self::MIN_EPOCH_SECONDS {
            return None;
        }
        DateTime::from_timestamp(seconds, 0).map(Self)
    }

    /// Parses a watermark from a query parameter value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLogDomainError::InvalidWatermark`] when the value is not
    /// an integer number of epoch seconds within the supported range.
    pub fn parse(raw: &str) -> Result<Self, TaskLogDomainError> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::checked)
            .ok_or_else(|| TaskLogDomainError::InvalidWatermark(raw.to_owned()))
    }

    /// Returns the watermark as Unix epoch seconds.
    #[must_use]
    pub fn epoch_seconds(self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the watermark timestamp.
    #[must_use]
    pub const fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

/// The `(page, watermark)` pair selecting one page of the task log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationCursor {
    page: PageNumber,
    watermark: Watermark,
}

impl PaginationCursor {
    /// Creates a cursor from already validated parts.
    #[must_use]
    pub const fn new(page: PageNumber, watermark: Watermark) -> Self {
        Self { page, watermark }
    }

    /// Creates the cursor used when a request carries no usable cursor: the
    /// first page, bounded by the current time.
    #[must_use]
    pub fn fresh(clock: &impl Clock) -> Self {
        Self::new(PageNumber::FIRST, Watermark::now(clock))
    }

    /// Parses a complete cursor from raw request parameters.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskLogDomainError`] encountered when either
    /// parameter is missing or malformed. No partially parsed cursor is ever
    /// returned.
    pub fn parse(raw: &RawCursorParams) -> Result<Self, TaskLogDomainError> {
        let page_value = raw
            .page
            .as_deref()
            .ok_or(TaskLogDomainError::MissingCursorParameter(PAGE_PARAM))?;
        let watermark_value = raw
            .completed_date
            .as_deref()
            .ok_or(TaskLogDomainError::MissingCursorParameter(WATERMARK_PARAM))?;
        let page = PageNumber::parse(page_value)?;
        let watermark = Watermark::parse(watermark_value)?;
        Ok(Self::new(page, watermark))
    }

    /// Resolves the cursor for a request, falling back to [`Self::fresh`]
    /// when the parameters do not form a valid cursor.
    #[must_use]
    pub fn resolve(raw: &RawCursorParams, clock: &impl Clock) -> Self {
        Self::parse(raw).unwrap_or_else(|_| Self::fresh(clock))
    }

    /// Returns the page number.
    #[must_use]
    pub const fn page(&self) -> PageNumber {
        self.page
    }

    /// Returns the watermark.
    #[must_use]
    pub const fn watermark(&self) -> Watermark {
        self.watermark
    }

    /// Returns the cursor for the following page with the same watermark.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self::new(self.page.next(), self.watermark)
    }

    /// Builds the repository query selecting this page for `owner_id`.
    #[must_use]
    pub fn page_query(&self, owner_id: OwnerId) -> PageQuery {
        PageQuery {
            owner_id,
            max_completed_at: self.watermark.as_datetime(),
            limit: PAGE_SIZE,
            offset: self.page.offset(PAGE_SIZE),
        }
    }

    /// Encodes the cursor as a URL query string.
    ///
    /// Both values are decimal integers, so no percent-encoding is needed.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        format!(
            "{PAGE_PARAM}={}&{WATERMARK_PARAM}={}",
            self.page,
            self.watermark.epoch_seconds()
        )
    }
}

/// Repository query for one page of an owner's completed tasks.
///
/// Matching rows have `owner_id` equal to [`Self::owner_id`] and
/// `completed_at <= max_completed_at`. They are ordered by `completed_at`
/// descending, then by task identifier ascending, before `offset` rows are
/// skipped and at most `limit` rows are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    owner_id: OwnerId,
    max_completed_at: DateTime<Utc>,
    limit: u32,
    offset: u64,
}

impl PageQuery {
    /// Returns the owner whose tasks are listed.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the inclusive upper bound on `completed_at`.
    #[must_use]
    pub const fn max_completed_at(&self) -> DateTime<Utc> {
        self.max_completed_at
    }

    /// Returns the maximum number of rows to return.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the number of matching rows to skip.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }
}

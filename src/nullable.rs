//! Adapters from a data-access layer's nullable result pairs.
//!
//! Each pair carries the scanned value and a `valid` flag that is false when
//! the column held SQL `NULL`.

use chrono::{DateTime, Utc};

use crate::Optional;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Nullable<T> {
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }
}

impl<T: Default> From<Nullable<T>> for Optional<T> {
    fn from(n: Nullable<T>) -> Self {
        if n.valid {
            Optional::present(n.value)
        } else {
            Optional::absent()
        }
    }
}

pub type NullString = Nullable<String>;
pub type NullTime = Nullable<DateTime<Utc>>;
pub type NullBool = Nullable<bool>;
pub type NullByte = Nullable<u8>;
pub type NullInt16 = Nullable<i16>;
pub type NullInt32 = Nullable<i32>;
pub type NullInt64 = Nullable<i64>;
pub type NullFloat64 = Nullable<f64>;

pub fn from_null_string(n: NullString) -> Optional<String> {
    n.into()
}

pub fn from_null_time(n: NullTime) -> Optional<DateTime<Utc>> {
    n.into()
}

pub fn from_null_bool(n: NullBool) -> Optional<bool> {
    n.into()
}

pub fn from_null_byte(n: NullByte) -> Optional<u8> {
    n.into()
}

pub fn from_null_int16(n: NullInt16) -> Optional<i16> {
    n.into()
}

pub fn from_null_int32(n: NullInt32) -> Optional<i32> {
    n.into()
}

pub fn from_null_int64(n: NullInt64) -> Optional<i64> {
    n.into()
}

pub fn from_null_float64(n: NullFloat64) -> Optional<f64> {
    n.into()
}

mod error;
mod into_optional;
mod json;
pub mod nullable;
mod pg;

pub use crate::error::{OResult, OptionalError};
pub use crate::into_optional::IntoOptional;
pub use crate::nullable::Nullable;

/// A value that may be missing.
///
/// The payload always holds a valid `T`: when absent it is `T::default()`.
/// The default container is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: T,
    present: bool,
}

impl<T> Optional<T> {
    pub fn present(value: T) -> Self {
        Self {
            value,
            present: true,
        }
    }

    pub fn absent() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    /// Returns the payload and the presence flag.
    pub fn get(&self) -> (&T, bool) {
        (&self.value, self.present)
    }

    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.present)
    }

    /// Returns the payload, which is `T::default()` when absent.
    pub fn value_or_zero(self) -> T {
        self.value
    }

    pub fn value_or(self, default: T) -> T {
        if self.present {
            self.value
        } else {
            default
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Returns a fresh heap copy of the value, or `None` when absent.
    ///
    /// Every call allocates a new box; nothing is shared with `self` or with
    /// boxes returned earlier.
    pub fn to_boxed(&self) -> Option<Box<T>>
    where
        T: Clone,
    {
        self.present.then(|| Box::new(self.value.clone()))
    }

    pub fn as_option(&self) -> Option<&T> {
        self.present.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.present.then_some(self.value)
    }
}

impl<T: Default> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::present(v),
            None => Self::absent(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get() {
        assert_eq!((&0, false), Optional::<i64>::default().get());
        assert_eq!((&0, false), Optional::<i64>::absent().get());
        assert_eq!((&1, true), Optional::present(1).get());
        assert_eq!((1, true), Optional::present(1).into_parts());
    }

    #[test]
    fn value_or_zero() {
        assert_eq!(0, Optional::<i64>::default().value_or_zero());
        assert_eq!(0, Optional::<i64>::absent().value_or_zero());
        assert_eq!(1, Optional::present(1).value_or_zero());
        assert_eq!("", Optional::<String>::absent().value_or_zero());
    }

    #[test]
    fn value_or() {
        assert_eq!(1, Optional::<i64>::default().value_or(1));
        assert_eq!(1, Optional::absent().value_or(1));
        assert_eq!(2, Optional::present(2).value_or(1));
        // A present zero is still present.
        assert_eq!(0, Optional::present(0).value_or(1));
    }

    #[test]
    fn is_present() {
        assert!(!Optional::<i64>::default().is_present());
        assert!(!Optional::<i64>::absent().is_present());
        assert!(Optional::present(1).is_present());
    }

    #[test]
    fn boxes_are_independent() {
        let o = Optional::present(2);

        let mut first = o.to_boxed().unwrap();
        let second = o.to_boxed().unwrap();
        assert!(!std::ptr::eq(&*first, &*second));
        assert_eq!(first, second);

        *first = 3;
        assert_eq!(2, *second);
        assert_eq!(Optional::present(2), o);

        assert!(Optional::<i64>::absent().to_boxed().is_none());
    }

    #[test]
    fn boxes_do_not_alias_heap_values() {
        let o = Optional::present(vec!["a".to_string()]);
        let mut boxed = o.to_boxed().unwrap();
        boxed.push("b".to_string());
        assert_eq!(Some(&vec!["a".to_string()]), o.as_option());
    }

    #[test]
    fn std_option_conversions() {
        assert_eq!(Optional::present(5), Optional::from(Some(5)));
        assert_eq!(Optional::<u8>::absent(), Optional::from(None));
        let o: Option<i32> = Optional::present(5).into();
        assert_eq!(Some(5), o);
        assert_eq!(None, Optional::<u8>::absent().into_option());
        assert_eq!(Some(&0), Optional::present(0u8).as_option());
    }

    #[test]
    fn scenario() -> OResult<()> {
        let mut o = Optional::<i64>::from_json(b"1")?;
        assert_eq!(Optional::present(1), o);
        assert_eq!(Optional::present(0), Optional::from_json(b"null")?);
        assert_eq!(Optional::present(0), Optional::from_json(b"")?);

        assert!(o.decode_into(b"1.2").is_err());
        assert_eq!(Optional::absent(), o);

        assert_eq!(b"2".to_vec(), Optional::present(2).to_json()?);
        assert_eq!(b"null".to_vec(), Optional::<i64>::absent().to_json()?);
        Ok(())
    }
}

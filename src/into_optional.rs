use crate::nullable::Nullable;
use crate::Optional;

/// Converts a bare value, an `Option`, or a nullable column pair into an
/// [`Optional`].
///
/// A bare `T` is always present. `None` and invalid pairs are absent.
pub trait IntoOptional<T> {
    fn into_optional(self) -> Optional<T>;
}

impl<T> IntoOptional<T> for T {
    fn into_optional(self) -> Optional<T> {
        Optional::present(self)
    }
}

impl<T: Default> IntoOptional<T> for Option<T> {
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}

impl<T: Default> IntoOptional<T> for Nullable<T> {
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}

impl<T> IntoOptional<T> for Optional<T> {
    fn into_optional(self) -> Optional<T> {
        self
    }
}

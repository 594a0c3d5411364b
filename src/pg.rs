//! Binding and scanning [`Optional`] as a nullable Postgres column.

use sqlx::decode::Decode;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Type, ValueRef};

use crate::Optional;

impl<T: Type<Postgres>> Type<Postgres> for Optional<T> {
    fn type_info() -> PgTypeInfo {
        T::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        T::compatible(ty)
    }
}

impl<'q, T: Encode<'q, Postgres>> Encode<'q, Postgres> for Optional<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        match self.as_option() {
            Some(value) => value.encode_by_ref(buf),
            None => IsNull::Yes,
        }
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        self.as_option()
            .and_then(<T as Encode<'q, Postgres>>::produces)
    }

    fn size_hint(&self) -> usize {
        self.as_option()
            .map_or(0, <T as Encode<'q, Postgres>>::size_hint)
    }
}

/// A SQL `NULL` scans as absent; any other value is decoded through `T`
/// and wrapped as present.
impl<'r, T> Decode<'r, Postgres> for Optional<T>
where
    T: Decode<'r, Postgres> + Default,
{
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(Optional::absent());
        }

        Ok(Optional::present(T::decode(value)?))
    }
}

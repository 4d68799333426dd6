use crate::types::CustomList;

/// The right-hand side of a combination: either another sequence or a
/// single scalar value. Making the distinction a tagged variant keeps
/// the type-driven branch explicit at the call site instead of hidden
/// behind runtime type inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<T> {
    Sequence(CustomList<T>),
    Scalar(T),
}

impl<T> From<T> for Operand<T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}

impl<T> From<CustomList<T>> for Operand<T> {
    fn from(list: CustomList<T>) -> Self {
        Self::Sequence(list)
    }
}

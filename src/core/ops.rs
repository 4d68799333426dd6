use std::ops::{Add, Sub};

use crate::error::{Result, SequenceError};
use crate::types::{CustomList, Operand};

impl<T> CustomList<T> {
    /// Combine this list with an operand, producing a new list.
    ///
    /// A sequence operand concatenates; a scalar operand is appended as
    /// a single trailing element. The branch is driven by the operand's
    /// tag, not by inspecting the value itself.
    pub fn combine(self, other: Operand<T>) -> Self {
        let mut items = self.into_vec();
        match other {
            Operand::Sequence(other) => items.extend(other),
            Operand::Scalar(value) => items.push(value),
        }
        items.into()
    }

    /// Produce a new list with the first occurrence of `value` deleted.
    ///
    /// Fails with [`SequenceError::ValueNotFound`] when the value is
    /// absent; removal is never a silent no-op.
    pub fn remove(self, value: &T) -> Result<Self>
    where
        T: PartialEq,
    {
        let mut items = self.into_vec();
        match items.iter().position(|item| item == value) {
            Some(index) => {
                items.remove(index);
                Ok(items.into())
            }
            None => Err(SequenceError::ValueNotFound),
        }
    }
}

impl<T> Add<Operand<T>> for CustomList<T> {
    type Output = CustomList<T>;

    fn add(self, rhs: Operand<T>) -> Self::Output {
        self.combine(rhs)
    }
}

/// Subtraction keeps the not-found failure visible in its output type.
impl<T: PartialEq> Sub<T> for CustomList<T> {
    type Output = Result<CustomList<T>>;

    fn sub(self, rhs: T) -> Self::Output {
        self.remove(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combining_empty_with_scalar_appends_it() {
        let a: CustomList<i32> = CustomList::new();
        let res = a.combine(Operand::Scalar(5));
        assert_eq!(res, vec![5].into());
    }

    #[test]
    fn removing_the_appended_scalar_restores_empty() {
        let res = CustomList::new().combine(Operand::Scalar(5));
        let res = res.remove(&5).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn combining_two_sequences_concatenates() {
        let a: CustomList<i32> = vec![1, 2].into();
        let b: CustomList<i32> = vec![3, 4].into();
        assert_eq!(a.combine(b.into()), vec![1, 2, 3, 4].into());
    }

    #[test]
    fn combining_nonempty_with_scalar_keeps_prefix() {
        let a: CustomList<i32> = vec![1, 2].into();
        assert_eq!(a.combine(3.into()), vec![1, 2, 3].into());
    }

    #[test]
    fn removing_absent_value_is_an_error() {
        let a: CustomList<i32> = vec![1, 2].into();
        assert_eq!(a.remove(&9), Err(SequenceError::ValueNotFound));
    }

    #[test]
    fn removing_from_empty_is_an_error() {
        let a: CustomList<i32> = CustomList::new();
        assert_eq!(a.remove(&1), Err(SequenceError::ValueNotFound));
    }

    #[test]
    fn remove_deletes_only_the_first_occurrence() {
        let a: CustomList<i32> = vec![1, 2, 1, 2].into();
        assert_eq!(a.remove(&2).unwrap(), vec![1, 1, 2].into());
    }

    #[test]
    fn add_operator_branches_on_operand_tag() {
        let a: CustomList<i32> = vec![1].into();
        let seq: CustomList<i32> = vec![2, 3].into();
        assert_eq!(a.clone() + Operand::from(seq), vec![1, 2, 3].into());
        assert_eq!(a + Operand::from(2), vec![1, 2].into());
    }

    #[test]
    fn sub_operator_propagates_not_found() {
        let a: CustomList<i32> = vec![1].into();
        assert_eq!(a.clone() - 1, Ok(CustomList::new()));
        assert_eq!(a - 2, Err(SequenceError::ValueNotFound));
    }

    #[test]
    fn operations_preserve_the_customized_type() {
        // The signatures guarantee this statically; the bindings below
        // fail to compile if either operation widens to a plain Vec.
        let res: CustomList<i32> = CustomList::new() + Operand::Scalar(5);
        let res: CustomList<i32> = res.remove(&5).unwrap();
        assert!(res.is_empty());
    }
}

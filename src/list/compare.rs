use std::cmp::Ordering;

/// A total order over two payloads.
///
/// A `SortedList` keeps its elements from greatest to least under its comparator, so the
/// order must stay the same for as long as the list holds it.
pub trait Comparator<T> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
    where F: Fn(&T, &T) -> Ordering
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders payloads by their `Ord` impl. A list using it iterates in descending order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the `Ord` impl of the payload. A list using it iterates in ascending order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse;

impl<T: Ord> Comparator<T> for Reverse {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering::*;
    use super::*;

    #[test]
    fn test_closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"abc", &"de"), Greater);
        assert_eq!(by_len.compare(&"ab", &"de"), Equal);
    }

    #[test]
    fn test_natural_and_reverse() {
        assert_eq!(Natural.compare(&1, &2), Less);
        assert_eq!(Reverse.compare(&1, &2), Greater);
        assert_eq!(Reverse.compare(&"b", &"b"), Equal);
    }
}

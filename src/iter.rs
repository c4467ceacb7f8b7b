use crate::core::SlotVec;

/// Iterator over the live slots of a `SlotVec`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct SlotVecIter<'a, T> {
    slots: &'a [T],
    front: usize,
    back: usize,
}

impl<'a, T> SlotVecIter<'a, T> {
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self {
            slots,
            front: 0,
            back: slots.len(),
        }
    }
}

impl<'a, T> Iterator for SlotVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let item = self.slots.get(self.front);
            self.front += 1;
            item
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for SlotVecIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            self.slots.get(self.back)
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for SlotVecIter<'_, T> {}

impl<'a, T: Copy> IntoIterator for &'a SlotVec<T> {
    type Item = &'a T;
    type IntoIter = SlotVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SlotVecIter::new(self.as_slice())
    }
}

/// Reverse iterator over the live slots of a `SlotVec`
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct SlotVecRevIter<'a, T> {
    slots: &'a [T],
    current: usize,
}

impl<'a, T> SlotVecRevIter<'a, T> {
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self {
            slots,
            current: slots.len(),
        }
    }
}

impl<'a, T> Iterator for SlotVecRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current > 0 {
            self.current -= 1;
            self.slots.get(self.current)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current, Some(self.current))
    }
}

impl<T> ExactSizeIterator for SlotVecRevIter<'_, T> {}

use {
  super::DynamicArray,
  crate::error::{Error, Result}
};

/// Borrowing iterator over the occupied slots of `[0, len)`, in index order.
pub struct Iter<'a, T> {
  slots: std::slice::Iter<'a, Option<T>>
}

impl<'a, T> Iter<'a, T> {
  pub(super) fn new(slots: &'a [Option<T>]) -> Self {
    Self { slots: slots.iter() }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    self.slots.by_ref()
      .find_map(Option::as_ref)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, Some(self.slots.len()))
  }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    self.slots.by_ref()
      .rev()
      .find_map(Option::as_ref)
  }
}

/// Owning iterator, see [`Iter`].
pub struct IntoIter<T> {
  slots: std::vec::IntoIter<Option<T>>
}

impl<T> IntoIter<T> {
  pub(super) fn new(slots: Vec<Option<T>>) -> Self {
    Self { slots: slots.into_iter() }
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.slots.by_ref()
      .find_map(|slot| slot)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, Some(self.slots.len()))
  }
}

/// Positional cursor with in-place removal.
///
/// Yields every position of `[0, len)`, absent slots included (as `None`).
/// [`Cursor::remove`] deletes the most recently yielded position and steps back,
/// so no element is skipped or visited twice.
pub struct Cursor<'a, T> {
  array: &'a mut DynamicArray<T>,
  position: usize,
  removable: bool
}

impl<'a, T> Cursor<'a, T> {
  pub(super) fn new(array: &'a mut DynamicArray<T>) -> Self {
    Self {
      array,
      position: 0,
      removable: false
    }
  }

  pub fn has_next(&self) -> bool {
    self.position < self.array.len()
  }

  pub fn next(&mut self) -> Result<Option<&T>> {
    if !self.has_next() {
      return Err(Error::IllegalIteratorState("no element left"));
    }
    let index = self.position;
    self.position += 1;
    self.removable = true;
    Ok(self.array.slots[index].as_ref())
  }

  /// Removes the element returned by the last [`Cursor::next`].
  pub fn remove(&mut self) -> Result<Option<T>> {
    if !self.removable {
      return Err(Error::IllegalIteratorState("remove without a preceding next"));
    }
    let removed = self.array.remove(self.position - 1)?;
    self.position -= 1;
    self.removable = false;
    Ok(removed)
  }
}

//! Growable, index-addressable sequence.
//!
//! Storage is a boxed slice of `Option<T>`: `len` leading positions are the logical
//! contents, everything in `[len, capacity)` is `None`. A position inside `[0, len)` may
//! also be `None` after [`DynamicArray::invalidate`]; such absent slots are reclaimed by
//! [`DynamicArray::compress_absent`].

use {
  crate::{
    error::{Error, Result},
    util
  },
  itertools::Itertools,
  num_traits::PrimInt,
  std::fmt::{self, Debug, Display, Formatter}
};

mod iter;
#[cfg(test)] mod tests;
pub use iter::{Cursor, Iter, IntoIter};

/// Capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 50;

pub struct DynamicArray<T> {
  slots: Box<[Option<T>]>,
  len: usize,
}

impl<T> DynamicArray<T> {
  pub fn new() -> Self {
    Self {
      slots: empty_slots(DEFAULT_CAPACITY),
      len: 0
    }
  }

  /// Empty array with room for `capacity` elements.
  /// Fails with [`Error::InvalidArgument`] if `capacity` is negative or does not fit `usize`.
  pub fn with_capacity<N: PrimInt + Display>(capacity: N) -> Result<Self> {
    match capacity.to_usize() {
      Some(n) => Ok(Self {
        slots: empty_slots(n),
        len: 0
      }),
      None => Err(Error::InvalidArgument(format!("capacity: {}", capacity)))
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Length of the backing buffer.
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Raw view of a position; `None` marks an absent slot.
  pub fn slot(&self, index: usize) -> Result<Option<&T>> {
    self.check_index(index)?;
    Ok(self.slots[index].as_ref())
  }

  pub fn get(&self, index: usize) -> Result<&T> {
    self.slot(index)?
      .ok_or(Error::AbsentSlot { index })
  }

  /// Replaces the element at `index`, returning the previous occupant.
  pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>> {
    self.check_index(index)?;
    Ok(self.slots[index].replace(value))
  }

  /// Marks `index` absent without shifting its neighbours. Length is unchanged.
  pub fn invalidate(&mut self, index: usize) -> Result<Option<T>> {
    self.check_index(index)?;
    Ok(self.slots[index].take())
  }

  pub fn push(&mut self, value: T) {
    self.push_slot(Some(value));
  }

  /// Inserts at `index`, shifting `[index, len)` one position toward the end.
  /// `index == len` appends.
  pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
    if index > self.len {
      return Err(Error::IndexOutOfRange { index, len: self.len });
    }
    self.ensure_capacity(self.len + 1);
    // slot `len` is vacant, rotating brings it to `index`
    self.slots[index..=self.len].rotate_right(1);
    self.slots[index] = Some(value);
    self.len += 1;
    Ok(())
  }

  /// Removes the element at `index`, shifting `(index, len)` one position toward the start.
  pub fn remove(&mut self, index: usize) -> Result<Option<T>> {
    self.check_index(index)?;
    let removed = self.slots[index].take();
    self.slots[index..self.len].rotate_left(1);
    self.len -= 1;
    Ok(removed)
  }

  /// First position whose element satisfies `predicate`. Absent slots are skipped.
  pub fn position(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    self.slots[..self.len].iter()
      .position(|slot| slot.as_ref().map_or(false, &mut predicate))
  }

  /// Drops every element; capacity is kept.
  pub fn clear(&mut self) {
    self.slots[..self.len].iter_mut()
      .for_each(|slot| *slot = None);
    self.len = 0;
  }

  /// Grows the backing buffer to hold at least `capacity` slots: doubling (`2n + 1`),
  /// or exactly `capacity` when doubling falls short. Never shrinks.
  pub fn ensure_capacity(&mut self, capacity: usize) {
    if capacity > self.slots.len() {
      let grown = (self.slots.len() * 2 + 1).max(capacity);
      log::trace!("DynamicArray: grow {} -> {}", self.slots.len(), grown);
      self.resize_buffer(grown);
    }
  }

  /// Packs every occupied slot of the whole buffer to the front, preserving order,
  /// and shrinks the buffer to exactly that many slots. Afterwards `len() == capacity()`.
  pub fn compress_absent(&mut self) {
    let mut marker = 0;
    for index in 0..self.slots.len() {
      if self.slots[index].is_some() {
        self.slots.swap(marker, index);
        marker += 1;
      }
    }
    log::trace!("DynamicArray: compress {}/{} -> {}", self.len, self.slots.len(), marker);
    self.len = marker;
    self.resize_buffer(marker);
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(&self.slots[..self.len])
  }

  /// Fail-fast cursor. It holds the array exclusively, so [`Cursor::remove`] is the
  /// only mutation possible while it lives.
  pub fn cursor(&mut self) -> Cursor<'_, T> {
    Cursor::new(self)
  }

  fn check_index(&self, index: usize) -> Result<()> {
    if index >= self.len {
      return Err(Error::IndexOutOfRange { index, len: self.len });
    }
    Ok(())
  }

  fn push_slot(&mut self, slot: Option<T>) {
    self.ensure_capacity(self.len + 1);
    self.slots[self.len] = slot;
    self.len += 1;
  }

  fn resize_buffer(&mut self, capacity: usize) {
    let mut slots = std::mem::take(&mut self.slots).into_vec();
    slots.resize_with(capacity, || None);
    self.slots = slots.into_boxed_slice();
  }
}

impl<T: PartialEq> DynamicArray<T> {
  /// Linear scan from the front. Fails with [`Error::AbsentSlot`] if an absent slot is
  /// reached before a match, since it cannot be compared.
  pub fn index_of(&self, value: &T) -> Result<Option<usize>> {
    for (index, slot) in self.slots[..self.len].iter().enumerate() {
      match slot {
        Some(element) if element == value => return Ok(Some(index)),
        Some(_) => (),
        None => return Err(Error::AbsentSlot { index })
      }
    }
    Ok(None)
  }

  pub fn contains(&self, value: &T) -> Result<bool> {
    Ok(self.index_of(value)?.is_some())
  }

  /// Removes the first element equal to `value`. Returns whether one was found.
  pub fn remove_item(&mut self, value: &T) -> Result<bool> {
    match self.index_of(value)? {
      Some(index) => {
        self.remove(index)?;
        Ok(true)
      },
      None => Ok(false)
    }
  }
}

impl<T: Clone> DynamicArray<T> {
  /// Appends a copy of every slot of `other`, in order. `other` is left untouched.
  pub fn extend_from(&mut self, other: &DynamicArray<T>) {
    self.ensure_capacity(self.len + other.len);
    other.slots[..other.len].iter()
      .for_each(|slot| self.push_slot(slot.clone()));
  }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
  std::iter::repeat_with(|| None)
    .take(capacity)
    .collect()
}

impl<T> Default for DynamicArray<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Clone> Clone for DynamicArray<T> {
  fn clone(&self) -> Self {
    Self {
      slots: self.slots.clone(),
      len: self.len
    }
  }
}

/// Equal lengths and equal slots; capacity is not compared.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
  fn eq(&self, other: &Self) -> bool {
    self.slots[..self.len] == other.slots[..other.len]
  }
}

impl<T> FromIterator<T> for DynamicArray<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut array = Self::new();
    array.extend(iter);
    array
  }
}

impl<T> Extend<T> for DynamicArray<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    iter.into_iter()
      .for_each(|value| self.push(value));
  }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> IntoIterator for DynamicArray<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    let mut slots = self.slots.into_vec();
    slots.truncate(self.len);
    IntoIter::new(slots)
  }
}

impl<T: Debug> Debug for DynamicArray<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let size = util::byte_size(self.capacity() * std::mem::size_of::<Option<T>>());
    f.debug_struct("DynamicArray")
      .field("len", &self.len)
      .field("capacity", &self.capacity())
      .field("size", &size)
      .field("slots", &&self.slots[..self.len])
      .finish()
  }
}

/// `[a, b, c]`, absent slots shown as `_`.
impl<T: Display> Display for DynamicArray<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let body = self.slots[..self.len].iter()
      .format_with(", ", |slot, g| match slot {
        Some(value) => g(value),
        None => g(&"_")
      });
    write!(f, "[{}]", body)
  }
}

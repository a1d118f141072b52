use {
  super::*,
  anyhow::Result,
  regex::Regex
};

fn filled(n: i32) -> DynamicArray<i32> {
  (0..n).collect()
}

#[test] fn construction() -> Result<()> {
  let array = DynamicArray::<i32>::new();
  assert_eq!(array.capacity(), DEFAULT_CAPACITY);
  assert!(array.is_empty());

  let array = DynamicArray::<i32>::with_capacity(0)?;
  assert_eq!(array.capacity(), 0);
  assert_eq!(array.len(), 0);

  assert_eq!(
    DynamicArray::<i32>::with_capacity(-1).err(),
    Some(Error::InvalidArgument("capacity: -1".into()))
  );
  Ok(())
}

#[test] fn capacity_integer_types() -> Result<()> {
  assert_eq!(DynamicArray::<u8>::with_capacity(7u8)?.capacity(), 7);
  assert_eq!(DynamicArray::<u8>::with_capacity(7i64)?.capacity(), 7);
  assert_eq!(DynamicArray::<u8>::with_capacity(0usize)?.capacity(), 0);
  assert!(matches!(
    DynamicArray::<u8>::with_capacity(i8::MIN),
    Err(Error::InvalidArgument(_))
  ));
  Ok(())
}

#[test] fn growth_keeps_elements() -> Result<()> {
  let mut array = DynamicArray::with_capacity(2)?;
  let mut capacities = vec![array.capacity()];
  for i in 0..100 {
    array.push(i);
    if *capacities.last().unwrap() != array.capacity() {
      capacities.push(array.capacity());
    }
  }
  assert_eq!(capacities, [2, 5, 11, 23, 47, 95, 191]);
  assert_eq!(array.len(), 100);
  for i in 0..100 {
    assert_eq!(*array.get(i)?, i as i32);
  }
  Ok(())
}

#[test] fn growth_from_zero() -> Result<()> {
  let mut array = DynamicArray::with_capacity(0)?;
  array.push('a');
  assert_eq!(array.capacity(), 1);
  array.push('b');
  assert_eq!(array.capacity(), 3);
  Ok(())
}

#[test] fn ensure_capacity() -> Result<()> {
  let mut array = DynamicArray::<u8>::with_capacity(3)?;
  array.ensure_capacity(2);
  assert_eq!(array.capacity(), 3);
  array.ensure_capacity(4);
  assert_eq!(array.capacity(), 7);
  array.ensure_capacity(100);
  assert_eq!(array.capacity(), 100);
  Ok(())
}

#[test] fn index_bounds() {
  let mut array = filled(3);
  let out_of_range = Error::IndexOutOfRange { index: 3, len: 3 };

  assert_eq!(array.get(3), Err(out_of_range.clone()));
  assert_eq!(array.set(3, 9), Err(out_of_range.clone()));
  assert_eq!(array.remove(3), Err(out_of_range.clone()));
  assert_eq!(array.invalidate(3), Err(out_of_range));
  assert_eq!(
    array.insert(4, 9),
    Err(Error::IndexOutOfRange { index: 4, len: 3 })
  );
  assert_eq!(array, filled(3));
}

#[test] fn set_replaces() -> Result<()> {
  let mut array = filled(3);
  assert_eq!(array.set(1, 10)?, Some(1));
  assert_eq!(array.to_string(), "[0, 10, 2]");
  assert_eq!(array.capacity(), DEFAULT_CAPACITY);
  Ok(())
}

#[test] fn insert_shifts() -> Result<()> {
  let mut array = filled(3);
  array.insert(0, -1)?;
  array.insert(2, 100)?;
  array.insert(array.len(), 200)?;
  assert_eq!(array.to_string(), "[-1, 0, 100, 1, 2, 200]");
  Ok(())
}

#[test] fn insert_grows_full_buffer() -> Result<()> {
  let mut array = DynamicArray::with_capacity(2)?;
  array.push(1);
  array.push(3);
  array.insert(1, 2)?;
  assert_eq!(array.capacity(), 5);
  assert_eq!(array.to_string(), "[1, 2, 3]");
  Ok(())
}

#[test] fn remove_shifts() -> Result<()> {
  let mut array = filled(5);
  assert_eq!(array.remove(0)?, Some(0));
  assert_eq!(array.remove(3)?, Some(4));
  assert_eq!(array.remove(1)?, Some(2));
  assert_eq!(array.to_string(), "[1, 3]");
  assert_eq!(array.len(), 2);
  assert_eq!(array.slot(1)?, Some(&3));
  Ok(())
}

#[test] fn size_tracks_operations() -> Result<()> {
  let mut array = DynamicArray::with_capacity(1)?;
  let mut expected = 0;
  for i in 0..40 {
    if i % 3 == 2 {
      array.remove(array.len() / 2)?;
      expected -= 1;
    } else {
      array.insert(array.len() / 2, i)?;
      expected += 1;
    }
    assert_eq!(array.len(), expected);
  }
  assert_eq!(array.iter().count(), expected);
  Ok(())
}

#[test] fn search() -> Result<()> {
  let mut array: DynamicArray<_> = ["a", "b", "c", "b"].into_iter().collect();
  assert_eq!(array.index_of(&"b")?, Some(1));
  assert_eq!(array.index_of(&"z")?, None);
  assert!(array.contains(&"c")?);
  assert!(!array.contains(&"z")?);

  assert!(array.remove_item(&"b")?);
  assert_eq!(array.to_string(), "[a, c, b]");
  assert!(!array.remove_item(&"z")?);
  assert_eq!(array.len(), 3);

  assert_eq!(array.position(|s| s.starts_with('c')), Some(1));
  Ok(())
}

#[test] fn search_through_absent_slot() -> Result<()> {
  let mut array = filled(4);
  array.invalidate(1)?;
  assert_eq!(array.index_of(&0)?, Some(0));
  assert_eq!(array.index_of(&3), Err(Error::AbsentSlot { index: 1 }));
  assert_eq!(array.contains(&3), Err(Error::AbsentSlot { index: 1 }));
  assert_eq!(array.remove_item(&3), Err(Error::AbsentSlot { index: 1 }));
  assert_eq!(array.position(|&x| x == 3), Some(3));
  assert_eq!(array.get(1), Err(Error::AbsentSlot { index: 1 }));
  assert_eq!(array.slot(1)?, None);
  Ok(())
}

#[test] fn clear_keeps_capacity() -> Result<()> {
  let mut array = DynamicArray::with_capacity(4)?;
  array.extend(0..10);
  let capacity = array.capacity();
  array.clear();
  assert!(array.is_empty());
  assert_eq!(array.capacity(), capacity);
  assert_eq!(array.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
  array.push(7);
  assert_eq!(array.to_string(), "[7]");
  Ok(())
}

#[test] fn extend_from_other() -> Result<()> {
  let mut array = filled(2);
  let mut other: DynamicArray<_> = (10..13).collect();
  other.invalidate(1)?;
  array.extend_from(&other);
  assert_eq!(array.to_string(), "[0, 1, 10, _, 12]");
  assert_eq!(other.to_string(), "[10, _, 12]");
  Ok(())
}

#[test] fn compress_absent() -> Result<()> {
  let mut array = DynamicArray::with_capacity(10)?;
  array.extend(1..=6);
  array.invalidate(0)?;
  array.invalidate(3)?;
  array.invalidate(4)?;
  assert_eq!(array.to_string(), "[_, 2, 3, _, _, 6]");

  array.compress_absent();
  assert_eq!(array.to_string(), "[2, 3, 6]");
  assert_eq!(array.len(), 3);
  assert_eq!(array.capacity(), 3);

  let snapshot = array.clone();
  array.compress_absent();
  assert_eq!(array, snapshot);
  assert_eq!(array.capacity(), 3);

  array.push(7);
  assert_eq!(array.capacity(), 7);
  Ok(())
}

#[test] fn compress_empty() {
  let mut array = DynamicArray::<i32>::new();
  array.compress_absent();
  assert_eq!(array.capacity(), 0);
  assert!(array.is_empty());
}

#[test] fn cursor_removal() -> Result<()> {
  let mut array = filled(5);
  let mut visited = vec![];
  let mut cursor = array.cursor();
  while cursor.has_next() {
    let value = *cursor.next()?.unwrap();
    visited.push(value);
    if value % 2 == 0 {
      assert_eq!(cursor.remove()?, Some(value));
    }
  }
  assert_eq!(visited, [0, 1, 2, 3, 4]);
  assert_eq!(array.to_string(), "[1, 3]");
  Ok(())
}

#[test] fn cursor_remove_all() -> Result<()> {
  let mut array = filled(5);
  let mut cursor = array.cursor();
  while cursor.has_next() {
    cursor.next()?;
    cursor.remove()?;
  }
  assert!(array.is_empty());
  Ok(())
}

#[test] fn cursor_misuse() -> Result<()> {
  let mut array = filled(1);
  let mut cursor = array.cursor();
  assert!(matches!(cursor.remove(), Err(Error::IllegalIteratorState(_))));
  cursor.next()?;
  cursor.remove()?;
  assert!(matches!(cursor.remove(), Err(Error::IllegalIteratorState(_))));
  assert!(!cursor.has_next());
  assert!(matches!(cursor.next(), Err(Error::IllegalIteratorState(_))));
  Ok(())
}

#[test] fn cursor_yields_absent() -> Result<()> {
  let mut array = filled(3);
  array.invalidate(1)?;
  let mut cursor = array.cursor();
  assert_eq!(cursor.next()?, Some(&0));
  assert_eq!(cursor.next()?, None);
  assert_eq!(cursor.remove()?, None);
  assert_eq!(cursor.next()?, Some(&2));
  assert_eq!(array.to_string(), "[0, 2]");
  Ok(())
}

#[test] fn iterators() -> Result<()> {
  let mut array = filled(5);
  array.invalidate(2)?;
  assert_eq!(array.iter().copied().collect::<Vec<_>>(), [0, 1, 3, 4]);
  assert_eq!(array.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 1, 0]);
  assert_eq!((&array).into_iter().count(), 4);

  // a fresh iterator restarts from the front
  let mut first = array.iter();
  first.next();
  assert_eq!(array.iter().next(), Some(&0));

  assert_eq!(array.into_iter().collect::<Vec<_>>(), [0, 1, 3, 4]);
  Ok(())
}

#[test] fn equality_ignores_capacity() -> Result<()> {
  let mut a = DynamicArray::with_capacity(1)?;
  let mut b = DynamicArray::with_capacity(64)?;
  a.extend([1, 2]);
  b.extend([1, 2]);
  assert_eq!(a, b);
  b.push(3);
  assert_ne!(a, b);
  Ok(())
}

#[test] fn formatting() -> Result<()> {
  assert_eq!(DynamicArray::<i32>::new().to_string(), "[]");
  assert_eq!(filled(3).to_string(), "[0, 1, 2]");

  let debug = format!("{:?}", filled(2));
  let re = Regex::new(r"^DynamicArray \{ len: 2, capacity: 50, size: .+, slots: \[Some\(0\), Some\(1\)\] \}$")?;
  assert!(re.is_match(&debug), "{}", debug);
  Ok(())
}

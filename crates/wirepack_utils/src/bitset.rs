use std::fmt::{Debug, Display};

/// Fixed-width set of small integers, used to record which async chunks reach a module.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSet {
  entries: Vec<u32>,
}

impl BitSet {
  pub fn new(max_bit_count: u32) -> Self {
    Self { entries: vec![0; max_bit_count.div_ceil(32) as usize] }
  }

  pub fn has_bit(&self, bit: u32) -> bool {
    self.entries.get((bit / 32) as usize).is_some_and(|entry| entry & (1 << (bit % 32)) != 0)
  }

  pub fn set_bit(&mut self, bit: u32) {
    let index = (bit / 32) as usize;
    if index >= self.entries.len() {
      self.entries.resize(index + 1, 0);
    }
    self.entries[index] |= 1 << (bit % 32);
  }

  pub fn count_ones(&self) -> u32 {
    self.entries.iter().map(|entry| entry.count_ones()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.iter().all(|entry| *entry == 0)
  }

  /// Set bits in ascending order.
  pub fn iter_ones(&self) -> impl Iterator<Item = u32> + '_ {
    self.entries.iter().enumerate().flat_map(|(index, entry)| {
      (0..32u32).filter(move |bit| entry & (1 << bit) != 0).map(move |bit| index as u32 * 32 + bit)
    })
  }
}

impl Display for BitSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let bits = self.iter_ones().map(|bit| bit.to_string()).collect::<Vec<_>>();
    write!(f, "{{{}}}", bits.join(","))
  }
}

impl Debug for BitSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "BitSet({self})")
  }
}

#[test]
fn test_bitset() {
  let mut bits = BitSet::new(40);
  assert!(bits.is_empty());

  bits.set_bit(0);
  bits.set_bit(33);
  assert!(bits.has_bit(0));
  assert!(bits.has_bit(33));
  assert!(!bits.has_bit(1));
  assert!(!bits.has_bit(200));
  assert_eq!(bits.count_ones(), 2);
  assert_eq!(bits.iter_ones().collect::<Vec<_>>(), vec![0, 33]);
  assert_eq!(bits.to_string(), "{0,33}");

  let mut same = BitSet::new(40);
  same.set_bit(33);
  same.set_bit(0);
  assert_eq!(bits, same);
}

/// A set of integers in `0..capacity`, stored densely
#[derive(Clone)]
pub(crate) struct RangeSet {
    size: usize,
    domain: Vec<bool>,
}

impl RangeSet {
    pub fn with_all(capacity: usize) -> RangeSet {
        RangeSet {
            size: capacity,
            domain: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, n: usize) -> bool {
        self.domain.get(n).copied().unwrap_or(false)
    }

    /// Removes every value for which `f` returns false. Returns the number of removed values.
    pub fn retain(&mut self, mut f: impl FnMut(usize) -> bool) -> usize {
        let mut removed = 0;
        for (n, present) in self.domain.iter_mut().enumerate() {
            if *present && !f(n) {
                *present = false;
                removed += 1;
            }
        }
        self.size -= removed;
        removed
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            domain: &self.domain,
            index: 0,
        }
    }
}

pub(crate) struct Iter<'a> {
    domain: &'a [bool],
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        for i in self.index..self.domain.len() {
            if self.domain[i] {
                self.index = i + 1;
                return Some(i);
            }
        }
        self.index = self.domain.len();
        None
    }
}

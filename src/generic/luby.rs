/*!
An iterator over the luby sequence, used to schedule restarts.

See <https://oeis.org/A182105> for details on the luby sequence.

Each element is computed directly from its index, by locating the index within the (finite) prefix of the sequence which contains it, as done by MiniSAT.
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// The position within the sequence, and the element at that position.
pub struct Luby {
    index: LubyRepresentation,
    current: LubyRepresentation,
}

// The default iterator is on the first element of the sequence.
impl Default for Luby {
    fn default() -> Self {
        Luby {
            index: 1,
            current: 1,
        }
    }
}

/// The element of the luby sequence at (zero-based) `index`.
pub fn luby_at(index: LubyRepresentation) -> LubyRepresentation {
    let mut size: u64 = 1;
    let mut exponent = 0;
    let mut index = index as u64;

    while size < index + 1 {
        exponent += 1;
        size = 2 * size + 1;
    }

    while size - 1 != index {
        size = (size - 1) >> 1;
        exponent -= 1;
        index %= size;
    }

    1 << exponent
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        self.current = luby_at(self.index);
        self.index = self.index.checked_add(1)?;
        Some(self.current)
    }
}

impl Luby {
    /// The element the iterator is currently on.
    pub fn current(&self) -> LubyRepresentation {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1, 2,
    ];

    #[test]
    fn luby() {
        let mut l = Luby::default();
        assert_eq!(l.current(), LUBY_SLICE[0]);
        for known_value in &LUBY_SLICE[1..] {
            assert_eq!(l.next(), Some(*known_value));
            assert_eq!(l.current(), *known_value);
        }
    }

    #[test]
    fn direct() {
        for (index, known_value) in LUBY_SLICE.iter().enumerate() {
            assert_eq!(luby_at(index as LubyRepresentation), *known_value);
        }
    }
}

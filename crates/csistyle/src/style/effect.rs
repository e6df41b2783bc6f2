use crate::{Command, Sgr, CSI};

/// An ordered set of active SGR effect codes.
///
/// Codes keep their insertion order, which determines the order of parameters
/// in the set's escape sequence. The set never contains duplicates: Toggling a
/// present code removes it, toggling an absent code appends it.
///
/// Displaying the set yields a single SGR sequence with the codes separated by
/// semicolons. The empty set displays as `CSI m`, which terminals treat like
/// `CSI 0 m`, i.e., a reset.
///
/// Equality and hashing consider membership only. Toggling a code twice thus
/// yields an equal set, even if the code moved to the end.
///
/// ```
/// # use csistyle::style::EffectSet;
/// let mut effects = EffectSet::new();
/// effects.toggle(1);
/// effects.toggle(4);
/// assert_eq!(format!("{}", effects), "\x1b[1;4m");
/// effects.toggle(1);
/// assert_eq!(format!("{}", effects), "\x1b[4m");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectSet(Vec<u8>);

impl EffectSet {
    /// Create a new empty effect set.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Toggle the given code.
    ///
    /// This method returns `true` if the code is active after toggling.
    pub fn toggle(&mut self, code: u8) -> bool {
        if let Some(position) = self.0.iter().position(|c| *c == code) {
            self.0.remove(position);
            false
        } else {
            self.0.push(code);
            true
        }
    }

    /// Determine whether the code is active.
    pub fn contains(&self, code: u8) -> bool {
        self.0.contains(&code)
    }

    /// Determine whether no code is active.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of active codes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the active codes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Deactivate all codes.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl PartialEq for EffectSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().all(|c| other.0.contains(c))
    }
}

impl Eq for EffectSet {}

impl core::hash::Hash for EffectSet {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        let mut codes = self.0.clone();
        codes.sort_unstable();
        codes.hash(state);
    }
}

impl Command for EffectSet {}

impl Sgr for EffectSet {
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (index, code) in self.0.iter().enumerate() {
            if 0 < index {
                out.write_str(";")?;
            }
            <_ as core::fmt::Display>::fmt(code, out)?;
        }
        Ok(())
    }
}

impl core::fmt::Display for EffectSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(CSI)?;
        self.write_param(f)?;
        f.write_str("m")
    }
}

impl FromIterator<u8> for EffectSet {
    /// Collect codes, toggling each in turn.
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut effects = Self::new();
        for code in iter {
            effects.toggle(code);
        }
        effects
    }
}

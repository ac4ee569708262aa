//! Section ordering of the main database.
//!
//! Sections are positional: the markers only confirm that the reader is where
//! the fixed order says it must be. Each marker is followed by a uint32 count
//! and that many records.

use std::fmt;

/// A named, count-prefixed run of records in the main database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    Archetypes,
    Powersets,
    Powers,
    Summons,
}

impl Section {
    /// The only valid order. Each section's index references point into
    /// sections before it.
    pub const ORDER: [Section; 4] = [
        Section::Archetypes,
        Section::Powersets,
        Section::Powers,
        Section::Summons,
    ];

    /// The literal marker string that opens this section.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Archetypes => "BEGIN:ARCHETYPES",
            Self::Powersets => "BEGIN:POWERSETS",
            Self::Powers => "BEGIN:POWERS",
            Self::Summons => "BEGIN:SUMMONS",
        }
    }

    /// Lowercase list name, matching the accessor on `MainDatabase`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Archetypes => "archetypes",
            Self::Powersets => "powersets",
            Self::Powers => "powers",
            Self::Summons => "summons",
        }
    }

    /// The section that must follow this one, if any.
    pub fn next(self) -> Option<Section> {
        let position = Self::ORDER.iter().position(|&s| s == self)?;
        Self::ORDER.get(position + 1).copied()
    }

    /// Trail frame for this section's records.
    pub(crate) const fn frame(self) -> &'static str {
        match self {
            Self::Archetypes => "MainDatabase.archetypes",
            Self::Powersets => "MainDatabase.powersets",
            Self::Powers => "MainDatabase.powers",
            Self::Summons => "MainDatabase.summons",
        }
    }

    /// Trail frame for this section's count.
    pub(crate) const fn count_field(self) -> &'static str {
        match self {
            Self::Archetypes => "archetypes.count",
            Self::Powersets => "powersets.count",
            Self::Powers => "powers.count",
            Self::Summons => "summons.count",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        assert_eq!(Section::Archetypes.next(), Some(Section::Powersets));
        assert_eq!(Section::Powersets.next(), Some(Section::Powers));
        assert_eq!(Section::Powers.next(), Some(Section::Summons));
        assert_eq!(Section::Summons.next(), None);
        assert!(Section::ORDER.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_markers_are_distinct() {
        let mut markers: Vec<_> = Section::ORDER.iter().map(|s| s.marker()).collect();
        markers.dedup();
        assert_eq!(markers.len(), 4);
        assert_eq!(Section::Powers.marker(), "BEGIN:POWERS");
    }

    #[test]
    fn test_name_matches_frame_and_display() {
        for section in Section::ORDER {
            assert_eq!(section.frame(), format!("MainDatabase.{}", section.name()));
            assert_eq!(section.to_string(), section.name());
        }
    }
}

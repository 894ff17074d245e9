//! Character classification for plan rows.
//!
//! Every character in a plan falls into exactly one [`Symbol`] class, or
//! it is illegal. The scanner never looks at raw characters beyond this
//! module; it matches on the class instead.

use crate::ChairType;

/// Wall symbols that run vertically or join walls (corners, junctions,
/// diagonals).
pub const VERTICAL_WALL_SYMBOLS: [char; 4] = ['|', '/', '\\', '+'];

/// Wall symbols that run horizontally.
pub const HORIZONTAL_WALL_SYMBOLS: [char; 1] = ['-'];

/// Punctuation that may surround a room name, e.g. `(kitchen)`.
///
/// Delimiters are legal but carry no meaning: they are never part of a
/// name and are never counted.
pub const NAME_DELIMITERS: [char; 2] = ['(', ')'];

/// The class of a single plan character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Part of a drawn boundary.
    Wall,
    /// Empty floor or background.
    Blank,
    /// A lowercase letter belonging to a room name.
    NameChar,
    /// `(` or `)` around a room name.
    NameDelimiter,
    /// One piece of furniture.
    Chair(ChairType),
}

impl Symbol {
    /// Returns `true` for anything that is not a wall or a blank.
    ///
    /// Content is what makes a region "occupied": a gap that is still
    /// open above may only contain blanks.
    pub fn is_content(self) -> bool {
        !matches!(self, Self::Wall | Self::Blank)
    }
}

/// Returns `true` if `c` is any wall symbol.
#[inline]
pub fn is_wall(c: char) -> bool {
    VERTICAL_WALL_SYMBOLS.contains(&c) || HORIZONTAL_WALL_SYMBOLS.contains(&c)
}

/// Classifies a character, or returns `None` if it is not part of the
/// plan alphabet.
pub fn classify(c: char) -> Option<Symbol> {
    if is_wall(c) {
        return Some(Symbol::Wall);
    }
    match c {
        ' ' => Some(Symbol::Blank),
        'a'..='z' => Some(Symbol::NameChar),
        c if NAME_DELIMITERS.contains(&c) => Some(Symbol::NameDelimiter),
        c => ChairType::from_code(c).map(Symbol::Chair),
    }
}

use crate::error::TopologyError;
use crate::topology::{reverse_path, ArcRef, Part};

/// Which end of a part a terminal reference designates.
///
/// A part's start terminal is its first reference reversed, its end terminal
/// is its last reference; both point away from the part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Start,
    End,
}

impl Terminal {
    /// Resolves `terminal` against `part`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::IndexInconsistency`] if `terminal` is neither
    /// terminal of `part`.
    pub fn of(part: &[ArcRef], terminal: ArcRef) -> Result<Self, TopologyError> {
        if part.first().is_some_and(|&first| !first == terminal) {
            Ok(Self::Start)
        } else if part.last() == Some(&terminal) {
            Ok(Self::End)
        } else {
            Err(TopologyError::IndexInconsistency { terminal })
        }
    }
}

/// Both terminals of `part`, start first. `None` for an empty part.
#[must_use]
pub fn part_terminals(part: &[ArcRef]) -> Option<[ArcRef; 2]> {
    Some([!*part.first()?, *part.last()?])
}

/// The terminal at the opposite end of `part` from `terminal`.
///
/// # Errors
///
/// Returns [`TopologyError::IndexInconsistency`] if `terminal` is neither
/// terminal of `part`.
pub fn other_terminal(part: &[ArcRef], terminal: ArcRef) -> Result<ArcRef, TopologyError> {
    let [start, end] = part_terminals(part).ok_or(TopologyError::IndexInconsistency { terminal })?;
    match Terminal::of(part, terminal)? {
        Terminal::Start => Ok(end),
        Terminal::End => Ok(start),
    }
}

/// Joins `source` onto `dest` where `source_terminal` meets `dest_terminal`.
///
/// `source` is reversed when needed so that the joined line stays continuous,
/// then prepended (join at the start of `dest`) or appended (join at its end).
///
/// # Errors
///
/// Returns [`TopologyError::IndexInconsistency`] if either terminal does not
/// belong to its part. `dest` is left untouched in that case.
pub fn extend_polyline_part(
    dest: &mut Part,
    dest_terminal: ArcRef,
    mut source: Part,
    source_terminal: ArcRef,
) -> Result<(), TopologyError> {
    let dest_end = Terminal::of(dest, dest_terminal)?;
    let source_end = Terminal::of(&source, source_terminal)?;

    // orient the source so that it leaves the shared node
    if source_end == Terminal::End {
        reverse_path(&mut source);
    }
    match dest_end {
        Terminal::Start => {
            reverse_path(&mut source);
            source.append(dest);
            *dest = source;
        }
        Terminal::End => dest.append(&mut source),
    }
    Ok(())
}

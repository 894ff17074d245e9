//! Content extraction: room names and furniture inside one section.

use chairplan_grammar::{ChairCounts, Symbol};

use crate::{PlanError, RoomRecord};

/// Names and furniture found in a section's interior.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionContent {
    /// Name candidates in left-to-right order, trailing blanks trimmed.
    pub names: Vec<String>,
    pub counts: ChairCounts,
}

/// Scans a section interior.
///
/// A name candidate starts at a lowercase letter and runs over
/// lowercase letters and blanks; anything else ends it. Furniture codes
/// are tallied independently of names.
pub fn extract(chars: &[char], symbols: &[Symbol]) -> SectionContent {
    let mut content = SectionContent::default();
    let mut name: Option<String> = None;

    for (&c, &symbol) in chars.iter().zip(symbols) {
        match symbol {
            Symbol::NameChar => name.get_or_insert_with(String::new).push(c),
            Symbol::Blank => {
                if let Some(name) = name.as_mut() {
                    name.push(c);
                }
            }
            other => {
                if let Some(done) = name.take() {
                    content.names.push(done.trim_end().to_string());
                }
                if let Symbol::Chair(chair) = other {
                    content.counts.increment(chair);
                }
            }
        }
    }
    if let Some(done) = name {
        content.names.push(done.trim_end().to_string());
    }
    content
}

/// Folds a section's content into its room.
///
/// The first name names the room. A later name that differs from the
/// room's name is a conflict; repeating the same name is fine.
///
/// # Errors
/// Returns [`PlanError::ConflictingRoomNames`] on a second, different name.
pub fn apply(
    record: &mut RoomRecord,
    content: SectionContent,
    line: usize,
) -> Result<(), PlanError> {
    for candidate in content.names {
        if let Some(existing) = &record.name {
            if *existing != candidate {
                return Err(PlanError::ConflictingRoomNames {
                    line,
                    first: existing.clone(),
                    second: candidate,
                });
            }
        } else {
            tracing::debug!(room_id = %record.id, name = %candidate, line, "room named");
            record.name = Some(candidate);
        }
    }
    record.counts.add(&content.counts);
    Ok(())
}

/// Combines two records of the same physical room during a merge.
///
/// Counts are summed; the single existing name (if any) is kept.
///
/// # Errors
/// Returns [`PlanError::ConflictingRoomNames`] if both carry different
/// names.
pub fn combine(
    into: &mut RoomRecord,
    absorbed: RoomRecord,
    line: usize,
) -> Result<(), PlanError> {
    if let Some(other) = absorbed.name {
        if let Some(kept) = &into.name {
            if *kept != other {
                return Err(PlanError::ConflictingRoomNames {
                    line,
                    first: kept.clone(),
                    second: other,
                });
            }
        } else {
            into.name = Some(other);
        }
    }
    into.counts.add(&absorbed.counts);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chairplan_grammar::{classify, ChairType, RoomId};

    fn content_of(interior: &str) -> SectionContent {
        let chars: Vec<char> = interior.chars().collect();
        let symbols: Vec<Symbol> = chars.iter().map(|&c| classify(c).unwrap()).collect();
        extract(&chars, &symbols)
    }

    fn record(name: Option<&str>) -> RoomRecord {
        RoomRecord {
            id: RoomId(1),
            name: name.map(String::from),
            counts: ChairCounts::default(),
        }
    }

    #[test]
    fn test_extract_name_and_chairs() {
        let content = content_of("k W");
        assert_eq!(content.names, vec!["k"]);
        assert_eq!(content.counts, ChairCounts::new(1, 0, 0, 0));
    }

    #[test]
    fn test_extract_name_with_embedded_blank() {
        let content = content_of("  living room   SS ");
        assert_eq!(content.names, vec!["living room"]);
        assert_eq!(content.counts.get(ChairType::Sofa), 2);
    }

    #[test]
    fn test_extract_delimited_name() {
        let content = content_of(" (closet) C");
        assert_eq!(content.names, vec!["closet"]);
        assert_eq!(content.counts.get(ChairType::China), 1);
    }

    #[test]
    fn test_extract_blank_and_chairs_only() {
        let content = content_of(" W P  S C ");
        assert!(content.names.is_empty());
        assert_eq!(content.counts, ChairCounts::new(1, 1, 1, 1));
    }

    #[test]
    fn test_extract_multiple_candidates() {
        let content = content_of("den W den");
        assert_eq!(content.names, vec!["den", "den"]);
    }

    #[test]
    fn test_apply_names_unnamed_room() {
        let mut room = record(None);
        apply(&mut room, content_of("office PP"), 2).unwrap();
        assert_eq!(room.name.as_deref(), Some("office"));
        assert_eq!(room.counts.get(ChairType::Plastic), 2);
    }

    #[test]
    fn test_apply_accepts_repeated_name() {
        let mut room = record(Some("office"));
        apply(&mut room, content_of("office"), 3).unwrap();
        assert_eq!(room.name.as_deref(), Some("office"));
    }

    #[test]
    fn test_apply_rejects_second_name() {
        let mut room = record(Some("office"));
        let err = apply(&mut room, content_of("lab W"), 5).unwrap_err();
        assert_eq!(
            err,
            PlanError::ConflictingRoomNames {
                line: 5,
                first: "office".into(),
                second: "lab".into(),
            }
        );
    }

    #[test]
    fn test_combine_adopts_single_name() {
        let mut into = record(None);
        into.counts = ChairCounts::new(1, 0, 0, 0);
        let mut absorbed = record(Some("hall"));
        absorbed.counts = ChairCounts::new(0, 0, 3, 0);

        combine(&mut into, absorbed, 4).unwrap();

        assert_eq!(into.name.as_deref(), Some("hall"));
        assert_eq!(into.counts, ChairCounts::new(1, 0, 3, 0));
    }

    #[test]
    fn test_combine_rejects_two_names() {
        let mut into = record(Some("hall"));
        let err = combine(&mut into, record(Some("den")), 4).unwrap_err();
        assert!(matches!(err, PlanError::ConflictingRoomNames { .. }));
    }

    #[test]
    fn test_combine_accepts_same_name() {
        let mut into = record(Some("hall"));
        combine(&mut into, record(Some("hall")), 4).unwrap();
        assert_eq!(into.name.as_deref(), Some("hall"));
    }
}

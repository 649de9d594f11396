//! Slovenian-alphabet collation for municipality names.
//!
//! Byte order sorts `Č` past `Z`; the Slovenian alphabet places č, š and ž
//! immediately after c, s and z. The dataset order is fixed once at load
//! time with this collation and every later filter preserves it.

use std::cmp::Ordering;

use crate::record::Municipality;

/// Primary collation weight for a single character.
///
/// Base latin letters map to even weights so the caron letters fit between
/// them: `c < č < d`, `s < š < t`, `z < ž`. Characters outside the alphabet
/// keep their scalar value, shifted past the letter range so spaces,
/// hyphens and digits sort after letters the way the source table does.
fn primary_weight(c: char) -> u32 {
    let folded = c.to_lowercase().next().unwrap_or(c);
    match folded {
        'a'..='z' => (folded as u32 - 'a' as u32) * 2,
        'č' => ('c' as u32 - 'a' as u32) * 2 + 1,
        'š' => ('s' as u32 - 'a' as u32) * 2 + 1,
        'ž' => ('z' as u32 - 'a' as u32) * 2 + 1,
        other => other as u32 + 0x100,
    }
}

/// Compare two names in Slovenian alphabet order.
///
/// The primary pass is case-insensitive; exact scalar order breaks ties so
/// the comparison stays a total order even for names differing only in
/// case.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| a.cmp(b))
}

/// Sort municipalities ascending by collated name.
///
/// Stable sort; names are unique keys so ties cannot occur, but stability
/// keeps the operation deterministic regardless.
pub fn sort_by_name(records: &mut [Municipality]) {
    records.sort_by(|a, b| compare(&a.name, &b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Municipality {
        Municipality {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_caron_letters_follow_their_base() {
        assert_eq!(compare("Celje", "Črnomelj"), Ordering::Less);
        assert_eq!(compare("Črnomelj", "Domžale"), Ordering::Less);
        assert_eq!(compare("Sevnica", "Šentjur"), Ordering::Less);
        assert_eq!(compare("Šentjur", "Tolmin"), Ordering::Less);
        assert_eq!(compare("Zagorje ob Savi", "Žalec"), Ordering::Less);
    }

    #[test]
    fn test_plain_alphabetical_order() {
        assert_eq!(compare("Ajdovščina", "Bled"), Ordering::Less);
        assert_eq!(compare("Bled", "Bovec"), Ordering::Less);
        assert_eq!(compare("Nova Gorica", "Novo mesto"), Ordering::Less);
    }

    #[test]
    fn test_compare_is_reflexive_and_antisymmetric() {
        assert_eq!(compare("Bled", "Bled"), Ordering::Equal);
        assert_eq!(compare("Bovec", "Bled"), Ordering::Greater);
    }

    #[test]
    fn test_sort_by_name_orders_whole_dataset() {
        let mut records = vec![
            named("Žalec"),
            named("Črnomelj"),
            named("Celje"),
            named("Šentjur"),
            named("Domžale"),
        ];
        sort_by_name(&mut records);
        let names: Vec<&str> = records.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Celje", "Črnomelj", "Domžale", "Šentjur", "Žalec"]
        );
    }
}

// src/locale.rs

//! Russian month-name vocabularies.
//!
//! The archive uses two grammatical forms in different payloads: the
//! catalog's month index carries stand-alone names ("Март"), while issue
//! titles carry genitive names ("марта", as in "12 марта, 1905"). The two
//! lists must stay separate; conflating them would match the wrong form in
//! the wrong context.

/// Stand-alone month names as served by the catalog endpoint.
const STAND_ALONE_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Genitive month names as they appear inside issue titles.
const GENITIVE_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Resolve a stand-alone month name to its 1-based ordinal.
///
/// Returns `None` for names outside the vocabulary; callers must treat
/// that as an unresolved month, not default it.
pub fn stand_alone_month_number(name: &str) -> Option<u32> {
    STAND_ALONE_MONTHS
        .iter()
        .position(|&m| m == name)
        .map(|i| i as u32 + 1)
}

/// Resolve a genitive month name to its 1-based ordinal.
pub fn genitive_month_number(name: &str) -> Option<u32> {
    GENITIVE_MONTHS
        .iter()
        .position(|&m| m == name)
        .map(|i| i as u32 + 1)
}

/// Regex alternation over the genitive names, for the date extractor.
///
/// Keeping this next to the table guarantees the date pattern and the
/// resolver share one vocabulary.
pub(crate) fn genitive_month_pattern() -> String {
    GENITIVE_MONTHS.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stand_alone_months_resolve_in_order() {
        for (i, name) in STAND_ALONE_MONTHS.iter().enumerate() {
            assert_eq!(stand_alone_month_number(name), Some(i as u32 + 1));
        }
    }

    #[test]
    fn test_genitive_months_resolve_in_order() {
        for (i, name) in GENITIVE_MONTHS.iter().enumerate() {
            assert_eq!(genitive_month_number(name), Some(i as u32 + 1));
        }
    }

    #[test]
    fn test_unknown_name_is_unresolved() {
        assert_eq!(stand_alone_month_number("March"), None);
        assert_eq!(stand_alone_month_number(""), None);
        assert_eq!(genitive_month_number("Март"), None);
    }

    #[test]
    fn test_forms_are_not_interchangeable() {
        // Stand-alone names must not resolve through the genitive table.
        assert_eq!(genitive_month_number("Январь"), None);
        assert_eq!(stand_alone_month_number("января"), None);
        // "мая" vs "Май" differ in more than case, but check the one pair
        // where the forms are closest.
        assert_eq!(stand_alone_month_number("мая"), None);
    }
}

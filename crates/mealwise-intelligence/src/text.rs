// ABOUTME: Text normalization helpers shared by extraction and aggregation
// ABOUTME: Word-boundary title casing and case-insensitive name keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Title-case a food name
///
/// A letter is upper-cased when the character before it is not a letter and
/// lower-cased otherwise, so `"omega-3 eggs"` becomes `"Omega-3 Eggs"` and
/// `"CHICKEN breast"` becomes `"Chicken Breast"`. Surrounding whitespace is
/// trimmed.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut previous_is_letter = false;

    for ch in name.trim().chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }

    result
}

/// Key used for case-insensitive name comparison
#[must_use]
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("chicken breast"), "Chicken Breast");
        assert_eq!(title_case("CHICKEN breast"), "Chicken Breast");
        assert_eq!(title_case("  tofu "), "Tofu");
    }

    #[test]
    fn test_title_case_after_non_letters() {
        assert_eq!(title_case("omega-3 eggs"), "Omega-3 Eggs");
        assert_eq!(title_case("3-bean chili"), "3-Bean Chili");
    }

    #[test]
    fn test_name_key_ignores_case() {
        assert_eq!(name_key("Chicken Breast"), name_key("chicken breast "));
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

/// Generates `n` distinct jump labels from `hint_chars`, shortest first.
///
/// All one-character labels are handed out before any two-character label, so with
/// `k` characters the first `k` targets are reachable with a single key press.
pub(crate) fn gen_labels(n: usize, hint_chars: &str) -> Vec<String> {
    let alphabet: Vec<char> = hint_chars.chars().collect();
    assert!(!alphabet.is_empty(), "hint_chars must not be empty");
    let unique: HashSet<char> = alphabet.iter().copied().collect();
    assert_eq!(unique.len(), alphabet.len(), "hint_chars must not contain duplicate characters");

    let k = alphabet.len();
    if k == 1 {
        return (1..=n).map(|len| alphabet[0].to_string().repeat(len)).collect();
    }

    let mut labels = Vec::with_capacity(n);
    let mut len = 1u32;
    while labels.len() < n {
        let count_len = k.saturating_pow(len);
        let to_take = (n - labels.len()).min(count_len);
        for i in 0..to_take {
            let mut x = i;
            let mut chars = vec![alphabet[0]; len as usize];
            for slot in chars.iter_mut().rev() {
                *slot = alphabet[x % k];
                x /= k;
            }
            labels.push(chars.into_iter().collect());
        }
        len += 1;
    }
    labels
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::gen_labels;

    #[test]
    fn single_key_labels_first() {
        assert_eq!(gen_labels(3, "asd"), vec!["a", "s", "d"]);
    }

    #[test]
    fn overflow_uses_two_key_labels() {
        let labels = gen_labels(5, "as");
        assert_eq!(labels, vec!["a", "s", "aa", "as", "sa"]);
    }

    #[test]
    fn labels_are_unique() {
        let labels = gen_labels(40, "asdfghl");
        let unique: HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn zero_targets_yield_no_labels() {
        assert!(gen_labels(0, "asd").is_empty());
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn rejects_duplicate_alphabet() {
        gen_labels(2, "aa");
    }
}

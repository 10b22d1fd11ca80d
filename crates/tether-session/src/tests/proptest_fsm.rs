//! Property-based checks of the completion protocol.
//!
//! Random partial codes and attempt sequences; after every query the
//! structural invariants of the candidate list must hold.

use proptest::prelude::*;

use tether_core::code::ChannelId;
use tether_core::wordlist::{self, Parity};

use super::{all_matches, counting_fetch};
use crate::{ChannelFetch, CodeCompleter};

fn word_completer(code_length: usize) -> CodeCompleter {
    // A word query that touches the channel source is a bug; make it loud.
    let fetch: ChannelFetch = Box::new(|| Err("unexpected channel fetch".into()));
    CodeCompleter::new(None, fetch, code_length)
}

proptest! {
    #[test]
    fn word_candidates_honor_the_protocol(
        id in 0u32..1000,
        stems in proptest::collection::vec("[a-z]{1,10}", 0..3),
        fragment in "[a-z]{0,3}",
        code_length in 0usize..4,
    ) {
        let mut pieces = vec![id.to_string()];
        pieces.extend(stems);
        pieces.push(fragment.clone());
        let text = pieces.join("-");
        let n = pieces.len();
        let stem_prefix = format!("{}-", pieces[..n - 1].join("-"));

        let mut c = word_completer(code_length);
        let matches = all_matches(&mut c, &text);

        let parity = Parity::of_token_count(n);
        let expected_count = wordlist::lowercase_words(parity)
            .iter()
            .filter(|w| w.starts_with(&fragment))
            .count();
        prop_assert_eq!(matches.len(), expected_count);

        let mut sorted = matches.clone();
        sorted.sort();
        prop_assert_eq!(&matches, &sorted);

        for m in &matches {
            prop_assert!(m.starts_with(&stem_prefix), "{} should extend {}", m, stem_prefix);

            let wants_separator = n < 1 + code_length;
            prop_assert_eq!(m.ends_with('-'), wants_separator);

            let word = m[stem_prefix.len()..].trim_end_matches('-');
            prop_assert!(word.starts_with(&fragment));
            prop_assert!(
                wordlist::byte_for_word(parity, word).is_some(),
                "{} is not in the {:?} table", word, parity
            );
        }

        // Exhaustion is sticky: one past the end stays None.
        prop_assert!(c.complete(&text, matches.len()).unwrap().is_none());
        prop_assert!(c.complete(&text, matches.len() + 17).unwrap().is_none());
    }

    #[test]
    fn repeated_word_queries_are_stable(
        id in 0u32..100,
        fragment in "[a-z]{0,2}",
        code_length in 1usize..4,
    ) {
        let text = format!("{id}-{fragment}");
        let mut c = word_completer(code_length);
        let first = all_matches(&mut c, &text);
        let second = all_matches(&mut c, &text);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn channel_candidates_match_the_live_listing(
        ids in proptest::collection::vec(0u32..200, 0..8),
        fragment in "[0-9]{0,3}",
        code_length in 0usize..3,
    ) {
        let (fetch, _) = counting_fetch(ids.clone());
        let mut c = CodeCompleter::new(None, fetch, code_length);

        let expected: Vec<String> = ids
            .iter()
            .map(ChannelId::to_string)
            .filter(|id| id.starts_with(&fragment))
            .map(|id| {
                if code_length > 0 {
                    format!("{id}-")
                } else {
                    id
                }
            })
            .collect();

        prop_assert_eq!(all_matches(&mut c, &fragment), expected);
    }
}

//! Pairing-code generation and channel-id extraction.

use std::num::ParseIntError;

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::wordlist::{self, Parity};

/// Separator between the channel id and each word of a code.
pub const CODE_SEPARATOR: &str = "-";

/// Numeric label of an open pairing channel, rendered as decimal text in
/// codes.
pub type ChannelId = u32;

#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    #[error("invalid channel id {token:?} in code")]
    InvalidChannelId {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Build a fresh `<channel-id>-<word>-…` code with `code_length` words.
///
/// Each word encodes one byte from OS entropy, drawn from the odd table at
/// even word indices and the even table at odd ones, lowercased. The shape
/// is deterministic; the words are not.
pub fn make_code(channel_id: &str, code_length: usize) -> String {
    make_code_with_rng(channel_id, code_length, &mut OsRng)
}

/// [`make_code`] with an injected byte source.
pub fn make_code_with_rng(
    channel_id: &str,
    code_length: usize,
    rng: &mut dyn RngCore,
) -> String {
    let mut code = String::from(channel_id);
    let mut byte = [0u8; 1];
    for i in 0..code_length {
        rng.fill_bytes(&mut byte);
        let word = wordlist::word_for_byte(Parity::of_word_index(i), byte[0]);
        code.push_str(CODE_SEPARATOR);
        code.push_str(&word.to_ascii_lowercase());
    }
    debug!(code_length, "generated pairing code");
    code
}

/// Parse the leading decimal token of a code.
pub fn extract_channel_id(code: &str) -> Result<ChannelId, CodeError> {
    let token = code.split(CODE_SEPARATOR).next().unwrap_or("");
    token.parse().map_err(|source| CodeError::InvalidChannelId {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn code_shape_and_parity() {
        let code = make_code("42", 4);
        let pieces: Vec<&str> = code.split(CODE_SEPARATOR).collect();
        assert_eq!(pieces.len(), 5);
        assert_eq!(pieces[0], "42");
        for (i, word) in pieces[1..].iter().enumerate() {
            let parity = Parity::of_word_index(i);
            assert!(
                wordlist::byte_for_word(parity, word).is_some(),
                "{word} is not a word of its position's table"
            );
            assert_eq!(*word, word.to_ascii_lowercase());
        }
    }

    #[test]
    fn zero_length_code_is_just_the_channel_id() {
        assert_eq!(make_code("42", 0), "42");
    }

    #[test]
    fn fixed_bytes_give_fixed_words() {
        // StepRng yields bytes 0, 1, 2: odd[0], even[1], odd[2].
        let mut rng = StepRng::new(0, 1);
        assert_eq!(
            make_code_with_rng("7", 3, &mut rng),
            "7-adroitness-absurd-aftermath"
        );
    }

    #[test]
    fn extract_round_trips_generated_codes() {
        for k in 0..5 {
            let code = make_code("42", k);
            assert_eq!(extract_channel_id(&code).unwrap(), 42);
        }
    }

    #[test]
    fn extract_rejects_non_decimal_leading_token() {
        for code in ["one-two", "", "-5-adroitness", "4x-aardvark"] {
            let err = extract_channel_id(code).unwrap_err();
            assert!(matches!(err, CodeError::InvalidChannelId { .. }), "{code}");
        }
    }

    #[test]
    fn extract_ignores_everything_after_the_first_token() {
        assert_eq!(extract_channel_id("31-not-even-words").unwrap(), 31);
        assert_eq!(extract_channel_id("31").unwrap(), 31);
    }
}

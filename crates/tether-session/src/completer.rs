//! The matching algorithm behind [`CodeCompleter::complete`].

use tracing::{debug, debug_span, error};

use tether_core::code::CODE_SEPARATOR;
use tether_core::wordlist::{self, Parity};

use crate::{CodeCompleter, CompleteError};

impl CodeCompleter {
    /// Candidate number `attempt` for the partial code `text`, or
    /// `Ok(None)` when the candidates are exhausted.
    ///
    /// Failures are logged here before they propagate: line editors
    /// conventionally discard completer errors, which would show up only
    /// as "no completions appear".
    pub fn complete(
        &mut self,
        text: &str,
        attempt: usize,
    ) -> Result<Option<String>, CompleteError> {
        match self.next_match(text, attempt) {
            Ok(m) => Ok(m),
            Err(e) => {
                error!(text, attempt, error = %e, "completion failed");
                Err(e)
            }
        }
    }

    fn next_match(
        &mut self,
        text: &str,
        attempt: usize,
    ) -> Result<Option<String>, CompleteError> {
        let pieces: Vec<&str> = text.split(CODE_SEPARATOR).collect();
        let last = pieces.last().copied().unwrap_or("").to_ascii_lowercase();

        // The cache only covers word queries. A single-token query is
        // recomputed even for identical text, so the channel listing
        // stays fresh.
        let cached = self.last_text.as_deref() == Some(text) && pieces.len() >= 2;
        if !cached {
            let _span = debug_span!("recompute_matches", text, n = pieces.len()).entered();
            let matches = if pieces.len() <= 1 {
                let ids = self.channels.next().map_err(CompleteError::Channels)?;
                ids.iter()
                    .map(|id| id.to_string())
                    .filter(|id| id.starts_with(&last))
                    .collect()
            } else {
                let parity = Parity::of_token_count(pieces.len());
                let mut so_far = pieces[..pieces.len() - 1].join(CODE_SEPARATOR);
                so_far.push_str(CODE_SEPARATOR);
                let mut matches: Vec<String> = wordlist::lowercase_words(parity)
                    .iter()
                    .filter(|word| word.starts_with(&last))
                    .map(|word| format!("{so_far}{word}"))
                    .collect();
                matches.sort();
                matches
            };
            debug!(count = matches.len(), "fresh matches");
            self.last_text = Some(text.to_string());
            self.last_matches = matches;
        }

        let Some(m) = self.last_matches.get(attempt) else {
            return Ok(None);
        };
        let mut m = m.clone();
        if pieces.len() < 1 + self.code_length {
            // More tokens remain; let the user keep typing immediately.
            m.push_str(CODE_SEPARATOR);
        }
        Ok(Some(m))
    }
}

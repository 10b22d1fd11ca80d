//! One-shot completion enumeration, for diagnostics and scripting.

use std::process;

use serde::Serialize;

use tether_core::code::ChannelId;
use tether_session::{ChannelFetch, CodeCompleter};

#[derive(Debug, Serialize)]
struct CompletionReport<'a> {
    text: &'a str,
    matches: Vec<String>,
}

/// Drive the attempt-index protocol to exhaustion and print every
/// candidate, in the order an interactive cycle would produce them.
pub fn complete(text: &str, channels: Vec<ChannelId>, length: usize, json: bool) {
    // Single-token queries re-fetch on every attempt, so the fetch must
    // hand back the same listing each time for a coherent enumeration.
    let fetch: ChannelFetch = Box::new(move || Ok(channels.clone()));
    let mut completer = CodeCompleter::new(None, fetch, length);

    let mut matches = Vec::new();
    for attempt in 0.. {
        match completer.complete(text, attempt) {
            Ok(Some(m)) => matches.push(m),
            Ok(None) => break,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }

    if json {
        let report = CompletionReport { text, matches };
        println!(
            "{}",
            serde_json::to_string(&report).expect("JSON serialization failed")
        );
    } else {
        for m in &matches {
            println!("{m}");
        }
    }
}

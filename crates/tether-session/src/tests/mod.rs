mod proptest_fsm;

use std::cell::Cell;
use std::rc::Rc;

use tether_core::code::ChannelId;

use super::{ChannelFetch, CodeCompleter};

/// Live fetch stub that counts how often it is consulted.
pub(super) fn counting_fetch(ids: Vec<ChannelId>) -> (ChannelFetch, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let fetch: ChannelFetch = Box::new(move || {
        counter.set(counter.get() + 1);
        Ok(ids.clone())
    });
    (fetch, count)
}

pub(super) fn completer(ids: Vec<ChannelId>, code_length: usize) -> CodeCompleter {
    let (fetch, _) = counting_fetch(ids);
    CodeCompleter::new(None, fetch, code_length)
}

/// Drive the attempt-index protocol to exhaustion for `text`.
pub(super) fn all_matches(c: &mut CodeCompleter, text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for attempt in 0.. {
        match c.complete(text, attempt).expect("completion should not fail") {
            Some(m) => out.push(m),
            None => break,
        }
    }
    out
}

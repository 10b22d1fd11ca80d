//! Interactive code entry with completion.

use std::io;
use std::process;

use tether_core::code::ChannelId;
use tether_core::settings::settings;
use tether_session::{ChannelFetch, CodeCompleter};

use crate::prompt;

/// Read one code interactively and print it on stdout.
///
/// The supplied listing doubles as the initial snapshot and the live
/// source; a host with a real relay connection would pass a live fetch
/// instead.
pub fn input(channels: Vec<ChannelId>, length: usize, prompt_override: Option<String>) {
    let prompt_text =
        prompt_override.unwrap_or_else(|| settings().input.prompt.clone());

    let initial = channels.clone();
    let fetch: ChannelFetch = Box::new(move || Ok(channels.clone()));
    let mut completer = CodeCompleter::new(Some(initial), fetch, length);

    match prompt::read_code(&mut completer, &prompt_text) {
        Ok(code) => println!("{code}"),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            process::exit(130);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

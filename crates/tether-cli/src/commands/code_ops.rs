//! Code generation and parsing subcommands.

use std::process;

use serde::Serialize;

use tether_core::code::{extract_channel_id, make_code, ChannelId};

#[derive(Debug, Serialize)]
struct GeneratedCode<'a> {
    channel_id: &'a str,
    length: usize,
    code: String,
}

#[derive(Debug, Serialize)]
struct ParsedCode<'a> {
    code: &'a str,
    channel_id: ChannelId,
}

pub fn generate(channel: &str, length: usize, json: bool) {
    // The generator's contract wants decimal text; reject anything else
    // here rather than emitting an unjoinable code.
    if channel.parse::<ChannelId>().is_err() {
        eprintln!("channel id must be a decimal integer, got {channel:?}");
        process::exit(1);
    }

    let code = make_code(channel, length);
    if json {
        let entry = GeneratedCode {
            channel_id: channel,
            length,
            code,
        };
        println!(
            "{}",
            serde_json::to_string(&entry).expect("JSON serialization failed")
        );
    } else {
        println!("{code}");
    }
}

pub fn parse(code: &str, json: bool) {
    match extract_channel_id(code) {
        Ok(channel_id) => {
            if json {
                let entry = ParsedCode { code, channel_id };
                println!(
                    "{}",
                    serde_json::to_string(&entry).expect("JSON serialization failed")
                );
            } else {
                println!("{channel_id}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

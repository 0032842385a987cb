//! Reads one OneBot frame per line from stdin and prints what it decodes to.
//!
//! ```sh
//! echo '{"post_type":"message","message_type":"private","user_id":2,"message":"hi"}' \
//!     | cargo run --example decode_lines
//! ```

use std::io::BufRead;

use onebot_event::{Decoder, DecoderConfig, EventT, Frame, ONEBOT};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target(ONEBOT, LevelFilter::DEBUG)
        .with_default(LevelFilter::INFO);
    use tracing_subscriber::{
        prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, Layer,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();

    let decoder = Decoder::new(DecoderConfig::default());
    for line in std::io::stdin().lock().lines().map_while(Result::ok) {
        if line.trim().is_empty() {
            continue;
        }
        match decoder.decode(&line) {
            Some(Frame::Event(event)) => {
                println!("{} to_me={}", event.event_name(), event.is_to_me())
            }
            Some(Frame::ActionResp(resp)) => println!("action response retcode={}", resp.retcode),
            None => println!("rejected"),
        }
    }
}

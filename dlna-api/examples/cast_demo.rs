//! Cast a media URL to a renderer and poll its position
//!
//! Usage: cargo run --example cast_demo -- <control-url> <media-url> <mime> [title]
//!
//! The control URL comes from your discovery layer (the `controlURL` of the
//! device's AVTransport service, joined onto its base URL).

use std::sync::mpsc;
use std::time::Duration;

use dlna_api::{DlnaRenderer, MediaControl, MediaDescriptor, MediaPlayer};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dlna_api=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let (control_url, media_url, mime) = match (args.next(), args.next(), args.next()) {
        (Some(c), Some(m), Some(t)) => (c, m, t),
        _ => {
            eprintln!("usage: cast_demo <control-url> <media-url> <mime> [title]");
            std::process::exit(2);
        }
    };
    let title = args.next().unwrap_or_else(|| "dlna-api demo".to_string());

    let renderer = DlnaRenderer::new(control_url);
    let media = MediaDescriptor::new(media_url, mime, title);

    let (tx, rx) = mpsc::channel();
    renderer.play_media(&media, false, Box::new(move |result| tx.send(result).unwrap()));

    let session = match rx.recv().expect("listener dropped") {
        Ok(session) => {
            println!("launched ({:?})", session.kind());
            session
        }
        Err(error) => {
            eprintln!("launch failed: {error}");
            std::process::exit(1);
        }
    };

    // Poll the position a few times, then stop playback again.
    for _ in 0..5 {
        std::thread::sleep(Duration::from_secs(2));

        let (tx, rx) = mpsc::channel();
        renderer.position(Box::new(move |result| tx.send(result).unwrap()));
        match rx.recv().expect("listener dropped") {
            Ok(millis) => println!("position: {}ms", millis),
            Err(error) => eprintln!("position query failed: {error}"),
        }
    }

    let (tx, rx) = mpsc::channel();
    renderer.close_media(&session, Box::new(move |result| tx.send(result).unwrap()));
    match rx.recv().expect("listener dropped") {
        Ok(()) => println!("stopped"),
        Err(error) => eprintln!("stop failed: {error}"),
    }
}

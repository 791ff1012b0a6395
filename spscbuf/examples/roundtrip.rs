use std::collections::VecDeque;

use spscbuf::{Result, Ring};
use tracing::{debug, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut storage = [0u8; 256];
    let mut ring = Ring::new(&mut storage);

    let mut pending: VecDeque<usize> = VecDeque::new();
    let mut sequence = 0u64;
    let mut delivered = 0u64;

    while delivered < 10_000 {
        let body = format!(
            "record {sequence} payload {}",
            "x".repeat((sequence % 40) as usize)
        );
        match ring.produce(body.as_bytes()) {
            Ok(()) => {
                pending.push_back(body.len());
                sequence += 1;
            }
            Err(error) => {
                debug!(%error, "ring full, draining one record");
                let len = pending.pop_front().expect("refused while empty");
                let record = &ring.peek()[..len];
                assert!(record.starts_with(b"record "));
                ring.consume(len);
                delivered += 1;
            }
        }
    }

    info!(delivered, capacity = ring.capacity(), "round trip complete");
    Ok(())
}

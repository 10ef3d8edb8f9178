//! Two short runs of the progress bar.
//!
//! ```bash
//! cargo run --example replication
//! ```

use std::thread;
use std::time::Duration;

use polybar::ProgressBar;

fn main() {
    // Header sets the width; unknown bases pair with N
    println!("Example 1: Header-width progress bar");
    let mut bar = ProgressBar::new("ATCG-NRZA-GCTA", "PROCESSING-DATA");
    bar.start(50);
    for _ in 0..50 {
        thread::sleep(Duration::from_millis(100));
        bar.update();
    }
    bar.finish();

    thread::sleep(Duration::from_secs(1));

    // No header: the sequence length is the width
    println!("\nExample 2: Sequence-width progress bar");
    let mut bar = ProgressBar::new("ATCGATCGTTAACCGG", "");
    bar.start(100);
    for i in 0..10 {
        thread::sleep(Duration::from_millis(200));
        bar.set_progress((i + 1) * 10);
    }
    bar.finish();
}

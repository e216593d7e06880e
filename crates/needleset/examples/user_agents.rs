//! Example: classifying user agents across threads
//!
//! Builds one matcher over a browser/bot keyword dictionary and shares it
//! across worker threads with Arc. Only the read-only scan entry points are
//! used, so no synchronization is needed.

use needleset::Matcher;
use std::sync::Arc;
use std::thread;

const KEYWORDS: [&str; 8] = [
    "Mozilla",
    "Macintosh",
    "Windows",
    "Safari",
    "Chrome",
    "Firefox",
    "Googlebot",
    "bingbot",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== User-Agent Classification Demo ===\n");

    let matcher = Arc::new(Matcher::new(KEYWORDS)?);

    let user_agents: Vec<&[u8]> = vec![
        b"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/30.0.1599.101 Safari/537.36",
        b"Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/115.0",
        b"Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        b"Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
        b"curl/8.4.0",
    ];

    let handles: Vec<_> = user_agents
        .into_iter()
        .enumerate()
        .map(|(i, user_agent)| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                let hits = matcher.matches_thread_safe(user_agent);
                println!(
                    "Thread {}: {} keyword(s) in: {}",
                    i,
                    hits.len(),
                    String::from_utf8_lossy(user_agent)
                );
                for hit in &hits {
                    println!(
                        "  - {} (ends at byte {})",
                        KEYWORDS[hit.pattern as usize], hit.end
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    Ok(())
}

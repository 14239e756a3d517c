//! Parsing and rendering from many threads at once.

use std::thread;

use colorcode::Color;

#[test]
fn test_parallel_parse() {
    let codes = ["#7a8f0e", "rgb(122, 143, 14)", "hsl(70, 82%, 31%)"];

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let code = codes[i % codes.len()];
                s.spawn(move || {
                    (0..500)
                        .map(|_| Color::new(code).map(|c| c.hex()))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        for handle in handles {
            let hexes = handle.join().unwrap().unwrap();
            assert!(hexes.iter().all(|h| h == "#7a8f0e"));
        }
    });
}

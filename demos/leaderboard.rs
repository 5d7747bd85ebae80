//! Runs a handful of Human Resource Machine style puzzles.
//!
//! Set `RUST_LOG=bf_bench=debug` to see every candidate being scored, and pass
//! `--json` for machine-readable reports.

use bf_bench::{
    random::{CaseRng, Sfc32},
    Candidate, Case, Puzzle, Report,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let json = std::env::args().any(|arg| arg == "--json");

    println!("# Human Brainfuck Machine Leaderboards");
    for report in reports() {
        println!();
        if json {
            println!("{}", report.to_json()?);
        } else {
            print!("{report}");
        }
    }

    Ok(())
}

fn candidates(entries: &[(&str, &str)]) -> Vec<Candidate> {
    entries.iter().copied().map(Candidate::from).collect()
}

fn reports() -> Vec<Report> {
    vec![
        Puzzle::new("Year 1: Mail Room", 10, |rng: &mut Sfc32| {
            Case::echo(rng.sequence(3, 1, 99))
        })
        .evaluate(&candidates(&[(",.,.,.", "naive"), (",[.,]", "folklore")])),
        Puzzle::new("Year 2: Busy Mail Room", 10, |rng: &mut Sfc32| {
            let n = rng.range(3, 20) as usize;
            Case::echo(rng.sequence(n, 1, 99))
        })
        .evaluate(&candidates(&[(",[.,]", "folklore")])),
        Puzzle::new("Year 3: Copy Floor", 1, |_: &mut Sfc32| {
            Case::new(vec![], vec![66, 85, 71])
        })
        .evaluate(&candidates(&[
            (
                "++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++.+++++++++++++++++++.--------------.",
                "naive",
            ),
            ("+++[->+++++++[->+++>++++<<]<]>>+++.>+.<+++++.", "factored"),
        ])),
        Puzzle::new("Year 4: Scrambler Handler", 10, |rng: &mut Sfc32| {
            let n = rng.range(3, 10) as usize * 2;
            let input = rng.sequence(n, 1, 99);
            let expected = (0..n).map(|i| input[i ^ 1]).collect();
            Case::new(input, expected)
        })
        .evaluate(&candidates(&[(",[>,.<.,]", "naive")])),
        Puzzle::new("Year 5: Coffee Time", 10, |_: &mut Sfc32| Case::default()).evaluate(&[]),
        Puzzle::new("Year 6: Rainy Summer", 10, |rng: &mut Sfc32| {
            let n = rng.range(3, 10) as usize;
            let input = rng.sequence(n * 2, 1, 99);
            let expected = input.chunks_exact(2).map(|pair| pair[0] + pair[1]).collect();
            Case::new(input, expected)
        })
        .evaluate(&candidates(&[(",[>,[-<+>]<.,]", "naive")])),
        Puzzle::new("Year 7: Zero Exterminator", 10, |rng: &mut Sfc32| {
            let n = rng.range(3, 20) as usize;
            let mask = rng.next_uint32();
            let input: Vec<_> = (0..n)
                .map(|i| {
                    if (mask >> i) & 1 == 1 {
                        u64::from(rng.range(2, 99))
                    } else {
                        1
                    }
                })
                .collect();
            let expected = input.iter().copied().filter(|&x| x != 1).collect();
            Case::new(input, expected)
        })
        .evaluate(&candidates(&[
            (",[-[+.[-]],]", "naive"),
            (",[-[+.>],]", "wasteful"),
        ])),
        Puzzle::new("Year 8: Tripler Room", 10, |rng: &mut Sfc32| {
            let n = rng.range(3, 20) as usize;
            let input = rng.sequence(n, 1, 99);
            let expected = input.iter().map(|x| x * 3).collect();
            Case::new(input, expected)
        })
        .evaluate(&candidates(&[
            (",[[->+++<]>.[-]<,]", "naive"),
            (",[[->+++<]>.,]", "wasteful"),
        ])),
    ]
}

//! Print the full chemistry table, then the match lists of one type.
//!
//! ```bash
//! cargo run --example chemistry_table --features std -- LAEF
//! ```

use sayu_chemistry::query::{self, DEFAULT_CHALLENGING, DEFAULT_MATCHES};
use sayu_chemistry::{ChemistryLevel, ChemistryMatrix, PairKey, PersonalityType};

fn main() {
    let code = std::env::args().nth(1).unwrap_or_else(|| "LAEF".to_string());
    let focus = match PersonalityType::from_code(&code) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let matrix = ChemistryMatrix::shared();
    let mut rows: Vec<_> = matrix.iter().collect();
    rows.sort_by_key(|s| PairKey::new(s.type_a, s.type_b));

    println!("{:<10} {:>7} {:>5}  {:<9} differing", "pair", "total", "pct", "level");
    for s in &rows {
        let axes: Vec<&str> = s.differing.iter().map(|a| a.name()).collect();
        println!(
            "{:<10} {:>7.2} {:>4}%  {:<9} {}",
            PairKey::new(s.type_a, s.type_b).to_string(),
            s.total,
            s.percentage,
            s.level.as_str(),
            axes.join(",")
        );
    }

    println!();
    for level in ChemistryLevel::ALL {
        let n = rows.iter().filter(|s| s.level == level).count();
        println!("{:<9} {n:>3} pairs", level.as_str());
    }

    let print = |title: &str, list: query::MatchList| {
        println!("\n{title} for {focus}:");
        for m in &list {
            println!("  {}  {:>6.2}  {}", m.partner, m.score.total, m.score.level);
        }
    };
    print("best", query::best_matches(focus, DEFAULT_MATCHES));
    print("worst", query::worst_matches(focus, DEFAULT_MATCHES));
    print("challenging", query::challenging_matches(focus, DEFAULT_CHALLENGING));
}

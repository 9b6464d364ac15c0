use chain_dict::ComparerKind;
use chain_dict::scenario::Scenario;
use clap::Parser;
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Comparer {
    Default,
    Ordinal,
    OrdinalIgnoreCase,
}

impl From<Comparer> for ComparerKind {
    fn from(value: Comparer) -> Self {
        match value {
            Comparer::Default => ComparerKind::Default,
            Comparer::Ordinal => ComparerKind::Ordinal,
            Comparer::OrdinalIgnoreCase => ComparerKind::OrdinalIgnoreCase,
        }
    }
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "comparer", value_enum, default_value_t = Comparer::Ordinal)]
    comparer: Comparer,

    #[arg(short = 'n', long = "n", default_value_t = 1000)]
    n: usize,

    #[arg(long = "collisions")]
    collisions: bool,
}

fn main() {
    let args = Args::parse();
    let scenario = Scenario::new(args.comparer.into(), args.n, args.collisions);

    println!("Preparing scenario: {scenario}");
    let prepared = scenario.setup();
    let map = prepared.map();

    println!("Inserted {} keys, capacity {}", map.len(), map.capacity());
    println!(
        "Hits: {}/{}, misses found: {}/{}",
        prepared.count_present(),
        map.len(),
        prepared.count_absent(),
        prepared.misses().len()
    );

    let histogram = map.chain_histogram();
    let buckets: usize = histogram.iter().sum();
    println!("=== Chain Length Histogram ===");
    for (length, count) in histogram.iter().enumerate().filter(|(_, count)| **count > 0) {
        println!(
            "{length:>4}: {count:>8} ({:.2}%)",
            *count as f64 / buckets as f64 * 100.0
        );
    }

    map.debug_stats().print();
}

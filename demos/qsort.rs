use qsort3::{qsort_counted, sort_range, Last, Leftmost, MedianOfThree, RandomPivot, SortStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const LEN: usize = 100_000;

fn main() {
    let mut rng = StdRng::seed_from_u64(2017);
    let few_distinct: Vec<u32> = (0..LEN).map(|_| rng.gen_range(0..16)).collect();
    let ascending: Vec<u32> = (0..LEN as u32).collect();

    for (name, input) in [("few distinct", &few_distinct), ("ascending", &ascending)] {
        println!("{name} ({LEN} keys)");
        report("random", input, |v| qsort_counted(v, &mut RandomPivot::seeded(7)));
        report("first", input, |v| qsort_counted(v, &mut Leftmost));
        report("last", input, |v| qsort_counted(v, &mut Last));
        report("median", input, |v| qsort_counted(v, &mut MedianOfThree));
    }

    let mut part = [4, 9, 1, 3, 2];
    sort_range(&mut part, 1, 3, &mut RandomPivot::thread()).expect("range is in bounds");
    assert_eq!(part, [4, 1, 3, 9, 2]);
    println!("sorted [1, 3] of [4, 9, 1, 3, 2]: {part:?}");
}

fn report(pivot: &str, input: &[u32], sort: impl FnOnce(&mut [u32]) -> SortStats) {
    let mut v = input.to_vec();
    let stats = sort(&mut v);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
    println!(
        "  {pivot:>6}: {:>10} comparisons {:>10} swaps",
        stats.comparisons, stats.swaps
    );
}

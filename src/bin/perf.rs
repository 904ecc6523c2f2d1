use rand::{prelude::random, rngs::SmallRng, Rng, SeedableRng};
use structopt::StructOpt;

use std::time;

use rbmap::TreeMap;

/// Command line options.
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(long = "seed")]
    seed: Option<u64>,

    #[structopt(long = "loads", default_value = "1000000")] // default 1M
    loads: usize,

    #[structopt(long = "sets", default_value = "0")]
    sets: usize,

    #[structopt(long = "dels", default_value = "0")]
    dels: usize,

    #[structopt(long = "gets", default_value = "0")]
    gets: usize,
}

fn main() {
    let opts = Opt::from_args();
    let seed = opts.seed.unwrap_or_else(random);
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut index: TreeMap<u64, u64> = TreeMap::new();

    // initial load
    let start = time::Instant::now();
    for _i in 0..opts.loads {
        let (key, val): (u64, u64) = (rng.gen(), rng.gen());
        index.set(key, val);
    }

    println!("loaded {} items in {:?}", opts.loads, start.elapsed());

    // incremental workload, the map is single threaded by contract.
    let start = time::Instant::now();
    let total = opts.sets + opts.dels + opts.gets;
    let mut n = total;
    while n > 0 {
        let op = rng.gen::<usize>() % total;

        let key = rng.gen::<u64>();
        if op < opts.sets {
            let val = rng.gen::<u64>();
            index.set(key, val);
        } else if op < (opts.sets + opts.dels) {
            index.remove(&key);
        } else {
            index.get(&key);
        }
        n -= 1;
    }
    println!("incremental for operations {}, took {:?}", total, start.elapsed());

    let start = time::Instant::now();
    let mut n = 0;
    let mut iter = index.iter();
    while iter.valid() {
        n += 1;
        iter.next();
    }
    println!("iter for iterating {}, took {:?}", n, start.elapsed());

    index.validate().expect("invalid tree");
}

//! Run a batch of scenario cases against one priority queue implementation
//! and report per-case timing and counters, plus a run total.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::LevelFilter;

use pathlab::{dijkstra_single, load_scen, BucketPQ, GridMap, HeapPQ, PriorityQueue, STOCPQ};

/// Which queue to use for a run. Selected on the command line by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum PqKind {
    Heap,
    Bucket,
    Stoc,
}

/// A `Box<dyn PriorityQueue>` would work just as well; this enum avoids the
/// dynamic dispatch and vtable indirection on the hot path.
enum AnyQueue {
    Heap(HeapPQ),
    Bucket(BucketPQ),
    Stoc(STOCPQ),
}

impl PriorityQueue for AnyQueue {
    fn reserve(&mut self, n: usize) {
        match self {
            AnyQueue::Heap(q) => q.reserve(n),
            AnyQueue::Bucket(q) => q.reserve(n),
            AnyQueue::Stoc(q) => q.reserve(n),
        }
    }
    fn clear(&mut self) {
        match self {
            AnyQueue::Heap(q) => q.clear(),
            AnyQueue::Bucket(q) => q.clear(),
            AnyQueue::Stoc(q) => q.clear(),
        }
    }
    fn is_empty(&self) -> bool {
        match self {
            AnyQueue::Heap(q) => q.is_empty(),
            AnyQueue::Bucket(q) => q.is_empty(),
            AnyQueue::Stoc(q) => q.is_empty(),
        }
    }
    fn len(&self) -> usize {
        match self {
            AnyQueue::Heap(q) => q.len(),
            AnyQueue::Bucket(q) => q.len(),
            AnyQueue::Stoc(q) => q.len(),
        }
    }
    fn push(&mut self, u: pathlab::NodeId, k: pathlab::Key) {
        match self {
            AnyQueue::Heap(q) => q.push(u, k),
            AnyQueue::Bucket(q) => q.push(u, k),
            AnyQueue::Stoc(q) => q.push(u, k),
        }
    }
    fn decrease(&mut self, u: pathlab::NodeId, k: pathlab::Key) {
        match self {
            AnyQueue::Heap(q) => q.decrease(u, k),
            AnyQueue::Bucket(q) => q.decrease(u, k),
            AnyQueue::Stoc(q) => q.decrease(u, k),
        }
    }
    fn top(&mut self) -> (pathlab::NodeId, pathlab::Key) {
        match self {
            AnyQueue::Heap(q) => q.top(),
            AnyQueue::Bucket(q) => q.top(),
            AnyQueue::Stoc(q) => q.top(),
        }
    }
    fn pop(&mut self) -> (pathlab::NodeId, pathlab::Key) {
        match self {
            AnyQueue::Heap(q) => q.pop(),
            AnyQueue::Bucket(q) => q.pop(),
            AnyQueue::Stoc(q) => q.pop(),
        }
    }
    fn contains(&self, u: pathlab::NodeId) -> bool {
        match self {
            AnyQueue::Heap(q) => q.contains(u),
            AnyQueue::Bucket(q) => q.contains(u),
            AnyQueue::Stoc(q) => q.contains(u),
        }
    }
    fn key_of(&self, u: pathlab::NodeId) -> Option<pathlab::Key> {
        match self {
            AnyQueue::Heap(q) => q.key_of(u),
            AnyQueue::Bucket(q) => q.key_of(u),
            AnyQueue::Stoc(q) => q.key_of(u),
        }
    }
    fn metrics(&self) -> pathlab::PQMetrics {
        match self {
            AnyQueue::Heap(q) => q.metrics(),
            AnyQueue::Bucket(q) => q.metrics(),
            AnyQueue::Stoc(q) => q.metrics(),
        }
    }
    fn reset_metrics(&mut self) {
        match self {
            AnyQueue::Heap(q) => q.reset_metrics(),
            AnyQueue::Bucket(q) => q.reset_metrics(),
            AnyQueue::Stoc(q) => q.reset_metrics(),
        }
    }
}

fn make_queue(kind: PqKind, allow_diag: bool, stoc_block: usize) -> AnyQueue {
    match kind {
        PqKind::Heap => AnyQueue::Heap(HeapPQ::new()),
        PqKind::Bucket => {
            let w = if allow_diag { 14 } else { 10 };
            AnyQueue::Bucket(BucketPQ::new(w))
        }
        PqKind::Stoc => AnyQueue::Stoc(STOCPQ::new(stoc_block)),
    }
}

#[derive(Debug, Parser)]
#[command(name = "bench_single", about = "Benchmark one priority queue over a scenario batch")]
struct Args {
    /// Path to a MovingAI .map file.
    map: String,
    /// Path to a MovingAI .scen file.
    scen: String,
    /// Which priority queue to benchmark.
    #[arg(value_enum)]
    pq: PqKind,
    /// Number of scenario cases to run; clamped to the file's case count.
    cases: i64,
    /// Use 8-connectivity instead of 4-connectivity.
    #[arg(long, default_value_t = true)]
    allow_diag: bool,
    /// Block size for the STOC queue.
    #[arg(long, default_value_t = STOCPQ::DEFAULT_BLOCK_SIZE)]
    stoc_block: usize,
    /// Enable debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Walk `parent` from `g` back to `s`, counting the number of edges taken.
/// Returns 0 if `g` is unreachable or the parent chain doesn't reach `s`.
fn reconstruct_steps(result: &pathlab::DijkstraResult, s: pathlab::NodeId, g: pathlab::NodeId) -> u32 {
    if result.dist.get(g as usize).copied().unwrap_or(pathlab::INF) == pathlab::INF {
        return 0;
    }
    let mut steps = 0u32;
    let mut v = g;
    while v != s && v != pathlab::INVALID_NODE {
        v = result.parent[v as usize];
        steps += 1;
    }
    if v == pathlab::INVALID_NODE {
        return 0;
    }
    steps
}

/// Decompose a 10/14-scaled path into straight and diagonal move counts:
/// `steps = straight + diag`, `dist = 10*straight + 14*diag`.
fn split_steps_10_14(steps: u32, dist: u32) -> (u32, u32) {
    let tmp = dist as i64 - 10 * steps as i64;
    if tmp < 0 {
        return (steps, 0);
    }
    let mut diag = (tmp / 4) as u32;
    if diag > steps {
        diag = steps;
    }
    (steps - diag, diag)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init();

    let map = GridMap::load(&args.map, args.allow_diag)?;
    let scenarios = load_scen(&args.scen)?;

    let cases = if args.cases <= 0 || args.cases as usize > scenarios.len() {
        scenarios.len()
    } else {
        args.cases as usize
    };

    let mut queue = make_queue(args.pq, args.allow_diag, args.stoc_block);
    let mut total = std::time::Duration::ZERO;

    for (i, case) in scenarios.iter().take(cases).enumerate() {
        let s = map.node_id(case.sx as usize, case.sy as usize);
        let g = map.node_id(case.gx as usize, case.gy as usize);

        queue.reset_metrics();
        let t0 = Instant::now();
        let result = dijkstra_single(&map, s, &mut queue);
        let elapsed = t0.elapsed();
        total += elapsed;

        let dist_g = result.dist[g as usize];
        let steps = reconstruct_steps(&result, s, g);
        let (straight, diag) = split_steps_10_14(steps, dist_g);

        println!(
            "case={i} start=({},{}) goal=({},{}) dist={} steps={} (H={},D={}) time={}us | \
             PQ push={} pop={} dec={} scans={} moves={} | algo relax={} improved={} settled={}",
            case.sx,
            case.sy,
            case.gx,
            case.gy,
            dist_g,
            steps,
            straight,
            diag,
            elapsed.as_micros(),
            result.pq.pushes,
            result.pq.pops,
            result.pq.decreases,
            result.pq.scans,
            result.pq.moves,
            result.algo.relaxations,
            result.algo.improved,
            result.algo.settled,
        );
    }

    let avg = if cases > 0 {
        total.as_secs_f64() * 1000.0 / cases as f64
    } else {
        0.0
    };
    println!("TOTAL {cases} cases: {}ms (avg {avg:.3} ms/case)", total.as_millis());

    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // `--help`/`--version` are not usage errors: let clap print them
            // and exit 0 as usual. Everything else is a usage error, which
            // spec.md §6 fixes at exit code 1 rather than clap's default 2.
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            eprint!("{e}");
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

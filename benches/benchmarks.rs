//! Performance benchmarks for dirtext

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirtext::filter::matches;
use dirtext::test_utils::TestTree;
use dirtext::{PathFilter, PatternSet, TreeOutput, TreeWalker, WalkerConfig};

const GITIGNORE: &str = r#"# Build output
/target/
build/
dist
*.log
*.tmp
node_modules
**/generated/**
docs/**/draft-*.md
!docs/keep/draft-final.md
"#;

/// Discards every node so only walking and filtering are measured.
struct Sink;

impl TreeOutput for Sink {
    fn output_node(
        &mut self,
        _name: &str,
        _is_dir: bool,
        _depth: usize,
        _is_root: bool,
    ) -> std::io::Result<()> {
        Ok(())
    }
}

fn create_test_tree(dir_count: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dir_count {
        for f in 0..files_per_dir {
            tree.add_file(&format!("src/module_{d}/file_{f}.rs"), "");
        }
        tree.add_file(&format!("src/module_{d}/generated/out_{d}.rs"), "");
        tree.add_file(&format!("build/module_{d}.o"), "");
    }
    tree.write_ignore(GITIGNORE);
    tree
}

fn bench_pattern_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_matching");

    group.bench_function("plain_glob", |b| {
        b.iter(|| matches(black_box("src/app/debug.log"), black_box("*.log"), false))
    });

    group.bench_function("interior_segment", |b| {
        b.iter(|| {
            matches(
                black_box("packages/web/node_modules/react/index.js"),
                black_box("node_modules"),
                false,
            )
        })
    });

    group.bench_function("recursive_hit", |b| {
        b.iter(|| {
            matches(
                black_box("src/a/b/c/generated/d/e.rs"),
                black_box("**/generated/**"),
                false,
            )
        })
    });

    group.bench_function("recursive_miss", |b| {
        b.iter(|| {
            matches(
                black_box("src/a/b/c/d/e/f/g/h/i.rs"),
                black_box("**/x/**/y/**/z"),
                false,
            )
        })
    });

    group.finish();
}

fn bench_should_ignore(c: &mut Criterion) {
    let patterns = PatternSet::from_content(GITIGNORE);

    let mut group = c.benchmark_group("should_ignore");

    group.bench_function("kept_path", |b| {
        b.iter(|| patterns.should_ignore(black_box("src/module_3/file_7.rs"), false))
    });

    group.bench_function("negated_path", |b| {
        b.iter(|| patterns.should_ignore(black_box("docs/keep/draft-final.md"), false))
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let tree = create_test_tree(50, 20);
    let filter = PathFilter::new(PatternSet::from_content(GITIGNORE));
    let walker = TreeWalker::new(WalkerConfig::default()).with_filter(filter);

    c.bench_function("walk_1000_files", |b| {
        b.iter(|| walker.walk(black_box(tree.path()), &mut Sink).unwrap())
    });
}

criterion_group!(benches, bench_pattern_matching, bench_should_ignore, bench_walk);
criterion_main!(benches);

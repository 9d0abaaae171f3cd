// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use astree::config::Config;
use astree::pipeline::{run_pipeline, Scene};
use astree::render::{DisplayList, GridSurface, SvgSurface};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

mod fixtures;
mod profiler;

// Group names (`pipeline.load`, `pipeline.svg`, `pipeline.grid`) and case IDs are kept stable so
// results stay comparable over time.
fn benches_pipeline(c: &mut Criterion) {
    let config = Config { max_depth: 1024, ..Config::default() };

    let mut group = c.benchmark_group("pipeline.load");
    for case in fixtures::Case::ALL {
        let text = fixtures::ast_json(case);
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let scene = Scene::load(black_box(&text), &config).expect("load");
                black_box(scene.next_x())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("pipeline.svg");
    for case in fixtures::Case::ALL {
        let text = fixtures::ast_json(case);
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let mut surface = SvgSurface::new();
                run_pipeline(black_box(&text), &mut surface, &config).expect("pipeline");
                black_box(surface.finish().len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("pipeline.grid");
    for case in [fixtures::Case::Small, fixtures::Case::LongChain] {
        let text = fixtures::ast_json(case);
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let mut surface = GridSurface::new(config.grid);
                run_pipeline(black_box(&text), &mut surface, &config).expect("pipeline");
                black_box(surface.finish().len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("pipeline.draw");
    for case in fixtures::Case::ALL {
        let scene = Scene::load(&fixtures::ast_json(case), &config).expect("load");
        group.bench_function(case.id(), |b| {
            b.iter(|| {
                let mut list = DisplayList::new();
                scene.draw(black_box(&mut list)).expect("draw");
                black_box(list.ops().len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_pipeline
}
criterion_main!(benches);

//! Benchmark for sheet frame cost.
//!
//! TARGET: a full update + render well under one 120 Hz frame
//!
//! Run with: cargo bench --package onboard_sheet --bench sheet_benchmark

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onboard_sheet::{Card, CardList, FormFactor, OnboardingConfig, OnboardingSheet, RevealSequencer, RevealTimings};
use onboard_ui::{Badge, Color, InputState, Rect, Text, Theme, UIRenderer, Widget};

fn create_cards(count: usize) -> CardList {
    (0..count)
        .map(|i| {
            Card::new(
                "star.fill",
                format!("Feature {i}"),
                "A short explanation of why this feature is worth a look.",
            )
        })
        .collect()
}

fn create_sheet(count: usize) -> OnboardingSheet<Badge, Text> {
    let config = OnboardingConfig::builder()
        .tint(Color::RED)
        .title("Welcome to Apple Games")
        .icon(Badge::new("gamecontroller.fill", Color::RED))
        .cards(create_cards(count))
        .footer(Text::new("Your gameplay information is used to improve Game Center.").size(11.0))
        .form_factor(FormFactor::Phone)
        .build();
    let mut sheet = OnboardingSheet::new(config, Theme::LIGHT);
    sheet.set_rect(Rect::new(0.0, 0.0, 393.0, 852.0));
    sheet
}

fn benchmark_sequencer(c: &mut Criterion) {
    let timings = RevealTimings::default();

    c.bench_function("reveal_full_timeline_frames", |b| {
        b.iter(|| {
            let mut sequencer = RevealSequencer::new(&timings, FormFactor::Phone, 8);
            sequencer.start();
            while !sequencer.is_finished() {
                black_box(sequencer.advance(1.0 / 60.0));
            }
            sequencer.phase()
        });
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_frame");
    let input = InputState::new();

    for count in [0usize, 3, 12] {
        let mut sheet = create_sheet(count);
        for _ in 0..240 {
            sheet.update(&input, 1.0 / 60.0);
        }
        let mut renderer = UIRenderer::new();

        group.bench_with_input(BenchmarkId::new("update_render", count), &count, |b, _| {
            b.iter(|| {
                sheet.update(black_box(&input), 1.0 / 60.0);
                renderer.begin_frame();
                sheet.render(&mut renderer);
                black_box(renderer.end_frame().commands.len())
            });
        });
    }

    group.finish();
}

fn benchmark_layout(c: &mut Criterion) {
    let mut sheet = create_sheet(12);
    let mut width = 320.0_f32;

    c.bench_function("sheet_relayout_12_cards", |b| {
        b.iter(|| {
            width = if width > 700.0 { 320.0 } else { width + 1.0 };
            sheet.set_rect(Rect::new(0.0, 0.0, black_box(width), 852.0));
        });
    });
}

criterion_group!(benches, benchmark_sequencer, benchmark_frame, benchmark_layout);
criterion_main!(benches);

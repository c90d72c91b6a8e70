//! Benchmarks for note listing and rendering.

#![allow(clippy::format_push_string)]

use std::fs;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio_notebook::Notebook;
use folio_storage::FsStorage;

/// Generate markdown content with specified structure.
fn generate_markdown(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * 50 + sections * paragraphs_per_section * 200);
    md.push_str("# Note Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "This is paragraph {j} in section {i}. It contains **bold** and *italic* text.\n\n"
            ));
        }
        md.push_str(&format!("![figure {i}](figure-{i}.png)\n\n"));
    }
    md
}

/// Notebook over a temp dir pre-seeded with the given notes.
fn notebook_with_notes(dir: &tempfile::TempDir, notes: &[(&str, &str)]) -> Notebook {
    let names: Vec<String> = notes.iter().map(|(name, _)| format!("\"{name}\"")).collect();
    fs::write(
        dir.path().join("index.json"),
        format!("[{}]", names.join(",")),
    )
    .unwrap();
    for (name, body) in notes {
        fs::write(dir.path().join(name), body).unwrap();
    }
    Notebook::new(Arc::new(FsStorage::new(dir.path())))
}

fn bench_render_simple(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let notebook = notebook_with_notes(&dir, &[("simple.md", "# Hello\n\nSimple content.")]);

    c.bench_function("render_simple_note", |b| {
        b.iter(|| notebook.render("simple.md"));
    });
}

fn bench_render_image_heavy(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    let mut md = String::from("# Gallery\n\n");
    for i in 0..50 {
        md.push_str(&format!("![photo {i}](./photos/img-{i}.png)\n\n"));
        md.push_str(&format!("![asset {i}](assets/img-{i}.png)\n\n"));
    }
    let notebook = notebook_with_notes(&dir, &[("gallery.md", &md)]);

    c.bench_function("render_image_heavy_note", |b| {
        b.iter(|| notebook.render("gallery.md"));
    });
}

fn bench_render_gfm_features(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    let markdown = r"# GFM Features

| Column A | Column B | Column C |
|----------|----------|----------|
| Value 1  | Value 2  | Value 3  |
| Value 4  | Value 5  | Value 6  |

- [x] Completed task
- [ ] Pending task
- [ ] Another task

This has ~~strikethrough~~ and **bold** and *italic*.
";
    let notebook = notebook_with_notes(&dir, &[("gfm.md", markdown)]);

    c.bench_function("render_gfm_features", |b| {
        b.iter(|| notebook.render("gfm.md"));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();

    let mut group = c.benchmark_group("render_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_markdown(sections, paragraphs);
        let name = format!("doc_{sections}_{paragraphs}.md");
        fs::write(dir.path().join("index.json"), format!("[\"{name}\"]")).unwrap();
        fs::write(dir.path().join(&name), &markdown).unwrap();

        let notebook = Notebook::new(Arc::new(FsStorage::new(dir.path())));

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s_{paragraphs}p")),
            &name,
            |b, name| b.iter(|| notebook.render(name)),
        );
    }

    group.finish();
}

fn bench_list_large_manifest(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let notes: Vec<String> = (0..500).map(|i| format!("Note {:03}.md", i % 250)).collect();
    let entries: Vec<(&str, &str)> = notes.iter().map(|n| (n.as_str(), "")).collect();
    let notebook = notebook_with_notes(&dir, &entries);

    c.bench_function("list_500_notes", |b| {
        b.iter(|| notebook.list());
    });
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_image_heavy,
    bench_render_gfm_features,
    bench_render_varying_sizes,
    bench_list_large_manifest,
);

criterion_main!(benches);

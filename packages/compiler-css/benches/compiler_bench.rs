use blockpress_compiler_css::{StyleCompiler, Theme, Viewport};
use blockpress_model::{Document, Section, SectionKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn page_with(sections: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..sections {
        let mut section = Section::new(
            format!("bench-{}", i),
            SectionKind::Features,
            format!("Section {}", i),
            0,
        );
        section
            .content
            .insert("cards".to_string(), json!([1, 2, 3, 4]));
        section.background.gradient = Some("linear-gradient(#fff, #eee)".to_string());
        doc.push(section);
    }
    doc
}

fn bench_compile(c: &mut Criterion) {
    let compiler = StyleCompiler::new(Theme::default(), Viewport::Desktop);

    for size in [10usize, 50, 200] {
        let doc = page_with(size);
        c.bench_function(&format!("compile_{}_sections", size), |b| {
            b.iter(|| black_box(compiler.compile(black_box(&doc)).to_css()))
        });
    }
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use richtext_core::{
    ContentBlock, Entity, EntityMap, Mutability, RemovalDirection, RemovalRangeResolver,
    Selection,
};

/// A long paragraph with a mention, a hashtag and a link every few words.
fn dense_block(repeats: usize) -> (EntityMap, ContentBlock) {
    let unit = "ping @alice about #quarterly-report at example dot com ";
    let unit_len = unit.chars().count();
    let mut entities = EntityMap::new();
    let mut block = ContentBlock::new("b", unit.repeat(repeats));

    for i in 0..repeats {
        let base = i * unit_len;
        let mention = entities.create(Entity::new("MENTION", Mutability::Immutable));
        let tag = entities.create(Entity::new("HASHTAG", Mutability::Segmented));
        let link = entities.create(Entity::new("LINK", Mutability::Mutable));
        block
            .apply_entity(base + 5, base + 11, Some(mention))
            .unwrap();
        block
            .apply_entity(base + 18, base + 35, Some(tag))
            .unwrap();
        block
            .apply_entity(base + 39, base + 54, Some(link))
            .unwrap();
    }
    (entities, block)
}

fn bench_caret_in_mention(c: &mut Criterion) {
    let (entities, block) = dense_block(500);
    let resolver = RemovalRangeResolver::new();
    let caret = Selection::collapsed("b", 250 * 55 + 7);

    c.bench_function("resolve/caret_in_mention", |b| {
        b.iter(|| {
            let removal = resolver
                .resolve(
                    &entities,
                    &block,
                    &block,
                    black_box(&caret),
                    RemovalDirection::Backward,
                )
                .unwrap();
            black_box(removal);
        })
    });
}

fn bench_range_across_entities(c: &mut Criterion) {
    let (entities, block) = dense_block(500);
    let resolver = RemovalRangeResolver::new();
    // From inside a hashtag to inside a mention a few units later.
    let selection = Selection::within("b", 100 * 55 + 25, 103 * 55 + 8);

    c.bench_function("resolve/range_across_entities", |b| {
        b.iter(|| {
            let removal = resolver
                .resolve(
                    &entities,
                    &block,
                    &block,
                    black_box(&selection),
                    RemovalDirection::Forward,
                )
                .unwrap();
            black_box(removal);
        })
    });
}

criterion_group!(benches, bench_caret_in_mention, bench_range_across_entities);
criterion_main!(benches);

use richtext_core::{
    ContentBlock, Entity, EntityMap, Mutability, RemovalDirection, Selection,
    extend_collapsed_selection, resolve_removal_range,
};

fn span(selection: &Selection) -> (usize, usize) {
    (selection.start_offset(), selection.end_offset())
}

#[test]
fn test_extend_caret_by_one_char() {
    let block = ContentBlock::new("b", "abc");
    let caret = Selection::collapsed("b", 1);

    let back = extend_collapsed_selection(&block, &caret, RemovalDirection::Backward);
    let fwd = extend_collapsed_selection(&block, &caret, RemovalDirection::Forward);

    assert_eq!(span(&back), (0, 1));
    assert_eq!(span(&fwd), (1, 2));
    assert!(!back.is_backward());
}

#[test]
fn test_extend_caret_by_grapheme_cluster() {
    // "e" + COMBINING ACUTE ACCENT, then a family emoji made of 5 chars.
    let block = ContentBlock::new("b", "e\u{301}\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}");
    assert_eq!(block.char_len(), 7);

    let after_accent = Selection::collapsed("b", 2);
    assert_eq!(
        span(&extend_collapsed_selection(
            &block,
            &after_accent,
            RemovalDirection::Backward
        )),
        (0, 2)
    );
    assert_eq!(
        span(&extend_collapsed_selection(
            &block,
            &after_accent,
            RemovalDirection::Forward
        )),
        (2, 7)
    );
}

#[test]
fn test_extend_caret_at_block_edges_is_noop() {
    let block = ContentBlock::new("b", "abc");

    let start = Selection::collapsed("b", 0);
    let end = Selection::collapsed("b", 3);

    assert_eq!(
        extend_collapsed_selection(&block, &start, RemovalDirection::Backward),
        start
    );
    assert_eq!(
        extend_collapsed_selection(&block, &end, RemovalDirection::Forward),
        end
    );
}

#[test]
fn test_extend_ignores_ranges_and_other_blocks() {
    let block = ContentBlock::new("b", "abc");

    let range = Selection::within("b", 0, 2);
    assert_eq!(
        extend_collapsed_selection(&block, &range, RemovalDirection::Backward),
        range
    );

    let elsewhere = Selection::collapsed("other", 1);
    assert_eq!(
        extend_collapsed_selection(&block, &elsewhere, RemovalDirection::Backward),
        elsewhere
    );
}

#[test]
fn test_backspace_after_mention_removes_mention() {
    let mut entities = EntityMap::new();
    let mention = entities.create(Entity::new("MENTION", Mutability::Immutable));
    let block = ContentBlock::new("b", "see @alice here")
        .with_entity(4, 10, mention)
        .unwrap();

    let caret = Selection::collapsed("b", 10);
    let stroke = extend_collapsed_selection(&block, &caret, RemovalDirection::Backward);
    let removal = resolve_removal_range(
        &entities,
        &block,
        &block,
        &stroke,
        RemovalDirection::Backward,
    )
    .unwrap();
    assert_eq!(span(&removal), (4, 10));

    // Delete just before the mention reaches into it the same way.
    let caret = Selection::collapsed("b", 4);
    let stroke = extend_collapsed_selection(&block, &caret, RemovalDirection::Forward);
    let removal =
        resolve_removal_range(&entities, &block, &block, &stroke, RemovalDirection::Forward)
            .unwrap();
    assert_eq!(span(&removal), (4, 10));
}

#[test]
fn test_backspace_after_segmented_name_removes_last_word() {
    let mut entities = EntityMap::new();
    let name = entities.create(Entity::new("NAME", Mutability::Segmented));
    let block = ContentBlock::new("b", "hi John Smith!")
        .with_entity(3, 13, name)
        .unwrap();

    let caret = Selection::collapsed("b", 13);
    let stroke = extend_collapsed_selection(&block, &caret, RemovalDirection::Backward);
    let removal = resolve_removal_range(
        &entities,
        &block,
        &block,
        &stroke,
        RemovalDirection::Backward,
    )
    .unwrap();

    assert_eq!(span(&removal), (7, 13));
    assert_eq!(block.slice(3, 7), "John");
}

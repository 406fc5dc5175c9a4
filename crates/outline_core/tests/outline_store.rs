use outline_core::{
    add_row, add_row_with_text, delete_with_descendants, descendant_span, edit_text, indent,
    level_jumps, move_row, IndentDelta, MoveRowError, Outline, Row,
};
use std::collections::HashSet;
use uuid::Uuid;

fn outline(levels: &[u32]) -> Outline {
    levels
        .iter()
        .enumerate()
        .map(|(index, level)| Row::new(format!("row {index}"), *level))
        .collect()
}

fn levels(outline: &Outline) -> Vec<u32> {
    outline.iter().map(|row| row.indent_level).collect()
}

const LEVEL_PATTERNS: &[&[u32]] = &[
    &[],
    &[0],
    &[0, 0, 0],
    &[0, 1, 2, 0],
    &[0, 1, 1, 2, 3, 1, 0, 1],
    &[2, 0, 1, 3, 1, 0],
    &[0, 1, 2, 3, 4, 5],
    &[3, 2, 1, 0],
];

#[test]
fn add_row_to_empty_outline_starts_at_top_level() {
    let empty = Outline::new();
    let next = add_row(&empty);

    assert!(empty.is_empty());
    assert_eq!(next.len(), 1);
    assert_eq!(next.rows()[0].indent_level, 0);
    assert_eq!(next.rows()[0].text, "");
}

#[test]
fn add_row_inherits_last_level_and_keeps_existing_rows() {
    for pattern in LEVEL_PATTERNS {
        let before = outline(pattern);
        let after = add_row(&before);

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after.rows()[..before.len()], before.rows());

        let added = after.last().unwrap();
        assert!(!before.contains(added.id));
        assert_eq!(added.indent_level, pattern.last().copied().unwrap_or(0));
    }
}

#[test]
fn add_row_with_text_seeds_text() {
    let next = add_row_with_text(&outline(&[0, 1]), "Fractions");
    let added = next.last().unwrap();
    assert_eq!(added.text, "Fractions");
    assert_eq!(added.indent_level, 1);
}

#[test]
fn edit_text_touches_only_the_matching_row() {
    let before = outline(&[0, 1, 0]);
    let target = before.rows()[1].id;

    let after = edit_text(&before, target, "Counting to 100");

    assert_eq!(after.rows()[1].text, "Counting to 100");
    assert_eq!(after.rows()[1].id, target);
    assert_eq!(after.rows()[0], before.rows()[0]);
    assert_eq!(after.rows()[2], before.rows()[2]);
    assert_eq!(before.rows()[1].text, "row 1");
}

#[test]
fn edit_text_is_idempotent() {
    let before = outline(&[0, 1]);
    let target = before.rows()[0].id;

    let once = edit_text(&before, target, "Geometry");
    let twice = edit_text(&once, target, "Geometry");
    assert_eq!(once, twice);
}

#[test]
fn unknown_ids_are_noops() {
    let before = outline(&[0, 1, 2]);
    let missing = Uuid::new_v4();

    assert_eq!(edit_text(&before, missing, "x"), before);
    assert_eq!(indent(&before, missing, IndentDelta::Indent), before);
    assert_eq!(delete_with_descendants(&before, missing), before);
}

#[test]
fn outdent_at_top_level_stays_at_zero() {
    let before = outline(&[0]);
    let id = before.rows()[0].id;

    let after = indent(&before, id, IndentDelta::Outdent);
    assert_eq!(after.rows()[0].indent_level, 0);
}

#[test]
fn indent_is_not_bounded_by_predecessor() {
    // Known boundary case: rows can be indented past predecessor + 1.
    let mut current = outline(&[0, 0]);
    let id = current.rows()[1].id;
    for _ in 0..3 {
        current = indent(&current, id, IndentDelta::Indent);
    }

    assert_eq!(levels(&current), vec![0, 3]);
    assert_eq!(level_jumps(&current), vec![1]);
    assert_eq!(descendant_span(&current, current.rows()[0].id), 1..2);
}

#[test]
fn delete_removes_exactly_row_and_descendant_span() {
    for pattern in LEVEL_PATTERNS {
        let before = outline(pattern);
        for (index, row) in before.iter().enumerate() {
            let span = descendant_span(&before, row.id);
            assert_eq!(span.start, index + 1);

            let removed: HashSet<_> = std::iter::once(row.id)
                .chain(before.rows()[span.clone()].iter().map(|r| r.id))
                .collect();
            let expected: Vec<Row> = before
                .iter()
                .filter(|r| !removed.contains(&r.id))
                .cloned()
                .collect();

            let after = delete_with_descendants(&before, row.id);
            assert_eq!(after.rows(), expected.as_slice(), "pattern {pattern:?} index {index}");
        }
    }
}

#[test]
fn delete_top_level_parent_keeps_next_sibling() {
    let before = outline(&[0, 1, 2, 0]);
    let after = delete_with_descendants(&before, before.rows()[0].id);

    assert_eq!(after.len(), 1);
    assert_eq!(after.rows()[0], before.rows()[3]);
}

#[test]
fn delete_walks_down_to_first_row_not_deeper() {
    let before = outline(&[0, 1, 2, 3, 1, 2]);
    let after = delete_with_descendants(&before, before.rows()[1].id);

    assert_eq!(levels(&after), vec![0, 1, 2]);
    assert_eq!(after.rows()[1], before.rows()[4]);
}

#[test]
fn descendant_span_edge_cases_are_empty() {
    let rows = outline(&[0, 1, 1, 0]);
    assert!(descendant_span(&rows, Uuid::new_v4()).is_empty());
    assert!(descendant_span(&rows, rows.rows()[3].id).is_empty());
    assert!(descendant_span(&rows, rows.rows()[1].id).is_empty());
    assert_eq!(descendant_span(&rows, rows.rows()[0].id), 1..3);
}

#[test]
fn indent_add_and_delete_scenario() {
    let a = Row::new("A", 0);
    let start = Outline::from_rows(vec![a.clone()]);

    let with_b = add_row(&start);
    let b = with_b.rows()[1].clone();
    assert_eq!(levels(&with_b), vec![0, 0]);

    let b_indented = indent(&with_b, b.id, IndentDelta::Indent);
    assert_eq!(b_indented.find(b.id).unwrap().indent_level, 1);

    let a_indented = indent(&b_indented, a.id, IndentDelta::Indent);
    assert_eq!(levels(&a_indented), vec![1, 1]);

    let with_c = add_row(&a_indented);
    let c_id = with_c.rows()[2].id;
    let c_deep = indent(&with_c, c_id, IndentDelta::Indent);
    assert_eq!(levels(&c_deep), vec![1, 1, 2]);

    // Put c directly under a, then a deeper d under c.
    let reordered = move_row(&c_deep, 2, 1).unwrap();
    let with_d = add_row(&reordered);
    let d_id = with_d.rows()[3].id;
    let d_deep = indent(
        &indent(&with_d, d_id, IndentDelta::Indent),
        d_id,
        IndentDelta::Indent,
    );
    let before = move_row(&d_deep, 3, 2).unwrap();
    assert_eq!(
        before.iter().map(|row| row.id).collect::<Vec<_>>(),
        vec![a.id, c_id, d_id, b.id]
    );
    assert_eq!(levels(&before), vec![1, 2, 3, 1]);
    assert_eq!(descendant_span(&before, a.id), 1..3);

    // a takes every following row deeper than 1; b at level 1 stops the span.
    let after = delete_with_descendants(&before, a.id);
    assert_eq!(after.len(), 1);
    assert!(!after.contains(a.id));
    assert!(!after.contains(c_id));
    assert!(!after.contains(d_id));
    assert_eq!(after.rows()[0], before.rows()[3]);
    assert_eq!(before.len(), 4);
}

#[test]
fn move_row_shifts_rows_in_between() {
    let before = outline(&[0, 0, 0, 0]);
    let ids: Vec<_> = before.iter().map(|row| row.id).collect();

    let down = move_row(&before, 0, 2).unwrap();
    assert_eq!(
        down.iter().map(|row| row.id).collect::<Vec<_>>(),
        vec![ids[1], ids[2], ids[0], ids[3]]
    );

    let up = move_row(&before, 3, 1).unwrap();
    assert_eq!(
        up.iter().map(|row| row.id).collect::<Vec<_>>(),
        vec![ids[0], ids[3], ids[1], ids[2]]
    );

    assert_eq!(move_row(&before, 2, 2).unwrap(), before);
}

#[test]
fn move_row_does_not_reparent_or_carry_descendants() {
    let before = outline(&[0, 1, 2, 0]);
    let after = move_row(&before, 0, 3).unwrap();

    // Levels travel with their rows; children stay where they were.
    assert_eq!(levels(&after), vec![1, 2, 0, 0]);
    assert_eq!(after.rows()[3], before.rows()[0]);
    assert_eq!(level_jumps(&after), vec![0]);
}

#[test]
fn move_row_rejects_out_of_bounds() {
    let before = outline(&[0, 1]);

    assert_eq!(
        move_row(&before, 2, 0).unwrap_err(),
        MoveRowError::OutOfBounds {
            from: 2,
            to: 0,
            len: 2
        }
    );
    assert!(move_row(&before, 0, 2).is_err());
    assert!(move_row(&Outline::new(), 0, 0).is_err());
    assert_eq!(before.len(), 2);
}

#[test]
fn operations_leave_input_outline_untouched() {
    let before = outline(&[0, 1, 2]);
    let copy = before.clone();
    let id = before.rows()[0].id;

    let _ = add_row(&before);
    let _ = edit_text(&before, id, "changed");
    let _ = indent(&before, id, IndentDelta::Indent);
    let _ = delete_with_descendants(&before, id);
    let _ = move_row(&before, 0, 2);

    assert_eq!(before, copy);
}

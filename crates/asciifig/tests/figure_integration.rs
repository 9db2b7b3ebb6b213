//! End-to-end decomposition tests: parse a figure, extract faces, render
//! rectangles, and check the partition/round-trip laws.

use asciifig::{Figure, MalformedFigure};

/// Build an r x c lattice figure where every cell is `w` wide and `h` tall
/// (interior dimensions).
fn lattice(rows: usize, cols: usize, w: usize, h: usize) -> String {
    let border: String = {
        let cell: String = format!("+{}", "-".repeat(w));
        format!("{}+", cell.repeat(cols))
    };
    let body: String = {
        let cell: String = format!("|{}", " ".repeat(w));
        format!("{}|", cell.repeat(cols))
    };

    let mut lines = Vec::new();
    for _ in 0..rows {
        lines.push(border.clone());
        for _ in 0..h {
            lines.push(body.clone());
        }
    }
    lines.push(border);
    lines.join("\n")
}

#[test]
fn worked_example_three_faces() {
    let figure = Figure::parse(concat!(
        "+------------+\n",
        "|            |\n",
        "|            |\n",
        "|            |\n",
        "+------+-----+\n",
        "|      |     |\n",
        "|      |     |\n",
        "+------+-----+\n",
    ))
    .unwrap();

    let mut rects: Vec<String> = figure.rectangles().collect();
    rects.sort();

    let mut expected = vec![
        concat!(
            "+------------+\n",
            "|            |\n",
            "|            |\n",
            "|            |\n",
            "+------------+\n",
        )
        .to_string(),
        concat!("+------+\n", "|      |\n", "|      |\n", "+------+\n").to_string(),
        concat!("+-----+\n", "|     |\n", "|     |\n", "+-----+\n").to_string(),
    ];
    expected.sort();

    assert_eq!(rects, expected);
}

#[test]
fn worked_example_overhanging_top() {
    let figure = Figure::parse(concat!(
        "   +-----+     \n",
        "   |     |     \n",
        "+--+-----+----+\n",
        "|             |\n",
        "|             |\n",
        "+-------------+\n",
    ))
    .unwrap();

    let mut rects: Vec<String> = figure.rectangles().collect();
    rects.sort();

    let mut expected = vec![
        concat!("+-----+\n", "|     |\n", "+-----+\n").to_string(),
        concat!(
            "+-------------+\n",
            "|             |\n",
            "|             |\n",
            "+-------------+\n",
        )
        .to_string(),
    ];
    expected.sort();

    assert_eq!(rects, expected);
}

#[test]
fn degenerate_single_rectangle() {
    let source = "+---+\n|   |\n|   |\n+---+\n";
    let figure = Figure::parse(source).unwrap();
    assert_eq!(figure.faces().len(), 1);

    let rects: Vec<String> = figure.rectangles().collect();
    assert_eq!(rects, vec![source.to_string()]);
}

#[test]
fn count_property_r_by_c_lattice() {
    for (rows, cols) in [(1, 1), (1, 4), (3, 1), (2, 3), (4, 4)] {
        let figure = Figure::parse(&lattice(rows, cols, 3, 2)).unwrap();
        assert_eq!(
            figure.faces().len(),
            rows * cols,
            "lattice {rows}x{cols} face count"
        );
    }
}

#[test]
fn partition_property() {
    let figure = Figure::parse(&lattice(3, 4, 2, 1)).unwrap();
    let faces = figure.faces();

    for (i, a) in faces.iter().enumerate() {
        for b in &faces[i + 1..] {
            assert!(
                !a.bounds.interiors_overlap(&b.bounds),
                "{a:?} overlaps {b:?}"
            );
        }
    }

    // Every interior cell of the source belongs to exactly one face.
    let covered: usize = faces.iter().map(|f| f.bounds.interior_area()).sum();
    assert_eq!(covered, 3 * 4 * 2);
}

#[test]
fn render_round_trip_law() {
    let figure = Figure::parse(concat!(
        "+------------+\n",
        "|            |\n",
        "+------+-----+\n",
        "|      |     |\n",
        "+------+-----+\n",
    ))
    .unwrap();

    for rect in figure.rectangles() {
        let reparsed = Figure::parse(&rect).unwrap();
        assert_eq!(reparsed.faces().len(), 1, "rectangle must be elementary");
        let rerendered: Vec<String> = reparsed.rectangles().collect();
        assert_eq!(rerendered, vec![rect.clone()], "render must be idempotent");
    }
}

#[test]
fn t_junction_decomposes_into_three() {
    let figure = Figure::parse(concat!(
        "+---+---+\n",
        "|   |   |\n",
        "+---+---+\n",
        "    |   |\n",
        "    +---+\n",
    ))
    .unwrap();
    assert_eq!(figure.faces().len(), 3);
}

#[test]
fn ragged_rows_fail_instead_of_truncating() {
    // The second row lost its right border entirely; the figure must be
    // rejected, not decomposed as if the border were there.
    let result = Figure::parse("+---+\n|\n+---+\n");
    assert!(result.is_err());
}

#[test]
fn interior_empty_row_is_reported_with_its_index() {
    let err = Figure::parse("+-+\n| |\n\n+-+").unwrap_err();
    assert_eq!(err, MalformedFigure::EmptyRow { row: 2 });
}

#[test]
fn dangling_border_is_rejected() {
    let err = Figure::parse("+---+--\n|   |\n+---+\n").unwrap_err();
    assert_eq!(err, MalformedFigure::DanglingEdge { row: 0, col: 4 });
}

#[test]
fn errors_display_a_reason() {
    let err = Figure::parse("").unwrap_err();
    assert_eq!(err.to_string(), "figure contains no rows");
}

use crate::{config::PageLimit, models::Template, paginator::Paginator};

fn limited(title: &str, limit: usize) -> Paginator {
    Paginator::new(title).page_limit(PageLimit::new(limit).unwrap())
}

fn assert_dense(pages: &[usize]) {
    for pair in pages.windows(2) {
        let step = pair[1] - pair[0];
        assert!(step <= 1, "page sequence jumps: {pages:?}");
    }
}

#[test]
fn test_single_page_below_budget() {
    let mut paginator = Paginator::new("T");
    paginator.add_field("H", "B", true);

    assert_eq!(paginator.page_numbers(), vec![0]);
    assert_eq!(paginator.render(), "# T\n## H\nB");
}

#[test]
fn test_single_page_joins_fields_with_newline() {
    let mut paginator = Paginator::new("T");
    paginator.add_field("A", "a", true);
    paginator.add_field("B", "b", true);

    assert_eq!(paginator.page_numbers(), vec![0, 0]);
    assert_eq!(paginator.render(), "# T\n## A\na\n\n## B\nb");
    assert!(!paginator.render().contains("----------"));
}

#[test]
fn test_field_lengths_are_cumulative() {
    let mut paginator = Paginator::new("T");
    paginator.add_field("ab", "cde", true);
    paginator.add_field("", "", true);
    paginator.add_field("f", "gh", false);

    assert_eq!(paginator.field_lengths(), vec![5, 5, 8]);
}

#[test]
fn test_field_lengths_count_chars() {
    let mut paginator = limited("T", 4);
    paginator.add_field("é", "日本", true);
    paginator.add_field("ü", "", true);

    assert_eq!(paginator.field_lengths(), vec![3, 4]);
    assert_eq!(paginator.page_numbers(), vec![0, 1]);
}

#[test]
fn test_exact_boundary_rolls_to_next_page() {
    let mut paginator = limited("T", 10);
    paginator.add_field("aaaa", "bbbbb", true);
    paginator.add_field("c", "", true);

    assert_eq!(paginator.field_lengths(), vec![9, 10]);
    assert_eq!(paginator.page_numbers(), vec![0, 1]);
}

#[test]
fn test_skip_correction_clamps_jumps() {
    let mut paginator = limited("T", 10);
    paginator.add_field("H", "B", true);
    paginator.add_field("H", "B".repeat(29), true);
    paginator.add_field("H", "", true);
    paginator.add_field("", "", true);

    assert_eq!(paginator.field_lengths(), vec![2, 32, 33, 33]);
    // raw pages are [0, 3, 3, 3]
    assert_eq!(paginator.page_numbers(), vec![0, 1, 2, 3]);
}

#[test]
fn test_page_numbers_are_dense_for_mixed_sizes() {
    let mut paginator = limited("T", 7);
    for size in [1, 40, 3, 0, 15, 2, 2, 90, 1] {
        paginator.add_field("", "x".repeat(size), true);
    }

    let pages = paginator.page_numbers();
    assert_eq!(pages.len(), 9);
    assert_eq!(pages[0], 0);
    assert_dense(&pages);
}

#[test]
fn test_first_field_over_budget_starts_past_zero() {
    let mut paginator = limited("T", 10);
    paginator.add_field("H", "B".repeat(24), true);

    assert_eq!(paginator.page_numbers(), vec![2]);
    assert!(paginator.render().contains("---------- 3/3 ----------"));

    let pages = paginator.pages();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 3);
    assert_eq!(pages[0].total, 3);
}

#[test]
fn test_new_page_indices() {
    let mut paginator = limited("T", 10);
    paginator.add_field("", "x".repeat(5), true);
    paginator.add_field("", "x".repeat(5), true);
    paginator.add_field("", "x".repeat(3), true);
    paginator.add_field("", "x".repeat(20), true);

    assert_eq!(paginator.page_numbers(), vec![0, 1, 1, 2]);
    let starts: Vec<_> = paginator.new_page_indices().into_iter().collect();
    assert_eq!(starts, vec![0, 1, 3]);
}

#[test]
fn test_empty_paginator() {
    let paginator = Paginator::new("T");

    assert!(paginator.is_empty());
    assert!(paginator.field_lengths().is_empty());
    assert!(paginator.page_numbers().is_empty());
    assert!(paginator.new_page_indices().is_empty());
    assert_eq!(paginator.render(), "# T");
}

#[test]
fn test_empty_paginator_with_footer() {
    let paginator = Paginator::with_template("T", Template::new().with_footer("bye"));

    assert_eq!(paginator.render(), "# T\nbye");
    let pages = paginator.pages();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].text, "# T\nbye");
    assert_eq!((pages[0].number, pages[0].total), (1, 1));
}

#[test]
fn test_title_links_to_url() {
    let mut paginator =
        Paginator::with_template("T", Template::new().with_url("https://example.com"));
    paginator.add_field("H", "B", true);

    assert_eq!(paginator.render(), "# [T](https://example.com)\n## H\nB");
}

#[test]
fn test_empty_url_is_ignored() {
    let paginator = Paginator::with_template("T", Template::new().with_url(""));
    assert_eq!(paginator.render(), "# T");
}

#[test]
fn test_render_multiple_pages_with_separators() {
    let mut paginator = limited("T", 10);
    paginator.add_field("A", "aaaa", true);
    paginator.add_field("B", "bbbb", true);

    assert_eq!(paginator.page_numbers(), vec![0, 1]);
    assert_eq!(
        paginator.render(),
        "# T\n---------- 1/2 ----------\n\n## A\naaaa\n\n---------- 2/2 ----------\n\n## B\nbbbb"
    );
}

#[test]
fn test_separator_only_before_page_starts() {
    let mut paginator = limited("T", 10);
    paginator.add_field("A", "aa", true);
    paginator.add_field("B", "bb", true);
    paginator.add_field("C", "cccc", true);
    paginator.add_field("D", "d", true);

    assert_eq!(paginator.page_numbers(), vec![0, 0, 1, 1]);
    let output = paginator.render();
    assert_eq!(output.matches("----------").count(), 4);
    assert_eq!(output.matches("1/2").count(), 1);
    assert_eq!(output.matches("2/2").count(), 1);
    assert!(output.find("## B").unwrap() < output.find("2/2").unwrap());
    assert!(output.find("2/2").unwrap() < output.find("## C").unwrap());
}

#[test]
fn test_footer_appears_once_at_end() {
    let mut paginator =
        Paginator::with_template("T", Template::new().with_footer("FOOTER-TEXT"))
            .page_limit(PageLimit::new(10).unwrap());
    for heading in ["A", "B", "C", "D"] {
        paginator.add_field(heading, "xxxxxxxx", true);
    }

    let output = paginator.render();
    assert_eq!(output.matches("FOOTER-TEXT").count(), 1);
    assert!(output.ends_with("\nFOOTER-TEXT"));

    let pages = paginator.pages();
    assert!(pages.len() > 1);
    assert!(pages.iter().take(pages.len() - 1).all(|p| !p.text.contains("FOOTER-TEXT")));
    assert!(pages[pages.len() - 1].text.ends_with("FOOTER-TEXT"));
}

#[test]
fn test_render_is_idempotent() {
    let mut paginator = limited("T", 16);
    paginator.add_field("One", "first body", true);
    paginator.add_field("Two", "second body", true);

    assert_eq!(paginator.render(), paginator.render());
    assert_eq!(paginator.pages(), paginator.pages());
}

#[test]
fn test_render_reflects_later_fields() {
    let mut paginator = Paginator::new("T");
    paginator.add_field("A", "a", true);
    let before = paginator.render();
    paginator.add_field("B", "b", true);

    assert_ne!(before, paginator.render());
    assert!(paginator.render().starts_with(&before));
}

#[test]
fn test_fields_render_in_append_order() {
    let mut paginator = limited("T", 12);
    let headings = ["zeta", "alpha", "mid", "omega", "beta"];
    for heading in headings {
        paginator.add_field(heading, "body text", true);
    }

    let output = paginator.render();
    let positions: Vec<_> = headings
        .iter()
        .map(|h| output.find(&format!("## {h}\n")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_inline_flag_does_not_affect_output() {
    let mut inline = limited("T", 10);
    let mut block = limited("T", 10);
    for (heading, body) in [("A", "aaaa"), ("B", "bbbbbbb"), ("C", "c")] {
        inline.add_field(heading, body, true);
        block.add_field(heading, body, false);
    }

    assert_eq!(inline.page_numbers(), block.page_numbers());
    assert_eq!(inline.render(), block.render());
    assert_eq!(inline.pages(), block.pages());
}

#[test]
fn test_pages_split_at_boundaries() {
    let mut paginator = Paginator::with_template("T", Template::new().with_footer("F"))
        .page_limit(PageLimit::new(10).unwrap());
    paginator.add_field("A", "aa", true);
    paginator.add_field("B", "bb", true);
    paginator.add_field("C", "cccc", true);
    paginator.add_field("D", "d", true);

    let pages = paginator.pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].text, "# T\n## A\naa\n\n## B\nbb");
    assert_eq!(pages[1].text, "## C\ncccc\n\n## D\nd\nF");
    assert!(pages.iter().all(|p| p.total == 2));
    assert_eq!(pages[1].number, 2);
}

#[test]
fn test_display_matches_render() {
    let mut paginator = limited("T", 10);
    paginator.add_field("A", "aaaa", true);
    paginator.add_field("B", "bbbb", true);

    assert_eq!(paginator.to_string(), paginator.render());
}

#[test]
fn test_layout_rows() {
    let mut paginator = limited("T", 10);
    paginator.add_field("A", "aaaa", true);
    paginator.add_field("B", "bbbb", true);

    let layout = paginator.layout();
    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[1].cumulative, 10);
    assert_eq!(layout.rows[1].page, 1);
    assert_eq!(layout.page_count(), 2);

    let output = layout.to_string();
    assert!(output.contains("- Page limit: 10"));
    assert!(output.contains("| 1 | B | 10 | 2 | yes |"));
}

#[test]
fn test_layout_without_fields() {
    let layout = Paginator::new("T").layout();
    assert_eq!(layout.page_count(), 0);
    assert!(layout.to_string().contains("No fields."));
}

#[test]
fn test_pages_display_matches_render_across_pages() {
    let mut paginator = Paginator::with_template(
        "T",
        Template::new().with_url("https://example.com").with_footer("F"),
    )
    .page_limit(PageLimit::new(10).unwrap());
    paginator.add_field("A", "aa", true);
    paginator.add_field("B", "bb", true);
    paginator.add_field("C", "cccc", true);
    paginator.add_field("D", "dddddddd", true);

    assert_eq!(paginator.page_numbers(), vec![0, 0, 1, 2]);
    assert_eq!(paginator.pages().to_string(), paginator.render());
}

#[test]
fn test_pages_display_matches_render_when_first_field_oversized() {
    let mut paginator = limited("T", 10);
    paginator.add_field("H", "B".repeat(24), true);

    let rendered = paginator.render();
    assert!(rendered.starts_with("# T\n---------- 3/3 ----------\n\n## H\n"));
    assert_eq!(paginator.pages().to_string(), rendered);
}

#[test]
fn test_pages_display_matches_render_on_single_page() {
    let mut paginator = Paginator::with_template("T", Template::new().with_footer("F"));
    paginator.add_field("A", "a", true);
    paginator.add_field("B", "b", false);

    assert_eq!(paginator.pages().to_string(), paginator.render());
    assert_eq!(Paginator::new("T").pages().to_string(), "# T");
}

#[test]
fn test_limit_reports_configured_budget() {
    assert_eq!(Paginator::new("T").limit(), PageLimit::default());
    assert_eq!(limited("T", 42).limit().get(), 42);
}

//! Report assembly: fold a diffable into raw and Markdown renderings.
//!
//! Changed blocks are collected in mapping order first, then each rendering
//! is produced in a single join pass.

use tracing::{debug, info};

use kustdiff_diff::{diff_mapping, DiffBlock, DiffOptions};
use kustdiff_types::Diffable;

/// Title that opens every non-empty Markdown report.
pub const MARKDOWN_HEADER: &str = "### Flux Kustomization diffs\n\n";

/// Change counts for one retained file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSummary {
    pub src_path: String,
    pub dst_path: String,
    pub additions: usize,
    pub deletions: usize,
}

/// The rendered diff of a whole diffable.
///
/// `markdown_diff` is empty exactly when `raw_diff` is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    raw_diff: String,
    markdown_diff: String,
    files: Vec<FileSummary>,
}

impl Report {
    /// Concatenated unified diffs of every changed mapping.
    pub fn raw_diff(&self) -> &str {
        &self.raw_diff
    }

    /// The Markdown document, or `""` when nothing changed.
    pub fn markdown_diff(&self) -> &str {
        &self.markdown_diff
    }

    /// One entry per changed mapping, in mapping order.
    pub fn files(&self) -> &[FileSummary] {
        &self.files
    }

    pub fn has_changes(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn additions(&self) -> usize {
        self.files.iter().map(|f| f.additions).sum()
    }

    pub fn deletions(&self) -> usize {
        self.files.iter().map(|f| f.deletions).sum()
    }
}

/// Diff every mapping and build the report, skipping unchanged mappings.
pub fn assemble(diffable: &Diffable, options: &DiffOptions) -> Report {
    let blocks: Vec<DiffBlock> = diffable
        .iter()
        .map(|mapping| diff_mapping(mapping, options))
        .filter(|block| {
            let keep = !block.is_no_change();
            debug!(
                src = %block.src_path,
                dst = %block.dst_path,
                changed = keep,
                "diffed mapping"
            );
            keep
        })
        .collect();

    let raw_diff: String = blocks.iter().map(|b| b.text.as_str()).collect();

    let markdown_diff = if blocks.is_empty() {
        String::new()
    } else {
        let sections: String = blocks.iter().map(markdown_section).collect();
        format!("{MARKDOWN_HEADER}{sections}")
    };

    let files: Vec<FileSummary> = blocks
        .into_iter()
        .map(|b| FileSummary {
            src_path: b.src_path,
            dst_path: b.dst_path,
            additions: b.additions,
            deletions: b.deletions,
        })
        .collect();

    info!(
        mappings = diffable.len(),
        changed = files.len(),
        "assembled diff report"
    );

    Report {
        raw_diff,
        markdown_diff,
        files,
    }
}

/// One collapsible section; the block text supplies the newline before the
/// closing fence.
fn markdown_section(block: &DiffBlock) -> String {
    format!(
        "<details>\n  <summary>diff: {} | {}</summary>\n\n```diff\n{}```\n</details>\n",
        block.src_path, block.dst_path, block.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kustdiff_diff::compute_diff;
    use kustdiff_types::Mapping;
    use proptest::prelude::*;

    fn diffable(mappings: Vec<Mapping>) -> Diffable {
        Diffable::new(mappings)
    }

    #[test]
    fn empty_diffable_yields_empty_report() {
        let report = assemble(&Diffable::default(), &DiffOptions::default());
        assert_eq!(report.raw_diff(), "");
        assert_eq!(report.markdown_diff(), "");
        assert!(!report.has_changes());
    }

    #[test]
    fn unchanged_mappings_are_suppressed() {
        let report = assemble(
            &diffable(vec![
                Mapping::new("a.yaml", "a.yaml", "x: 1\n", "x: 1\n"),
                Mapping::new("b.yaml", "c.yaml", "", ""),
            ]),
            &DiffOptions::default(),
        );
        assert_eq!(report.raw_diff(), "");
        assert_eq!(report.markdown_diff(), "");
        assert!(report.files().is_empty());
    }

    #[test]
    fn single_change_exact_markdown() {
        let report = assemble(
            &diffable(vec![Mapping::new("a.yaml", "a.yaml", "x: 1\n", "x: 2\n")]),
            &DiffOptions::default(),
        );
        let block = compute_diff("a.yaml", "a.yaml", "x: 1\n", "x: 2\n");

        let expected = format!(
            "### Flux Kustomization diffs\n\n<details>\n  <summary>diff: a.yaml | a.yaml</summary>\n\n```diff\n{}```\n</details>\n",
            block.text
        );
        assert_eq!(report.markdown_diff(), expected);
        assert_eq!(report.raw_diff(), block.text);
        assert_eq!(report.markdown_diff().matches("<details>").count(), 1);
    }

    #[test]
    fn sections_follow_mapping_order() {
        let report = assemble(
            &diffable(vec![
                Mapping::new("z.yaml", "z.yaml", "a\n", "b\n"),
                Mapping::new("same.yaml", "same.yaml", "q\n", "q\n"),
                Mapping::new("a.yaml", "a.yaml", "c\n", "d\n"),
            ]),
            &DiffOptions::default(),
        );

        let md = report.markdown_diff();
        let z = md.find("diff: z.yaml | z.yaml").unwrap();
        let a = md.find("diff: a.yaml | a.yaml").unwrap();
        assert!(z < a);
        assert!(!md.contains("same.yaml"));

        let raw = report.raw_diff();
        assert!(raw.find("--- z.yaml").unwrap() < raw.find("--- a.yaml").unwrap());
        assert_eq!(report.files().len(), 2);
    }

    #[test]
    fn sections_have_no_blank_line_between() {
        let report = assemble(
            &diffable(vec![
                Mapping::new("one", "one", "a\n", "b\n"),
                Mapping::new("two", "two", "a\n", "b\n"),
            ]),
            &DiffOptions::default(),
        );
        assert!(report.markdown_diff().contains("</details>\n<details>\n"));
    }

    #[test]
    fn raw_diff_is_plain_concatenation() {
        let mappings = vec![
            Mapping::new("one", "one", "a\n", "b\n"),
            Mapping::new("two", "2", "c\n", "d\n"),
        ];
        let report = assemble(&diffable(mappings.clone()), &DiffOptions::default());
        let expected: String = mappings
            .iter()
            .map(|m| compute_diff(&m.src_path, &m.dst_path, &m.src_content, &m.dst_content).text)
            .collect();
        assert_eq!(report.raw_diff(), expected);
    }

    #[test]
    fn duplicate_paths_are_kept() {
        let report = assemble(
            &diffable(vec![
                Mapping::new("dup", "dup", "a\n", "b\n"),
                Mapping::new("dup", "dup", "c\n", "d\n"),
            ]),
            &DiffOptions::default(),
        );
        assert_eq!(report.markdown_diff().matches("diff: dup | dup").count(), 2);
    }

    #[test]
    fn stats_are_summed() {
        let report = assemble(
            &diffable(vec![
                Mapping::new("one", "one", "a\nb\n", "a\nc\nd\n"),
                Mapping::new("two", "two", "x\n", ""),
            ]),
            &DiffOptions::default(),
        );
        assert_eq!(report.additions(), 2);
        assert_eq!(report.deletions(), 2);
        assert_eq!(
            report.files()[0],
            FileSummary {
                src_path: "one".into(),
                dst_path: "one".into(),
                additions: 2,
                deletions: 1,
            }
        );
    }

    proptest! {
        #[test]
        fn markdown_empty_iff_raw_empty(
            pairs in proptest::collection::vec(("[ab]{0,2}\n", "[ab]{0,2}\n"), 0..5)
        ) {
            let mappings = pairs
                .into_iter()
                .enumerate()
                .map(|(i, (src, dst))| Mapping::new(format!("f{i}"), format!("f{i}"), src, dst))
                .collect();
            let report = assemble(&Diffable::new(mappings), &DiffOptions::default());
            prop_assert_eq!(report.raw_diff().is_empty(), report.markdown_diff().is_empty());
            prop_assert_eq!(report.has_changes(), !report.raw_diff().is_empty());
        }
    }
}

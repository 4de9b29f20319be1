//! Project/goods-name extraction: a two-line merge window.
//!
//! The label line (项目名称 / 货物名称) carries no content itself; the
//! name is spread over the following line or two, interleaved with
//! `*…*` unit annotations and sometimes cut short by lines belonging
//! to an adjacent buyer/seller info section.

use crate::models::config::MergePolicy;

use super::rules::patterns::{PROJECT_DISQUALIFIERS, PROJECT_LABELS, STARRED_ANNOTATION};

/// Merge window states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No label line seen yet.
    SeekingLabel,
    /// Label consumed; accepting candidate lines.
    WindowOpen,
    /// Name finalized; further label sightings are ignored.
    Done,
}

/// Accumulates the project name across a single scan pass.
#[derive(Debug)]
pub struct ProjectNameBuilder {
    policy: MergePolicy,
    state: State,
    parts: Vec<String>,
    window_lines: u8,
}

impl ProjectNameBuilder {
    pub fn new(policy: MergePolicy) -> Self {
        Self {
            policy,
            state: State::SeekingLabel,
            parts: Vec::new(),
            window_lines: 0,
        }
    }

    /// Feed one trimmed line to the state machine.
    pub fn observe(&mut self, line: &str) {
        match self.state {
            State::Done => {}
            State::SeekingLabel => {
                if PROJECT_LABELS.iter().any(|label| line.contains(label)) {
                    self.state = State::WindowOpen;
                }
            }
            State::WindowOpen => {
                self.window_lines += 1;
                let candidate = STARRED_ANNOTATION.replace_all(line, "").trim().to_string();

                match self.policy {
                    MergePolicy::TwoLineWindow => {
                        // An unstripped asterisk on the second line means
                        // the annotation never closed; the line is
                        // discarded outright.
                        if self.window_lines == 2 && candidate.contains('*') {
                            self.state = State::Done;
                            return;
                        }
                        self.accept(&candidate);
                        if self.window_lines >= 2 {
                            self.state = State::Done;
                        }
                    }
                    MergePolicy::TwoValidTokens => {
                        self.accept(&candidate);
                        if self.parts.len() == 2 {
                            self.state = State::Done;
                        }
                    }
                }
            }
        }
    }

    /// Keep the first whitespace-delimited token unless the candidate
    /// is empty or belongs to a different invoice section.
    fn accept(&mut self, candidate: &str) {
        if self.parts.len() >= 2 || candidate.is_empty() {
            return;
        }
        if PROJECT_DISQUALIFIERS.iter().any(|bad| candidate.contains(bad)) {
            return;
        }
        if let Some(token) = candidate.split_whitespace().next() {
            self.parts.push(token.to_string());
        }
    }

    /// Concatenate accumulated parts, dropping a single trailing
    /// conjunction character left over from a mid-word line break.
    pub fn finish(self) -> Option<String> {
        if self.parts.is_empty() {
            return None;
        }
        let combined = self.parts.concat();
        let name = combined.strip_suffix('合').unwrap_or(&combined);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(policy: MergePolicy, lines: &[&str]) -> Option<String> {
        let mut builder = ProjectNameBuilder::new(policy);
        for line in lines {
            builder.observe(line.trim());
        }
        builder.finish()
    }

    #[test]
    fn test_single_line_with_annotation() {
        let name = run(
            MergePolicy::TwoLineWindow,
            &["项目名称", "数控机床*配件*", "购方信息 税号123"],
        );
        assert_eq!(name.as_deref(), Some("数控机床"));
    }

    #[test]
    fn test_two_lines_merged() {
        let name = run(
            MergePolicy::TwoLineWindow,
            &["货物名称", "数控机床 其余列", "附属设备"],
        );
        assert_eq!(name.as_deref(), Some("数控机床附属设备"));
    }

    #[test]
    fn test_unstripped_asterisk_discards_second_line() {
        let name = run(
            MergePolicy::TwoLineWindow,
            &["项目名称", "数控机床", "*未闭合注记 设备"],
        );
        assert_eq!(name.as_deref(), Some("数控机床"));
    }

    #[test]
    fn test_window_closes_after_two_lines() {
        let name = run(
            MergePolicy::TwoLineWindow,
            &["项目名称", "甲部件", "乙部件", "丙部件"],
        );
        assert_eq!(name.as_deref(), Some("甲部件乙部件"));
    }

    #[test]
    fn test_trailing_conjunction_stripped() {
        let name = run(MergePolicy::TwoLineWindow, &["项目名称", "机床组合", "地址栏"]);
        assert_eq!(name.as_deref(), Some("机床组"));
    }

    #[test]
    fn test_no_label_yields_none() {
        let name = run(MergePolicy::TwoLineWindow, &["数控机床", "附属设备"]);
        assert!(name.is_none());
    }

    #[test]
    fn test_label_then_end_of_input() {
        let name = run(MergePolicy::TwoLineWindow, &["项目名称"]);
        assert!(name.is_none());
    }

    #[test]
    fn test_two_valid_tokens_skips_rejected_lines() {
        let name = run(
            MergePolicy::TwoValidTokens,
            &["项目名称", "购方 税号", "数控机床", "", "附属设备", "多余行"],
        );
        assert_eq!(name.as_deref(), Some("数控机床附属设备"));
    }

    #[test]
    fn test_second_label_ignored_once_done() {
        let mut builder = ProjectNameBuilder::new(MergePolicy::TwoLineWindow);
        for line in ["项目名称", "甲部件", "乙部件", "货物名称", "丙部件"] {
            builder.observe(line);
        }
        assert_eq!(builder.finish().as_deref(), Some("甲部件乙部件"));
    }
}

//! Consistency checks over the content tables.
//!
//! Rendering itself can't fail, but the copy can still drift: two cards
//! sharing a title, an empty heading, a nav link pointing at a section that
//! has no anchor. `prism check` and `prism build` run these before writing
//! anything.

use std::collections::HashSet;

use thiserror::Error;

use crate::content::{
    AUDIT_FEED, AuditEntry, CORE_FEATURES, FACE_ID_CHECKS, HERO_STATS, HIGHLIGHT_REELS,
    NAV_LINKS, NavLink, PIPELINE_PHASES, SIGNAL_SCAN, SITE_METADATA, SignalReadout,
    TRUST_SIGNALS,
};

/// A problem found in a content table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    /// Two records in one table share the key they render under.
    #[error("duplicate {table} key `{key}`")]
    DuplicateKey {
        /// Table name
        table: &'static str,
        /// Repeated key
        key: String,
    },
    /// A required text field is empty or whitespace.
    #[error("empty `{field}` in {table} entry #{index}")]
    EmptyField {
        /// Table name
        table: &'static str,
        /// Field name
        field: &'static str,
        /// Zero-based position in the table
        index: usize,
    },
    /// A nav link targets a section that is not reachable by anchor.
    #[error("nav link `{label}` targets unanchored section `{section}`")]
    UnanchoredNavTarget {
        /// Link label
        label: &'static str,
        /// Target section name
        section: &'static str,
    },
}

/// Run every check against the seed tables.
pub fn validate_content() -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    non_empty(&mut issues, "metadata", "title", 0, SITE_METADATA.title);
    non_empty(&mut issues, "metadata", "description", 0, SITE_METADATA.description);

    for (i, stat) in HERO_STATS.iter().enumerate() {
        non_empty(&mut issues, "hero_stats", "label", i, stat.label);
        non_empty(&mut issues, "hero_stats", "value", i, stat.value);
    }
    unique_keys(&mut issues, "hero_stats", HERO_STATS.iter().map(|s| s.label));

    for (i, feature) in CORE_FEATURES.iter().enumerate() {
        non_empty(&mut issues, "features", "title", i, feature.title);
        non_empty(&mut issues, "features", "description", i, feature.description);
    }
    unique_keys(&mut issues, "features", CORE_FEATURES.iter().map(|f| f.title));

    for (i, phase) in PIPELINE_PHASES.iter().enumerate() {
        non_empty(&mut issues, "pipeline", "id", i, phase.id);
        non_empty(&mut issues, "pipeline", "title", i, phase.title);
        non_empty(&mut issues, "pipeline", "summary", i, phase.summary);
        non_empty(&mut issues, "pipeline", "details", i, phase.details);
        non_empty(&mut issues, "pipeline", "accent", i, phase.accent);
    }
    unique_keys(&mut issues, "pipeline", PIPELINE_PHASES.iter().map(|p| p.id));

    for (i, reel) in HIGHLIGHT_REELS.iter().enumerate() {
        non_empty(&mut issues, "reels", "title", i, reel.title);
        non_empty(&mut issues, "reels", "description", i, reel.description);
        unique_keys(&mut issues, "reel tags", reel.tags.iter().copied());
    }
    unique_keys(&mut issues, "reels", HIGHLIGHT_REELS.iter().map(|r| r.title));

    for (i, signal) in TRUST_SIGNALS.iter().enumerate() {
        non_empty(&mut issues, "trust_signals", "label", i, signal.label);
    }
    unique_keys(&mut issues, "trust_signals", TRUST_SIGNALS.iter().map(|s| s.label));

    check_readouts(&mut issues, "signal_scan", SIGNAL_SCAN);
    check_readouts(&mut issues, "face_id_checks", FACE_ID_CHECKS);
    check_audit_feed(&mut issues, AUDIT_FEED);
    check_nav(&mut issues, NAV_LINKS);

    issues
}

fn non_empty(
    issues: &mut Vec<ContentIssue>,
    table: &'static str,
    field: &'static str,
    index: usize,
    value: &str,
) {
    if value.trim().is_empty() {
        issues.push(ContentIssue::EmptyField {
            table,
            field,
            index,
        });
    }
}

fn unique_keys<'a>(
    issues: &mut Vec<ContentIssue>,
    table: &'static str,
    keys: impl IntoIterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            issues.push(ContentIssue::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }
}

fn check_readouts(
    issues: &mut Vec<ContentIssue>,
    table: &'static str,
    readouts: &[SignalReadout],
) {
    for (i, readout) in readouts.iter().enumerate() {
        non_empty(issues, table, "label", i, readout.label);
        // A missing reading is fine; an empty one renders a blank slot
        if let Some(reading) = readout.reading {
            non_empty(issues, table, "reading", i, reading);
        }
    }
}

fn check_audit_feed(issues: &mut Vec<ContentIssue>, feed: &[AuditEntry]) {
    for (i, entry) in feed.iter().enumerate() {
        non_empty(issues, "audit_feed", "message", i, entry.message);
        non_empty(issues, "audit_feed", "elapsed", i, entry.elapsed);
    }
}

fn check_nav(issues: &mut Vec<ContentIssue>, links: &[NavLink]) {
    for (i, link) in links.iter().enumerate() {
        non_empty(issues, "nav", "label", i, link.label);
        if link.target.anchor().is_none() {
            issues.push(ContentIssue::UnanchoredNavTarget {
                label: link.label,
                section: link.target.as_str(),
            });
        }
    }
    unique_keys(issues, "nav", links.iter().map(|l| l.label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accent::Accent;
    use crate::content::Section;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_content_is_clean() {
        assert_eq!(validate_content(), Vec::new());
    }

    #[test]
    fn duplicate_keys_are_reported_once_per_repeat() {
        let mut issues = Vec::new();
        unique_keys(&mut issues, "reel tags", ["HDR", "Sync", "HDR", "HDR"]);
        assert_eq!(
            issues,
            vec![
                ContentIssue::DuplicateKey {
                    table: "reel tags",
                    key: "HDR".into(),
                };
                2
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut issues = Vec::new();
        non_empty(&mut issues, "features", "title", 4, "   ");
        assert_eq!(issues[0].to_string(), "empty `title` in features entry #4");
    }

    #[test]
    fn nav_link_to_hero_is_flagged() {
        let links = [
            NavLink {
                label: "Top",
                target: Section::Hero,
            },
            NavLink {
                label: "Stack",
                target: Section::Stack,
            },
        ];
        let mut issues = Vec::new();
        check_nav(&mut issues, &links);
        assert_eq!(
            issues,
            vec![ContentIssue::UnanchoredNavTarget {
                label: "Top",
                section: "hero",
            }]
        );
    }

    #[test]
    fn empty_readout_text_is_flagged() {
        let readouts = [
            SignalReadout {
                label: "Edge Render",
                reading: Some(""),
                accent: Accent::Cyan,
            },
            SignalReadout {
                label: " ",
                reading: None,
                accent: Accent::Pink,
            },
        ];
        let mut issues = Vec::new();
        check_readouts(&mut issues, "signal_scan", &readouts);
        assert_eq!(
            issues,
            vec![
                ContentIssue::EmptyField {
                    table: "signal_scan",
                    field: "reading",
                    index: 0,
                },
                ContentIssue::EmptyField {
                    table: "signal_scan",
                    field: "label",
                    index: 1,
                },
            ]
        );
    }

    #[test]
    fn empty_audit_entry_is_flagged() {
        let feed = [AuditEntry {
            message: "Vault 09 watermark embedded",
            elapsed: "",
        }];
        let mut issues = Vec::new();
        check_audit_feed(&mut issues, &feed);
        assert_eq!(
            issues,
            vec![ContentIssue::EmptyField {
                table: "audit_feed",
                field: "elapsed",
                index: 0,
            }]
        );
    }

    #[test]
    fn empty_nav_label_is_flagged() {
        let links = [NavLink {
            label: "",
            target: Section::Pipeline,
        }];
        let mut issues = Vec::new();
        check_nav(&mut issues, &links);
        assert_eq!(
            issues,
            vec![ContentIssue::EmptyField {
                table: "nav",
                field: "label",
                index: 0,
            }]
        );
    }
}

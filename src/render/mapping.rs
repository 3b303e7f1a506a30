//! Mapping result view

use super::table::Table;
use crate::api::types::MappingResult;

pub const ICD_CODE_COLUMN: &str = "ICD-11 Code";
pub const EXPLANATION_COLUMN: &str = "Explanation";

/// Label of an evidence URL: the fragment after its last `#`, or the whole
/// URL when it has none.
pub fn evidence_label(url: &str) -> &str {
    url.rsplit('#').next().unwrap_or(url)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappingView {
    pub source_text: String,
    pub table: Table,
    pub evidence: Vec<EvidenceLink>,
}

impl From<MappingResult> for MappingView {
    fn from(result: MappingResult) -> Self {
        let rows = result
            .mappings
            .into_iter()
            .map(|entry| vec![entry.icd_code, entry.explanation])
            .collect();
        let evidence = result
            .evidence
            .into_iter()
            .map(|url| EvidenceLink {
                label: evidence_label(&url).to_string(),
                url,
            })
            .collect();

        Self {
            source_text: result.query,
            table: Table::new(
                vec![ICD_CODE_COLUMN.to_string(), EXPLANATION_COLUMN.to_string()],
                rows,
            ),
            evidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::MappingEntry;

    #[test]
    fn test_evidence_label_takes_last_fragment() {
        assert_eq!(evidence_label("http://x/y#ICD11:AB12"), "ICD11:AB12");
        assert_eq!(evidence_label("http://x/y#a#MG26"), "MG26");
        assert_eq!(evidence_label("http://x/y#"), "");
        assert_eq!(evidence_label("http://x/y"), "http://x/y");
    }

    #[test]
    fn test_view_from_result() {
        let view = MappingView::from(MappingResult {
            query: "Jvara (fever)".to_string(),
            mappings: vec![MappingEntry {
                icd_code: "MG26".to_string(),
                explanation: "Both describe fever".to_string(),
            }],
            evidence: vec!["https://icd.who.int/browse11/l-m/en#ICD11:MG26".to_string()],
        });

        assert_eq!(view.source_text, "Jvara (fever)");
        assert_eq!(view.table.headers, vec!["ICD-11 Code", "Explanation"]);
        assert_eq!(view.table.rows, vec![vec!["MG26", "Both describe fever"]]);
        assert_eq!(view.evidence[0].label, "ICD11:MG26");
        assert_eq!(
            view.evidence[0].url,
            "https://icd.who.int/browse11/l-m/en#ICD11:MG26"
        );
    }
}

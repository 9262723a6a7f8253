use seedforge_common::{canonical_hdr_label, hdr_rank, HDR_PRIORITY};

/// HDR slot: canonical labels, deduplicated, in priority order.
///
/// Labels outside the priority list keep their input order after the known ones.
pub fn hdr_slot(labels: &[String]) -> Option<String> {
    let mut canonical: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = canonical_hdr_label(label);
        if !label.is_empty() && !canonical.contains(&label) {
            canonical.push(label);
        }
    }
    canonical.sort_by_key(|label| hdr_rank(label).unwrap_or(HDR_PRIORITY.len()));

    if canonical.is_empty() {
        None
    } else {
        Some(canonical.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(labels: &[&str]) -> Option<String> {
        hdr_slot(&labels.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(slot(&["DV", "HDR10"]).as_deref(), Some("HDR10.DV"));
        assert_eq!(slot(&["HLG", "HDR10+", "Dolby Vision"]).as_deref(), Some("HDR10+.DV.HLG"));
    }

    #[test]
    fn test_dedup_after_canonicalization() {
        assert_eq!(slot(&["dv", "Dolby Vision", "DV"]).as_deref(), Some("DV"));
    }

    #[test]
    fn test_unknown_labels_keep_input_order_last() {
        assert_eq!(
            slot(&["PQ10", "DV", "HDR VIVID", "HDR"]).as_deref(),
            Some("HDR.DV.PQ10.HDR VIVID")
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(slot(&[]), None);
        assert_eq!(slot(&["  "]), None);
    }
}

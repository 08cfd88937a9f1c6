//! Change batch building

use axfr_import_provider::{Change, ChangeAction, ChangeBatch, ResourceRecordSet};

use crate::zonefile::{RecordSetEntry, RecordSets};

impl From<RecordSetEntry> for ResourceRecordSet {
    fn from(entry: RecordSetEntry) -> Self {
        Self {
            name: entry.name,
            record_type: entry.record_type,
            ttl: entry.ttl,
            records: entry.rdata,
        }
    }
}

/// Builds one `action` change per record set, in record-set order.
pub fn build_change_batch(
    record_sets: RecordSets,
    action: ChangeAction,
    comment: Option<String>,
) -> ChangeBatch {
    let changes = record_sets
        .into_iter()
        .map(|entry| Change {
            action,
            record_set: entry.into(),
        })
        .collect();

    ChangeBatch { comment, changes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zonefile::read_record_sets;

    #[test]
    fn one_change_per_record_set_in_order() {
        let sets = read_record_sets(
            "example.com. 300 IN A 1.2.3.4\n\
             example.com. 300 IN NS ns1.\n\
             www.example.com. 300 IN CNAME example.com.\n\
             example.com. 300 IN A 5.6.7.8\n"
                .as_bytes(),
        )
        .unwrap();

        let batch = build_change_batch(sets, ChangeAction::Create, None);
        assert_eq!(batch.len(), 2);
        assert!(batch.comment.is_none());

        let first = &batch.changes[0];
        assert_eq!(first.action, ChangeAction::Create);
        assert_eq!(first.record_set.name, "example.com.");
        assert_eq!(first.record_set.record_type, "A");
        assert_eq!(first.record_set.ttl, 300);
        assert_eq!(first.record_set.records, ["1.2.3.4", "5.6.7.8"]);

        let second = &batch.changes[1];
        assert_eq!(second.record_set.name, "www.example.com.");
        assert_eq!(second.record_set.record_type, "CNAME");
        assert_eq!(second.record_set.records, ["example.com."]);
    }

    #[test]
    fn upsert_action_and_comment_are_applied() {
        let sets = read_record_sets("a.example. 60 IN TXT \"x\"\n".as_bytes()).unwrap();
        let batch = build_change_batch(sets, ChangeAction::Upsert, Some("re-import".to_string()));
        assert_eq!(batch.comment.as_deref(), Some("re-import"));
        assert!(batch
            .changes
            .iter()
            .all(|c| c.action == ChangeAction::Upsert));
    }

    #[test]
    fn empty_record_sets_give_empty_batch() {
        let batch = build_change_batch(RecordSets::default(), ChangeAction::Create, None);
        assert!(batch.is_empty());
    }

    #[test]
    fn batch_serializes_for_dry_run() {
        let sets = read_record_sets("example.com. 300 IN A 1.2.3.4\n".as_bytes()).unwrap();
        let batch = build_change_batch(sets, ChangeAction::Create, None);
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["changes"][0]["action"], "CREATE");
        assert_eq!(json["changes"][0]["recordSet"]["type"], "A");
        assert_eq!(json["changes"][0]["recordSet"]["records"][0], "1.2.3.4");
    }
}

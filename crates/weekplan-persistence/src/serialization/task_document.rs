use serde::{Deserialize, Serialize};
use weekplan_domain::Task;

/// On-disk shape of the task store: `{ "tasks": [ ... ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskDocument {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Serialize)]
struct TaskDocumentRef<'a> {
    tasks: &'a [Task],
}

impl TaskDocument {
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn encode(tasks: &[Task]) -> Result<Vec<u8>, serde_json::Error> {
        let mut bytes = serde_json::to_vec_pretty(&TaskDocumentRef { tasks })?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekplan_domain::Day;

    #[test]
    fn test_decode_plain_document() {
        let json = br#"{"tasks":[{"name":"08:30 standup","day":1,"done":false,"pos":0},{"name":"gym","day":6,"done":true,"pos":2}]}"#;
        let doc = TaskDocument::decode(json).unwrap();
        assert_eq!(doc.tasks.len(), 2);
        assert_eq!(doc.tasks[1].day, Day::new(6).unwrap());
        assert!(doc.tasks[1].done);
        assert_eq!(doc.tasks[1].pos, 2);
    }

    #[test]
    fn test_decode_empty_object() {
        let doc = TaskDocument::decode(b"{}").unwrap();
        assert!(doc.tasks.is_empty());
    }

    #[test]
    fn test_decode_rejects_bad_day() {
        let json = br#"{"tasks":[{"name":"x","day":8,"done":false,"pos":0}]}"#;
        assert!(TaskDocument::decode(json).is_err());
    }

    #[test]
    fn test_encode_writes_tasks_key() {
        let tasks = vec![Task::new("read", Day::INBOX)];
        let bytes = TaskDocument::encode(&tasks).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["tasks"][0]["name"], "read");
        assert_eq!(value["tasks"][0]["day"], 0);
        assert_eq!(value["tasks"][0]["done"], false);
        assert_eq!(value["tasks"][0]["pos"], 0);
    }
}

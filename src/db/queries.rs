use crate::db::Database;
use crate::error::Result;
use crate::models::{AssessmentRecord, Classification};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use tracing::warn;

// Assessment audit log queries. The log is append-only: records are inserted
// once and never updated.

impl Database {
    pub fn insert_assessment(&self, record: &AssessmentRecord) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO assessments
                    (timestamp, classification, input_json, response_json, address, longitude, latitude)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    record.timestamp.to_rfc3339(),
                    record.classification.as_str(),
                    record.input_json,
                    record.response_json,
                    record.address,
                    record.longitude,
                    record.latitude,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn recent_assessments(&self, limit: u32) -> Result<Vec<AssessmentRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT id, timestamp, classification, input_json, response_json,
                       address, longitude, latitude
                FROM assessments
                ORDER BY timestamp DESC, id DESC
                LIMIT ?1
                "#,
            )?;
            let rows = stmt.query_map([limit], row_to_record)?;
            let mut records = Vec::new();
            for row in rows {
                records.push(row?);
            }
            Ok(records)
        })
    }

    pub fn get_assessment(&self, id: i64) -> Result<Option<AssessmentRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT id, timestamp, classification, input_json, response_json,
                       address, longitude, latitude
                FROM assessments
                WHERE id = ?1
                "#,
            )?;
            let mut rows = stmt.query_map([id], row_to_record)?;
            match rows.next() {
                Some(row) => Ok(Some(row?)),
                None => Ok(None),
            }
        })
    }
}

fn row_to_record(row: &Row) -> rusqlite::Result<AssessmentRecord> {
    let timestamp_str: String = row.get("timestamp")?;
    let classification_str: String = row.get("classification")?;

    let classification = Classification::from_str(&classification_str).unwrap_or_else(|| {
        warn!(
            classification = %classification_str,
            "Unknown classification in database, defaulting to Invalid"
        );
        Classification::Invalid
    });

    Ok(AssessmentRecord {
        id: Some(row.get("id")?),
        timestamp: DateTime::parse_from_rfc3339(&timestamp_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
        classification,
        input_json: row.get("input_json")?,
        response_json: row.get("response_json")?,
        address: row.get("address")?,
        longitude: row.get("longitude")?,
        latitude: row.get("latitude")?,
    })
}

// Database schema types and query helpers

use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::SCORING_VERSION;
use crate::enrich::EnrichedClip;
use crate::error::{ClipboyError, Result};

// ----- Video -----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

pub fn upsert_video(
    conn: &Connection,
    id: &str,
    title: &str,
    thumbnail_url: Option<&str>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO videos (id, title, thumbnail_url) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            thumbnail_url = excluded.thumbnail_url,
            updated_at = datetime('now')",
        params![id, title, thumbnail_url],
    )?;
    Ok(())
}

pub fn get_video(conn: &Connection, id: &str) -> Result<Option<Video>> {
    let result = conn
        .query_row(
            "SELECT id, title, thumbnail_url, created_at, updated_at FROM videos WHERE id = ?1",
            params![id],
            |row| {
                Ok(Video {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    thumbnail_url: row.get(2)?,
                    created_at: row.get(3)?,
                    updated_at: row.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(result)
}

// ----- Generated clip -----

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedClip {
    pub id: String,
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub hook: String,
    pub start_sec: f64,
    pub end_sec: f64,
    pub score: i64,
    pub viral_tags: Vec<String>,
    pub score_reasons: String,
    pub scoring_version: u32,
    pub created_at: String,
}

fn clip_from_row(row: &rusqlite::Row) -> rusqlite::Result<GeneratedClip> {
    let tags_json: String = row.get(8)?;
    let viral_tags: Vec<String> = serde_json::from_str(&tags_json).unwrap_or_default();

    Ok(GeneratedClip {
        id: row.get(0)?,
        video_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        hook: row.get(4)?,
        start_sec: row.get(5)?,
        end_sec: row.get(6)?,
        score: row.get(7)?,
        viral_tags,
        score_reasons: row.get(9)?,
        scoring_version: row.get(10)?,
        created_at: row.get(11)?,
    })
}

const CLIP_COLUMNS: &str = "id, video_id, title, description, hook, start_sec, end_sec, score,
                            viral_tags, score_reasons, scoring_version, created_at";

/// Insert one enriched clip for a video. Returns the new clip id.
pub fn insert_generated_clip(
    conn: &Connection,
    video_id: &str,
    clip: &EnrichedClip,
) -> Result<String> {
    let id = Uuid::new_v4().to_string();
    let tags_json = serde_json::to_string(&clip.viral_tags)?;

    conn.execute(
        "INSERT INTO generated_clips (id, video_id, title, description, hook, start_sec, end_sec,
                                      score, viral_tags, score_reasons, scoring_version)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            id,
            video_id,
            clip.title,
            clip.description,
            clip.hook,
            clip.start,
            clip.end,
            clip.score,
            tags_json,
            clip.score_reasons,
            SCORING_VERSION,
        ],
    )?;
    Ok(id)
}

pub fn get_generated_clip(conn: &Connection, id: &str) -> Result<Option<GeneratedClip>> {
    let sql = format!("SELECT {} FROM generated_clips WHERE id = ?1", CLIP_COLUMNS);
    let result = conn.query_row(&sql, params![id], clip_from_row).optional()?;
    Ok(result)
}

pub fn list_generated_clips(conn: &Connection, limit: i64) -> Result<Vec<GeneratedClip>> {
    let sql = format!(
        "SELECT {} FROM generated_clips ORDER BY created_at DESC, id DESC LIMIT ?1",
        CLIP_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let clips = stmt
        .query_map(params![limit], clip_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(clips)
}

pub fn list_clips_for_video(
    conn: &Connection,
    video_id: &str,
    limit: i64,
) -> Result<Vec<GeneratedClip>> {
    let sql = format!(
        "SELECT {} FROM generated_clips WHERE video_id = ?1
         ORDER BY score DESC, created_at DESC LIMIT ?2",
        CLIP_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let clips = stmt
        .query_map(params![video_id, limit], clip_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(clips)
}

// ----- Saved clips -----

pub fn save_clip(conn: &Connection, clip_id: &str) -> Result<()> {
    if get_generated_clip(conn, clip_id)?.is_none() {
        return Err(ClipboyError::ClipNotFound(clip_id.to_string()));
    }
    conn.execute(
        "INSERT OR IGNORE INTO saved_clips (clip_id) VALUES (?1)",
        params![clip_id],
    )?;
    Ok(())
}

pub fn unsave_clip(conn: &Connection, clip_id: &str) -> Result<()> {
    conn.execute(
        "DELETE FROM saved_clips WHERE clip_id = ?1",
        params![clip_id],
    )?;
    Ok(())
}

pub fn is_clip_saved(conn: &Connection, clip_id: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM saved_clips WHERE clip_id = ?1",
        params![clip_id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

pub fn list_saved_clips(conn: &Connection, limit: i64) -> Result<Vec<GeneratedClip>> {
    let sql = "SELECT g.id, g.video_id, g.title, g.description, g.hook, g.start_sec, g.end_sec,
                      g.score, g.viral_tags, g.score_reasons, g.scoring_version, g.created_at
         FROM generated_clips g
         JOIN saved_clips s ON s.clip_id = g.id
         ORDER BY s.created_at DESC LIMIT ?1";
    let mut stmt = conn.prepare(&sql)?;
    let clips = stmt
        .query_map(params![limit], clip_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(clips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_db;
    use crate::enrich::{enrich_clip_with, AnalyzerMode, CandidateClip};
    use crate::scoring::FixedJitter;
    use tempfile::TempDir;

    fn test_conn() -> (TempDir, Connection) {
        let dir = TempDir::new().unwrap();
        let conn = open_db(&dir.path().join("clipboy.db")).unwrap();
        (dir, conn)
    }

    fn enriched_fixture() -> EnrichedClip {
        let candidate = CandidateClip {
            title: "Shocking secret exposed about money".to_string(),
            start: 12.0,
            end: 41.5,
            description: "an expert breakdown".to_string(),
            hook: "wait for it".to_string(),
        };
        enrich_clip_with(&candidate, AnalyzerMode::Full, &mut FixedJitter(0.0))
    }

    #[test]
    fn clip_round_trips_through_storage() {
        let (_dir, conn) = test_conn();
        upsert_video(&conn, "vid1", "Test video", None).unwrap();

        let enriched = enriched_fixture();
        let id = insert_generated_clip(&conn, "vid1", &enriched).unwrap();

        let stored = get_generated_clip(&conn, &id).unwrap().unwrap();
        assert_eq!(stored.score, enriched.score);
        assert_eq!(stored.viral_tags, enriched.viral_tags);
        assert_eq!(stored.score_reasons, enriched.score_reasons);
        assert_eq!(stored.start_sec, enriched.start);
        assert_eq!(stored.end_sec, enriched.end);
    }

    #[test]
    fn save_and_unsave_clip() {
        let (_dir, conn) = test_conn();
        upsert_video(&conn, "vid1", "Test video", None).unwrap();
        let id = insert_generated_clip(&conn, "vid1", &enriched_fixture()).unwrap();

        save_clip(&conn, &id).unwrap();
        assert!(is_clip_saved(&conn, &id).unwrap());
        assert_eq!(list_saved_clips(&conn, 10).unwrap().len(), 1);

        // Saving twice is a no-op
        save_clip(&conn, &id).unwrap();
        assert_eq!(list_saved_clips(&conn, 10).unwrap().len(), 1);

        unsave_clip(&conn, &id).unwrap();
        assert!(!is_clip_saved(&conn, &id).unwrap());
    }

    #[test]
    fn saving_unknown_clip_fails() {
        let (_dir, conn) = test_conn();
        let err = save_clip(&conn, "nope").unwrap_err();
        assert!(matches!(err, ClipboyError::ClipNotFound(_)));
    }

    #[test]
    fn upsert_video_updates_title() {
        let (_dir, conn) = test_conn();
        upsert_video(&conn, "vid1", "First title", None).unwrap();
        upsert_video(&conn, "vid1", "Second title", Some("http://t/1.jpg")).unwrap();

        let video = get_video(&conn, "vid1").unwrap().unwrap();
        assert_eq!(video.title, "Second title");
        assert_eq!(video.thumbnail_url.as_deref(), Some("http://t/1.jpg"));
    }

    #[test]
    fn video_clips_listed_by_score() {
        let (_dir, conn) = test_conn();
        upsert_video(&conn, "vid1", "Test video", None).unwrap();

        let low = enrich_clip_with(
            &CandidateClip {
                title: "pov".to_string(),
                ..Default::default()
            },
            AnalyzerMode::Full,
            &mut FixedJitter(0.0),
        );
        let high = enriched_fixture();
        insert_generated_clip(&conn, "vid1", &low).unwrap();
        insert_generated_clip(&conn, "vid1", &high).unwrap();

        let clips = list_clips_for_video(&conn, "vid1", 10).unwrap();
        assert_eq!(clips.len(), 2);
        assert!(clips[0].score >= clips[1].score);
    }
}

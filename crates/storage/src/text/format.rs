use chrono::{DateTime, Utc};
use spelling_core::model::{MistakeLedger, MistakeNote, SessionHistory, Word};

//
// ─── LEDGER ────────────────────────────────────────────────────────────────────
//

/// Parse `word:count` lines. Malformed lines are skipped.
pub(crate) fn parse_ledger(text: &str) -> MistakeLedger {
    MistakeLedger::from_counts(text.lines().filter_map(parse_ledger_line))
}

fn parse_ledger_line(line: &str) -> Option<(Word, u32)> {
    if line.trim().is_empty() {
        return None;
    }
    let fields: Vec<&str> = line.split(':').collect();
    let parsed = match fields.as_slice() {
        [word, count] => Word::new(word)
            .ok()
            .zip(count.trim().parse::<u32>().ok()),
        _ => None,
    };
    if parsed.is_none() {
        log::debug!("skipping malformed ledger line: {line:?}");
    }
    parsed
}

/// One `word:count` line per word, sorted by word.
pub(crate) fn render_ledger(ledger: &MistakeLedger) -> String {
    let mut rows: Vec<(&Word, u32)> = ledger.counts().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (word, count) in rows {
        out.push_str(word.as_str());
        out.push(':');
        out.push_str(&count.to_string());
        out.push('\n');
    }
    out
}

//
// ─── HISTORY ───────────────────────────────────────────────────────────────────
//

/// Parse comma-joined session lines, keeping the newest `depth`.
pub(crate) fn parse_history(text: &str, depth: usize) -> SessionHistory {
    let sessions = text.lines().filter_map(|line| {
        if line.trim().is_empty() {
            return None;
        }
        let words: Vec<Word> = line
            .split(',')
            .filter_map(|raw| Word::new(raw).ok())
            .collect();
        if words.is_empty() {
            log::debug!("skipping malformed history line: {line:?}");
            return None;
        }
        Some(words)
    });
    SessionHistory::from_sessions(depth, sessions)
}

pub(crate) fn render_history(history: &SessionHistory) -> String {
    let mut out = String::new();
    for session in history.sessions() {
        let line: Vec<&str> = session.iter().map(Word::as_str).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

//
// ─── WORD LIST ─────────────────────────────────────────────────────────────────
//

/// One word per line; blank lines and `#` comments are ignored.
pub(crate) fn parse_word_list(text: &str) -> Vec<Word> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                log::debug!("skipping word list entry {line:?}: {err}");
                None
            }
        })
        .collect()
}

pub(crate) fn render_word_list(words: &[Word]) -> String {
    let mut out = String::new();
    for word in words {
        out.push_str(word.as_str());
        out.push('\n');
    }
    out
}

//
// ─── MISTAKE LOG ───────────────────────────────────────────────────────────────
//

/// `timestamp<TAB>word<TAB>typed`, newline terminated.
pub(crate) fn render_mistake_line(note: &MistakeNote) -> String {
    let typed: String = note
        .typed
        .chars()
        .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
        .collect();
    format!(
        "{}\t{}\t{}\n",
        note.recorded_at.to_rfc3339(),
        note.word.as_str(),
        typed
    )
}

pub(crate) fn parse_mistake_line(line: &str) -> Option<MistakeNote> {
    let mut fields = line.splitn(3, '\t');
    let (Some(at), Some(word), Some(typed)) = (fields.next(), fields.next(), fields.next()) else {
        log::debug!("skipping malformed mistake log line: {line:?}");
        return None;
    };
    let recorded_at = match DateTime::parse_from_rfc3339(at) {
        Ok(at) => at.with_timezone(&Utc),
        Err(err) => {
            log::debug!("skipping mistake log line with bad timestamp {line:?}: {err}");
            return None;
        }
    };
    let word = match Word::new(word) {
        Ok(word) => word,
        Err(err) => {
            log::debug!("skipping mistake log line with bad word {line:?}: {err}");
            return None;
        }
    };
    Some(MistakeNote::new(word, typed, recorded_at))
}

pub(crate) fn parse_mistake_log(text: &str) -> Vec<MistakeNote> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_mistake_line)
        .collect()
}

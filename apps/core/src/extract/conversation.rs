//! Conversation extraction: user/assistant speaker turns.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::Pair;

static SPEAKER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(User|Human|Customer|Assistant|AI|Agent):")
        .expect("Invalid regex: speaker marker")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    User,
    Assistant,
}

fn side_of(speaker: &str) -> Side {
    match speaker.to_ascii_lowercase().as_str() {
        "user" | "human" | "customer" => Side::User,
        _ => Side::Assistant,
    }
}

struct Turn {
    side: Side,
    marker_start: usize,
    content_start: usize,
}

/// Extract (user turn, assistant turn) candidates. A user marker opens a
/// prompt that runs to the next assistant-side marker; the completion runs
/// from there to the next user-side marker or end of text. Leading
/// assistant turns and trailing unanswered user turns are dropped.
pub fn extract(text: &str) -> Vec<Pair> {
    let turns: Vec<Turn> = SPEAKER_MARKER
        .captures_iter(text)
        .map(|c| {
            let whole = c.get(0).expect("match");
            Turn {
                side: side_of(c.get(1).expect("speaker group").as_str()),
                marker_start: whole.start(),
                content_start: whole.end(),
            }
        })
        .collect();

    let mut pairs = Vec::new();
    let mut i = 0;
    while i < turns.len() {
        if turns[i].side != Side::User {
            i += 1;
            continue;
        }

        let Some(reply) = turns[i + 1..]
            .iter()
            .position(|t| t.side == Side::Assistant)
            .map(|offset| i + 1 + offset)
        else {
            break;
        };

        let next_user = turns[reply + 1..]
            .iter()
            .position(|t| t.side == Side::User)
            .map(|offset| reply + 1 + offset);

        let prompt = text[turns[i].content_start..turns[reply].marker_start].trim();
        let completion_end = next_user
            .map(|n| turns[n].marker_start)
            .unwrap_or(text.len());
        let completion = text[turns[reply].content_start..completion_end].trim();

        if !prompt.is_empty() && !completion.is_empty() {
            pairs.push(Pair::tagged(prompt, completion, &["conversation"]));
        }

        match next_user {
            Some(n) => i = n,
            None => break,
        }
    }

    pairs
}

// src/highlights.rs
// Top-3 selection over the flattened digest. Owns the prompt and the response
// parsing; the ranking itself is delegated to the text-generation capability.

use tracing::warn;

use crate::ai::TextGenerator;
use crate::pipeline::DigestItem;
use crate::schedule::DigestMode;

/// The prompt lists at most this many candidates.
pub const PROMPT_ITEM_LIMIT: usize = 30;
pub const MAX_HIGHLIGHTS: usize = 3;

/// Up to 3 short highlight bullets. Empty input makes no generation call;
/// a failed call yields an empty list. Highlights are decorative and never
/// block delivery.
pub async fn pick_top3(
    items: &[DigestItem],
    mode: DigestMode,
    generator: &dyn TextGenerator,
) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    let lines: Vec<String> = items
        .iter()
        .take(PROMPT_ITEM_LIMIT)
        .enumerate()
        .map(|(i, it)| format!("{}) [{}] {} ({})", i + 1, it.topic, it.title, it.published_local_str))
        .collect();

    let prompt = format!(
        "Tu esi naujienų redaktorius. {}.\n\
         Iš pateikto sąrašo parink 3 svarbiausias naujienas.\n\
         \n\
         Taisyklės:\n\
         - Atsakyk tik 3 eilutėmis.\n\
         - Kiekviena eilutė: \"• <antraštė> — <kodėl svarbu (iki 12 žodžių)>\"\n\
         - Lietuviškai.\n\
         \n\
         Sąrašas:\n\
         {}",
        mode.highlight_hint(),
        lines.join("\n"),
    );

    match generator.generate(&prompt).await {
        Ok(out) => out
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(MAX_HIGHLIGHTS)
            .map(str::to_string)
            .collect(),
        Err(e) => {
            warn!(error = ?e, "highlight selection failed");
            Vec::new()
        }
    }
}

use crate::model::Season;

/// Picks the seasons named in `wanted`, in the order they were asked for.
///
/// A name matches a season when, trimmed, it equals the caption or the short code exactly.
/// Names without a match are skipped, repeated names yield repeated seasons.
pub fn resolve(all_leagues: &[Season], wanted: &[String]) -> Vec<Season> {
    wanted
        .iter()
        .filter_map(|name| find(all_leagues, name.trim()))
        .cloned()
        .collect()
}

fn find<'a>(all_leagues: &'a [Season], caption_or_code: &str) -> Option<&'a Season> {
    all_leagues
        .iter()
        .find(|season| season.caption == caption_or_code || season.short_code == caption_or_code)
}
